//! Documentation-quality policy applied uniformly across every module.
//!
//! A reported quality below the threshold warns exactly once per entry. An
//! absent quality is not a warning: missing evidence is recorded through the
//! coverage summary in the trace instead.

/// Reported documentation quality below this percentage triggers a review
/// warning. A value of exactly the threshold does not warn.
pub const DOC_QUALITY_WARNING_BELOW: f64 = 60.0;

/// Accumulates per-entry quality observations for one module run.
#[derive(Debug, Default)]
pub struct QualityLog {
    observed: Vec<f64>,
    total_entries: usize,
}

impl QualityLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one entry. Pushes a warning when the reported quality is below
    /// the threshold; stays silent when it is absent or at/above it.
    pub fn observe(&mut self, label: &str, quality_percent: Option<f64>, warnings: &mut Vec<String>) {
        self.total_entries += 1;
        let Some(quality) = quality_percent else {
            return;
        };
        self.observed.push(quality);
        if quality < DOC_QUALITY_WARNING_BELOW {
            warnings.push(format!(
                "Documentation quality for '{label}' is {quality}%, below the {DOC_QUALITY_WARNING_BELOW}% review threshold."
            ));
        }
    }

    /// Append the coverage summary to the trace. Silent when no entry
    /// reported a quality at all.
    pub fn summarize(&self, trace: &mut Vec<String>) {
        if self.observed.is_empty() {
            return;
        }
        let average = self.observed.iter().sum::<f64>() / self.observed.len() as f64;
        trace.push(format!(
            "documentation quality averaged {average}% across {reported} of {total} entries",
            reported = self.observed.len(),
            total = self.total_entries,
        ));
    }
}
