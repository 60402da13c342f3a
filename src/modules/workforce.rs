//! Own workforce: a 0 to 100 score over social protection coverage and
//! workplace incidents.
//!
//! The base score is the headcount-weighted average of social protection
//! coverage across workforce segments. Unresolved incidents deduct points by
//! severity. Aggregation is a weighted average of percentages, never a sum of
//! quantities.

use serde::{Deserialize, Serialize};

use crate::engine::numeric::{safe_divide, weighted_average};
use crate::engine::quality::QualityLog;
use crate::engine::result::{ModuleResult, UNIT_POINTS};
use crate::modules::{unresolved_penalty, RemediationStatus, Severity};

/// Reported coverage below this percentage triggers a review warning.
pub const COVERAGE_BENCHMARK: f64 = 70.0;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkforceInput {
    #[serde(default)]
    pub collective_agreement_coverage_percent: Option<f64>,
    #[serde(default)]
    pub segments: Vec<WorkforceSegment>,
    #[serde(default)]
    pub incidents: Vec<WorkforceIncident>,
}

/// One workforce segment: a site, a job family, or a contract type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkforceSegment {
    pub label: String,
    #[serde(default)]
    pub headcount: Option<f64>,
    #[serde(default)]
    pub social_protection_coverage_percent: Option<f64>,
    #[serde(default)]
    pub documentation_quality_percent: Option<f64>,
}

/// One reported workplace incident.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkforceIncident {
    pub description: String,
    pub severity: Severity,
    pub remediation_status: RemediationStatus,
    #[serde(default)]
    pub documentation_quality_percent: Option<f64>,
}

pub fn calculate(input: Option<&WorkforceInput>) -> ModuleResult {
    let empty = WorkforceInput::default();
    let input = input.unwrap_or(&empty);

    let mut result = ModuleResult::new(0.0, UNIT_POINTS);

    if input.segments.is_empty()
        && input.incidents.is_empty()
        && input.collective_agreement_coverage_percent.is_none()
    {
        result
            .assumptions
            .push("No workforce data was reported; the module score is zero.".to_string());
        result.trace.push(format!("total: 0 {UNIT_POINTS}"));
        return result;
    }

    let mut quality = QualityLog::new();
    let mut score = 0.0_f64;

    // Weight only the segments that reported a coverage percentage.
    let total_weight: f64 = input
        .segments
        .iter()
        .filter(|segment| segment.social_protection_coverage_percent.is_some())
        .map(|segment| segment.headcount.unwrap_or(1.0))
        .sum();
    let mut covered: Vec<(f64, f64)> = Vec::new();
    let mut defaulted_weights = 0usize;

    for (index, segment) in input.segments.iter().enumerate() {
        quality.observe(&segment.label, segment.documentation_quality_percent, &mut result.warnings);

        let Some(coverage) = segment.social_protection_coverage_percent else {
            result.trace.push(format!(
                "entry[{index}]: {label}, no coverage reported -> 0 {UNIT_POINTS}",
                label = segment.label,
            ));
            continue;
        };
        let weight = match segment.headcount {
            Some(headcount) => headcount,
            None => {
                defaulted_weights += 1;
                1.0
            }
        };
        covered.push((coverage, weight));
        let share = safe_divide(coverage * weight, total_weight).unwrap_or(0.0);
        score += share;
        result.trace.push(format!(
            "entry[{index}]: {label}, coverage {coverage}%, weight {weight} -> {share} {UNIT_POINTS}",
            label = segment.label,
        ));
    }

    if covered.is_empty() {
        if let Some(coverage) = input.collective_agreement_coverage_percent {
            score += coverage;
            result.trace.push(format!(
                "baseline: collective agreement coverage {coverage}% -> {coverage} {UNIT_POINTS}"
            ));
        } else if !input.segments.is_empty() || !input.incidents.is_empty() {
            result
                .assumptions
                .push("No coverage percentages were reported; the score starts from zero.".to_string());
        }
    } else if let Some(average) = weighted_average(&covered) {
        if average < COVERAGE_BENCHMARK {
            result.warnings.push(format!(
                "Social protection coverage averages {average}%, below the {COVERAGE_BENCHMARK}% benchmark."
            ));
        }
    }

    if defaulted_weights > 0 {
        result.assumptions.push(format!(
            "{defaulted_weights} of {count} segments reported no headcount and were weighted equally.",
            count = input.segments.len(),
        ));
    }

    if let Some(coverage) = input.collective_agreement_coverage_percent {
        if coverage < COVERAGE_BENCHMARK {
            result.warnings.push(format!(
                "Collective agreement coverage is {coverage}%, below the {COVERAGE_BENCHMARK}% benchmark."
            ));
        }
    }

    for (index, incident) in input.incidents.iter().enumerate() {
        quality.observe(&incident.description, incident.documentation_quality_percent, &mut result.warnings);

        let penalty = unresolved_penalty(incident.severity, incident.remediation_status);
        score -= penalty;
        result.trace.push(format!(
            "incident[{index}]: {description}, {severity} severity, remediation {status} -> -{penalty} {UNIT_POINTS}",
            description = incident.description,
            severity = incident.severity.label(),
            status = incident.remediation_status.label(),
        ));
        if incident.severity == Severity::High
            && incident.remediation_status == RemediationStatus::NoPlan
        {
            result.warnings.push(format!(
                "High-severity incident '{description}' has no remediation plan.",
                description = incident.description,
            ));
        }
    }

    if score < 0.0 {
        result.trace.push(format!("floor: score raised to 0 {UNIT_POINTS}"));
        score = 0.0;
    } else if score > 100.0 {
        result.trace.push(format!("cap: score capped at 100 {UNIT_POINTS}"));
        score = 100.0;
    }

    quality.summarize(&mut result.trace);
    result.trace.push(format!("total: {score} {UNIT_POINTS}"));
    result.value = score;
    result
}
