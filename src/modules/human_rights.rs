//! Human rights due diligence: a 0 to 100 score over how much of the value
//! chain the organization's due diligence processes reach.

use serde::{Deserialize, Serialize};

use crate::engine::numeric::{safe_divide, weighted_average};
use crate::engine::quality::QualityLog;
use crate::engine::result::{ModuleResult, UNIT_POINTS};
use crate::modules::{unresolved_penalty, RemediationStatus, Severity};

/// Average due diligence coverage below this percentage triggers a warning.
pub const COVERAGE_BENCHMARK: f64 = 50.0;

/// Where in the value chain a due diligence process operates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ValueChainStage {
    OwnOperations,
    Upstream,
    Downstream,
}

impl ValueChainStage {
    pub const fn label(&self) -> &'static str {
        match self {
            ValueChainStage::OwnOperations => "own operations",
            ValueChainStage::Upstream => "upstream",
            ValueChainStage::Downstream => "downstream",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HumanRightsInput {
    #[serde(default)]
    pub policy_commitment_published: Option<bool>,
    #[serde(default)]
    pub processes: Vec<DueDiligenceProcess>,
}

/// One due diligence process and, when an assessment found something, its
/// most severe open finding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DueDiligenceProcess {
    pub label: String,
    pub stage: ValueChainStage,
    #[serde(default)]
    pub coverage_percent: Option<f64>,
    #[serde(default)]
    pub suppliers_in_scope: Option<f64>,
    #[serde(default)]
    pub finding_severity: Option<Severity>,
    #[serde(default)]
    pub remediation_status: Option<RemediationStatus>,
    #[serde(default)]
    pub documentation_quality_percent: Option<f64>,
}

pub fn calculate(input: Option<&HumanRightsInput>) -> ModuleResult {
    let empty = HumanRightsInput::default();
    let input = input.unwrap_or(&empty);

    let mut result = ModuleResult::new(0.0, UNIT_POINTS);

    if input.processes.is_empty() && input.policy_commitment_published.is_none() {
        result
            .assumptions
            .push("No human rights data was reported; the module score is zero.".to_string());
        result.trace.push(format!("total: 0 {UNIT_POINTS}"));
        return result;
    }

    match input.policy_commitment_published {
        Some(true) => result
            .trace
            .push("policy: human rights commitment published".to_string()),
        Some(false) => result
            .warnings
            .push("No published human rights policy commitment.".to_string()),
        None => result
            .assumptions
            .push("Policy commitment status was not reported.".to_string()),
    }

    if input.processes.is_empty() {
        result.assumptions.push(
            "No due diligence processes were recorded; the score is zero.".to_string(),
        );
        result.trace.push(format!("total: 0 {UNIT_POINTS}"));
        return result;
    }

    let mut quality = QualityLog::new();
    let mut score = 0.0_f64;

    let total_weight: f64 = input
        .processes
        .iter()
        .filter(|process| process.coverage_percent.is_some())
        .map(|process| process.suppliers_in_scope.unwrap_or(1.0))
        .sum();
    let mut covered: Vec<(f64, f64)> = Vec::new();
    let mut defaulted_weights = 0usize;

    for (index, process) in input.processes.iter().enumerate() {
        quality.observe(&process.label, process.documentation_quality_percent, &mut result.warnings);

        match process.coverage_percent {
            Some(coverage) => {
                let weight = match process.suppliers_in_scope {
                    Some(count) => count,
                    None => {
                        defaulted_weights += 1;
                        1.0
                    }
                };
                covered.push((coverage, weight));
                let share = safe_divide(coverage * weight, total_weight).unwrap_or(0.0);
                score += share;
                result.trace.push(format!(
                    "entry[{index}]: {label} ({stage}), coverage {coverage}%, weight {weight} -> {share} {UNIT_POINTS}",
                    label = process.label,
                    stage = process.stage.label(),
                ));
            }
            None => {
                result.trace.push(format!(
                    "entry[{index}]: {label} ({stage}), no coverage reported -> 0 {UNIT_POINTS}",
                    label = process.label,
                    stage = process.stage.label(),
                ));
            }
        }

        if let Some(severity) = process.finding_severity {
            let status = match process.remediation_status {
                Some(status) => status,
                None => {
                    result.assumptions.push(format!(
                        "Remediation status for '{label}' was not reported; treated as having no plan.",
                        label = process.label,
                    ));
                    RemediationStatus::NoPlan
                }
            };
            let penalty = unresolved_penalty(severity, status);
            if penalty > 0.0 {
                score -= penalty;
                result.trace.push(format!(
                    "penalty[{index}]: {label}, {severity} finding, remediation {status} -> -{penalty} {UNIT_POINTS}",
                    label = process.label,
                    severity = severity.label(),
                    status = status.label(),
                ));
            }
            if severity == Severity::High && status == RemediationStatus::NoPlan {
                result.warnings.push(format!(
                    "High-severity finding in '{label}' has no remediation plan.",
                    label = process.label,
                ));
            }
        }
    }

    if let Some(average) = weighted_average(&covered) {
        if average < COVERAGE_BENCHMARK {
            result.warnings.push(format!(
                "Due diligence coverage averages {average}%, below the {COVERAGE_BENCHMARK}% benchmark."
            ));
        }
    }

    if defaulted_weights > 0 {
        result.assumptions.push(format!(
            "{defaulted_weights} of {count} processes reported no supplier count and were weighted equally.",
            count = input.processes.len(),
        ));
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
