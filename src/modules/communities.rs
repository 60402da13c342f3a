//! Affected communities: a 0 to 100 score over engagement coverage for the
//! communities an organization's operations touch.
//!
//! The base score is the population-weighted average of engagement coverage
//! across identified impacts. Unresolved impacts deduct points by severity,
//! whether or not they reported coverage.

use serde::{Deserialize, Serialize};

use crate::engine::numeric::{safe_divide, weighted_average};
use crate::engine::quality::QualityLog;
use crate::engine::result::{ModuleResult, UNIT_POINTS};
use crate::modules::{unresolved_penalty, RemediationStatus, Severity};

/// Average engagement coverage below this percentage triggers a warning.
pub const ENGAGEMENT_BENCHMARK: f64 = 60.0;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunitiesInput {
    #[serde(default)]
    pub engagement_policy_in_place: Option<bool>,
    #[serde(default)]
    pub impacts: Vec<CommunityImpact>,
}

/// One identified impact on a community near operations or the value chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunityImpact {
    pub label: String,
    #[serde(default)]
    pub affected_population: Option<f64>,
    #[serde(default)]
    pub engagement_coverage_percent: Option<f64>,
    pub severity: Severity,
    pub remediation_status: RemediationStatus,
    #[serde(default)]
    pub documentation_quality_percent: Option<f64>,
}

pub fn calculate(input: Option<&CommunitiesInput>) -> ModuleResult {
    let empty = CommunitiesInput::default();
    let input = input.unwrap_or(&empty);

    let mut result = ModuleResult::new(0.0, UNIT_POINTS);

    if input.impacts.is_empty() && input.engagement_policy_in_place.is_none() {
        result
            .assumptions
            .push("No community data was reported; the module score is zero.".to_string());
        result.trace.push(format!("total: 0 {UNIT_POINTS}"));
        return result;
    }

    match input.engagement_policy_in_place {
        Some(true) => result
            .trace
            .push("policy: community engagement policy in place".to_string()),
        Some(false) => result
            .warnings
            .push("No community engagement policy is in place.".to_string()),
        None => result
            .assumptions
            .push("Engagement policy status was not reported.".to_string()),
    }

    if input.impacts.is_empty() {
        result.assumptions.push(
            "No community impacts were recorded; the score is zero pending impact mapping."
                .to_string(),
        );
        result.trace.push(format!("total: 0 {UNIT_POINTS}"));
        return result;
    }

    let mut quality = QualityLog::new();
    let mut score = 0.0_f64;

    let total_weight: f64 = input
        .impacts
        .iter()
        .filter(|impact| impact.engagement_coverage_percent.is_some())
        .map(|impact| impact.affected_population.unwrap_or(1.0))
        .sum();
    let mut covered: Vec<(f64, f64)> = Vec::new();
    let mut defaulted_weights = 0usize;

    for (index, impact) in input.impacts.iter().enumerate() {
        quality.observe(&impact.label, impact.documentation_quality_percent, &mut result.warnings);

        match impact.engagement_coverage_percent {
            Some(coverage) => {
                let weight = match impact.affected_population {
                    Some(population) => population,
                    None => {
                        defaulted_weights += 1;
                        1.0
                    }
                };
                covered.push((coverage, weight));
                let share = safe_divide(coverage * weight, total_weight).unwrap_or(0.0);
                score += share;
                result.trace.push(format!(
                    "entry[{index}]: {label}, engagement {coverage}%, weight {weight} -> {share} {UNIT_POINTS}",
                    label = impact.label,
                ));
            }
            None => {
                result.trace.push(format!(
                    "entry[{index}]: {label}, no engagement coverage reported -> 0 {UNIT_POINTS}",
                    label = impact.label,
                ));
            }
        }

        let penalty = unresolved_penalty(impact.severity, impact.remediation_status);
        if penalty > 0.0 {
            score -= penalty;
            result.trace.push(format!(
                "penalty[{index}]: {label}, {severity} severity, remediation {status} -> -{penalty} {UNIT_POINTS}",
                label = impact.label,
                severity = impact.severity.label(),
                status = impact.remediation_status.label(),
            ));
        }
        if impact.severity == Severity::High
            && impact.remediation_status == RemediationStatus::NoPlan
        {
            result.warnings.push(format!(
                "High-severity impact '{label}' has no remediation plan.",
                label = impact.label,
            ));
        }
    }

    if let Some(average) = weighted_average(&covered) {
        if average < ENGAGEMENT_BENCHMARK {
            result.warnings.push(format!(
                "Community engagement coverage averages {average}%, below the {ENGAGEMENT_BENCHMARK}% benchmark."
            ));
        }
    }

    if defaulted_weights > 0 {
        result.assumptions.push(format!(
            "{defaulted_weights} of {count} impacts reported no affected population and were weighted equally.",
            count = input.impacts.len(),
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
