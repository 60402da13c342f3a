//! Governance and reporting method: a 0 to 100 score over the rigor of the
//! organization's accounting choices.
//!
//! Each choice earns its fixed weight only for the most rigorous option.
//! Narrative fields earn a small fixed amount when filled in. Assumptions
//! enumerate every choice so a reviewer sees the scoring basis without
//! reading the arithmetic.

use serde::{Deserialize, Serialize};

use crate::engine::result::{ModuleResult, UNIT_POINTS};

pub const BOUNDARY_POINTS: f64 = 25.0;
pub const SCOPE_TWO_POINTS: f64 = 25.0;
pub const SCREENING_POINTS: f64 = 20.0;
pub const DATA_QUALITY_POINTS: f64 = 20.0;
pub const NARRATIVE_POINTS: f64 = 5.0;

/// Highest achievable governance score.
pub const MAX_SCORE: f64 =
    BOUNDARY_POINTS + SCOPE_TWO_POINTS + SCREENING_POINTS + DATA_QUALITY_POINTS + 2.0 * NARRATIVE_POINTS;

const BASELINE_TIER: f64 = 50.0;
const LEADING_TIER: f64 = 80.0;

/// How the organizational boundary was drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BoundaryMethod {
    OperationalControl,
    FinancialControl,
    EquityShare,
}

impl BoundaryMethod {
    pub const fn label(&self) -> &'static str {
        match self {
            BoundaryMethod::OperationalControl => "operational control",
            BoundaryMethod::FinancialControl => "financial control",
            BoundaryMethod::EquityShare => "equity share",
        }
    }
}

/// Accounting method for purchased electricity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScopeTwoMethod {
    MarketBased,
    LocationBased,
}

impl ScopeTwoMethod {
    pub const fn label(&self) -> &'static str {
        match self {
            ScopeTwoMethod::MarketBased => "market-based",
            ScopeTwoMethod::LocationBased => "location-based",
        }
    }
}

/// Dominant quality tier of the activity data behind the questionnaire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DataQualityTier {
    Primary,
    Secondary,
    Proxy,
}

impl DataQualityTier {
    pub const fn label(&self) -> &'static str {
        match self {
            DataQualityTier::Primary => "primary activity data",
            DataQualityTier::Secondary => "secondary sources",
            DataQualityTier::Proxy => "proxy estimates",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GovernanceInput {
    #[serde(default)]
    pub boundary_method: Option<BoundaryMethod>,
    #[serde(default)]
    pub scope_two_method: Option<ScopeTwoMethod>,
    #[serde(default)]
    pub value_chain_screening_completed: Option<bool>,
    #[serde(default)]
    pub data_quality_tier: Option<DataQualityTier>,
    #[serde(default)]
    pub climate_strategy_narrative: Option<String>,
    #[serde(default)]
    pub board_oversight_narrative: Option<String>,
}

fn narrative_filled(narrative: &Option<String>) -> bool {
    matches!(narrative, Some(text) if !text.trim().is_empty())
}

pub fn calculate(input: Option<&GovernanceInput>) -> ModuleResult {
    let empty = GovernanceInput::default();
    let input = input.unwrap_or(&empty);

    let mut result = ModuleResult::new(0.0, UNIT_POINTS);
    let mut score = 0.0_f64;
    let mut missing: Vec<(&'static str, f64)> = Vec::new();

    match input.boundary_method {
        Some(BoundaryMethod::OperationalControl) => {
            score += BOUNDARY_POINTS;
            result.trace.push(format!("component: organizational boundary -> +{BOUNDARY_POINTS} points"));
            result.assumptions.push(
                "Organizational boundary uses operational control, the most rigorous method."
                    .to_string(),
            );
        }
        Some(other) => {
            result.trace.push("component: organizational boundary -> +0 points".to_string());
            result.assumptions.push(format!(
                "Organizational boundary uses {}; operational control is the most rigorous method.",
                other.label()
            ));
            missing.push(("an operational-control boundary", BOUNDARY_POINTS));
        }
        None => {
            result.trace.push("component: organizational boundary -> +0 points".to_string());
            result.assumptions.push("Organizational boundary method was not reported.".to_string());
            missing.push(("an operational-control boundary", BOUNDARY_POINTS));
        }
    }

    match input.scope_two_method {
        Some(ScopeTwoMethod::MarketBased) => {
            score += SCOPE_TWO_POINTS;
            result.trace.push(format!("component: electricity accounting -> +{SCOPE_TWO_POINTS} points"));
            result.assumptions.push(
                "Purchased electricity is accounted market-based, reflecting supplier contracts."
                    .to_string(),
            );
        }
        Some(other) => {
            result.trace.push("component: electricity accounting -> +0 points".to_string());
            result.assumptions.push(format!(
                "Purchased electricity is accounted {}; market-based accounting is the most rigorous method.",
                other.label()
            ));
            missing.push(("market-based electricity accounting", SCOPE_TWO_POINTS));
        }
        None => {
            result.trace.push("component: electricity accounting -> +0 points".to_string());
            result.assumptions.push("Electricity accounting method was not reported.".to_string());
            missing.push(("market-based electricity accounting", SCOPE_TWO_POINTS));
        }
    }

    match input.value_chain_screening_completed {
        Some(true) => {
            score += SCREENING_POINTS;
            result.trace.push(format!("component: value-chain screening -> +{SCREENING_POINTS} points"));
            result.assumptions.push("Value-chain screening has been completed.".to_string());
        }
        Some(false) => {
            result.trace.push("component: value-chain screening -> +0 points".to_string());
            result.assumptions.push("Value-chain screening has not been completed.".to_string());
            missing.push(("completing the value-chain screening", SCREENING_POINTS));
        }
        None => {
            result.trace.push("component: value-chain screening -> +0 points".to_string());
            result.assumptions.push("Value-chain screening status was not reported.".to_string());
            missing.push(("completing the value-chain screening", SCREENING_POINTS));
        }
    }

    match input.data_quality_tier {
        Some(DataQualityTier::Primary) => {
            score += DATA_QUALITY_POINTS;
            result.trace.push(format!("component: data quality -> +{DATA_QUALITY_POINTS} points"));
            result.assumptions.push("Reported figures rest on primary activity data.".to_string());
        }
        Some(other) => {
            result.trace.push("component: data quality -> +0 points".to_string());
            result.assumptions.push(format!(
                "Reported figures rest on {}; primary activity data is the most rigorous tier.",
                other.label()
            ));
            missing.push(("primary activity data", DATA_QUALITY_POINTS));
        }
        None => {
            result.trace.push("component: data quality -> +0 points".to_string());
            result.assumptions.push("Data quality tier was not reported.".to_string());
            missing.push(("primary activity data", DATA_QUALITY_POINTS));
        }
    }

    if narrative_filled(&input.climate_strategy_narrative) {
        score += NARRATIVE_POINTS;
        result.trace.push(format!("component: climate strategy narrative -> +{NARRATIVE_POINTS} points"));
        result.assumptions.push("A climate strategy narrative is in place.".to_string());
    } else {
        result.trace.push("component: climate strategy narrative -> +0 points".to_string());
        result.assumptions.push("No climate strategy narrative was provided.".to_string());
        missing.push(("a climate strategy narrative", NARRATIVE_POINTS));
    }

    if narrative_filled(&input.board_oversight_narrative) {
        score += NARRATIVE_POINTS;
        result.trace.push(format!("component: board oversight narrative -> +{NARRATIVE_POINTS} points"));
        result.assumptions.push("Board-level oversight of climate topics is described.".to_string());
    } else {
        result.trace.push("component: board oversight narrative -> +0 points".to_string());
        result.assumptions.push("No board oversight narrative was provided.".to_string());
        missing.push(("a board oversight narrative", NARRATIVE_POINTS));
    }

    let next_tier = if score < BASELINE_TIER {
        Some(BASELINE_TIER)
    } else if score < LEADING_TIER {
        Some(LEADING_TIER)
    } else {
        None
    };
    if let Some(tier) = next_tier {
        // The missing list is never empty below the leading tier.
        if let Some((recommendation, points)) = missing
            .iter()
            .max_by(|a, b| a.1.total_cmp(&b.1))
        {
            result.warnings.push(format!(
                "Score {score} of {MAX_SCORE} is below the {tier}-point tier; {recommendation} would add {points} points."
            ));
        }
    }

    result.trace.push(format!("total: {score} {UNIT_POINTS}"));
    result.value = score;
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn best_practice() -> GovernanceInput {
        GovernanceInput {
            boundary_method: Some(BoundaryMethod::OperationalControl),
            scope_two_method: Some(ScopeTwoMethod::MarketBased),
            value_chain_screening_completed: Some(true),
            data_quality_tier: Some(DataQualityTier::Primary),
            climate_strategy_narrative: Some("Net zero by 2040 across scopes 1 and 2.".to_string()),
            board_oversight_narrative: Some("Quarterly board review of the transition plan.".to_string()),
        }
    }

    #[test]
    fn all_best_practice_choices_reach_the_maximum_score() {
        let result = calculate(Some(&best_practice()));

        assert_eq!(MAX_SCORE, 100.0);
        assert_eq!(result.value, MAX_SCORE);
        assert_eq!(result.unit, "points");
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn less_rigorous_choices_earn_no_points_but_are_enumerated() {
        let mut input = best_practice();
        input.boundary_method = Some(BoundaryMethod::EquityShare);

        let result = calculate(Some(&input));

        assert_eq!(result.value, MAX_SCORE - BOUNDARY_POINTS);
        assert!(result
            .assumptions
            .iter()
            .any(|a| a.contains("equity share")));
        assert!(result.trace.contains(&"component: organizational boundary -> +0 points".to_string()));
    }

    #[test]
    fn blank_narrative_earns_nothing() {
        let mut input = best_practice();
        input.climate_strategy_narrative = Some("   ".to_string());

        let result = calculate(Some(&input));

        assert_eq!(result.value, MAX_SCORE - NARRATIVE_POINTS);
    }

    #[test]
    fn warning_recommends_the_biggest_missing_choice_toward_the_next_tier() {
        let input = GovernanceInput {
            boundary_method: Some(BoundaryMethod::OperationalControl),
            scope_two_method: Some(ScopeTwoMethod::LocationBased),
            value_chain_screening_completed: Some(true),
            data_quality_tier: Some(DataQualityTier::Secondary),
            climate_strategy_narrative: Some("Reduction roadmap agreed.".to_string()),
            board_oversight_narrative: None,
        };

        let result = calculate(Some(&input));

        assert_eq!(result.value, 50.0);
        assert_eq!(result.warnings.len(), 1);
        assert!(result.warnings[0].contains("80-point tier"));
        assert!(result.warnings[0].contains("market-based electricity accounting"));
        assert!(result.warnings[0].contains("25 points"));
    }

    #[test]
    fn untouched_questionnaire_scores_zero_with_every_choice_enumerated() {
        let result = calculate(None);

        assert_eq!(result.value, 0.0);
        assert_eq!(result.assumptions.len(), 6);
        assert!(result.warnings[0].contains("50-point tier"));
    }

    #[test]
    fn score_components_in_the_trace_sum_to_the_value() {
        let mut input = best_practice();
        input.value_chain_screening_completed = Some(false);

        let result = calculate(Some(&input));

        let reconstructed: f64 = result
            .trace
            .iter()
            .filter(|line| line.starts_with("component: "))
            .map(|line| {
                let arrow = line.split("-> ").nth(1).expect("component line has an arrow");
                arrow
                    .trim_end_matches(" points")
                    .parse::<f64>()
                    .expect("component contribution parses")
            })
            .sum();
        assert_eq!(reconstructed, result.value);
    }
}
