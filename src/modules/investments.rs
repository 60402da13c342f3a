//! Investments: financed emissions estimated from invested value per asset
//! class.

use serde::{Deserialize, Serialize};

use crate::engine::quality::QualityLog;
use crate::engine::result::{ModuleResult, UNIT_KG_CO2E};
use crate::factors::investments::{self, AssetClass, INVESTMENT_FACTORS};
use crate::factors::resolve_factor;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentsInput {
    #[serde(default)]
    pub entries: Vec<InvestmentEntry>,
}

/// One position or pooled holding in the investment portfolio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentEntry {
    pub label: String,
    pub asset_class: AssetClass,
    #[serde(default)]
    pub invested_value_dkk: Option<f64>,
    #[serde(default)]
    pub factor_key: Option<String>,
    #[serde(default)]
    pub documentation_quality_percent: Option<f64>,
}

pub fn calculate(input: Option<&InvestmentsInput>) -> ModuleResult {
    let entries = input.map(|section| section.entries.as_slice()).unwrap_or(&[]);
    let mut result = ModuleResult::new(0.0, UNIT_KG_CO2E);

    if entries.is_empty() {
        result
            .assumptions
            .push("No investments were reported; the module total is zero.".to_string());
        result.trace.push(format!("total: 0 {UNIT_KG_CO2E}"));
        return result;
    }

    let mut quality = QualityLog::new();
    let mut defaulted_classes: Vec<AssetClass> = Vec::new();
    let mut total = 0.0_f64;

    for (index, entry) in entries.iter().enumerate() {
        quality.observe(&entry.label, entry.documentation_quality_percent, &mut result.warnings);

        let resolved = resolve_factor(
            &INVESTMENT_FACTORS,
            entry.factor_key.as_deref(),
            investments::default_factor_key(entry.asset_class),
        );

        let Some(value) = entry.invested_value_dkk else {
            result.trace.push(format!(
                "entry[{index}]: {label}, no invested value reported -> 0 {UNIT_KG_CO2E}",
                label = entry.label,
            ));
            continue;
        };

        if resolved.defaulted && !defaulted_classes.contains(&entry.asset_class) {
            defaulted_classes.push(entry.asset_class);
        }

        let contribution = value * resolved.entry.factor;
        total += contribution;
        result.trace.push(format!(
            "entry[{index}]: {label}, {value} DKK x {factor} {factor_unit} -> {contribution} {UNIT_KG_CO2E}",
            label = entry.label,
            factor = resolved.entry.factor,
            factor_unit = resolved.entry.unit,
        ));
    }

    for class in &defaulted_classes {
        result.assumptions.push(format!(
            "Average {class} factor applied where no specific factor was selected.",
            class = class.label(),
        ));
    }

    quality.summarize(&mut result.trace);
    result.trace.push(format!("total: {total} {UNIT_KG_CO2E}"));
    result.value = total;
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn position(label: &str, class: AssetClass, dkk: f64) -> InvestmentEntry {
        InvestmentEntry {
            label: label.to_string(),
            asset_class: class,
            invested_value_dkk: Some(dkk),
            factor_key: None,
            documentation_quality_percent: None,
        }
    }

    #[test]
    fn invested_value_multiplies_the_asset_class_factor() {
        let input = InvestmentsInput {
            entries: vec![position("pension pool", AssetClass::ListedEquity, 5_000_000.0)],
        };

        let result = calculate(Some(&input));

        assert_eq!(result.value, 5_000_000.0 * 0.021);
        assert_eq!(
            result.assumptions,
            vec!["Average listed equity factor applied where no specific factor was selected.".to_string()]
        );
    }

    #[test]
    fn portfolio_positions_add_up() {
        let input = InvestmentsInput {
            entries: vec![
                position("bond ladder", AssetClass::CorporateBonds, 1_000_000.0),
                position("wind project stake", AssetClass::ProjectFinance, 250_000.0),
            ],
        };

        let result = calculate(Some(&input));

        assert_eq!(result.value, 1_000_000.0 * 0.015 + 250_000.0 * 0.040);
    }

    #[test]
    fn missing_invested_value_traces_zero() {
        let mut entry = position("holding under valuation", AssetClass::PrivateEquity, 0.0);
        entry.invested_value_dkk = None;
        let input = InvestmentsInput { entries: vec![entry] };

        let result = calculate(Some(&input));

        assert_eq!(result.value, 0.0);
        assert!(result.trace[0].contains("no invested value reported -> 0 kg CO2e"));
    }
}
