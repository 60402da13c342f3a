//! Value-chain screening: spend-based estimates across procurement, waste,
//! travel, and commuting categories.

use serde::{Deserialize, Serialize};

use crate::engine::quality::QualityLog;
use crate::engine::result::{ModuleResult, UNIT_KG_CO2E};
use crate::factors::resolve_factor;
use crate::factors::screening::{self, ScreeningCategory, SCREENING_FACTORS};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreeningInput {
    #[serde(default)]
    pub entries: Vec<SpendEntry>,
}

/// One spend line within a screening category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpendEntry {
    pub label: String,
    pub category: ScreeningCategory,
    #[serde(default)]
    pub annual_spend_dkk: Option<f64>,
    #[serde(default)]
    pub factor_key: Option<String>,
    #[serde(default)]
    pub documentation_quality_percent: Option<f64>,
}

pub fn calculate(input: Option<&ScreeningInput>) -> ModuleResult {
    let entries = input.map(|section| section.entries.as_slice()).unwrap_or(&[]);
    let mut result = ModuleResult::new(0.0, UNIT_KG_CO2E);

    if entries.is_empty() {
        result
            .assumptions
            .push("No value-chain spend was reported; the module total is zero.".to_string());
        result.trace.push(format!("total: 0 {UNIT_KG_CO2E}"));
        return result;
    }

    let mut quality = QualityLog::new();
    let mut defaulted_categories: Vec<ScreeningCategory> = Vec::new();
    let mut total = 0.0_f64;

    for (index, entry) in entries.iter().enumerate() {
        quality.observe(&entry.label, entry.documentation_quality_percent, &mut result.warnings);

        let resolved = resolve_factor(
            &SCREENING_FACTORS,
            entry.factor_key.as_deref(),
            screening::default_factor_key(entry.category),
        );

        let Some(spend) = entry.annual_spend_dkk else {
            result.trace.push(format!(
                "entry[{index}]: {label}, no annual spend reported -> 0 {UNIT_KG_CO2E}",
                label = entry.label,
            ));
            continue;
        };

        if resolved.defaulted && !defaulted_categories.contains(&entry.category) {
            defaulted_categories.push(entry.category);
        }

        let contribution = spend * resolved.entry.factor;
        total += contribution;
        result.trace.push(format!(
            "entry[{index}]: {label}, {spend} DKK x {factor} {factor_unit} -> {contribution} {UNIT_KG_CO2E}",
            label = entry.label,
            factor = resolved.entry.factor,
            factor_unit = resolved.entry.unit,
        ));
    }

    for category in &defaulted_categories {
        result.assumptions.push(format!(
            "Average {category} factor applied where no specific factor was selected.",
            category = category.label(),
        ));
    }

    quality.summarize(&mut result.trace);
    result.trace.push(format!("total: {total} {UNIT_KG_CO2E}"));
    result.value = total;
    result
}
