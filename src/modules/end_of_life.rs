//! End-of-life treatment of sold products.
//!
//! Tonnage per product category, multiplied by the factor of the treatment
//! route the products are expected to enter.

use serde::{Deserialize, Serialize};

use crate::engine::quality::QualityLog;
use crate::engine::result::{ModuleResult, UNIT_KG_CO2E};
use crate::factors::resolve_factor;
use crate::factors::treatment::{self, ProductCategory, TREATMENT_FACTORS};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndOfLifeInput {
    #[serde(default)]
    pub entries: Vec<SoldProductEntry>,
}

/// One product group placed on the market during the reporting year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SoldProductEntry {
    pub label: String,
    pub product_category: ProductCategory,
    #[serde(default)]
    pub tonnes_sold: Option<f64>,
    #[serde(default)]
    pub treatment_key: Option<String>,
    #[serde(default)]
    pub documentation_quality_percent: Option<f64>,
}

pub fn calculate(input: Option<&EndOfLifeInput>) -> ModuleResult {
    let entries = input.map(|section| section.entries.as_slice()).unwrap_or(&[]);
    let mut result = ModuleResult::new(0.0, UNIT_KG_CO2E);

    if entries.is_empty() {
        result
            .assumptions
            .push("No sold products were reported; the module total is zero.".to_string());
        result.trace.push(format!("total: 0 {UNIT_KG_CO2E}"));
        return result;
    }

    let mut quality = QualityLog::new();
    let mut defaulted_categories: Vec<ProductCategory> = Vec::new();
    let mut total = 0.0_f64;

    for (index, entry) in entries.iter().enumerate() {
        quality.observe(&entry.label, entry.documentation_quality_percent, &mut result.warnings);

        let resolved = resolve_factor(
            &TREATMENT_FACTORS,
            entry.treatment_key.as_deref(),
            treatment::default_treatment_key(entry.product_category),
        );

        let Some(tonnes) = entry.tonnes_sold else {
            result.trace.push(format!(
                "entry[{index}]: {label}, no tonnage reported -> 0 {UNIT_KG_CO2E}",
                label = entry.label,
            ));
            continue;
        };

        if resolved.defaulted && !defaulted_categories.contains(&entry.product_category) {
            defaulted_categories.push(entry.product_category);
        }

        let contribution = tonnes * resolved.entry.factor;
        total += contribution;
        result.trace.push(format!(
            "entry[{index}]: {label}, {tonnes} tonnes x {factor} {factor_unit} -> {contribution} {UNIT_KG_CO2E}",
            label = entry.label,
            factor = resolved.entry.factor,
            factor_unit = resolved.entry.unit,
        ));
    }

    for category in &defaulted_categories {
        let default = TREATMENT_FACTORS.get(treatment::default_treatment_key(*category));
        result.assumptions.push(format!(
            "Treatment for {category} defaulted to {treatment}.",
            category = category.label(),
            treatment = default.label,
        ));
    }

    quality.summarize(&mut result.trace);
    result.trace.push(format!("total: {total} {UNIT_KG_CO2E}"));
    result.value = total;
    result
}
