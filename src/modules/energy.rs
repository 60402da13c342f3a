//! Purchased energy and utilities.
//!
//! Metered consumption per carrier, multiplied by the carrier's emission
//! factor. A missing meter reading is proxied from heated floor area when one
//! is reported; a row with neither contributes zero.

use serde::{Deserialize, Serialize};

use crate::engine::quality::QualityLog;
use crate::engine::result::{ModuleResult, UNIT_KG_CO2E};
use crate::factors::energy::{
    self, EnergyCarrier, ENERGY_FACTORS, FLOOR_AREA_INTENSITIES,
};
use crate::factors::resolve_factor;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchasedEnergyInput {
    #[serde(default)]
    pub entries: Vec<EnergyEntry>,
}

/// One purchased-energy line: a meter point, a building, or a supply
/// contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnergyEntry {
    pub label: String,
    pub carrier: EnergyCarrier,
    #[serde(default)]
    pub consumption_kwh: Option<f64>,
    #[serde(default)]
    pub floor_area_sqm: Option<f64>,
    #[serde(default)]
    pub emission_factor_key: Option<String>,
    #[serde(default)]
    pub documentation_quality_percent: Option<f64>,
}

pub fn calculate(input: Option<&PurchasedEnergyInput>) -> ModuleResult {
    let entries = input.map(|section| section.entries.as_slice()).unwrap_or(&[]);
    let mut result = ModuleResult::new(0.0, UNIT_KG_CO2E);

    if entries.is_empty() {
        result
            .assumptions
            .push("No purchased energy was reported; the module total is zero.".to_string());
        result.trace.push(format!("total: 0 {UNIT_KG_CO2E}"));
        return result;
    }

    let mut quality = QualityLog::new();
    let mut defaulted_factors = 0usize;
    let mut total = 0.0_f64;

    for (index, entry) in entries.iter().enumerate() {
        quality.observe(&entry.label, entry.documentation_quality_percent, &mut result.warnings);

        let resolved = resolve_factor(
            &ENERGY_FACTORS,
            entry.emission_factor_key.as_deref(),
            energy::default_factor_key(entry.carrier),
        );

        let consumption = match (entry.consumption_kwh, entry.floor_area_sqm) {
            (Some(kwh), _) => kwh,
            (None, Some(area)) => {
                let intensity = FLOOR_AREA_INTENSITIES.get(energy::intensity_key(entry.carrier));
                result.assumptions.push(format!(
                    "Consumption for '{label}' estimated from {area} sqm at {rate} kWh/sqm.",
                    label = entry.label,
                    rate = intensity.factor,
                ));
                area * intensity.factor
            }
            (None, None) => {
                result.trace.push(format!(
                    "entry[{index}]: {label}, no consumption or floor area reported -> 0 {UNIT_KG_CO2E}",
                    label = entry.label,
                ));
                continue;
            }
        };

        if resolved.defaulted {
            defaulted_factors += 1;
        }
        let contribution = consumption * resolved.entry.factor;
        total += contribution;
        result.trace.push(format!(
            "entry[{index}]: {label}, {consumption} kWh x {factor} {factor_unit} -> {contribution} {UNIT_KG_CO2E}",
            label = entry.label,
            factor = resolved.entry.factor,
            factor_unit = resolved.entry.unit,
        ));
    }

    if defaulted_factors > 0 {
        result.assumptions.push(format!(
            "Standard emission factors were applied to {defaulted_factors} of {count} entries.",
            count = entries.len(),
        ));
    }

    quality.summarize(&mut result.trace);
    result.trace.push(format!("total: {total} {UNIT_KG_CO2E}"));
    result.value = total;
    result
}
