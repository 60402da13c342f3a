//! Downstream leased assets.
//!
//! Same energy arithmetic as the purchased-energy module, scoped to assets
//! the organization leases out, with an optional attributed share when only
//! part of an asset's consumption belongs to the lessor.

use serde::{Deserialize, Serialize};

use crate::engine::quality::QualityLog;
use crate::engine::result::{ModuleResult, UNIT_KG_CO2E};
use crate::factors::energy::{
    self, EnergyCarrier, ENERGY_FACTORS, FLOOR_AREA_INTENSITIES,
};
use crate::factors::resolve_factor;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeasedAssetsInput {
    #[serde(default)]
    pub entries: Vec<LeasedAssetEntry>,
}

/// One leased-out asset: a building, a floor, or a piece of equipment with
/// its own energy use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeasedAssetEntry {
    pub label: String,
    pub carrier: EnergyCarrier,
    #[serde(default)]
    pub energy_consumption_kwh: Option<f64>,
    #[serde(default)]
    pub floor_area_sqm: Option<f64>,
    #[serde(default)]
    pub emission_factor_key: Option<String>,
    /// Share of the asset's consumption attributed to the reporting
    /// organization. Absent means full attribution.
    #[serde(default)]
    pub attributed_share_percent: Option<f64>,
    #[serde(default)]
    pub documentation_quality_percent: Option<f64>,
}

pub fn calculate(input: Option<&LeasedAssetsInput>) -> ModuleResult {
    let entries = input.map(|section| section.entries.as_slice()).unwrap_or(&[]);
    let mut result = ModuleResult::new(0.0, UNIT_KG_CO2E);

    if entries.is_empty() {
        result
            .assumptions
            .push("No leased assets were reported; the module total is zero.".to_string());
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

        let consumption = match (entry.energy_consumption_kwh, entry.floor_area_sqm) {
            (Some(kwh), _) => kwh,
            (None, Some(area)) => {
                let intensity = FLOOR_AREA_INTENSITIES.get(energy::intensity_key(entry.carrier));
                result.assumptions.push(format!(
                    "Energy use of '{label}' estimated from {area} sqm at {rate} kWh/sqm.",
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

        let contribution = match entry.attributed_share_percent {
            Some(share) => {
                let attributed = consumption * resolved.entry.factor * (share / 100.0);
                result.trace.push(format!(
                    "entry[{index}]: {label}, {consumption} kWh x {factor} {factor_unit} x share {share}% -> {attributed} {UNIT_KG_CO2E}",
                    label = entry.label,
                    factor = resolved.entry.factor,
                    factor_unit = resolved.entry.unit,
                ));
                attributed
            }
            None => {
                let full = consumption * resolved.entry.factor;
                result.trace.push(format!(
                    "entry[{index}]: {label}, {consumption} kWh x {factor} {factor_unit} -> {full} {UNIT_KG_CO2E}",
                    label = entry.label,
                    factor = resolved.entry.factor,
                    factor_unit = resolved.entry.unit,
                ));
                full
            }
        };
        total += contribution;
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
