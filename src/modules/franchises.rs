//! Franchises: emissions attributed to franchised operations the reporting
//! organization does not directly control.
//!
//! The resolved factor carries its own basis. Revenue-based factors multiply
//! franchise revenue; the energy-based factor multiplies metered premises
//! energy, proxied from floor area when no meter reading exists.

use serde::{Deserialize, Serialize};

use crate::engine::quality::QualityLog;
use crate::engine::result::{ModuleResult, UNIT_KG_CO2E};
use crate::factors::energy::{self, EnergyCarrier, FLOOR_AREA_INTENSITIES};
use crate::factors::franchise::{
    self, FactorBasis, FranchiseSector, FRANCHISE_FACTORS,
};
use crate::factors::resolve_factor;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FranchisesInput {
    #[serde(default)]
    pub entries: Vec<FranchiseEntry>,
}

/// One franchise agreement or group of comparable outlets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FranchiseEntry {
    pub label: String,
    pub sector: FranchiseSector,
    #[serde(default)]
    pub factor_key: Option<String>,
    #[serde(default)]
    pub annual_revenue_dkk: Option<f64>,
    #[serde(default)]
    pub energy_consumption_kwh: Option<f64>,
    #[serde(default)]
    pub floor_area_sqm: Option<f64>,
    #[serde(default)]
    pub documentation_quality_percent: Option<f64>,
}

pub fn calculate(input: Option<&FranchisesInput>) -> ModuleResult {
    let entries = input.map(|section| section.entries.as_slice()).unwrap_or(&[]);
    let mut result = ModuleResult::new(0.0, UNIT_KG_CO2E);

    if entries.is_empty() {
        result
            .assumptions
            .push("No franchises were reported; the module total is zero.".to_string());
        result.trace.push(format!("total: 0 {UNIT_KG_CO2E}"));
        return result;
    }

    let mut quality = QualityLog::new();
    let mut defaulted_sectors: Vec<FranchiseSector> = Vec::new();
    let mut total = 0.0_f64;

    for (index, entry) in entries.iter().enumerate() {
        quality.observe(&entry.label, entry.documentation_quality_percent, &mut result.warnings);

        let resolved = resolve_factor(
            &FRANCHISE_FACTORS,
            entry.factor_key.as_deref(),
            franchise::default_factor_key(entry.sector),
        );

        let contribution = match resolved.entry.category {
            FactorBasis::Revenue => {
                let Some(revenue) = entry.annual_revenue_dkk else {
                    result.trace.push(format!(
                        "entry[{index}]: {label}, no annual revenue reported -> 0 {UNIT_KG_CO2E}",
                        label = entry.label,
                    ));
                    continue;
                };
                let contribution = revenue * resolved.entry.factor;
                result.trace.push(format!(
                    "entry[{index}]: {label}, revenue {revenue} DKK x {factor} {factor_unit} -> {contribution} {UNIT_KG_CO2E}",
                    label = entry.label,
                    factor = resolved.entry.factor,
                    factor_unit = resolved.entry.unit,
                ));
                contribution
            }
            FactorBasis::Energy => {
                let consumption = match (entry.energy_consumption_kwh, entry.floor_area_sqm) {
                    (Some(kwh), _) => kwh,
                    (None, Some(area)) => {
                        let intensity = FLOOR_AREA_INTENSITIES
                            .get(energy::intensity_key(EnergyCarrier::Electricity));
                        result.assumptions.push(format!(
                            "Premises energy of '{label}' estimated from {area} sqm at {rate} kWh/sqm.",
                            label = entry.label,
                            rate = intensity.factor,
                        ));
                        area * intensity.factor
                    }
                    (None, None) => {
                        result.trace.push(format!(
                            "entry[{index}]: {label}, no premises energy or floor area reported -> 0 {UNIT_KG_CO2E}",
                            label = entry.label,
                        ));
                        continue;
                    }
                };
                let contribution = consumption * resolved.entry.factor;
                result.trace.push(format!(
                    "entry[{index}]: {label}, energy {consumption} kWh x {factor} {factor_unit} -> {contribution} {UNIT_KG_CO2E}",
                    label = entry.label,
                    factor = resolved.entry.factor,
                    factor_unit = resolved.entry.unit,
                ));
                contribution
            }
        };

        if resolved.defaulted && !defaulted_sectors.contains(&entry.sector) {
            defaulted_sectors.push(entry.sector);
        }
        total += contribution;
    }

    for sector in &defaulted_sectors {
        result.assumptions.push(format!(
            "Revenue-based {sector} factor applied where no specific factor was selected.",
            sector = sector.label(),
        ));
    }

    quality.summarize(&mut result.trace);
    result.trace.push(format!("total: {total} {UNIT_KG_CO2E}"));
    result.value = total;
    result
}
