//! Refrigerants and cooling: fugitive emissions from installed systems.
//!
//! Contribution per system is charge x annual leakage x GWP-100. The GWP is
//! taken from the row itself when the user typed one, otherwise from the
//! named refrigerant, otherwise from the default refrigerant for the system
//! type.

use serde::{Deserialize, Serialize};

use crate::engine::quality::QualityLog;
use crate::engine::result::{ModuleResult, UNIT_KG_CO2E};
use crate::factors::refrigerants::{
    self, CoolingSystemType, REFRIGERANT_GWP,
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefrigerantsInput {
    #[serde(default)]
    pub entries: Vec<CoolingSystemEntry>,
}

/// One installed cooling system or group of identical systems.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoolingSystemEntry {
    pub label: String,
    pub system_type: CoolingSystemType,
    #[serde(default)]
    pub refrigerant_key: Option<String>,
    #[serde(default)]
    pub gwp100: Option<f64>,
    #[serde(default)]
    pub system_charge_kg: Option<f64>,
    #[serde(default)]
    pub leakage_percent: Option<f64>,
    #[serde(default)]
    pub documentation_quality_percent: Option<f64>,
}

pub fn calculate(input: Option<&RefrigerantsInput>) -> ModuleResult {
    let entries = input.map(|section| section.entries.as_slice()).unwrap_or(&[]);
    let mut result = ModuleResult::new(0.0, UNIT_KG_CO2E);

    if entries.is_empty() {
        result
            .assumptions
            .push("No cooling systems were reported; the module total is zero.".to_string());
        result.trace.push(format!("total: 0 {UNIT_KG_CO2E}"));
        return result;
    }

    let mut quality = QualityLog::new();
    let mut total = 0.0_f64;

    for (index, entry) in entries.iter().enumerate() {
        quality.observe(&entry.label, entry.documentation_quality_percent, &mut result.warnings);

        let gwp = match (entry.gwp100, entry.refrigerant_key.as_deref()) {
            (Some(gwp), _) => gwp,
            (None, Some(key)) => REFRIGERANT_GWP.get(key).factor,
            (None, None) => {
                let default = REFRIGERANT_GWP
                    .get(refrigerants::default_refrigerant_key(entry.system_type));
                result.assumptions.push(format!(
                    "Refrigerant for '{label}' assumed to be {refrigerant} (typical for {system}).",
                    label = entry.label,
                    refrigerant = default.label,
                    system = entry.system_type.label(),
                ));
                default.factor
            }
        };

        let leakage = match entry.leakage_percent {
            Some(rate) => rate,
            None => {
                let rate = refrigerants::default_leakage_percent(entry.system_type);
                result.assumptions.push(format!(
                    "Annual leakage for '{label}' assumed at {rate}% of charge ({system} default).",
                    label = entry.label,
                    system = entry.system_type.label(),
                ));
                rate
            }
        };

        let Some(charge) = entry.system_charge_kg else {
            result.trace.push(format!(
                "entry[{index}]: {label}, no system charge reported -> 0 {UNIT_KG_CO2E}",
                label = entry.label,
            ));
            continue;
        };

        let contribution = charge * (leakage / 100.0) * gwp;
        total += contribution;
        result.trace.push(format!(
            "entry[{index}]: {label}, charge {charge} kg x leakage {leakage}% x GWP {gwp} -> {contribution} {UNIT_KG_CO2E}",
            label = entry.label,
        ));
    }

    quality.summarize(&mut result.trace);
    result.trace.push(format!("total: {total} {UNIT_KG_CO2E}"));
    result.value = total;
    result
}
