//! The shared result contract every module calculator honors.

use serde::{Deserialize, Serialize};

pub const UNIT_KG_CO2E: &str = "kg CO2e";
pub const UNIT_POINTS: &str = "points";

/// Outcome of running one module calculator over one questionnaire.
///
/// `value` is always finite. Emission modules report kilograms of CO2
/// equivalent, score modules report points on a 0 to 100 scale. The three
/// string lists carry distinct meanings and are never mixed:
///
/// * `assumptions` record defaults and estimations the calculator applied,
/// * `warnings` flag reported data that deserves review,
/// * `trace` shows the arithmetic line by line so the value can be rebuilt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleResult {
    pub value: f64,
    pub unit: String,
    pub assumptions: Vec<String>,
    pub warnings: Vec<String>,
    pub trace: Vec<String>,
}

impl ModuleResult {
    pub fn new(value: f64, unit: &str) -> Self {
        Self {
            value,
            unit: unit.to_string(),
            assumptions: Vec::new(),
            warnings: Vec::new(),
            trace: Vec::new(),
        }
    }

    /// True when the calculator produced no findings worth reviewing.
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_camel_case_keys() {
        let mut result = ModuleResult::new(12.5, UNIT_KG_CO2E);
        result.assumptions.push("Standard factor applied.".to_string());

        let json = serde_json::to_value(&result).expect("result serializes");

        assert_eq!(json["value"], 12.5);
        assert_eq!(json["unit"], "kg CO2e");
        assert_eq!(json["assumptions"][0], "Standard factor applied.");
        assert!(json["warnings"].as_array().expect("warnings array").is_empty());
    }

    #[test]
    fn new_result_is_clean() {
        assert!(ModuleResult::new(0.0, UNIT_POINTS).is_clean());
    }
}
