//! Stub calculator for modules that are announced but not yet calculated.
//!
//! Recorded answers are echoed into the trace so nothing a user typed is
//! silently dropped, but the value stays zero and no warnings are raised.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::engine::result::ModuleResult;

/// Free-form answers captured for a planned module. A sorted map keeps the
/// echoed trace deterministic regardless of input key order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlannedSection {
    pub answers: BTreeMap<String, serde_json::Value>,
}

pub fn calculate(module_label: &str, unit: &str, input: Option<&PlannedSection>) -> ModuleResult {
    let mut result = ModuleResult::new(0.0, unit);
    result.assumptions.push(format!(
        "The {module_label} module is planned; recorded answers are preserved but not yet calculated."
    ));

    if let Some(section) = input {
        for (key, value) in &section.answers {
            if value.is_null() {
                continue;
            }
            result.trace.push(format!("recorded '{key}': {value}"));
        }
    }
    result.trace.push(format!("total: 0 {unit}"));
    result
}
