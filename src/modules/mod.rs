//! One calculator per questionnaire module.
//!
//! Calculators share the result contract and the numeric helpers, nothing
//! else: each module owns its input shape outright so form changes in one
//! section can never ripple into another.

pub mod communities;
pub mod end_of_life;
pub mod energy;
pub mod franchises;
pub mod governance;
pub mod human_rights;
pub mod investments;
pub mod leased_assets;
pub mod planned;
pub mod refrigerants;
pub mod screening;
pub mod workforce;

use serde::{Deserialize, Serialize};

/// Severity of a reported incident, impact, or finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    pub const fn label(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
        }
    }
}

/// Remediation progress on a reported incident, impact, or finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RemediationStatus {
    NoPlan,
    Planned,
    InProgress,
    Resolved,
}

impl RemediationStatus {
    pub const fn ordered() -> [RemediationStatus; 4] {
        [
            RemediationStatus::NoPlan,
            RemediationStatus::Planned,
            RemediationStatus::InProgress,
            RemediationStatus::Resolved,
        ]
    }

    pub const fn label(&self) -> &'static str {
        match self {
            RemediationStatus::NoPlan => "no plan",
            RemediationStatus::Planned => "planned",
            RemediationStatus::InProgress => "in progress",
            RemediationStatus::Resolved => "resolved",
        }
    }

    pub const fn is_resolved(&self) -> bool {
        matches!(self, RemediationStatus::Resolved)
    }
}

pub(crate) const HIGH_SEVERITY_PENALTY: f64 = 10.0;
pub(crate) const MEDIUM_SEVERITY_PENALTY: f64 = 4.0;

/// Score deduction for one unresolved finding. Resolved findings and low
/// severities cost nothing.
pub(crate) fn unresolved_penalty(severity: Severity, status: RemediationStatus) -> f64 {
    if status.is_resolved() {
        return 0.0;
    }
    match severity {
        Severity::High => HIGH_SEVERITY_PENALTY,
        Severity::Medium => MEDIUM_SEVERITY_PENALTY,
        Severity::Low => 0.0,
    }
}
