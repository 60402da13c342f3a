//! The module registry and dispatcher.
//!
//! Every questionnaire module has a fixed identifier. Dispatch is an
//! exhaustive match over the identifier enum, so adding a module without
//! wiring its calculator fails to compile rather than at runtime. The only
//! fallible step is turning an untrusted code string into an identifier.

pub mod input;
pub(crate) mod numeric;
pub mod quality;
pub mod result;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::engine::input::QuestionnaireInput;
use crate::engine::result::{ModuleResult, UNIT_KG_CO2E, UNIT_POINTS};
use crate::modules;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("unknown module id '{0}'; expected one of A1, A2, A3, A4, C1, C10, C12, C13, C14, C15, D1, S1, S2, S3, S4")]
    UnknownModule(String),
}

/// Identifier of one questionnaire module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModuleId {
    A1,
    A2,
    A3,
    A4,
    C1,
    C10,
    C12,
    C13,
    C14,
    C15,
    D1,
    S1,
    S2,
    S3,
    S4,
}

impl ModuleId {
    /// Every module in report order.
    pub const fn ordered() -> [ModuleId; 15] {
        [
            ModuleId::A1,
            ModuleId::A2,
            ModuleId::A3,
            ModuleId::A4,
            ModuleId::C1,
            ModuleId::C10,
            ModuleId::C12,
            ModuleId::C13,
            ModuleId::C14,
            ModuleId::C15,
            ModuleId::D1,
            ModuleId::S1,
            ModuleId::S2,
            ModuleId::S3,
            ModuleId::S4,
        ]
    }

    pub const fn code(&self) -> &'static str {
        match self {
            ModuleId::A1 => "A1",
            ModuleId::A2 => "A2",
            ModuleId::A3 => "A3",
            ModuleId::A4 => "A4",
            ModuleId::C1 => "C1",
            ModuleId::C10 => "C10",
            ModuleId::C12 => "C12",
            ModuleId::C13 => "C13",
            ModuleId::C14 => "C14",
            ModuleId::C15 => "C15",
            ModuleId::D1 => "D1",
            ModuleId::S1 => "S1",
            ModuleId::S2 => "S2",
            ModuleId::S3 => "S3",
            ModuleId::S4 => "S4",
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            ModuleId::A1 => "Company facilities and fuels",
            ModuleId::A2 => "Vehicle fleet",
            ModuleId::A3 => "Purchased energy and utilities",
            ModuleId::A4 => "Refrigerants and cooling",
            ModuleId::C1 => "Purchased goods and services",
            ModuleId::C10 => "Value-chain screening",
            ModuleId::C12 => "End-of-life treatment of sold products",
            ModuleId::C13 => "Downstream leased assets",
            ModuleId::C14 => "Franchises",
            ModuleId::C15 => "Investments",
            ModuleId::D1 => "Governance and reporting method",
            ModuleId::S1 => "Own workforce",
            ModuleId::S2 => "Value-chain workers",
            ModuleId::S3 => "Affected communities",
            ModuleId::S4 => "Human rights due diligence",
        }
    }

    /// True for modules whose calculator is a forward-compatible stub.
    pub const fn is_planned(&self) -> bool {
        matches!(self, ModuleId::A1 | ModuleId::A2 | ModuleId::C1 | ModuleId::S2)
    }

    /// Parse an untrusted module code. This is the single fallible entry
    /// into the registry; everything past it is total.
    pub fn from_code(code: &str) -> Result<ModuleId, EngineError> {
        let trimmed = code.trim();
        let normalized = trimmed.to_ascii_uppercase();
        ModuleId::ordered()
            .into_iter()
            .find(|id| id.code() == normalized)
            .ok_or_else(|| EngineError::UnknownModule(trimmed.to_string()))
    }
}

impl std::fmt::Display for ModuleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Run one module's calculator over the questionnaire.
pub fn run_module(id: ModuleId, input: &QuestionnaireInput) -> ModuleResult {
    tracing::debug!(module = id.code(), "running module calculator");
    let result = match id {
        ModuleId::A1 => {
            modules::planned::calculate(id.label(), UNIT_KG_CO2E, input.company_facilities.as_ref())
        }
        ModuleId::A2 => {
            modules::planned::calculate(id.label(), UNIT_KG_CO2E, input.vehicle_fleet.as_ref())
        }
        ModuleId::A3 => modules::energy::calculate(input.purchased_energy.as_ref()),
        ModuleId::A4 => modules::refrigerants::calculate(input.refrigerants.as_ref()),
        ModuleId::C1 => {
            modules::planned::calculate(id.label(), UNIT_KG_CO2E, input.purchased_goods.as_ref())
        }
        ModuleId::C10 => modules::screening::calculate(input.value_chain_screening.as_ref()),
        ModuleId::C12 => modules::end_of_life::calculate(input.end_of_life.as_ref()),
        ModuleId::C13 => modules::leased_assets::calculate(input.leased_assets.as_ref()),
        ModuleId::C14 => modules::franchises::calculate(input.franchises.as_ref()),
        ModuleId::C15 => modules::investments::calculate(input.investments.as_ref()),
        ModuleId::D1 => modules::governance::calculate(input.governance.as_ref()),
        ModuleId::S1 => modules::workforce::calculate(input.own_workforce.as_ref()),
        ModuleId::S2 => {
            modules::planned::calculate(id.label(), UNIT_POINTS, input.value_chain_workers.as_ref())
        }
        ModuleId::S3 => modules::communities::calculate(input.affected_communities.as_ref()),
        ModuleId::S4 => modules::human_rights::calculate(input.human_rights.as_ref()),
    };
    debug_assert!(
        result.value.is_finite(),
        "module {} produced a non-finite value",
        id.code()
    );
    result
}

/// Run every module in report order.
pub fn run_all(input: &QuestionnaireInput) -> Vec<(ModuleId, ModuleResult)> {
    ModuleId::ordered()
        .into_iter()
        .map(|id| (id, run_module(id, input)))
        .collect()
}
