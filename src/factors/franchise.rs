//! Franchise estimation factors. Entries carry the basis they apply to, so a
//! resolved factor tells the calculator whether to multiply revenue or energy.

use serde::{Deserialize, Serialize};

use super::{FactorEntry, FactorRegistry};

/// Quantity a franchise factor multiplies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FactorBasis {
    Revenue,
    Energy,
}

/// Franchise sector reported on a row. Drives the default revenue-based key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FranchiseSector {
    Retail,
    FoodService,
    Hospitality,
    Services,
}

impl FranchiseSector {
    pub const fn ordered() -> [FranchiseSector; 4] {
        [
            FranchiseSector::Retail,
            FranchiseSector::FoodService,
            FranchiseSector::Hospitality,
            FranchiseSector::Services,
        ]
    }

    pub const fn label(&self) -> &'static str {
        match self {
            FranchiseSector::Retail => "retail",
            FranchiseSector::FoodService => "food service",
            FranchiseSector::Hospitality => "hospitality",
            FranchiseSector::Services => "services",
        }
    }
}

pub static FRANCHISE_FACTORS: FactorRegistry<FactorBasis> = FactorRegistry::new(
    "franchise factor",
    &[
        FactorEntry {
            key: "retail.revenue",
            factor: 0.032,
            unit: "kg CO2e/DKK",
            label: "Retail franchise, revenue basis",
            category: FactorBasis::Revenue,
        },
        FactorEntry {
            key: "foodService.revenue",
            factor: 0.055,
            unit: "kg CO2e/DKK",
            label: "Food service franchise, revenue basis",
            category: FactorBasis::Revenue,
        },
        FactorEntry {
            key: "hospitality.revenue",
            factor: 0.041,
            unit: "kg CO2e/DKK",
            label: "Hospitality franchise, revenue basis",
            category: FactorBasis::Revenue,
        },
        FactorEntry {
            key: "services.revenue",
            factor: 0.024,
            unit: "kg CO2e/DKK",
            label: "Services franchise, revenue basis",
            category: FactorBasis::Revenue,
        },
        FactorEntry {
            key: "premises.energy",
            factor: 0.135,
            unit: "kg CO2e/kWh",
            label: "Franchise premises, metered energy basis",
            category: FactorBasis::Energy,
        },
    ],
);

pub const fn default_factor_key(sector: FranchiseSector) -> &'static str {
    match sector {
        FranchiseSector::Retail => "retail.revenue",
        FranchiseSector::FoodService => "foodService.revenue",
        FranchiseSector::Hospitality => "hospitality.revenue",
        FranchiseSector::Services => "services.revenue",
    }
}
