//! Economic intensity factors for financed emissions, keyed by asset class.

use serde::{Deserialize, Serialize};

use super::{FactorEntry, FactorRegistry};

/// Asset class of an investment position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AssetClass {
    ListedEquity,
    CorporateBonds,
    ProjectFinance,
    RealEstate,
    PrivateEquity,
}

impl AssetClass {
    pub const fn ordered() -> [AssetClass; 5] {
        [
            AssetClass::ListedEquity,
            AssetClass::CorporateBonds,
            AssetClass::ProjectFinance,
            AssetClass::RealEstate,
            AssetClass::PrivateEquity,
        ]
    }

    pub const fn label(&self) -> &'static str {
        match self {
            AssetClass::ListedEquity => "listed equity",
            AssetClass::CorporateBonds => "corporate bonds",
            AssetClass::ProjectFinance => "project finance",
            AssetClass::RealEstate => "real estate",
            AssetClass::PrivateEquity => "private equity",
        }
    }
}

/// Emission factors per DKK of invested value.
pub static INVESTMENT_FACTORS: FactorRegistry<AssetClass> = FactorRegistry::new(
    "investment factor",
    &[
        FactorEntry {
            key: "equity.listed",
            factor: 0.021,
            unit: "kg CO2e/DKK",
            label: "Listed equity, index average",
            category: AssetClass::ListedEquity,
        },
        FactorEntry {
            key: "bonds.corporate",
            factor: 0.015,
            unit: "kg CO2e/DKK",
            label: "Corporate bonds, investment grade",
            category: AssetClass::CorporateBonds,
        },
        FactorEntry {
            key: "project.finance",
            factor: 0.040,
            unit: "kg CO2e/DKK",
            label: "Project finance, infrastructure mix",
            category: AssetClass::ProjectFinance,
        },
        FactorEntry {
            key: "realEstate.portfolio",
            factor: 0.031,
            unit: "kg CO2e/DKK",
            label: "Real estate, portfolio average",
            category: AssetClass::RealEstate,
        },
        FactorEntry {
            key: "equity.private",
            factor: 0.027,
            unit: "kg CO2e/DKK",
            label: "Private equity, unlisted holdings",
            category: AssetClass::PrivateEquity,
        },
    ],
);

pub const fn default_factor_key(class: AssetClass) -> &'static str {
    match class {
        AssetClass::ListedEquity => "equity.listed",
        AssetClass::CorporateBonds => "bonds.corporate",
        AssetClass::ProjectFinance => "project.finance",
        AssetClass::RealEstate => "realEstate.portfolio",
        AssetClass::PrivateEquity => "equity.private",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_asset_class_has_a_resolvable_default_factor() {
        for class in AssetClass::ordered() {
            let entry = INVESTMENT_FACTORS.get(default_factor_key(class));
            assert_eq!(entry.category, class);
            assert_eq!(entry.unit, "kg CO2e/DKK");
        }
    }
}
