//! Spend-based screening factors for the value-chain overview module.

use serde::{Deserialize, Serialize};

use super::{FactorEntry, FactorRegistry};

/// Spend category covered by the screening questionnaire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScreeningCategory {
    PurchasedGoods,
    PurchasedServices,
    CapitalGoods,
    UpstreamTransport,
    OperationalWaste,
    BusinessTravel,
    EmployeeCommuting,
}

impl ScreeningCategory {
    pub const fn ordered() -> [ScreeningCategory; 7] {
        [
            ScreeningCategory::PurchasedGoods,
            ScreeningCategory::PurchasedServices,
            ScreeningCategory::CapitalGoods,
            ScreeningCategory::UpstreamTransport,
            ScreeningCategory::OperationalWaste,
            ScreeningCategory::BusinessTravel,
            ScreeningCategory::EmployeeCommuting,
        ]
    }

    pub const fn label(&self) -> &'static str {
        match self {
            ScreeningCategory::PurchasedGoods => "purchased goods",
            ScreeningCategory::PurchasedServices => "purchased services",
            ScreeningCategory::CapitalGoods => "capital goods",
            ScreeningCategory::UpstreamTransport => "upstream transport",
            ScreeningCategory::OperationalWaste => "operational waste",
            ScreeningCategory::BusinessTravel => "business travel",
            ScreeningCategory::EmployeeCommuting => "employee commuting",
        }
    }
}

/// Emission factors per DKK of annual spend.
pub static SCREENING_FACTORS: FactorRegistry<ScreeningCategory> = FactorRegistry::new(
    "screening factor",
    &[
        FactorEntry {
            key: "goods.average",
            factor: 0.058,
            unit: "kg CO2e/DKK",
            label: "Purchased goods, cross-sector average",
            category: ScreeningCategory::PurchasedGoods,
        },
        FactorEntry {
            key: "goods.foodBeverage",
            factor: 0.112,
            unit: "kg CO2e/DKK",
            label: "Purchased goods, food and beverage",
            category: ScreeningCategory::PurchasedGoods,
        },
        FactorEntry {
            key: "services.average",
            factor: 0.026,
            unit: "kg CO2e/DKK",
            label: "Purchased services, cross-sector average",
            category: ScreeningCategory::PurchasedServices,
        },
        FactorEntry {
            key: "capital.average",
            factor: 0.045,
            unit: "kg CO2e/DKK",
            label: "Capital goods, cross-sector average",
            category: ScreeningCategory::CapitalGoods,
        },
        FactorEntry {
            key: "transport.road",
            factor: 0.089,
            unit: "kg CO2e/DKK",
            label: "Upstream transport, road freight",
            category: ScreeningCategory::UpstreamTransport,
        },
        FactorEntry {
            key: "waste.mixed",
            factor: 0.021,
            unit: "kg CO2e/DKK",
            label: "Operational waste, mixed handling",
            category: ScreeningCategory::OperationalWaste,
        },
        FactorEntry {
            key: "travel.average",
            factor: 0.078,
            unit: "kg CO2e/DKK",
            label: "Business travel, all modes",
            category: ScreeningCategory::BusinessTravel,
        },
        FactorEntry {
            key: "commuting.average",
            factor: 0.054,
            unit: "kg CO2e/DKK",
            label: "Employee commuting, national modal split",
            category: ScreeningCategory::EmployeeCommuting,
        },
    ],
);

pub const fn default_factor_key(category: ScreeningCategory) -> &'static str {
    match category {
        ScreeningCategory::PurchasedGoods => "goods.average",
        ScreeningCategory::PurchasedServices => "services.average",
        ScreeningCategory::CapitalGoods => "capital.average",
        ScreeningCategory::UpstreamTransport => "transport.road",
        ScreeningCategory::OperationalWaste => "waste.mixed",
        ScreeningCategory::BusinessTravel => "travel.average",
        ScreeningCategory::EmployeeCommuting => "commuting.average",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_has_a_resolvable_default_factor() {
        for category in ScreeningCategory::ordered() {
            let entry = SCREENING_FACTORS.get(default_factor_key(category));
            assert_eq!(entry.category, category);
            assert_eq!(entry.unit, "kg CO2e/DKK");
        }
    }

    #[test]
    fn sector_specific_goods_factor_exceeds_the_average() {
        let average = SCREENING_FACTORS.get("goods.average").factor;
        let food = SCREENING_FACTORS.get("goods.foodBeverage").factor;
        assert!(food > average);
    }
}
