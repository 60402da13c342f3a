//! GWP-100 values per refrigerant and the cooling-system defaults used when a
//! questionnaire row names neither a refrigerant nor its own GWP.

use serde::{Deserialize, Serialize};

use super::{FactorEntry, FactorRegistry};

/// Broad refrigerant class, carried on each GWP entry for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RefrigerantClass {
    Hfc,
    HfcBlend,
    Natural,
}

/// Cooling system type reported on a refrigerant row. Drives the default
/// refrigerant and the default annual leakage rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CoolingSystemType {
    AirConditioning,
    CommercialRefrigeration,
    HeatPump,
    IndustrialCooling,
}

impl CoolingSystemType {
    pub const fn ordered() -> [CoolingSystemType; 4] {
        [
            CoolingSystemType::AirConditioning,
            CoolingSystemType::CommercialRefrigeration,
            CoolingSystemType::HeatPump,
            CoolingSystemType::IndustrialCooling,
        ]
    }

    pub const fn label(&self) -> &'static str {
        match self {
            CoolingSystemType::AirConditioning => "air conditioning",
            CoolingSystemType::CommercialRefrigeration => "commercial refrigeration",
            CoolingSystemType::HeatPump => "heat pump",
            CoolingSystemType::IndustrialCooling => "industrial cooling",
        }
    }
}

/// GWP-100 per kilogram of refrigerant released.
pub static REFRIGERANT_GWP: FactorRegistry<RefrigerantClass> = FactorRegistry::new(
    "refrigerant GWP",
    &[
        FactorEntry {
            key: "r32",
            factor: 675.0,
            unit: "kg CO2e/kg",
            label: "R-32 (difluoromethane)",
            category: RefrigerantClass::Hfc,
        },
        FactorEntry {
            key: "r134a",
            factor: 1430.0,
            unit: "kg CO2e/kg",
            label: "R-134a (tetrafluoroethane)",
            category: RefrigerantClass::Hfc,
        },
        FactorEntry {
            key: "r404a",
            factor: 3922.0,
            unit: "kg CO2e/kg",
            label: "R-404A blend",
            category: RefrigerantClass::HfcBlend,
        },
        FactorEntry {
            key: "r407c",
            factor: 1774.0,
            unit: "kg CO2e/kg",
            label: "R-407C blend",
            category: RefrigerantClass::HfcBlend,
        },
        FactorEntry {
            key: "r410a",
            factor: 2088.0,
            unit: "kg CO2e/kg",
            label: "R-410A blend",
            category: RefrigerantClass::HfcBlend,
        },
        FactorEntry {
            key: "r290",
            factor: 3.0,
            unit: "kg CO2e/kg",
            label: "R-290 (propane)",
            category: RefrigerantClass::Natural,
        },
        FactorEntry {
            key: "r717",
            factor: 0.0,
            unit: "kg CO2e/kg",
            label: "R-717 (ammonia)",
            category: RefrigerantClass::Natural,
        },
        FactorEntry {
            key: "r744",
            factor: 1.0,
            unit: "kg CO2e/kg",
            label: "R-744 (carbon dioxide)",
            category: RefrigerantClass::Natural,
        },
    ],
);

pub const fn default_refrigerant_key(system: CoolingSystemType) -> &'static str {
    match system {
        CoolingSystemType::AirConditioning => "r410a",
        CoolingSystemType::CommercialRefrigeration => "r404a",
        CoolingSystemType::HeatPump => "r410a",
        CoolingSystemType::IndustrialCooling => "r717",
    }
}

/// Default annual leakage as a percentage of the installed charge.
pub const fn default_leakage_percent(system: CoolingSystemType) -> f64 {
    match system {
        CoolingSystemType::AirConditioning => 5.0,
        CoolingSystemType::CommercialRefrigeration => 10.0,
        CoolingSystemType::HeatPump => 3.5,
        CoolingSystemType::IndustrialCooling => 8.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_system_type_has_a_resolvable_default_refrigerant() {
        for system in CoolingSystemType::ordered() {
            let entry = REFRIGERANT_GWP.get(default_refrigerant_key(system));
            assert_eq!(entry.unit, "kg CO2e/kg");
        }
    }

    #[test]
    fn every_system_type_has_a_positive_default_leakage() {
        for system in CoolingSystemType::ordered() {
            assert!(default_leakage_percent(system) > 0.0);
        }
    }

    #[test]
    fn natural_refrigerants_carry_negligible_gwp() {
        for entry in REFRIGERANT_GWP.entries() {
            if entry.category == RefrigerantClass::Natural {
                assert!(entry.factor <= 3.0, "{} is not low-GWP", entry.key);
            }
        }
    }
}
