//! Emission factors and floor-area intensities for purchased energy.

use serde::{Deserialize, Serialize};

use super::{FactorEntry, FactorRegistry};

/// Energy carrier reported on a purchased-energy row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EnergyCarrier {
    Electricity,
    DistrictHeating,
    NaturalGas,
    HeatingOil,
}

impl EnergyCarrier {
    pub const fn ordered() -> [EnergyCarrier; 4] {
        [
            EnergyCarrier::Electricity,
            EnergyCarrier::DistrictHeating,
            EnergyCarrier::NaturalGas,
            EnergyCarrier::HeatingOil,
        ]
    }

    pub const fn label(&self) -> &'static str {
        match self {
            EnergyCarrier::Electricity => "electricity",
            EnergyCarrier::DistrictHeating => "district heating",
            EnergyCarrier::NaturalGas => "natural gas",
            EnergyCarrier::HeatingOil => "heating oil",
        }
    }
}

/// Emission factors per kWh of purchased energy.
pub static ENERGY_FACTORS: FactorRegistry<EnergyCarrier> = FactorRegistry::new(
    "energy emission factor",
    &[
        FactorEntry {
            key: "electricity.average",
            factor: 0.135,
            unit: "kg CO2e/kWh",
            label: "Electricity, national grid average",
            category: EnergyCarrier::Electricity,
        },
        FactorEntry {
            key: "electricity.residualMix",
            factor: 0.318,
            unit: "kg CO2e/kWh",
            label: "Electricity, residual mix",
            category: EnergyCarrier::Electricity,
        },
        FactorEntry {
            key: "districtHeating.average",
            factor: 0.078,
            unit: "kg CO2e/kWh",
            label: "District heating, network average",
            category: EnergyCarrier::DistrictHeating,
        },
        FactorEntry {
            key: "naturalGas.combustion",
            factor: 0.204,
            unit: "kg CO2e/kWh",
            label: "Natural gas, on-site combustion",
            category: EnergyCarrier::NaturalGas,
        },
        FactorEntry {
            key: "heatingOil.combustion",
            factor: 0.281,
            unit: "kg CO2e/kWh",
            label: "Heating oil, on-site combustion",
            category: EnergyCarrier::HeatingOil,
        },
    ],
);

/// Annual consumption intensities used to proxy missing meter readings from
/// heated floor area.
pub static FLOOR_AREA_INTENSITIES: FactorRegistry<EnergyCarrier> = FactorRegistry::new(
    "floor-area intensity",
    &[
        FactorEntry {
            key: "electricity.perSqm",
            factor: 50.0,
            unit: "kWh/sqm",
            label: "Electricity intensity, office and light commercial",
            category: EnergyCarrier::Electricity,
        },
        FactorEntry {
            key: "districtHeating.perSqm",
            factor: 110.0,
            unit: "kWh/sqm",
            label: "District heating intensity, connected buildings",
            category: EnergyCarrier::DistrictHeating,
        },
        FactorEntry {
            key: "naturalGas.perSqm",
            factor: 120.0,
            unit: "kWh/sqm",
            label: "Natural gas intensity, gas-heated buildings",
            category: EnergyCarrier::NaturalGas,
        },
        FactorEntry {
            key: "heatingOil.perSqm",
            factor: 115.0,
            unit: "kWh/sqm",
            label: "Heating oil intensity, oil-heated buildings",
            category: EnergyCarrier::HeatingOil,
        },
    ],
);

pub const fn default_factor_key(carrier: EnergyCarrier) -> &'static str {
    match carrier {
        EnergyCarrier::Electricity => "electricity.average",
        EnergyCarrier::DistrictHeating => "districtHeating.average",
        EnergyCarrier::NaturalGas => "naturalGas.combustion",
        EnergyCarrier::HeatingOil => "heatingOil.combustion",
    }
}

pub const fn intensity_key(carrier: EnergyCarrier) -> &'static str {
    match carrier {
        EnergyCarrier::Electricity => "electricity.perSqm",
        EnergyCarrier::DistrictHeating => "districtHeating.perSqm",
        EnergyCarrier::NaturalGas => "naturalGas.perSqm",
        EnergyCarrier::HeatingOil => "heatingOil.perSqm",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_carrier_has_a_resolvable_default_factor() {
        for carrier in EnergyCarrier::ordered() {
            let entry = ENERGY_FACTORS.get(default_factor_key(carrier));
            assert_eq!(entry.category, carrier);
            assert_eq!(entry.unit, "kg CO2e/kWh");
        }
    }

    #[test]
    fn every_carrier_has_a_resolvable_intensity() {
        for carrier in EnergyCarrier::ordered() {
            let entry = FLOOR_AREA_INTENSITIES.get(intensity_key(carrier));
            assert_eq!(entry.category, carrier);
            assert_eq!(entry.unit, "kWh/sqm");
        }
    }

    #[test]
    fn grid_average_is_below_residual_mix() {
        let average = ENERGY_FACTORS.get("electricity.average").factor;
        let residual = ENERGY_FACTORS.get("electricity.residualMix").factor;
        assert!(average < residual);
    }
}
