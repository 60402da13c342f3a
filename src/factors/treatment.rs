//! End-of-life treatment factors and the product-category defaults applied
//! when a row does not say how sold products are treated.

use serde::{Deserialize, Serialize};

use super::{FactorEntry, FactorRegistry};

/// Waste treatment route at end of life.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TreatmentType {
    Landfill,
    Incineration,
    Recycling,
    Composting,
}

/// Product category reported on an end-of-life row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProductCategory {
    Packaging,
    Electronics,
    Textiles,
    OrganicMaterials,
    MixedProducts,
}

impl ProductCategory {
    pub const fn ordered() -> [ProductCategory; 5] {
        [
            ProductCategory::Packaging,
            ProductCategory::Electronics,
            ProductCategory::Textiles,
            ProductCategory::OrganicMaterials,
            ProductCategory::MixedProducts,
        ]
    }

    pub const fn label(&self) -> &'static str {
        match self {
            ProductCategory::Packaging => "packaging",
            ProductCategory::Electronics => "electronics",
            ProductCategory::Textiles => "textiles",
            ProductCategory::OrganicMaterials => "organic materials",
            ProductCategory::MixedProducts => "mixed products",
        }
    }
}

/// Emission factors per tonne of product entering each treatment route.
pub static TREATMENT_FACTORS: FactorRegistry<TreatmentType> = FactorRegistry::new(
    "treatment factor",
    &[
        FactorEntry {
            key: "landfill.mixed",
            factor: 587.0,
            unit: "kg CO2e/tonne",
            label: "Landfill, mixed waste",
            category: TreatmentType::Landfill,
        },
        FactorEntry {
            key: "incineration.energyRecovery",
            factor: 332.0,
            unit: "kg CO2e/tonne",
            label: "Incineration with energy recovery",
            category: TreatmentType::Incineration,
        },
        FactorEntry {
            key: "recycling.average",
            factor: 45.0,
            unit: "kg CO2e/tonne",
            label: "Recycling, processing average",
            category: TreatmentType::Recycling,
        },
        FactorEntry {
            key: "composting.openAir",
            factor: 122.0,
            unit: "kg CO2e/tonne",
            label: "Composting, open-air windrow",
            category: TreatmentType::Composting,
        },
    ],
);

pub const fn default_treatment_key(category: ProductCategory) -> &'static str {
    match category {
        ProductCategory::Packaging => "incineration.energyRecovery",
        ProductCategory::Electronics => "recycling.average",
        ProductCategory::Textiles => "incineration.energyRecovery",
        ProductCategory::OrganicMaterials => "composting.openAir",
        ProductCategory::MixedProducts => "landfill.mixed",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_product_category_has_a_resolvable_default_treatment() {
        for category in ProductCategory::ordered() {
            let entry = TREATMENT_FACTORS.get(default_treatment_key(category));
            assert_eq!(entry.unit, "kg CO2e/tonne");
        }
    }

    #[test]
    fn landfill_is_the_most_emitting_route() {
        let landfill = TREATMENT_FACTORS.get("landfill.mixed").factor;
        for entry in TREATMENT_FACTORS.entries() {
            assert!(entry.factor <= landfill);
        }
    }
}
