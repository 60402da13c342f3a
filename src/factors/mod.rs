//! Immutable factor registries backing the per-module calculators.
//!
//! Every registry is configuration data compiled into the binary: a set of
//! keyed entries plus a default-key mapping per row category. Nothing here is
//! computed or mutated at runtime.

pub mod energy;
pub mod franchise;
pub mod investments;
pub mod refrigerants;
pub mod screening;
pub mod treatment;

/// One keyed factor inside a registry. `C` is the registry-specific
/// classification enum (energy carrier, treatment type, factor basis, ...).
#[derive(Debug)]
pub struct FactorEntry<C: 'static> {
    pub key: &'static str,
    pub factor: f64,
    pub unit: &'static str,
    pub label: &'static str,
    pub category: C,
}

/// Read-only lookup table over a static slice of entries.
#[derive(Debug)]
pub struct FactorRegistry<C: 'static> {
    name: &'static str,
    entries: &'static [FactorEntry<C>],
}

impl<C> FactorRegistry<C> {
    pub const fn new(name: &'static str, entries: &'static [FactorEntry<C>]) -> Self {
        Self { name, entries }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn entries(&self) -> &'static [FactorEntry<C>] {
        self.entries
    }

    pub fn find(&self, key: &str) -> Option<&'static FactorEntry<C>> {
        self.entries.iter().find(|entry| entry.key == key)
    }

    /// Look up a key that callers obtained from this registry's enumeration.
    ///
    /// Panics on a miss: a key that is not in the registry means the caller
    /// and the registry disagree about the questionnaire contents, which is a
    /// programming error rather than a user-facing condition.
    pub fn get(&self, key: &str) -> &'static FactorEntry<C> {
        self.find(key).unwrap_or_else(|| {
            panic!(
                "unknown factor key '{}' in the {} registry; keys must come from the registry enumeration",
                key, self.name
            )
        })
    }
}

/// Outcome of the three-step factor resolution: the entry that applies and
/// whether the per-category default was used instead of an explicit key.
#[derive(Debug)]
pub struct ResolvedFactor<C: 'static> {
    pub entry: &'static FactorEntry<C>,
    pub defaulted: bool,
}

/// Resolve a row's factor: explicit key when one was provided, otherwise the
/// registry default for the row's category. Assumption text in calculators is
/// derived from the returned `defaulted` flag, never re-inferred.
pub fn resolve_factor<C>(
    registry: &FactorRegistry<C>,
    explicit_key: Option<&str>,
    default_key: &'static str,
) -> ResolvedFactor<C> {
    match explicit_key {
        Some(key) => ResolvedFactor {
            entry: registry.get(key),
            defaulted: false,
        },
        None => ResolvedFactor {
            entry: registry.get(default_key),
            defaulted: true,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::energy::{self, EnergyCarrier};
    use super::*;

    #[test]
    fn explicit_key_wins_over_category_default() {
        let resolved = resolve_factor(
            &energy::ENERGY_FACTORS,
            Some("electricity.residualMix"),
            energy::default_factor_key(EnergyCarrier::Electricity),
        );

        assert_eq!(resolved.entry.key, "electricity.residualMix");
        assert!(!resolved.defaulted);
    }

    #[test]
    fn missing_key_falls_back_to_category_default() {
        let resolved = resolve_factor(
            &energy::ENERGY_FACTORS,
            None,
            energy::default_factor_key(EnergyCarrier::DistrictHeating),
        );

        assert_eq!(resolved.entry.key, "districtHeating.average");
        assert!(resolved.defaulted);
    }

    #[test]
    fn explicit_key_matching_the_default_still_counts_as_explicit() {
        let resolved = resolve_factor(
            &energy::ENERGY_FACTORS,
            Some("electricity.average"),
            energy::default_factor_key(EnergyCarrier::Electricity),
        );

        assert!(!resolved.defaulted);
    }

    #[test]
    #[should_panic(expected = "unknown factor key")]
    fn unknown_key_is_a_programming_error() {
        energy::ENERGY_FACTORS.get("hydrogen.experimental");
    }
}
