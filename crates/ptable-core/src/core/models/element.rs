use super::column::Column;
use super::family::{Family, MetallicState};
use super::orbital::{AbbreviatedConfiguration, ElectronConfiguration, OrbitalTerm};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// One row of the raw element table: the only data not derived by the engine.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ElementSeed {
    pub atomic_number: u32,
    pub symbol: String,
    /// Lowercase element name.
    pub name: String,
    pub atomic_mass: f64,
}

/// The complete, derived description of one element.
///
/// Every field is a function of the atomic number (plus the seed row for that
/// number). Instances are built once by the engine and are read-only
/// afterwards; all access goes through the getters below.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ElementDescriptor {
    atomic_number: u32,
    symbol: String,
    name: String,
    atomic_mass: f64,
    protons: u32,
    neutrons: u32,
    electrons: u32,
    period: u8,
    column: Column,
    column_enumeration: f64,
    electron_config: ElectronConfiguration,
    highest_occupied_orbital: OrbitalTerm,
    short_electron_config: AbbreviatedConfiguration,
    family: Family,
    metallic_state: MetallicState,
}

/// Derived parts of a descriptor, grouped so the engine can hand them over in
/// one piece.
#[derive(Debug, Clone)]
pub(crate) struct DerivedParts {
    pub period: u8,
    pub column: Column,
    pub electron_config: ElectronConfiguration,
    pub highest_occupied_orbital: OrbitalTerm,
    pub short_electron_config: AbbreviatedConfiguration,
    pub family: Family,
}

impl ElementDescriptor {
    pub(crate) fn assemble(seed: &ElementSeed, parts: DerivedParts) -> Self {
        let protons = seed.atomic_number;
        let mass_number = seed.atomic_mass.round() as u32;
        Self {
            atomic_number: seed.atomic_number,
            symbol: seed.symbol.clone(),
            name: seed.name.clone(),
            atomic_mass: seed.atomic_mass,
            protons,
            neutrons: mass_number.saturating_sub(protons),
            electrons: protons,
            period: parts.period,
            column: parts.column,
            column_enumeration: parts.column.enumeration(),
            electron_config: parts.electron_config,
            highest_occupied_orbital: parts.highest_occupied_orbital,
            short_electron_config: parts.short_electron_config,
            family: parts.family,
            metallic_state: parts.family.metallic_state(),
        }
    }

    pub fn atomic_number(&self) -> u32 {
        self.atomic_number
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Lowercase name, e.g. `"iron"`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name with its first letter capitalized, e.g. `"Iron"`.
    pub fn display_name(&self) -> String {
        let mut chars = self.name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    pub fn atomic_mass(&self) -> f64 {
        self.atomic_mass
    }

    pub fn protons(&self) -> u32 {
        self.protons
    }

    /// `round(atomic mass) - protons`.
    pub fn neutrons(&self) -> u32 {
        self.neutrons
    }

    /// Always equal to the proton count; only neutral ground states are modeled.
    pub fn electrons(&self) -> u32 {
        self.electrons
    }

    pub fn period(&self) -> u8 {
        self.period
    }

    pub fn column(&self) -> Column {
        self.column
    }

    pub fn column_enumeration(&self) -> f64 {
        self.column_enumeration
    }

    pub fn electron_config(&self) -> &ElectronConfiguration {
        &self.electron_config
    }

    pub fn highest_occupied_orbital(&self) -> OrbitalTerm {
        self.highest_occupied_orbital
    }

    pub fn short_electron_config(&self) -> &AbbreviatedConfiguration {
        &self.short_electron_config
    }

    pub fn family(&self) -> Family {
        self.family
    }

    pub fn metallic_state(&self) -> MetallicState {
        self.metallic_state
    }

    pub fn is_metal(&self) -> bool {
        self.family.is_metal()
    }

    pub fn is_nonmetal(&self) -> bool {
        self.family.is_nonmetal()
    }

    pub fn is_metalloid(&self) -> bool {
        self.family.is_metalloid()
    }

    pub fn is_inner_transition_metal(&self) -> bool {
        self.family.is_inner_transition_metal()
    }

    /// Atomic number modulo 3, the paid hint in the guessing game.
    pub fn mod3_hint(&self) -> u32 {
        self.atomic_number % 3
    }

    /// Compares two descriptors by atomic number.
    pub fn cmp_by_atomic_number(&self, other: &Self) -> Ordering {
        self.atomic_number.cmp(&other.atomic_number)
    }
}
