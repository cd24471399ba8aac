use phf::{Map, phf_map};
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The chemical family assigned to every element.
///
/// Exactly one family applies to each of the 118 elements. The metallic
/// classification and the inner-transition flag are derived from it rather than
/// stored alongside.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Family {
    AlkaliMetal,
    AlkalineEarthMetal,
    TransitionMetal,
    Lanthanide,
    Actinide,
    PostTransitionMetal,
    Metalloid,
    ReactiveNonmetal,
    Halogen,
    NobleGas,
}

/// Coarse metallic character of an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetallicState {
    Metal,
    Nonmetal,
    Metalloid,
}

impl Family {
    /// The ten families in their conventional listing order.
    pub const ALL: [Family; 10] = [
        Family::AlkaliMetal,
        Family::AlkalineEarthMetal,
        Family::TransitionMetal,
        Family::Lanthanide,
        Family::Actinide,
        Family::PostTransitionMetal,
        Family::Metalloid,
        Family::ReactiveNonmetal,
        Family::Halogen,
        Family::NobleGas,
    ];

    /// Upper-case label as shown to players, e.g. `"POST TRANSITION METAL"`.
    pub fn label(&self) -> &'static str {
        match self {
            Family::AlkaliMetal => "ALKALI METAL",
            Family::AlkalineEarthMetal => "ALKALINE EARTH METAL",
            Family::TransitionMetal => "TRANSITION METAL",
            Family::Lanthanide => "LANTHANIDE",
            Family::Actinide => "ACTINIDE",
            Family::PostTransitionMetal => "POST TRANSITION METAL",
            Family::Metalloid => "METALLOID",
            Family::ReactiveNonmetal => "REACTIVE NONMETAL",
            Family::Halogen => "HALOGEN",
            Family::NobleGas => "NOBLE GAS",
        }
    }

    pub fn metallic_state(&self) -> MetallicState {
        match self {
            Family::AlkaliMetal
            | Family::AlkalineEarthMetal
            | Family::TransitionMetal
            | Family::Lanthanide
            | Family::Actinide
            | Family::PostTransitionMetal => MetallicState::Metal,
            Family::ReactiveNonmetal | Family::Halogen | Family::NobleGas => {
                MetallicState::Nonmetal
            }
            Family::Metalloid => MetallicState::Metalloid,
        }
    }

    pub fn is_metal(&self) -> bool {
        self.metallic_state() == MetallicState::Metal
    }

    pub fn is_nonmetal(&self) -> bool {
        self.metallic_state() == MetallicState::Nonmetal
    }

    pub fn is_metalloid(&self) -> bool {
        self.metallic_state() == MetallicState::Metalloid
    }

    pub fn is_inner_transition_metal(&self) -> bool {
        matches!(self, Family::Lanthanide | Family::Actinide)
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Family {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl MetallicState {
    pub const ALL: [MetallicState; 3] = [
        MetallicState::Metal,
        MetallicState::Nonmetal,
        MetallicState::Metalloid,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MetallicState::Metal => "METAL",
            MetallicState::Nonmetal => "NONMETAL",
            MetallicState::Metalloid => "METALLOID",
        }
    }
}

impl fmt::Display for MetallicState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for MetallicState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

static FAMILY_LABELS: Map<&'static str, Family> = phf_map! {
    "ALKALI METAL" => Family::AlkaliMetal,
    "ALKALINE EARTH METAL" => Family::AlkalineEarthMetal,
    "TRANSITION METAL" => Family::TransitionMetal,
    "LANTHANIDE" => Family::Lanthanide,
    "ACTINIDE" => Family::Actinide,
    "POST TRANSITION METAL" => Family::PostTransitionMetal,
    "METALLOID" => Family::Metalloid,
    "REACTIVE NONMETAL" => Family::ReactiveNonmetal,
    "HALOGEN" => Family::Halogen,
    "NOBLE GAS" => Family::NobleGas,
};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Invalid element family: '{0}'")]
pub struct ParseFamilyError(pub String);

impl FromStr for Family {
    type Err = ParseFamilyError;

    /// Parses a family label. Case-insensitive; `-` and `_` are accepted in
    /// place of spaces, so `"noble-gas"` and `"POST_TRANSITION_METAL"` both work.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .map(|c| match c {
                '-' | '_' => ' ',
                other => other.to_ascii_uppercase(),
            })
            .collect();
        FAMILY_LABELS
            .get(normalized.as_str())
            .copied()
            .ok_or_else(|| ParseFamilyError(s.to_string()))
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Invalid metallic state: '{0}'")]
pub struct ParseMetallicStateError(pub String);

impl FromStr for MetallicState {
    type Err = ParseMetallicStateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "metal" => Ok(MetallicState::Metal),
            "nonmetal" | "non-metal" => Ok(MetallicState::Nonmetal),
            "metalloid" => Ok(MetallicState::Metalloid),
            _ => Err(ParseMetallicStateError(s.to_string())),
        }
    }
}
