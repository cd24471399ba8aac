use super::error::EngineError;
use crate::core::data::seed::{SeedTable, TOTAL_ELEMENT_COUNT};
use crate::core::models::element::ElementSeed;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// A minimal key identifying one element.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ElementKey {
    AtomicNumber(u32),
    /// A symbol (two characters or fewer) or a full name, matched ignoring case.
    Text(String),
}

impl From<u32> for ElementKey {
    fn from(n: u32) -> Self {
        ElementKey::AtomicNumber(n)
    }
}

/// Negative numbers map to atomic number 0, which never resolves.
impl From<i32> for ElementKey {
    fn from(n: i32) -> Self {
        ElementKey::AtomicNumber(u32::try_from(n).unwrap_or(0))
    }
}

/// Text keys are trimmed, matching what `FromStr` does.
impl From<&str> for ElementKey {
    fn from(s: &str) -> Self {
        ElementKey::Text(s.trim().to_string())
    }
}

impl From<String> for ElementKey {
    fn from(s: String) -> Self {
        match s.trim() {
            trimmed if trimmed.len() == s.len() => ElementKey::Text(s),
            trimmed => ElementKey::Text(trimmed.to_string()),
        }
    }
}

impl FromStr for ElementKey {
    type Err = Infallible;

    /// All-digit input becomes an atomic number; anything else is kept as text.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if !trimmed.is_empty() && trimmed.chars().all(|c| c.is_ascii_digit()) {
            if let Ok(n) = trimmed.parse::<u32>() {
                return Ok(ElementKey::AtomicNumber(n));
            }
        }
        Ok(ElementKey::Text(trimmed.to_string()))
    }
}

impl fmt::Display for ElementKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementKey::AtomicNumber(n) => write!(f, "atomic number {}", n),
            ElementKey::Text(s) => write!(f, "'{}'", s),
        }
    }
}

/// Resolves `key` to its seed row by exact match.
///
/// Text of at most two characters is matched against symbols, longer text
/// against names; both comparisons ignore case.
pub fn resolve<'a>(seeds: &'a SeedTable, key: &ElementKey) -> Result<&'a ElementSeed, EngineError> {
    let found = match key {
        ElementKey::AtomicNumber(n) => {
            if !(1..=TOTAL_ELEMENT_COUNT).contains(n) {
                return Err(EngineError::InvalidKey(format!(
                    "atomic number {} is outside 1..={}",
                    n, TOTAL_ELEMENT_COUNT
                )));
            }
            seeds.get(*n)
        }
        ElementKey::Text(text) if text.chars().count() <= 2 => seeds.by_symbol(text),
        ElementKey::Text(text) => seeds.by_name(text),
    };
    found.ok_or_else(|| EngineError::InvalidKey(format!("no element matches {}", key)))
}
