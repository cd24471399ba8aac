use crate::core::data::seed::SeedLoadError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid element key: {0}")]
    InvalidKey(String),

    #[error("Derivation invariant violated for atomic number {atomic_number}: {rule}")]
    InvariantViolation { atomic_number: u32, rule: String },

    #[error("Seed data could not be loaded: {source}")]
    Seed {
        #[from]
        source: SeedLoadError,
    },
}

impl EngineError {
    pub(crate) fn invariant(atomic_number: u32, rule: impl Into<String>) -> Self {
        EngineError::InvariantViolation {
            atomic_number,
            rule: rule.into(),
        }
    }

    /// `true` for errors caused by caller input, which can be retried with a
    /// different key.
    pub fn is_invalid_key(&self) -> bool {
        matches!(self, EngineError::InvalidKey(_))
    }
}
