//! # ptable
//!
//! A periodic-table descriptor engine. Given only an atomic number, symbol, or
//! name, it derives an element's period, column, electron configuration (full
//! and noble-gas abbreviated), family, and metallic state from a small fixed
//! seed table.
//!
//! ## Architecture
//!
//! - **[`core`]: The Foundation.** Immutable value types (`Column`, `Family`,
//!   `OrbitalTerm`, `ElementDescriptor`) and the seed table they are built from.
//!
//! - **[`engine`]: The Derivation Pipeline.** Pure functions for each derivation
//!   step, key resolution, construction options, and the error type.
//!
//! - **[`workflows`]: The Public API.** `PeriodicTable`, which runs the pipeline
//!   for every element once and serves lookups and subsets from the result.
//!
//! ## Quick Start
//!
//! ```
//! let iron = ptable::lookup("iron").unwrap();
//! assert_eq!(iron.column().to_string(), "8B");
//! assert_eq!(iron.short_electron_config().to_string(), "[Ar] 4s2 3d6");
//! ```

pub mod core;
pub mod engine;
pub mod workflows;

use crate::core::models::element::ElementDescriptor;
use crate::engine::error::EngineError;
use crate::engine::resolver::ElementKey;
use crate::workflows::table::PeriodicTable;

/// Looks up an element in the process-wide built-in table.
pub fn lookup(key: impl Into<ElementKey>) -> Result<&'static ElementDescriptor, EngineError> {
    PeriodicTable::global()?.lookup(key)
}

/// All 118 elements of the process-wide built-in table, by atomic number.
pub fn all_elements() -> Result<&'static [ElementDescriptor], EngineError> {
    Ok(PeriodicTable::global()?.all_elements())
}
