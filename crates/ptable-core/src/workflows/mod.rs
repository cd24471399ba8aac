//! # Workflows Module
//!
//! The public entry point of the library.
//!
//! [`table::PeriodicTable`] derives all 118 elements once at construction and
//! then answers lookups by atomic number, symbol, or name, along with the
//! curated subsets used by element browsers and quizzes (by family, by period,
//! without the lanthanide and actinide rows).

pub mod table;
