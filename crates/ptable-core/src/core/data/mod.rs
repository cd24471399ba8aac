//! Raw element data.
//!
//! The seed table holds the only per-element facts the engine does not derive:
//! atomic number, symbol, name, and atomic mass. A copy of the table ships with
//! the crate; alternative tables can be loaded from CSV files with the same
//! columns.

pub mod seed;
