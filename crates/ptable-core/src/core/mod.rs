//! # Core Module
//!
//! Stateless building blocks: the value types describing an element and the
//! seed data the engine derives everything else from.
//!
//! - **Models** ([`models`]) - Columns, families, orbital terms, and descriptors
//! - **Data** ([`data`]) - The fixed 118-row seed table and its loader

pub mod data;
pub mod models;
