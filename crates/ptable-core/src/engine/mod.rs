//! # Engine Module
//!
//! Derives every element attribute from the atomic number and its seed row.
//!
//! ## Overview
//!
//! Derivation is a fixed pipeline. Each step is a pure function of the results
//! before it, so the steps live in separate modules and are tested in isolation:
//!
//! - **Period** ([`period`]) - Period lookup from cumulative row boundaries
//! - **Column** ([`column`]) - Column token from the offset within the period
//! - **Configuration** ([`configuration`]) - Full and abbreviated electron configurations
//! - **Family** ([`family`]) - Ordered family rules over column enumeration and period
//! - **Descriptor** ([`descriptor`]) - Runs the pipeline and checks its invariants
//!
//! Alongside the pipeline:
//!
//! - **Key Resolution** ([`resolver`]) - Atomic number, symbol, or name to a seed row
//! - **Options** ([`config`]) - Table construction options and their builder
//! - **Error Handling** ([`error`]) - Invalid keys and invariant violations

pub mod column;
pub mod config;
pub mod configuration;
pub mod descriptor;
pub mod error;
pub mod family;
pub mod period;
pub mod resolver;
