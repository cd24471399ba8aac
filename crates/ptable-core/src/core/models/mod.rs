//! # Core Models Module
//!
//! Value types shared by the derivation engine and its consumers.
//!
//! ## Key Components
//!
//! - [`column`] - Column tokens (`1A`, `8B`, `3LA`, ...) and their numeric enumeration
//! - [`family`] - The ten element families and the derived metallic state
//! - [`orbital`] - Orbital terms and full/abbreviated electron configurations
//! - [`element`] - The raw seed row and the derived element descriptor
//!
//! All types are immutable once built and cheap to clone.

pub mod column;
pub mod element;
pub mod family;
pub mod orbital;
