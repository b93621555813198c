#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Terminal car sales inventory.
//!
//! Cars are entered through a validated form and stored in an in-memory
//! collection grouped by manufacturer.

pub mod collection;
pub mod config;
pub mod logging;
pub mod model;
pub mod tui;
