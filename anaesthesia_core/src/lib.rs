#![forbid(unsafe_code)]

//! Core domain model and business logic for the Artidose system.
//!
//! This crate provides:
//! - Domain types (formulations, patient conditions, dosage results)
//! - The built-in formulation catalog
//! - The contraindication eligibility filter
//! - Maximum dosage calculation
//! - Weight input validation

pub mod types;
pub mod error;
pub mod catalog;
pub mod config;
pub mod logging;
pub mod eligibility;
pub mod dosage;
pub mod weight;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use catalog::{build_catalog, build_default_catalog, get_default_catalog};
pub use config::Config;
pub use eligibility::allowed_formulations;
pub use dosage::{max_dosage, MG_PER_ML};
pub use weight::{
    check_weight, parse_weight, WeightError, DEFAULT_WEIGHT_KG, MAX_WEIGHT_KG, MIN_WEIGHT_KG,
    WEIGHT_STEP_KG,
};
