//! Core domain types for the Artidose system.
//!
//! This module defines the fundamental types used throughout the system:
//! - Anaesthetic formulations and their contraindications
//! - Patient condition sets
//! - Dosage calculation results

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// The set of conditions reported for a patient.
///
/// Each entry should be drawn from the union of all catalog contraindication
/// strings; unknown entries simply never match anything.
pub type PatientConditions = HashSet<String>;

/// A named anaesthetic formulation with its contraindications and dosing limit
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Formulation {
    /// Unique formulation name (catalog key)
    pub name: String,
    /// Conditions that disqualify this formulation
    pub contraindications: Vec<String>,
    /// Maximum safe dose in mg per kg of body weight (always positive)
    pub max_dosage_per_kg: f64,
}

/// The complete catalog of anaesthetic formulations.
///
/// Catalog order is significant: the eligibility filter and all rendered
/// output preserve it.
#[derive(Clone, Debug)]
pub struct Catalog {
    pub formulations: Vec<Formulation>,
}

impl Catalog {
    /// Look up a formulation by name
    pub fn get(&self, name: &str) -> Option<&Formulation> {
        self.formulations.iter().find(|f| f.name == name)
    }
}

/// Computed maximum dosage for a single formulation
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct DosageResult {
    pub formulation_name: String,
    /// Maximum dose in mg, full precision
    pub dose_mg: f64,
    /// Maximum dose in mL (dose_mg / 40), full precision
    pub dose_ml: f64,
}

impl DosageResult {
    /// One-line rendering used by both the CLI and the form.
    ///
    /// Rounding to one decimal happens here only; the stored values keep
    /// full precision.
    pub fn display_line(&self) -> String {
        format!(
            "- {}: {:.1} mg (~{:.1} ml)",
            self.formulation_name, self.dose_mg, self.dose_ml
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_line_rounds_to_one_decimal() {
        let result = DosageResult {
            formulation_name: "Ultracain D-S 1:200,000".into(),
            dose_mg: 700.0,
            dose_ml: 17.5,
        };
        assert_eq!(
            result.display_line(),
            "- Ultracain D-S 1:200,000: 700.0 mg (~17.5 ml)"
        );
    }

    #[test]
    fn test_catalog_get() {
        let catalog = Catalog {
            formulations: vec![Formulation {
                name: "test".into(),
                contraindications: vec![],
                max_dosage_per_kg: 4.0,
            }],
        };
        assert!(catalog.get("test").is_some());
        assert!(catalog.get("missing").is_none());
    }
}
