//! Built-in catalog of Articaine-based anaesthetic formulations.
//!
//! This module provides the three Ultracain formulations the system knows
//! about, each with its contraindication list and per-kilogram dosing limit.

use crate::config::Config;
use crate::types::*;
use crate::{Error, Result};
use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Cached default catalog - built once and reused across all operations
static DEFAULT_CATALOG: Lazy<Catalog> = Lazy::new(build_default_catalog_internal);

/// Get a reference to the cached default catalog
pub fn get_default_catalog() -> &'static Catalog {
    &DEFAULT_CATALOG
}

/// Builds the default catalog of Ultracain formulations
///
/// **Note**: For production use, prefer `get_default_catalog()` which returns a
/// cached reference. This function is retained for testing and custom catalog creation.
pub fn build_default_catalog() -> Catalog {
    build_default_catalog_internal()
}

fn build_default_catalog_internal() -> Catalog {
    let mut formulations = Vec::new();

    formulations.push(Formulation {
        name: "Ultracain D- without Adrenaline".into(),
        contraindications: vec![
            "Hypersensitivity to Articaine or other amide-type local anaesthetics".into(),
            "AV block of second and third degree".into(),
            "Acute decompensated heart failure".into(),
            "Severe hypotension".into(),
        ],
        max_dosage_per_kg: 4.0,
    });

    formulations.push(Formulation {
        name: "Ultracain D-S 1:200,000".into(),
        contraindications: vec![
            "Hypersensitivity to Articaine or other amide-type local anaesthetics".into(),
            "Hypersensitivity to Epinephrine".into(),
            "Bronchial asthma with sulfite hypersensitivity".into(),
            "AV block of second and third degree".into(),
            "Acute decompensated heart failure".into(),
            "Severe hypotension".into(),
            "Non-cardioselective beta blockers (e.g., Propranolol)".into(),
            "Paroxysmal tachycardia or high-frequency absolute arrhythmia".into(),
            "Hyperthyroidism".into(),
            "Pheochromocytoma".into(),
            "Narrow-angle glaucoma".into(),
        ],
        max_dosage_per_kg: 7.0,
    });

    formulations.push(Formulation {
        name: "Ultracain D-S forte 1:100,000".into(),
        contraindications: vec![
            "Hypersensitivity to Articaine or other amide-type local anaesthetics".into(),
            "Hypersensitivity to Epinephrine".into(),
            "Bronchial asthma with sulfite hypersensitivity".into(),
            "AV block of second and third degree".into(),
            "Acute decompensated heart failure".into(),
            "Severe hypotension".into(),
            "Non-cardioselective beta blockers (e.g., Propranolol)".into(),
            "Paroxysmal tachycardia or high-frequency absolute arrhythmia".into(),
            "Hyperthyroidism".into(),
            "Pheochromocytoma".into(),
            "Narrow-angle glaucoma".into(),
        ],
        max_dosage_per_kg: 7.0,
    });

    Catalog { formulations }
}

/// Build the effective catalog: built-in formulations plus any custom
/// formulations declared in the config, validated as a whole.
///
/// Without custom formulations this hands out a clone of the cached default
/// catalog instead of rebuilding it.
pub fn build_catalog(config: &Config) -> Result<Catalog> {
    if config.formulations.custom.is_empty() {
        return Ok(get_default_catalog().clone());
    }

    let mut catalog = build_default_catalog();

    for custom in &config.formulations.custom {
        catalog.formulations.push(Formulation {
            name: custom.name.clone(),
            contraindications: custom.contraindications.clone(),
            max_dosage_per_kg: custom.max_dosage_per_kg,
        });
    }

    let errors = catalog.validate();
    if !errors.is_empty() {
        return Err(Error::CatalogValidation(errors.join("; ")));
    }

    Ok(catalog)
}

impl Catalog {
    /// Validate the catalog for consistency and completeness
    ///
    /// Returns a list of validation errors, or empty Vec if valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.formulations.is_empty() {
            errors.push("Catalog has no formulations".to_string());
        }

        let mut seen = HashSet::new();
        for formulation in &self.formulations {
            if formulation.name.is_empty() {
                errors.push("Formulation has empty name".to_string());
            }
            if !seen.insert(formulation.name.as_str()) {
                errors.push(format!("Duplicate formulation name '{}'", formulation.name));
            }

            // NaN fails this check too
            if !(formulation.max_dosage_per_kg > 0.0) {
                errors.push(format!(
                    "Formulation '{}' has non-positive max_dosage_per_kg {}",
                    formulation.name, formulation.max_dosage_per_kg
                ));
            }

            for condition in &formulation.contraindications {
                if condition.is_empty() {
                    errors.push(format!(
                        "Formulation '{}' has an empty contraindication entry",
                        formulation.name
                    ));
                }
            }
        }

        errors
    }

    /// All distinct contraindications across the catalog, in first-seen
    /// catalog order.
    ///
    /// The same condition is listed by several formulations; deduplicating
    /// here keeps the questionnaire at one prompt per condition.
    pub fn unique_contraindications(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut unique = Vec::new();

        for formulation in &self.formulations {
            for condition in &formulation.contraindications {
                if seen.insert(condition.as_str()) {
                    unique.push(condition.clone());
                }
            }
        }

        unique
    }
}
