//! Maximum dosage calculation.

use crate::types::{DosageResult, Formulation};

/// Concentration of the active drug: 1 mL of solution carries 40 mg.
pub const MG_PER_ML: f64 = 40.0;

/// Maximum allowable dosage for each allowed formulation at the given weight.
///
/// `dose_mg = weight * max_dosage_per_kg`, `dose_ml = dose_mg / 40`.
/// Results keep full precision; rounding is a display concern
/// (`DosageResult::display_line`). The caller is responsible for having
/// validated the weight (see `weight::parse_weight`).
pub fn max_dosage(weight_kg: f64, allowed: &[&Formulation]) -> Vec<DosageResult> {
    allowed
        .iter()
        .map(|formulation| {
            let dose_mg = weight_kg * formulation.max_dosage_per_kg;
            DosageResult {
                formulation_name: formulation.name.clone(),
                dose_mg,
                dose_ml: dose_mg / MG_PER_ML,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::build_default_catalog;
    use crate::eligibility::allowed_formulations;
    use crate::types::PatientConditions;

    #[test]
    fn test_reference_dosage_70kg() {
        let catalog = build_default_catalog();
        let formulation = catalog.get("Ultracain D-S 1:200,000").unwrap();

        let results = max_dosage(70.0, &[formulation]);

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].dose_mg, 490.0);
        assert_eq!(results[0].dose_ml, 12.25);
    }

    #[test]
    fn test_one_result_per_allowed_formulation() {
        let catalog = build_default_catalog();
        let allowed = allowed_formulations(&catalog, &PatientConditions::new());

        let results = max_dosage(70.0, &allowed);

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].formulation_name, "Ultracain D- without Adrenaline");
        assert_eq!(results[0].dose_mg, 280.0);
        assert_eq!(results[0].dose_ml, 7.0);
    }

    #[test]
    fn test_empty_allowed_yields_empty_results() {
        let results = max_dosage(70.0, &[]);
        assert!(results.is_empty());
    }

    #[test]
    fn test_fractional_weight_keeps_full_precision() {
        let catalog = build_default_catalog();
        let formulation = catalog.get("Ultracain D- without Adrenaline").unwrap();

        let results = max_dosage(62.5, &[formulation]);

        assert_eq!(results[0].dose_mg, 250.0);
        assert_eq!(results[0].dose_ml, 6.25);
    }
}
