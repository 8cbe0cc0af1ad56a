//! Contraindication eligibility filter.

use crate::types::{Catalog, Formulation, PatientConditions};

/// Formulations safe to use for a patient with the given conditions.
///
/// A formulation is allowed when none of its contraindications appear in the
/// patient's condition set; an empty condition set allows everything.
/// Output preserves catalog order.
pub fn allowed_formulations<'a>(
    catalog: &'a Catalog,
    conditions: &PatientConditions,
) -> Vec<&'a Formulation> {
    catalog
        .formulations
        .iter()
        .filter(|f| !f.contraindications.iter().any(|c| conditions.contains(c)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::build_default_catalog;

    fn conditions(names: &[&str]) -> PatientConditions {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_conditions_allow_all() {
        let catalog = build_default_catalog();
        let allowed = allowed_formulations(&catalog, &PatientConditions::new());
        assert_eq!(allowed.len(), 3);
    }

    #[test]
    fn test_articaine_hypersensitivity_excludes_all() {
        let catalog = build_default_catalog();
        let allowed = allowed_formulations(
            &catalog,
            &conditions(&[
                "Hypersensitivity to Articaine or other amide-type local anaesthetics",
                "AV block of second and third degree",
            ]),
        );
        assert!(allowed.is_empty());
    }

    #[test]
    fn test_epinephrine_conditions_allow_adrenaline_free_only() {
        let catalog = build_default_catalog();

        // Every contraindication the two adrenaline formulations share, none
        // of which applies to the adrenaline-free one.
        let allowed = allowed_formulations(
            &catalog,
            &conditions(&[
                "Hypersensitivity to Epinephrine",
                "Bronchial asthma with sulfite hypersensitivity",
                "Paroxysmal tachycardia or high-frequency absolute arrhythmia",
                "Non-cardioselective beta blockers (e.g., Propranolol)",
                "Hyperthyroidism",
                "Pheochromocytoma",
                "Narrow-angle glaucoma",
            ]),
        );

        assert_eq!(allowed.len(), 1);
        assert_eq!(allowed[0].name, "Ultracain D- without Adrenaline");
    }

    #[test]
    fn test_single_epinephrine_condition_allows_one() {
        let catalog = build_default_catalog();
        let allowed =
            allowed_formulations(&catalog, &conditions(&["Narrow-angle glaucoma"]));
        assert_eq!(allowed.len(), 1);
        assert_eq!(allowed[0].name, "Ultracain D- without Adrenaline");
    }

    #[test]
    fn test_unknown_condition_excludes_nothing() {
        let catalog = build_default_catalog();
        let allowed = allowed_formulations(&catalog, &conditions(&["Common cold"]));
        assert_eq!(allowed.len(), 3);
    }

    #[test]
    fn test_output_preserves_catalog_order() {
        let catalog = build_default_catalog();
        let allowed = allowed_formulations(&catalog, &PatientConditions::new());
        let names: Vec<_> = allowed.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Ultracain D- without Adrenaline",
                "Ultracain D-S 1:200,000",
                "Ultracain D-S forte 1:100,000",
            ]
        );
    }
}
