//! Static checks of formula records against the ingredient catalog.
//!
//! These run without any snapshot. Each check is evaluated for every
//! formula and every failure is collected before returning:
//!
//! - `highlight-subset`: a highlighted id must be dosed above zero
//! - `highlight-unique`: no id is highlighted twice
//! - `known-ingredient`: every dosed id exists in the catalog
//! - `dosage-within-bounds`: every dosage sits inside the catalog bounds

use std::collections::HashSet;

use tracing::{debug, warn};

use qinyuan_contracts::{
    formula::FormulaRecord,
    ingredient::IngredientCatalog,
    verify::{VerificationFailure, VerificationReport},
};

#[derive(Debug, Default, Clone, Copy)]
pub struct TableVerifier;

impl TableVerifier {
    pub fn new() -> Self {
        Self
    }

    pub fn verify<'a>(
        &self,
        formulas: impl IntoIterator<Item = &'a FormulaRecord>,
        catalog: &IngredientCatalog,
    ) -> VerificationReport {
        let mut failures: Vec<VerificationFailure> = Vec::new();

        for formula in formulas {
            debug!(formula = %formula.name, "verifying formula");
            let fail = |rule_id: &str, message: String| VerificationFailure {
                rule_id: rule_id.to_string(),
                subject: formula.name.clone(),
                message,
            };

            let mut seen = HashSet::new();
            for id in &formula.highlighted_elements {
                if formula.dosage(id.as_str()) <= 0.0 {
                    failures.push(fail(
                        "highlight-subset",
                        format!("highlighted ingredient '{id}' has no dosage"),
                    ));
                }
                if !seen.insert(id.as_str()) {
                    failures.push(fail(
                        "highlight-unique",
                        format!("ingredient '{id}' is highlighted more than once"),
                    ));
                }
            }

            for (id, dose) in &formula.element_levels {
                match catalog.get(id.as_str()) {
                    None => failures.push(fail(
                        "known-ingredient",
                        format!("ingredient '{id}' is not in the catalog"),
                    )),
                    Some(entry) if *dose < entry.min_level || *dose > entry.max_level => {
                        failures.push(fail(
                            "dosage-within-bounds",
                            format!(
                                "dosage {dose} {} of '{id}' is outside [{}, {}]",
                                entry.unit, entry.min_level, entry.max_level
                            ),
                        ))
                    }
                    Some(_) => {}
                }
            }
        }

        for failure in &failures {
            warn!(
                rule_id = %failure.rule_id,
                subject = %failure.subject,
                message = %failure.message,
                "formula table check failed"
            );
        }

        VerificationReport::from_failures(failures)
    }
}
