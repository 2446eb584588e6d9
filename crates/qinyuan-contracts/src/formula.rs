//! Formula records and selection results.
//!
//! A `FormulaRecord` is a static literal of the rule table: which
//! ingredients at which dosage, which of them to call out, and the condition
//! it targets. Only the choice of record depends on a snapshot.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::ingredient::{IngredientCatalog, IngredientCategory, IngredientId};

/// The tradition a formula leans on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FormulaType {
    Balanced,
    TcmFocused,
    WesternFocused,
}

impl FormulaType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormulaType::Balanced => "balanced",
            FormulaType::TcmFocused => "tcm-focused",
            FormulaType::WesternFocused => "western-focused",
        }
    }
}

/// A named set of ingredient dosages recommended for one condition.
///
/// Serialized with the transport names `name`, `forCondition`, `type`,
/// `elementLevels`, `highlightedElements`. Dosage units come from the
/// catalog entry of each ingredient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FormulaRecord {
    pub name: String,
    pub for_condition: String,
    #[serde(rename = "type")]
    pub formula_type: FormulaType,
    pub element_levels: BTreeMap<IngredientId, f64>,
    /// Ingredients called out for the matched condition, in display order.
    /// Each must appear in `element_levels` with a dosage above zero.
    pub highlighted_elements: Vec<IngredientId>,
}

/// Share of a formula's total dosage per category, in whole percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRatio {
    pub tcm: u32,
    pub western: u32,
}

/// A medication-interaction notice for one ingredient of a formula.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionWarning {
    pub ingredient: IngredientId,
    pub interacts_with: Vec<String>,
}

impl FormulaRecord {
    /// Dosage of `id`, zero when the formula does not list it.
    pub fn dosage(&self, id: &str) -> f64 {
        self.element_levels.get(id).copied().unwrap_or(0.0)
    }

    pub fn is_highlighted(&self, id: &str) -> bool {
        self.highlighted_elements.iter().any(|h| h.as_str() == id)
    }

    /// Ingredients with a dosage above zero, in id order.
    pub fn active_ingredients(&self) -> impl Iterator<Item = (&IngredientId, f64)> {
        self.element_levels
            .iter()
            .filter(|(_, dose)| **dose > 0.0)
            .map(|(id, dose)| (id, *dose))
    }

    /// Split the total dosage between TCM and western ingredients.
    ///
    /// Ingredients absent from `catalog` are ignored. A formula with no
    /// counted dosage reports an even 50/50 split.
    pub fn category_ratio(&self, catalog: &IngredientCatalog) -> CategoryRatio {
        let (mut tcm, mut western) = (0.0_f64, 0.0_f64);
        for (id, dose) in &self.element_levels {
            match catalog.get(id.as_str()).map(|e| e.category) {
                Some(IngredientCategory::Tcm) => tcm += dose,
                Some(IngredientCategory::Western) => western += dose,
                None => {}
            }
        }

        let total = tcm + western;
        if total == 0.0 {
            return CategoryRatio { tcm: 50, western: 50 };
        }

        CategoryRatio {
            tcm: (tcm / total * 100.0).round() as u32,
            western: (western / total * 100.0).round() as u32,
        }
    }

    /// Interaction notices for every dosed ingredient that has any.
    pub fn interaction_warnings(&self, catalog: &IngredientCatalog) -> Vec<InteractionWarning> {
        self.active_ingredients()
            .filter_map(|(id, _)| catalog.get(id.as_str()))
            .filter(|entry| !entry.interacts_with.is_empty())
            .map(|entry| InteractionWarning {
                ingredient: entry.id.clone(),
                interacts_with: entry.interacts_with.clone(),
            })
            .collect()
    }
}

/// The outcome of running a snapshot through a rule table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Selection<'a> {
    /// Id of the rule that matched.
    pub rule_id: &'a str,
    pub formula: &'a FormulaRecord,
}
