//! Ingredient catalog types.
//!
//! The catalog is reference data for rendering and validation. Formula
//! selection never reads it; formulas only refer to catalog entries by id.

use std::borrow::Borrow;
use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    error::{QinyuanError, QinyuanResult},
    meridian::Meridian,
};

/// Stable identifier of a catalog ingredient (e.g. `"ginseng"`, `"vitamin_b"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IngredientId(pub String);

impl IngredientId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for IngredientId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IngredientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Which tradition an ingredient comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IngredientCategory {
    Tcm,
    Western,
}

impl IngredientCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            IngredientCategory::Tcm => "tcm",
            IngredientCategory::Western => "western",
        }
    }
}

/// One catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IngredientDescriptor {
    pub id: IngredientId,
    /// Display name.
    pub name: String,
    /// Hex colour used by the renderer.
    pub color: String,
    pub benefits: String,
    #[serde(default)]
    pub default_level: f64,
    #[serde(default)]
    pub min_level: f64,
    pub max_level: f64,
    /// `mg/L` or `µg/L`.
    pub unit: String,
    pub category: IngredientCategory,
    /// Meridians the ingredient enters. Only TCM entries carry any.
    #[serde(default)]
    pub meridians: Vec<Meridian>,
    /// Medication classes the ingredient is known to interact with.
    #[serde(default)]
    pub interacts_with: Vec<String>,
}

/// The immutable ingredient catalog.
///
/// Construction checks id uniqueness and dosage-bound sanity; once built
/// the catalog is never modified.
#[derive(Debug, Clone)]
pub struct IngredientCatalog {
    entries: Vec<IngredientDescriptor>,
}

impl IngredientCatalog {
    /// Build a catalog, rejecting duplicate ids, inverted bounds, defaults
    /// outside their bounds, and western entries that claim meridians.
    pub fn new(entries: Vec<IngredientDescriptor>) -> QinyuanResult<Self> {
        let mut seen = HashSet::new();
        for entry in &entries {
            if !seen.insert(entry.id.as_str()) {
                return Err(QinyuanError::ConfigError {
                    reason: format!("duplicate ingredient id '{}'", entry.id),
                });
            }
            if entry.min_level > entry.max_level {
                return Err(QinyuanError::ConfigError {
                    reason: format!(
                        "ingredient '{}' has min_level {} above max_level {}",
                        entry.id, entry.min_level, entry.max_level
                    ),
                });
            }
            if entry.default_level < entry.min_level || entry.default_level > entry.max_level {
                return Err(QinyuanError::ConfigError {
                    reason: format!(
                        "ingredient '{}' default_level {} is outside [{}, {}]",
                        entry.id, entry.default_level, entry.min_level, entry.max_level
                    ),
                });
            }
            if entry.category == IngredientCategory::Western && !entry.meridians.is_empty() {
                return Err(QinyuanError::ConfigError {
                    reason: format!("western ingredient '{}' cannot list meridians", entry.id),
                });
            }
        }
        Ok(Self { entries })
    }

    pub fn get(&self, id: &str) -> Option<&IngredientDescriptor> {
        self.entries.iter().find(|e| e.id.as_str() == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Entries in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &IngredientDescriptor> {
        self.entries.iter()
    }

    pub fn by_category(
        &self,
        category: IngredientCategory,
    ) -> impl Iterator<Item = &IngredientDescriptor> {
        self.entries.iter().filter(move |e| e.category == category)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
