//! Ingredient catalog loading.
//!
//! The catalog document is a flat `[[ingredients]]` array. Validation of the
//! entries themselves lives in `IngredientCatalog::new`.

use std::path::Path;
use std::sync::OnceLock;

use serde::Deserialize;

use qinyuan_contracts::{
    error::{QinyuanError, QinyuanResult},
    ingredient::{IngredientCatalog, IngredientDescriptor},
};

const BUILTIN_CATALOG: &str = include_str!("../tables/ingredients.toml");

static BUILTIN: OnceLock<IngredientCatalog> = OnceLock::new();

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogDocument {
    ingredients: Vec<IngredientDescriptor>,
}

pub fn catalog_from_toml_str(s: &str) -> QinyuanResult<IngredientCatalog> {
    let doc: CatalogDocument = toml::from_str(s).map_err(|e| QinyuanError::ConfigError {
        reason: format!("failed to parse ingredient catalog TOML: {}", e),
    })?;
    IngredientCatalog::new(doc.ingredients)
}

pub fn catalog_from_file(path: &Path) -> QinyuanResult<IngredientCatalog> {
    let contents = std::fs::read_to_string(path).map_err(|e| QinyuanError::ConfigError {
        reason: format!("failed to read catalog file '{}': {}", path.display(), e),
    })?;
    catalog_from_toml_str(&contents)
}

/// The catalog compiled into the binary, parsed once per process.
pub fn builtin_catalog() -> QinyuanResult<&'static IngredientCatalog> {
    if let Some(catalog) = BUILTIN.get() {
        return Ok(catalog);
    }
    let parsed = catalog_from_toml_str(BUILTIN_CATALOG)?;
    Ok(BUILTIN.get_or_init(|| parsed))
}
