//! Classifier threshold configuration.
//!
//! Defaults are the clinical cut-offs the dashboard has always used. A TOML
//! file may override any subset; missing keys keep their default.
//!
//! ```toml
//! high_stress_above = 55.0
//! low_hydration_below = 65.0
//! ```
//!
//! These thresholds are independent of the formula rule table. The two
//! deliberately do not share values.

use std::path::Path;

use serde::{Deserialize, Serialize};

use qinyuan_contracts::error::{QinyuanError, QinyuanResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClassifierThresholds {
    /// Yin/yang balance strictly above this is yang-excess.
    pub yang_excess_above: f64,
    /// Yin/yang balance strictly below this is yin-deficiency.
    pub yin_deficiency_below: f64,
    /// A meridian scoring strictly below this is deficient.
    pub meridian_deficient_below: f64,
    /// Every meridian strictly above this grades the system excellent.
    pub meridian_excellent_above: f64,
    /// Every meridian strictly above this grades the system good.
    pub meridian_good_above: f64,
    pub high_stress_above: f64,
    pub high_inflammation_above: f64,
    pub low_immune_below: f64,
    pub low_hydration_below: f64,
    /// Cap on the recommended-ingredient list.
    pub max_recommended_ingredients: usize,
}

impl Default for ClassifierThresholds {
    fn default() -> Self {
        Self {
            yang_excess_above: 0.3,
            yin_deficiency_below: -0.3,
            meridian_deficient_below: 70.0,
            meridian_excellent_above: 80.0,
            meridian_good_above: 70.0,
            high_stress_above: 50.0,
            high_inflammation_above: 2.5,
            low_immune_below: 70.0,
            low_hydration_below: 60.0,
            max_recommended_ingredients: 4,
        }
    }
}

impl ClassifierThresholds {
    /// Parse `s` as TOML.
    ///
    /// Returns `QinyuanError::ConfigError` for malformed TOML, unknown keys,
    /// or a yin/yang band whose lower edge sits above its upper edge.
    pub fn from_toml_str(s: &str) -> QinyuanResult<Self> {
        let thresholds: Self = toml::from_str(s).map_err(|e| QinyuanError::ConfigError {
            reason: format!("failed to parse classifier thresholds TOML: {}", e),
        })?;

        if thresholds.yin_deficiency_below > thresholds.yang_excess_above {
            return Err(QinyuanError::ConfigError {
                reason: format!(
                    "yin_deficiency_below ({}) must not exceed yang_excess_above ({})",
                    thresholds.yin_deficiency_below, thresholds.yang_excess_above
                ),
            });
        }

        Ok(thresholds)
    }

    pub fn from_file(path: &Path) -> QinyuanResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| QinyuanError::ConfigError {
            reason: format!("failed to read thresholds file '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&contents)
    }
}
