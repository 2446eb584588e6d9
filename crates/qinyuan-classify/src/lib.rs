//! # qinyuan-classify
//!
//! The metric classifier for the Qinyuan recommendation core.
//!
//! ## Overview
//!
//! [`ThresholdClassifier`] implements the
//! [`Classifier`](qinyuan_core::traits::Classifier) trait. It maps a health
//! snapshot to a [`ClassificationLabels`] record: constitution type, meridian
//! deficiencies, risk flags, electrolyte status, an overall meridian grade,
//! and up to four suggested ingredients.
//!
//! The free functions below run the default thresholds and cover the common
//! case without building a classifier.
//!
//! ```rust,ignore
//! use qinyuan_classify::classify;
//!
//! let labels = classify(&snapshot);
//! ```

pub mod advice;
pub mod engine;
pub mod thresholds;

pub use engine::{classify_electrolyte, ThresholdClassifier};
pub use thresholds::ClassifierThresholds;

use qinyuan_contracts::{
    electrolyte::{Electrolyte, ElectrolyteStatus},
    error::QinyuanResult,
    labels::{ClassificationLabels, ConstitutionType, RiskFlag},
    meridian::Meridian,
    snapshot::{HealthSnapshot, MeridianBalance},
};
use qinyuan_core::traits::Classifier;

/// Classify `snapshot` with the default thresholds.
pub fn classify(snapshot: &HealthSnapshot) -> ClassificationLabels {
    ThresholdClassifier::default().classify(snapshot)
}

/// Yang-excess above 0.3, yin-deficiency below -0.3, balanced otherwise.
pub fn classify_constitution(yin_yang_balance: f64) -> ConstitutionType {
    ThresholdClassifier::default().classify_constitution(yin_yang_balance)
}

/// Meridians scoring below 70, in declaration order.
pub fn find_meridian_deficiencies(balance: &MeridianBalance) -> Vec<Meridian> {
    ThresholdClassifier::default().find_meridian_deficiencies(balance)
}

pub fn compute_risk_flags(snapshot: &HealthSnapshot) -> Vec<RiskFlag> {
    ThresholdClassifier::default().compute_risk_flags(snapshot)
}

/// Classify an electrolyte given by name.
///
/// Returns `QinyuanError::UnknownElectrolyte` for a name outside the panel.
pub fn classify_electrolyte_named(name: &str, value: f64) -> QinyuanResult<ElectrolyteStatus> {
    let electrolyte: Electrolyte = name.parse()?;
    Ok(classify_electrolyte(electrolyte, value))
}

// ── Tests ─────────────────────────────────────────────────────────────────────
