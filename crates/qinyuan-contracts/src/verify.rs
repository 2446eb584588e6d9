//! Verification report types.
//!
//! Produced by the static-table verifier. A report collects every failure
//! rather than stopping at the first one.

use serde::{Deserialize, Serialize};

/// The result of checking a rule table against the ingredient catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationReport {
    /// True only if no check failed.
    pub passed: bool,
    /// Every failure found. Empty on pass.
    pub failures: Vec<VerificationFailure>,
}

impl VerificationReport {
    pub fn from_failures(failures: Vec<VerificationFailure>) -> Self {
        Self {
            passed: failures.is_empty(),
            failures,
        }
    }
}

/// A single failed check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationFailure {
    /// Which check failed (e.g. `"highlight-subset"`).
    pub rule_id: String,
    /// The formula or ingredient the failure is about.
    pub subject: String,
    pub message: String,
}
