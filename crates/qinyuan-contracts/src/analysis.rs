//! Per-reading analysis results.
//!
//! `Analysis` is what the analyzer hands to the presentation layer: the
//! labels and the selected formula for one reading, plus the id of the rule
//! that selected it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{formula::FormulaRecord, labels::ClassificationLabels, snapshot::ReadingId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    pub reading_id: ReadingId,
    pub captured_at: DateTime<Utc>,
    pub labels: ClassificationLabels,
    /// Id of the rule-table entry that produced `formula`.
    pub rule_id: String,
    pub formula: FormulaRecord,
}
