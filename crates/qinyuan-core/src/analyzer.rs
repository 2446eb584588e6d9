//! The analyzer: one reading in, labels and formula out.
//!
//! The analyzer owns a classifier and a formula selector and feeds both the
//! same snapshot. The two never see each other's output. Their thresholds
//! are independent and may disagree (stress > 50 raises a risk flag, stress
//! > 60 selects the stress-relief formula).

use tracing::{debug, info};

use qinyuan_contracts::{
    analysis::Analysis,
    error::QinyuanResult,
    formula::Selection,
    labels::ClassificationLabels,
    snapshot::{HealthSnapshot, Reading},
};

use crate::traits::{Classifier, FormulaSelector, SnapshotSource};

/// Wires a `Classifier` and a `FormulaSelector` together.
///
/// Holds no per-reading state; `analyze` may be called any number of times
/// in any order.
pub struct Analyzer {
    classifier: Box<dyn Classifier>,
    selector: Box<dyn FormulaSelector>,
}

impl Analyzer {
    pub fn new(classifier: Box<dyn Classifier>, selector: Box<dyn FormulaSelector>) -> Self {
        Self { classifier, selector }
    }

    /// Classify and select for a bare snapshot.
    pub fn evaluate(&self, snapshot: &HealthSnapshot) -> (ClassificationLabels, Selection<'_>) {
        let labels = self.classifier.classify(snapshot);
        let selection = self.selector.select(snapshot);

        debug!(
            rule_id = %selection.rule_id,
            formula = %selection.formula.name,
            constitution = ?labels.constitution_type,
            risk_flags = ?labels.risk_flags,
            "snapshot evaluated"
        );

        (labels, selection)
    }

    /// Analyse one reading.
    pub fn analyze(&self, reading: &Reading) -> Analysis {
        let (labels, selection) = self.evaluate(&reading.snapshot);
        Analysis {
            reading_id: reading.id,
            captured_at: reading.captured_at,
            labels,
            rule_id: selection.rule_id.to_string(),
            formula: selection.formula.clone(),
        }
    }

    /// Pull `ticks` readings from `source` and analyse each in turn.
    ///
    /// Stops at the first source error; readings already analysed are lost
    /// with it.
    pub fn run_session(
        &self,
        source: &mut dyn SnapshotSource,
        ticks: usize,
    ) -> QinyuanResult<Vec<Analysis>> {
        info!(device = %source.device_name(), ticks, "analysis session starting");

        let mut analyses = Vec::with_capacity(ticks);
        for tick in 0..ticks {
            let reading = source.next_reading()?;
            let analysis = self.analyze(&reading);
            debug!(tick, rule_id = %analysis.rule_id, "tick analysed");
            analyses.push(analysis);
        }

        Ok(analyses)
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────
