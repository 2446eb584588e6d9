//! Seam traits of the recommendation core.
//!
//! - `Classifier`      derives labels from a snapshot
//! - `FormulaSelector` picks exactly one formula for a snapshot
//! - `SnapshotSource`  produces readings (the device layer)
//!
//! Classifier and selector implementations must be pure: no I/O, no interior
//! mutability, the same snapshot always yields the same output. Because
//! they hold no mutable state they are `Send + Sync` and callable from any
//! thread without locking.

use qinyuan_contracts::{
    error::QinyuanResult,
    formula::Selection,
    labels::ClassificationLabels,
    snapshot::{HealthSnapshot, Reading},
};

/// Maps a snapshot to its classification labels.
pub trait Classifier: Send + Sync {
    /// Derive every label for `snapshot`.
    ///
    /// Infallible: out-of-range but well-typed values are classified with the
    /// same comparisons as in-range ones.
    fn classify(&self, snapshot: &HealthSnapshot) -> ClassificationLabels;
}

/// Picks one formula for a snapshot from an ordered rule table.
pub trait FormulaSelector: Send + Sync {
    /// Return the first rule that matches `snapshot`, or the table's default.
    ///
    /// Total by construction: implementations must guarantee a default rule
    /// exists before they can be built.
    fn select(&self, snapshot: &HealthSnapshot) -> Selection<'_>;
}

/// Produces readings, once on connect and then on every tick.
///
/// This is the device layer's side of the boundary. The core never assumes
/// a cadence; every reading is analysed independently.
pub trait SnapshotSource {
    /// Human-readable device name for logs.
    fn device_name(&self) -> &str;

    /// Produce the next reading.
    ///
    /// Returns `QinyuanError::DeviceDisconnected` when the device is not
    /// connected.
    fn next_reading(&mut self) -> QinyuanResult<Reading>;
}
