//! Boundary validation for incoming health snapshots.
//!
//! `SnapshotValidator::parse` turns an untrusted JSON payload into a
//! `HealthSnapshot` in three phases:
//!
//! 1. **Structural**: the payload is validated against the embedded
//!    `health-snapshot.schema.json`. Every violation is collected into a
//!    single `InvalidSnapshot` error so the caller sees the full set.
//! 2. **Typed**: the payload is deserialized with `serde`. Integer fields
//!    that carry a fraction fail here.
//! 3. **Semantic**: every real-valued field must be finite, then
//!    percent-scale fields and the yin/yang balance are clamped.
//!
//! Nothing downstream of this boundary re-checks shape.

use tracing::{debug, warn};

use qinyuan_contracts::{
    error::{QinyuanError, QinyuanResult},
    snapshot::HealthSnapshot,
};

const SNAPSHOT_SCHEMA: &str = include_str!("../schemas/health-snapshot.schema.json");

/// Validates raw snapshot payloads against the embedded schema.
pub struct SnapshotValidator {
    schema: jsonschema::Validator,
}

impl SnapshotValidator {
    /// Compile the embedded schema.
    ///
    /// Returns `QinyuanError::SchemaValidation` if the schema document itself
    /// is not valid JSON Schema.
    pub fn new() -> QinyuanResult<Self> {
        let document: serde_json::Value =
            serde_json::from_str(SNAPSHOT_SCHEMA).map_err(|e| QinyuanError::SchemaValidation {
                reason: format!("snapshot schema is not valid JSON: {e}"),
            })?;
        let schema =
            jsonschema::validator_for(&document).map_err(|e| QinyuanError::SchemaValidation {
                reason: format!("invalid JSON Schema document: {e}"),
            })?;
        Ok(Self { schema })
    }

    /// Validate and convert `payload`.
    pub fn parse(&self, payload: &serde_json::Value) -> QinyuanResult<HealthSnapshot> {
        // ── Phase 1: structure ────────────────────────────────────────────────
        let violations: Vec<String> = self
            .schema
            .iter_errors(payload)
            .map(|error| format!("at '{}': {}", error.instance_path, error))
            .collect();

        if !violations.is_empty() {
            warn!(count = violations.len(), "snapshot failed schema validation");
            return Err(QinyuanError::InvalidSnapshot {
                reason: violations.join("; "),
            });
        }

        // ── Phase 2: typed record ─────────────────────────────────────────────
        let snapshot: HealthSnapshot =
            serde_json::from_value(payload.clone()).map_err(|e| QinyuanError::InvalidSnapshot {
                reason: e.to_string(),
            })?;

        // ── Phase 3: finiteness, then clamping ────────────────────────────────
        snapshot.validate()?;
        let clamped = snapshot.clamped();
        if clamped != snapshot {
            debug!("snapshot values clamped into range");
        }

        Ok(clamped)
    }

    /// Parse `text` as JSON, then validate it like `parse`.
    pub fn parse_str(&self, text: &str) -> QinyuanResult<HealthSnapshot> {
        let payload: serde_json::Value =
            serde_json::from_str(text).map_err(|e| QinyuanError::InvalidSnapshot {
                reason: format!("payload is not valid JSON: {e}"),
            })?;
        self.parse(&payload)
    }
}
