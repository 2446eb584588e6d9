//! # qinyuan-verify
//!
//! Checks that run at the edges of the recommendation core.
//!
//! - [`SnapshotValidator`] guards the input boundary: raw JSON payloads are
//!   validated against a JSON Schema, deserialized, checked for finiteness
//!   and clamped before any classifier or selector sees them.
//! - [`TableVerifier`] guards the static data: formula records are checked
//!   against the ingredient catalog without any snapshot.
//!
//! ```rust,ignore
//! use qinyuan_verify::SnapshotValidator;
//!
//! let validator = SnapshotValidator::new()?;
//! let snapshot = validator.parse(&payload)?;
//! ```

pub mod snapshot;
pub mod table;

pub use snapshot::SnapshotValidator;
pub use table::TableVerifier;

// ── Tests ─────────────────────────────────────────────────────────────────────
