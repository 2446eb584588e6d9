//! Error types for the Qinyuan recommendation core.
//!
//! Classification and formula selection are infallible once a snapshot
//! exists. Every variant here belongs to a boundary: parsing a device
//! payload, loading a TOML table, or reading from a snapshot source.

use thiserror::Error;

/// The unified error type for the Qinyuan crates.
#[derive(Debug, Error)]
pub enum QinyuanError {
    /// A snapshot payload is missing a field, has the wrong type, or carries
    /// a non-finite number.
    #[error("invalid health snapshot: {reason}")]
    InvalidSnapshot { reason: String },

    /// An electrolyte name outside sodium, potassium, chloride, bicarbonate.
    #[error("unknown electrolyte '{name}'")]
    UnknownElectrolyte { name: String },

    /// A meridian name outside lung, heart, spleen, liver, kidney.
    #[error("unknown meridian '{name}'")]
    UnknownMeridian { name: String },

    /// A rule table, ingredient catalog, or threshold file is malformed or
    /// violates a table invariant.
    #[error("configuration error: {reason}")]
    ConfigError { reason: String },

    /// The embedded JSON Schema document could not be compiled.
    #[error("schema validation error: {reason}")]
    SchemaValidation { reason: String },

    /// A reading was requested from a device that is not connected.
    #[error("device '{device}' is not connected")]
    DeviceDisconnected { device: String },
}

/// Convenience alias used throughout the Qinyuan crates.
pub type QinyuanResult<T> = Result<T, QinyuanError>;
