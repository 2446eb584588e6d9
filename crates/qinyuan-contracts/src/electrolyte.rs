//! Serum electrolytes and their normal bands.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::QinyuanError;

/// A serum electrolyte reported by the wristband.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Electrolyte {
    Sodium,
    Potassium,
    Chloride,
    Bicarbonate,
}

/// Where a reading sits relative to its electrolyte's normal band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ElectrolyteStatus {
    Low,
    Normal,
    High,
}

impl ElectrolyteStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ElectrolyteStatus::Low => "low",
            ElectrolyteStatus::Normal => "normal",
            ElectrolyteStatus::High => "high",
        }
    }
}

impl Electrolyte {
    pub const ALL: [Electrolyte; 4] = [
        Electrolyte::Sodium,
        Electrolyte::Potassium,
        Electrolyte::Chloride,
        Electrolyte::Bicarbonate,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Electrolyte::Sodium => "sodium",
            Electrolyte::Potassium => "potassium",
            Electrolyte::Chloride => "chloride",
            Electrolyte::Bicarbonate => "bicarbonate",
        }
    }

    /// Inclusive `(low, high)` normal band in mmol/L.
    pub fn normal_band(&self) -> (f64, f64) {
        match self {
            Electrolyte::Sodium => (135.0, 145.0),
            Electrolyte::Potassium => (3.5, 5.0),
            Electrolyte::Chloride => (98.0, 106.0),
            Electrolyte::Bicarbonate => (22.0, 29.0),
        }
    }
}

impl fmt::Display for Electrolyte {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Electrolyte {
    type Err = QinyuanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Electrolyte::ALL
            .into_iter()
            .find(|e| e.as_str() == s)
            .ok_or_else(|| QinyuanError::UnknownElectrolyte { name: s.to_string() })
    }
}
