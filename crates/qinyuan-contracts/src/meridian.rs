//! The five meridians and their static reference data.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::QinyuanError;

/// One of the five traditional-medicine channels tracked by the wristband.
///
/// Variant order is the canonical iteration order. Every derived list of
/// meridians (deficiencies, recommendations, advice) follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Meridian {
    Lung,
    Heart,
    Spleen,
    Liver,
    Kidney,
}

/// Five-phase element associated with a meridian.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FivePhase {
    Metal,
    Fire,
    Earth,
    Wood,
    Water,
}

impl Meridian {
    /// All meridians in declaration order.
    pub const ALL: [Meridian; 5] = [
        Meridian::Lung,
        Meridian::Heart,
        Meridian::Spleen,
        Meridian::Liver,
        Meridian::Kidney,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Meridian::Lung => "lung",
            Meridian::Heart => "heart",
            Meridian::Spleen => "spleen",
            Meridian::Liver => "liver",
            Meridian::Kidney => "kidney",
        }
    }

    pub fn element(&self) -> FivePhase {
        match self {
            Meridian::Lung => FivePhase::Metal,
            Meridian::Heart => FivePhase::Fire,
            Meridian::Spleen => FivePhase::Earth,
            Meridian::Liver => FivePhase::Wood,
            Meridian::Kidney => FivePhase::Water,
        }
    }

    /// The two-hour window of the daily cycle in which the meridian peaks.
    pub fn active_hours(&self) -> &'static str {
        match self {
            Meridian::Lung => "03:00-05:00",
            Meridian::Heart => "11:00-13:00",
            Meridian::Spleen => "09:00-11:00",
            Meridian::Liver => "01:00-03:00",
            Meridian::Kidney => "17:00-19:00",
        }
    }

    /// Catalog ingredient ids suggested when this meridian is deficient.
    pub fn recommended_ingredients(&self) -> &'static [&'static str] {
        match self {
            Meridian::Lung => &["astragalus", "schisandra", "licorice"],
            Meridian::Heart => &["schisandra", "licorice", "magnesium"],
            Meridian::Spleen => &["ginseng", "astragalus", "licorice"],
            Meridian::Liver => &["goji", "chrysanthemum", "schisandra"],
            Meridian::Kidney => &["goji", "ginseng", "vitamin_d"],
        }
    }
}

impl fmt::Display for Meridian {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Meridian {
    type Err = QinyuanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Meridian::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| QinyuanError::UnknownMeridian { name: s.to_string() })
    }
}
