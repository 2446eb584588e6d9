//! Classification labels derived from a snapshot.
//!
//! Labels are recomputed for every snapshot and never cached. Every list in
//! `ClassificationLabels` has a fixed order so two classifications of the
//! same snapshot compare equal.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{
    electrolyte::{Electrolyte, ElectrolyteStatus},
    ingredient::IngredientId,
    meridian::Meridian,
};

/// Constitutional leaning read from the yin/yang balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConstitutionType {
    YangExcess,
    YinDeficiency,
    Balanced,
}

impl ConstitutionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConstitutionType::YangExcess => "yang-excess",
            ConstitutionType::YinDeficiency => "yin-deficiency",
            ConstitutionType::Balanced => "balanced",
        }
    }
}

/// An independent risk indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RiskFlag {
    HighStress,
    HighInflammation,
    LowImmune,
    LowHydration,
}

impl RiskFlag {
    pub const ALL: [RiskFlag; 4] = [
        RiskFlag::HighStress,
        RiskFlag::HighInflammation,
        RiskFlag::LowImmune,
        RiskFlag::LowHydration,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskFlag::HighStress => "high-stress",
            RiskFlag::HighInflammation => "high-inflammation",
            RiskFlag::LowImmune => "low-immune",
            RiskFlag::LowHydration => "low-hydration",
        }
    }
}

/// Overall grade of the meridian system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MeridianAssessment {
    /// Every meridian above 80.
    Excellent,
    /// Every meridian above 70.
    Good,
    NeedsCare,
}

impl MeridianAssessment {
    pub fn as_str(&self) -> &'static str {
        match self {
            MeridianAssessment::Excellent => "excellent",
            MeridianAssessment::Good => "good",
            MeridianAssessment::NeedsCare => "needs-care",
        }
    }
}

/// Everything the classifier derives from one snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationLabels {
    pub constitution_type: ConstitutionType,
    /// Deficient meridians in declaration order.
    pub meridian_deficiencies: Vec<Meridian>,
    /// Raised flags in `RiskFlag::ALL` order.
    pub risk_flags: Vec<RiskFlag>,
    pub electrolyte_status: BTreeMap<Electrolyte, ElectrolyteStatus>,
    pub meridian_assessment: MeridianAssessment,
    /// At most four ingredient ids suggested for the deficient meridians.
    pub recommended_ingredients: Vec<IngredientId>,
}

impl ClassificationLabels {
    pub fn has_risk(&self, flag: RiskFlag) -> bool {
        self.risk_flags.contains(&flag)
    }

    pub fn is_deficient(&self, meridian: Meridian) -> bool {
        self.meridian_deficiencies.contains(&meridian)
    }
}
