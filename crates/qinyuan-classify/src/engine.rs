//! Threshold classifier implementation.
//!
//! `ThresholdClassifier` implements the `Classifier` trait from qinyuan-core.
//! Every label is an independent comparison against a configured threshold:
//!
//! 1. Constitution: yin/yang balance against a symmetric band; the band
//!    edges themselves are balanced.
//! 2. Meridian deficiencies: every meridian strictly below the cut-off, in
//!    declaration order.
//! 3. Risk flags: four independent checks, any subset may be raised.
//! 4. Electrolytes: each value against its fixed inclusive normal band.
//!
//! All comparisons are plain `<` / `>` on `f64`, so out-of-range inputs
//! (negative hydration, inflammation above 5) classify like any other value.

use std::collections::BTreeMap;

use tracing::debug;

use qinyuan_contracts::{
    electrolyte::{Electrolyte, ElectrolyteStatus},
    ingredient::IngredientId,
    labels::{ClassificationLabels, ConstitutionType, MeridianAssessment, RiskFlag},
    meridian::Meridian,
    snapshot::{Electrolytes, HealthSnapshot, MeridianBalance},
};
use qinyuan_core::traits::Classifier;

use crate::thresholds::ClassifierThresholds;

/// A `Classifier` driven by a `ClassifierThresholds` table.
#[derive(Debug, Clone, Default)]
pub struct ThresholdClassifier {
    thresholds: ClassifierThresholds,
}

impl ThresholdClassifier {
    pub fn new(thresholds: ClassifierThresholds) -> Self {
        Self { thresholds }
    }

    pub fn thresholds(&self) -> &ClassifierThresholds {
        &self.thresholds
    }

    pub fn classify_constitution(&self, yin_yang_balance: f64) -> ConstitutionType {
        if yin_yang_balance > self.thresholds.yang_excess_above {
            ConstitutionType::YangExcess
        } else if yin_yang_balance < self.thresholds.yin_deficiency_below {
            ConstitutionType::YinDeficiency
        } else {
            ConstitutionType::Balanced
        }
    }

    pub fn find_meridian_deficiencies(&self, balance: &MeridianBalance) -> Vec<Meridian> {
        balance
            .iter()
            .filter(|(_, score)| *score < self.thresholds.meridian_deficient_below)
            .map(|(meridian, _)| meridian)
            .collect()
    }

    pub fn compute_risk_flags(&self, snapshot: &HealthSnapshot) -> Vec<RiskFlag> {
        let t = &self.thresholds;
        RiskFlag::ALL
            .into_iter()
            .filter(|flag| match flag {
                RiskFlag::HighStress => snapshot.stress_level > t.high_stress_above,
                RiskFlag::HighInflammation => snapshot.inflammation > t.high_inflammation_above,
                RiskFlag::LowImmune => snapshot.immune_activity < t.low_immune_below,
                RiskFlag::LowHydration => snapshot.hydration_level < t.low_hydration_below,
            })
            .collect()
    }

    pub fn classify_electrolytes(
        &self,
        electrolytes: &Electrolytes,
    ) -> BTreeMap<Electrolyte, ElectrolyteStatus> {
        Electrolyte::ALL
            .into_iter()
            .map(|e| (e, classify_electrolyte(e, electrolytes.get(e))))
            .collect()
    }

    pub fn assess_meridians(&self, balance: &MeridianBalance) -> MeridianAssessment {
        let t = &self.thresholds;
        if balance.iter().all(|(_, v)| v > t.meridian_excellent_above) {
            MeridianAssessment::Excellent
        } else if balance.iter().all(|(_, v)| v > t.meridian_good_above) {
            MeridianAssessment::Good
        } else {
            MeridianAssessment::NeedsCare
        }
    }

    /// Suggested ingredients for `deficiencies`, first occurrence wins,
    /// capped at `max_recommended_ingredients`.
    pub fn recommended_ingredients(&self, deficiencies: &[Meridian]) -> Vec<IngredientId> {
        let mut picked: Vec<IngredientId> = Vec::new();
        for id in deficiencies.iter().flat_map(|m| m.recommended_ingredients()) {
            if picked.len() == self.thresholds.max_recommended_ingredients {
                break;
            }
            if !picked.iter().any(|p| p.as_str() == *id) {
                picked.push(IngredientId::new(*id));
            }
        }
        picked
    }
}

impl Classifier for ThresholdClassifier {
    fn classify(&self, snapshot: &HealthSnapshot) -> ClassificationLabels {
        let meridian_deficiencies = self.find_meridian_deficiencies(&snapshot.meridian_balance);
        let recommended_ingredients = self.recommended_ingredients(&meridian_deficiencies);

        let labels = ClassificationLabels {
            constitution_type: self.classify_constitution(snapshot.yin_yang_balance),
            risk_flags: self.compute_risk_flags(snapshot),
            electrolyte_status: self.classify_electrolytes(&snapshot.electrolytes),
            meridian_assessment: self.assess_meridians(&snapshot.meridian_balance),
            meridian_deficiencies,
            recommended_ingredients,
        };

        debug!(
            constitution = ?labels.constitution_type,
            deficiencies = ?labels.meridian_deficiencies,
            risk_flags = ?labels.risk_flags,
            "snapshot classified"
        );

        labels
    }
}

/// Place `value` relative to the inclusive normal band of `electrolyte`.
pub fn classify_electrolyte(electrolyte: Electrolyte, value: f64) -> ElectrolyteStatus {
    let (low, high) = electrolyte.normal_band();
    if value < low {
        ElectrolyteStatus::Low
    } else if value > high {
        ElectrolyteStatus::High
    } else {
        ElectrolyteStatus::Normal
    }
}
