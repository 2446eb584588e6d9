//! Health snapshot types.
//!
//! A `HealthSnapshot` is one immutable point-in-time reading of every metric
//! the wristband reports. Snapshot sources wrap it in a `Reading` that adds an
//! identifier and capture time. Neither the classifier nor the formula
//! selector reads the envelope; they only see the snapshot.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    electrolyte::Electrolyte,
    error::{QinyuanError, QinyuanResult},
    meridian::Meridian,
};

/// Systolic / diastolic pair in mmHg.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BloodPressure {
    pub systolic: u32,
    pub diastolic: u32,
}

/// Serum electrolyte panel in mmol/L.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Electrolytes {
    pub sodium: f64,
    pub potassium: f64,
    pub chloride: f64,
    pub bicarbonate: f64,
}

impl Electrolytes {
    pub fn get(&self, electrolyte: Electrolyte) -> f64 {
        match electrolyte {
            Electrolyte::Sodium => self.sodium,
            Electrolyte::Potassium => self.potassium,
            Electrolyte::Chloride => self.chloride,
            Electrolyte::Bicarbonate => self.bicarbonate,
        }
    }
}

/// Per-meridian score, 0-100.
///
/// One named field per meridian: a balance with a missing or extra key
/// cannot be represented, and the JSON form rejects one at parse time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MeridianBalance {
    pub lung: f64,
    pub heart: f64,
    pub spleen: f64,
    pub liver: f64,
    pub kidney: f64,
}

impl MeridianBalance {
    /// Same score on every meridian.
    pub fn uniform(score: f64) -> Self {
        Self {
            lung: score,
            heart: score,
            spleen: score,
            liver: score,
            kidney: score,
        }
    }

    pub fn get(&self, meridian: Meridian) -> f64 {
        match meridian {
            Meridian::Lung => self.lung,
            Meridian::Heart => self.heart,
            Meridian::Spleen => self.spleen,
            Meridian::Liver => self.liver,
            Meridian::Kidney => self.kidney,
        }
    }

    pub fn set(&mut self, meridian: Meridian, score: f64) {
        let slot = match meridian {
            Meridian::Lung => &mut self.lung,
            Meridian::Heart => &mut self.heart,
            Meridian::Spleen => &mut self.spleen,
            Meridian::Liver => &mut self.liver,
            Meridian::Kidney => &mut self.kidney,
        };
        *slot = score;
    }

    /// Scores in declaration order: lung, heart, spleen, liver, kidney.
    pub fn iter(&self) -> impl Iterator<Item = (Meridian, f64)> + '_ {
        Meridian::ALL.into_iter().map(move |m| (m, self.get(m)))
    }
}

/// One immutable reading of all health metrics.
///
/// The JSON form uses the device payload's camelCase names and rejects
/// unknown fields. Bounded fields are expected to be clamped (see
/// [`HealthSnapshot::clamped`]); the classifier and selector still accept
/// out-of-range values and compare them as ordinary reals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct HealthSnapshot {
    /// Beats per minute.
    pub heart_rate: u32,
    pub steps: u32,
    pub calories_burned: f64,
    pub sleep_hours: f64,
    /// Degrees Celsius.
    pub body_temperature: f64,
    pub blood_pressure: BloodPressure,
    /// Percent, 0-100.
    pub oxygen_saturation: f64,
    /// 0-100.
    pub stress_level: f64,
    /// 0-100.
    pub hydration_level: f64,
    pub meridian_balance: MeridianBalance,
    /// -1 (yin-leaning) to 1 (yang-leaning).
    pub yin_yang_balance: f64,
    /// mmol/L.
    pub blood_glucose: f64,
    /// µg/dL.
    pub cortisol: f64,
    /// Index, nominally 0-5.
    pub inflammation: f64,
    /// 0-100.
    pub immune_activity: f64,
    pub electrolytes: Electrolytes,
}

impl HealthSnapshot {
    /// Return a copy with every 0-100 field clamped to [0, 100] and the
    /// yin/yang balance clamped to [-1, 1].
    pub fn clamped(&self) -> Self {
        let pct = |v: f64| v.clamp(0.0, 100.0);
        let mut meridian_balance = self.meridian_balance;
        for (meridian, score) in self.meridian_balance.iter() {
            meridian_balance.set(meridian, pct(score));
        }
        Self {
            oxygen_saturation: pct(self.oxygen_saturation),
            stress_level: pct(self.stress_level),
            hydration_level: pct(self.hydration_level),
            immune_activity: pct(self.immune_activity),
            yin_yang_balance: self.yin_yang_balance.clamp(-1.0, 1.0),
            meridian_balance,
            ..self.clone()
        }
    }

    /// Reject NaN and infinite values.
    ///
    /// `clamp` passes NaN through unchanged and every threshold comparison
    /// against NaN is false, so a non-finite field would silently fall to the
    /// default formula. It is refused here instead.
    pub fn validate(&self) -> QinyuanResult<()> {
        for (field, value) in self.real_fields() {
            if !value.is_finite() {
                return Err(QinyuanError::InvalidSnapshot {
                    reason: format!("field '{field}' is not a finite number ({value})"),
                });
            }
        }
        Ok(())
    }

    fn real_fields(&self) -> Vec<(String, f64)> {
        let mut fields: Vec<(String, f64)> = vec![
            ("caloriesBurned".into(), self.calories_burned),
            ("sleepHours".into(), self.sleep_hours),
            ("bodyTemperature".into(), self.body_temperature),
            ("oxygenSaturation".into(), self.oxygen_saturation),
            ("stressLevel".into(), self.stress_level),
            ("hydrationLevel".into(), self.hydration_level),
            ("yinYangBalance".into(), self.yin_yang_balance),
            ("bloodGlucose".into(), self.blood_glucose),
            ("cortisol".into(), self.cortisol),
            ("inflammation".into(), self.inflammation),
            ("immuneActivity".into(), self.immune_activity),
        ];
        fields.extend(
            self.meridian_balance
                .iter()
                .map(|(m, v)| (format!("meridianBalance.{m}"), v)),
        );
        fields.extend(
            Electrolyte::ALL
                .into_iter()
                .map(|e| (format!("electrolytes.{e}"), self.electrolytes.get(e))),
        );
        fields
    }
}

/// A scalar snapshot field that a formula rule can test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Metric {
    HeartRate,
    Steps,
    CaloriesBurned,
    SleepHours,
    BodyTemperature,
    OxygenSaturation,
    StressLevel,
    HydrationLevel,
    YinYangBalance,
    BloodGlucose,
    Cortisol,
    Inflammation,
    ImmuneActivity,
}

impl Metric {
    pub fn read(&self, snapshot: &HealthSnapshot) -> f64 {
        match self {
            Metric::HeartRate => f64::from(snapshot.heart_rate),
            Metric::Steps => f64::from(snapshot.steps),
            Metric::CaloriesBurned => snapshot.calories_burned,
            Metric::SleepHours => snapshot.sleep_hours,
            Metric::BodyTemperature => snapshot.body_temperature,
            Metric::OxygenSaturation => snapshot.oxygen_saturation,
            Metric::StressLevel => snapshot.stress_level,
            Metric::HydrationLevel => snapshot.hydration_level,
            Metric::YinYangBalance => snapshot.yin_yang_balance,
            Metric::BloodGlucose => snapshot.blood_glucose,
            Metric::Cortisol => snapshot.cortisol,
            Metric::Inflammation => snapshot.inflammation,
            Metric::ImmuneActivity => snapshot.immune_activity,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Metric::HeartRate => "heart-rate",
            Metric::Steps => "steps",
            Metric::CaloriesBurned => "calories-burned",
            Metric::SleepHours => "sleep-hours",
            Metric::BodyTemperature => "body-temperature",
            Metric::OxygenSaturation => "oxygen-saturation",
            Metric::StressLevel => "stress-level",
            Metric::HydrationLevel => "hydration-level",
            Metric::YinYangBalance => "yin-yang-balance",
            Metric::BloodGlucose => "blood-glucose",
            Metric::Cortisol => "cortisol",
            Metric::Inflammation => "inflammation",
            Metric::ImmuneActivity => "immune-activity",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unique identifier for a single reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReadingId(pub uuid::Uuid);

impl ReadingId {
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl Default for ReadingId {
    fn default() -> Self {
        Self::new()
    }
}

/// A snapshot as delivered by a snapshot source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reading {
    pub id: ReadingId,
    pub captured_at: DateTime<Utc>,
    pub snapshot: HealthSnapshot,
}

impl Reading {
    /// Wrap `snapshot` with a fresh id, stamped now.
    pub fn now(snapshot: HealthSnapshot) -> Self {
        Self {
            id: ReadingId::new(),
            captured_at: Utc::now(),
            snapshot,
        }
    }
}
