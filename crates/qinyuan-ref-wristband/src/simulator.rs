//! Simulated wristband.
//!
//! On connect the band reports the baseline reading. Every later read
//! perturbs the previous snapshot by an independent uniform delta per
//! field, rounds to one decimal and reclamps. Fields without a delta
//! (steps, calories, sleep, blood pressure, SpO2, electrolytes) hold their
//! last value.
//!
//! The generator is a `ChaCha8Rng` seeded at construction, so a seed
//! reproduces a whole session.

use std::thread;
use std::time::Duration;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use qinyuan_contracts::{
    error::{QinyuanError, QinyuanResult},
    snapshot::{HealthSnapshot, Reading},
};
use qinyuan_core::traits::SnapshotSource;

use crate::mock_data::{baseline_snapshot, DEVICE_NAME};

/// A `SnapshotSource` that jitters the baseline reading.
pub struct WristbandSimulator {
    name: String,
    rng: ChaCha8Rng,
    current: Option<HealthSnapshot>,
    interval: Duration,
    reads: u64,
}

impl WristbandSimulator {
    pub fn new(seed: u64) -> Self {
        Self {
            name: DEVICE_NAME.to_string(),
            rng: ChaCha8Rng::seed_from_u64(seed),
            current: None,
            interval: Duration::ZERO,
            reads: 0,
        }
    }

    /// Wait `interval` before every reading after the first.
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn is_connected(&self) -> bool {
        self.current.is_some()
    }

    /// Pair with the band. Returns the baseline reading.
    pub fn connect(&mut self) -> Reading {
        let baseline = baseline_snapshot();
        self.current = Some(baseline.clone());
        self.reads = 0;
        info!(device = %self.name, "device connected");
        Reading::now(baseline)
    }

    pub fn disconnect(&mut self) {
        if self.current.take().is_some() {
            info!(device = %self.name, reads = self.reads, "device disconnected");
        }
    }

    fn jitter(&mut self, value: f64, spread: f64) -> f64 {
        round1(value + self.rng.gen_range(-spread..spread))
    }

    fn perturb(&mut self, prev: &HealthSnapshot) -> HealthSnapshot {
        let mut next = prev.clone();

        let heart_rate = f64::from(prev.heart_rate) + self.rng.gen_range(-2.0..2.0);
        next.heart_rate = heart_rate.round().max(0.0) as u32;

        next.hydration_level = self.jitter(prev.hydration_level, 3.0);
        next.stress_level = self.jitter(prev.stress_level, 4.0);
        next.body_temperature = self.jitter(prev.body_temperature, 0.2);

        for (meridian, score) in prev.meridian_balance.iter() {
            let jittered = self.jitter(score, 3.0);
            next.meridian_balance.set(meridian, jittered);
        }

        next.yin_yang_balance = self.jitter(prev.yin_yang_balance, 0.1);
        next.blood_glucose = self.jitter(prev.blood_glucose, 0.2);
        next.cortisol = self.jitter(prev.cortisol, 0.5);
        next.inflammation = self.jitter(prev.inflammation, 0.2).max(0.0);
        next.immune_activity = self.jitter(prev.immune_activity, 3.0);

        next.clamped()
    }
}

impl SnapshotSource for WristbandSimulator {
    fn device_name(&self) -> &str {
        &self.name
    }

    fn next_reading(&mut self) -> QinyuanResult<Reading> {
        let prev = self
            .current
            .take()
            .ok_or_else(|| QinyuanError::DeviceDisconnected {
                device: self.name.clone(),
            })?;

        if self.reads > 0 && !self.interval.is_zero() {
            thread::sleep(self.interval);
        }

        let next = self.perturb(&prev);
        self.current = Some(next.clone());
        self.reads += 1;

        debug!(
            device = %self.name,
            read = self.reads,
            hydration = next.hydration_level,
            stress = next.stress_level,
            heart_rate = next.heart_rate,
            "reading produced"
        );

        Ok(Reading::now(next))
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

// ── Tests ─────────────────────────────────────────────────────────────────────
