//! Fixed readings used by the simulator and scenarios.
//!
//! The baseline is what the dashboard shows before a device has reported
//! anything.

use serde_json::{json, Value};

use qinyuan_contracts::snapshot::{BloodPressure, Electrolytes, HealthSnapshot, MeridianBalance};

pub const DEVICE_NAME: &str = "Qinyuan Band S1";

/// The initial mock reading.
pub fn baseline_snapshot() -> HealthSnapshot {
    HealthSnapshot {
        heart_rate: 72,
        steps: 8432,
        calories_burned: 1240.0,
        sleep_hours: 6.5,
        body_temperature: 36.7,
        blood_pressure: BloodPressure {
            systolic: 120,
            diastolic: 80,
        },
        oxygen_saturation: 98.0,
        stress_level: 35.0,
        hydration_level: 65.0,
        meridian_balance: MeridianBalance {
            lung: 86.3,
            heart: 74.5,
            spleen: 67.3,
            liver: 62.3,
            kidney: 58.6,
        },
        yin_yang_balance: 0.2,
        blood_glucose: 5.2,
        cortisol: 14.2,
        inflammation: 2.1,
        immune_activity: 82.0,
        electrolytes: Electrolytes {
            sodium: 140.0,
            potassium: 4.2,
            chloride: 102.0,
            bicarbonate: 24.0,
        },
    }
}

/// The baseline as the device would transmit it.
pub fn baseline_payload() -> Value {
    json!({
        "heartRate": 72,
        "steps": 8432,
        "caloriesBurned": 1240.0,
        "sleepHours": 6.5,
        "bodyTemperature": 36.7,
        "bloodPressure": { "systolic": 120, "diastolic": 80 },
        "oxygenSaturation": 98.0,
        "stressLevel": 35.0,
        "hydrationLevel": 65.0,
        "meridianBalance": {
            "lung": 86.3,
            "heart": 74.5,
            "spleen": 67.3,
            "liver": 62.3,
            "kidney": 58.6
        },
        "yinYangBalance": 0.2,
        "bloodGlucose": 5.2,
        "cortisol": 14.2,
        "inflammation": 2.1,
        "immuneActivity": 82.0,
        "electrolytes": {
            "sodium": 140.0,
            "potassium": 4.2,
            "chloride": 102.0,
            "bicarbonate": 24.0
        }
    })
}
