//! # qinyuan-contracts
//!
//! Shared types for the Qinyuan recommendation core: health snapshots,
//! formula records, the ingredient catalog, classification labels, and the
//! error type.
//!
//! Every crate in the workspace imports from here. Decision logic lives in
//! `qinyuan-classify` and `qinyuan-formula`; this crate only holds data
//! definitions, their invariants, and fixed reference data.

pub mod analysis;
pub mod electrolyte;
pub mod error;
pub mod formula;
pub mod ingredient;
pub mod labels;
pub mod meridian;
pub mod snapshot;
pub mod verify;

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use electrolyte::Electrolyte;
    use error::QinyuanError;
    use formula::{FormulaRecord, FormulaType};
    use ingredient::{IngredientCatalog, IngredientCategory, IngredientDescriptor, IngredientId};
    use meridian::Meridian;
    use snapshot::{BloodPressure, Electrolytes, HealthSnapshot, MeridianBalance, Metric};

    // ── Helpers ──────────────────────────────────────────────────────────────

    fn snapshot() -> HealthSnapshot {
        HealthSnapshot {
            heart_rate: 72,
            steps: 8432,
            calories_burned: 1240.0,
            sleep_hours: 6.5,
            body_temperature: 36.7,
            blood_pressure: BloodPressure { systolic: 120, diastolic: 80 },
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

    fn entry(id: &str, category: IngredientCategory) -> IngredientDescriptor {
        IngredientDescriptor {
            id: IngredientId::new(id),
            name: id.to_string(),
            color: "#000000".to_string(),
            benefits: String::new(),
            default_level: 0.0,
            min_level: 0.0,
            max_level: 50.0,
            unit: "mg/L".to_string(),
            category,
            meridians: Vec::new(),
            interacts_with: Vec::new(),
        }
    }

    fn formula(levels: &[(&str, f64)], highlighted: &[&str]) -> FormulaRecord {
        FormulaRecord {
            name: "Test Formula".to_string(),
            for_condition: "testing".to_string(),
            formula_type: FormulaType::Balanced,
            element_levels: levels
                .iter()
                .map(|(id, dose)| (IngredientId::new(*id), *dose))
                .collect::<BTreeMap<_, _>>(),
            highlighted_elements: highlighted.iter().map(|id| IngredientId::new(*id)).collect(),
        }
    }

    // ── HealthSnapshot ───────────────────────────────────────────────────────

    #[test]
    fn clamped_bounds_percent_fields_and_yin_yang() {
        let mut raw = snapshot();
        raw.hydration_level = -4.0;
        raw.stress_level = 130.0;
        raw.yin_yang_balance = 1.7;
        raw.meridian_balance.kidney = 101.5;

        let clamped = raw.clamped();
        assert_eq!(clamped.hydration_level, 0.0);
        assert_eq!(clamped.stress_level, 100.0);
        assert_eq!(clamped.yin_yang_balance, 1.0);
        assert_eq!(clamped.meridian_balance.kidney, 100.0);
        // Unbounded fields pass through untouched.
        assert_eq!(clamped.inflammation, raw.inflammation);
        assert_eq!(clamped.body_temperature, raw.body_temperature);
    }

    #[test]
    fn validate_rejects_non_finite_values() {
        let mut bad = snapshot();
        bad.meridian_balance.liver = f64::NAN;

        match bad.validate() {
            Err(QinyuanError::InvalidSnapshot { reason }) => {
                assert!(reason.contains("meridianBalance.liver"), "got: {reason}");
            }
            other => panic!("expected InvalidSnapshot, got {:?}", other),
        }

        assert!(snapshot().validate().is_ok());
    }

    #[test]
    fn snapshot_json_uses_camel_case_and_rejects_unknown_fields() {
        let json = serde_json::to_value(snapshot()).unwrap();
        assert!(json.get("heartRate").is_some());
        assert!(json.get("yinYangBalance").is_some());

        let mut extra = json.clone();
        extra["meridianBalance"]["stomach"] = serde_json::json!(70.0);
        assert!(serde_json::from_value::<HealthSnapshot>(extra).is_err());

        let decoded: HealthSnapshot = serde_json::from_value(json).unwrap();
        assert_eq!(decoded, snapshot());
    }

    #[test]
    fn meridian_balance_iterates_in_declaration_order() {
        let order: Vec<Meridian> = snapshot().meridian_balance.iter().map(|(m, _)| m).collect();
        assert_eq!(order, Meridian::ALL.to_vec());
    }

    #[test]
    fn metric_read_widens_integer_fields() {
        let s = snapshot();
        assert_eq!(Metric::HeartRate.read(&s), 72.0);
        assert_eq!(Metric::HydrationLevel.read(&s), 65.0);
        assert_eq!(Metric::BodyTemperature.read(&s), 36.7);
    }

    // ── Names ────────────────────────────────────────────────────────────────

    #[test]
    fn electrolyte_and_meridian_parse_by_name() {
        assert_eq!("chloride".parse::<Electrolyte>().unwrap(), Electrolyte::Chloride);
        assert_eq!("kidney".parse::<Meridian>().unwrap(), Meridian::Kidney);

        match "calcium".parse::<Electrolyte>() {
            Err(QinyuanError::UnknownElectrolyte { name }) => assert_eq!(name, "calcium"),
            other => panic!("expected UnknownElectrolyte, got {:?}", other),
        }
        assert!("stomach".parse::<Meridian>().is_err());
    }

    // ── IngredientCatalog ────────────────────────────────────────────────────

    #[test]
    fn catalog_rejects_duplicate_ids() {
        let result = IngredientCatalog::new(vec![
            entry("ginseng", IngredientCategory::Tcm),
            entry("ginseng", IngredientCategory::Tcm),
        ]);

        match result {
            Err(QinyuanError::ConfigError { reason }) => {
                assert!(reason.contains("duplicate ingredient id 'ginseng'"), "got: {reason}");
            }
            other => panic!("expected ConfigError, got {:?}", other),
        }
    }

    #[test]
    fn catalog_rejects_western_entry_with_meridians() {
        let mut zinc = entry("zinc", IngredientCategory::Western);
        zinc.meridians = vec![Meridian::Kidney];
        assert!(IngredientCatalog::new(vec![zinc]).is_err());
    }

    #[test]
    fn catalog_filters_by_category() {
        let catalog = IngredientCatalog::new(vec![
            entry("ginseng", IngredientCategory::Tcm),
            entry("zinc", IngredientCategory::Western),
            entry("goji", IngredientCategory::Tcm),
        ])
        .unwrap();

        let tcm: Vec<&str> = catalog
            .by_category(IngredientCategory::Tcm)
            .map(|e| e.id.as_str())
            .collect();
        assert_eq!(tcm, vec!["ginseng", "goji"]);
        assert!(catalog.contains("zinc"));
        assert!(!catalog.contains("omega3"));
    }

    // ── FormulaRecord ────────────────────────────────────────────────────────

    #[test]
    fn formula_record_round_trips_through_json() {
        let original = formula(&[("ginseng", 15.0), ("zinc", 2.5)], &["ginseng"]);
        let json = serde_json::to_string(&original).unwrap();
        assert!(json.contains("\"forCondition\""));
        assert!(json.contains("\"type\":\"balanced\""));

        let decoded: FormulaRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(original, decoded);
    }

    #[test]
    fn category_ratio_rounds_and_defaults_to_even_split() {
        let catalog = IngredientCatalog::new(vec![
            entry("ginseng", IngredientCategory::Tcm),
            entry("zinc", IngredientCategory::Western),
        ])
        .unwrap();

        let ratio = formula(&[("ginseng", 10.0), ("zinc", 20.0), ("unknown", 99.0)], &[])
            .category_ratio(&catalog);
        assert_eq!(ratio.tcm, 33);
        assert_eq!(ratio.western, 67);

        let empty = formula(&[], &[]).category_ratio(&catalog);
        assert_eq!((empty.tcm, empty.western), (50, 50));
    }

    #[test]
    fn interaction_warnings_skip_undosed_ingredients() {
        let mut ginseng = entry("ginseng", IngredientCategory::Tcm);
        ginseng.interacts_with = vec!["anticoagulants".to_string()];
        let mut zinc = entry("zinc", IngredientCategory::Western);
        zinc.interacts_with = vec!["antibiotics".to_string()];
        let catalog = IngredientCatalog::new(vec![ginseng, zinc]).unwrap();

        let warnings = formula(&[("ginseng", 10.0), ("zinc", 0.0)], &[]).interaction_warnings(&catalog);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].ingredient.as_str(), "ginseng");
    }

    // ── QinyuanError display messages ────────────────────────────────────────

    #[test]
    fn error_display_messages_carry_context() {
        let err = QinyuanError::InvalidSnapshot {
            reason: "missing field `heartRate`".to_string(),
        };
        assert!(err.to_string().contains("invalid health snapshot"));
        assert!(err.to_string().contains("heartRate"));

        let err = QinyuanError::DeviceDisconnected {
            device: "wristband-pro".to_string(),
        };
        assert!(err.to_string().contains("wristband-pro"));
    }
}
