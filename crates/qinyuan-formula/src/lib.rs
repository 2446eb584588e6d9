//! # qinyuan-formula
//!
//! Formula selection for the Qinyuan recommendation core.
//!
//! ## Overview
//!
//! Formulas are chosen from an ordered TOML rule table, evaluated top to
//! bottom with first-match-wins semantics. The table ends with a default
//! rule, so every snapshot selects exactly one formula.
//!
//! [`TomlFormulaSelector`] implements the
//! [`FormulaSelector`](qinyuan_core::traits::FormulaSelector) trait.
//! The built-in table ships five rules:
//!
//! | order | rule id                  | condition              |
//! |-------|--------------------------|------------------------|
//! | 1     | `rapid-hydration`        | hydration-level < 50   |
//! | 2     | `stress-relief`          | stress-level > 60      |
//! | 3     | `cardiovascular-support` | heart-rate > 85        |
//! | 4     | `cooling-balance`        | body-temperature > 37.2|
//! | 5     | `daily-maintenance`      | default                |
//!
//! The ingredient catalog that formulas reference by id is loaded from the
//! same kind of embedded TOML document; see [`catalog`].

pub mod catalog;
pub mod engine;
pub mod rule;

pub use engine::TomlFormulaSelector;

use qinyuan_contracts::{error::QinyuanResult, formula::Selection, snapshot::HealthSnapshot};
use qinyuan_core::traits::FormulaSelector;

/// Select a formula for `snapshot` from the built-in rule table.
pub fn select_formula(snapshot: &HealthSnapshot) -> QinyuanResult<Selection<'static>> {
    Ok(TomlFormulaSelector::builtin()?.select(snapshot))
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use qinyuan_contracts::{
        error::QinyuanError,
        formula::{FormulaRecord, FormulaType},
        ingredient::IngredientCategory,
        snapshot::{BloodPressure, Electrolytes, HealthSnapshot, MeridianBalance, Metric},
    };
    use qinyuan_core::traits::FormulaSelector;

    use super::*;
    use crate::catalog::{builtin_catalog, catalog_from_toml_str};
    use crate::rule::{Comparison, Condition};

    // ── Helpers ───────────────────────────────────────────────────────────────

    /// A snapshot that trips no rule.
    fn calm() -> HealthSnapshot {
        HealthSnapshot {
            heart_rate: 72,
            steps: 8000,
            calories_burned: 1200.0,
            sleep_hours: 7.5,
            body_temperature: 36.6,
            blood_pressure: BloodPressure { systolic: 118, diastolic: 76 },
            oxygen_saturation: 98.0,
            stress_level: 30.0,
            hydration_level: 80.0,
            meridian_balance: MeridianBalance::uniform(90.0),
            yin_yang_balance: 0.0,
            blood_glucose: 5.1,
            cortisol: 12.0,
            inflammation: 1.0,
            immune_activity: 90.0,
            electrolytes: Electrolytes {
                sodium: 140.0,
                potassium: 4.2,
                chloride: 102.0,
                bicarbonate: 24.0,
            },
        }
    }

    fn builtin() -> &'static TomlFormulaSelector {
        TomlFormulaSelector::builtin().expect("built-in rule table must load")
    }

    fn rule_id(snapshot: &HealthSnapshot) -> &'static str {
        builtin().select(snapshot).rule_id
    }

    const TWO_RULES: &str = r#"
[[rules]]
id = "thirsty"
description = "Hydration below 40"
when = { metric = "hydration-level", op = "lt", threshold = 40.0 }

[rules.formula]
name = "Thirst"
forCondition = "Low hydration"
type = "western-focused"
highlightedElements = ["electrolytes"]

[rules.formula.elementLevels]
electrolytes = 30.0

[[rules]]
id = "fallback"
description = "Default"

[rules.formula]
name = "Plain"
forCondition = "Daily maintenance"
type = "balanced"
highlightedElements = []

[rules.formula.elementLevels]
calcium = 10.0
"#;

    // ── 1. built-in table shape ───────────────────────────────────────────────

    #[test]
    fn test_builtin_table_order_and_types() {
        let selector = builtin();
        let ids: Vec<&str> = selector.rules().map(|r| r.id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "rapid-hydration",
                "stress-relief",
                "cardiovascular-support",
                "cooling-balance",
                "daily-maintenance",
            ]
        );
        assert_eq!(selector.len(), 5);
        assert!(selector.default_rule().is_default());

        let types: Vec<FormulaType> = selector.rules().map(|r| r.formula.formula_type).collect();
        assert_eq!(
            types,
            vec![
                FormulaType::Balanced,
                FormulaType::TcmFocused,
                FormulaType::Balanced,
                FormulaType::TcmFocused,
                FormulaType::Balanced,
            ]
        );
    }

    #[test]
    fn test_builtin_highlights_are_dosed() {
        for rule in builtin().rules() {
            for id in &rule.formula.highlighted_elements {
                assert!(
                    rule.formula.dosage(id.as_str()) > 0.0,
                    "rule '{}' highlights '{}' without a dosage",
                    rule.id,
                    id
                );
            }
        }
    }

    #[test]
    fn test_summaries_render_conditions() {
        let summaries = builtin().summaries();
        assert_eq!(summaries[0].condition.as_deref(), Some("hydration-level < 50"));
        assert_eq!(summaries[3].condition.as_deref(), Some("body-temperature > 37.2"));
        assert_eq!(summaries[4].condition, None);
        assert_eq!(summaries[4].formula_name, "Daily Maintenance Formula");
    }

    // ── 2. precedence ─────────────────────────────────────────────────────────

    #[test]
    fn test_each_rule_fires_alone() {
        assert_eq!(rule_id(&calm()), "daily-maintenance");

        let mut s = calm();
        s.hydration_level = 49.9;
        assert_eq!(rule_id(&s), "rapid-hydration");

        let mut s = calm();
        s.stress_level = 60.1;
        assert_eq!(rule_id(&s), "stress-relief");

        let mut s = calm();
        s.heart_rate = 86;
        assert_eq!(rule_id(&s), "cardiovascular-support");

        let mut s = calm();
        s.body_temperature = 37.3;
        assert_eq!(rule_id(&s), "cooling-balance");
    }

    #[test]
    fn test_first_match_wins() {
        let mut s = calm();
        s.hydration_level = 20.0;
        s.stress_level = 95.0;
        s.heart_rate = 130;
        s.body_temperature = 39.0;
        assert_eq!(rule_id(&s), "rapid-hydration");

        s.hydration_level = 80.0;
        assert_eq!(rule_id(&s), "stress-relief");

        s.stress_level = 10.0;
        assert_eq!(rule_id(&s), "cardiovascular-support");

        s.heart_rate = 60;
        assert_eq!(rule_id(&s), "cooling-balance");
    }

    // ── 3. strict boundaries ──────────────────────────────────────────────────

    #[test]
    fn test_boundary_values_fall_through() {
        let mut s = calm();
        s.hydration_level = 50.0;
        s.stress_level = 60.0;
        s.heart_rate = 85;
        s.body_temperature = 37.2;
        assert_eq!(rule_id(&s), "daily-maintenance");
    }

    #[test]
    fn test_hydration_fifty_with_stress_sixty_one_is_stress_relief() {
        let mut s = calm();
        s.hydration_level = 50.0;
        s.stress_level = 61.0;
        let selection = builtin().select(&s);
        assert_eq!(selection.rule_id, "stress-relief");
        assert_eq!(selection.formula.formula_type, FormulaType::TcmFocused);
    }

    // ── 4. scenarios ──────────────────────────────────────────────────────────

    #[test]
    fn test_scenario_dehydrated_yang_excess() {
        let mut s = calm();
        s.hydration_level = 45.0;
        s.stress_level = 30.0;
        s.heart_rate = 72;
        s.body_temperature = 36.7;
        s.yin_yang_balance = 0.5;
        s.meridian_balance = MeridianBalance::uniform(80.0);
        s.meridian_balance.liver = 65.0;

        let selection = select_formula(&s).expect("built-in table");
        assert_eq!(selection.rule_id, "rapid-hydration");
        assert_eq!(selection.formula.name, "Rapid Hydration Formula");
        assert!(selection.formula.is_highlighted("electrolytes"));
    }

    #[test]
    fn test_scenario_stressed_with_high_heart_rate() {
        let mut s = calm();
        s.hydration_level = 80.0;
        s.stress_level = 65.0;
        s.heart_rate = 90;
        s.body_temperature = 36.5;

        let selection = select_formula(&s).expect("built-in table");
        assert_eq!(selection.rule_id, "stress-relief");
        assert_eq!(selection.formula.dosage("magnesium"), 35.0);
    }

    // ── 5. properties ─────────────────────────────────────────────────────────

    fn vitals() -> impl Strategy<Value = HealthSnapshot> {
        (0.0f64..100.0, 0.0f64..100.0, 40u32..180, 35.0f64..41.0, -1.0f64..=1.0).prop_map(
            |(hydration, stress, heart_rate, temperature, yin_yang)| {
                let mut s = calm();
                s.hydration_level = hydration;
                s.stress_level = stress;
                s.heart_rate = heart_rate;
                s.body_temperature = temperature;
                s.yin_yang_balance = yin_yang;
                s
            },
        )
    }

    proptest! {
        #[test]
        fn prop_selection_is_deterministic(s in vitals()) {
            let first = builtin().select(&s);
            let second = builtin().select(&s.clone());
            prop_assert_eq!(first, second);
        }

        #[test]
        fn prop_low_hydration_always_wins(s in vitals(), hydration in 0.0f64..50.0) {
            let mut s = s;
            s.hydration_level = hydration;
            prop_assert_eq!(builtin().select(&s).rule_id, "rapid-hydration");
        }
    }

    // ── 6. loading custom tables ──────────────────────────────────────────────

    #[test]
    fn test_custom_table_loads_and_selects() {
        let selector = TomlFormulaSelector::from_toml_str(TWO_RULES).expect("valid table");
        let mut s = calm();
        assert_eq!(selector.select(&s).rule_id, "fallback");
        s.hydration_level = 39.0;
        let selection = selector.select(&s);
        assert_eq!(selection.rule_id, "thirsty");
        assert_eq!(selection.formula.formula_type, FormulaType::WesternFocused);
    }

    #[test]
    fn test_condition_holds_strictly() {
        let cond = Condition {
            metric: Metric::HeartRate,
            op: Comparison::Gt,
            threshold: 85.0,
        };
        let mut s = calm();
        s.heart_rate = 85;
        assert!(!cond.holds(&s));
        s.heart_rate = 86;
        assert!(cond.holds(&s));
        assert_eq!(cond.to_string(), "heart-rate > 85");
    }

    // ── 7. configuration errors ───────────────────────────────────────────────

    fn config_reason(result: QinyuanResult<TomlFormulaSelector>) -> String {
        match result {
            Err(QinyuanError::ConfigError { reason }) => reason,
            other => panic!("expected ConfigError, got {:?}", other),
        }
    }

    #[test]
    fn test_toml_parse_error() {
        let reason = config_reason(TomlFormulaSelector::from_toml_str("[[rules]\nid ="));
        assert!(reason.contains("failed to parse formula rule TOML"));
    }

    #[test]
    fn test_empty_table_rejected() {
        let reason = config_reason(TomlFormulaSelector::from_toml_str("rules = []"));
        assert!(reason.contains("empty"));
    }

    #[test]
    fn test_missing_default_rejected() {
        let only_conditional = TWO_RULES
            .split("[[rules]]\nid = \"fallback\"")
            .next()
            .unwrap_or_default();
        let reason = config_reason(TomlFormulaSelector::from_toml_str(only_conditional));
        assert!(reason.contains("must end with a default rule"), "{reason}");
    }

    #[test]
    fn test_default_not_last_rejected() {
        let mut table = toml::from_str::<crate::rule::RuleTable>(TWO_RULES).expect("valid");
        table.rules.reverse();
        let reason = config_reason(TomlFormulaSelector::from_table(table));
        assert!(reason.contains("default rule 'fallback' is not last"), "{reason}");
    }

    #[test]
    fn test_undosed_highlight_rejected() {
        const UNDOSED: &str = r#"
            [[rules]]
            id = "only"
            description = "Default rule with an undosed highlight"

            [rules.formula]
            name = "Broken"
            forCondition = "General wellness"
            type = "balanced"
            highlightedElements = ["ginseng", "not_dosed"]

            [rules.formula.elementLevels]
            ginseng = 0.0
        "#;
        let reason = config_reason(TomlFormulaSelector::from_toml_str(UNDOSED));
        assert!(reason.contains("rule 'only'"), "{reason}");
        assert!(reason.contains("'ginseng'"), "{reason}");
    }

    #[test]
    fn test_highlight_missing_from_levels_rejected() {
        let missing = TWO_RULES.replace(
            "highlightedElements = [\"electrolytes\"]",
            "highlightedElements = [\"electrolytes\", \"goji\"]",
        );
        let reason = config_reason(TomlFormulaSelector::from_toml_str(&missing));
        assert!(reason.contains("rule 'thirsty' highlights 'goji'"), "{reason}");
    }

    #[test]
    fn test_duplicate_rule_id_rejected() {
        let doubled = TWO_RULES.replace("id = \"thirsty\"", "id = \"fallback\"");
        let reason = config_reason(TomlFormulaSelector::from_toml_str(&doubled));
        assert!(reason.contains("duplicate rule id 'fallback'"));
    }

    #[test]
    fn test_unknown_metric_rejected() {
        let bad = TWO_RULES.replace("hydration-level", "mood");
        let reason = config_reason(TomlFormulaSelector::from_toml_str(&bad));
        assert!(reason.contains("failed to parse formula rule TOML"));
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let reason = config_reason(TomlFormulaSelector::from_file(std::path::Path::new(
            "/nonexistent/rules.toml",
        )));
        assert!(reason.contains("failed to read rule file"));
    }

    // ── 8. catalog ────────────────────────────────────────────────────────────

    #[test]
    fn test_builtin_catalog_partitions() {
        let catalog = builtin_catalog().expect("built-in catalog must load");
        assert_eq!(catalog.by_category(IngredientCategory::Tcm).count(), 12);
        assert_eq!(catalog.by_category(IngredientCategory::Western).count(), 11);
        assert_eq!(catalog.get("selenium").map(|e| e.unit.as_str()), Some("µg/L"));
    }

    #[test]
    fn test_builtin_formulas_reference_catalog_ids() {
        let catalog = builtin_catalog().expect("catalog");
        for rule in builtin().rules() {
            for (id, dose) in &rule.formula.element_levels {
                let entry = catalog
                    .get(id.as_str())
                    .unwrap_or_else(|| panic!("'{}' missing from catalog", id));
                assert!(*dose <= entry.max_level, "{} over max in '{}'", id, rule.id);
            }
        }
    }

    #[test]
    fn test_rapid_hydration_ratio_and_warnings() {
        let catalog = builtin_catalog().expect("catalog");
        let formula: &FormulaRecord = &builtin().rules().next().expect("first rule").formula;
        let ratio = formula.category_ratio(catalog);
        assert_eq!(ratio.tcm + ratio.western, 100);
        // 73 mg tcm against 118 mg western.
        assert_eq!(ratio.tcm, 38);

        let warnings = formula.interaction_warnings(catalog);
        let warned: Vec<&str> = warnings.iter().map(|w| w.ingredient.as_str()).collect();
        assert!(warned.contains(&"ginseng"));
        assert!(!warned.contains(&"electrolytes"));
    }

    #[test]
    fn test_catalog_duplicate_rejected() {
        let doc = r##"
[[ingredients]]
id = "zinc"
name = "Zinc"
color = "#60a5fa"
benefits = "Immune support"
max_level = 15.0
unit = "mg/L"
category = "western"

[[ingredients]]
id = "zinc"
name = "Zinc again"
color = "#60a5fa"
benefits = "Immune support"
max_level = 15.0
unit = "mg/L"
category = "western"
"##;
        match catalog_from_toml_str(doc) {
            Err(QinyuanError::ConfigError { reason }) => {
                assert!(reason.contains("duplicate ingredient id 'zinc'"))
            }
            other => panic!("expected ConfigError, got {:?}", other),
        }
    }

    // ── 9. round trip ─────────────────────────────────────────────────────────

    #[test]
    fn test_formula_record_json_round_trip() {
        for rule in builtin().rules() {
            let json = serde_json::to_string(&rule.formula).expect("serialize");
            let back: FormulaRecord = serde_json::from_str(&json).expect("deserialize");
            assert_eq!(back, rule.formula);
        }
    }
}
