//! Scenario 2: Stress Relief
//!
//! Two readings:
//!
//! 1. Stress 65 with a heart rate of 90. Both rule 2 and rule 3 would
//!    match; position decides, so stress relief wins.
//! 2. Hydration exactly 50 with stress 61. The hydration comparison is
//!    strict, so rule 1 does not fire and the reading falls through to
//!    stress relief.

use qinyuan_contracts::{
    error::QinyuanResult,
    snapshot::{HealthSnapshot, MeridianBalance},
};

use crate::mock_data::baseline_snapshot;
use crate::scenarios::{print_report, via_device_boundary, ScenarioSetup};

/// Stressed reading with an elevated heart rate.
pub fn scenario_snapshot() -> HealthSnapshot {
    let mut s = baseline_snapshot();
    s.hydration_level = 80.0;
    s.stress_level = 65.0;
    s.heart_rate = 90;
    s.body_temperature = 36.5;
    s.meridian_balance = MeridianBalance::uniform(90.0);
    s.inflammation = 1.0;
    s.immune_activity = 90.0;
    s.yin_yang_balance = 0.0;
    s
}

/// Hydration sitting on the rule 1 threshold.
pub fn boundary_snapshot() -> HealthSnapshot {
    let mut s = scenario_snapshot();
    s.hydration_level = 50.0;
    s.stress_level = 61.0;
    s.heart_rate = 72;
    s
}

pub fn run_scenario() -> QinyuanResult<()> {
    run_with(&ScenarioSetup::builtin()?)
}

pub fn run_with(setup: &ScenarioSetup) -> QinyuanResult<()> {
    println!("=== Scenario 2: Stress Relief ===");
    println!();

    let analyzer = &setup.analyzer;

    // ── Case A: stress outranks heart rate ────────────────────────────────────

    let snapshot = via_device_boundary(&scenario_snapshot())?;
    println!(
        "  Case A: stress {}, heart rate {} bpm, hydration {}%",
        snapshot.stress_level, snapshot.heart_rate, snapshot.hydration_level
    );
    println!();
    let (labels, selection) = analyzer.evaluate(&snapshot);
    print_report(&snapshot, &labels, &selection, &setup.catalog);
    println!();

    // ── Case B: hydration exactly on the threshold ────────────────────────────

    let snapshot = via_device_boundary(&boundary_snapshot())?;
    println!(
        "  Case B: hydration {}% (threshold is < 50), stress {}",
        snapshot.hydration_level, snapshot.stress_level
    );
    let (labels, selection) = analyzer.evaluate(&snapshot);
    println!("  Selected rule:     {}", selection.rule_id);
    println!(
        "  Risk flags:        {}",
        labels
            .risk_flags
            .iter()
            .map(|f| f.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    );
    println!();
    Ok(())
}

#[cfg(test)]
mod tests {
    use qinyuan_contracts::labels::RiskFlag;

    use super::*;

    #[test]
    fn test_stress_outranks_heart_rate() {
        let setup = ScenarioSetup::builtin().expect("setup");
        let (labels, selection) = setup.analyzer.evaluate(&scenario_snapshot());
        assert_eq!(selection.rule_id, "stress-relief");
        assert_eq!(labels.risk_flags, vec![RiskFlag::HighStress]);
        assert!(labels.meridian_deficiencies.is_empty());
    }

    #[test]
    fn test_hydration_boundary_falls_through() {
        let setup = ScenarioSetup::builtin().expect("setup");
        let (labels, selection) = setup.analyzer.evaluate(&boundary_snapshot());
        assert_eq!(selection.rule_id, "stress-relief");
        assert!(labels.has_risk(RiskFlag::LowHydration));
        assert!(labels.has_risk(RiskFlag::HighStress));
    }

    #[test]
    fn test_stress_relief_runs() {
        assert!(run_scenario().is_ok());
    }
}
