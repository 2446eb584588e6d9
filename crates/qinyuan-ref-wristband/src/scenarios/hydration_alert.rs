//! Scenario 1: Hydration Alert
//!
//! A dehydrated reading with a yang-leaning constitution and a weak liver
//! meridian. Hydration below 50 outranks every other rule, so the rapid
//! hydration formula is selected. The classifier independently raises
//! low-hydration (its own cut-off is 60) and flags the liver.

use qinyuan_contracts::{
    error::QinyuanResult,
    snapshot::{HealthSnapshot, MeridianBalance},
};

use crate::mock_data::baseline_snapshot;
use crate::scenarios::{print_report, via_device_boundary, ScenarioSetup};

/// The reading this scenario analyses.
pub fn scenario_snapshot() -> HealthSnapshot {
    let mut s = baseline_snapshot();
    s.hydration_level = 45.0;
    s.stress_level = 30.0;
    s.heart_rate = 72;
    s.body_temperature = 36.7;
    s.yin_yang_balance = 0.5;
    s.meridian_balance = MeridianBalance::uniform(80.0);
    s.meridian_balance.liver = 65.0;
    s.inflammation = 1.0;
    s.immune_activity = 90.0;
    s
}

pub fn run_scenario() -> QinyuanResult<()> {
    run_with(&ScenarioSetup::builtin()?)
}

pub fn run_with(setup: &ScenarioSetup) -> QinyuanResult<()> {
    println!("=== Scenario 1: Hydration Alert ===");
    println!();

    let snapshot = via_device_boundary(&scenario_snapshot())?;
    println!(
        "  Reading: hydration {}%, stress {}, heart rate {} bpm, yin/yang {:+.1}, liver {}",
        snapshot.hydration_level,
        snapshot.stress_level,
        snapshot.heart_rate,
        snapshot.yin_yang_balance,
        snapshot.meridian_balance.liver
    );
    println!();

    let (labels, selection) = setup.analyzer.evaluate(&snapshot);
    print_report(&snapshot, &labels, &selection, &setup.catalog);

    if selection.rule_id == "rapid-hydration" {
        println!();
        println!("  Hydration 45 < 50: rule 1 matched before any other rule was tested.");
    }
    println!();
    Ok(())
}
