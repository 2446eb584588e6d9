//! Scenario 3: Live Session
//!
//! Connects a seeded simulator, analyses the baseline it reports on connect
//! as tick 0, then pulls a fixed number of readings and analyses each one
//! independently. The selected rule can change from one tick to the next as
//! the jitter walks the vitals around.

use std::time::Duration;

use qinyuan_contracts::{analysis::Analysis, error::QinyuanResult};
use qinyuan_core::Analyzer;

use crate::scenarios::ScenarioSetup;
use crate::simulator::WristbandSimulator;

#[derive(Debug, Clone, Copy)]
pub struct SessionOptions {
    pub ticks: usize,
    pub seed: u64,
    /// Pause between readings. The dashboard polls every five seconds.
    pub interval: Duration,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            ticks: 8,
            seed: 7,
            interval: Duration::ZERO,
        }
    }
}

/// Run a session and return `options.ticks + 1` analyses: the connect
/// reading first, then one per tick.
pub fn run_session(analyzer: &Analyzer, options: SessionOptions) -> QinyuanResult<Vec<Analysis>> {
    let mut device = WristbandSimulator::new(options.seed).with_interval(options.interval);

    let mut analyses = vec![analyzer.analyze(&device.connect())];
    let ticks = analyzer.run_session(&mut device, options.ticks);
    device.disconnect();

    analyses.extend(ticks?);
    Ok(analyses)
}

pub fn run_with(setup: &ScenarioSetup, options: SessionOptions) -> QinyuanResult<()> {
    println!("=== Scenario 3: Live Session ===");
    println!();
    println!(
        "  Device seed {}, {} ticks, interval {} ms",
        options.seed,
        options.ticks,
        options.interval.as_millis()
    );
    println!();
    println!(
        "  {:>4}  {:<8}  {:<24}  {:<15}  {}",
        "tick", "time", "rule", "constitution", "risk flags"
    );

    for (tick, analysis) in run_session(&setup.analyzer, options)?.iter().enumerate() {
        let flags: Vec<&str> = analysis.labels.risk_flags.iter().map(|f| f.as_str()).collect();
        println!(
            "  {:>4}  {:<8}  {:<24}  {:<15}  {}",
            tick,
            analysis.captured_at.format("%H:%M:%S").to_string(),
            analysis.rule_id,
            analysis.labels.constitution_type.as_str(),
            if flags.is_empty() { "none".to_string() } else { flags.join(", ") }
        );
    }

    println!();
    Ok(())
}

pub fn run_scenario() -> QinyuanResult<()> {
    run_with(&ScenarioSetup::builtin()?, SessionOptions::default())
}
