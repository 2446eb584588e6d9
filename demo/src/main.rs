//! Qinyuan Wristband Recommendation Demo CLI
//!
//! Runs the narrated scenarios, or analyses a snapshot file, or inspects the
//! rule table and ingredient catalog.
//!
//! Usage:
//!   cargo run -p demo -- run-all
//!   cargo run -p demo -- live-session --ticks 20 --seed 3
//!   cargo run -p demo -- analyze reading.json
//!   cargo run -p demo -- --rules my-rules.toml check-tables
//!   cargo run -p demo -- --rules my-rules.toml --thresholds strict.toml live-session

use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use qinyuan_classify::{ClassifierThresholds, ThresholdClassifier};
use qinyuan_contracts::{
    error::{QinyuanError, QinyuanResult},
    ingredient::{IngredientCatalog, IngredientCategory},
    snapshot::Reading,
};
use qinyuan_core::Analyzer;
use qinyuan_formula::{
    catalog::{builtin_catalog, catalog_from_file},
    TomlFormulaSelector,
};
use qinyuan_ref_wristband::scenarios::{
    hydration_alert,
    live_session::{self, SessionOptions},
    stress_relief, ScenarioSetup,
};
use qinyuan_verify::{SnapshotValidator, TableVerifier};

// ── CLI definition ────────────────────────────────────────────────────────────

/// Qinyuan: wristband readings in, herbal water formula out.
#[derive(Parser)]
#[command(
    name = "demo",
    about = "Qinyuan wristband recommendation demo",
    long_about = "Runs Qinyuan demo scenarios showing snapshot validation, metric\n\
                  classification and first-match formula selection."
)]
struct Cli {
    /// Formula rule table (TOML). Defaults to the built-in table. Applies to
    /// the scenarios as well as the tools.
    #[arg(long, global = true, value_name = "PATH")]
    rules: Option<PathBuf>,

    /// Ingredient catalog (TOML). Defaults to the built-in catalog.
    #[arg(long, global = true, value_name = "PATH")]
    catalog: Option<PathBuf>,

    /// Classifier threshold overrides (TOML).
    #[arg(long, global = true, value_name = "PATH")]
    thresholds: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run all three scenarios in sequence.
    RunAll,
    /// Scenario 1: dehydrated reading selects rapid hydration.
    HydrationAlert,
    /// Scenario 2: stress outranks heart rate; hydration boundary falls through.
    StressRelief,
    /// Scenario 3: seeded simulator analysed tick by tick.
    LiveSession {
        #[arg(long, default_value_t = 8)]
        ticks: usize,
        #[arg(long, default_value_t = 7)]
        seed: u64,
        /// Pause between readings in milliseconds.
        #[arg(long, default_value_t = 0)]
        interval_ms: u64,
    },
    /// Validate, classify and select for a snapshot JSON file; print the analysis.
    Analyze {
        snapshot: PathBuf,
    },
    /// List ingredient catalog entries.
    Catalog {
        #[arg(long, value_enum)]
        category: Option<CategoryArg>,
    },
    /// List the formula rules in evaluation order.
    Rules,
    /// Check every formula against the ingredient catalog.
    CheckTables,
}

#[derive(Clone, Copy, ValueEnum)]
enum CategoryArg {
    Tcm,
    Western,
}

impl From<CategoryArg> for IngredientCategory {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::Tcm => IngredientCategory::Tcm,
            CategoryArg::Western => IngredientCategory::Western,
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    // Set RUST_LOG=debug to see every rule match and classification.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    let result = match &cli.command {
        Command::RunAll => run_scenarios(&cli, run_all),
        Command::HydrationAlert => run_scenarios(&cli, hydration_alert::run_with),
        Command::StressRelief => run_scenarios(&cli, stress_relief::run_with),
        Command::LiveSession {
            ticks,
            seed,
            interval_ms,
        } => run_scenarios(&cli, |setup| {
            live_session::run_with(
                setup,
                SessionOptions {
                    ticks: *ticks,
                    seed: *seed,
                    interval: Duration::from_millis(*interval_ms),
                },
            )
        }),
        Command::Analyze { snapshot } => run_analyze(&cli, snapshot),
        Command::Catalog { category } => run_catalog(&cli, category.map(Into::into)),
        Command::Rules => run_rules(&cli),
        Command::CheckTables => run_check_tables(&cli),
    };

    if let Err(e) = result {
        eprintln!("Demo error: {}", e);
        std::process::exit(1);
    }
}

// ── Configuration ─────────────────────────────────────────────────────────────

fn load_selector(cli: &Cli) -> QinyuanResult<TomlFormulaSelector> {
    match &cli.rules {
        Some(path) => {
            info!(path = %path.display(), "loading formula rules");
            TomlFormulaSelector::from_file(path)
        }
        None => Ok(TomlFormulaSelector::builtin()?.clone()),
    }
}

fn load_catalog(cli: &Cli) -> QinyuanResult<IngredientCatalog> {
    match &cli.catalog {
        Some(path) => {
            info!(path = %path.display(), "loading ingredient catalog");
            catalog_from_file(path)
        }
        None => Ok(builtin_catalog()?.clone()),
    }
}

fn load_thresholds(cli: &Cli) -> QinyuanResult<ClassifierThresholds> {
    match &cli.thresholds {
        Some(path) => {
            info!(path = %path.display(), "loading classifier thresholds");
            ClassifierThresholds::from_file(path)
        }
        None => Ok(ClassifierThresholds::default()),
    }
}

fn load_setup(cli: &Cli) -> QinyuanResult<ScenarioSetup> {
    Ok(ScenarioSetup::new(
        load_selector(cli)?,
        load_thresholds(cli)?,
        load_catalog(cli)?,
    ))
}

// ── Scenario dispatch ─────────────────────────────────────────────────────────

fn run_scenarios(
    cli: &Cli,
    run: impl FnOnce(&ScenarioSetup) -> QinyuanResult<()>,
) -> QinyuanResult<()> {
    let setup = load_setup(cli)?;
    print_banner();
    run(&setup)?;
    println!("All selected scenarios completed successfully.");
    Ok(())
}

fn run_all(setup: &ScenarioSetup) -> QinyuanResult<()> {
    hydration_alert::run_with(setup)?;
    stress_relief::run_with(setup)?;
    live_session::run_with(setup, SessionOptions::default())?;
    Ok(())
}

// ── Tools ─────────────────────────────────────────────────────────────────────

fn run_analyze(cli: &Cli, path: &Path) -> QinyuanResult<()> {
    let text = std::fs::read_to_string(path).map_err(|e| QinyuanError::InvalidSnapshot {
        reason: format!("failed to read snapshot file '{}': {}", path.display(), e),
    })?;
    let snapshot = SnapshotValidator::new()?.parse_str(&text)?;

    let analyzer = Analyzer::new(
        Box::new(ThresholdClassifier::new(load_thresholds(cli)?)),
        Box::new(load_selector(cli)?),
    );
    let analysis = analyzer.analyze(&Reading::now(snapshot));

    let rendered =
        serde_json::to_string_pretty(&analysis).map_err(|e| QinyuanError::ConfigError {
            reason: format!("failed to render analysis: {e}"),
        })?;
    println!("{rendered}");
    Ok(())
}

fn run_catalog(cli: &Cli, category: Option<IngredientCategory>) -> QinyuanResult<()> {
    let catalog = load_catalog(cli)?;
    println!(
        "{:<14} {:<8} {:>6} {:<5}  {}",
        "id", "category", "max", "unit", "meridians"
    );
    for entry in catalog
        .iter()
        .filter(|e| category.map_or(true, |c| e.category == c))
    {
        let meridians: Vec<&str> = entry.meridians.iter().map(|m| m.as_str()).collect();
        println!(
            "{:<14} {:<8} {:>6} {:<5}  {}",
            entry.id.as_str(),
            entry.category.as_str(),
            entry.max_level,
            entry.unit,
            meridians.join(", ")
        );
    }
    Ok(())
}

fn run_rules(cli: &Cli) -> QinyuanResult<()> {
    let selector = load_selector(cli)?;
    for (i, summary) in selector.summaries().iter().enumerate() {
        println!(
            "{}. {:<24} {:<26} -> {}",
            i + 1,
            summary.id,
            summary.condition.as_deref().unwrap_or("default"),
            summary.formula_name
        );
    }
    Ok(())
}

fn run_check_tables(cli: &Cli) -> QinyuanResult<()> {
    let selector = load_selector(cli)?;
    let catalog = load_catalog(cli)?;
    let report = TableVerifier::new().verify(selector.rules().map(|r| &r.formula), &catalog);

    if report.passed {
        println!(
            "{} formulas checked against {} ingredients: PASS",
            selector.len(),
            catalog.len()
        );
        return Ok(());
    }

    for failure in &report.failures {
        println!(
            "  [{}] {}: {}",
            failure.rule_id, failure.subject, failure.message
        );
    }
    Err(QinyuanError::ConfigError {
        reason: format!("{} formula table check(s) failed", report.failures.len()),
    })
}

// ── Banner ────────────────────────────────────────────────────────────────────

fn print_banner() {
    println!();
    println!("Qinyuan: Smart Wristband Herbal Water");
    println!("Recommendation Core Demo");
    println!("=====================================");
    println!();
    println!("Per reading:");
    println!("  [1] Snapshot validated against JSON Schema, checked finite, clamped");
    println!("  [2] Classifier derives constitution, weak meridians, risk flags, electrolytes");
    println!("  [3] Rule table tested top to bottom; first match selects the formula");
    println!();
}
