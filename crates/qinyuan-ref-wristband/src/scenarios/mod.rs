//! Narrated walk-throughs of the recommendation core.
//!
//! Each scenario wires real components (threshold classifier, formula rule
//! table, snapshot validator) to mock wristband data and prints what the
//! core decided and why. `ScenarioSetup::builtin` gives the stock tables;
//! the demo CLI builds one from `--rules`, `--thresholds` and `--catalog`.

pub mod hydration_alert;
pub mod live_session;
pub mod stress_relief;

use qinyuan_classify::{
    advice::{describe_formula_type, findings, lifestyle_advice},
    ClassifierThresholds, ThresholdClassifier,
};
use qinyuan_contracts::{
    error::{QinyuanError, QinyuanResult},
    formula::Selection,
    ingredient::IngredientCatalog,
    labels::ClassificationLabels,
    snapshot::HealthSnapshot,
};
use qinyuan_core::Analyzer;
use qinyuan_formula::{catalog::builtin_catalog, TomlFormulaSelector};
use qinyuan_verify::SnapshotValidator;

/// The components every scenario runs over.
pub struct ScenarioSetup {
    pub analyzer: Analyzer,
    /// Used for category ratios and interaction warnings.
    pub catalog: IngredientCatalog,
}

impl ScenarioSetup {
    pub fn new(
        selector: TomlFormulaSelector,
        thresholds: ClassifierThresholds,
        catalog: IngredientCatalog,
    ) -> Self {
        Self {
            analyzer: Analyzer::new(
                Box::new(ThresholdClassifier::new(thresholds)),
                Box::new(selector),
            ),
            catalog,
        }
    }

    /// Default thresholds, the built-in rule table and the built-in catalog.
    pub fn builtin() -> QinyuanResult<Self> {
        Ok(Self::new(
            TomlFormulaSelector::builtin()?.clone(),
            ClassifierThresholds::default(),
            builtin_catalog()?.clone(),
        ))
    }
}

/// Send `snapshot` through the JSON boundary as a device would.
pub(crate) fn via_device_boundary(snapshot: &HealthSnapshot) -> QinyuanResult<HealthSnapshot> {
    let payload = serde_json::to_value(snapshot).map_err(|e| QinyuanError::InvalidSnapshot {
        reason: e.to_string(),
    })?;
    SnapshotValidator::new()?.parse(&payload)
}

fn join<T>(items: &[T], f: impl Fn(&T) -> String) -> String {
    if items.is_empty() {
        "none".to_string()
    } else {
        items.iter().map(f).collect::<Vec<_>>().join(", ")
    }
}

/// Print labels and selection the way the dashboard lays them out.
pub fn print_report(
    snapshot: &HealthSnapshot,
    labels: &ClassificationLabels,
    selection: &Selection<'_>,
    catalog: &IngredientCatalog,
) {
    let formula = selection.formula;

    println!("  Constitution:      {}", labels.constitution_type.as_str());
    println!("  Meridian grade:    {}", labels.meridian_assessment.as_str());
    println!(
        "  Weak meridians:    {}",
        join(&labels.meridian_deficiencies, |m| m.to_string())
    );
    println!(
        "  Risk flags:        {}",
        join(&labels.risk_flags, |f| f.as_str().to_string())
    );
    let electrolytes: Vec<String> = labels
        .electrolyte_status
        .iter()
        .map(|(e, status)| format!("{} {}", e, status.as_str()))
        .collect();
    println!("  Electrolytes:      {}", electrolytes.join(", "));
    println!(
        "  Suggested:         {}",
        join(&labels.recommended_ingredients, |id| id.to_string())
    );
    println!();
    println!("  Selected rule:     {}", selection.rule_id);
    println!(
        "  Formula:           {} ({}), based on {}",
        formula.name,
        formula.formula_type.as_str(),
        describe_formula_type(formula.formula_type)
    );
    println!(
        "  Highlighted:       {}",
        join(&formula.highlighted_elements, |id| {
            format!("{} {}", id, formula.dosage(id.as_str()))
        })
    );
    let ratio = formula.category_ratio(catalog);
    println!("  TCM / western:     {}% / {}%", ratio.tcm, ratio.western);

    let lines = findings(labels, &snapshot.meridian_balance);
    if !lines.is_empty() {
        println!("  Findings:");
        for line in lines {
            println!("    - {}", line);
        }
    }

    let advice = lifestyle_advice(labels);
    if !advice.is_empty() {
        println!("  Advice:");
        for line in advice {
            println!("    - {}", line);
        }
    }

    let warnings = formula.interaction_warnings(catalog);
    if !warnings.is_empty() {
        println!("  Interactions:");
        for w in warnings {
            println!("    - {}: {}", w.ingredient, w.interacts_with.join(", "));
        }
    }
}
