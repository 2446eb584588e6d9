//! Formula rule types and the rule-table document schema.
//!
//! A `RuleTable` is deserialized from TOML and holds an ordered list of
//! `FormulaRule`s. Rules are tested in declaration order and the first
//! matching rule wins. The table must end with a default rule (no `when`),
//! which is what makes selection total.

use std::fmt;

use serde::{Deserialize, Serialize};

use qinyuan_contracts::{
    formula::FormulaRecord,
    snapshot::{HealthSnapshot, Metric},
};

/// Direction of a threshold comparison. Both are strict.
///
/// ```toml
/// op = "lt"
/// op = "gt"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Comparison {
    Lt,
    Gt,
}

impl Comparison {
    pub fn symbol(&self) -> &'static str {
        match self {
            Comparison::Lt => "<",
            Comparison::Gt => ">",
        }
    }
}

/// A single metric-vs-threshold test.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Condition {
    pub metric: Metric,
    pub op: Comparison,
    pub threshold: f64,
}

impl Condition {
    /// Return true if `snapshot` satisfies this condition.
    ///
    /// A value equal to `threshold` never holds.
    pub fn holds(&self, snapshot: &HealthSnapshot) -> bool {
        let value = self.metric.read(snapshot);
        match self.op {
            Comparison::Lt => value < self.threshold,
            Comparison::Gt => value > self.threshold,
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.metric, self.op.symbol(), self.threshold)
    }
}

/// One row of the rule table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FormulaRule {
    /// Stable identifier, reported with every selection.
    pub id: String,

    pub description: String,

    /// Absent on the default rule.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub when: Option<Condition>,

    pub formula: FormulaRecord,
}

impl FormulaRule {
    pub fn is_default(&self) -> bool {
        self.when.is_none()
    }

    /// The default rule matches everything.
    pub fn matches(&self, snapshot: &HealthSnapshot) -> bool {
        self.when.as_ref().map_or(true, |c| c.holds(snapshot))
    }

    pub fn summary(&self) -> RuleSummary {
        RuleSummary {
            id: self.id.clone(),
            description: self.description.clone(),
            condition: self.when.as_ref().map(|c| c.to_string()),
            formula_name: self.formula.name.clone(),
        }
    }
}

/// The top-level structure deserialized from a rule-table file.
///
/// ```toml
/// [[rules]]
/// id = "rapid-hydration"
/// description = "Hydration below 50"
/// when = { metric = "hydration-level", op = "lt", threshold = 50.0 }
///
/// [rules.formula]
/// name = "Rapid Hydration Formula"
/// # ...
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleTable {
    /// Ordered list of rules. First match wins.
    pub rules: Vec<FormulaRule>,
}

/// A printable view of one rule, without its dosages.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleSummary {
    pub id: String,
    pub description: String,
    /// `None` for the default rule.
    pub condition: Option<String>,
    pub formula_name: String,
}
