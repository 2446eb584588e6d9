//! TOML-driven formula selector.
//!
//! `TomlFormulaSelector` loads a `RuleTable` from a TOML string or file and
//! implements the `FormulaSelector` trait from qinyuan-core.
//!
//! Selection algorithm:
//!
//! 1. Test the conditional rules in declaration order.
//! 2. Return the first one whose condition holds.
//! 3. Otherwise return the default rule.
//!
//! Loading rejects any table where step 3 could be missing or where a rule
//! could never be reached: the table must be non-empty, ids must be unique,
//! and exactly one rule, the last, may omit `when`. Every highlighted
//! ingredient must also carry a dosage above zero in its own formula.

use std::collections::HashSet;
use std::path::Path;
use std::sync::OnceLock;

use tracing::debug;

use qinyuan_contracts::{
    error::{QinyuanError, QinyuanResult},
    formula::Selection,
    snapshot::HealthSnapshot,
};
use qinyuan_core::traits::FormulaSelector;

use crate::rule::{FormulaRule, RuleSummary, RuleTable};

const BUILTIN_RULES: &str = include_str!("../tables/formulas.toml");

static BUILTIN: OnceLock<TomlFormulaSelector> = OnceLock::new();

/// A `FormulaSelector` over an ordered rule table with a trailing default.
///
/// ```rust,ignore
/// use qinyuan_formula::engine::TomlFormulaSelector;
///
/// let selector = TomlFormulaSelector::from_file(Path::new("rules.toml"))?;
/// let selection = selector.select(&snapshot);
/// ```
#[derive(Debug, Clone)]
pub struct TomlFormulaSelector {
    conditional: Vec<FormulaRule>,
    fallback: FormulaRule,
}

impl TomlFormulaSelector {
    /// Parse `s` as TOML and build a selector.
    ///
    /// Returns `QinyuanError::ConfigError` if the TOML is malformed, does not
    /// match `RuleTable`, or breaks the table invariants.
    pub fn from_toml_str(s: &str) -> QinyuanResult<Self> {
        let table: RuleTable = toml::from_str(s).map_err(|e| QinyuanError::ConfigError {
            reason: format!("failed to parse formula rule TOML: {}", e),
        })?;
        Self::from_table(table)
    }

    pub fn from_file(path: &Path) -> QinyuanResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| QinyuanError::ConfigError {
            reason: format!("failed to read rule file '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&contents)
    }

    /// Build a selector from an already-parsed table.
    pub fn from_table(table: RuleTable) -> QinyuanResult<Self> {
        let mut rules = table.rules;

        let mut seen = HashSet::new();
        for rule in &rules {
            if !seen.insert(rule.id.as_str()) {
                return Err(QinyuanError::ConfigError {
                    reason: format!("duplicate rule id '{}'", rule.id),
                });
            }
        }

        for rule in &rules {
            let formula = &rule.formula;
            if let Some(id) = formula
                .highlighted_elements
                .iter()
                .find(|id| formula.dosage(id.as_str()) <= 0.0)
            {
                return Err(QinyuanError::ConfigError {
                    reason: format!(
                        "rule '{}' highlights '{}' without a dosage above zero",
                        rule.id,
                        id.as_str()
                    ),
                });
            }
        }

        if let Some(early) = rules.iter().rev().skip(1).find(|r| r.is_default()) {
            return Err(QinyuanError::ConfigError {
                reason: format!(
                    "default rule '{}' is not last; rules after it are unreachable",
                    early.id
                ),
            });
        }

        let fallback = match rules.pop() {
            Some(rule) if rule.is_default() => rule,
            Some(rule) => {
                return Err(QinyuanError::ConfigError {
                    reason: format!(
                        "last rule '{}' has a condition; the table must end with a default rule",
                        rule.id
                    ),
                })
            }
            None => {
                return Err(QinyuanError::ConfigError {
                    reason: "rule table is empty".to_string(),
                })
            }
        };

        Ok(Self {
            conditional: rules,
            fallback,
        })
    }

    /// The rule table compiled into the binary, parsed once per process.
    pub fn builtin() -> QinyuanResult<&'static Self> {
        if let Some(selector) = BUILTIN.get() {
            return Ok(selector);
        }
        let parsed = Self::from_toml_str(BUILTIN_RULES)?;
        Ok(BUILTIN.get_or_init(|| parsed))
    }

    /// Every rule in evaluation order, default last.
    pub fn rules(&self) -> impl Iterator<Item = &FormulaRule> {
        self.conditional.iter().chain(std::iter::once(&self.fallback))
    }

    pub fn summaries(&self) -> Vec<RuleSummary> {
        self.rules().map(FormulaRule::summary).collect()
    }

    pub fn default_rule(&self) -> &FormulaRule {
        &self.fallback
    }

    pub fn len(&self) -> usize {
        self.conditional.len() + 1
    }

    /// Always false: a selector holds at least its default rule.
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl FormulaSelector for TomlFormulaSelector {
    fn select(&self, snapshot: &HealthSnapshot) -> Selection<'_> {
        let rule = self
            .conditional
            .iter()
            .find(|r| r.matches(snapshot))
            .unwrap_or(&self.fallback);

        debug!(
            rule_id = %rule.id,
            formula = %rule.formula.name,
            default = rule.is_default(),
            "formula selected"
        );

        Selection {
            rule_id: &rule.id,
            formula: &rule.formula,
        }
    }
}
