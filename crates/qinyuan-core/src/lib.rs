//! # qinyuan-core
//!
//! The seams of the Qinyuan recommendation core and the analyzer that wires
//! them together.
//!
//! This crate provides:
//! - The three seam traits (`Classifier`, `FormulaSelector`, `SnapshotSource`)
//! - The `Analyzer`, which runs classifier and selector over the same reading
//!
//! ## Usage
//!
//! ```rust,ignore
//! use qinyuan_core::{Analyzer, traits::{Classifier, FormulaSelector}};
//!
//! let analyzer = Analyzer::new(Box::new(classifier), Box::new(selector));
//! let analysis = analyzer.analyze(&reading);
//! ```

pub mod analyzer;
pub mod traits;

pub use analyzer::Analyzer;
