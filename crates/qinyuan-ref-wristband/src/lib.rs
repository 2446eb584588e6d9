//! # qinyuan-ref-wristband
//!
//! Reference device layer for the Qinyuan recommendation core.
//!
//! Provides a simulated wristband that emits jittered readings and three
//! narrated scenarios that run real classifier and selector components over
//! them:
//!
//! 1. **Hydration alert**: a dehydrated, yang-excess reading selects the
//!    rapid hydration formula.
//! 2. **Stress relief**: high stress wins over a high heart rate, and a
//!    hydration reading sitting exactly on its threshold falls through.
//! 3. **Live session**: a seeded simulator feeds the analyzer tick by tick.
//!
//! All readings are fictional. No hardware is contacted.

pub mod mock_data;
pub mod scenarios;
pub mod simulator;

pub use simulator::WristbandSimulator;
