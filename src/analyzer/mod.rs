//! Analyzer module - criteria, insights and the engine that runs them

pub mod engine;
pub mod insights;
pub mod rules;
pub mod scoring;
pub mod thresholds;

pub use engine::{AggregateStats, AnalysisEngine};
pub use scoring::ScoreCalculator;
pub use thresholds::{Thresholds, RULESET_VERSION};
