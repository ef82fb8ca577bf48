//! # Brain Module
//!
//! Fast, rule-based analysis of user messages. Runs BEFORE any response
//! is generated and turns free text into structured facts.
//!
//! ## Components
//! - `extractor`: biometric extraction (weight, height, age, gender,
//!   activity level, goal) via regex patterns with unit normalization
//! - `intent`: query classification using ordered keyword sets
//! - `analyzer`: per-turn orchestrator producing a `QueryAnalysis`

pub mod analyzer;
pub mod extractor;
pub mod intent;

pub use analyzer::{QueryAnalysis, QueryAnalyzer};
pub use intent::{QueryClassifier, QueryType};
