//! Test Module
//!
//! Cross-module test suite for the NutriBot core.
//!
//! ## Test Categories
//! - `brain_tests`: extraction patterns and intent classification
//! - `calculator_tests`: BMR/TDEE/macro math and the completeness gate
//! - `chatbot_tests`: full dialogue flows, validation, reset, disclaimers

pub mod calculator_tests;
