//! # dicecalc-orchestration
//!
//! Parallel execution, engine selection, and result analysis.

pub mod engine_selection;
pub mod interfaces;
pub mod orchestrator;

pub use interfaces::{CalculationResult, ResultPresenter};
pub use orchestrator::{analyze_comparison_results, execute_calculations};
