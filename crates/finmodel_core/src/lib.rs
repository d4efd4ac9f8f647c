//! Monthly financial projection library
//!
//! This crate turns a validated set of business assumptions into a
//! month-by-month integrated projection of a company's income statement and
//! cash position. It supports:
//! - Compounding revenue growth with COGS and operating expense ratios
//! - Scheduled equity raises, debt raises and capital expenditure
//! - Straight-line depreciation and simple debt interest
//! - Best/base/worst scenario stress tests and side-by-side comparison
//! - Summary KPIs, fiscal-year rollups and CSV/JSON export
//!
//! # Builder DSL
//!
//! ```ignore
//! use finmodel_core::{AssumptionsBuilder, ProjectionConfig, run_projection};
//!
//! let assumptions = AssumptionsBuilder::new()
//!     .revenue(100_000.0)
//!     .growth(0.15)
//!     .cogs(0.30)
//!     .opex(50_000.0, 0.10)
//!     .starting_cash(100_000.0)
//!     .equity_raise(6, 500_000.0)
//!     .build()?;
//!
//! let config = ProjectionConfig::new().months(24).start(2025, 1, 1);
//! let months = run_projection(&assumptions, &config)?;
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod annual;
pub mod comparison;
pub mod date_math;
pub mod error;
pub mod export;
pub mod inference;
pub mod metrics;
pub mod projection;
pub mod projection_state;
pub mod scenario;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod config;
pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use annual::fiscal_year_summaries;
pub use comparison::{ScenarioComparison, ScenarioRun, ScenarioSummary, compare_scenarios};
pub use config::{AssumptionsBuilder, ProjectionConfig};
pub use error::{Result, ValidationError};
pub use inference::{HistoricalFinancials, InferredAssumptions, infer_assumptions};
pub use metrics::aggregate_metrics;
pub use model::{
    AssumptionSet, CapexEvent, FiscalYearSummary, FundingEvent, ModelAssumptions,
    MonthlyProjection, ProjectionMetrics, ScenarioAdjustment, ScenarioType, validate,
};
pub use projection::{project, run_projection};
pub use scenario::{adjust_for_scenario, adjust_with};
