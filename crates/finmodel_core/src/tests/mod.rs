//! Integration tests for the projection engine
//!
//! Tests are organized by topic:
//! - `projection` - Monthly recurrence, cash identities and timing rules
//! - `scenarios` - Scenario stress multipliers flowing through a run
//! - `metrics` - KPI aggregation over finished projections
//! - `comparison` - Best/base/worst side-by-side runs
//! - `export` - CSV, JSON, sheet views and fiscal-year rollups
//! - `builder_dsl` - Builder DSL for fluent assumption setup

mod metrics;
mod projection;

use crate::config::{AssumptionsBuilder, ProjectionConfig};
use crate::model::AssumptionSet;

/// The reference company: 100k starting revenue growing 15% a month, 30%
/// COGS, 50k + 20% opex, 100k in the bank and a 28% tax rate.
pub(crate) fn reference_assumptions() -> AssumptionSet {
    AssumptionsBuilder::new()
        .revenue(100_000.0)
        .growth(0.15)
        .cogs(0.30)
        .opex(50_000.0, 0.20)
        .starting_cash(100_000.0)
        .tax_rate(0.28)
        .build()
        .unwrap()
}

pub(crate) fn config(months: u32) -> ProjectionConfig {
    ProjectionConfig::new().months(months).start(2025, 1, 1)
}

pub(crate) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-6,
        "expected {expected}, got {actual}"
    );
}
