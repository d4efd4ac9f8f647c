//! Best/base/worst scenario comparison
//!
//! Each scenario is an independent adjust → project → aggregate pipeline
//! over its own copy of the assumptions, so the three runs share nothing and
//! are evaluated in parallel when the `parallel` feature is enabled.

use std::collections::BTreeMap;

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::ProjectionConfig;
use crate::error::Result;
use crate::metrics::aggregate_metrics;
use crate::model::{AssumptionSet, MonthlyProjection, ProjectionMetrics, ScenarioType};
use crate::projection::run_projection;

/// Projection and metrics for one scenario
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioRun {
    pub projections: Vec<MonthlyProjection>,
    pub metrics: ProjectionMetrics,
}

/// One row of the quick comparison table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioSummary {
    pub scenario: ScenarioType,
    pub final_cash: f64,
    pub total_revenue: f64,
    #[serde(serialize_with = "serialize_profitability")]
    pub months_to_profitability: Option<u32>,
}

fn serialize_profitability<S: serde::Serializer>(
    value: &Option<u32>,
    s: S,
) -> std::result::Result<S::Ok, S::Error> {
    s.serialize_i64(value.map_or(-1, i64::from))
}

/// Results for every compared scenario
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScenarioComparison {
    pub runs: BTreeMap<ScenarioType, ScenarioRun>,
}

impl ScenarioComparison {
    #[must_use]
    pub fn get(&self, scenario: ScenarioType) -> Option<&ScenarioRun> {
        self.runs.get(&scenario)
    }

    /// Headline numbers per scenario, in best/base/worst order
    #[must_use]
    pub fn summary(&self) -> Vec<ScenarioSummary> {
        ScenarioType::COMPARED
            .iter()
            .filter_map(|scenario| {
                self.runs.get(scenario).map(|run| ScenarioSummary {
                    scenario: *scenario,
                    final_cash: run.metrics.final_cash_balance,
                    total_revenue: run.metrics.total_revenue,
                    months_to_profitability: run.metrics.months_to_profitability,
                })
            })
            .collect()
    }
}

/// Run the BEST, BASE and WORST scenarios for the same assumptions
///
/// `config.scenario` is ignored; every other setting applies to all three
/// runs. The first scenario that fails validation aborts the comparison.
pub fn compare_scenarios(
    assumptions: &AssumptionSet,
    config: &ProjectionConfig,
) -> Result<ScenarioComparison> {
    config.validate()?;

    #[cfg(feature = "parallel")]
    let results: Vec<Result<(ScenarioType, ScenarioRun)>> = ScenarioType::COMPARED
        .par_iter()
        .map(|scenario| run_scenario(assumptions, config, *scenario))
        .collect();

    #[cfg(not(feature = "parallel"))]
    let results: Vec<Result<(ScenarioType, ScenarioRun)>> = ScenarioType::COMPARED
        .iter()
        .map(|scenario| run_scenario(assumptions, config, *scenario))
        .collect();

    let runs = results.into_iter().collect::<Result<BTreeMap<_, _>>>()?;
    let comparison = ScenarioComparison { runs };

    for row in comparison.summary() {
        tracing::info!(
            scenario = %row.scenario,
            final_cash = row.final_cash,
            total_revenue = row.total_revenue,
            months_to_profitability = ?row.months_to_profitability,
            "scenario evaluated"
        );
    }

    Ok(comparison)
}

fn run_scenario(
    assumptions: &AssumptionSet,
    config: &ProjectionConfig,
    scenario: ScenarioType,
) -> Result<(ScenarioType, ScenarioRun)> {
    let projections = run_projection(assumptions, &config.with_scenario(scenario))?;
    // A validated horizon is never empty
    let metrics = aggregate_metrics(&projections).unwrap_or_default();
    Ok((
        scenario,
        ScenarioRun {
            projections,
            metrics,
        },
    ))
}
