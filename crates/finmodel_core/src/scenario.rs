//! Scenario adjustment
//!
//! Derives best/worst (or caller-defined) variants of an assumption set by
//! scaling growth and cost ratios. The input is never modified; a new,
//! re-validated `AssumptionSet` is returned.

use crate::error::Result;
use crate::model::{AssumptionSet, ScenarioAdjustment, ScenarioType, validate};

/// Apply the fixed multiplier table for `scenario`
///
/// `Base` and `Custom` return an identical copy.
pub fn adjust_for_scenario(
    assumptions: &AssumptionSet,
    scenario: ScenarioType,
) -> Result<AssumptionSet> {
    adjust_with(assumptions, &ScenarioAdjustment::for_scenario(scenario))
}

/// Apply arbitrary multipliers to an assumption set
///
/// The result goes through validation again: a stress that pushes a cost
/// ratio above 100% is reported as an error on that field.
pub fn adjust_with(
    assumptions: &AssumptionSet,
    adjustment: &ScenarioAdjustment,
) -> Result<AssumptionSet> {
    if adjustment.is_identity() {
        return Ok(assumptions.clone());
    }

    let mut payload = assumptions.as_payload().clone();
    payload.revenue_growth_rate *= adjustment.revenue_growth_rate;
    payload.cogs_percent *= adjustment.cogs_percent;
    payload.opex_variable_percent *= adjustment.opex_variable_percent;
    payload.opex_fixed *= adjustment.opex_fixed;

    validate(payload)
}
