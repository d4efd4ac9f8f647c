//! Month-by-month projection engine
//!
//! Advances a small state machine (cash, debt, depreciable base) over the
//! horizon and emits one immutable `MonthlyProjection` per month. The engine
//! holds no state between runs: the same assumptions and config always give
//! the same records.

use jiff::civil::Date;

use crate::config::ProjectionConfig;
use crate::date_math::{fiscal_year, month_periods};
use crate::error::{Result, ValidationError};
use crate::model::{AssumptionSet, MonthlyProjection, RUNWAY_SENTINEL, ScenarioType};
use crate::projection_state::{MonthEvents, ProjectionState};
use crate::scenario::adjust_for_scenario;

/// Run a projection with full control over the run settings
///
/// The configured scenario is applied to `assumptions` first. Fails before
/// simulating anything when the config or the adjusted assumptions are
/// invalid, or when the horizon runs past the end of the calendar.
pub fn run_projection(
    assumptions: &AssumptionSet,
    config: &ProjectionConfig,
) -> Result<Vec<MonthlyProjection>> {
    config.validate()?;
    let assumptions = adjust_for_scenario(assumptions, config.scenario)?;
    let start_date = config.resolved_start_date();
    let periods = month_periods(start_date, config.months).ok_or(
        ValidationError::StartDateOutOfRange {
            start: start_date,
            months: config.months,
        },
    )?;

    let _span = tracing::debug_span!(
        "projection",
        scenario = %config.scenario,
        months = config.months,
        start = %start_date,
    )
    .entered();

    let mut state = ProjectionState::from_assumptions(&assumptions);
    let mut projections = Vec::with_capacity(config.months as usize);

    for (month, period) in (1..=config.months).zip(periods) {
        let record = step_month(&mut state, &assumptions, config, month, period);
        projections.push(record);
    }

    tracing::debug!(
        count = projections.len(),
        final_cash = state.current_cash,
        "projection complete"
    );
    Ok(projections)
}

/// Run a projection with default fiscal-year and interest settings
pub fn project(
    assumptions: &AssumptionSet,
    months: u32,
    start_date: Option<Date>,
    scenario: ScenarioType,
) -> Result<Vec<MonthlyProjection>> {
    let config = ProjectionConfig {
        months,
        start_date,
        scenario,
        ..Default::default()
    };
    run_projection(assumptions, &config)
}

/// Simulate one month and advance the running state
fn step_month(
    state: &mut ProjectionState,
    assumptions: &AssumptionSet,
    config: &ProjectionConfig,
    month: u32,
    (date_start, date_end): (Date, Date),
) -> MonthlyProjection {
    let fiscal_year = fiscal_year(date_start, config.fiscal_year_start_month);

    // Income statement
    let revenue =
        assumptions.revenue_start() * (1.0 + assumptions.revenue_growth_rate()).powi(month as i32 - 1);
    let cogs = revenue * assumptions.cogs_percent();
    let gross_profit = revenue - cogs;
    let operating_expenses =
        assumptions.opex_fixed() + revenue * assumptions.opex_variable_percent();
    let ebitda = gross_profit - operating_expenses;

    let depreciation = state.depreciation(assumptions, month);
    let ebit = ebitda - depreciation;
    let interest_expense = state.interest(config);
    let ebt = ebit - interest_expense;
    // Losses carry no tax credit
    let tax = (ebt * assumptions.tax_rate()).max(0.0);
    let net_income = ebt - tax;

    // Financing and investment
    let events = MonthEvents::collect(assumptions, month);
    if !events.is_empty() {
        tracing::debug!(
            month,
            equity = events.equity_raised,
            debt = events.debt_raised,
            capex = events.capex,
            "scheduled events"
        );
    }
    state.apply_events(&events);

    // Cash waterfall
    let opening_cash = state.current_cash;
    let working_capital_change = 0.0;
    let interest_paid = interest_expense;
    let tax_paid = tax;

    let closing_cash = opening_cash
        + ebitda
        + working_capital_change
        + events.equity_raised
        + events.debt_raised
        - interest_paid
        - tax_paid
        - events.capex;
    let cash_flow_movement = closing_cash - opening_cash;
    let free_cash_flow =
        ebitda + working_capital_change - events.capex - interest_paid - tax_paid;

    state.current_cash = closing_cash;

    let burn_rate = if free_cash_flow < 0.0 {
        -free_cash_flow
    } else {
        0.0
    };
    let cash_runway_months = if burn_rate > 0.0 {
        closing_cash / burn_rate
    } else {
        RUNWAY_SENTINEL
    };

    MonthlyProjection {
        month,
        date_start,
        date_end,
        fiscal_year: fiscal_year.to_string(),
        revenue,
        cogs,
        gross_profit,
        operating_expenses,
        ebitda,
        depreciation,
        ebit,
        interest_expense,
        ebt,
        tax,
        net_income,
        opening_cash,
        ebitda_cash: ebitda,
        working_capital_change,
        equity_raised: events.equity_raised,
        debt_raised: events.debt_raised,
        interest_paid,
        tax_paid,
        capex: events.capex,
        closing_cash,
        cash_flow_movement,
        free_cash_flow,
        cash_runway_months,
        burn_rate,
    }
}
