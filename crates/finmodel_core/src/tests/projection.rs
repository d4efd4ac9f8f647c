//! Tests for the monthly recurrence

use jiff::civil::date;

use super::{assert_close, config, reference_assumptions};
use crate::config::{AssumptionsBuilder, ProjectionConfig};
use crate::error::ValidationError;
use crate::model::{RUNWAY_SENTINEL, ScenarioType};
use crate::projection::{project, run_projection};

#[test]
fn test_reference_company_first_months() {
    let months = run_projection(&reference_assumptions(), &config(12)).unwrap();
    assert_eq!(months.len(), 12);

    let m1 = &months[0];
    assert_eq!(m1.month, 1);
    assert_close(m1.revenue, 100_000.0);
    assert_close(m1.cogs, 30_000.0);
    assert_close(m1.gross_profit, 70_000.0);
    assert_close(m1.operating_expenses, 70_000.0);
    assert_close(m1.ebitda, 0.0);
    assert_close(m1.depreciation, 0.0);
    assert_close(m1.ebit, 0.0);
    assert_close(m1.tax, 0.0);
    assert_close(m1.net_income, 0.0);
    assert_close(m1.closing_cash, 100_000.0);
    assert_close(m1.cash_flow_movement, 0.0);

    let m2 = &months[1];
    assert_close(m2.revenue, 115_000.0);
    assert_close(m2.gross_profit, 80_500.0);
    assert_close(m2.operating_expenses, 73_000.0);
    assert_close(m2.ebitda, 7_500.0);
    assert_close(m2.tax, 2_100.0);
    assert_close(m2.net_income, 5_400.0);
    assert_close(m2.opening_cash, 100_000.0);
    assert_close(m2.closing_cash, 105_400.0);

    let m3 = &months[2];
    assert_close(m3.revenue, 132_250.0);
    assert_close(m3.opening_cash, m2.closing_cash);
}

#[test]
fn test_cash_conservation_and_identities() {
    let assumptions = AssumptionsBuilder::new()
        .equity_raise(2, 250_000.0)
        .debt_raise(4, 120_000.0)
        .capex(3, 60_000.0, "Servers")
        .build()
        .unwrap();
    let months = run_projection(&assumptions, &config(24)).unwrap();

    assert_close(months[0].opening_cash, assumptions.starting_cash());
    for pair in months.windows(2) {
        assert_eq!(pair[1].opening_cash, pair[0].closing_cash);
    }

    for m in &months {
        assert_close(m.gross_profit, m.revenue - m.cogs);
        assert_close(m.ebitda, m.gross_profit - m.operating_expenses);
        assert_close(m.ebit, m.ebitda - m.depreciation);
        assert_close(m.ebt, m.ebit - m.interest_expense);
        assert_close(m.net_income, m.ebt - m.tax);
        assert!(m.tax >= 0.0);
        assert_close(m.interest_paid, m.interest_expense);
        assert_close(m.tax_paid, m.tax);
        assert_close(m.ebitda_cash, m.ebitda);
        assert_close(m.working_capital_change, 0.0);
        assert_close(
            m.closing_cash,
            m.opening_cash + m.ebitda + m.working_capital_change + m.equity_raised + m.debt_raised
                - m.interest_paid
                - m.tax_paid
                - m.capex,
        );
        assert_close(m.cash_flow_movement, m.closing_cash - m.opening_cash);
        assert_close(
            m.free_cash_flow,
            m.ebitda + m.working_capital_change - m.capex - m.interest_paid - m.tax_paid,
        );
        assert!(m.burn_rate >= 0.0);
    }
}

#[test]
fn test_revenue_monotonic_with_positive_growth() {
    let months = run_projection(&reference_assumptions(), &config(36)).unwrap();
    for pair in months.windows(2) {
        assert!(pair[1].revenue > pair[0].revenue);
    }
}

#[test]
fn test_zero_growth_is_flat() {
    let assumptions = AssumptionsBuilder::new()
        .revenue(80_000.0)
        .growth(0.0)
        .build()
        .unwrap();
    let months = run_projection(&assumptions, &config(12)).unwrap();
    assert!(months.iter().all(|m| m.revenue == 80_000.0));
}

#[test]
fn test_debt_interest_starts_the_month_after_the_raise() {
    let assumptions = AssumptionsBuilder::new()
        .debt_raise_at(3, 120_000.0, 0.12)
        .build()
        .unwrap();
    let months = run_projection(&assumptions, &config(12)).unwrap();

    assert_close(months[1].interest_expense, 0.0);
    assert_close(months[2].interest_expense, 0.0);
    assert_close(months[2].debt_raised, 120_000.0);
    // Charged at the configured 8%, not the event's own 12%
    assert_close(months[3].interest_expense, 800.0);
    assert_close(months[11].interest_expense, 800.0);
}

#[test]
fn test_configured_interest_rate() {
    let assumptions = AssumptionsBuilder::new()
        .debt_raise(1, 60_000.0)
        .build()
        .unwrap();
    let months = run_projection(&assumptions, &config(12).debt_interest_rate(0.12)).unwrap();
    assert_close(months[0].interest_expense, 0.0);
    assert_close(months[1].interest_expense, 600.0);
}

#[test]
fn test_depreciation_lags_capex() {
    let assumptions = AssumptionsBuilder::new()
        .depreciation_rate(0.12)
        .capex(1, 50_000.0, "Fit-out")
        .capex(3, 100_000.0, "Equipment")
        .build()
        .unwrap();
    let months = run_projection(&assumptions, &config(12)).unwrap();

    assert_close(months[0].depreciation, 0.0);
    assert_close(months[0].capex, 50_000.0);
    assert_close(months[1].depreciation, 500.0);
    assert_close(months[2].depreciation, 500.0);
    assert_close(months[3].depreciation, 1_500.0);
}

#[test]
fn test_losses_are_not_taxed() {
    let assumptions = AssumptionsBuilder::new()
        .revenue(10_000.0)
        .growth(0.0)
        .build()
        .unwrap();
    let months = run_projection(&assumptions, &config(12)).unwrap();
    for m in &months {
        assert!(m.ebt < 0.0);
        assert_eq!(m.tax, 0.0);
        assert_close(m.net_income, m.ebt);
    }
}

#[test]
fn test_runway_sentinel_and_burn() {
    // Month 1 breaks even, later months are profitable
    let months = run_projection(&reference_assumptions(), &config(12)).unwrap();
    assert!(months.iter().all(|m| m.cash_runway_months == RUNWAY_SENTINEL));
    assert!(months.iter().all(|m| m.has_infinite_runway()));

    let burning = AssumptionsBuilder::new()
        .revenue(10_000.0)
        .growth(0.0)
        .opex(50_000.0, 0.0)
        .build()
        .unwrap();
    let months = run_projection(&burning, &config(12)).unwrap();
    let m1 = &months[0];
    // 10k revenue - 3k COGS - 50k opex
    assert_close(m1.burn_rate, 43_000.0);
    assert_close(m1.cash_runway_months, m1.closing_cash / 43_000.0);
    assert!(months.last().unwrap().closing_cash < 0.0);
    assert!(months.last().unwrap().cash_runway_months < 0.0);
}

#[test]
fn test_dates_and_fiscal_years() {
    let cfg = ProjectionConfig::new().months(12).start(2025, 7, 1);
    let months = run_projection(&reference_assumptions(), &cfg).unwrap();

    assert_eq!(months[0].date_start, date(2025, 7, 1));
    assert_eq!(months[0].date_end, date(2025, 7, 31));
    assert_eq!(months[0].fiscal_year, "2024");
    assert_eq!(months[1].date_start, date(2025, 8, 1));
    assert_eq!(months[1].fiscal_year, "2025");
    assert_eq!(months[7].date_start, date(2026, 2, 1));
    assert_eq!(months[7].date_end, date(2026, 2, 28));
    assert_eq!(months[7].fiscal_year, "2025");
    assert_eq!(months[11].date_end, date(2026, 6, 30));
}

#[test]
fn test_calendar_fiscal_year() {
    let cfg = config(12).fiscal_year_start_month(1);
    let months = run_projection(&reference_assumptions(), &cfg).unwrap();
    assert!(months.iter().all(|m| m.fiscal_year == "2025"));
}

#[test]
fn test_default_start_is_first_of_next_month() {
    let months = project(&reference_assumptions(), 12, None, ScenarioType::Base).unwrap();
    let start = months[0].date_start;
    assert_eq!(start.day(), 1);
    assert_eq!(start, crate::config::default_start_date());
}

#[test]
fn test_horizon_bounds() {
    let assumptions = reference_assumptions();
    for months in [0, 11, 61] {
        let err = run_projection(&assumptions, &config(months)).unwrap_err();
        assert!(matches!(err, ValidationError::HorizonOutOfRange { .. }));
    }
    assert_eq!(run_projection(&assumptions, &config(60)).unwrap().len(), 60);
}

#[test]
fn test_horizon_past_calendar_end_is_rejected() {
    let assumptions = reference_assumptions();
    let cfg = ProjectionConfig::new().months(12).start(9999, 6, 1);
    let err = run_projection(&assumptions, &cfg).unwrap_err();
    assert_eq!(
        err,
        ValidationError::StartDateOutOfRange {
            start: date(9999, 6, 1),
            months: 12,
        }
    );
    assert_eq!(err.field(), "start_date");

    // The last month that still closes inside the calendar
    let cfg = ProjectionConfig::new().months(12).start(9998, 12, 1);
    let months = run_projection(&assumptions, &cfg).unwrap();
    assert_eq!(months[11].date_end, date(9999, 11, 30));
}

#[test]
fn test_projection_is_deterministic() {
    let assumptions = reference_assumptions();
    let cfg = config(36).scenario(ScenarioType::Worst);
    let a = run_projection(&assumptions, &cfg).unwrap();
    let b = run_projection(&assumptions, &cfg).unwrap();
    assert_eq!(a, b);
}
