//! Fiscal-year rollups of monthly projections

use crate::model::{FiscalYearSummary, MonthlyProjection};

/// Group consecutive months by `fiscal_year`
///
/// Years appear in the order they first occur. The first and last years of a
/// horizon are usually partial.
#[must_use]
pub fn fiscal_year_summaries(projections: &[MonthlyProjection]) -> Vec<FiscalYearSummary> {
    let mut summaries: Vec<FiscalYearSummary> = Vec::new();

    for p in projections {
        let needs_new = summaries
            .last()
            .is_none_or(|s| s.fiscal_year != p.fiscal_year);
        if needs_new {
            summaries.push(FiscalYearSummary {
                fiscal_year: p.fiscal_year.clone(),
                opening_cash: p.opening_cash,
                ..Default::default()
            });
        }

        if let Some(year) = summaries.last_mut() {
            year.months += 1;
            year.revenue += p.revenue;
            year.gross_profit += p.gross_profit;
            year.ebitda += p.ebitda;
            year.net_income += p.net_income;
            year.capex += p.capex;
            year.equity_raised += p.equity_raised;
            year.debt_raised += p.debt_raised;
            year.closing_cash = p.closing_cash;
        }
    }

    summaries
}
