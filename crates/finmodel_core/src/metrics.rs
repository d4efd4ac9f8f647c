//! Summary metrics reduced from a completed projection
//!
//! Everything here is a pure fold over the monthly records; nothing reruns
//! the engine.

use crate::model::{MonthlyProjection, ProjectionMetrics};

/// Reduce a projection to its headline KPIs
///
/// Returns `None` for an empty slice.
#[must_use]
pub fn aggregate_metrics(projections: &[MonthlyProjection]) -> Option<ProjectionMetrics> {
    let first = projections.first()?;
    let last = projections.last()?;
    let count = projections.len() as f64;

    let total_revenue: f64 = projections.iter().map(|p| p.revenue).sum();
    let total_ebitda: f64 = projections.iter().map(|p| p.ebitda).sum();
    let min_cash_balance = projections
        .iter()
        .map(|p| p.closing_cash)
        .fold(f64::INFINITY, f64::min);

    Some(ProjectionMetrics {
        total_revenue,
        avg_monthly_revenue: total_revenue / count,
        revenue_cagr: cagr(first.revenue, last.revenue, count / 12.0),
        total_ebitda,
        avg_monthly_ebitda: total_ebitda / count,
        months_to_profitability: months_to_profitability(projections),
        final_cash_balance: last.closing_cash,
        min_cash_balance,
        months_cash_negative: projections.iter().filter(|p| p.closing_cash < 0.0).count() as u32,
        total_equity_needed: projections.iter().map(|p| p.equity_raised).sum(),
        total_debt_raised: projections.iter().map(|p| p.debt_raised).sum(),
        total_capex: projections.iter().map(|p| p.capex).sum(),
    })
}

/// Compound annual growth rate
///
/// Returns 0.0 when the start value or the period is not positive, or the end
/// value is negative, where the root is undefined.
#[must_use]
pub fn cagr(start_value: f64, end_value: f64, years: f64) -> f64 {
    if start_value <= 0.0 || years <= 0.0 || end_value < 0.0 {
        return 0.0;
    }
    (end_value / start_value).powf(1.0 / years) - 1.0
}

/// 1-indexed month of the first strictly positive EBITDA
#[must_use]
pub fn months_to_profitability(projections: &[MonthlyProjection]) -> Option<u32> {
    projections
        .iter()
        .position(MonthlyProjection::is_profitable)
        .map(|i| i as u32 + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cagr_guards() {
        assert_eq!(cagr(0.0, 100.0, 1.0), 0.0);
        assert_eq!(cagr(-5.0, 100.0, 1.0), 0.0);
        assert_eq!(cagr(100.0, 200.0, 0.0), 0.0);
        assert_eq!(cagr(100.0, -3.0, 1.0), 0.0);
    }

    #[test]
    fn test_cagr_doubling_in_one_year() {
        assert!((cagr(100.0, 200.0, 1.0) - 1.0).abs() < 1e-12);
        assert!((cagr(100.0, 400.0, 2.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(aggregate_metrics(&[]), None);
        assert_eq!(months_to_profitability(&[]), None);
    }
}
