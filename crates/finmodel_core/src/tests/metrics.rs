//! Tests for KPI aggregation

use super::{assert_close, config, reference_assumptions};
use crate::config::AssumptionsBuilder;
use crate::metrics::aggregate_metrics;
use crate::model::MonthlyProjection;
use crate::projection::run_projection;

#[test]
fn test_reference_company_metrics() {
    let months = run_projection(&reference_assumptions(), &config(12)).unwrap();
    let metrics = aggregate_metrics(&months).unwrap();

    let total: f64 = months.iter().map(|m| m.revenue).sum();
    assert_close(metrics.total_revenue, total);
    assert_close(metrics.avg_monthly_revenue, total / 12.0);
    assert_eq!(metrics.months_to_profitability, Some(2));
    assert_close(metrics.final_cash_balance, months[11].closing_cash);
    // Month 1 breaks even, so the lowest balance is the starting cash
    assert_close(metrics.min_cash_balance, 100_000.0);
    assert_eq!(metrics.months_cash_negative, 0);
    // 12 months is one year
    assert_close(
        metrics.revenue_cagr,
        months[11].revenue / months[0].revenue - 1.0,
    );
}

#[test]
fn test_financing_totals() {
    let assumptions = AssumptionsBuilder::new()
        .equity_raise(2, 200_000.0)
        .equity_raise(8, 300_000.0)
        .debt_raise(5, 50_000.0)
        .capex(3, 25_000.0, "Laptops")
        .capex(3, 15_000.0, "Desks")
        .build()
        .unwrap();
    let months = run_projection(&assumptions, &config(24)).unwrap();
    let metrics = aggregate_metrics(&months).unwrap();

    assert_close(metrics.total_equity_needed, 500_000.0);
    assert_close(metrics.total_debt_raised, 50_000.0);
    assert_close(metrics.total_capex, 40_000.0);
}

#[test]
fn test_cash_negative_months() {
    let burning = AssumptionsBuilder::new()
        .revenue(10_000.0)
        .growth(0.0)
        .opex(50_000.0, 0.0)
        .build()
        .unwrap();
    let months = run_projection(&burning, &config(12)).unwrap();
    let metrics = aggregate_metrics(&months).unwrap();

    // 100k less 43k a month goes negative in month 3
    assert_eq!(metrics.months_cash_negative, 10);
    assert_eq!(metrics.months_to_profitability, None);
    assert_eq!(metrics.months_to_profitability_or_sentinel(), -1);
    assert_close(metrics.min_cash_balance, 100_000.0 - 12.0 * 43_000.0);
    assert_close(metrics.revenue_cagr, 0.0);
}

#[test]
fn test_zero_starting_revenue_gives_zero_cagr() {
    let months = run_projection(&reference_assumptions(), &config(24)).unwrap();
    let zeroed: Vec<MonthlyProjection> = months
        .iter()
        .enumerate()
        .map(|(i, p)| MonthlyProjection {
            revenue: if i == 0 { 0.0 } else { p.revenue },
            ..p.clone()
        })
        .collect();
    let metrics = aggregate_metrics(&zeroed).unwrap();
    assert_eq!(metrics.revenue_cagr, 0.0);
    assert!(metrics.revenue_cagr.is_finite());
}

#[test]
fn test_empty_projection_has_no_metrics() {
    assert!(aggregate_metrics(&[]).is_none());
}

#[test]
fn test_metrics_serialize_sentinel() {
    let burning = AssumptionsBuilder::new()
        .revenue(10_000.0)
        .growth(0.0)
        .build()
        .unwrap();
    let months = run_projection(&burning, &config(12)).unwrap();
    let metrics = aggregate_metrics(&months).unwrap();
    let json = serde_json::to_value(metrics).unwrap();
    assert_eq!(json["months_to_profitability"], -1);
}
