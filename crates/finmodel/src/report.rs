//! Report tables for the terminal

use comfy_table::presets::ASCII_MARKDOWN;
use comfy_table::{CellAlignment, Table};
use finmodel_core::export::{Cell, metrics_rows};
use finmodel_core::{FiscalYearSummary, MonthlyProjection, ProjectionMetrics, ScenarioSummary};

use crate::util::format::{
    format_compact_currency, format_currency, format_currency_short, format_month,
    format_percentage, format_runway,
};

/// Markdown-style table whose label column is left-aligned and every other
/// column right-aligned
fn table(header: &[&str]) -> Table {
    let mut table = Table::new();
    table.load_preset(ASCII_MARKDOWN).set_header(header.to_vec());
    for column in table.column_iter_mut().skip(1) {
        column.set_cell_alignment(CellAlignment::Right);
    }
    table
}

fn render(table: &Table) -> String {
    format!("{table}\n")
}

/// Month-by-month summary of a projection
pub fn projection_table(projections: &[MonthlyProjection]) -> String {
    let mut table = table(&[
        "Month",
        "Start",
        "FY",
        "Revenue",
        "EBITDA",
        "Net Income",
        "Closing Cash",
        "Burn",
        "Runway",
    ]);
    for p in projections {
        table.add_row(vec![
            p.month.to_string(),
            p.date_start.to_string(),
            p.fiscal_year.clone(),
            format_currency_short(p.revenue),
            format_currency_short(p.ebitda),
            format_currency_short(p.net_income),
            format_currency_short(p.closing_cash),
            format_currency_short(p.burn_rate),
            format_runway((!p.has_infinite_runway()).then_some(p.cash_runway_months)),
        ]);
    }
    render(&table)
}

/// Headline KPIs as a two-column block
pub fn metrics_summary(metrics: &ProjectionMetrics) -> String {
    let mut table = table(&["Metric", "Value"]);
    for (label, cell) in metrics_rows(metrics) {
        let value = match (label, cell) {
            ("Revenue CAGR", Cell::Number(v)) => format_percentage(v),
            ("Months to Profitability", _) => format_month(metrics.months_to_profitability),
            (_, Cell::Number(v)) => format_currency(v),
            (_, other) => other.to_string(),
        };
        table.add_row(vec![label.to_string(), value]);
    }
    render(&table)
}

/// One line per fiscal year
pub fn annual_table(years: &[FiscalYearSummary]) -> String {
    let mut table = table(&[
        "Fiscal Year",
        "Months",
        "Revenue",
        "Gross Margin",
        "EBITDA",
        "Net Income",
        "Capex",
        "Closing Cash",
    ]);
    for year in years {
        let label = if year.is_partial() {
            format!("FY{} (partial)", year.fiscal_year)
        } else {
            format!("FY{}", year.fiscal_year)
        };
        table.add_row(vec![
            label,
            year.months.to_string(),
            format_compact_currency(year.revenue),
            format_percentage(year.gross_margin()),
            format_compact_currency(year.ebitda),
            format_compact_currency(year.net_income),
            format_compact_currency(year.capex),
            format_compact_currency(year.closing_cash),
        ]);
    }
    render(&table)
}

/// Quick best/base/worst comparison
pub fn comparison_table(rows: &[ScenarioSummary]) -> String {
    let mut table = table(&[
        "Scenario",
        "Total Revenue",
        "Final Cash",
        "Profitable From",
    ]);
    for row in rows {
        table.add_row(vec![
            row.scenario.label().to_string(),
            format_currency_short(row.total_revenue),
            format_currency_short(row.final_cash),
            format_month(row.months_to_profitability),
        ]);
    }
    render(&table)
}
