//! Flat tabular export of projections
//!
//! Projections are already column-homogeneous records, so exporting is a
//! matter of picking columns. The full table goes out as CSV or JSON; the
//! three sheet views ("Cash Flow", "Income Statement", "Key Metrics") select
//! fixed column subsets for spreadsheet-style renderers.

use std::fmt;
use std::io;

use jiff::civil::Date;

use crate::model::{MonthlyProjection, ProjectionMetrics};

/// A single table cell
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Int(i64),
    Number(f64),
    Date(Date),
    Text(String),
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Int(v) => write!(f, "{v}"),
            Cell::Number(v) => write!(f, "{v:.2}"),
            Cell::Date(d) => write!(f, "{d}"),
            Cell::Text(s) => f.write_str(s),
        }
    }
}

impl MonthlyProjection {
    /// Value of a named column, `None` for an unknown column
    #[must_use]
    pub fn cell(&self, column: &str) -> Option<Cell> {
        let number = match column {
            "month" => return Some(Cell::Int(i64::from(self.month))),
            "date_start" => return Some(Cell::Date(self.date_start)),
            "date_end" => return Some(Cell::Date(self.date_end)),
            "fiscal_year" => return Some(Cell::Text(self.fiscal_year.clone())),
            "revenue" => self.revenue,
            "cogs" => self.cogs,
            "gross_profit" => self.gross_profit,
            "operating_expenses" => self.operating_expenses,
            "ebitda" => self.ebitda,
            "depreciation" => self.depreciation,
            "ebit" => self.ebit,
            "interest_expense" => self.interest_expense,
            "ebt" => self.ebt,
            "tax" => self.tax,
            "net_income" => self.net_income,
            "opening_cash" => self.opening_cash,
            "ebitda_cash" => self.ebitda_cash,
            "working_capital_change" => self.working_capital_change,
            "equity_raised" => self.equity_raised,
            "debt_raised" => self.debt_raised,
            "interest_paid" => self.interest_paid,
            "tax_paid" => self.tax_paid,
            "capex" => self.capex,
            "closing_cash" => self.closing_cash,
            "cash_flow_movement" => self.cash_flow_movement,
            "free_cash_flow" => self.free_cash_flow,
            "cash_runway_months" => self.cash_runway_months,
            "burn_rate" => self.burn_rate,
            _ => return None,
        };
        Some(Cell::Number(number))
    }
}

const IDENTITY_COLUMNS: [&str; 4] = ["month", "date_start", "date_end", "fiscal_year"];

/// Standard sheet layouts for spreadsheet exports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sheet {
    CashFlow,
    IncomeStatement,
    KeyMetrics,
}

impl Sheet {
    pub const ALL: [Sheet; 3] = [Sheet::CashFlow, Sheet::IncomeStatement, Sheet::KeyMetrics];

    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Sheet::CashFlow => "Cash Flow",
            Sheet::IncomeStatement => "Income Statement",
            Sheet::KeyMetrics => "Key Metrics",
        }
    }

    /// File stem used when a sheet is written on its own
    #[must_use]
    pub fn file_stem(&self) -> &'static str {
        match self {
            Sheet::CashFlow => "cash_flow",
            Sheet::IncomeStatement => "income_statement",
            Sheet::KeyMetrics => "key_metrics",
        }
    }

    /// Monthly columns shown on the sheet
    #[must_use]
    pub fn columns(&self) -> Vec<&'static str> {
        let body: &[&str] = match self {
            Sheet::CashFlow => &[
                "opening_cash",
                "ebitda_cash",
                "working_capital_change",
                "equity_raised",
                "debt_raised",
                "interest_paid",
                "tax_paid",
                "capex",
                "closing_cash",
                "cash_flow_movement",
                "free_cash_flow",
            ],
            Sheet::IncomeStatement => &[
                "revenue",
                "cogs",
                "gross_profit",
                "operating_expenses",
                "ebitda",
                "depreciation",
                "ebit",
                "interest_expense",
                "ebt",
                "tax",
                "net_income",
            ],
            Sheet::KeyMetrics => &[
                "closing_cash",
                "free_cash_flow",
                "burn_rate",
                "cash_runway_months",
            ],
        };
        IDENTITY_COLUMNS.iter().chain(body).copied().collect()
    }
}

/// A rendered sheet: header plus one row of cells per month
#[derive(Debug, Clone, PartialEq)]
pub struct SheetTable {
    pub name: &'static str,
    pub header: Vec<&'static str>,
    pub rows: Vec<Vec<Cell>>,
}

impl SheetTable {
    /// Write the sheet as CSV
    pub fn write_csv<W: io::Write>(&self, writer: W) -> Result<(), csv::Error> {
        let mut wtr = csv::Writer::from_writer(writer);
        wtr.write_record(&self.header)?;
        for row in &self.rows {
            wtr.write_record(row.iter().map(ToString::to_string))?;
        }
        wtr.flush()?;
        Ok(())
    }
}

/// Select a sheet's columns from the projection
#[must_use]
pub fn sheet_table(sheet: Sheet, projections: &[MonthlyProjection]) -> SheetTable {
    let header = sheet.columns();
    let rows = projections
        .iter()
        .map(|p| header.iter().filter_map(|column| p.cell(column)).collect())
        .collect();
    SheetTable {
        name: sheet.name(),
        header,
        rows,
    }
}

/// Headline metrics as label/value pairs for the summary block of the
/// "Key Metrics" sheet
#[must_use]
pub fn metrics_rows(metrics: &ProjectionMetrics) -> Vec<(&'static str, Cell)> {
    vec![
        ("Total Revenue", Cell::Number(metrics.total_revenue)),
        ("Avg Monthly Revenue", Cell::Number(metrics.avg_monthly_revenue)),
        ("Revenue CAGR", Cell::Number(metrics.revenue_cagr)),
        ("Total EBITDA", Cell::Number(metrics.total_ebitda)),
        ("Avg Monthly EBITDA", Cell::Number(metrics.avg_monthly_ebitda)),
        (
            "Months to Profitability",
            Cell::Int(metrics.months_to_profitability_or_sentinel()),
        ),
        ("Final Cash Balance", Cell::Number(metrics.final_cash_balance)),
        ("Min Cash Balance", Cell::Number(metrics.min_cash_balance)),
        (
            "Months Cash Negative",
            Cell::Int(i64::from(metrics.months_cash_negative)),
        ),
        ("Total Equity Needed", Cell::Number(metrics.total_equity_needed)),
        ("Total Debt Raised", Cell::Number(metrics.total_debt_raised)),
        ("Total Capex", Cell::Number(metrics.total_capex)),
    ]
}

/// Write every column of every month as CSV, header first
pub fn write_csv<W: io::Write>(
    projections: &[MonthlyProjection],
    writer: W,
) -> Result<(), csv::Error> {
    let mut wtr = csv::Writer::from_writer(writer);
    if projections.is_empty() {
        wtr.write_record(MonthlyProjection::COLUMNS)?;
    }
    for projection in projections {
        wtr.serialize(projection)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Projections as a JSON array of flat objects
pub fn to_json(projections: &[MonthlyProjection]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(projections)
}
