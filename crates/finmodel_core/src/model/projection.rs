use jiff::civil::Date;
use serde::{Deserialize, Serialize};

/// Runway reported for a month that is not burning cash.
///
/// A marker for "infinite runway", not a real month count.
pub const RUNWAY_SENTINEL: f64 = 999.0;

/// One simulated month of income statement and cash flow
///
/// Records are flat (no nested structures) and every record has the same
/// fields, so a slice of them is directly a table. Field order matches
/// [`MonthlyProjection::COLUMNS`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyProjection {
    pub month: u32,
    pub date_start: Date,
    pub date_end: Date,
    pub fiscal_year: String,

    // Income statement
    pub revenue: f64,
    pub cogs: f64,
    pub gross_profit: f64,
    pub operating_expenses: f64,
    pub ebitda: f64,
    pub depreciation: f64,
    pub ebit: f64,
    pub interest_expense: f64,
    pub ebt: f64,
    pub tax: f64,
    pub net_income: f64,

    // Cash flow
    pub opening_cash: f64,
    pub ebitda_cash: f64,
    pub working_capital_change: f64,
    pub equity_raised: f64,
    pub debt_raised: f64,
    pub interest_paid: f64,
    pub tax_paid: f64,
    pub capex: f64,
    pub closing_cash: f64,
    pub cash_flow_movement: f64,
    pub free_cash_flow: f64,

    // Metrics
    pub cash_runway_months: f64,
    pub burn_rate: f64,
}

impl MonthlyProjection {
    /// Column names in record order
    pub const COLUMNS: [&'static str; 28] = [
        "month",
        "date_start",
        "date_end",
        "fiscal_year",
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
        "cash_runway_months",
        "burn_rate",
    ];

    /// True when the month is not consuming cash
    #[must_use]
    pub fn has_infinite_runway(&self) -> bool {
        self.burn_rate <= 0.0
    }

    #[must_use]
    pub fn is_profitable(&self) -> bool {
        self.ebitda > 0.0
    }
}
