use serde::{Deserialize, Serialize};

/// Monthly records rolled up into one fiscal year
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FiscalYearSummary {
    pub fiscal_year: String,
    /// Number of projected months falling in this fiscal year
    pub months: u32,
    pub revenue: f64,
    pub gross_profit: f64,
    pub ebitda: f64,
    pub net_income: f64,
    pub capex: f64,
    pub equity_raised: f64,
    pub debt_raised: f64,
    /// Opening cash of the first projected month in the year
    pub opening_cash: f64,
    /// Closing cash of the last projected month in the year
    pub closing_cash: f64,
}

impl FiscalYearSummary {
    #[must_use]
    pub fn gross_margin(&self) -> f64 {
        if self.revenue > 0.0 {
            self.gross_profit / self.revenue
        } else {
            0.0
        }
    }

    /// True when the year covers fewer than twelve projected months
    #[must_use]
    pub fn is_partial(&self) -> bool {
        self.months < 12
    }
}
