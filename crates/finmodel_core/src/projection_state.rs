use crate::config::ProjectionConfig;
use crate::model::AssumptionSet;

/// Running balances carried from one month to the next
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionState {
    /// Cash at the start of the month about to be simulated
    pub current_cash: f64,
    /// Outstanding debt; this month's raise only accrues interest next month
    pub current_debt: f64,
    /// All capex booked so far, the depreciable base
    pub cumulative_capex: f64,
}

/// Financing and investment amounts landing in one month
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MonthEvents {
    pub equity_raised: f64,
    pub debt_raised: f64,
    pub capex: f64,
}

impl MonthEvents {
    pub fn collect(assumptions: &AssumptionSet, month: u32) -> Self {
        Self {
            equity_raised: assumptions.equity_in_month(month),
            debt_raised: assumptions.debt_in_month(month),
            capex: assumptions.capex_in_month(month),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.equity_raised == 0.0 && self.debt_raised == 0.0 && self.capex == 0.0
    }
}

impl ProjectionState {
    pub fn from_assumptions(assumptions: &AssumptionSet) -> Self {
        Self {
            current_cash: assumptions.starting_cash(),
            current_debt: 0.0,
            cumulative_capex: 0.0,
        }
    }

    /// Depreciation charged in `month`, based on capex booked before it
    pub fn depreciation(&self, assumptions: &AssumptionSet, month: u32) -> f64 {
        if month > 1 {
            self.cumulative_capex * (assumptions.depreciation_rate() / 12.0)
        } else {
            0.0
        }
    }

    /// Interest on debt outstanding at the start of the month
    pub fn interest(&self, config: &ProjectionConfig) -> f64 {
        if self.current_debt > 0.0 {
            self.current_debt * (config.debt_interest_rate / 12.0)
        } else {
            0.0
        }
    }

    /// Book the month's debt and capex so they take effect from next month
    pub fn apply_events(&mut self, events: &MonthEvents) {
        if events.debt_raised > 0.0 {
            self.current_debt += events.debt_raised;
        }
        if events.capex > 0.0 {
            self.cumulative_capex += events.capex;
        }
    }
}
