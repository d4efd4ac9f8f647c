//! Assumptions Builder
//!
//! Fluent construction of an `AssumptionSet`. Every setter stores the raw
//! value; nothing is checked until `build`, which runs the same validation as
//! [`crate::model::validate`].
//!
//! # Example
//!
//! ```ignore
//! use finmodel_core::config::AssumptionsBuilder;
//!
//! let assumptions = AssumptionsBuilder::new()
//!     .revenue(250_000.0)
//!     .growth(0.08)
//!     .cogs(0.35)
//!     .opex(120_000.0, 0.15)
//!     .starting_cash(1_500_000.0)
//!     .equity_raise(1, 2_000_000.0)
//!     .debt_raise(12, 500_000.0)
//!     .capex(9, 200_000.0, "Warehouse fit-out")
//!     .tax_rate(0.25)
//!     .build()?;
//! ```

use crate::error::Result;
use crate::model::{
    AssumptionSet, CapexEvent, FundingEvent, ModelAssumptions, validate,
};

/// Builder for assumption sets, starting from the payload defaults
#[derive(Debug, Clone, Default)]
pub struct AssumptionsBuilder {
    assumptions: ModelAssumptions,
}

impl AssumptionsBuilder {
    /// Create a new builder seeded with `ModelAssumptions::default()`
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Continue building from an existing payload
    #[must_use]
    pub fn from_assumptions(assumptions: ModelAssumptions) -> Self {
        Self { assumptions }
    }

    // =========================================================================
    // Revenue and costs
    // =========================================================================

    /// Revenue of the first projected month
    #[must_use]
    pub fn revenue(mut self, revenue_start: f64) -> Self {
        self.assumptions.revenue_start = revenue_start;
        self
    }

    /// Monthly compounding growth rate
    #[must_use]
    pub fn growth(mut self, rate: f64) -> Self {
        self.assumptions.revenue_growth_rate = rate;
        self
    }

    #[must_use]
    pub fn cogs(mut self, percent: f64) -> Self {
        self.assumptions.cogs_percent = percent;
        self
    }

    /// Fixed monthly opex plus the share of revenue spent as variable opex
    #[must_use]
    pub fn opex(mut self, fixed: f64, variable_percent: f64) -> Self {
        self.assumptions.opex_fixed = fixed;
        self.assumptions.opex_variable_percent = variable_percent;
        self
    }

    #[must_use]
    pub fn tax_rate(mut self, rate: f64) -> Self {
        self.assumptions.tax_rate = rate;
        self
    }

    /// Annual depreciation rate on accumulated capex
    #[must_use]
    pub fn depreciation_rate(mut self, rate: f64) -> Self {
        self.assumptions.depreciation_rate = rate;
        self
    }

    #[must_use]
    pub fn starting_cash(mut self, cash: f64) -> Self {
        self.assumptions.starting_cash = cash;
        self
    }

    /// Receivable, payable and inventory days
    #[must_use]
    pub fn working_capital_days(mut self, receivables: u32, payables: u32, inventory: u32) -> Self {
        self.assumptions.days_receivables = receivables;
        self.assumptions.days_payables = payables;
        self.assumptions.days_inventory = inventory;
        self
    }

    // =========================================================================
    // Schedules
    // =========================================================================

    #[must_use]
    pub fn equity_raise(mut self, month: u32, amount: f64) -> Self {
        self.assumptions
            .equity_raises
            .push(FundingEvent::new(month, amount));
        self
    }

    #[must_use]
    pub fn debt_raise(mut self, month: u32, amount: f64) -> Self {
        self.assumptions
            .debt_raises
            .push(FundingEvent::new(month, amount));
        self
    }

    /// Debt raise carrying its own contractual rate
    #[must_use]
    pub fn debt_raise_at(mut self, month: u32, amount: f64, rate: f64) -> Self {
        self.assumptions
            .debt_raises
            .push(FundingEvent::new(month, amount).with_rate(rate));
        self
    }

    #[must_use]
    pub fn capex(mut self, month: u32, amount: f64, description: impl Into<String>) -> Self {
        self.assumptions
            .capex_schedule
            .push(CapexEvent::new(month, amount).described(description));
        self
    }

    // =========================================================================
    // Build
    // =========================================================================

    /// The payload as assembled so far, unvalidated
    #[must_use]
    pub fn payload(&self) -> &ModelAssumptions {
        &self.assumptions
    }

    /// Validate and freeze the assumptions
    pub fn build(self) -> Result<AssumptionSet> {
        validate(self.assumptions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_collects_schedules() {
        let set = AssumptionsBuilder::new()
            .equity_raise(6, 500_000.0)
            .equity_raise(6, 250_000.0)
            .debt_raise_at(9, 100_000.0, 0.12)
            .capex(3, 100_000.0, "Equipment")
            .build()
            .unwrap();

        assert_eq!(set.equity_raises().len(), 2);
        assert_eq!(set.equity_in_month(6), 750_000.0);
        assert_eq!(set.debt_raises()[0].rate, Some(0.12));
        assert_eq!(
            set.capex_schedule()[0].description.as_deref(),
            Some("Equipment")
        );
    }

    #[test]
    fn test_builder_validates_on_build() {
        let err = AssumptionsBuilder::new()
            .opex(50_000.0, 1.3)
            .build()
            .unwrap_err();
        assert_eq!(err.field(), "opex_variable_percent");
    }
}
