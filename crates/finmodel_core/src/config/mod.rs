//! Projection configuration
//!
//! `ProjectionConfig` holds the run settings that are not business
//! assumptions: horizon, calendar anchor, scenario and the two constants the
//! recurrence needs (fiscal year start and flat debt rate).
//!
//! # Builder DSL
//!
//! Assumptions can be assembled fluently instead of filling a
//! `ModelAssumptions` by hand:
//!
//! ```ignore
//! use finmodel_core::config::{AssumptionsBuilder, ProjectionConfig};
//!
//! let assumptions = AssumptionsBuilder::new()
//!     .revenue(100_000.0)
//!     .growth(0.15)
//!     .cogs(0.30)
//!     .opex(50_000.0, 0.20)
//!     .equity_raise(6, 500_000.0)
//!     .capex(3, 100_000.0, "Equipment")
//!     .build()?;
//!
//! let config = ProjectionConfig::new().months(36).start(2025, 1, 1);
//! ```

use jiff::civil::Date;
use jiff::ToSpan;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ValidationError};
use crate::model::{ScenarioType, check_non_negative};

pub mod builder;

pub use builder::AssumptionsBuilder;

/// Shortest supported projection horizon (inclusive)
pub const MIN_HORIZON_MONTHS: u32 = 12;
/// Longest supported projection horizon (inclusive)
pub const MAX_HORIZON_MONTHS: u32 = 60;

fn default_months() -> u32 {
    36
}

fn default_fiscal_year_start_month() -> i8 {
    8
}

fn default_debt_interest_rate() -> f64 {
    0.08
}

/// Settings for a single projection run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionConfig {
    /// Number of months to project, within
    /// [`MIN_HORIZON_MONTHS`]..=[`MAX_HORIZON_MONTHS`]
    #[serde(default = "default_months")]
    pub months: u32,

    /// First day of month 1. `None` means the first day of next month.
    #[serde(default)]
    pub start_date: Option<Date>,

    #[serde(default)]
    pub scenario: ScenarioType,

    /// Calendar month (1-12) in which a fiscal year begins
    #[serde(default = "default_fiscal_year_start_month")]
    pub fiscal_year_start_month: i8,

    /// Flat annual rate charged on outstanding debt
    #[serde(default = "default_debt_interest_rate")]
    pub debt_interest_rate: f64,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            months: default_months(),
            start_date: None,
            scenario: ScenarioType::Base,
            fiscal_year_start_month: default_fiscal_year_start_month(),
            debt_interest_rate: default_debt_interest_rate(),
        }
    }
}

impl ProjectionConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn months(mut self, months: u32) -> Self {
        self.months = months;
        self
    }

    #[must_use]
    pub fn start_date(mut self, date: Date) -> Self {
        self.start_date = Some(date);
        self
    }

    /// Set the start date (convenience method)
    #[must_use]
    pub fn start(mut self, year: i16, month: i8, day: i8) -> Self {
        self.start_date = Some(jiff::civil::date(year, month, day));
        self
    }

    #[must_use]
    pub fn scenario(mut self, scenario: ScenarioType) -> Self {
        self.scenario = scenario;
        self
    }

    #[must_use]
    pub fn fiscal_year_start_month(mut self, month: i8) -> Self {
        self.fiscal_year_start_month = month;
        self
    }

    #[must_use]
    pub fn debt_interest_rate(mut self, rate: f64) -> Self {
        self.debt_interest_rate = rate;
        self
    }

    /// Create a variant running a different scenario
    #[must_use]
    pub fn with_scenario(&self, scenario: ScenarioType) -> Self {
        let mut config = self.clone();
        config.scenario = scenario;
        config
    }

    /// Check every setting before a run starts
    pub fn validate(&self) -> Result<()> {
        if !(MIN_HORIZON_MONTHS..=MAX_HORIZON_MONTHS).contains(&self.months) {
            return Err(ValidationError::HorizonOutOfRange {
                months: self.months,
                min: MIN_HORIZON_MONTHS,
                max: MAX_HORIZON_MONTHS,
            });
        }
        if !(1..=12).contains(&self.fiscal_year_start_month) {
            return Err(ValidationError::InvalidFiscalMonth(
                self.fiscal_year_start_month,
            ));
        }
        check_non_negative("debt_interest_rate", self.debt_interest_rate)
    }

    /// Start date, falling back to the first day of next month
    #[must_use]
    pub fn resolved_start_date(&self) -> Date {
        self.start_date.unwrap_or_else(default_start_date)
    }
}

/// First day of the month after today
#[must_use]
pub fn default_start_date() -> Date {
    jiff::Zoned::now()
        .date()
        .first_of_month()
        .saturating_add(1.month())
}
