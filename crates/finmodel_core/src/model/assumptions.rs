//! Business assumptions driving a projection
//!
//! `ModelAssumptions` is the loosely-checked payload produced by manual input
//! or an upstream extractor. `validate` turns it into an `AssumptionSet`,
//! which is the only form the engine accepts and which cannot be mutated
//! once built.

use serde::{Deserialize, Serialize};

use crate::error::{Result, ValidationError};

fn default_revenue_start() -> f64 {
    100_000.0
}

fn default_revenue_growth_rate() -> f64 {
    0.15
}

fn default_cogs_percent() -> f64 {
    0.30
}

fn default_opex_fixed() -> f64 {
    50_000.0
}

fn default_opex_variable_percent() -> f64 {
    0.20
}

fn default_days_receivables() -> u32 {
    30
}

fn default_days_payables() -> u32 {
    45
}

fn default_tax_rate() -> f64 {
    0.28
}

fn default_depreciation_rate() -> f64 {
    0.10
}

fn default_starting_cash() -> f64 {
    100_000.0
}

/// An equity or debt injection landing in a given simulation month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FundingEvent {
    /// 1-indexed simulation month
    pub month: u32,
    pub amount: f64,
    /// Contractual rate for debt. Accepted and validated, but interest is
    /// charged at `ProjectionConfig::debt_interest_rate`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate: Option<f64>,
}

impl FundingEvent {
    #[must_use]
    pub fn new(month: u32, amount: f64) -> Self {
        Self {
            month,
            amount,
            rate: None,
        }
    }

    #[must_use]
    pub fn with_rate(mut self, rate: f64) -> Self {
        self.rate = Some(rate);
        self
    }
}

/// A capital expenditure booked in a given simulation month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapexEvent {
    /// 1-indexed simulation month
    pub month: u32,
    pub amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl CapexEvent {
    #[must_use]
    pub fn new(month: u32, amount: f64) -> Self {
        Self {
            month,
            amount,
            description: None,
        }
    }

    #[must_use]
    pub fn described(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Raw assumptions payload
///
/// All monetary values share one base currency and every rate is a decimal
/// fraction (0.15 = 15%). Omitted fields take the defaults below, so a
/// partial YAML or JSON document is a valid payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelAssumptions {
    // === Revenue ===
    #[serde(default = "default_revenue_start")]
    pub revenue_start: f64,
    /// Monthly compounding growth rate, may be negative
    #[serde(default = "default_revenue_growth_rate")]
    pub revenue_growth_rate: f64,

    // === Costs ===
    #[serde(default = "default_cogs_percent")]
    pub cogs_percent: f64,
    /// Fixed operating expenses per month
    #[serde(default = "default_opex_fixed")]
    pub opex_fixed: f64,
    #[serde(default = "default_opex_variable_percent")]
    pub opex_variable_percent: f64,

    // === Working capital (carried, not yet modelled) ===
    #[serde(default = "default_days_receivables")]
    pub days_receivables: u32,
    #[serde(default = "default_days_payables")]
    pub days_payables: u32,
    #[serde(default)]
    pub days_inventory: u32,

    // === Funding and investment ===
    #[serde(default)]
    pub equity_raises: Vec<FundingEvent>,
    #[serde(default)]
    pub debt_raises: Vec<FundingEvent>,
    #[serde(default)]
    pub capex_schedule: Vec<CapexEvent>,

    // === Other ===
    #[serde(default = "default_tax_rate")]
    pub tax_rate: f64,
    /// Annual rate, applied monthly as `/ 12`
    #[serde(default = "default_depreciation_rate")]
    pub depreciation_rate: f64,
    #[serde(default = "default_starting_cash")]
    pub starting_cash: f64,
}

impl Default for ModelAssumptions {
    fn default() -> Self {
        Self {
            revenue_start: default_revenue_start(),
            revenue_growth_rate: default_revenue_growth_rate(),
            cogs_percent: default_cogs_percent(),
            opex_fixed: default_opex_fixed(),
            opex_variable_percent: default_opex_variable_percent(),
            days_receivables: default_days_receivables(),
            days_payables: default_days_payables(),
            days_inventory: 0,
            equity_raises: Vec::new(),
            debt_raises: Vec::new(),
            capex_schedule: Vec::new(),
            tax_rate: default_tax_rate(),
            depreciation_rate: default_depreciation_rate(),
            starting_cash: default_starting_cash(),
        }
    }
}

/// Validated, immutable assumptions
///
/// Only obtainable through [`validate`] (or the builder and scenario
/// adjuster, which both go through it). Fields are read through accessors.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct AssumptionSet {
    inner: ModelAssumptions,
}

impl AssumptionSet {
    #[must_use]
    pub fn revenue_start(&self) -> f64 {
        self.inner.revenue_start
    }

    #[must_use]
    pub fn revenue_growth_rate(&self) -> f64 {
        self.inner.revenue_growth_rate
    }

    #[must_use]
    pub fn cogs_percent(&self) -> f64 {
        self.inner.cogs_percent
    }

    #[must_use]
    pub fn opex_fixed(&self) -> f64 {
        self.inner.opex_fixed
    }

    #[must_use]
    pub fn opex_variable_percent(&self) -> f64 {
        self.inner.opex_variable_percent
    }

    #[must_use]
    pub fn days_receivables(&self) -> u32 {
        self.inner.days_receivables
    }

    #[must_use]
    pub fn days_payables(&self) -> u32 {
        self.inner.days_payables
    }

    #[must_use]
    pub fn days_inventory(&self) -> u32 {
        self.inner.days_inventory
    }

    #[must_use]
    pub fn equity_raises(&self) -> &[FundingEvent] {
        &self.inner.equity_raises
    }

    #[must_use]
    pub fn debt_raises(&self) -> &[FundingEvent] {
        &self.inner.debt_raises
    }

    #[must_use]
    pub fn capex_schedule(&self) -> &[CapexEvent] {
        &self.inner.capex_schedule
    }

    #[must_use]
    pub fn tax_rate(&self) -> f64 {
        self.inner.tax_rate
    }

    #[must_use]
    pub fn depreciation_rate(&self) -> f64 {
        self.inner.depreciation_rate
    }

    #[must_use]
    pub fn starting_cash(&self) -> f64 {
        self.inner.starting_cash
    }

    /// Borrow the underlying payload
    #[must_use]
    pub fn as_payload(&self) -> &ModelAssumptions {
        &self.inner
    }

    /// Give back the payload, e.g. to edit it and validate again
    #[must_use]
    pub fn into_payload(self) -> ModelAssumptions {
        self.inner
    }

    /// Total equity raised in `month` (events in the same month are summed)
    #[must_use]
    pub fn equity_in_month(&self, month: u32) -> f64 {
        sum_funding(&self.inner.equity_raises, month)
    }

    /// Total debt raised in `month`
    #[must_use]
    pub fn debt_in_month(&self, month: u32) -> f64 {
        sum_funding(&self.inner.debt_raises, month)
    }

    /// Total capex booked in `month`
    #[must_use]
    pub fn capex_in_month(&self, month: u32) -> f64 {
        self.inner
            .capex_schedule
            .iter()
            .filter(|c| c.month == month)
            .map(|c| c.amount)
            .sum()
    }
}

fn sum_funding(events: &[FundingEvent], month: u32) -> f64 {
    events
        .iter()
        .filter(|e| e.month == month)
        .map(|e| e.amount)
        .sum()
}

impl TryFrom<ModelAssumptions> for AssumptionSet {
    type Error = ValidationError;

    fn try_from(value: ModelAssumptions) -> Result<Self> {
        validate(value)
    }
}

/// Validate a payload and freeze it into an `AssumptionSet`
///
/// Fails on the first violated constraint. Pure: the same payload always
/// produces the same outcome.
pub fn validate(assumptions: ModelAssumptions) -> Result<AssumptionSet> {
    let a = &assumptions;

    check_positive("revenue_start", a.revenue_start)?;
    check_finite("revenue_growth_rate", a.revenue_growth_rate)?;

    check_fraction("cogs_percent", a.cogs_percent)?;
    check_non_negative("opex_fixed", a.opex_fixed)?;
    check_fraction("opex_variable_percent", a.opex_variable_percent)?;
    check_fraction("tax_rate", a.tax_rate)?;
    check_non_negative("depreciation_rate", a.depreciation_rate)?;
    check_non_negative("starting_cash", a.starting_cash)?;

    check_funding("equity_raises", &a.equity_raises)?;
    check_funding("debt_raises", &a.debt_raises)?;
    for (i, capex) in a.capex_schedule.iter().enumerate() {
        check_month(&format!("capex_schedule[{i}].month"), capex.month)?;
        check_non_negative(&format!("capex_schedule[{i}].amount"), capex.amount)?;
    }

    Ok(AssumptionSet { inner: assumptions })
}

fn check_finite(field: &str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::NotFinite {
            field: field.to_string(),
        })
    }
}

pub(crate) fn check_fraction(field: &str, value: f64) -> Result<()> {
    check_finite(field, value)?;
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::OutOfRange {
            field: field.to_string(),
            value,
            min: 0.0,
            max: 1.0,
        })
    }
}

pub(crate) fn check_non_negative(field: &str, value: f64) -> Result<()> {
    check_finite(field, value)?;
    if value < 0.0 {
        return Err(ValidationError::Negative {
            field: field.to_string(),
            value,
        });
    }
    Ok(())
}

fn check_positive(field: &str, value: f64) -> Result<()> {
    check_finite(field, value)?;
    if value <= 0.0 {
        return Err(ValidationError::NotPositive {
            field: field.to_string(),
            value,
        });
    }
    Ok(())
}

fn check_month(field: &str, month: u32) -> Result<()> {
    if month < 1 {
        return Err(ValidationError::InvalidScheduleMonth {
            field: field.to_string(),
            month,
        });
    }
    Ok(())
}

fn check_funding(name: &str, events: &[FundingEvent]) -> Result<()> {
    for (i, event) in events.iter().enumerate() {
        check_month(&format!("{name}[{i}].month"), event.month)?;
        check_non_negative(&format!("{name}[{i}].amount"), event.amount)?;
        if let Some(rate) = event.rate {
            check_non_negative(&format!("{name}[{i}].rate"), rate)?;
        }
    }
    Ok(())
}
