use std::fmt;

use jiff::civil::Date;

/// Errors raised while validating assumptions or projection settings.
///
/// Every variant carries enough context for a caller to report the offending
/// field and the violated constraint. Nothing in the engine clamps an
/// out-of-range input silently.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// A bounded field (percentages, growth) fell outside its inclusive range
    OutOfRange {
        field: String,
        value: f64,
        min: f64,
        max: f64,
    },
    /// A monetary amount or rate that must be non-negative was negative
    Negative { field: String, value: f64 },
    /// A field that must be strictly positive was zero or negative
    NotPositive { field: String, value: f64 },
    /// NaN or infinity
    NotFinite { field: String },
    /// A funding or capex entry targeted a month before the first simulated month
    InvalidScheduleMonth { field: String, month: u32 },
    /// The requested projection horizon is outside the supported range
    HorizonOutOfRange { months: u32, min: u32, max: u32 },
    /// A scenario name that does not map to a known `ScenarioType`
    UnknownScenario(String),
    /// Fiscal year start month must be a calendar month (1..=12)
    InvalidFiscalMonth(i8),
    /// The horizon would run past the last representable calendar date
    StartDateOutOfRange { start: Date, months: u32 },
}

impl ValidationError {
    /// Name of the field that failed validation
    #[must_use]
    pub fn field(&self) -> &str {
        match self {
            ValidationError::OutOfRange { field, .. }
            | ValidationError::Negative { field, .. }
            | ValidationError::NotPositive { field, .. }
            | ValidationError::NotFinite { field }
            | ValidationError::InvalidScheduleMonth { field, .. } => field,
            ValidationError::HorizonOutOfRange { .. } => "months",
            ValidationError::UnknownScenario(_) => "scenario",
            ValidationError::InvalidFiscalMonth(_) => "fiscal_year_start_month",
            ValidationError::StartDateOutOfRange { .. } => "start_date",
        }
    }

    /// Human-readable description of the violated constraint
    #[must_use]
    pub fn constraint(&self) -> String {
        match self {
            ValidationError::OutOfRange { min, max, .. } => {
                format!("must be between {min} and {max}")
            }
            ValidationError::Negative { .. } => "must not be negative".to_string(),
            ValidationError::NotPositive { .. } => "must be greater than zero".to_string(),
            ValidationError::NotFinite { .. } => "must be a finite number".to_string(),
            ValidationError::InvalidScheduleMonth { .. } => "month must be at least 1".to_string(),
            ValidationError::HorizonOutOfRange { min, max, .. } => {
                format!("must be between {min} and {max} months")
            }
            ValidationError::UnknownScenario(_) => {
                "must be one of base, best, worst, custom".to_string()
            }
            ValidationError::InvalidFiscalMonth(_) => "must be between 1 and 12".to_string(),
            ValidationError::StartDateOutOfRange { .. } => {
                format!("every month must end on or before {}", Date::MAX)
            }
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::OutOfRange { field, value, .. }
            | ValidationError::Negative { field, value }
            | ValidationError::NotPositive { field, value } => {
                write!(f, "invalid {field} ({value}): {}", self.constraint())
            }
            ValidationError::NotFinite { field } => {
                write!(f, "invalid {field}: {}", self.constraint())
            }
            ValidationError::InvalidScheduleMonth { field, month } => {
                write!(f, "invalid {field} ({month}): {}", self.constraint())
            }
            ValidationError::HorizonOutOfRange { months, .. } => {
                write!(f, "invalid projection horizon ({months}): {}", self.constraint())
            }
            ValidationError::UnknownScenario(name) => {
                write!(f, "unknown scenario {name:?}: {}", self.constraint())
            }
            ValidationError::InvalidFiscalMonth(month) => {
                write!(f, "invalid fiscal_year_start_month ({month}): {}", self.constraint())
            }
            ValidationError::StartDateOutOfRange { start, months } => {
                write!(
                    f,
                    "invalid start_date ({start}) for a {months}-month projection: {}",
                    self.constraint()
                )
            }
        }
    }
}

impl std::error::Error for ValidationError {}

pub type Result<T> = std::result::Result<T, ValidationError>;
