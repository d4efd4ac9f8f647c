mod annual;
mod assumptions;
mod metrics;
mod projection;
mod scenario;

pub use annual::FiscalYearSummary;
pub use assumptions::{AssumptionSet, CapexEvent, FundingEvent, ModelAssumptions, validate};
pub(crate) use assumptions::{check_fraction, check_non_negative};
pub use metrics::ProjectionMetrics;
pub use projection::{MonthlyProjection, RUNWAY_SENTINEL};
pub use scenario::{ScenarioAdjustment, ScenarioType};
