//! Assumption inference from historical figures
//!
//! Turns historical revenue and COGS series (as pulled out of uploaded
//! financial statements) into starting values for growth and margin. Only
//! the arithmetic lives here; reading documents is someone else's job.

use serde::{Deserialize, Serialize};

use crate::model::ModelAssumptions;

/// Growth assumed when revenue history exists but no period is usable
pub const FALLBACK_GROWTH_RATE: f64 = 0.10;
/// Gross margin assumed when COGS history exists but no period is usable
pub const FALLBACK_GROSS_MARGIN: f64 = 0.70;

/// Historical series, oldest period first
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HistoricalFinancials {
    #[serde(default)]
    pub revenue: Vec<f64>,
    #[serde(default)]
    pub cogs: Vec<f64>,
}

/// Values inferred from history; `None` where the history says nothing
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct InferredAssumptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revenue_growth_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gross_margin: Option<f64>,
}

impl InferredAssumptions {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.revenue_growth_rate.is_none() && self.gross_margin.is_none()
    }

    /// Overlay the inferred values onto a payload
    ///
    /// Gross margin becomes `cogs_percent = 1 - margin`. The result is still
    /// unvalidated: a history with negative margins yields a COGS share above
    /// 100%, which `validate` will reject.
    #[must_use]
    pub fn apply(&self, mut assumptions: ModelAssumptions) -> ModelAssumptions {
        if let Some(growth) = self.revenue_growth_rate {
            assumptions.revenue_growth_rate = growth;
        }
        if let Some(margin) = self.gross_margin {
            assumptions.cogs_percent = 1.0 - margin;
        }
        assumptions
    }
}

/// Infer growth and gross margin from historical series
#[must_use]
pub fn infer_assumptions(history: &HistoricalFinancials) -> InferredAssumptions {
    let revenue_growth_rate = (history.revenue.len() > 1).then(|| {
        let rates: Vec<f64> = history
            .revenue
            .windows(2)
            .filter(|w| w[0] != 0.0)
            .map(|w| (w[1] - w[0]) / w[0])
            .collect();
        mean(&rates).unwrap_or(FALLBACK_GROWTH_RATE)
    });

    let gross_margin = (!history.revenue.is_empty() && !history.cogs.is_empty()).then(|| {
        let margins: Vec<f64> = history
            .revenue
            .iter()
            .zip(&history.cogs)
            .filter(|(revenue, _)| **revenue != 0.0)
            .map(|(revenue, cogs)| (revenue - cogs) / revenue)
            .collect();
        mean(&margins).unwrap_or(FALLBACK_GROSS_MARGIN)
    });

    let inferred = InferredAssumptions {
        revenue_growth_rate,
        gross_margin,
    };
    tracing::debug!(?inferred, "inferred assumptions from history");
    inferred
}

fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    #[test]
    fn test_growth_is_mean_of_period_rates() {
        let history = HistoricalFinancials {
            revenue: vec![100.0, 110.0, 132.0],
            cogs: vec![],
        };
        let inferred = infer_assumptions(&history);
        // 10% then 20%
        assert!(close(inferred.revenue_growth_rate.unwrap(), 0.15));
        assert_eq!(inferred.gross_margin, None);
    }

    #[test]
    fn test_zero_periods_skipped() {
        let history = HistoricalFinancials {
            revenue: vec![0.0, 50.0, 100.0],
            cogs: vec![],
        };
        // 0 -> 50 is skipped, 50 -> 100 is +100%
        assert!(close(
            infer_assumptions(&history).revenue_growth_rate.unwrap(),
            1.0
        ));
    }

    #[test]
    fn test_fallbacks() {
        let history = HistoricalFinancials {
            revenue: vec![0.0, 0.0],
            cogs: vec![10.0, 10.0],
        };
        let inferred = infer_assumptions(&history);
        assert_eq!(inferred.revenue_growth_rate, Some(FALLBACK_GROWTH_RATE));
        assert_eq!(inferred.gross_margin, Some(FALLBACK_GROSS_MARGIN));
    }

    #[test]
    fn test_single_point_has_no_growth() {
        let history = HistoricalFinancials {
            revenue: vec![1000.0],
            cogs: vec![400.0],
        };
        let inferred = infer_assumptions(&history);
        assert_eq!(inferred.revenue_growth_rate, None);
        assert!(close(inferred.gross_margin.unwrap(), 0.6));
    }

    #[test]
    fn test_apply_sets_cogs_from_margin() {
        let inferred = InferredAssumptions {
            revenue_growth_rate: Some(0.05),
            gross_margin: Some(0.65),
        };
        let payload = inferred.apply(ModelAssumptions::default());
        assert!(close(payload.revenue_growth_rate, 0.05));
        assert!(close(payload.cogs_percent, 0.35));
        assert_eq!(payload.opex_fixed, ModelAssumptions::default().opex_fixed);
    }

    #[test]
    fn test_empty_history() {
        let inferred = infer_assumptions(&HistoricalFinancials::default());
        assert!(inferred.is_empty());
        assert_eq!(
            inferred.apply(ModelAssumptions::default()),
            ModelAssumptions::default()
        );
    }
}
