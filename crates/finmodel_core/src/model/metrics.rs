use serde::{Deserialize, Serialize};

/// Summary KPIs reduced from a completed projection
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectionMetrics {
    pub total_revenue: f64,
    pub avg_monthly_revenue: f64,
    /// Compound annual growth rate between the first and last month
    pub revenue_cagr: f64,
    pub total_ebitda: f64,
    pub avg_monthly_ebitda: f64,
    /// 1-indexed month of the first positive EBITDA. Serialized as `-1`
    /// when the horizon never reaches profitability.
    #[serde(with = "profitability_month")]
    pub months_to_profitability: Option<u32>,
    pub final_cash_balance: f64,
    pub min_cash_balance: f64,
    pub months_cash_negative: u32,
    pub total_equity_needed: f64,
    pub total_debt_raised: f64,
    pub total_capex: f64,
}

impl ProjectionMetrics {
    /// `months_to_profitability` with the `-1` "never" marker used in tables
    #[must_use]
    pub fn months_to_profitability_or_sentinel(&self) -> i64 {
        self.months_to_profitability.map_or(-1, i64::from)
    }
}

mod profitability_month {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Option<u32>, s: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(month) => s.serialize_i64(i64::from(*month)),
            None => s.serialize_i64(-1),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<u32>, D::Error> {
        let raw = i64::deserialize(d)?;
        Ok(u32::try_from(raw).ok().filter(|m| *m >= 1))
    }
}
