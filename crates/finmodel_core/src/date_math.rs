//! Calendar helpers for monthly periods.
//!
//! Month arithmetic goes through jiff's checked `Span` addition, which clamps
//! the day to the end of the target month: a run anchored on Jan 31 produces
//! periods starting Feb 28 (or 29), Mar 31, Apr 30 and so on. Every helper
//! returns `None` once a date would leave jiff's supported range.

use jiff::ToSpan;
use jiff::civil::Date;

/// Add `n` calendar months to a date, clamping the day to the target month.
#[inline]
pub fn add_months(d: Date, n: u32) -> Option<Date> {
    d.checked_add(i64::from(n).months()).ok()
}

/// Start and end (inclusive) of the `month`-th period of a run anchored at
/// `start`. Months are 1-indexed.
///
/// The end is `period start + 1 month - 1 day`.
pub fn month_period(start: Date, month: u32) -> Option<(Date, Date)> {
    let period_start = add_months(start, month.saturating_sub(1))?;
    let period_end = add_months(period_start, 1)?.yesterday().ok()?;
    Some((period_start, period_end))
}

/// Every period of a `months`-long run, or `None` if any of them cannot be
/// represented.
pub fn month_periods(start: Date, months: u32) -> Option<Vec<(Date, Date)>> {
    (1..=months).map(|month| month_period(start, month)).collect()
}

/// Fiscal year label for a date, where fiscal years begin in
/// `fiscal_start_month` and are named after the calendar year they start in.
#[inline]
pub fn fiscal_year(d: Date, fiscal_start_month: i8) -> i16 {
    if d.month() >= fiscal_start_month {
        d.year()
    } else {
        d.year() - 1
    }
}
