//! Pure valuation-metric derivation. No I/O: everything here is a
//! deterministic function of the fetched payloads and an as-of date.

mod model;

pub use model::{MetricsStatus, ValuationMetrics};

use crate::listed::ListingInfo;
use crate::prices::DailyQuote;
use crate::statements::FinancialStatement;
use chrono::{Days, NaiveDate};

/// A quote older than this relative to the as-of date is too stale to price
/// against. Covers the longest exchange holiday gaps (year-end/new-year).
pub const QUOTE_TOLERANCE_DAYS: u64 = 14;

/// Derive valuation metrics for one security from its three fetched payloads.
///
/// Price selection takes the most recent quote with a close at or before
/// `as_of`, within [`QUOTE_TOLERANCE_DAYS`]. Statement selection takes the
/// statement most recently disclosed at or before `as_of` (ties broken by
/// later period end); statements disclosed after `as_of` are never used.
///
/// Each ratio requires a strictly positive denominator. A zero or negative
/// EPS/BVPS makes the ratio economically meaningless, so the field stays
/// absent rather than carrying a negative or infinite value. Ratios are
/// rounded to 2 decimal places; unrounded values are not retained.
pub fn compute(
    code: &str,
    listing: Option<&ListingInfo>,
    quotes: &[DailyQuote],
    statements: &[FinancialStatement],
    as_of: NaiveDate,
) -> ValuationMetrics {
    let oldest_usable = as_of
        .checked_sub_days(Days::new(QUOTE_TOLERANCE_DAYS))
        .unwrap_or(NaiveDate::MIN);

    let latest_quote = quotes
        .iter()
        .filter(|q| q.close.is_some() && q.date <= as_of && q.date >= oldest_usable)
        .max_by_key(|q| q.date);

    let statement = statements
        .iter()
        .filter(|s| s.disclosed_date.is_some_and(|d| d <= as_of))
        .max_by_key(|s| (s.disclosed_date, s.period_end));

    let close = latest_quote.and_then(|q| q.close);

    let per = ratio(close, statement.and_then(|s| s.eps));
    let per_forecast = ratio(close, statement.and_then(|s| s.eps_forecast));
    let pbr = ratio(close, statement.and_then(|s| s.book_value_per_share));

    // Forecast PER is forward-looking; a row counts as Ok only when at least
    // one ratio derived from actual figures came through.
    let status = if close.is_some() && (per.is_some() || pbr.is_some()) {
        MetricsStatus::Ok
    } else {
        MetricsStatus::PartialData
    };

    ValuationMetrics {
        code: code.to_string(),
        company_name: listing.map(|l| l.company_name.clone()),
        close,
        price_date: latest_quote.map(|q| q.date),
        per,
        per_forecast,
        pbr,
        statement_period: statement.and_then(|s| s.period_end),
        status,
    }
}

/// `numerator / denominator` rounded to 2 decimals, only when both are
/// present and the denominator is strictly positive.
fn ratio(numerator: Option<f64>, denominator: Option<f64>) -> Option<f64> {
    let n = numerator?;
    let d = denominator?;
    if d > 0.0 { Some(round2(n / d)) } else { None }
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
