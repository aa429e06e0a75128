use chrono::NaiveDate;
use serde::Serialize;

/// How much of a security's metrics row could be produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MetricsStatus {
    /// A price was found and at least one ratio was computed.
    Ok,
    /// Some inputs were found but price or every ratio is missing.
    PartialData,
    /// A fetch stage failed for this code; only `code` is populated.
    Failed,
}

/// Derived valuation metrics for one security.
///
/// Every field except `code` and `status` is individually optional: an
/// absent input yields an absent output field, never a zero or sentinel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValuationMetrics {
    /// Security code, preserved verbatim from the input list.
    pub code: String,
    /// Company name from listing info.
    pub company_name: Option<String>,
    /// Most recent close at or before the as-of date.
    pub close: Option<f64>,
    /// Trading date of `close`.
    pub price_date: Option<NaiveDate>,
    /// Trailing price-to-earnings ratio (`close / eps`), 2 decimals.
    pub per: Option<f64>,
    /// Forecast price-to-earnings ratio (`close / eps_forecast`), 2 decimals.
    pub per_forecast: Option<f64>,
    /// Price-to-book ratio (`close / book_value_per_share`), 2 decimals.
    pub pbr: Option<f64>,
    /// Fiscal period end of the statement the ratios were derived from.
    pub statement_period: Option<NaiveDate>,
    /// Outcome classification for this row.
    pub status: MetricsStatus,
}

impl ValuationMetrics {
    /// Row recorded when a fetch stage failed for `code`: everything absent,
    /// status `Failed`.
    #[must_use]
    pub fn failed(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            company_name: None,
            close: None,
            price_date: None,
            per: None,
            per_forecast: None,
            pbr: None,
            statement_period: None,
            status: MetricsStatus::Failed,
        }
    }
}
