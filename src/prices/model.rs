use chrono::NaiveDate;
use serde::Serialize;

/// End-of-day quote for one security on one trading date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyQuote {
    /// Security code, as reported by the provider.
    pub code: String,
    /// Trading date.
    pub date: NaiveDate,
    /// Closing price; `None` on days with no trades.
    pub close: Option<f64>,
    /// Traded volume, when reported.
    pub volume: Option<f64>,
}
