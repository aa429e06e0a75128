use serde::Deserialize;

/* ---------------- Serde mapping (only what we need) ---------------- */

#[derive(Deserialize)]
pub(crate) struct DailyQuotesEnvelope {
    pub(crate) daily_quotes: Option<Vec<DailyQuoteNode>>,
}

#[derive(Deserialize)]
pub(crate) struct DailyQuoteNode {
    #[serde(rename = "Date")]
    pub(crate) date: Option<String>,
    #[serde(rename = "Code")]
    pub(crate) code: Option<String>,
    /// Null on days the security did not trade.
    #[serde(rename = "Close")]
    pub(crate) close: Option<f64>,
    #[serde(rename = "Volume")]
    pub(crate) volume: Option<f64>,
}
