use serde::Deserialize;

/* ---------------- Serde mapping (only what we need) ---------------- */
/*
 * The statements endpoint serves every numeric field as a string, blank
 * (or "-") when the figure was not disclosed for that period.
 */

#[derive(Deserialize)]
pub(crate) struct StatementsEnvelope {
    pub(crate) statements: Option<Vec<StatementNode>>,
}

#[derive(Deserialize)]
pub(crate) struct StatementNode {
    #[serde(rename = "LocalCode")]
    pub(crate) local_code: Option<String>,
    #[serde(rename = "DisclosedDate")]
    pub(crate) disclosed_date: Option<String>,
    #[serde(rename = "CurrentPeriodEndDate")]
    pub(crate) current_period_end_date: Option<String>,
    #[serde(rename = "TypeOfDocument")]
    pub(crate) type_of_document: Option<String>,
    #[serde(rename = "EarningsPerShare")]
    pub(crate) earnings_per_share: Option<String>,
    #[serde(rename = "ForecastEarningsPerShare")]
    pub(crate) forecast_earnings_per_share: Option<String>,
    #[serde(rename = "BookValuePerShare")]
    pub(crate) book_value_per_share: Option<String>,
}

/// Parse a provider numeric-as-string field. Blank and "-" mean undisclosed.
pub(crate) fn parse_num(s: Option<&str>) -> Option<f64> {
    let s = s?.trim();
    if s.is_empty() || s == "-" {
        return None;
    }
    s.parse::<f64>().ok()
}
