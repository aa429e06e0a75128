use chrono::NaiveDate;
use serde::Serialize;

/// One disclosed periodic financial statement.
///
/// Every figure is optional: interim disclosures routinely omit per-share
/// values, and absence is a normal state, not an error.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FinancialStatement {
    /// Security code, as reported by the provider.
    pub code: String,
    /// Date the statement was made public. Distinct from the period it covers.
    pub disclosed_date: Option<NaiveDate>,
    /// End date of the fiscal period the statement covers.
    pub period_end: Option<NaiveDate>,
    /// Document type reported by the provider (e.g. full-year vs. quarterly).
    pub type_of_document: Option<String>,
    /// Actual earnings per share for the period.
    pub eps: Option<f64>,
    /// Forecast earnings per share for the next period.
    pub eps_forecast: Option<f64>,
    /// Book value per share.
    pub book_value_per_share: Option<f64>,
}
