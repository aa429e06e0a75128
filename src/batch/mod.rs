use crate::core::{JqClient, JqError};
use crate::valuation::{self, ValuationMetrics};
use crate::{listed, prices, statements};
use chrono::{Days, NaiveDate, Utc};

const DEFAULT_QUOTE_WINDOW_DAYS: u64 = 31;

/// A builder for deriving valuation metrics over a list of security codes.
///
/// Codes are processed strictly sequentially, one fully before the next: the
/// provider imposes a per-account rate budget shared across all endpoints, so
/// fanning out across codes would not finish any sooner and would complicate
/// backoff accounting.
///
/// The output has exactly one row per input code, in input order, duplicates
/// included. A fetch failure for one code is recorded as a `Failed` row and
/// processing continues; only an authentication failure aborts the run.
pub struct BatchBuilder {
    client: JqClient,
    codes: Vec<String>,
    as_of: Option<NaiveDate>,
    quote_window_days: u64,
}

impl BatchBuilder {
    /// Creates a new `BatchBuilder`.
    #[must_use]
    pub fn new(client: &JqClient) -> Self {
        Self {
            client: client.clone(),
            codes: Vec::new(),
            as_of: None,
            quote_window_days: DEFAULT_QUOTE_WINDOW_DAYS,
        }
    }

    /// Replaces the current list of security codes with a new list.
    #[must_use]
    pub fn codes<I, S>(mut self, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.codes = codes.into_iter().map(Into::into).collect();
        self
    }

    /// Adds a single security code to the list.
    #[must_use]
    pub fn add_code(mut self, code: impl Into<String>) -> Self {
        self.codes.push(code.into());
        self
    }

    /// Sets the as-of date for price and statement selection.
    /// Default: today (UTC).
    #[must_use]
    pub const fn as_of(mut self, date: NaiveDate) -> Self {
        self.as_of = Some(date);
        self
    }

    /// Sets how many calendar days before the as-of date the daily-quote
    /// request window starts. Default: 31.
    #[must_use]
    pub const fn quote_window_days(mut self, days: u64) -> Self {
        self.quote_window_days = days;
        self
    }

    /// Runs the batch: for each code, fetch listing info, daily quotes, and
    /// statements (three requests, in that order), then derive metrics.
    ///
    /// # Errors
    ///
    /// Returns an error only on [`JqError::Auth`]; every other failure is
    /// absorbed into a `Failed` row for the code it occurred on.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(codes = self.codes.len())))]
    pub async fn run(self) -> Result<Vec<ValuationMetrics>, JqError> {
        let as_of = self.as_of.unwrap_or_else(|| Utc::now().date_naive());
        let from = as_of
            .checked_sub_days(Days::new(self.quote_window_days))
            .unwrap_or(NaiveDate::MIN);

        let mut rows = Vec::with_capacity(self.codes.len());
        for code in &self.codes {
            match fetch_one(&self.client, code, from, as_of).await {
                Ok(row) => rows.push(row),
                Err(e) if e.is_fatal() => return Err(e),
                Err(_e) => {
                    #[cfg(feature = "tracing")]
                    tracing::warn!(code = %code, error = %_e, "fetch failed; recording Failed row");
                    rows.push(ValuationMetrics::failed(code.clone()));
                }
            }
        }
        Ok(rows)
    }
}

async fn fetch_one(
    client: &JqClient,
    code: &str,
    from: NaiveDate,
    as_of: NaiveDate,
) -> Result<ValuationMetrics, JqError> {
    let listing = listed::info(client, code).await?;
    let quotes = prices::daily_quotes(client, code, from, as_of).await?;
    let stmts = statements::statements(client, code).await?;
    Ok(valuation::compute(
        code,
        listing.as_ref(),
        &quotes,
        &stmts,
        as_of,
    ))
}
