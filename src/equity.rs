use crate::core::{JqClient, JqError};
use crate::listed::{self, ListingInfo};
use crate::prices::{self, DailyQuote};
use crate::statements::{self, FinancialStatement};
use crate::valuation::{self, ValuationMetrics};
use chrono::{Days, NaiveDate};

/// A high-level interface for a single security code.
///
/// An `Equity` is created with a [`JqClient`] and a code, and provides
/// per-concern fetch methods plus a one-shot [`Equity::valuation`] that
/// fetches all three payloads and derives the metrics row.
///
/// # Example
///
/// ```no_run
/// # use jquants_rs::{Equity, JqClient};
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = JqClient::builder().refresh_token("...").build()?;
/// let equity = Equity::new(&client, "1301");
///
/// let row = equity
///     .valuation(chrono::NaiveDate::from_ymd_opt(2024, 12, 30).unwrap())
///     .await?;
/// println!("PER = {:?}, PBR = {:?}", row.per, row.pbr);
/// # Ok(())
/// # }
/// ```
pub struct Equity {
    client: JqClient,
    code: String,
}

impl Equity {
    /// Creates a new `Equity` for a given security code.
    pub fn new(client: &JqClient, code: impl Into<String>) -> Self {
        Self {
            client: client.clone(),
            code: code.into(),
        }
    }

    /// The security code this handle wraps.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Fetches listing info. `None` when the provider has no listing.
    ///
    /// # Errors
    ///
    /// Fails on authentication, rate-limit exhaustion, or transport problems.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(code = %self.code)))]
    pub async fn info(&self) -> Result<Option<ListingInfo>, JqError> {
        listed::info(&self.client, &self.code).await
    }

    /// Fetches daily quotes over `[from, to]`.
    ///
    /// # Errors
    ///
    /// Fails on authentication, rate-limit exhaustion, or transport problems.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(code = %self.code)))]
    pub async fn daily_quotes(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<DailyQuote>, JqError> {
        prices::daily_quotes(&self.client, &self.code, from, to).await
    }

    /// Fetches all disclosed financial statements.
    ///
    /// # Errors
    ///
    /// Fails on authentication, rate-limit exhaustion, or transport problems.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(code = %self.code)))]
    pub async fn statements(&self) -> Result<Vec<FinancialStatement>, JqError> {
        statements::statements(&self.client, &self.code).await
    }

    /// Fetches listing info, a month of quotes ending at `as_of`, and
    /// statements, then derives the valuation metrics row.
    ///
    /// # Errors
    ///
    /// Fails on authentication, rate-limit exhaustion, or transport problems.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(code = %self.code)))]
    pub async fn valuation(&self, as_of: NaiveDate) -> Result<ValuationMetrics, JqError> {
        let from = as_of.checked_sub_days(Days::new(31)).unwrap_or(NaiveDate::MIN);
        let listing = self.info().await?;
        let quotes = self.daily_quotes(from, as_of).await?;
        let stmts = self.statements().await?;
        Ok(valuation::compute(
            &self.code,
            listing.as_ref(),
            &quotes,
            &stmts,
            as_of,
        ))
    }
}
