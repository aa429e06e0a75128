mod model;
mod wire;

pub use model::DailyQuote;

use crate::core::{JqClient, JqError, net};
use chrono::NaiveDate;
use wire::DailyQuotesEnvelope;

/// Fetch daily quotes for one security over `[from, to]` via
/// `/prices/daily_quotes`.
///
/// The provider returns quotes in ascending date order; rows without a
/// parseable date are dropped. An empty result is a normal outcome
/// (delisted code, no trading days in range) and yields an empty vec.
///
/// # Errors
///
/// Fails on authentication, rate-limit exhaustion, or transport problems.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(client), err))]
pub async fn daily_quotes(
    client: &JqClient,
    code: &str,
    from: NaiveDate,
    to: NaiveDate,
) -> Result<Vec<DailyQuote>, JqError> {
    let mut url = client.base_url().join("prices/daily_quotes")?;
    url.query_pairs_mut()
        .append_pair("code", code)
        .append_pair("from", &from.format("%Y%m%d").to_string())
        .append_pair("to", &to.format("%Y%m%d").to_string());

    let envelope: Option<DailyQuotesEnvelope> = net::get_json(client, url).await?;

    let nodes = envelope
        .and_then(|e| e.daily_quotes)
        .unwrap_or_default();

    let mut quotes = Vec::with_capacity(nodes.len());
    for node in nodes {
        let Some(date) = node.date.as_deref().and_then(parse_date) else {
            continue;
        };
        quotes.push(DailyQuote {
            code: node.code.unwrap_or_else(|| code.to_string()),
            date,
            close: node.close,
            volume: node.volume,
        });
    }
    Ok(quotes)
}

pub(crate) fn parse_date(s: &str) -> Option<NaiveDate> {
    // The provider uses YYYY-MM-DD; older payloads used YYYYMMDD.
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(s, "%Y%m%d"))
        .ok()
}
