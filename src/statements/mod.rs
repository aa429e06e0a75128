mod model;
mod wire;

pub use model::FinancialStatement;

use crate::core::{JqClient, JqError, net};
use crate::prices::parse_date;
use wire::{StatementsEnvelope, parse_num};

/// Fetch all disclosed statements for one security via `/fins/statements`.
///
/// A company with no disclosures (or an unknown code) yields an empty vec.
///
/// # Errors
///
/// Fails on authentication, rate-limit exhaustion, or transport problems.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(client), err))]
pub async fn statements(client: &JqClient, code: &str) -> Result<Vec<FinancialStatement>, JqError> {
    let mut url = client.base_url().join("fins/statements")?;
    url.query_pairs_mut().append_pair("code", code);

    let envelope: Option<StatementsEnvelope> = net::get_json(client, url).await?;

    let nodes = envelope.and_then(|e| e.statements).unwrap_or_default();

    Ok(nodes
        .into_iter()
        .map(|node| FinancialStatement {
            code: node.local_code.unwrap_or_else(|| code.to_string()),
            disclosed_date: node.disclosed_date.as_deref().and_then(parse_date),
            period_end: node.current_period_end_date.as_deref().and_then(parse_date),
            type_of_document: node.type_of_document,
            eps: parse_num(node.earnings_per_share.as_deref()),
            eps_forecast: parse_num(node.forecast_earnings_per_share.as_deref()),
            book_value_per_share: parse_num(node.book_value_per_share.as_deref()),
        })
        .collect())
}
