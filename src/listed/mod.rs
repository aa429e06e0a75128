mod model;
mod wire;

pub use model::ListingInfo;

use crate::core::{JqClient, JqError, net};
use wire::InfoEnvelope;

/// Fetch listing info for one security code via `/listed/info`.
///
/// Returns `Ok(None)` when the provider has no listing for the code.
///
/// # Errors
///
/// Fails on authentication, rate-limit exhaustion, or transport problems.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(client), err))]
pub async fn info(client: &JqClient, code: &str) -> Result<Option<ListingInfo>, JqError> {
    let mut url = client.base_url().join("listed/info")?;
    url.query_pairs_mut().append_pair("code", code);

    let envelope: Option<InfoEnvelope> = net::get_json(client, url).await?;

    let node = match envelope.and_then(|e| e.info).and_then(|mut v| {
        if v.is_empty() { None } else { Some(v.remove(0)) }
    }) {
        Some(n) => n,
        None => return Ok(None),
    };

    Ok(Some(ListingInfo {
        code: node.code.unwrap_or_else(|| code.to_string()),
        company_name: node.company_name.unwrap_or_default(),
        company_name_english: node.company_name_english,
        market_code: node.market_code,
    }))
}
