//! Authorized GET with global pacing, bounded retry/backoff, and a single
//! invalidate-and-reauthenticate pass on token rejection.

use crate::core::{JqClient, JqError};
use serde::de::DeserializeOwned;
use url::Url;

/// Issue an authorized GET against `url` and deserialize the JSON body.
///
/// Returns `Ok(None)` on 404: the provider reports "no data for this code"
/// as not-found, which is a normal outcome here, not a failure.
///
/// Attempt accounting, per outcome class:
/// - 429: backoff and retry up to `max_retries`; exhaustion is
///   [`JqError::RateLimited`].
/// - retryable 5xx: same bounded loop; exhaustion is [`JqError::Transient`]
///   with the attempt count.
/// - timeout / connect error: same bounded loop, but exhaustion surfaces the
///   underlying [`JqError::Http`] — there is no HTTP status to report, and
///   the source error says more than an attempt count would. Both forms are
///   non-fatal and fail only the security being fetched.
/// - 401/403: invalidate the cached token and re-authenticate once before
///   replaying; a second consecutive rejection is fatal [`JqError::Auth`].
pub(crate) async fn get_json<T>(client: &JqClient, url: Url) -> Result<Option<T>, JqError>
where
    T: DeserializeOwned,
{
    let retry = client.retry().clone();
    let mut attempt: u32 = 0;
    let mut reauthenticated = false;

    loop {
        let token = client.ensure_token().await?;

        client.pace().await;
        let resp = match client.http().get(url.clone()).bearer_auth(&token).send().await {
            Ok(r) => r,
            Err(e) if retry.retries_transport(&e) && attempt < retry.max_retries => {
                tokio::time::sleep(retry.backoff.delay(attempt)).await;
                attempt += 1;
                continue;
            }
            Err(e) => return Err(e.into()),
        };

        let status = resp.status().as_u16();
        match status {
            200 => {
                let text = resp.text().await?;
                let parsed = serde_json::from_str(&text)
                    .map_err(|e| JqError::Data(format!("json parse for {url}: {e}")))?;
                return Ok(Some(parsed));
            }
            404 => return Ok(None),
            401 | 403 => {
                if reauthenticated {
                    return Err(JqError::Auth(format!(
                        "access token rejected twice (status {status}) at {url}"
                    )));
                }
                client.invalidate_token().await;
                reauthenticated = true;
                // Replay without burning a retry attempt; this is a session
                // problem, not a rate/transience problem.
            }
            429 => {
                if attempt >= retry.max_retries {
                    return Err(JqError::RateLimited {
                        attempts: attempt + 1,
                    });
                }
                tokio::time::sleep(retry.backoff.delay(attempt)).await;
                attempt += 1;
            }
            s if retry.retries_status(s) => {
                if attempt >= retry.max_retries {
                    return Err(JqError::Transient {
                        status: s,
                        url: url.to_string(),
                        attempts: attempt + 1,
                    });
                }
                tokio::time::sleep(retry.backoff.delay(attempt)).await;
                attempt += 1;
            }
            s => {
                return Err(JqError::Status {
                    status: s,
                    url: url.to_string(),
                });
            }
        }
    }
}
