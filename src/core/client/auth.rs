//! Token acquisition and lifecycle for the J-Quants token endpoints.

use crate::core::client::{Credentials, Session};
use crate::core::error::JqError;
use serde::Deserialize;
use std::time::Instant;

#[derive(Deserialize)]
struct RefreshTokenResponse {
    #[serde(rename = "refreshToken")]
    refresh_token: Option<String>,
}

#[derive(Deserialize)]
struct IdTokenResponse {
    #[serde(rename = "idToken")]
    id_token: Option<String>,
}

impl super::JqClient {
    /// Return a valid id token, authenticating first if the cached session is
    /// absent or expired. Idempotent; safe to call before every fetch.
    pub(crate) async fn ensure_token(&self) -> Result<String, JqError> {
        // Fast path: check the cached session with a read lock.
        if let Some(session) = self.session().read().await.as_ref()
            && !self.token_expired(session)
        {
            return Ok(session.id_token.clone());
        }

        // Slow path: serialize through the auth lock so only one task
        // re-authenticates.
        let _guard = self.auth_lock().lock().await;

        // Double-check: another task may have refreshed while this one waited.
        if let Some(session) = self.session().read().await.as_ref()
            && !self.token_expired(session)
        {
            return Ok(session.id_token.clone());
        }

        let id_token = self.authenticate().await?;

        *self.session().write().await = Some(Session {
            id_token: id_token.clone(),
            obtained_at: Instant::now(),
        });

        Ok(id_token)
    }

    /// Drop the cached session so the next [`Self::ensure_token`] call
    /// re-authenticates. Used when a data endpoint rejects the token.
    pub(crate) async fn invalidate_token(&self) {
        *self.session().write().await = None;
    }

    async fn authenticate(&self) -> Result<String, JqError> {
        match self.credentials() {
            Some(Credentials::RefreshToken(token)) => self.exchange_refresh_token(token).await,
            Some(Credentials::EmailPassword { email, password }) => {
                // The intermediate refresh token lives only for this exchange.
                let refresh = self.obtain_refresh_token(email, password).await?;
                self.exchange_refresh_token(&refresh).await
            }
            None => Err(JqError::Auth(
                "no credentials configured: set a refresh token or an email/password pair".into(),
            )),
        }
    }

    /// Send a token-endpoint POST with the same pacing and bounded
    /// retry/backoff as data requests. The token endpoints draw on the same
    /// per-account budget, so a 429 here is a rate problem, not a credential
    /// rejection, and must stay non-fatal.
    async fn post_token_request(
        &self,
        req: reqwest::RequestBuilder,
        url: &url::Url,
    ) -> Result<reqwest::Response, JqError> {
        let retry = self.retry().clone();
        let mut attempt: u32 = 0;

        loop {
            let attempt_req = req
                .try_clone()
                .ok_or_else(|| JqError::Data("token request body not replayable".into()))?;

            self.pace().await;
            let resp = match attempt_req.send().await {
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
                _ => return Ok(resp),
            }
        }
    }

    /// `POST /token/auth_user` — email/password to refresh token.
    async fn obtain_refresh_token(&self, email: &str, password: &str) -> Result<String, JqError> {
        let url = self.base_url().join("token/auth_user")?;

        let req = self
            .http()
            .post(url.clone())
            .json(&serde_json::json!({ "mailaddress": email, "password": password }));
        let resp = self.post_token_request(req, &url).await?;

        let status = resp.status();
        if status.is_client_error() {
            return Err(JqError::Auth(format!(
                "email/password rejected (status {})",
                status.as_u16()
            )));
        }
        if !status.is_success() {
            return Err(JqError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body: RefreshTokenResponse = resp.json().await?;
        body.refresh_token
            .ok_or_else(|| JqError::Data("auth_user response missing refreshToken".into()))
    }

    /// `POST /token/auth_refresh` — refresh token to id token.
    async fn exchange_refresh_token(&self, refresh_token: &str) -> Result<String, JqError> {
        let mut url = self.base_url().join("token/auth_refresh")?;
        url.query_pairs_mut()
            .append_pair("refreshtoken", refresh_token);

        let req = self.http().post(url.clone());
        let resp = self.post_token_request(req, &url).await?;

        let status = resp.status();
        if status.is_client_error() {
            return Err(JqError::Auth(format!(
                "refresh token rejected (status {})",
                status.as_u16()
            )));
        }
        if !status.is_success() {
            return Err(JqError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body: IdTokenResponse = resp.json().await?;
        body.id_token
            .ok_or_else(|| JqError::Data("auth_refresh response missing idToken".into()))
    }
}
