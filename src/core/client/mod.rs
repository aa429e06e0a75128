//! Public client surface + builder.
//! Internals are split into `auth` (token lifecycle) and `constants`
//! (base URL, UA, pacing/TTL defaults).

mod auth;
mod constants;
mod retry;

use crate::core::JqError;
use constants::{
    DEFAULT_BASE_URL, DEFAULT_MIN_INTERVAL, DEFAULT_TOKEN_TTL, TOKEN_EXPIRY_MARGIN, USER_AGENT,
};
use reqwest::Client;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::{Mutex, RwLock};
use url::Url;

pub use retry::{Backoff, RetryConfig};

/// The credential shape configured for token exchange.
///
/// The J-Quants API hands out short-lived id tokens either directly for a
/// long-lived refresh token (one round trip), or for an email/password pair
/// via an intermediate refresh token (two round trips).
#[derive(Clone)]
pub enum Credentials {
    /// A long-lived refresh token.
    RefreshToken(String),
    /// An account email/password pair.
    EmailPassword {
        /// Account mail address.
        email: String,
        /// Account password.
        password: String,
    },
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RefreshToken(_) => f.write_str("Credentials::RefreshToken(..)"),
            Self::EmailPassword { email, .. } => f
                .debug_struct("Credentials::EmailPassword")
                .field("email", email)
                .finish_non_exhaustive(),
        }
    }
}

#[derive(Debug)]
pub(crate) struct Session {
    pub(crate) id_token: String,
    pub(crate) obtained_at: Instant,
}

/// Client for the J-Quants API.
///
/// Cheap to clone; clones share the cached session token and the global
/// request pacer.
#[derive(Debug, Clone)]
pub struct JqClient {
    http: Client,
    base_url: Url,

    credentials: Option<Credentials>,
    session: Arc<RwLock<Option<Session>>>,
    auth_lock: Arc<Mutex<()>>,

    last_request: Arc<Mutex<Option<Instant>>>,
    min_interval: Duration,
    token_ttl: Duration,

    retry: RetryConfig,
}

impl JqClient {
    /// Create a new builder.
    pub fn builder() -> JqClientBuilder {
        JqClientBuilder::default()
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }

    pub(crate) fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub(crate) fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }

    pub(crate) fn retry(&self) -> &RetryConfig {
        &self.retry
    }

    pub(crate) fn session(&self) -> &RwLock<Option<Session>> {
        &self.session
    }

    pub(crate) fn auth_lock(&self) -> &Mutex<()> {
        &self.auth_lock
    }

    pub(crate) fn token_expired(&self, session: &Session) -> bool {
        session.obtained_at.elapsed() >= self.token_ttl.saturating_sub(TOKEN_EXPIRY_MARGIN)
    }

    /// Block until at least `min_interval` has passed since the previous
    /// outbound request, then claim the current slot. The lock is held across
    /// the sleep so concurrent callers queue up instead of stampeding.
    pub(crate) async fn pace(&self) {
        let mut last = self.last_request.lock().await;
        if let Some(prev) = *last {
            let elapsed = prev.elapsed();
            if elapsed < self.min_interval {
                tokio::time::sleep(self.min_interval - elapsed).await;
            }
        }
        *last = Some(Instant::now());
    }
}

/* ----------------------- Builder ----------------------- */

/// Builder for [`JqClient`].
#[derive(Default)]
pub struct JqClientBuilder {
    user_agent: Option<String>,
    base_url: Option<Url>,
    credentials: Option<Credentials>,

    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    min_interval: Option<Duration>,
    token_ttl: Option<Duration>,
    retry: Option<RetryConfig>,
}

impl JqClientBuilder {
    /// Override the User-Agent.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the API base (e.g. `https://api.jquants.com/v1/`).
    ///
    /// The path should end with a trailing slash so endpoint paths join onto it.
    #[must_use]
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Authenticate with a long-lived refresh token.
    #[must_use]
    pub fn refresh_token(mut self, token: impl Into<String>) -> Self {
        self.credentials = Some(Credentials::RefreshToken(token.into()));
        self
    }

    /// Authenticate with an account email/password pair.
    #[must_use]
    pub fn email_password(mut self, email: impl Into<String>, password: impl Into<String>) -> Self {
        self.credentials = Some(Credentials::EmailPassword {
            email: email.into(),
            password: password.into(),
        });
        self
    }

    /// Set a global request timeout (overall). Default: none.
    #[must_use]
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    #[must_use]
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Override the minimum spacing between consecutive outbound requests.
    /// Default: 300 ms, matching the provider's per-account budget.
    #[must_use]
    pub fn min_interval(mut self, dur: Duration) -> Self {
        self.min_interval = Some(dur);
        self
    }

    /// Override the assumed id-token lifetime. Default: 24 hours.
    #[must_use]
    pub fn token_ttl(mut self, dur: Duration) -> Self {
        self.token_ttl = Some(dur);
        self
    }

    /// Override the retry policy for rate-limit and transient failures.
    #[must_use]
    pub fn retry_policy(mut self, cfg: RetryConfig) -> Self {
        self.retry = Some(cfg);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL cannot be parsed or the underlying
    /// HTTP client cannot be constructed.
    pub fn build(self) -> Result<JqClient, JqError> {
        let base_url = match self.base_url {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_URL)?,
        };

        let mut httpb =
            reqwest::Client::builder().user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT));

        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        let http = httpb.build()?;

        Ok(JqClient {
            http,
            base_url,
            credentials: self.credentials,
            session: Arc::new(RwLock::new(None)),
            auth_lock: Arc::new(Mutex::new(())),
            last_request: Arc::new(Mutex::new(None)),
            min_interval: self.min_interval.unwrap_or(DEFAULT_MIN_INTERVAL),
            token_ttl: self.token_ttl.unwrap_or(DEFAULT_TOKEN_TTL),
            retry: self.retry.unwrap_or_default(),
        })
    }
}
