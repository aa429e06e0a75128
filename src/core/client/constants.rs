use std::time::Duration;

pub(crate) const DEFAULT_BASE_URL: &str = "https://api.jquants.com/v1/";

pub(crate) const USER_AGENT: &str =
    concat!("jquants-rs/", env!("CARGO_PKG_VERSION"), " (+https://github.com/gramistella/jquants-rs)");

/// Minimum spacing between any two outbound requests, shared across all
/// endpoints. Matches the provider's per-account rate budget.
pub(crate) const DEFAULT_MIN_INTERVAL: Duration = Duration::from_millis(300);

/// J-Quants id tokens are valid for 24 hours.
pub(crate) const DEFAULT_TOKEN_TTL: Duration = Duration::from_secs(24 * 60 * 60);

/// A token this close to expiry is treated as already expired.
pub(crate) const TOKEN_EXPIRY_MARGIN: Duration = Duration::from_secs(60);
