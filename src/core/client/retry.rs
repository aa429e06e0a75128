use std::time::Duration;

/// Specifies the backoff strategy for retrying failed requests.
#[derive(Clone, Debug)]
pub enum Backoff {
    /// Uses a fixed delay between retries.
    Fixed(Duration),
    /// Uses an exponential delay between retries.
    /// The delay is calculated as `base * (factor ^ attempt)`.
    Exponential {
        /// The initial backoff duration.
        base: Duration,
        /// The multiplicative factor for each subsequent retry.
        factor: f64,
        /// The maximum duration to wait between retries.
        max: Duration,
    },
}

impl Backoff {
    /// Delay before the retry following failed attempt number `attempt`
    /// (zero-based).
    pub(crate) fn delay(&self, attempt: u32) -> Duration {
        match self {
            Self::Fixed(d) => *d,
            Self::Exponential { base, factor, max } => {
                let scaled = base.as_secs_f64() * factor.powi(attempt as i32);
                Duration::from_secs_f64(scaled.min(max.as_secs_f64()))
            }
        }
    }
}

/// Configuration for the automatic retry mechanism on rate-limit and
/// transient server failures.
#[derive(Clone, Debug)]
pub struct RetryConfig {
    /// The maximum number of retries to attempt. The total number of attempts will be `max_retries + 1`.
    pub max_retries: u32,
    /// The backoff strategy to use between retries.
    pub backoff: Backoff,
    /// A list of HTTP status codes that should trigger a retry.
    /// `429` is always retried (with [`crate::JqError::RateLimited`] on
    /// exhaustion) and does not need to be listed here.
    pub retry_on_status: Vec<u16>,
    /// Whether to retry on request timeouts.
    pub retry_on_timeout: bool,
    /// Whether to retry on connection errors.
    pub retry_on_connect: bool,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            backoff: Backoff::Exponential {
                base: Duration::from_millis(500),
                factor: 2.0,
                max: Duration::from_secs(5),
            },
            retry_on_status: vec![500, 502, 503, 504],
            retry_on_timeout: true,
            retry_on_connect: true,
        }
    }
}

impl RetryConfig {
    pub(crate) fn retries_status(&self, status: u16) -> bool {
        self.retry_on_status.contains(&status)
    }

    pub(crate) fn retries_transport(&self, err: &reqwest::Error) -> bool {
        (err.is_timeout() && self.retry_on_timeout) || (err.is_connect() && self.retry_on_connect)
    }
}
