//! jquants-rs: client for the J-Quants API (Japanese equity market data).
//!
//! Covers listed-company info, daily quotes, and periodic financial statements,
//! plus derivation of standard valuation metrics (trailing/forecast PER, PBR)
//! across a batch of security codes.
//!
//! The API is paid-plan gated behind a token exchange: a long-lived refresh
//! token (or an email/password pair) is traded for a short-lived id token which
//! authorizes every data request. [`JqClient`] manages that lifecycle and paces
//! outbound requests to respect the per-account rate budget.
//!
//! # Example
//!
//! ```no_run
//! # use jquants_rs::{BatchBuilder, JqClient};
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = JqClient::builder()
//!     .refresh_token(std::env::var("JQUANTS_REFRESH_TOKEN")?)
//!     .build()?;
//!
//! let rows = BatchBuilder::new(&client)
//!     .codes(["1301", "7203", "9984"])
//!     .run()
//!     .await?;
//!
//! for row in rows {
//!     println!("{} {:?} PER={:?}", row.code, row.company_name, row.per);
//! }
//! # Ok(())
//! # }
//! ```

/// Core client, error type, and networking internals.
pub mod core;

/// Listed-company information (`/listed/info`).
pub mod listed;
/// Daily price quotes (`/prices/daily_quotes`).
pub mod prices;
/// Periodic financial statements (`/fins/statements`).
pub mod statements;

/// Valuation-metric derivation (pure, no I/O).
pub mod valuation;

/// Sequential batch orchestration over a list of security codes.
pub mod batch;

mod equity;

pub use crate::core::client::{Backoff, Credentials, RetryConfig};
pub use crate::core::{JqClient, JqClientBuilder, JqError};
pub use batch::BatchBuilder;
pub use equity::Equity;
pub use listed::ListingInfo;
pub use prices::DailyQuote;
pub use statements::FinancialStatement;
pub use valuation::{MetricsStatus, ValuationMetrics};
