//! RateLimitX - Rust client for the RateLimitX rate limiting service
//!
//! This crate wraps the service's REST API: rate limit checks, rule and API
//! key management, alerts, analytics, and bulk rule import/export. All rate
//! limiting decisions are made by the service; the client only marshals
//! requests and decodes the service's JSON responses.
//!
//! ```no_run
//! use ratelimitx::{RateLimitCheckRequest, RateLimitXClient};
//!
//! # async fn run() -> ratelimitx::Result<()> {
//! let client = RateLimitXClient::new("http://localhost:8080", "rlx_your-api-key")?;
//! let decision = client
//!     .check(&RateLimitCheckRequest::new("user123", "api.payment.create"))
//!     .await?;
//! println!("allowed: {}, remaining: {}", decision.allowed, decision.remaining);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod models;

pub use client::{RateLimitCheck, RateLimitXClient};
pub use config::ClientConfig;
pub use error::{RateLimitXError, Result};
pub use models::*;
