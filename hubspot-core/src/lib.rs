//! Unofficial Rust client for the HubSpot REST API.
//!
//! This crate wraps the HubSpot CRM, marketing, CMS, and automation
//! endpoints behind a single authenticated client. Every operation returns
//! a uniform [`envelope::Envelope`] (or a plain `bool` for delete-style
//! operations), so callers branch on one result shape across the whole
//! surface instead of per-endpoint error types.
//!
//! # Examples
//!
//! ```no_run
//! use hubspot_core::client::{Builder, Credentials};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Builder::new()
//!     .credentials(Credentials::from_env())
//!     .build()?;
//!
//! let contact = client.contacts().load_by_email("a@example.com").await;
//! if contact.error.is_none() {
//!     println!("found: {}", contact.payload);
//! }
//! # Ok(())
//! # }
//! ```

/// Default HubSpot API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.hubapi.com";

/// Fixed deadline for one HTTP round trip (10 seconds).
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Environment variable overriding the API base URL.
pub const BASE_URL_ENV: &str = "HUBSPOT_BASE_URL";

/// Environment variable holding the private-app bearer token.
pub const ACCESS_TOKEN_ENV: &str = "HUBSPOT_ACCESS_TOKEN";

/// Bearer-token authentication and the request executor.
pub mod client;

/// The uniform `{status, error, payload}` result shape.
pub mod envelope;

mod endpoint;

/// CRM object families: contacts, companies, deals, pipelines, and friends.
pub mod crm;

/// Marketing surface: forms, marketing emails, campaigns, email events.
pub mod marketing;

/// File manager operations.
pub mod files;

/// HubDB tables, columns, and rows.
pub mod hubdb;

/// Automation surface: workflows and webhook subscriptions.
pub mod automation;

/// Analytics report lookups.
pub mod analytics;
