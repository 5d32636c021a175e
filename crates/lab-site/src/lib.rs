//! AI & Smart City Lab website
//!
//! Server for the lab's single-page site. Most of the page is static content;
//! the publications panel is live, searching Semantic Scholar for the lab
//! principal's work, filtering results by author and paging through them.
//! When the search fails the panel falls back to a curated list.
//!
//! # Features
//!
//! - **Publications panel**: six topic categories, pagination, retry
//! - **Author filter**: tolerant of initials, hyphens and name order
//! - **Throttled**: outbound requests are spaced to respect API limits
//! - **Per-visitor state**: panels live in an idle-expiring session cache
//!
//! # Example
//!
//! ```no_run
//! use lab_site::{config::Config, server::SiteServer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let server = SiteServer::new(config)?;
//!     server.run_http(([127, 0, 0, 1], 8000).into()).await
//! }
//! ```

pub mod client;
pub mod config;
pub mod contact;
pub mod content;
pub mod error;
pub mod formatters;
pub mod models;
pub mod particles;
pub mod publications;
pub mod reveal;
pub mod server;
pub mod theme;

pub use client::{PublicationSource, ScholarClient};
pub use config::Config;
pub use error::{ClientError, SiteError};
