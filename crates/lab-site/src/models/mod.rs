//! Data models for remote search results and displayed publications.
//!
//! Wire models use `#[serde(default)]` for optional fields and
//! `#[serde(rename_all = "camelCase")]` to match API naming.

mod enums;
mod paper;
mod publication;

pub use enums::Category;
pub use paper::{AuthorRef, Paper, SearchResult};
pub use publication::Publication;
