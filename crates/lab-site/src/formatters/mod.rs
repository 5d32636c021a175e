//! Output formatters for HTML and JSON.

mod html;
mod json;

pub use self::json::*;
pub use html::*;
