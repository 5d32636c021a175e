//! Live publications panel: fetch, author filter, pagination and fallback.

mod fallback;
mod filter;
mod pagination;
mod panel;

pub use fallback::fallback_publications;
pub use filter::AuthorMatcher;
pub use pagination::PageState;
pub use panel::{
    DataSource, FetchRequest, PanelStatus, PanelView, PublicationsPanel, RequestToken, Resolution,
    transition,
};
