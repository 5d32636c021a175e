//! Publications panel state machine.
//!
//! ```text
//! Idle --(category/page change)--> Loading --ok--> Success
//!                                          \--err-> Error (fallback list)
//! Success | Error --(category/page change)--> Loading
//! ```
//!
//! Every transition into `Loading` hands out a fresh [`RequestToken`]. Only
//! the result carrying the latest token is applied, so a slow response to an
//! earlier click can never overwrite a newer one.

use std::sync::Arc;

use serde::Serialize;
use tokio::sync::Mutex;

use super::fallback::fallback_publications;
use super::filter::AuthorMatcher;
use super::pagination::PageState;
use crate::client::PublicationSource;
use crate::error::ClientResult;
use crate::models::{Category, Publication, SearchResult};

/// Monotonically increasing id of an issued fetch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct RequestToken(u64);

impl RequestToken {
    const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

/// One fetch the panel wants performed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub token: RequestToken,
    pub category: Category,
    pub query: &'static str,
    pub offset: u32,
    pub limit: u32,
}

impl FetchRequest {
    /// Perform the fetch against `source`.
    pub async fn run(&self, source: &dyn PublicationSource) -> ClientResult<SearchResult> {
        tracing::debug!(
            token = self.token.0,
            category = %self.category,
            offset = self.offset,
            "Fetching publications"
        );
        source.search(self.query, self.offset, self.limit).await
    }
}

/// Where the displayed items came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DataSource {
    Live,
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelStatus {
    Idle,
    Loading,
    Success,
    Error {
        message: String,
        retryable: bool,
    },
}

/// Outcome of [`PublicationsPanel::resolve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Applied,
    /// A newer request was issued after this one; its result was dropped.
    Stale,
}

/// Per-visitor publications panel.
#[derive(Debug, Clone)]
pub struct PublicationsPanel {
    category: Category,
    pages: PageState,
    status: PanelStatus,
    items: Vec<Publication>,
    source: DataSource,
    latest: RequestToken,
    matcher: AuthorMatcher,
}

impl PublicationsPanel {
    #[must_use]
    pub fn new(page_size: u32, matcher: AuthorMatcher) -> Self {
        Self {
            category: Category::default(),
            pages: PageState::new(page_size),
            status: PanelStatus::Idle,
            items: Vec::new(),
            source: DataSource::Live,
            latest: RequestToken::default(),
            matcher,
        }
    }

    #[must_use]
    pub const fn category(&self) -> Category {
        self.category
    }

    #[must_use]
    pub const fn pages(&self) -> &PageState {
        &self.pages
    }

    #[must_use]
    pub const fn status(&self) -> &PanelStatus {
        &self.status
    }

    #[must_use]
    pub fn items(&self) -> &[Publication] {
        &self.items
    }

    #[must_use]
    pub const fn source(&self) -> DataSource {
        self.source
    }

    /// Token of the most recently issued request.
    #[must_use]
    pub const fn latest_token(&self) -> RequestToken {
        self.latest
    }

    /// First load. Does nothing once the panel has left `Idle`.
    pub fn start(&mut self) -> Option<FetchRequest> {
        (self.status == PanelStatus::Idle).then(|| self.issue())
    }

    /// Select a category and go back to page 1.
    ///
    /// Re-selecting the category already shown on page 1 does not refetch.
    pub fn select_category(&mut self, category: Category) -> Option<FetchRequest> {
        let unchanged = category == self.category && self.pages.page() == 1;
        if unchanged && self.status != PanelStatus::Idle {
            return None;
        }

        if category != self.category {
            self.category = category;
            self.pages = PageState::new(self.pages.page_size());
        } else {
            self.pages.reset();
        }
        Some(self.issue())
    }

    /// Go to the next page, if there is one.
    pub fn next_page(&mut self) -> Option<FetchRequest> {
        self.pages.next().then(|| self.issue())
    }

    /// Go to the previous page, if there is one.
    pub fn previous_page(&mut self) -> Option<FetchRequest> {
        self.pages.previous().then(|| self.issue())
    }

    /// Re-issue the fetch for the current category and page.
    pub fn refresh(&mut self) -> FetchRequest {
        self.issue()
    }

    fn issue(&mut self) -> FetchRequest {
        self.latest = self.latest.next();
        self.status = PanelStatus::Loading;
        FetchRequest {
            token: self.latest,
            category: self.category,
            query: self.category.query(),
            offset: self.pages.offset(),
            limit: self.pages.page_size(),
        }
    }

    /// Apply the result of the request identified by `token`.
    pub fn resolve(&mut self, token: RequestToken, result: ClientResult<SearchResult>) -> Resolution {
        if token != self.latest {
            tracing::debug!(token = token.0, latest = self.latest.0, "Dropping stale result");
            return Resolution::Stale;
        }

        match result {
            Ok(result) => {
                let fetched = result.data.len();
                self.pages.set_total(result.total);
                self.items = self
                    .matcher
                    .retain(result.data)
                    .iter()
                    .filter_map(Publication::from_paper)
                    .collect();
                self.source = DataSource::Live;
                self.status = PanelStatus::Success;
                tracing::debug!(
                    total = result.total,
                    fetched,
                    shown = self.items.len(),
                    "Publications loaded"
                );
            }
            Err(e) => {
                tracing::warn!(error = %e, category = %self.category, "Publication fetch failed, showing fallback");
                self.items = fallback_publications().to_vec();
                self.source = DataSource::Fallback;
                self.status = PanelStatus::Error {
                    message: e.to_user_message(),
                    retryable: e.is_retryable(),
                };
            }
        }
        Resolution::Applied
    }

    /// Snapshot for rendering.
    #[must_use]
    pub fn view(&self) -> PanelView {
        let (error, can_retry) = match &self.status {
            PanelStatus::Error { message, retryable } => (Some(message.clone()), *retryable),
            _ => (None, false),
        };
        let show_pagination = self.status == PanelStatus::Success;

        PanelView {
            category: self.category,
            page: self.pages.page(),
            total: self.pages.total(),
            total_pages: self.pages.total_pages(),
            show_pagination,
            has_previous: show_pagination && self.pages.has_previous(),
            has_next: show_pagination && self.pages.has_next(),
            loading: matches!(self.status, PanelStatus::Idle | PanelStatus::Loading),
            source: self.source,
            items: self.items.clone(),
            error,
            can_retry,
            deep_link: self.category.deep_link(),
        }
    }
}

/// Render-ready snapshot of a panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelView {
    pub category: Category,
    pub page: u32,
    pub total: Option<u64>,
    pub total_pages: u32,
    pub show_pagination: bool,
    pub has_previous: bool,
    pub has_next: bool,
    pub loading: bool,
    pub source: DataSource,
    pub items: Vec<Publication>,
    pub error: Option<String>,
    pub can_retry: bool,
    pub deep_link: String,
}

/// Apply `change` to a shared panel and, if it asks for a fetch, run it.
///
/// The fetch and its `resolve` run on a spawned task, so the panel leaves
/// `Loading` even if the caller is dropped mid-request. The lock is released
/// while the request is in flight so later changes can supersede it. Returns
/// `None` when `change` issued no request.
pub async fn transition<F>(
    panel: &Arc<Mutex<PublicationsPanel>>,
    source: Arc<dyn PublicationSource>,
    change: F,
) -> Option<Resolution>
where
    F: FnOnce(&mut PublicationsPanel) -> Option<FetchRequest>,
{
    let request = {
        let mut guard = panel.lock().await;
        change(&mut guard)?
    };

    let panel = Arc::clone(panel);
    let fetch = tokio::spawn(async move {
        let result = request.run(source.as_ref()).await;
        panel.lock().await.resolve(request.token, result)
    });

    match fetch.await {
        Ok(resolution) => Some(resolution),
        Err(e) => {
            tracing::error!(error = %e, "Publication fetch task failed");
            None
        }
    }
}
