//! Visitor sessions.
//!
//! Each visitor gets an id in the `lab_session` cookie and their own
//! [`PublicationsPanel`]. Panels live in a bounded cache and expire after a
//! period of inactivity; an expired or forged id simply starts a fresh panel.

use std::sync::Arc;

use axum::http::HeaderValue;
use axum_extra::headers::Cookie;
use moka::future::Cache;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::config::Config;
use crate::publications::{AuthorMatcher, PublicationsPanel};

/// Cookie holding the visitor's session id.
pub const SESSION_COOKIE: &str = "lab_session";

/// A panel shared between the concurrent requests of one visitor.
pub type SharedPanel = Arc<Mutex<PublicationsPanel>>;

/// One visitor's handle for the duration of a request.
#[derive(Debug, Clone)]
pub struct Session {
    pub id: Uuid,
    pub panel: SharedPanel,
    /// The request carried no usable session cookie.
    pub is_new: bool,
}

impl Session {
    /// `Set-Cookie` value to hand out a freshly minted id.
    #[must_use]
    pub fn set_cookie_header(&self) -> Option<HeaderValue> {
        if !self.is_new {
            return None;
        }
        let value = format!("{SESSION_COOKIE}={}; Path=/; HttpOnly; SameSite=Lax", self.id.simple());
        HeaderValue::from_str(&value).ok()
    }
}

/// Bounded, idle-expiring store of visitor panels.
#[derive(Clone)]
pub struct SessionManager {
    panels: Cache<Uuid, SharedPanel>,
    page_size: u32,
    matcher: AuthorMatcher,
}

impl SessionManager {
    #[must_use]
    pub fn new(config: &Config) -> Self {
        let panels = Cache::builder()
            .max_capacity(config.session_capacity)
            .time_to_idle(config.session_idle_ttl)
            .build();

        Self {
            panels,
            page_size: config.page_size,
            matcher: AuthorMatcher::new(&config.principal_name),
        }
    }

    /// Look up the visitor's panel, creating one if needed.
    pub async fn session(&self, cookie: Option<&Cookie>) -> Session {
        let existing = cookie
            .and_then(|c| c.get(SESSION_COOKIE))
            .and_then(|v| Uuid::try_parse(v).ok());

        let (id, is_new) = match existing {
            Some(id) => (id, false),
            None => (Uuid::new_v4(), true),
        };

        let panel = self
            .panels
            .get_with(id, async {
                tracing::debug!(session = %id, "Creating visitor panel");
                Arc::new(Mutex::new(PublicationsPanel::new(self.page_size, self.matcher.clone())))
            })
            .await;

        Session { id, panel, is_new }
    }

    /// Approximate number of live sessions.
    #[must_use]
    pub fn session_count(&self) -> u64 {
        self.panels.entry_count()
    }
}

impl std::fmt::Debug for SessionManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionManager")
            .field("sessions", &self.panels.entry_count())
            .field("page_size", &self.page_size)
            .finish_non_exhaustive()
    }
}
