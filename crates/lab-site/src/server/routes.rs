//! HTTP routes.

use std::path::Path;
use std::sync::Arc;

use axum::{
    Form, Json, Router,
    extract::{Query, State},
    http::{
        HeaderName, HeaderValue, StatusCode,
        header::{CACHE_CONTROL, CONTENT_TYPE, SET_COOKIE},
    },
    response::{AppendHeaders, Html, IntoResponse, Redirect, Response},
    routing::{get, post},
};
use axum_extra::{TypedHeader, headers::Cookie};
use chrono::Datelike;
use serde::Deserialize;
use tower::limit::ConcurrencyLimitLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use super::session::{Session, SessionManager};
use crate::client::PublicationSource;
use crate::config::{Config, lab};
use crate::contact::{ContactBackend, ContactForm};
use crate::error::{SiteError, SiteResult};
use crate::formatters::{self, ContactState, PageContext};
use crate::models::Category;
use crate::particles::{INITIAL_PARTICLES, ParticleField};
use crate::publications::{FetchRequest, PanelView, PublicationsPanel, transition};
use crate::theme::{CookieThemeStore, ThemeContext, toggle_theme};

const SITE_CSS: &str = include_str!("../../assets/site.css");
const SITE_JS: &str = include_str!("../../assets/site.js");

/// Where mutating panel endpoints send the browser back to.
const PUBLICATIONS_ANCHOR: &str = "/#publications";

/// Shared state for HTTP handlers.
pub struct AppState {
    pub config: Config,
    pub source: Arc<dyn PublicationSource>,
    pub contact: Arc<dyn ContactBackend>,
    pub sessions: SessionManager,
}

impl AppState {
    #[must_use]
    pub fn new(
        config: Config,
        source: Arc<dyn PublicationSource>,
        contact: Arc<dyn ContactBackend>,
    ) -> Self {
        let sessions = SessionManager::new(&config);
        Self { config, source, contact, sessions }
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState").field("sessions", &self.sessions).finish_non_exhaustive()
    }
}

type Jar = Option<TypedHeader<Cookie>>;

fn cookie(jar: &Jar) -> Option<&Cookie> {
    jar.as_ref().map(|TypedHeader(c)| c)
}

/// Create the HTTP router. Member photos and other images are served from
/// `static_dir` under `/static` when one is given.
pub fn create_router(state: Arc<AppState>, static_dir: Option<&Path>) -> Router {
    let mut router = Router::new()
        .route("/", get(index))
        .route("/health", get(health_check))
        .route("/api/publications", get(api_publications))
        .route("/publications/category", post(select_category))
        .route("/publications/next", post(next_page))
        .route("/publications/previous", post(previous_page))
        .route("/publications/refresh", post(refresh))
        .route("/theme", post(toggle))
        .route("/contact", post(submit_contact))
        .route("/assets/site.css", get(stylesheet))
        .route("/assets/site.js", get(script));

    if let Some(dir) = static_dir {
        router = router.nest_service("/static", ServeDir::new(dir));
    }

    router
        .layer(ConcurrencyLimitLayer::new(lab::MAX_CONCURRENT_REQUESTS))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": "lab-site",
        "version": env!("CARGO_PKG_VERSION"),
        "sessions": state.sessions.session_count(),
    }))
}

#[derive(Debug, Default, Deserialize)]
struct CategoryQuery {
    category: Option<String>,
}

impl CategoryQuery {
    fn parse(&self) -> SiteResult<Option<Category>> {
        self.category.as_deref().map(str::parse).transpose()
    }
}

#[derive(Debug, Deserialize)]
struct CategoryForm {
    #[serde(default)]
    category: String,
}

/// Bring the panel up to date for this request: apply `?category=` if given,
/// otherwise perform the first load.
async fn load_panel(state: &AppState, session: &Session, category: Option<Category>) -> PanelView {
    let change = |panel: &mut PublicationsPanel| match category {
        Some(c) => panel.select_category(c),
        None => panel.start(),
    };
    transition(&session.panel, Arc::clone(&state.source), change).await;
    session.panel.lock().await.view()
}

fn render(theme: ThemeContext, view: &PanelView, contact: ContactState<'_>) -> String {
    let particles = ParticleField::generate(INITIAL_PARTICLES);
    formatters::render_page(&PageContext {
        theme,
        panel: view,
        particles: &particles,
        contact,
        year: chrono::Utc::now().year(),
    })
}

fn session_cookie(session: &Session) -> AppendHeaders<Option<(HeaderName, HeaderValue)>> {
    AppendHeaders(session.set_cookie_header().map(|v| (SET_COOKIE, v)))
}

async fn index(
    State(state): State<Arc<AppState>>,
    Query(query): Query<CategoryQuery>,
    jar: Jar,
) -> SiteResult<Response> {
    let category = query.parse()?;
    let session = state.sessions.session(cookie(&jar)).await;
    let view = load_panel(&state, &session, category).await;
    let theme = ThemeContext::from_store(&CookieThemeStore::from_cookie(cookie(&jar)));

    let html = render(theme, &view, ContactState::Blank);
    Ok((session_cookie(&session), Html(html)).into_response())
}

async fn api_publications(
    State(state): State<Arc<AppState>>,
    Query(query): Query<CategoryQuery>,
    jar: Jar,
) -> SiteResult<Response> {
    let category = query.parse()?;
    let session = state.sessions.session(cookie(&jar)).await;
    let view = load_panel(&state, &session, category).await;

    Ok((session_cookie(&session), Json(formatters::panel_json(&view))).into_response())
}

/// Run a panel change for this visitor and send them back to the panel.
async fn panel_action<F>(state: &AppState, jar: &Jar, change: F) -> Response
where
    F: FnOnce(&mut PublicationsPanel) -> Option<FetchRequest>,
{
    let session = state.sessions.session(cookie(jar)).await;
    if transition(&session.panel, Arc::clone(&state.source), change).await.is_none() {
        tracing::debug!(session = %session.id, "Panel action issued no request");
    }
    (session_cookie(&session), Redirect::to(PUBLICATIONS_ANCHOR)).into_response()
}

async fn select_category(
    State(state): State<Arc<AppState>>,
    jar: Jar,
    Form(form): Form<CategoryForm>,
) -> SiteResult<Response> {
    let category: Category = form.category.parse()?;
    Ok(panel_action(&state, &jar, |panel| panel.select_category(category)).await)
}

async fn next_page(State(state): State<Arc<AppState>>, jar: Jar) -> Response {
    panel_action(&state, &jar, PublicationsPanel::next_page).await
}

async fn previous_page(State(state): State<Arc<AppState>>, jar: Jar) -> Response {
    panel_action(&state, &jar, PublicationsPanel::previous_page).await
}

async fn refresh(State(state): State<Arc<AppState>>, jar: Jar) -> Response {
    panel_action(&state, &jar, |panel| Some(panel.refresh())).await
}

async fn toggle(jar: Jar) -> Response {
    let mut store = CookieThemeStore::from_cookie(cookie(&jar));
    let theme = toggle_theme(&mut store);
    tracing::debug!(%theme, "Theme toggled");

    let header = store.set_cookie_header().map(|v| (SET_COOKIE, v));
    (AppendHeaders(header), Redirect::to("/")).into_response()
}

async fn submit_contact(
    State(state): State<Arc<AppState>>,
    jar: Jar,
    Form(form): Form<ContactForm>,
) -> SiteResult<Response> {
    let session = state.sessions.session(cookie(&jar)).await;
    let view = load_panel(&state, &session, None).await;
    let theme = ThemeContext::from_store(&CookieThemeStore::from_cookie(cookie(&jar)));

    let submission = match form.validate() {
        Ok(submission) => submission,
        Err(e @ SiteError::Validation { .. }) => {
            let message = e.to_user_message();
            let html = render(theme, &view, ContactState::Invalid { form: &form, error: &message });
            return Ok(
                (StatusCode::UNPROCESSABLE_ENTITY, session_cookie(&session), Html(html)).into_response()
            );
        }
        Err(e) => return Err(e),
    };

    let receipt = state.contact.submit(&submission).await?;
    let html = render(theme, &view, ContactState::Sent(&receipt));
    Ok((session_cookie(&session), Html(html)).into_response())
}

async fn stylesheet() -> impl IntoResponse {
    (
        [(CONTENT_TYPE, "text/css; charset=utf-8"), (CACHE_CONTROL, "public, max-age=3600")],
        SITE_CSS,
    )
}

async fn script() -> impl IntoResponse {
    (
        [
            (CONTENT_TYPE, "application/javascript; charset=utf-8"),
            (CACHE_CONTROL, "public, max-age=3600"),
        ],
        SITE_JS,
    )
}
