//! HTTP route tests, driven through the router without binding a socket.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use serde_json::json;
use tower::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use lab_site::client::ScholarClient;
use lab_site::config::Config;
use lab_site::contact::SimulatedBackend;
use lab_site::server::SiteServer;

async fn app(mock_server: &MockServer) -> Router {
    let config = Config::for_testing(&mock_server.uri());
    let client = Arc::new(ScholarClient::new(&config).unwrap());
    let contact = Arc::new(SimulatedBackend::new(Duration::ZERO));
    SiteServer::with_backends(config, client, contact).router()
}

async fn mount_search(mock_server: &MockServer, status: u16) {
    let template = if status == 200 {
        ResponseTemplate::new(200).set_body_json(json!({
            "total": 12,
            "offset": 0,
            "data": [{"paperId": "p", "title": "Live <b>paper</b>", "year": 2025, "authors": [{"name": "Young Im Cho"}]}]
        }))
    } else {
        ResponseTemplate::new(status)
    };

    Mock::given(method("GET"))
        .and(path("/graph/v1/paper/search"))
        .respond_with(template)
        .mount(mock_server)
        .await;
}

async fn body_text(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_form(uri: &str, form: &[(&str, &str)], cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::from(serde_urlencoded::to_string(form).unwrap())).unwrap()
}

fn session_cookie(response: &axum::response::Response) -> String {
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .find(|v| v.starts_with("lab_session="))
        .and_then(|v| v.split(';').next())
        .unwrap()
        .to_string()
}

#[tokio::test]
async fn test_health() {
    let mock_server = MockServer::start().await;
    let response = app(&mock_server).await.oneshot(get("/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "lab-site");
}

#[tokio::test]
async fn test_index_renders_live_publications_and_sets_session() {
    let mock_server = MockServer::start().await;
    mount_search(&mock_server, 200).await;

    let response = app(&mock_server).await.oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(session_cookie(&response).starts_with("lab_session="));

    let html = body_text(response).await;
    assert!(html.contains("Live &lt;b&gt;paper&lt;/b&gt;"));
    assert!(html.contains(r#"data-source="live""#));
    assert!(html.contains("Page 1 of 2"));
    for anchor in ["home", "about", "services", "portfolio", "members", "publications", "contact"] {
        assert!(html.contains(&format!(r#"id="{anchor}""#)), "missing section {anchor}");
    }
}

#[tokio::test]
async fn test_index_falls_back_when_search_fails() {
    let mock_server = MockServer::start().await;
    mount_search(&mock_server, 500).await;

    let response = app(&mock_server).await.oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert!(html.contains("Fire and Smoke Detection in Complex Environments"));
    assert!(html.contains(r#"class="error-banner""#));
    assert!(!html.contains(r#"class="pagination""#));
}

#[tokio::test]
async fn test_unknown_category_is_bad_request() {
    let mock_server = MockServer::start().await;
    let response = app(&mock_server).await.oneshot(get("/?category=astrology")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_category_post_redirects_and_sticks_to_session() {
    let mock_server = MockServer::start().await;
    mount_search(&mock_server, 200).await;
    let app = app(&mock_server).await;

    let response = app
        .clone()
        .oneshot(post_form("/publications/category", &[("category", "vision")], None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/#publications");
    let cookie = session_cookie(&response);

    let request = Request::builder().uri("/").header(header::COOKIE, &cookie).body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert!(response.headers().get(header::SET_COOKIE).is_none());

    let html = body_text(response).await;
    assert!(html.contains(r#"value="vision" aria-pressed="true""#));
}

#[tokio::test]
async fn test_pagination_posts_redirect() {
    let mock_server = MockServer::start().await;
    mount_search(&mock_server, 200).await;
    let app = app(&mock_server).await;

    let response = app.clone().oneshot(get("/")).await.unwrap();
    let cookie = session_cookie(&response);

    let response =
        app.clone().oneshot(post_form("/publications/next", &[], Some(&cookie))).await.unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let request = Request::builder()
        .uri("/api/publications")
        .header(header::COOKIE, &cookie)
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let body: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(body["page"], 2);
    assert_eq!(body["hasNext"], false);
    assert_eq!(body["hasPrevious"], true);

    let response =
        app.oneshot(post_form("/publications/previous", &[], Some(&cookie))).await.unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
}

#[tokio::test]
async fn test_api_publications_lists_categories() {
    let mock_server = MockServer::start().await;
    mount_search(&mock_server, 200).await;

    let response = app(&mock_server).await.oneshot(get("/api/publications?category=nlp")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(body["category"], "nlp");
    assert_eq!(body["source"], "live");
    assert_eq!(body["categories"].as_array().unwrap().len(), 6);
    assert!(body["deepLink"].as_str().unwrap().starts_with("https://scholar.google.com/"));
}

#[tokio::test]
async fn test_theme_toggle_sets_cookie() {
    let mock_server = MockServer::start().await;
    mount_search(&mock_server, 200).await;
    let app = app(&mock_server).await;

    let response = app.clone().oneshot(post_form("/theme", &[], None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let set_cookie = response.headers()[header::SET_COOKIE].to_str().unwrap().to_string();
    assert!(set_cookie.starts_with("theme=light"));

    let request = Request::builder().uri("/").header(header::COOKIE, "theme=light").body(Body::empty()).unwrap();
    let html = body_text(app.clone().oneshot(request).await.unwrap()).await;
    assert!(html.contains(r#"<html lang="en" class="light">"#));

    let response = app.oneshot(post_form("/theme", &[], Some("theme=light"))).await.unwrap();
    let set_cookie = response.headers()[header::SET_COOKIE].to_str().unwrap();
    assert!(set_cookie.starts_with("theme=dark"));
}

#[tokio::test]
async fn test_contact_rejects_invalid_input() {
    let mock_server = MockServer::start().await;
    mount_search(&mock_server, 200).await;

    let form = [("name", "Ada"), ("email", "not-an-address"), ("message", "Hello")];
    let response = app(&mock_server).await.oneshot(post_form("/contact", &form, None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let html = body_text(response).await;
    assert!(html.contains(r#"class="form-error""#));
    assert!(html.contains(r#"value="Ada""#));
}

#[tokio::test]
async fn test_contact_accepts_valid_input() {
    let mock_server = MockServer::start().await;
    mount_search(&mock_server, 200).await;

    let form = [("name", "Ada"), ("email", "ada@example.org"), ("company", ""), ("message", "Hello")];
    let response = app(&mock_server).await.oneshot(post_form("/contact", &form, None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert!(html.contains("<dialog open"));
    assert!(!html.contains(r#"value="Ada""#));
}

#[tokio::test]
async fn test_embedded_assets() {
    let mock_server = MockServer::start().await;
    let app = app(&mock_server).await;

    let response = app.clone().oneshot(get("/assets/site.css")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers()[header::CONTENT_TYPE].to_str().unwrap().starts_with("text/css"));

    let response = app.oneshot(get("/assets/site.js")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("IntersectionObserver"));
}
