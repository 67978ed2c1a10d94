//! Shared test helpers for API integration tests.
#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;
use waymark_adventure::application::loader::load_story;
use waymark_adventure::application::renderer::ChapterRenderer;
use waymark_core::format::Format;
use waymark_test_support::fixtures::{REDIRECTS_YAML, STORY_JSON};
use waymark_urlshort::RedirectMap;

use waymark_api::app::build_app;
use waymark_api::routes::adventure::{AdventureHandler, AdventureOptions, strip_prefix};
use waymark_api::state::AppState;

/// Prefix chapters are served under in every test app.
pub const PREFIX: &str = "/stories/";

/// Build the app the way `main.rs` does: the fixture story, `template`,
/// and the story's initial chapter as default.
pub fn build_test_app(template: &str, redirects: Option<RedirectMap>) -> Router {
    build_story_app(STORY_JSON, template, redirects)
}

/// Build the app over the JSON story `story_json` instead of the fixture.
pub fn build_story_app(
    story_json: &str,
    template: &str,
    redirects: Option<RedirectMap>,
) -> Router {
    let story = load_story(story_json.as_bytes(), Format::Json).unwrap();
    let renderer = ChapterRenderer::new("test.html", template.to_owned()).unwrap();
    let options = AdventureOptions::default()
        .with_path_resolver(strip_prefix(PREFIX))
        .with_default_chapter(story.initial_chapter.clone());
    let handler = AdventureHandler::new(story.chapters, renderer, options);

    build_app(AppState::new(handler), PREFIX, redirects)
}

/// The fixture redirect map.
pub fn fixture_redirects() -> RedirectMap {
    RedirectMap::from_yaml(REDIRECTS_YAML.as_bytes()).unwrap()
}

/// Send a GET request and return status, headers, and body text.
pub async fn get(app: Router, uri: &str) -> (StatusCode, HeaderMap, String) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();

    (status, headers, String::from_utf8(body_bytes.to_vec()).unwrap())
}

/// Send a GET request and parse the body as JSON.
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let (status, _, body) = get(app, uri).await;
    (status, serde_json::from_str(&body).unwrap())
}
