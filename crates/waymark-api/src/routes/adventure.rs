//! Adventure chapter pages.
//!
//! Each request is mapped to a chapter key by a [`PathResolver`]. An empty
//! key falls back to the default chapter; an unknown key is a bare 404.
//! Pages are rendered fresh on every request from the immutable chapter map.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use axum::Router;
use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::get;
use tracing::{debug, error, instrument};
use waymark_adventure::application::renderer::ChapterRenderer;
use waymark_adventure::domain::story::Chapter;

use crate::routes::path::decoded_path;
use crate::state::AppState;

/// Chapter served when the resolved key is empty and no other default is
/// configured.
pub const DEFAULT_CHAPTER: &str = "intro";

/// Extracts a chapter key from a request.
pub type PathResolver = Arc<dyn Fn(&Request) -> String + Send + Sync>;

/// Resolves the decoded request path minus its leading `/`.
#[must_use]
pub fn trim_leading_slash() -> PathResolver {
    Arc::new(|request: &Request| {
        let path = decoded_path(request);
        path.strip_prefix('/').unwrap_or(&*path).to_owned()
    })
}

/// Resolves the decoded request path minus `prefix`. Paths outside the
/// prefix resolve to the path minus its leading `/`.
#[must_use]
pub fn strip_prefix(prefix: impl Into<String>) -> PathResolver {
    let prefix = prefix.into();
    Arc::new(move |request: &Request| {
        let path = decoded_path(request);
        path.strip_prefix(prefix.as_str())
            .or_else(|| path.strip_prefix('/'))
            .unwrap_or(&*path)
            .to_owned()
    })
}

/// Construction-time options for [`AdventureHandler`].
#[derive(Clone, Default)]
pub struct AdventureOptions {
    path_resolver: Option<PathResolver>,
    default_chapter: Option<String>,
}

impl AdventureOptions {
    /// Use `resolver` instead of [`trim_leading_slash`].
    #[must_use]
    pub fn with_path_resolver(mut self, resolver: PathResolver) -> Self {
        self.path_resolver = Some(resolver);
        self
    }

    /// Serve `key` when the resolved key is empty, instead of
    /// [`DEFAULT_CHAPTER`].
    #[must_use]
    pub fn with_default_chapter(mut self, key: impl Into<String>) -> Self {
        self.default_chapter = Some(key.into());
        self
    }
}

impl fmt::Debug for AdventureOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdventureOptions")
            .field("custom_path_resolver", &self.path_resolver.is_some())
            .field("default_chapter", &self.default_chapter)
            .finish()
    }
}

/// Looks up and renders chapters.
pub struct AdventureHandler {
    chapters: HashMap<String, Chapter>,
    renderer: ChapterRenderer,
    path_resolver: PathResolver,
    default_chapter: String,
}

impl AdventureHandler {
    /// Creates a handler over `chapters`.
    #[must_use]
    pub fn new(
        chapters: HashMap<String, Chapter>,
        renderer: ChapterRenderer,
        options: AdventureOptions,
    ) -> Self {
        Self {
            chapters,
            renderer,
            path_resolver: options.path_resolver.unwrap_or_else(trim_leading_slash),
            default_chapter: options
                .default_chapter
                .unwrap_or_else(|| DEFAULT_CHAPTER.to_owned()),
        }
    }

    /// Number of chapters served.
    #[must_use]
    pub fn chapter_count(&self) -> usize {
        self.chapters.len()
    }

    /// Answers `request` with the rendered chapter, 404 for an unknown key,
    /// or 500 if the template fails.
    pub fn handle(&self, request: &Request) -> Response {
        let mut key = (self.path_resolver)(request);
        if key.is_empty() {
            key.clone_from(&self.default_chapter);
        }

        let Some(chapter) = self.chapters.get(&key) else {
            debug!(%key, "chapter not found");
            return StatusCode::NOT_FOUND.into_response();
        };

        if chapter.is_terminal() {
            debug!(%key, "serving terminal chapter");
        }

        match self.renderer.render(chapter) {
            Ok(page) => Html(page).into_response(),
            Err(e) => {
                error!(%key, error = %e, "chapter render failed");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}

impl fmt::Debug for AdventureHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdventureHandler")
            .field("chapters", &self.chapters.len())
            .field("default_chapter", &self.default_chapter)
            .finish_non_exhaustive()
    }
}

/// GET {prefix} and GET {prefix}{*key}
#[instrument(skip_all, fields(path = %request.uri().path()))]
async fn serve_chapter(State(state): State<AppState>, request: Request) -> Response {
    state.adventure.handle(&request)
}

/// Returns the router serving chapters under `prefix`, which must start and
/// end with `/`. The prefix without its trailing `/` redirects to the prefix.
pub fn router(prefix: &str) -> Router<AppState> {
    let mut router = Router::new()
        .route(prefix, get(serve_chapter))
        .route(&format!("{prefix}{{*key}}"), get(serve_chapter));

    let bare = prefix.trim_end_matches('/');
    if !bare.is_empty() {
        let target = prefix.to_owned();
        router = router.route(bare, get(move || async move { Redirect::permanent(&target) }));
    }
    router
}
