//! Short-link redirects.
//!
//! A mapped path is answered with `307 Temporary Redirect`. Anything else is
//! handed, unchanged, to the fallback service. Any tower service can be the
//! fallback, including another redirect handler.

use std::convert::Infallible;
use std::sync::Arc;

use axum::Router;
use axum::extract::Request;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use axum::routing::{MethodRouter, any};
use tower::{Service, ServiceExt};
use tracing::{debug, info, instrument};
use waymark_urlshort::RedirectMap;

use crate::routes::path::decoded_path;

/// Answers mapped paths with a redirect and delegates the rest.
#[derive(Debug, Clone)]
pub struct RedirectHandler<F> {
    redirects: Arc<RedirectMap>,
    fallback: F,
}

impl<F> RedirectHandler<F>
where
    F: Service<Request, Error = Infallible> + Clone + Send + Sync + 'static,
    F::Response: IntoResponse,
    F::Future: Send + 'static,
{
    /// Creates a handler over `redirects` that delegates unmapped paths to
    /// `fallback`.
    pub fn new(redirects: RedirectMap, fallback: F) -> Self {
        Self {
            redirects: Arc::new(redirects),
            fallback,
        }
    }

    /// Redirects `request` if its decoded path is mapped, otherwise returns
    /// the fallback's response.
    #[instrument(skip_all, fields(path = %request.uri().path()))]
    pub async fn handle(&self, request: Request) -> Response {
        if let Some(url) = self.redirects.get(&decoded_path(&request)) {
            info!(%url, "redirecting");
            return Redirect::temporary(url).into_response();
        }

        debug!("no redirect, delegating to fallback");
        match self.fallback.clone().oneshot(request).await {
            Ok(response) => response.into_response(),
            Err(never) => match never {},
        }
    }

    /// Wraps the handler in a router that sends every request to it.
    pub fn into_router(self) -> Router {
        Router::new().fallback(move |request: Request| {
            let handler = self.clone();
            async move { handler.handle(request).await }
        })
    }
}

/// GET, POST, … anything: 404 with an empty body.
async fn not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}

/// A fallback that answers every request with a bare 404.
#[must_use]
pub fn not_found_service() -> MethodRouter {
    any(not_found)
}
