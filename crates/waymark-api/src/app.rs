//! Router composition.

use axum::Router;
use waymark_urlshort::RedirectMap;

use crate::routes;
use crate::routes::redirect::RedirectHandler;
use crate::state::AppState;

/// Builds the full application router.
///
/// Chapters are served under `prefix` (which must start and end with `/`).
/// With a redirect map, every other path goes to the redirect handler,
/// whose own fallback answers 404; without one, unmatched paths get axum's
/// default 404.
pub fn build_app(state: AppState, prefix: &str, redirects: Option<RedirectMap>) -> Router {
    let app = Router::new()
        .merge(routes::health::router())
        .merge(routes::adventure::router(prefix))
        .with_state(state);

    match redirects {
        Some(redirects) => {
            let short_links =
                RedirectHandler::new(redirects, routes::redirect::not_found_service());
            app.fallback_service(short_links.into_router())
        }
        None => app,
    }
}
