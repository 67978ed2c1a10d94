//! Waymark web server entry point.

use axum::Router;
use clap::Parser;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;
use waymark_adventure::application::loader::load_story_file;
use waymark_adventure::application::renderer::ChapterRenderer;
use waymark_api::app::build_app;
use waymark_api::config::ServerConfig;
use waymark_api::error::AppError;
use waymark_api::routes::adventure::{AdventureHandler, AdventureOptions, strip_prefix};
use waymark_api::state::AppState;
use waymark_urlshort::RedirectMap;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // Initialize tracing subscriber.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    let config = ServerConfig::parse();

    run(config)
        .await
        .inspect_err(|e| error!(error = %e, "server stopped"))
}

async fn run(config: ServerConfig) -> Result<(), AppError> {
    info!("Starting Waymark web server");

    let app = load_app(&config)?.layer(TraceLayer::new_for_http());

    let addr = config.socket_addr()?;
    info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Loads every input file and assembles the router. Any failure here is
/// fatal.
fn load_app(config: &ServerConfig) -> Result<Router, AppError> {
    let story = load_story_file(&config.adventure)?;
    for (chapter, target) in story.dangling_options() {
        warn!(chapter, missing = target, "option leads to a missing chapter");
    }
    if story.initial_chapter().is_none() {
        warn!(initial_chapter = %story.initial_chapter, "initial chapter is missing");
    }

    let renderer = ChapterRenderer::from_file(&config.template)?;

    let options = AdventureOptions::default()
        .with_path_resolver(strip_prefix(config.prefix.clone()))
        .with_default_chapter(story.initial_chapter.clone());
    let handler = AdventureHandler::new(story.chapters, renderer, options);

    let redirects = config
        .redirects
        .as_deref()
        .map(RedirectMap::from_file)
        .transpose()?;
    if let Some(redirects) = &redirects {
        info!(redirects = redirects.len(), "short links enabled");
    }

    Ok(build_app(AppState::new(handler), &config.prefix, redirects))
}

/// Resolves on Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received Ctrl+C, shutting down"),
        () = terminate => info!("Received SIGTERM, shutting down"),
    }
}
