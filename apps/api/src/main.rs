mod cli;
mod config;
mod contact;
mod content;
mod errors;
mod models;
mod pagination;
mod pdf;
mod rotation;
mod routes;
mod sections;
mod state;

use std::net::SocketAddr;
use std::sync::atomic::AtomicUsize;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::contact::mailer::{LogMailer, Mailer, ResendMailer};
use crate::models::PortfolioContent;
use crate::rotation::{Rotator, ROTATION_PERIOD};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            // Module targets use underscores, not the package name's dash.
            let target = env!("CARGO_PKG_NAME").replace('-', "_");
            EnvFilter::new(format!("{target}={}", &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Portfolio API v{}", env!("CARGO_PKG_VERSION"));

    // Load the portfolio document
    let content = Arc::new(PortfolioContent::load(config.content_path.as_deref())?);
    info!(
        "Content loaded: {} projects, {} skills, {} blog posts",
        content.projects.len(),
        content.skills.len(),
        content.blogs.len()
    );

    // Pick the mail backend
    let mailer: Arc<dyn Mailer> = match &config.resend_api_key {
        Some(key) => Arc::new(ResendMailer::new(key.clone(), config.resend_endpoint.clone())),
        None => {
            info!("RESEND_API_KEY not set; contact messages will be logged, not delivered");
            Arc::new(LogMailer)
        }
    };

    // Start the spotlight rotation; the handle stops the timer on shutdown
    let spotlight = Arc::new(AtomicUsize::new(0));
    let rotator = Rotator::spawn(
        content.projects.clone(),
        ROTATION_PERIOD,
        spotlight.clone(),
    );
    info!("Spotlight rotation started ({}s period)", ROTATION_PERIOD.as_secs());

    // Build app state
    let state = AppState {
        config: config.clone(),
        content,
        mailer,
        spotlight,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    drop(rotator);
    Ok(())
}
