mod config;
mod db;
mod errors;
mod extract;
mod layout;
mod models;
mod render;
mod resumes;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::create_pool;
use crate::layout::default_geometry;
use crate::resumes::store::PgResumeStore;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting resume-render v{}", env!("CARGO_PKG_VERSION"));

    // Page geometry is fixed for the life of the process
    let geometry = default_geometry(config.page_size);
    geometry
        .validate()
        .context("default page geometry is not renderable")?;
    info!(
        "Page geometry: {:?} {}x{}pt, default language {:?}",
        config.page_size, geometry.page_width, geometry.page_height, config.default_language
    );

    // Initialize PostgreSQL-backed résumé store
    let pool = create_pool(&config.database_url).await?;
    let store = Arc::new(PgResumeStore::new(pool));

    let state = AppState {
        store,
        config: config.clone(),
        geometry,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
