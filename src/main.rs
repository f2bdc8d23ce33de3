//! order-api entry point.
//!
//! Sets up configuration and tracing, starts the order actor, and serves the
//! HTTP router until Ctrl-C. Handlers live in `http::routes`.

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use order_api::config::Config;
use order_api::http::{self, AppState};
use order_api::lifecycle::{setup_tracing, OrderSystem};
use order_api::seed::{self, SeedData};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::{info, warn, Level};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Silent if the file does not exist.
    let _ = dotenvy::from_filename(".env.local");

    let config = Config::parse();
    setup_tracing(&config.log_level);

    let seed = match &config.seed {
        Some(path) => seed::load(path)?,
        None => SeedData::default(),
    };
    info!(
        orders = seed.orders.len(),
        dishes = seed.dishes.len(),
        "Seed data loaded"
    );

    let system = OrderSystem::start(usize::from(config.channel_capacity), seed.orders);
    let state = Arc::new(AppState::new(system.order_client.clone(), seed.dishes));

    let app = http::build_router(state)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(CorsLayer::permissive());

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("bind {}", config.addr))?;
    info!("order-api listening on http://{}", config.addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server crashed")?;

    system.shutdown().await.context("order actor failed")?;
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Ctrl-C received, shutting down"),
        Err(e) => warn!(error = %e, "failed to listen for Ctrl-C"),
    }
}
