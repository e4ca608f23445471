mod api;
mod config;
mod directors;
mod error;
mod genres;
mod loader;
mod models;
mod pipeline;
mod stats;
mod summary;
mod tagger;
mod text;
mod trend;

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{routing::get, Router};
use config::Config;
use models::AggregateBundle;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub bundle: Arc<AggregateBundle>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "filmography_insights_api=info,tower_http=info".into()),
        )
        .init();

    let config = Config::from_env()?;

    // The whole pipeline runs once, before the listener binds. The bundle
    // is immutable from here on.
    let records = loader::load_filtered(&config.dataset_path, &config.analysis.subject)
        .context("loading movie dataset")?;
    let bundle = pipeline::build_aggregates(&records, &config.analysis)
        .context("building aggregates")?;

    let state = AppState {
        config: config.clone(),
        bundle: Arc::new(bundle),
    };

    let app = Router::new()
        .route("/healthz", get(api::healthz))
        .route("/v1/summary", get(api::get_summary))
        .route("/v1/genres", get(api::get_genres))
        .route("/v1/trend", get(api::get_trend))
        .route("/v1/directors", get(api::get_directors))
        .route("/v1/words/{genre}/{field}", get(api::get_word_frequency))
        .route("/v1/bundle", get(api::get_bundle))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!("filmography-insights-api listening on {}", config.bind_addr);
    axum::serve(listener, app).await?;
    Ok(())
}
