pub mod handlers;
mod types;

pub use types::{ErrorResponse, HealthResponse};

use crate::{chef::Chef, config::Config, llm::OpenAiClient, Result};
use axum::{
    Router,
    routing::{get, post},
};
use std::{net::SocketAddr, sync::Arc};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

/// Builds the HTTP routes around an already constructed chef.
pub fn router(chef: Arc<Chef>) -> Router {
    let app_state = handlers::AppState { chef };

    Router::new()
        .route("/api/chef-recommendation", post(handlers::chef_recommendation))
        .route("/generate-recipe/", post(handlers::generate_recipe))
        .route("/generate-recipe-by-name/", post(handlers::generate_recipe_by_name))
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}

pub async fn run(config: Config) -> Result<()> {
    // One provider client for the lifetime of the process
    let llm = OpenAiClient::new(config.llm.clone())?;
    info!(
        "Using model {} at {}",
        llm.model(),
        config.llm.base_url
    );

    let chef = Arc::new(Chef::new(Arc::new(llm), &config.llm));
    let app = router(chef);

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
