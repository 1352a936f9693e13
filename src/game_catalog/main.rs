mod games;
mod model;

use arcadia::{
    catalog::CatalogClient,
    signals::shutdown_signal,
    utils::{self, configure_tracing},
};
use axum::{http::HeaderValue, serve, Router};
use games::get_games;
use std::{error::Error, sync::OnceLock};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

// Host variables
static HOST: OnceLock<String> = OnceLock::new();
static LOG_LEVEL: OnceLock<String> = OnceLock::new();

// Frontend origin allowed by CORS
static CLIENT_ORIGIN: OnceLock<String> = OnceLock::new();

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Initialize env variables
    init_env();

    // Configure logging
    configure_tracing(LOG_LEVEL.get().unwrap());

    // Catalog client (fatal when no api key is configured)
    let catalog_client: CatalogClient = CatalogClient::new(None)?;

    // Build application and listen to incoming requests.
    let app: Router = build_app(catalog_client);
    let listener: TcpListener = TcpListener::bind(HOST.get().unwrap()).await?;

    // Run the app.
    serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

// Initialize env variables
fn init_env() {
    HOST.get_or_init(|| utils::get_env_var("GAME_CATALOG_HOST"));
    LOG_LEVEL.get_or_init(|| utils::get_env_var("LOG_LEVEL"));
    CLIENT_ORIGIN.get_or_init(|| utils::get_env_var("CLIENT_ORIGIN"));
}

/// Builds the application.
fn build_app(catalog_client: CatalogClient) -> Router {
    let origin: HeaderValue = HeaderValue::from_str(CLIENT_ORIGIN.get().unwrap()).unwrap();

    Router::new()
        .route("/api/games", axum::routing::get(get_games))
        .with_state(catalog_client)
        .layer(
            // Axum recommends to use tower::ServiceBuilder to apply multiple middleware at once, instead of repeatadly calling layer.
            // https://docs.rs/axum/latest/axum/middleware/index.html#applying-multiple-middleware
            ServiceBuilder::new().layer(
                CorsLayer::new()
                    .allow_methods(Any)
                    .allow_origin(origin)
                    .allow_headers(Any),
            ),
        )
}
