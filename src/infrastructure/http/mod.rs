pub mod request_id;

use axum::{http::Method, middleware, routing::get, Router};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::controllers::{health, locales, news::NewsController};
use crate::infrastructure::config::Config;

pub use request_id::{request_id_middleware, RequestId, X_REQUEST_ID};

/// Build the application router with all routes and layers
pub fn create_router(config: Arc<Config>, news_controller: Arc<NewsController>) -> Router {
    // News routes (public, read-only)
    let news_routes = Router::new()
        .route("/api/news", get(NewsController::get_news))
        .with_state(news_controller);

    let cors = CorsLayer::new()
        .allow_methods([Method::GET])
        .allow_origin(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::health_ready))
        .with_state(config)
        .route("/api/locales", get(locales::get_locales))
        .merge(news_routes)
        .layer(cors)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
}

/// Start the HTTP server with all routes configured
pub async fn start_http_server(
    config: Arc<Config>,
    news_controller: Arc<NewsController>,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = create_router(config.clone(), news_controller);

    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
