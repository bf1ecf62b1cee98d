use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use insight_backend::controllers::news::NewsController;
use insight_backend::domain::news::NewsService;
use insight_backend::infrastructure::config::{Config, LogFormat};
use insight_backend::infrastructure::http::start_http_server;
use insight_backend::infrastructure::repositories::NewsApiRepository;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        environment = ?config.environment,
        "Starting Insight Backend on {}:{}",
        config.host,
        config.port
    );

    if !config.has_news_api_key() {
        tracing::warn!("NEWS_API_KEY is not set. News requests will fail until it is configured");
    }

    tracing::info!(
        base_url = %config.news_api_base_url,
        timeout_secs = config.news_api_timeout_secs,
        page_size = config.news_page_size,
        cache_enabled = config.news_cache_enabled,
        cache_ttl_secs = config.news_cache_ttl_secs,
        "News provider configuration loaded"
    );

    let config = Arc::new(config);

    // === DEPENDENCY INJECTION SETUP ===
    // 1. Instantiate repositories
    tracing::info!("Instantiating repositories...");
    let news_repo = Arc::new(NewsApiRepository::from_config(&config)?);

    // 2. Instantiate services (inject repositories)
    tracing::info!("Instantiating services...");
    let news_service = Arc::new(NewsService::new(news_repo, config.news_page_size));

    // 3. Instantiate controllers (inject services)
    tracing::info!("Instantiating controllers...");
    let news_controller = Arc::new(NewsController::new(news_service));

    // Start HTTP server with all routes
    start_http_server(config, news_controller).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "insight_backend=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "insight_backend=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
