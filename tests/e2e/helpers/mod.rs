use axum::Router;
use insight_backend::infrastructure::config::{
    Config, Environment, LogFormat, DEFAULT_NEWS_API_BASE_URL,
};
use std::sync::Arc;
use test_context::AsyncTestContext;
use tokio::net::TcpListener;

pub mod api_client;
pub mod assertions;

use api_client::TestClient;
use upstream_mocks::StubNewsRepository;

pub struct TestContext {
    pub client: TestClient,
    #[allow(dead_code)]
    pub config: Config,
    pub upstream: Arc<StubNewsRepository>,
}

impl AsyncTestContext for TestContext {
    fn setup() -> impl std::future::Future<Output = Self> + Send {
        async {
            let config = test_config(Some("test-news-api-key"));
            let upstream = Arc::new(StubNewsRepository::new(true));

            let client = spawn_app(config.clone(), upstream.clone()).await;

            Self {
                client,
                config,
                upstream,
            }
        }
    }

    fn teardown(self) -> impl std::future::Future<Output = ()> + Send {
        async {
            // Server task is dropped with the runtime
        }
    }
}

/// Test configuration; the cache is disabled to avoid cross-test pollution
pub fn test_config(news_api_key: Option<&str>) -> Config {
    Config {
        host: "127.0.0.1".to_string(),
        port: 0, // Will be assigned by the OS
        environment: Environment::Development,
        log_format: LogFormat::Pretty,
        news_api_key: news_api_key.map(str::to_string),
        news_api_base_url: DEFAULT_NEWS_API_BASE_URL.to_string(),
        news_api_timeout_secs: 5,
        news_page_size: 100,
        news_cache_enabled: false,
        news_cache_ttl_secs: 300,
    }
}

/// Start the app against the given upstream and return a client for it
pub async fn spawn_app(config: Config, upstream: Arc<StubNewsRepository>) -> TestClient {
    let app = create_app(config, upstream);

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind listener");
    let addr = listener.local_addr().expect("Failed to get local addr");
    let base_url = format!("http://{}", addr);

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    TestClient::new(&base_url)
}

fn create_app(config: Config, upstream: Arc<StubNewsRepository>) -> Router {
    use insight_backend::{
        controllers::news::NewsController, domain::news::NewsService,
        infrastructure::http::create_router,
    };

    let config = Arc::new(config);

    let news_service = Arc::new(NewsService::new(upstream, config.news_page_size));
    let news_controller = Arc::new(NewsController::new(news_service));

    create_router(config, news_controller)
}
