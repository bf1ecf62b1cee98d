use serde::Deserialize;
use std::env;

pub const DEFAULT_NEWS_API_BASE_URL: &str = "https://newsapi.org/v2";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub environment: Environment,
    pub log_format: LogFormat,
    // Upstream news API
    pub news_api_key: Option<String>,
    pub news_api_base_url: String,
    pub news_api_timeout_secs: u64,
    pub news_page_size: u32,
    // Upstream response cache
    pub news_cache_enabled: bool,
    pub news_cache_ttl_secs: u64,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Production,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        let config = Config {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()?,
            environment: env::var("ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string())
                .parse::<String>()
                .map(|s| match s.as_str() {
                    "production" => Environment::Production,
                    _ => Environment::Development,
                })?,
            log_format: env::var("LOG_FORMAT")
                .unwrap_or_else(|_| "pretty".to_string())
                .parse::<String>()
                .map(|s| match s.as_str() {
                    "json" => LogFormat::Json,
                    _ => LogFormat::Pretty,
                })?,
            // A missing key is not a boot failure: every request reports it instead
            news_api_key: env::var("NEWS_API_KEY")
                .ok()
                .map(|key| key.trim().to_string())
                .filter(|key| !key.is_empty()),
            news_api_base_url: env::var("NEWS_API_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_NEWS_API_BASE_URL.to_string()),
            news_api_timeout_secs: env::var("NEWS_API_TIMEOUT_SECS")
                .unwrap_or_else(|_| "10".to_string())
                .parse()?,
            news_page_size: env::var("NEWS_PAGE_SIZE")
                .unwrap_or_else(|_| "100".to_string())
                .parse()?,
            news_cache_enabled: env::var("NEWS_CACHE_ENABLED")
                .unwrap_or_else(|_| "true".to_string())
                .parse::<String>()
                .map(|s| s.to_lowercase() == "true")
                .unwrap_or(true),
            news_cache_ttl_secs: env::var("NEWS_CACHE_TTL_SECS")
                .unwrap_or_else(|_| "300".to_string())
                .parse()?,
        };

        Ok(config)
    }

    pub fn has_news_api_key(&self) -> bool {
        self.news_api_key.is_some()
    }
}
