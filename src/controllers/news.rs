use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use std::sync::Arc;

use crate::{
    domain::news::{FilterParams, Filters, NewsResponse, NewsServiceApi},
    error::{AppError, AppResult},
};

pub struct NewsController {
    news_service: Arc<dyn NewsServiceApi>,
}

impl NewsController {
    pub fn new(news_service: Arc<dyn NewsServiceApi>) -> Self {
        Self { news_service }
    }

    /// GET /api/news - Aggregated, clustered feed for the given filters
    pub async fn get_news(
        State(controller): State<Arc<NewsController>>,
        params: Result<Query<FilterParams>, QueryRejection>,
    ) -> AppResult<Json<NewsResponse>> {
        let Query(params) = params.map_err(|e| AppError::BadRequest(e.body_text()))?;
        let filters = Filters::from_params(params)?;

        tracing::debug!(filters = ?filters, "News requested");

        let response = controller.news_service.get_news(filters).await?;
        Ok(Json(response))
    }
}
