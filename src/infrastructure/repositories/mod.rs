pub mod news_api_repository;
pub mod news_repository;

pub use news_api_repository::NewsApiRepository;
pub use news_repository::{NewsRepository, NewsRepositoryError};
