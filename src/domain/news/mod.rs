pub mod cluster;
pub mod error;
pub mod filters;
pub mod model;
pub mod normalize;
pub mod query;
pub mod rank;
pub mod service;

pub use error::NewsServiceError;
pub use filters::{FilterParams, Filters};
pub use model::{Article, Category, FeedItem, NewsResponse, SortOrder, StoryCluster, TimeWindow};
pub use normalize::{RawArticle, RawSource};
pub use query::{QueryMode, UpstreamQuery};
pub use service::{NewsService, NewsServiceApi, DEFAULT_PAGE_SIZE};
