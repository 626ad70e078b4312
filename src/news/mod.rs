pub mod cache;
pub mod env;
pub mod error;
pub mod fallback;
pub mod finnhub;
pub mod sample;
pub mod service;
pub mod source;
pub mod types;

pub use cache::CacheStore;
pub use error::NewsError;
pub use fallback::FallbackSelector;
pub use finnhub::FinnhubClient;
pub use service::NewsService;
pub use source::NewsSource;
pub use types::Article;
