use std::sync::Arc;

use tracing::{debug, info};

use crate::news::cache::CacheStore;
use crate::news::error::NewsError;
use crate::news::fallback::FallbackSelector;
use crate::news::sample::sample_articles;
use crate::news::source::NewsSource;
use crate::news::types::Article;

pub const DEFAULT_CATEGORY: &str = "general";

/// Maps a missing or blank category to the default one. Anything else is
/// passed through untouched.
pub fn normalize_category(category: Option<&str>) -> &str {
    match category {
        Some(category) if !category.trim().is_empty() => category,
        _ => DEFAULT_CATEGORY,
    }
}

/// Serves articles from the cache, sample data or the upstream source.
///
/// Concurrent misses for the same category are not deduplicated; each one
/// fetches and the last to finish wins the cache slot.
pub struct NewsService {
    cache: Arc<CacheStore>,
    fallback: FallbackSelector,
    source: Arc<dyn NewsSource>,
}

impl NewsService {
    pub fn new(
        cache: Arc<CacheStore>,
        fallback: FallbackSelector,
        source: Arc<dyn NewsSource>,
    ) -> Self {
        Self {
            cache,
            fallback,
            source,
        }
    }

    pub async fn get_articles(&self, category: Option<&str>) -> Result<Vec<Article>, NewsError> {
        let category = normalize_category(category);

        if let Some(articles) = self.cache.get(category).await {
            debug!("cache hit for '{}'", category);
            return Ok(articles);
        }

        let articles = if self.fallback.use_sample_data() {
            info!("serving sample data for '{}'", category);
            sample_articles()
        } else {
            self.source.fetch(category).await?
        };

        self.cache.set(category, articles.clone()).await;
        Ok(articles)
    }
}
