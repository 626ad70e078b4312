use async_trait::async_trait;

use crate::news::{error::NewsError, types::Article};

#[async_trait]
pub trait NewsSource: Send + Sync {
    async fn fetch(&self, category: &str) -> Result<Vec<Article>, NewsError>;
}
