use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::news::env::{Environment, FINNHUB_API_KEY, FINNHUB_BASE_URL};
use crate::news::error::NewsError;
use crate::news::source::NewsSource;
use crate::news::types::{Article, FinnhubArticle};

pub const DEFAULT_BASE_URL: &str = "https://finnhub.io/api/v1";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Connection settings, resolved from the environment on each fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinnhubConfig {
    pub api_key: String,
    pub base_url: String,
}

impl FinnhubConfig {
    pub fn from_env(env: &dyn Environment) -> Result<Self, NewsError> {
        let api_key = env
            .non_empty(FINNHUB_API_KEY)
            .ok_or(NewsError::MissingCredential)?;
        let base_url = env
            .non_empty(FINNHUB_BASE_URL)
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Ok(Self { api_key, base_url })
    }

    pub fn news_url(&self) -> String {
        format!("{}/news", self.base_url.trim_end_matches('/'))
    }
}

pub struct FinnhubClient {
    http: Client,
    env: Arc<dyn Environment>,
}

impl FinnhubClient {
    pub fn new(env: Arc<dyn Environment>, timeout: Duration) -> Result<Self, NewsError> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self { http, env })
    }
}

#[async_trait]
impl NewsSource for FinnhubClient {
    async fn fetch(&self, category: &str) -> Result<Vec<Article>, NewsError> {
        let config = FinnhubConfig::from_env(self.env.as_ref())?;

        debug!("fetching '{}' news from {}", category, config.base_url);
        let response = self
            .http
            .get(config.news_url())
            .query(&[("category", category), ("token", config.api_key.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(NewsError::Upstream(status.to_string()));
        }

        let body = response.bytes().await?;
        let records: Vec<FinnhubArticle> =
            serde_json::from_slice(&body).map_err(|e| NewsError::Decode(e.to_string()))?;

        let articles = records
            .into_iter()
            .map(Article::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        debug!("fetched {} '{}' articles", articles.len(), category);
        Ok(articles)
    }
}
