use std::path::Path;
use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::{Method, StatusCode, Uri},
    middleware,
    response::{IntoResponse, Json, Response},
    routing::any,
    Router,
};
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing::debug;

use crate::error::RestError;
use crate::http::cors::cors;
use crate::news::NewsService;

#[derive(Clone)]
pub struct AppState {
    pub news: Arc<NewsService>,
}

impl AppState {
    pub fn new(news: NewsService) -> Self {
        Self {
            news: Arc::new(news),
        }
    }
}

/// `/api/articles` plus static files from `static_dir` for everything else.
pub fn router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/api/articles", any(articles))
        .fallback_service(ServeDir::new(static_dir))
        .layer(middleware::from_fn(cors))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn articles(
    method: Method,
    uri: Uri,
    State(state): State<AppState>,
) -> Result<Response, RestError> {
    if method != Method::GET {
        return Ok(StatusCode::METHOD_NOT_ALLOWED.into_response());
    }

    let category = first_param(&uri, "category");
    debug!("articles requested (category: {:?})", category);
    let articles = state.news.get_articles(category.as_deref()).await?;

    Ok(Json(articles).into_response())
}

/// First value of `key` in the query string; repeated keys are ignored.
fn first_param(uri: &Uri, key: &str) -> Option<String> {
    let Query(pairs) = Query::<Vec<(String, String)>>::try_from_uri(uri).ok()?;
    pairs
        .into_iter()
        .find_map(|(name, value)| (name == key).then_some(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(uri: &str) -> Option<String> {
        first_param(&uri.parse().unwrap(), "category")
    }

    #[test]
    fn test_first_param() {
        assert_eq!(category("/api/articles"), None);
        assert_eq!(category("/api/articles?category=forex").as_deref(), Some("forex"));
        assert_eq!(
            category("/api/articles?category=general&category=forex").as_deref(),
            Some("general")
        );
        assert_eq!(
            category("/api/articles?foo=1&category=crypto%20news").as_deref(),
            Some("crypto news")
        );
        assert_eq!(category("/api/articles?category=").as_deref(), Some(""));
    }
}
