use std::error::Error;

use axum::response::{IntoResponse, Response};
use axum::http::{header, StatusCode};
use thiserror::Error;
use tracing::error;

use crate::news::NewsError;

pub const FETCH_FAILED: &str = "Failed to fetch news";

#[derive(Debug, Error)]
pub enum RestError {
    #[error("Error fetching news")]
    News(#[from] NewsError),
}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        error!("{}: {:?}", self, self.source());

        let status = match self {
            RestError::News(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (
            status,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            FETCH_FAILED,
        )
            .into_response()
    }
}
