use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::games::dtos::ErrorResponse;

/// Client-visible failures. The cause text is embedded but its kind is not
/// distinguished: unreachable upstream, bad status and undecodable pages all
/// collapse into the same variant.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Error fetching game details: {0}")]
    GameLookup(String),

    #[error("Error searching games: {0}")]
    Search(String),
}

impl StoreError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::GameLookup(_) => StatusCode::NOT_FOUND,
            Self::Search(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for StoreError {
    fn into_response(self) -> Response {
        (
            self.status_code(),
            Json(ErrorResponse {
                detail: self.to_string(),
            }),
        )
            .into_response()
    }
}
