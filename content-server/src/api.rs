use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use content_variation::{Content, EntityKey, VariationError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("invalid identifier: {0}")]
    InvalidIdentifier(String),
    #[error("batch holds {size} keys, the limit is {limit}")]
    BatchTooLarge { size: usize, limit: usize },

    // Pool misconfiguration. The page build must not publish anything for this key.
    #[error(transparent)]
    Variation(#[from] VariationError),
    #[error("internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ContentError {
    fn into_response(self) -> Response {
        match self {
            ContentError::InvalidIdentifier(_) | ContentError::BatchTooLarge { .. } => {
                (StatusCode::BAD_REQUEST, self.to_string())
            }

            ContentError::Variation(_) | ContentError::Internal(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
        }
        .into_response()
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct BatchRequest {
    pub keys: Vec<EntityKey>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BatchResult {
    Ok(Content),
    Error(String),
}

#[derive(Debug, Serialize)]
pub struct BatchResponse {
    pub results: Vec<BatchResult>,
}
