use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid coordinates")]
    InvalidCoordinates,

    #[error("Spot not found")]
    SpotNotFound,

    #[error("Not found")]
    NotFound,

    #[error("Internal server error")]
    Internal,
}

impl From<signpost::error::Error> for AppError {
    fn from(err: signpost::error::Error) -> Self {
        match err {
            signpost::error::Error::InvalidCoordinate { .. } => AppError::InvalidCoordinates,
            signpost::error::Error::SpotNotFound(_) => AppError::SpotNotFound,
            _ => AppError::Internal,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::InvalidCoordinates => StatusCode::BAD_REQUEST,
            AppError::SpotNotFound | AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
