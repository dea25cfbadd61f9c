use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

use crate::model::ModelError;
use crate::predict::dtos::ErrorResponse;

/// Caller mistakes. The messages are returned verbatim.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidInput {
    #[error("Please provide either news text or a valid URL.")]
    MissingInput,
    #[error("Unable to extract valid article content from the provided URL.")]
    ExtractionFailed,
    #[error("Input text is too short or invalid for analysis.")]
    TooShort,
    #[error("Text preprocessing resulted in empty content.")]
    EmptyAfterCleaning,
}

#[derive(Error, Debug, PartialEq)]
pub enum PredictError {
    #[error(transparent)]
    InvalidInput(#[from] InvalidInput),

    #[error("inference failed: {0}")]
    Inference(#[from] ModelError),
}

impl PredictError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidInput(_) => StatusCode::BAD_REQUEST,
            Self::Inference(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// What the caller gets to see.
    pub fn public_message(&self) -> String {
        match self {
            Self::InvalidInput(reason) => reason.to_string(),
            Self::Inference(_) => "Internal server error".to_string(),
        }
    }
}

impl IntoResponse for PredictError {
    fn into_response(self) -> Response {
        if let Self::Inference(err) = &self {
            error!(error = %err, "prediction failed");
        }

        (
            self.status(),
            Json(ErrorResponse {
                error: self.public_message(),
            }),
        )
            .into_response()
    }
}
