use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{error, info};

use crate::{
    app_state::AppState,
    predict::{
        dtos::{
            BatchItemResult, BatchPredictRequest, BatchPredictResponse, ErrorResponse,
            PredictRequest, PredictResponse,
        },
        errors::PredictError,
    },
};

#[utoipa::path(
    post,
    path = "/predict",
    tag = "predict",
    request_body = PredictRequest,
    responses(
        (status = 200, description = "Article classified", body = PredictResponse),
        (status = 400, description = "Missing, too short or unreadable input", body = ErrorResponse),
        (status = 500, description = "Inference failed", body = ErrorResponse)
    )
)]
pub async fn predict_news(
    State(state): State<AppState>,
    Json(payload): Json<PredictRequest>,
) -> Result<Json<PredictResponse>, PredictError> {
    let prediction = state.prediction.predict(&payload).await?;
    Ok(Json(prediction.into()))
}

#[utoipa::path(
    post,
    path = "/predict/batch",
    tag = "predict",
    request_body = BatchPredictRequest,
    responses(
        (status = 200, description = "Per-item results, in request order", body = BatchPredictResponse),
        (status = 400, description = "Empty or oversized batch", body = ErrorResponse)
    )
)]
pub async fn predict_batch(
    State(state): State<AppState>,
    Json(payload): Json<BatchPredictRequest>,
) -> Response {
    if let Err(error) = payload.validate() {
        return (StatusCode::BAD_REQUEST, Json(ErrorResponse { error })).into_response();
    }

    let mut results = Vec::with_capacity(payload.items.len());
    for (index, item) in payload.items.iter().enumerate() {
        let result = match state.prediction.predict(item).await {
            Ok(prediction) => BatchItemResult {
                index,
                ok: true,
                result: Some(prediction.into()),
                error: None,
            },
            Err(err) => {
                if let PredictError::Inference(cause) = &err {
                    error!(index, error = %cause, "batch item failed");
                }
                BatchItemResult {
                    index,
                    ok: false,
                    result: None,
                    error: Some(err.public_message()),
                }
            }
        };
        results.push(result);
    }

    info!(
        items = results.len(),
        failed = results.iter().filter(|r| !r.ok).count(),
        "batch prediction complete"
    );
    Json(BatchPredictResponse { results }).into_response()
}
