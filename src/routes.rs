use axum::{
    Router,
    extract::Request,
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use tracing::info_span;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    app_state::AppState,
    health,
    predict::{dtos, handlers},
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "News Credibility Analysis API",
        version = "1.0.0",
        description = "Classifies news articles as real or fake from raw text or a URL"
    ),
    paths(health::home, handlers::predict_news, handlers::predict_batch),
    components(schemas(
        health::HealthResponse,
        dtos::PredictRequest,
        dtos::PredictResponse,
        dtos::InputSource,
        dtos::BatchPredictRequest,
        dtos::BatchPredictResponse,
        dtos::BatchItemResult,
        dtos::ErrorResponse
    )),
    tags(
        (name = "health", description = "Liveness"),
        (name = "predict", description = "Credibility classification")
    )
)]
pub struct ApiDoc;

pub fn router(state: AppState) -> Router {
    let middleware = ServiceBuilder::new()
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request| {
                let request_id = request
                    .headers()
                    .get("x-request-id")
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or("-");
                info_span!(
                    "http_request",
                    method = %request.method(),
                    uri = %request.uri(),
                    request_id
                )
            }),
        )
        .layer(PropagateRequestIdLayer::x_request_id());

    Router::new()
        .route("/", get(health::home))
        .route("/predict", post(handlers::predict_news))
        .route("/predict/batch", post(handlers::predict_batch))
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(middleware)
        .with_state(state)
}
