#![allow(dead_code)]

use axum::{Router, body::Body, http::Request, response::Response};
use credence::{app_state::AppState, config::Config, routes};
use serde_json::Value;
use tower::ServiceExt;

pub const MODEL_FIXTURE: &str = "tests/fixtures/model.json";
pub const VECTORIZER_FIXTURE: &str = "tests/fixtures/vectorizer.json";

pub const REAL_TEXT: &str = "The government officials announced the annual budget report to parliament on Tuesday morning.";
pub const FAKE_TEXT: &str = "Shocking secret miracle cure exposed: the hoax they hid, the truth about aliens revealed!";

pub fn test_app() -> Router {
    let config = Config::new("127.0.0.1:0", MODEL_FIXTURE, VECTORIZER_FIXTURE);
    let state = AppState::from_config(&config).expect("fixture artifacts should load");
    routes::router(state)
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn json_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

pub fn article_page(title: &str, paragraphs: &[&str]) -> String {
    let body: String = paragraphs.iter().map(|p| format!("<p>{}</p>", p)).collect();
    format!(
        "<!DOCTYPE html><html><head><meta charset=\"utf-8\"><title>{title}</title></head>\
         <body><nav>Home | Politics</nav><article><h1>{title}</h1>{body}</article></body></html>"
    )
}
