use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const SUCCESS_MESSAGE: &str = "Credibility analysis completed successfully.";
pub const MAX_BATCH_ITEMS: usize = 32;

/// Body of `POST /predict`. When both fields are set the URL wins and
/// `text` is ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize, ToSchema)]
pub struct PredictRequest {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

impl PredictRequest {
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            url: None,
        }
    }

    pub fn from_url(url: impl Into<String>) -> Self {
        Self {
            text: None,
            url: Some(url.into()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum InputSource {
    Url,
    Text,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PredictResponse {
    pub status: String,
    pub prediction: String,
    /// Highest class probability, in percent, two decimals.
    pub confidence_score: f64,
    pub input_source: InputSource,
    /// Characters in the raw text before cleaning.
    pub text_length: usize,
    pub message: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct BatchPredictRequest {
    pub items: Vec<PredictRequest>,
}

impl BatchPredictRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.items.is_empty() {
            return Err("Batch must contain at least one item".to_string());
        }
        if self.items.len() > MAX_BATCH_ITEMS {
            return Err(format!(
                "Batch too large: at most {} items allowed",
                MAX_BATCH_ITEMS
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BatchItemResult {
    pub index: usize,
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<PredictResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BatchPredictResponse {
    pub results: Vec<BatchItemResult>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}
