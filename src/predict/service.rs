use std::sync::Arc;
use tracing::{debug, info, instrument};

use crate::extractor::ArticleSource;
use crate::model::{Classifier, ModelError, Vectorizer, confidence_percent, label_for};
use crate::predict::{
    dtos::{InputSource, PredictRequest, PredictResponse, SUCCESS_MESSAGE},
    errors::{InvalidInput, PredictError},
};
use crate::preprocessing::{TextNormalizer, is_valid_input};

/// Outcome of one classification.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub class_code: i64,
    pub label: String,
    /// Percentage in `[0, 100]`, two decimals.
    pub confidence: f64,
    pub source: InputSource,
    /// Characters in the raw text before cleaning.
    pub text_length: usize,
}

impl From<Prediction> for PredictResponse {
    fn from(prediction: Prediction) -> Self {
        Self {
            status: "success".to_string(),
            prediction: prediction.label,
            confidence_score: prediction.confidence,
            input_source: prediction.source,
            text_length: prediction.text_length,
            message: SUCCESS_MESSAGE.to_string(),
        }
    }
}

/// Request orchestration: pick the input, validate, clean, vectorize,
/// classify. Every dependency is shared read-only; nothing is mutated after
/// construction, so one instance serves all requests.
pub struct PredictionService {
    source: Arc<dyn ArticleSource + Send + Sync>,
    vectorizer: Arc<dyn Vectorizer + Send + Sync>,
    classifier: Arc<dyn Classifier + Send + Sync>,
    normalizer: TextNormalizer,
    min_text_length: usize,
}

impl PredictionService {
    pub fn new(
        source: Arc<dyn ArticleSource + Send + Sync>,
        vectorizer: Arc<dyn Vectorizer + Send + Sync>,
        classifier: Arc<dyn Classifier + Send + Sync>,
        normalizer: TextNormalizer,
        min_text_length: usize,
    ) -> Self {
        Self {
            source,
            vectorizer,
            classifier,
            normalizer,
            min_text_length,
        }
    }

    #[instrument(skip_all, fields(source = tracing::field::Empty))]
    pub async fn predict(&self, request: &PredictRequest) -> Result<Prediction, PredictError> {
        let text = request.text.as_deref().unwrap_or_default().trim();
        let url = request.url.as_deref().unwrap_or_default().trim();

        // URL takes precedence; `text` is ignored when both are present.
        let (raw_text, source) = if !url.is_empty() {
            let extracted = self.source.extract_text(url).await;
            if extracted.is_empty() {
                return Err(InvalidInput::ExtractionFailed.into());
            }
            (extracted, InputSource::Url)
        } else if !text.is_empty() {
            (text.to_string(), InputSource::Text)
        } else {
            return Err(InvalidInput::MissingInput.into());
        };
        tracing::Span::current().record("source", tracing::field::debug(source));

        if !is_valid_input(&raw_text, self.min_text_length) {
            return Err(InvalidInput::TooShort.into());
        }

        let cleaned = self.normalizer.normalize(&raw_text);
        if cleaned.is_empty() {
            return Err(InvalidInput::EmptyAfterCleaning.into());
        }

        let features = self.vectorizer.transform(&cleaned);
        debug!(
            tokens = cleaned.split(' ').count(),
            features = features.nnz(),
            "text vectorized"
        );

        let class_code = self.classifier.predict(&features)?;
        let probabilities = self.classifier.predict_proba(&features)?;
        if probabilities.is_empty() {
            return Err(ModelError::EmptyProbabilities.into());
        }
        let confidence = confidence_percent(&probabilities);
        let label = label_for(class_code).into_owned();
        let text_length = raw_text.chars().count();

        info!(
            label = %label,
            confidence,
            text_length,
            "prediction complete"
        );

        Ok(Prediction {
            class_code,
            label,
            confidence,
            source,
            text_length,
        })
    }
}
