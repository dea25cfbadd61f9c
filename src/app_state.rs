use std::sync::Arc;
use thiserror::Error;
use tracing::info;

use crate::{
    config::Config,
    extractor::ContentExtractor,
    fetcher::{FetchError, Fetcher},
    model::{ArtifactError, load_artifacts},
    predict::PredictionService,
    preprocessing::{StopwordError, Stopwords, TextNormalizer},
};

/// Anything that stops the service from coming up. Never recovered from.
#[derive(Error, Debug)]
pub enum StartupError {
    #[error("stopwords: {0}")]
    Stopwords(#[from] StopwordError),

    #[error("artifacts: {0}")]
    Artifacts(#[from] ArtifactError),

    #[error("http client: {0}")]
    Fetcher(#[from] FetchError),
}

#[derive(Clone)]
pub struct AppState {
    pub prediction: Arc<PredictionService>,
}

impl AppState {
    pub fn new(prediction: PredictionService) -> Self {
        Self {
            prediction: Arc::new(prediction),
        }
    }

    /// Loads stopwords and both artifacts and wires the real extractor.
    pub fn from_config(config: &Config) -> Result<Self, StartupError> {
        let stopwords = match config.stopwords_path() {
            Some(path) => Stopwords::from_file(path)?,
            None => Stopwords::english(),
        };
        info!(count = stopwords.len(), "stopwords loaded");

        let artifacts = load_artifacts(config.model_path(), config.vectorizer_path())?;

        let fetcher = Fetcher::new(config.fetch_timeout(), config.fetch_user_agent())?;
        let extractor = ContentExtractor::new(fetcher, config.min_article_length());

        Ok(Self::new(PredictionService::new(
            Arc::new(extractor),
            Arc::new(artifacts.vectorizer),
            Arc::new(artifacts.classifier),
            TextNormalizer::new(stopwords),
            config.min_text_length(),
        )))
    }
}
