use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;
use tracing::info;

use crate::model::{
    classifier::LinearClassifier, errors::ArtifactError, vectorizer::TfidfVectorizer,
    vectorizer::Vectorizer,
};

/// The two frozen training outputs the service needs, loaded together so
/// they can be checked against each other.
#[derive(Debug, Clone)]
pub struct Artifacts {
    pub vectorizer: TfidfVectorizer,
    pub classifier: LinearClassifier,
}

/// Reads and validates both artifacts. Any failure here is meant to abort
/// startup.
pub fn load_artifacts(model_path: &Path, vectorizer_path: &Path) -> Result<Artifacts, ArtifactError> {
    let vectorizer: TfidfVectorizer = read_json("vectorizer", vectorizer_path)?;
    vectorizer.validate()?;

    let classifier: LinearClassifier = read_json("model", model_path)?;
    classifier.validate()?;

    if classifier.n_features() != vectorizer.dimension() {
        return Err(ArtifactError::Invalid {
            artifact: "model",
            reason: format!(
                "model expects {} features but the vectorizer produces {}",
                classifier.n_features(),
                vectorizer.dimension()
            ),
        });
    }

    info!(
        model = %model_path.display(),
        vectorizer = %vectorizer_path.display(),
        vocabulary = vectorizer.vocabulary_size(),
        features = vectorizer.dimension(),
        classes = ?classifier.classes(),
        "artifacts loaded"
    );

    Ok(Artifacts {
        vectorizer,
        classifier,
    })
}

fn read_json<T: DeserializeOwned>(artifact: &'static str, path: &Path) -> Result<T, ArtifactError> {
    let raw = fs::read(path).map_err(|source| ArtifactError::Read {
        artifact,
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_slice(&raw).map_err(|source| ArtifactError::Parse {
        artifact,
        path: path.to_path_buf(),
        source,
    })
}
