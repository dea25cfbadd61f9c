use std::path::Path;

use credence::model::{ArtifactError, Classifier, Vectorizer, label_for, load_artifacts};
use credence::preprocessing::TextNormalizer;

const MODEL: &str = "tests/fixtures/model.json";
const VECTORIZER: &str = "tests/fixtures/vectorizer.json";

#[test]
fn test_fixture_artifacts_load_and_agree() {
    let artifacts = load_artifacts(Path::new(MODEL), Path::new(VECTORIZER)).unwrap();

    assert_eq!(artifacts.vectorizer.dimension(), 16);
    assert_eq!(artifacts.classifier.n_features(), 16);
    assert_eq!(artifacts.classifier.classes(), &[0, 1]);
}

#[test]
fn test_end_to_end_inference_on_cleaned_text() {
    let artifacts = load_artifacts(Path::new(MODEL), Path::new(VECTORIZER)).unwrap();
    let normalizer = TextNormalizer::english();

    let cleaned = normalizer.normalize("Parliament received the BUDGET report from the minister.");
    assert_eq!(cleaned, "parliament received budget report minister");

    let features = artifacts.vectorizer.transform(&cleaned);
    assert_eq!(features.nnz(), 4);

    let code = artifacts.classifier.predict(&features).unwrap();
    let proba = artifacts.classifier.predict_proba(&features).unwrap();
    assert_eq!(label_for(code), "Real News");
    assert!(proba[1] > proba[0]);
}

#[test]
fn test_missing_model_file() {
    let err = load_artifacts(Path::new("tests/fixtures/nope.json"), Path::new(VECTORIZER))
        .unwrap_err();

    match err {
        ArtifactError::Read { artifact, path, .. } => {
            assert_eq!(artifact, "model");
            assert!(path.ends_with("nope.json"));
        }
        other => panic!("Expected Read error, got {other:?}"),
    }
}

#[test]
fn test_missing_vectorizer_file() {
    let err =
        load_artifacts(Path::new(MODEL), Path::new("tests/fixtures/nope.json")).unwrap_err();

    assert!(matches!(
        err,
        ArtifactError::Read {
            artifact: "vectorizer",
            ..
        }
    ));
}

#[test]
fn test_truncated_model_file() {
    let err = load_artifacts(Path::new("tests/fixtures/broken.json"), Path::new(VECTORIZER))
        .unwrap_err();

    assert!(matches!(err, ArtifactError::Parse { artifact: "model", .. }));
}

#[test]
fn test_model_and_vectorizer_must_agree_on_dimension() {
    let err = load_artifacts(Path::new("tests/fixtures/model_wide.json"), Path::new(VECTORIZER))
        .unwrap_err();

    match err {
        ArtifactError::Invalid { artifact, reason } => {
            assert_eq!(artifact, "model");
            assert!(reason.contains("3"));
            assert!(reason.contains("16"));
        }
        other => panic!("Expected Invalid error, got {other:?}"),
    }
}
