//! Frozen inference artifacts: the TF-IDF vectorizer and the linear
//! classifier, plus the label table applied to the classifier's output.

pub mod artifacts;
pub mod classifier;
pub mod errors;
pub mod features;
pub mod labels;
pub mod vectorizer;

pub use artifacts::{Artifacts, load_artifacts};
pub use classifier::{Classifier, LinearClassifier};
pub use errors::{ArtifactError, ModelError};
pub use features::FeatureVector;
pub use labels::{confidence_percent, label_for};
pub use vectorizer::{Norm, TfidfVectorizer, Vectorizer};
