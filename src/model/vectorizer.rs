use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::LazyLock;

use crate::model::{errors::ArtifactError, features::FeatureVector};

/// Default token pattern of the training-side vectorizer: runs of two or
/// more word characters.
static TOKEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b\w\w+\b").unwrap());

/// Maps cleaned text to a feature vector. Implementations are frozen: they
/// only transform, never fit.
#[cfg_attr(test, mockall::automock)]
pub trait Vectorizer {
    fn transform(&self, text: &str) -> FeatureVector;
    fn dimension(&self) -> usize;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Norm {
    L1,
    L2,
}

fn default_ngram_range() -> (usize, usize) {
    (1, 1)
}

fn default_norm() -> Option<Norm> {
    Some(Norm::L2)
}

/// TF-IDF weights exported from training.
///
/// ```json
/// { "vocabulary": {"senate": 0, "budget": 1}, "idf": [1.7, 2.3],
///   "ngram_range": [1, 2], "sublinear_tf": false, "norm": "l2" }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TfidfVectorizer {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f64>,
    #[serde(default = "default_ngram_range")]
    ngram_range: (usize, usize),
    #[serde(default)]
    sublinear_tf: bool,
    #[serde(default = "default_norm")]
    norm: Option<Norm>,
}

impl TfidfVectorizer {
    pub fn new(vocabulary: HashMap<String, usize>, idf: Vec<f64>) -> Result<Self, ArtifactError> {
        let vectorizer = Self {
            vocabulary,
            idf,
            ngram_range: default_ngram_range(),
            sublinear_tf: false,
            norm: default_norm(),
        };
        vectorizer.validate()?;
        Ok(vectorizer)
    }

    pub fn with_ngram_range(mut self, min: usize, max: usize) -> Result<Self, ArtifactError> {
        self.ngram_range = (min, max);
        self.validate()?;
        Ok(self)
    }

    pub fn with_sublinear_tf(mut self, sublinear_tf: bool) -> Self {
        self.sublinear_tf = sublinear_tf;
        self
    }

    pub fn with_norm(mut self, norm: Option<Norm>) -> Self {
        self.norm = norm;
        self
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// Structural checks run once after deserialization.
    pub fn validate(&self) -> Result<(), ArtifactError> {
        let invalid = |reason: String| ArtifactError::Invalid {
            artifact: "vectorizer",
            reason,
        };

        if self.idf.is_empty() {
            return Err(invalid("idf vector is empty".to_string()));
        }
        let (min_n, max_n) = self.ngram_range;
        if min_n == 0 || min_n > max_n {
            return Err(invalid(format!("bad ngram_range ({}, {})", min_n, max_n)));
        }
        if let Some((term, idx)) = self.vocabulary.iter().find(|&(_, &idx)| idx >= self.idf.len()) {
            return Err(invalid(format!(
                "term '{}' has index {} but idf has {} entries",
                term,
                idx,
                self.idf.len()
            )));
        }
        if self.idf.iter().any(|w| !w.is_finite()) {
            return Err(invalid("idf contains non-finite values".to_string()));
        }
        Ok(())
    }

    fn term_counts(&self, text: &str) -> HashMap<usize, f64> {
        let lowered = text.to_lowercase();
        let tokens: Vec<&str> = TOKEN.find_iter(&lowered).map(|m| m.as_str()).collect();
        let (min_n, max_n) = self.ngram_range;

        let mut counts: HashMap<usize, f64> = HashMap::new();
        for n in min_n..=max_n {
            for window in tokens.windows(n) {
                let gram = window.join(" ");
                if let Some(&idx) = self.vocabulary.get(&gram) {
                    *counts.entry(idx).or_insert(0.0) += 1.0;
                }
            }
        }
        counts
    }
}

impl Vectorizer for TfidfVectorizer {
    fn transform(&self, text: &str) -> FeatureVector {
        let mut entries: Vec<(usize, f64)> = self
            .term_counts(text)
            .into_iter()
            .map(|(idx, tf)| {
                let tf = if self.sublinear_tf { 1.0 + tf.ln() } else { tf };
                (idx, tf * self.idf[idx])
            })
            .collect();

        let scale = match self.norm {
            Some(Norm::L2) => entries.iter().map(|&(_, v)| v * v).sum::<f64>().sqrt(),
            Some(Norm::L1) => entries.iter().map(|&(_, v)| v.abs()).sum::<f64>(),
            None => 1.0,
        };
        if scale > 0.0 {
            for (_, value) in &mut entries {
                *value /= scale;
            }
        }

        FeatureVector::new(self.dimension(), entries)
    }

    fn dimension(&self) -> usize {
        self.idf.len()
    }
}
