use serde::{Deserialize, Serialize};

use crate::model::{
    errors::{ArtifactError, ModelError},
    features::FeatureVector,
};

/// A fitted classifier. `predict` returns the raw class code, which the
/// caller maps to a label.
#[cfg_attr(test, mockall::automock)]
pub trait Classifier {
    fn predict(&self, features: &FeatureVector) -> Result<i64, ModelError>;
    fn predict_proba(&self, features: &FeatureVector) -> Result<Vec<f64>, ModelError>;
}

/// Linear model exported from training (logistic regression).
///
/// One coefficient row means a binary model: the row scores the second
/// class against the first and probabilities come from a sigmoid. Several
/// rows mean one row per class with a softmax on top.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearClassifier {
    classes: Vec<i64>,
    coef: Vec<Vec<f64>>,
    intercept: Vec<f64>,
}

impl LinearClassifier {
    pub fn new(
        classes: Vec<i64>,
        coef: Vec<Vec<f64>>,
        intercept: Vec<f64>,
    ) -> Result<Self, ArtifactError> {
        let model = Self {
            classes,
            coef,
            intercept,
        };
        model.validate()?;
        Ok(model)
    }

    pub fn classes(&self) -> &[i64] {
        &self.classes
    }

    /// Width of each coefficient row, i.e. the feature dimension expected.
    pub fn n_features(&self) -> usize {
        self.coef.first().map(Vec::len).unwrap_or(0)
    }

    pub fn validate(&self) -> Result<(), ArtifactError> {
        let invalid = |reason: String| ArtifactError::Invalid {
            artifact: "model",
            reason,
        };

        if self.classes.len() < 2 {
            return Err(invalid(format!(
                "need at least two classes, found {}",
                self.classes.len()
            )));
        }
        let expected_rows = if self.classes.len() == 2 { 1 } else { self.classes.len() };
        let rows = self.coef.len();
        if rows != expected_rows && !(self.classes.len() == 2 && rows == 2) {
            return Err(invalid(format!(
                "{} classes need {} coefficient rows, found {}",
                self.classes.len(),
                expected_rows,
                rows
            )));
        }
        if self.intercept.len() != rows {
            return Err(invalid(format!(
                "intercept has {} entries for {} coefficient rows",
                self.intercept.len(),
                rows
            )));
        }
        let width = self.n_features();
        if width == 0 || self.coef.iter().any(|row| row.len() != width) {
            return Err(invalid("coefficient rows must be non-empty and equally wide".to_string()));
        }
        if self
            .coef
            .iter()
            .flatten()
            .chain(self.intercept.iter())
            .any(|w| !w.is_finite())
        {
            return Err(invalid("weights contain non-finite values".to_string()));
        }
        Ok(())
    }

    fn decision_function(&self, features: &FeatureVector) -> Result<Vec<f64>, ModelError> {
        let expected = self.n_features();
        if features.dimension() != expected {
            return Err(ModelError::DimensionMismatch {
                expected,
                actual: features.dimension(),
            });
        }

        let scores: Vec<f64> = self
            .coef
            .iter()
            .zip(&self.intercept)
            .map(|(row, bias)| features.dot(row) + bias)
            .collect();

        if scores.iter().any(|s| !s.is_finite()) {
            return Err(ModelError::NonFinite);
        }
        Ok(scores)
    }
}

impl Classifier for LinearClassifier {
    fn predict(&self, features: &FeatureVector) -> Result<i64, ModelError> {
        let scores = self.decision_function(features)?;
        let winner = if scores.len() == 1 {
            usize::from(scores[0] > 0.0)
        } else {
            argmax(&scores)
        };
        Ok(self.classes[winner])
    }

    fn predict_proba(&self, features: &FeatureVector) -> Result<Vec<f64>, ModelError> {
        let scores = self.decision_function(features)?;
        if scores.len() == 1 {
            let positive = sigmoid(scores[0]);
            Ok(vec![1.0 - positive, positive])
        } else {
            Ok(softmax(&scores))
        }
    }
}

fn sigmoid(x: f64) -> f64 {
    if x >= 0.0 {
        1.0 / (1.0 + (-x).exp())
    } else {
        let e = x.exp();
        e / (1.0 + e)
    }
}

fn softmax(scores: &[f64]) -> Vec<f64> {
    let max = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let exps: Vec<f64> = scores.iter().map(|s| (s - max).exp()).collect();
    let total: f64 = exps.iter().sum();
    exps.into_iter().map(|e| e / total).collect()
}

/// First index of the maximum; ties go to the lower class like the
/// training library does.
fn argmax(values: &[f64]) -> usize {
    values
        .iter()
        .enumerate()
        .fold((0, f64::NEG_INFINITY), |(best, best_v), (i, &v)| {
            if v > best_v { (i, v) } else { (best, best_v) }
        })
        .0
}
