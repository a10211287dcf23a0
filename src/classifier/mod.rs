//! Classifier contract used by the prediction pipeline
//!
//! The pipeline only depends on [`Classifier`]: a fixed, ordered list of class
//! labels and a probability vector aligned to it. [`GaussianNaiveBayes`] is
//! the model fitted by the training command.

pub mod naive_bayes;

pub use naive_bayes::GaussianNaiveBayes;

use std::fmt;

use crate::error::{PredictError, Result};
use crate::models::FeatureRecord;

/// A trained probabilistic classifier over a frozen feature layout
pub trait Classifier: fmt::Debug + Send + Sync {
    /// Class labels in the model's native order
    fn classes(&self) -> &[String];

    /// Number of feature columns the model was trained on
    fn n_features(&self) -> usize;

    /// Class probabilities for one row, aligned to [`Classifier::classes`]
    fn predict_proba(&self, row: &FeatureRecord) -> Result<Vec<f64>>;

    /// Most probable class label
    fn predict(&self, row: &FeatureRecord) -> Result<&str> {
        let probabilities = self.predict_proba(row)?;
        let best = probabilities
            .iter()
            .enumerate()
            .fold(None::<(usize, f64)>, |best, (i, &p)| match best {
                Some((_, bp)) if bp >= p => best,
                _ => Some((i, p)),
            })
            .map(|(i, _)| i)
            .ok_or_else(|| PredictError::InvalidArtifact("classifier has no classes".to_string()))?;
        Ok(&self.classes()[best])
    }
}

/// Check that a row has the width a classifier expects
pub fn check_width(row: &FeatureRecord, expected: usize) -> Result<()> {
    if row.len() == expected {
        Ok(())
    } else {
        Err(PredictError::SchemaMismatch(format!(
            "classifier expects {expected} features, row has {}",
            row.len()
        )))
    }
}

/// Normalize log-scores into probabilities with the log-sum-exp trick
#[must_use]
pub fn softmax(log_scores: &[f64]) -> Vec<f64> {
    let max = log_scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if !max.is_finite() {
        let n = log_scores.len() as f64;
        return vec![1.0 / n; log_scores.len()];
    }
    let exps: Vec<f64> = log_scores.iter().map(|s| (s - max).exp()).collect();
    let total: f64 = exps.iter().sum();
    exps.into_iter().map(|e| e / total).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_softmax_sums_to_one() {
        let p = softmax(&[-1000.0, -1001.0, -1002.0]);
        assert!((p.iter().sum::<f64>() - 1.0).abs() < 1e-12);
        assert!(p[0] > p[1] && p[1] > p[2]);
    }

    #[test]
    fn test_softmax_degenerate_scores() {
        let p = softmax(&[f64::NEG_INFINITY, f64::NEG_INFINITY]);
        assert_eq!(p, [0.5, 0.5]);
    }
}
