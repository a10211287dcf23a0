//! Gaussian naive Bayes classifier

use std::collections::BTreeMap;
use std::f64::consts::PI;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{PredictError, Result};
use crate::models::FeatureRecord;

use super::{Classifier, check_width, softmax};

/// Per-class Gaussian likelihoods with class priors
///
/// Classes are kept in lexicographic order, which is the native label order
/// the ranker breaks ties with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GaussianNaiveBayes {
    classes: Vec<String>,
    class_prior: Vec<f64>,
    means: Vec<Vec<f64>>,
    variances: Vec<Vec<f64>>,
}

fn mean_and_variance(rows: &[&[f64]], n_features: usize) -> (Vec<f64>, Vec<f64>) {
    let n = rows.len() as f64;
    let mut mean = vec![0.0; n_features];
    for row in rows {
        for (m, v) in mean.iter_mut().zip(row.iter()) {
            *m += v;
        }
    }
    mean.iter_mut().for_each(|m| *m /= n);

    let mut variance = vec![0.0; n_features];
    for row in rows {
        for ((var, v), m) in variance.iter_mut().zip(row.iter()).zip(&mean) {
            *var += (v - m).powi(2);
        }
    }
    variance.iter_mut().for_each(|v| *v /= n);
    (mean, variance)
}

impl GaussianNaiveBayes {
    /// Fit on labelled rows
    ///
    /// `var_smoothing` is the share of the largest overall feature variance
    /// added to every per-class variance.
    pub fn fit(rows: &[&FeatureRecord], var_smoothing: f64) -> Result<Self> {
        let first = rows
            .first()
            .ok_or_else(|| PredictError::Training("no training rows".to_string()))?;
        let n_features = first.len();

        let mut by_class: BTreeMap<&str, Vec<&[f64]>> = BTreeMap::new();
        for row in rows {
            check_width(row, n_features)?;
            let label = row
                .label()
                .ok_or_else(|| PredictError::Training("training row without label".to_string()))?;
            by_class.entry(label).or_default().push(row.values());
        }

        let all: Vec<&[f64]> = rows.iter().map(|r| r.values()).collect();
        let (_, overall_variance) = mean_and_variance(&all, n_features);
        let epsilon = var_smoothing * overall_variance.iter().copied().fold(0.0, f64::max);
        let epsilon = if epsilon > 0.0 { epsilon } else { var_smoothing.max(f64::EPSILON) };

        let total = rows.len() as f64;
        let fitted: Vec<(String, f64, Vec<f64>, Vec<f64>)> = by_class
            .into_par_iter()
            .map(|(label, class_rows)| {
                let (mean, mut variance) = mean_and_variance(&class_rows, n_features);
                variance.iter_mut().for_each(|v| *v += epsilon);
                let prior = class_rows.len() as f64 / total;
                (label.to_string(), prior, mean, variance)
            })
            .collect();

        let mut model = Self {
            classes: Vec::with_capacity(fitted.len()),
            class_prior: Vec::with_capacity(fitted.len()),
            means: Vec::with_capacity(fitted.len()),
            variances: Vec::with_capacity(fitted.len()),
        };
        for (label, prior, mean, variance) in fitted {
            model.classes.push(label);
            model.class_prior.push(prior);
            model.means.push(mean);
            model.variances.push(variance);
        }
        log::debug!(
            "Fitted naive Bayes on {} rows, {} classes, {} features",
            rows.len(),
            model.classes.len(),
            n_features
        );
        Ok(model)
    }

    /// Check internal consistency after deserialization
    pub fn validate(&self) -> Result<()> {
        let n = self.classes.len();
        if n == 0 {
            return Err(PredictError::InvalidArtifact("model has no classes".to_string()));
        }
        if self.class_prior.len() != n || self.means.len() != n || self.variances.len() != n {
            return Err(PredictError::InvalidArtifact(
                "model parameter tables disagree on class count".to_string(),
            ));
        }
        let width = self.means[0].len();
        let consistent = self
            .means
            .iter()
            .chain(&self.variances)
            .all(|row| row.len() == width);
        if !consistent || self.variances.iter().flatten().any(|v| *v <= 0.0) {
            return Err(PredictError::InvalidArtifact(
                "model parameters have inconsistent widths or non-positive variances".to_string(),
            ));
        }
        Ok(())
    }

    fn joint_log_likelihood(&self, x: &[f64]) -> Vec<f64> {
        (0..self.classes.len())
            .map(|c| {
                let log_prior = self.class_prior[c].ln();
                let log_likelihood: f64 = x
                    .iter()
                    .zip(&self.means[c])
                    .zip(&self.variances[c])
                    .map(|((xi, mean), var)| {
                        -0.5 * (2.0 * PI * var).ln() - 0.5 * (xi - mean).powi(2) / var
                    })
                    .sum();
                log_prior + log_likelihood
            })
            .collect()
    }
}

impl Classifier for GaussianNaiveBayes {
    fn classes(&self) -> &[String] {
        &self.classes
    }

    fn n_features(&self) -> usize {
        self.means.first().map_or(0, Vec::len)
    }

    fn predict_proba(&self, row: &FeatureRecord) -> Result<Vec<f64>> {
        check_width(row, self.n_features())?;
        Ok(softmax(&self.joint_log_likelihood(row.values())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::FeatureSchema;
    use std::sync::Arc;

    fn labelled(schema: &Arc<FeatureSchema>, values: [f64; 2], label: &str) -> FeatureRecord {
        FeatureRecord::from_values(Arc::clone(schema), values.to_vec(), Some(label.to_string())).unwrap()
    }

    fn toy_model() -> (Arc<FeatureSchema>, GaussianNaiveBayes) {
        let schema = Arc::new(FeatureSchema::from_names(&["Fever", "Rash"]).unwrap());
        let rows = vec![
            labelled(&schema, [1.0, 0.0], "Influenza"),
            labelled(&schema, [1.0, 0.0], "Influenza"),
            labelled(&schema, [0.9, 0.1], "Influenza"),
            labelled(&schema, [0.0, 1.0], "Dengue"),
            labelled(&schema, [0.1, 1.0], "Dengue"),
        ];
        let refs: Vec<&FeatureRecord> = rows.iter().collect();
        (Arc::clone(&schema), GaussianNaiveBayes::fit(&refs, 1e-2).unwrap())
    }

    #[test]
    fn test_classes_are_sorted() {
        let (_, model) = toy_model();
        assert_eq!(model.classes(), ["Dengue", "Influenza"]);
        assert!(model.validate().is_ok());
    }

    #[test]
    fn test_predict_proba_favours_matching_class() {
        let (schema, model) = toy_model();
        let row = FeatureRecord::from_values(schema, vec![1.0, 0.0], None).unwrap();
        let p = model.predict_proba(&row).unwrap();
        assert_eq!(p.len(), 2);
        assert!((p.iter().sum::<f64>() - 1.0).abs() < 1e-9);
        assert!(p[1] > p[0]);
        assert_eq!(model.predict(&row).unwrap(), "Influenza");
    }

    #[test]
    fn test_width_mismatch_is_an_error() {
        let (_, model) = toy_model();
        let schema = Arc::new(FeatureSchema::from_names(&["Fever"]).unwrap());
        let row = FeatureRecord::zeroed(schema);
        assert!(matches!(
            model.predict_proba(&row),
            Err(PredictError::SchemaMismatch(_))
        ));
    }

    #[test]
    fn test_fit_requires_labels() {
        let schema = Arc::new(FeatureSchema::from_names(&["Fever"]).unwrap());
        let row = FeatureRecord::zeroed(schema);
        assert!(GaussianNaiveBayes::fit(&[&row], 1e-2).is_err());
        assert!(GaussianNaiveBayes::fit(&[], 1e-2).is_err());
    }
}
