//! Fitting the scaler and classifier on a generated corpus
//!
//! The scaler is fitted on the whole corpus and the feature names are frozen
//! from the dataset header. The classifier is fitted on a seeded training
//! split and evaluated on the held-out rows.

use std::fmt;
use std::time::Instant;

use chrono::Utc;
use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rustc_hash::FxHashMap;

use crate::artifacts::{ModelArtifacts, ModelMetadata, PersistedModel, StandardScaler};
use crate::classifier::{Classifier, GaussianNaiveBayes};
use crate::config::TrainingConfig;
use crate::dataset::Dataset;
use crate::error::{PredictError, Result};
use crate::models::FeatureRecord;

/// Held-out precision and recall of one class
#[derive(Debug, Clone, PartialEq)]
pub struct ClassMetrics {
    pub label: String,
    pub precision: f64,
    pub recall: f64,
    /// Number of held-out rows with this true label
    pub support: usize,
}

/// Summary of a training run
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingReport {
    pub train_samples: usize,
    pub test_samples: usize,
    /// Held-out accuracy; `None` without a test split
    pub accuracy: Option<f64>,
    pub classes: Vec<ClassMetrics>,
}

impl fmt::Display for TrainingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Training Summary:")?;
        writeln!(f, "  - Training rows: {}", self.train_samples)?;
        writeln!(f, "  - Held-out rows: {}", self.test_samples)?;
        match self.accuracy {
            Some(accuracy) => writeln!(f, "  - Accuracy: {:.1}%", accuracy * 100.0)?,
            None => writeln!(f, "  - Accuracy: n/a")?,
        }
        if !self.classes.is_empty() {
            writeln!(f)?;
            writeln!(f, "{:<28} {:>9} {:>9} {:>8}", "Disease", "Precision", "Recall", "Support")?;
            for class in &self.classes {
                writeln!(
                    f,
                    "{:<28} {:>9.3} {:>9.3} {:>8}",
                    class.label, class.precision, class.recall, class.support
                )?;
            }
        }
        Ok(())
    }
}

/// Deterministic train/test partition of row indices
fn split_indices(n: usize, test_fraction: f64, seed: u64) -> (Vec<usize>, Vec<usize>) {
    let mut indices: Vec<usize> = (0..n).collect();
    indices.shuffle(&mut StdRng::seed_from_u64(seed));

    let fraction = test_fraction.clamp(0.0, 1.0);
    let mut n_test = (n as f64 * fraction).ceil() as usize;
    // Always keep at least one training row
    if n_test >= n {
        n_test = n.saturating_sub(1);
    }
    let train = indices.split_off(n_test);
    (train, indices)
}

fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

/// Accuracy and per-class metrics of a classifier on labelled rows
pub fn evaluate(
    classifier: &dyn Classifier,
    rows: &[&FeatureRecord],
) -> Result<(f64, Vec<ClassMetrics>)> {
    #[derive(Default)]
    struct Counts {
        true_positive: usize,
        predicted: usize,
        actual: usize,
    }

    let mut counts: FxHashMap<&str, Counts> = FxHashMap::default();
    let mut correct = 0;
    for row in rows {
        let actual = row
            .label()
            .ok_or_else(|| PredictError::Training("evaluation row without label".to_string()))?;
        let predicted = classifier.predict(row)?;
        counts.entry(actual).or_default().actual += 1;
        counts.entry(predicted).or_default().predicted += 1;
        if predicted == actual {
            correct += 1;
            counts.entry(actual).or_default().true_positive += 1;
        }
    }

    let mut metrics: Vec<ClassMetrics> = counts
        .into_iter()
        .map(|(label, c)| ClassMetrics {
            label: label.to_string(),
            precision: ratio(c.true_positive, c.predicted),
            recall: ratio(c.true_positive, c.actual),
            support: c.actual,
        })
        .collect();
    metrics.sort_by(|a, b| a.label.cmp(&b.label));

    Ok((ratio(correct, rows.len()), metrics))
}

/// Fit the scaler and classifier on a labelled dataset
pub fn train(dataset: &Dataset, config: &TrainingConfig) -> Result<(ModelArtifacts, TrainingReport)> {
    if dataset.is_empty() {
        return Err(PredictError::Training("dataset is empty".to_string()));
    }
    let start = Instant::now();
    let schema = dataset.schema();
    info!(
        "Training on {} rows with {} features",
        dataset.len(),
        schema.len()
    );

    let scaler = StandardScaler::fit(schema, dataset.records())?;
    let scaled: Vec<FeatureRecord> = dataset
        .records()
        .iter()
        .cloned()
        .map(|mut record| {
            scaler.transform(&mut record);
            record
        })
        .collect();

    let (train_idx, test_idx) = split_indices(scaled.len(), config.test_fraction, config.split_seed);
    debug!(
        "Split {} rows into {} training and {} held-out rows",
        scaled.len(),
        train_idx.len(),
        test_idx.len()
    );
    let train_rows: Vec<&FeatureRecord> = train_idx.iter().map(|&i| &scaled[i]).collect();
    let test_rows: Vec<&FeatureRecord> = test_idx.iter().map(|&i| &scaled[i]).collect();

    let model = GaussianNaiveBayes::fit(&train_rows, config.var_smoothing)?;

    let (accuracy, classes) = if test_rows.is_empty() {
        (None, Vec::new())
    } else {
        let (accuracy, classes) = evaluate(&model, &test_rows)?;
        (Some(accuracy), classes)
    };
    if let Some(accuracy) = accuracy {
        info!("Held-out accuracy: {:.1}%", accuracy * 100.0);
    }

    let report = TrainingReport {
        train_samples: train_rows.len(),
        test_samples: test_rows.len(),
        accuracy,
        classes,
    };
    let metadata = ModelMetadata {
        trained_at: Utc::now(),
        samples: train_rows.len(),
        accuracy,
    };
    let artifacts = ModelArtifacts::new(
        std::sync::Arc::clone(schema),
        scaler,
        PersistedModel::GaussianNaiveBayes(model),
        metadata,
    )?;

    info!("Training completed in {:?}", start.elapsed());
    Ok((artifacts, report))
}
