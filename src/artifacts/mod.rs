//! Trained artifacts: frozen feature names, scaler and classifier
//!
//! The three files are written together after training and must all be
//! present to run inference. Loading reports every missing file at once.

pub mod scaler;

pub use scaler::{ColumnStats, StandardScaler};

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::classifier::{Classifier, GaussianNaiveBayes};
use crate::config::ArtifactPaths;
use crate::error::{PredictError, Result};
use crate::schema::FeatureSchema;
use crate::utils::logging::log_operation_start;
use crate::utils::{log_operation_complete, write_json_atomic};

/// Provenance stored alongside the classifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelMetadata {
    pub trained_at: DateTime<Utc>,
    /// Number of rows the model was fitted on
    pub samples: usize,
    /// Held-out accuracy, when an evaluation split was used
    pub accuracy: Option<f64>,
}

/// A classifier in its persisted form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum PersistedModel {
    GaussianNaiveBayes(GaussianNaiveBayes),
}

impl PersistedModel {
    /// The model behind the classifier contract
    #[must_use]
    pub fn classifier(&self) -> &dyn Classifier {
        match self {
            Self::GaussianNaiveBayes(model) => model,
        }
    }

    fn validate(&self) -> Result<()> {
        match self {
            Self::GaussianNaiveBayes(model) => model.validate(),
        }
    }
}

/// Model file contents: the classifier plus its metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct ModelFile {
    metadata: ModelMetadata,
    model: PersistedModel,
}

/// Everything produced by training and consumed by inference
#[derive(Debug, Clone)]
pub struct ModelArtifacts {
    schema: Arc<FeatureSchema>,
    scaler: StandardScaler,
    model: PersistedModel,
    metadata: ModelMetadata,
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let reader = BufReader::new(File::open(path)?);
    Ok(serde_json::from_reader(reader)?)
}

impl ModelArtifacts {
    /// Bundle freshly trained parts, checking they agree with each other
    pub fn new(
        schema: Arc<FeatureSchema>,
        scaler: StandardScaler,
        model: PersistedModel,
        metadata: ModelMetadata,
    ) -> Result<Self> {
        model.validate()?;
        let n_features = model.classifier().n_features();
        if n_features != schema.len() {
            return Err(PredictError::InvalidArtifact(format!(
                "model expects {n_features} features but {} feature names were saved",
                schema.len()
            )));
        }
        scaler.validate_covers(&schema)?;
        Ok(Self {
            schema,
            scaler,
            model,
            metadata,
        })
    }

    /// Load all artifacts
    ///
    /// # Errors
    /// Returns [`PredictError::ConfigurationMissing`] listing every absent
    /// file, or a parse/consistency error for files that exist.
    pub fn load(paths: &ArtifactPaths) -> Result<Self> {
        let missing = paths.missing_artifacts();
        if !missing.is_empty() {
            return Err(PredictError::ConfigurationMissing { missing });
        }

        let start = Instant::now();
        let model_path = paths.model_path();
        log_operation_start("Loading model artifacts from", &paths.dir);

        let names: Vec<String> = read_json(&paths.feature_names_path())?;
        let schema = Arc::new(FeatureSchema::from_names(&names)?);
        let scaler: StandardScaler = read_json(&paths.scaler_path())?;
        let file: ModelFile = read_json(&model_path)?;

        let artifacts = Self::new(schema, scaler, file.model, file.metadata)?;
        log_operation_complete(
            "loaded",
            &model_path,
            artifacts.classifier().classes().len(),
            Some(start.elapsed()),
        );
        Ok(artifacts)
    }

    /// Write all artifacts
    pub fn save(&self, paths: &ArtifactPaths) -> Result<()> {
        write_json_atomic(&paths.feature_names_path(), &self.schema.to_names())?;
        write_json_atomic(&paths.scaler_path(), &self.scaler)?;
        let file = ModelFile {
            metadata: self.metadata.clone(),
            model: self.model.clone(),
        };
        write_json_atomic(&paths.model_path(), &file)?;
        log::info!("Saved model artifacts to {}", paths.dir.display());
        Ok(())
    }

    /// Frozen feature layout
    #[must_use]
    pub fn schema(&self) -> &Arc<FeatureSchema> {
        &self.schema
    }

    #[must_use]
    pub fn scaler(&self) -> &StandardScaler {
        &self.scaler
    }

    #[must_use]
    pub fn classifier(&self) -> &dyn Classifier {
        self.model.classifier()
    }

    #[must_use]
    pub fn metadata(&self) -> &ModelMetadata {
        &self.metadata
    }

    /// Split into parts for building a predictor
    #[must_use]
    pub fn into_parts(self) -> (Arc<FeatureSchema>, StandardScaler, PersistedModel) {
        (self.schema, self.scaler, self.model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FeatureRecord;

    fn tiny_artifacts() -> ModelArtifacts {
        let schema = Arc::new(FeatureSchema::from_names(&["Fever", "Age"]).unwrap());
        let rows: Vec<FeatureRecord> = [([1.0, 20.0], "Influenza"), ([0.0, 60.0], "Diabetes")]
            .into_iter()
            .map(|(v, l)| {
                FeatureRecord::from_values(Arc::clone(&schema), v.to_vec(), Some(l.to_string()))
                    .unwrap()
            })
            .collect();
        let scaler = StandardScaler::fit(&schema, &rows).unwrap();
        let refs: Vec<&FeatureRecord> = rows.iter().collect();
        let model = GaussianNaiveBayes::fit(&refs, 1e-2).unwrap();
        let metadata = ModelMetadata {
            trained_at: Utc::now(),
            samples: rows.len(),
            accuracy: None,
        };
        ModelArtifacts::new(schema, scaler, PersistedModel::GaussianNaiveBayes(model), metadata)
            .unwrap()
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let paths = ArtifactPaths::in_dir(dir.path());
        let artifacts = tiny_artifacts();
        artifacts.save(&paths).unwrap();

        let loaded = ModelArtifacts::load(&paths).unwrap();
        assert_eq!(loaded.schema().as_ref(), artifacts.schema().as_ref());
        assert_eq!(loaded.scaler(), artifacts.scaler());
        assert_eq!(loaded.classifier().classes(), ["Diabetes", "Influenza"]);
        assert_eq!(loaded.metadata().samples, 2);
    }

    #[test]
    fn test_load_reports_every_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let paths = ArtifactPaths::in_dir(dir.path());
        tiny_artifacts().save(&paths).unwrap();
        std::fs::remove_file(paths.scaler_path()).unwrap();
        std::fs::remove_file(paths.model_path()).unwrap();

        match ModelArtifacts::load(&paths) {
            Err(PredictError::ConfigurationMissing { missing }) => {
                assert_eq!(missing, vec![paths.model_path(), paths.scaler_path()]);
            }
            other => panic!("expected missing configuration, got {other:?}"),
        }
    }

    #[test]
    fn test_feature_count_must_match() {
        let artifacts = tiny_artifacts();
        let (_, scaler, model) = artifacts.into_parts();
        let schema = Arc::new(FeatureSchema::from_names(&["Fever", "Cough", "Age"]).unwrap());
        let metadata = ModelMetadata {
            trained_at: Utc::now(),
            samples: 0,
            accuracy: None,
        };
        assert!(matches!(
            ModelArtifacts::new(schema, scaler, model, metadata),
            Err(PredictError::InvalidArtifact(_))
        ));
    }
}
