//! End-to-end prediction: align, classify, rank and enrich

use std::sync::Arc;

use log::{debug, info};
use rayon::prelude::*;

use crate::aligner::Aligner;
use crate::artifacts::{ModelArtifacts, PersistedModel};
use crate::classifier::Classifier;
use crate::config::ArtifactPaths;
use crate::error::{PredictError, Result};
use crate::knowledge::enrich;
use crate::models::{Diagnosis, PatientInput};
use crate::ranking::rank;

/// Message returned in place of predictions when the model is not trained
pub const MODEL_UNAVAILABLE_MESSAGE: &str =
    "Required model files not found. Please train the model first.";

/// Default number of ranked diseases
pub const DEFAULT_TOP_K: usize = 3;

/// A loaded model ready to answer prediction requests
#[derive(Debug, Clone)]
pub struct Predictor {
    aligner: Aligner,
    model: Arc<PersistedModel>,
    top_k: usize,
}

impl Predictor {
    /// Build a predictor from loaded artifacts
    pub fn new(artifacts: ModelArtifacts, top_k: usize) -> Result<Self> {
        let (schema, scaler, model) = artifacts.into_parts();
        let aligner = Aligner::new(schema, scaler)?;
        Ok(Self {
            aligner,
            model: Arc::new(model),
            top_k,
        })
    }

    /// Load artifacts from disk and build a predictor
    pub fn load(paths: &ArtifactPaths, top_k: usize) -> Result<Self> {
        Self::new(ModelArtifacts::load(paths)?, top_k)
    }

    #[must_use]
    pub fn classifier(&self) -> &dyn Classifier {
        self.model.classifier()
    }

    #[must_use]
    pub fn top_k(&self) -> usize {
        self.top_k
    }

    /// Ranked, enriched diagnoses for one patient
    pub fn predict(&self, input: &PatientInput) -> Result<Vec<Diagnosis>> {
        let row = self.aligner.align(input);
        let classifier = self.classifier();
        let probabilities = classifier.predict_proba(&row)?;
        let ranked = rank(&probabilities, classifier.classes(), self.top_k)?;
        debug!(
            "Top prediction: {}",
            ranked.first().map_or("<none>", |r| r.disease.as_str())
        );
        Ok(ranked
            .into_iter()
            .map(|result| {
                let guidance = enrich(&result.disease);
                Diagnosis::new(result, guidance)
            })
            .collect())
    }

    /// Predict for independent inputs in parallel, preserving input order
    pub fn predict_batch(&self, inputs: &[PatientInput]) -> Result<Vec<Vec<Diagnosis>>> {
        info!("Predicting {} inputs", inputs.len());
        inputs.par_iter().map(|input| self.predict(input)).collect()
    }
}

/// Result of a one-shot prediction request
#[derive(Debug, Clone)]
pub enum PredictionOutcome {
    Ranked(Vec<Diagnosis>),
    /// The trained artifacts are not available
    ModelUnavailable { message: String },
}

impl PredictionOutcome {
    /// Diagnoses, if the model was available
    #[must_use]
    pub fn diagnoses(&self) -> Option<&[Diagnosis]> {
        match self {
            Self::Ranked(diagnoses) => Some(diagnoses),
            Self::ModelUnavailable { .. } => None,
        }
    }
}

/// Load the model and predict for one patient
///
/// Missing artifacts produce [`PredictionOutcome::ModelUnavailable`] rather
/// than an error; any other failure is returned as `Err`.
pub fn predict_disease(
    paths: &ArtifactPaths,
    input: &PatientInput,
    top_k: usize,
) -> Result<PredictionOutcome> {
    let predictor = match Predictor::load(paths, top_k) {
        Ok(predictor) => predictor,
        Err(PredictError::ConfigurationMissing { missing }) => {
            info!("Model unavailable, {} artifact(s) missing", missing.len());
            return Ok(PredictionOutcome::ModelUnavailable {
                message: MODEL_UNAVAILABLE_MESSAGE.to_string(),
            });
        }
        Err(e) => return Err(e),
    };
    predictor.predict(input).map(PredictionOutcome::Ranked)
}
