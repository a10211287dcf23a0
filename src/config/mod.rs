//! Configuration for generation, training and prediction.
//!
//! Every section has sensible defaults; a JSON file may override any subset
//! of fields, and command line flags override the file.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Configuration for synthetic corpus generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Number of cases generated for every disease
    pub samples_per_disease: usize,
    /// Seed for case sampling; `None` draws from OS entropy
    pub seed: Option<u64>,
    /// Seed for the single shuffle applied to the finished corpus
    pub shuffle_seed: u64,
    /// Number of random symptoms considered for noise per case
    pub noise_draws: usize,
    /// Probability that each noise draw switches its symptom on
    pub noise_probability: f64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            samples_per_disease: 1500,
            seed: None,
            shuffle_seed: 42,
            noise_draws: 3,
            noise_probability: 0.15,
        }
    }
}

impl fmt::Display for GeneratorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Generator Configuration:")?;
        writeln!(f, "  Samples per disease: {}", self.samples_per_disease)?;
        match self.seed {
            Some(seed) => writeln!(f, "  Seed: {seed}")?,
            None => writeln!(f, "  Seed: <entropy>")?,
        }
        writeln!(f, "  Shuffle seed: {}", self.shuffle_seed)?;
        writeln!(
            f,
            "  Noise: {} draws at p={}",
            self.noise_draws, self.noise_probability
        )
    }
}

/// Configuration for fitting the scaler and classifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainingConfig {
    /// Share of the corpus held out for evaluation
    pub test_fraction: f64,
    /// Seed for the train/test split
    pub split_seed: u64,
    /// Portion of the largest feature variance added to every variance
    pub var_smoothing: f64,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            test_fraction: 0.2,
            split_seed: 42,
            var_smoothing: 1e-2,
        }
    }
}

impl fmt::Display for TrainingConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Training Configuration:")?;
        writeln!(f, "  Test fraction: {}", self.test_fraction)?;
        writeln!(f, "  Split seed: {}", self.split_seed)?;
        writeln!(f, "  Variance smoothing: {}", self.var_smoothing)
    }
}

/// Locations of the dataset and trained artifacts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArtifactPaths {
    /// Directory all other paths are relative to
    pub dir: PathBuf,
    pub dataset: PathBuf,
    pub model: PathBuf,
    pub feature_names: PathBuf,
    pub scaler: PathBuf,
}

impl Default for ArtifactPaths {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
            dataset: PathBuf::from("disease_data.csv"),
            model: PathBuf::from("disease_model.json"),
            feature_names: PathBuf::from("feature_names.json"),
            scaler: PathBuf::from("scaler.json"),
        }
    }
}

impl ArtifactPaths {
    /// Default file names inside a directory
    #[must_use]
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn dataset_path(&self) -> PathBuf {
        self.dir.join(&self.dataset)
    }

    #[must_use]
    pub fn model_path(&self) -> PathBuf {
        self.dir.join(&self.model)
    }

    #[must_use]
    pub fn feature_names_path(&self) -> PathBuf {
        self.dir.join(&self.feature_names)
    }

    #[must_use]
    pub fn scaler_path(&self) -> PathBuf {
        self.dir.join(&self.scaler)
    }

    /// Trained artifact paths that do not exist
    #[must_use]
    pub fn missing_artifacts(&self) -> Vec<PathBuf> {
        [self.model_path(), self.feature_names_path(), self.scaler_path()]
            .into_iter()
            .filter(|p| !p.is_file())
            .collect()
    }
}

impl fmt::Display for ArtifactPaths {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Artifacts:")?;
        writeln!(f, "  Dataset: {}", self.dataset_path().display())?;
        writeln!(f, "  Model: {}", self.model_path().display())?;
        writeln!(f, "  Feature names: {}", self.feature_names_path().display())?;
        writeln!(f, "  Scaler: {}", self.scaler_path().display())
    }
}

/// Configuration for inference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PredictionConfig {
    /// Number of ranked diseases returned
    pub top_k: usize,
}

impl Default for PredictionConfig {
    fn default() -> Self {
        Self {
            top_k: crate::predict::DEFAULT_TOP_K,
        }
    }
}

/// Complete pipeline configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub generator: GeneratorConfig,
    pub training: TrainingConfig,
    pub artifacts: ArtifactPaths,
    pub prediction: PredictionConfig,
}

impl PipelineConfig {
    /// Load a configuration file; missing fields keep their defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config = serde_json::from_str(&contents)?;
        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }
}

impl fmt::Display for PipelineConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.generator)?;
        write!(f, "{}", self.training)?;
        write!(f, "{}", self.artifacts)?;
        writeln!(f, "Prediction top-k: {}", self.prediction.top_k)
    }
}
