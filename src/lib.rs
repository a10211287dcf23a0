//! Symptom-based disease prediction.
//!
//! Generates a labelled synthetic corpus from per-disease profiles, fits a
//! scaler and classifier on it, and turns reported symptoms, vitals and
//! history into a ranked list of diseases with doctors and care guidance.
//! Generation and inference share one [`schema::FeatureSchema`], so rows
//! built at prediction time match the training layout column for column.

pub mod aligner;
pub mod artifacts;
pub mod classifier;
pub mod config;
pub mod dataset;
pub mod error;
pub mod generator;
pub mod knowledge;
pub mod models;
pub mod predict;
pub mod ranking;
pub mod schema;
pub mod training;
pub mod utils;
pub mod vocabulary;

// Re-export the most common types for easier use
pub use aligner::{Aligner, align};
pub use artifacts::{ModelArtifacts, ModelMetadata, StandardScaler};
pub use classifier::{Classifier, GaussianNaiveBayes};
pub use config::{ArtifactPaths, GeneratorConfig, PipelineConfig, PredictionConfig, TrainingConfig};
pub use dataset::Dataset;
pub use error::{PredictError, Result};
pub use generator::{CaseGenerator, generate_case, generate_corpus};
pub use knowledge::{DiseaseInfo, Doctor, Guidance, enrich};
pub use models::{Diagnosis, FeatureRecord, PatientInput, PredictionResult, VitalsInput};
pub use predict::{PredictionOutcome, Predictor, predict_disease};
pub use ranking::rank;
pub use schema::FeatureSchema;
pub use training::{TrainingReport, train};
pub use vocabulary::{Disease, SYMPTOMS};
