//! Domain models for the prediction pipeline
//!
//! This module contains the patient, feature-row and prediction types that
//! flow between generation, alignment, ranking and the knowledge join.

pub mod patient;
pub mod prediction;
pub mod record;

// Re-export commonly used types
pub use patient::{Demographics, Gender, HistoryFlags, PatientInput, VitalSigns, VitalsInput};
pub use prediction::{Diagnosis, PredictionResult};
pub use record::FeatureRecord;
