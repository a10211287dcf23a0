//! Inference-time feature rows
//!
//! [`align`] builds a row strictly over the frozen training schema from a
//! [`PatientInput`]: reported symptoms set to 1, vitals defaulting to normal
//! baselines, gender and history encoded the same way the generator encodes
//! them. [`Aligner`] adds the fitted scaling step.

pub mod history;

pub use history::parse_history;

use std::sync::Arc;

use log::{debug, warn};

use crate::artifacts::{ModelArtifacts, StandardScaler};
use crate::config::ArtifactPaths;
use crate::error::Result;
use crate::models::{Demographics, FeatureRecord, Gender, PatientInput};
use crate::schema::{ColumnKind, FeatureSchema};

/// Assemble an unscaled feature row over `schema`
///
/// Symptom names that are not symptom columns of the schema are ignored.
#[must_use]
pub fn align(input: &PatientInput, schema: &Arc<FeatureSchema>) -> FeatureRecord {
    let mut record = FeatureRecord::zeroed(Arc::clone(schema));

    let demographics = Demographics {
        age: input.age,
        gender: Gender::from_input(&input.gender),
    };
    let vitals = input.vitals.unwrap_or_default().resolve();
    let history = parse_history(&input.history);
    record.set_patient(&demographics, &vitals, &history);

    for symptom in &input.symptoms {
        match schema.position(symptom) {
            Some(i) if schema.columns()[i].kind == ColumnKind::Symptom => record.set_at(i, 1.0),
            _ => warn!("Ignoring unknown symptom '{symptom}'"),
        }
    }
    record
}

/// Builds scaled rows matching a trained model
#[derive(Debug, Clone)]
pub struct Aligner {
    schema: Arc<FeatureSchema>,
    scaler: StandardScaler,
}

impl Aligner {
    /// Pair a schema with its scaler
    ///
    /// # Errors
    /// Returns [`crate::PredictError::InvalidArtifact`] if a numeric column
    /// of the schema has no scaling parameters.
    pub fn new(schema: Arc<FeatureSchema>, scaler: StandardScaler) -> Result<Self> {
        scaler.validate_covers(&schema)?;
        Ok(Self { schema, scaler })
    }

    /// Take the schema and scaler of loaded artifacts
    pub fn from_artifacts(artifacts: &ModelArtifacts) -> Result<Self> {
        Self::new(Arc::clone(artifacts.schema()), artifacts.scaler().clone())
    }

    /// Load the feature names and scaler from disk
    ///
    /// # Errors
    /// Returns [`crate::PredictError::ConfigurationMissing`] when any trained
    /// artifact is absent.
    pub fn load(paths: &ArtifactPaths) -> Result<Self> {
        Self::from_artifacts(&ModelArtifacts::load(paths)?)
    }

    #[must_use]
    pub fn schema(&self) -> &Arc<FeatureSchema> {
        &self.schema
    }

    /// Assemble and scale a row for the classifier
    #[must_use]
    pub fn align(&self, input: &PatientInput) -> FeatureRecord {
        let mut record = align(input, &self.schema);
        self.scaler.transform(&mut record);
        debug!(
            "Aligned input with {} symptoms over {} columns",
            input.symptoms.len(),
            record.len()
        );
        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifacts::ColumnStats;
    use crate::models::VitalsInput;
    use crate::vocabulary::{AGE, GENDER, HEART_RATE, SMOKING_HISTORY, SYSTOLIC_BP, TEMPERATURE};

    fn schema() -> Arc<FeatureSchema> {
        Arc::new(FeatureSchema::canonical())
    }

    #[test]
    fn test_align_fever_cough() {
        let input = PatientInput::with_symptoms(["Fever", "Cough"]).demographics(30, "male");
        let record = align(&input, &schema());

        assert_eq!(record.get("Fever"), Some(1.0));
        assert_eq!(record.get("Cough"), Some(1.0));
        assert_eq!(record.get("Rash"), Some(0.0));
        assert_eq!(record.get(AGE), Some(30.0));
        assert_eq!(record.get(GENDER), Some(0.0));
        assert_eq!(record.get(TEMPERATURE), Some(36.6));
        assert_eq!(record.get(SYSTOLIC_BP), Some(120.0));
        assert_eq!(record.get(HEART_RATE), Some(72.0));
        assert_eq!(record.get(SMOKING_HISTORY), Some(0.0));
    }

    #[test]
    fn test_unknown_symptoms_are_ignored() {
        let input = PatientInput::with_symptoms(["Fever", "Third eye", AGE]).demographics(40, "FEMALE");
        let record = align(&input, &schema());
        assert_eq!(record.len(), schema().len());
        assert_eq!(record.get("Fever"), Some(1.0));
        assert_eq!(record.get(AGE), Some(40.0));
        assert_eq!(record.get(GENDER), Some(1.0));
    }

    #[test]
    fn test_partial_vitals() {
        let input = PatientInput::default().vitals(VitalsInput {
            temperature: Some(39.5),
            ..VitalsInput::default()
        });
        let record = align(&input, &schema());
        assert_eq!(record.get(TEMPERATURE), Some(39.5));
        assert_eq!(record.get(SYSTOLIC_BP), Some(120.0));
    }

    #[test]
    fn test_aligner_scales_numeric_columns() {
        let schema = Arc::new(FeatureSchema::from_names(&["Fever", AGE]).unwrap());
        let scaler = StandardScaler::from_stats([(
            AGE,
            ColumnStats {
                mean: 20.0,
                std_dev: 10.0,
            },
        )]);
        let aligner = Aligner::new(schema, scaler).unwrap();
        let record = aligner.align(&PatientInput::with_symptoms(["Fever"]).demographics(40, "Male"));
        assert_eq!(record.values(), &[1.0, 2.0]);
    }

    #[test]
    fn test_aligner_requires_scaler_coverage() {
        let schema = Arc::new(FeatureSchema::from_names(&["Fever", AGE]).unwrap());
        assert!(Aligner::new(schema, StandardScaler::default()).is_err());
    }

    #[test]
    fn test_load_without_artifacts() {
        let dir = tempfile::tempdir().unwrap();
        let err = Aligner::load(&ArtifactPaths::in_dir(dir.path())).unwrap_err();
        assert!(err.is_configuration_missing());
    }
}
