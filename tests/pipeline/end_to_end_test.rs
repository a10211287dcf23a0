#[cfg(test)]
mod tests {
    use crate::utils::train_into;
    use medi_predict::config::ArtifactPaths;
    use medi_predict::models::{PatientInput, VitalsInput};
    use medi_predict::predict::{DEFAULT_TOP_K, MODEL_UNAVAILABLE_MESSAGE};
    use medi_predict::vocabulary::Disease;
    use medi_predict::{Aligner, ModelArtifacts, PredictionOutcome, Predictor, predict_disease};

    #[test]
    fn test_generate_train_predict() {
        let dir = tempfile::tempdir().unwrap();
        let paths = train_into(dir.path(), 40).unwrap();

        let input = PatientInput::with_symptoms(["Fever", "Cough", "Fatigue", "Shortness of breath"])
            .demographics(30, "Male");
        let outcome = predict_disease(&paths, &input, DEFAULT_TOP_K).unwrap();
        let diagnoses = outcome.diagnoses().expect("model should be available");

        assert_eq!(diagnoses.len(), 3);
        for pair in diagnoses.windows(2) {
            assert!(pair[0].confidence >= pair[1].confidence);
        }
        for diagnosis in diagnoses {
            assert!((0.0..=1.0).contains(&diagnosis.confidence));
            assert!(diagnosis.disease.parse::<Disease>().is_ok());
            assert!(!diagnosis.info.description.is_empty());
        }
    }

    #[test]
    fn test_loaded_model_matches_training_layout() {
        let dir = tempfile::tempdir().unwrap();
        let paths = train_into(dir.path(), 10).unwrap();

        let artifacts = ModelArtifacts::load(&paths).unwrap();
        let aligner = Aligner::load(&paths).unwrap();
        assert_eq!(aligner.schema().as_ref(), artifacts.schema().as_ref());
        assert_eq!(artifacts.classifier().classes().len(), Disease::all().len());
        assert_eq!(artifacts.classifier().n_features(), artifacts.schema().len());

        let row = aligner.align(&PatientInput::with_symptoms(["Headache"]));
        assert_eq!(row.len(), artifacts.schema().len());
    }

    #[test]
    fn test_batch_prediction_keeps_order() {
        let dir = tempfile::tempdir().unwrap();
        let paths = train_into(dir.path(), 10).unwrap();
        let predictor = Predictor::load(&paths, 5).unwrap();

        let inputs = vec![
            PatientInput::with_symptoms(["Headache", "Nausea"]),
            PatientInput::with_symptoms(["Rash"]).demographics(12, "Female"),
            PatientInput::default().vitals(VitalsInput {
                temperature: Some(39.8),
                heart_rate: Some(110),
                ..VitalsInput::default()
            }),
        ];
        let batch = predictor.predict_batch(&inputs).unwrap();
        assert_eq!(batch.len(), inputs.len());
        for (input, diagnoses) in inputs.iter().zip(&batch) {
            let single = predictor.predict(input).unwrap();
            let names: Vec<&str> = single.iter().map(|d| d.disease.as_str()).collect();
            let batch_names: Vec<&str> = diagnoses.iter().map(|d| d.disease.as_str()).collect();
            assert_eq!(names, batch_names);
            assert_eq!(diagnoses.len(), 5);
        }
    }

    #[test]
    fn test_missing_artifacts_give_a_message() {
        let dir = tempfile::tempdir().unwrap();
        let paths = ArtifactPaths::in_dir(dir.path());
        let outcome =
            predict_disease(&paths, &PatientInput::with_symptoms(["Fever"]), DEFAULT_TOP_K)
                .unwrap();
        match outcome {
            PredictionOutcome::ModelUnavailable { message } => {
                assert_eq!(message, MODEL_UNAVAILABLE_MESSAGE);
            }
            PredictionOutcome::Ranked(_) => panic!("expected the model to be unavailable"),
        }
    }

    #[test]
    fn test_corrupt_artifact_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let paths = train_into(dir.path(), 5).unwrap();
        std::fs::write(paths.scaler_path(), "not json").unwrap();

        let result = predict_disease(&paths, &PatientInput::default(), DEFAULT_TOP_K);
        assert!(result.is_err());
    }
}
