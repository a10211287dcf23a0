#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use medi_predict::models::{PatientInput, VitalsInput};
    use medi_predict::vocabulary::{
        AGE, ALCOHOL_CONSUMPTION, DIASTOLIC_BP, EXERCISE_FREQUENCY, GENDER, HEART_RATE,
        OBESITY_STATUS, SMOKING_HISTORY, SYMPTOMS, SYSTOLIC_BP, TEMPERATURE,
    };
    use medi_predict::{FeatureSchema, align};
    use proptest::prelude::*;

    fn canonical() -> Arc<FeatureSchema> {
        Arc::new(FeatureSchema::canonical())
    }

    #[test]
    fn test_fever_cough_scenario() {
        let input = PatientInput::with_symptoms(["Fever", "Cough"]).demographics(30, "male");
        let record = align(&input, &canonical());

        for symptom in SYMPTOMS {
            let expected = if symptom == "Fever" || symptom == "Cough" { 1.0 } else { 0.0 };
            assert_eq!(record.get(symptom), Some(expected), "{symptom}");
        }
        assert_eq!(record.get(AGE), Some(30.0));
        assert_eq!(record.get(GENDER), Some(0.0));
        assert_eq!(record.get(TEMPERATURE), Some(36.6));
        assert_eq!(record.get(SYSTOLIC_BP), Some(120.0));
        assert_eq!(record.get(DIASTOLIC_BP), Some(80.0));
        assert_eq!(record.get(HEART_RATE), Some(72.0));
    }

    #[test]
    fn test_history_tokens() {
        let input = PatientInput::default().history(["Current smoker", "Moderate", "Obesity"]);
        let record = align(&input, &canonical());
        assert_eq!(record.get(SMOKING_HISTORY), Some(1.0));
        assert_eq!(record.get(ALCOHOL_CONSUMPTION), Some(1.0));
        assert_eq!(record.get(EXERCISE_FREQUENCY), Some(2.0));
        assert_eq!(record.get(OBESITY_STATUS), Some(1.0));
    }

    #[test]
    fn test_reduced_schema_only_gets_known_columns() {
        let schema = Arc::new(FeatureSchema::from_names(&["Cough", AGE, "Fever"]).unwrap());
        let input = PatientInput::with_symptoms(["Fever", "Rash"])
            .demographics(61, "Female")
            .vitals(VitalsInput {
                temperature: Some(39.0),
                ..VitalsInput::default()
            });
        let record = align(&input, &schema);
        assert_eq!(record.values(), &[0.0, 61.0, 1.0]);
    }

    fn symptom_name() -> impl Strategy<Value = String> {
        prop_oneof![
            prop::sample::select(SYMPTOMS.to_vec()).prop_map(str::to_string),
            "[a-zA-Z ]{1,20}",
        ]
    }

    proptest! {
        #[test]
        fn prop_row_layout_matches_schema(
            symptoms in prop::collection::vec(symptom_name(), 0..12),
            age in 0u32..120,
            gender in "[a-zA-Z]{0,8}",
            temperature in prop::option::of(34.0f64..42.0),
            heart_rate in prop::option::of(40u32..180),
            history in prop::collection::vec(
                prop::sample::select(vec!["Current smoker", "Heavy", "Light", "Very Active", "Obesity", "None"]),
                0..4,
            ),
        ) {
            let schema = canonical();
            let mut input = PatientInput::with_symptoms(symptoms.clone())
                .demographics(age, gender)
                .history(history);
            if temperature.is_some() || heart_rate.is_some() {
                input = input.vitals(VitalsInput { temperature, heart_rate, ..VitalsInput::default() });
            }
            let record = align(&input, &schema);

            prop_assert_eq!(record.column_names().collect::<Vec<_>>(), schema.names().collect::<Vec<_>>());
            prop_assert_eq!(record.get(AGE), Some(f64::from(age)));
            for symptom in SYMPTOMS {
                let expected = if symptoms.iter().any(|s| s == symptom) { 1.0 } else { 0.0 };
                prop_assert_eq!(record.get(symptom), Some(expected));
            }
        }
    }
}
