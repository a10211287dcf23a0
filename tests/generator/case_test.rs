#[cfg(test)]
mod tests {
    use medi_predict::config::GeneratorConfig;
    use medi_predict::generator::{CaseGenerator, Trigger, profile};
    use medi_predict::vocabulary::{AGE, Disease, HEART_RATE, SMOKING_HISTORY, SYMPTOMS};
    use medi_predict::{FeatureSchema, generate_case};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn noiseless_cases(disease: Disease, samples: usize, seed: u64) -> Vec<medi_predict::FeatureRecord> {
        let generator = CaseGenerator::new(&GeneratorConfig {
            noise_draws: 0,
            ..GeneratorConfig::default()
        });
        let mut rng = StdRng::seed_from_u64(seed);
        (0..samples)
            .map(|_| generator.generate_case(disease, &mut rng))
            .collect()
    }

    fn frequency(records: &[medi_predict::FeatureRecord], symptom: &str) -> f64 {
        let present = records
            .iter()
            .filter(|r| r.get(symptom) == Some(1.0))
            .count();
        present as f64 / records.len() as f64
    }

    #[test]
    fn test_diabetes_scenario() {
        let mut rng = StdRng::seed_from_u64(2024);
        let cases: Vec<_> = (0..100)
            .map(|_| generate_case(Disease::Diabetes, &mut rng))
            .collect();

        assert!(cases.iter().all(|c| c.get(AGE).unwrap() >= 45.0));
        let with_marker = cases
            .iter()
            .filter(|c| c.get("Fatigue") == Some(1.0) || c.get("Weight loss") == Some(1.0))
            .count();
        assert!(with_marker >= 60, "only {with_marker} of 100 cases");
        assert!(cases.iter().all(|c| c.label() == Some("Diabetes")));
    }

    #[test]
    fn test_every_case_covers_the_full_schema() {
        let generator = CaseGenerator::default();
        let schema = FeatureSchema::canonical();
        let mut rng = StdRng::seed_from_u64(3);
        for disease in Disease::all() {
            let case = generator.generate_case(*disease, &mut rng);
            assert_eq!(case.schema().as_ref(), &schema);
            assert_eq!(case.len(), SYMPTOMS.len() + 10);
            for symptom in SYMPTOMS {
                let value = case.get(symptom).unwrap();
                assert!(value == 0.0 || value == 1.0, "{disease}: {symptom}={value}");
            }
        }
    }

    #[test]
    fn test_symptom_presence_follows_profile() {
        const SAMPLES: usize = 1500;
        const TOLERANCE: f64 = 0.06;

        let generator = CaseGenerator::default();
        let mut rng = StdRng::seed_from_u64(99);
        for disease in Disease::all() {
            let profile = profile(*disease);
            let cases: Vec<_> = (0..SAMPLES)
                .map(|_| generator.generate_case(*disease, &mut rng))
                .collect();

            for (symptom, _) in profile.symptoms {
                let triggered = profile.triggers.iter().any(
                    |t| matches!(t, Trigger::Symptom { name, .. } if name == symptom),
                );
                if triggered {
                    continue;
                }
                let expected = profile.symptom_probability(symptom).unwrap();
                let observed = frequency(&cases, symptom);
                assert!(
                    observed >= expected - TOLERANCE && observed <= expected + TOLERANCE,
                    "{disease}: {symptom} observed {observed:.3}, expected {expected}"
                );
            }
        }
    }

    #[test]
    fn test_signature_symptom_always_present() {
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..200 {
            let case = generate_case(Disease::Migraine, &mut rng);
            assert_eq!(case.get("Headache"), Some(1.0));
        }
    }

    #[test]
    fn test_fixed_seed_is_reproducible() {
        let generate = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            Disease::all()
                .iter()
                .map(|d| generate_case(*d, &mut rng))
                .collect::<Vec<_>>()
        };
        assert_eq!(generate(8), generate(8));
    }

    #[test]
    fn test_triggered_symptom_rates() {
        const SAMPLES: usize = 2000;
        const TOLERANCE: f64 = 0.05;
        let expectations = [
            (Disease::Diabetes, "Weight gain", 0.7),
            (Disease::Tuberculosis, "Cough", 0.4),
            (Disease::Dengue, "Pain behind eyes", 0.5),
            (Disease::Malaria, "night sweats", 0.5),
            (Disease::Typhoid, "Confusion", 0.6),
        ];
        for (seed, (disease, symptom, expected)) in expectations.into_iter().enumerate() {
            let cases = noiseless_cases(disease, SAMPLES, 500 + seed as u64);
            let observed = frequency(&cases, symptom);
            assert!(
                (observed - expected).abs() <= TOLERANCE,
                "{disease}: {symptom} observed {observed:.3}, expected {expected}"
            );
        }
    }

    #[test]
    fn test_lyme_confusion_is_near_certain() {
        let cases = noiseless_cases(Disease::LymeDisease, 2000, 61);
        let observed = frequency(&cases, "Confusion");
        assert!(observed > 0.95, "Lyme confusion observed {observed:.3}");
    }

    #[test]
    fn test_asthma_smokers_heart_rate() {
        let cases = noiseless_cases(Disease::Asthma, 2000, 77);
        let (smokers, others): (Vec<_>, Vec<_>) = cases
            .iter()
            .partition(|r| r.get(SMOKING_HISTORY) == Some(1.0));
        assert!(!smokers.is_empty() && !others.is_empty());
        for case in &smokers {
            let rate = case.get(HEART_RATE).unwrap();
            assert!((95.0..=120.0).contains(&rate), "smoker heart rate {rate}");
        }
        for case in &others {
            let rate = case.get(HEART_RATE).unwrap();
            assert!((85.0..=110.0).contains(&rate), "non-smoker heart rate {rate}");
        }
    }
}
