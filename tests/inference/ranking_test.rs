#[cfg(test)]
mod tests {
    use medi_predict::rank;
    use proptest::prelude::*;

    fn labels(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("Disease {i:02}")).collect()
    }

    #[test]
    fn test_three_class_scenario() {
        let classes = vec!["A".to_string(), "B".to_string(), "C".to_string()];
        let results = rank(&[0.7, 0.2, 0.1], &classes, 3).unwrap();
        let pairs: Vec<(&str, f64)> = results
            .iter()
            .map(|r| (r.disease.as_str(), r.confidence))
            .collect();
        assert_eq!(pairs, [("A", 0.7), ("B", 0.2), ("C", 0.1)]);
    }

    proptest! {
        #[test]
        fn prop_rank_is_deterministic_and_ordered(
            probabilities in prop::collection::vec(0.0f64..=1.0, 0..30),
            top_k in 0usize..40,
        ) {
            let classes = labels(probabilities.len());
            let first = rank(&probabilities, &classes, top_k).unwrap();
            let second = rank(&probabilities, &classes, top_k).unwrap();
            prop_assert_eq!(&first, &second);

            prop_assert_eq!(first.len(), top_k.min(classes.len()));
            for pair in first.windows(2) {
                prop_assert!(pair[0].confidence >= pair[1].confidence);
                if pair[0].confidence == pair[1].confidence {
                    // Labels are zero-padded, so class order equals label order
                    prop_assert!(pair[0].disease < pair[1].disease);
                }
            }
            let mut seen: Vec<&str> = first.iter().map(|r| r.disease.as_str()).collect();
            seen.sort_unstable();
            seen.dedup();
            prop_assert_eq!(seen.len(), first.len());
        }
    }
}
