#[cfg(test)]
mod tests {
    use crate::utils::small_generator_config;
    use medi_predict::generator::shuffle_records;
    use medi_predict::vocabulary::Disease;
    use medi_predict::{Dataset, generate_corpus};

    #[test]
    fn test_corpus_is_balanced() {
        let dataset = generate_corpus(&small_generator_config(4, 1));
        assert_eq!(dataset.len(), 4 * Disease::all().len());
        let counts = dataset.label_counts();
        assert_eq!(counts.len(), Disease::all().len());
        assert!(counts.iter().all(|(_, count)| *count == 4));
    }

    #[test]
    fn test_same_seeds_give_identical_files() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("first.csv");
        let second = dir.path().join("second.csv");
        generate_corpus(&small_generator_config(3, 12))
            .write_csv(&first)
            .unwrap();
        generate_corpus(&small_generator_config(3, 12))
            .write_csv(&second)
            .unwrap();
        assert_eq!(
            std::fs::read_to_string(&first).unwrap(),
            std::fs::read_to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_shuffle_keeps_the_multiset() {
        let dataset = generate_corpus(&small_generator_config(2, 6));
        let mut shuffled = dataset.records().to_vec();
        shuffle_records(&mut shuffled, 1234);

        let key = |r: &medi_predict::FeatureRecord| format!("{:?}{:?}", r.values(), r.label());
        let mut before: Vec<String> = dataset.records().iter().map(key).collect();
        let mut after: Vec<String> = shuffled.iter().map(key).collect();
        before.sort();
        after.sort();
        assert_eq!(before, after);
    }

    #[test]
    fn test_dataset_header_layout() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("disease_data.csv");
        generate_corpus(&small_generator_config(1, 2))
            .write_csv(&path)
            .unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let header = contents.lines().next().unwrap();
        assert!(header.starts_with("Fever,Weakness,Fatigue,"));
        assert!(header.ends_with(",Exercise_Frequency,Obesity_Status,Disease"));

        let read = Dataset::read_csv(&path).unwrap();
        assert_eq!(read.len(), Disease::all().len());
    }
}
