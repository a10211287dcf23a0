#[cfg(test)]
mod tests {
    use medi_predict::enrich;
    use medi_predict::knowledge::{DOCTORS, FALLBACK_INFO, doctors_for};
    use medi_predict::vocabulary::Disease;
    use proptest::prelude::*;

    fn table_position(name: &str) -> usize {
        DOCTORS.iter().position(|d| d.name == name).unwrap()
    }

    #[test]
    fn test_doctors_sorted_by_rating_then_table_order() {
        for disease in Disease::all() {
            let doctors = doctors_for(disease.name());
            for pair in doctors.windows(2) {
                assert!(pair[0].rating >= pair[1].rating, "{disease}");
                if pair[0].rating == pair[1].rating {
                    assert!(table_position(pair[0].name) < table_position(pair[1].name));
                }
            }
            assert!(doctors.iter().all(|d| d.treats(disease.name())));
        }
    }

    #[test]
    fn test_enrich_known_disease() {
        let guidance = enrich("Malaria");
        assert!(!guidance.doctors.is_empty());
        assert_ne!(guidance.info, &FALLBACK_INFO);
    }

    #[test]
    fn test_fallback_record() {
        let guidance = enrich("Dragon Pox");
        assert!(guidance.doctors.is_empty());
        assert_eq!(guidance.info.description, "Information not available.");
        assert_eq!(guidance.info.actions, ["Consult a doctor"]);
        assert_eq!(guidance.info.precautions, ["General health maintenance"]);
        assert_eq!(guidance.info.urgency, "Unknown");
    }

    proptest! {
        #[test]
        fn prop_enrich_is_total(name in ".{0,40}") {
            let guidance = enrich(&name);
            prop_assert!(!guidance.info.description.is_empty());
            prop_assert!(!guidance.info.actions.is_empty());
            prop_assert!(guidance.doctors.iter().all(|d| d.treats(&name)));
        }
    }
}
