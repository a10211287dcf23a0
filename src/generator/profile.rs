//! Per-disease generation profiles
//!
//! Each disease maps to a static [`DiseaseProfile`]: overrides that replace the
//! population baseline sample, a symptom presence pattern, an optional
//! signature symptom, and a handful of conditional triggers.

use crate::vocabulary::Disease;

/// Inclusive sampling range that applies with a given chance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band<T> {
    pub low: T,
    pub high: T,
    /// Probability that the band replaces the baseline value
    pub chance: f64,
}

impl<T> Band<T> {
    /// A band that always applies
    pub const fn always(low: T, high: T) -> Self {
        Self {
            low,
            high,
            chance: 1.0,
        }
    }

    /// A band that applies only in a share of cases
    pub const fn sometimes(low: T, high: T, chance: f64) -> Self {
        Self { low, high, chance }
    }
}

/// Conditional rules evaluated alongside the profile overrides
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Trigger {
    /// Switch a symptom on with a probability, after the main pattern
    Symptom {
        name: &'static str,
        probability: f64,
    },
    /// Resample the heart rate from a band when the case is a smoker
    SmokerHeartRate(Band<u32>),
}

/// Generation rule for one disease
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiseaseProfile {
    pub disease: Disease,
    pub age: Option<Band<u32>>,
    pub female_probability: Option<f64>,
    pub temperature: Option<Band<f64>>,
    pub systolic: Option<Band<u32>>,
    pub diastolic: Option<Band<u32>>,
    pub heart_rate: Option<Band<u32>>,
    pub smoking_probability: Option<f64>,
    pub obesity_probability: Option<f64>,
    pub exercise: Option<Band<u8>>,
    /// Symptom name and presence probability, applied in order
    pub symptoms: &'static [(&'static str, f64)],
    /// Symptom that is always present regardless of its drawn value
    pub signature: Option<&'static str>,
    pub triggers: &'static [Trigger],
}

const BASE: DiseaseProfile = DiseaseProfile {
    disease: Disease::CommonCold,
    age: None,
    female_probability: None,
    temperature: None,
    systolic: None,
    diastolic: None,
    heart_rate: None,
    smoking_probability: None,
    obesity_probability: None,
    exercise: None,
    symptoms: &[],
    signature: None,
    triggers: &[],
};

const FEBRILE: Band<f64> = Band::always(38.0, 40.5);
const FEBRILE_PULSE: Band<u32> = Band::always(95, 125);

/// Profiles indexed by `Disease as usize`
pub static PROFILES: [DiseaseProfile; 27] = [
    DiseaseProfile {
        disease: Disease::CommonCold,
        symptoms: &[
            ("Cough", 0.8),
            ("Sneezing", 0.8),
            ("Runny nose", 0.8),
            ("Sore throat", 0.8),
            ("Nazal congestion", 0.8),
        ],
        ..BASE
    },
    DiseaseProfile {
        disease: Disease::Influenza,
        temperature: Some(FEBRILE),
        heart_rate: Some(FEBRILE_PULSE),
        symptoms: &[
            ("Fever", 0.8),
            ("Fatigue", 0.8),
            ("Muscle aches", 0.8),
            ("Cough", 0.8),
            ("Chills", 0.8),
            ("Headache", 0.8),
        ],
        ..BASE
    },
    DiseaseProfile {
        disease: Disease::Covid19,
        age: Some(Band::always(20, 85)),
        temperature: Some(FEBRILE),
        heart_rate: Some(FEBRILE_PULSE),
        symptoms: &[
            ("Fever", 0.7),
            ("Cough", 0.7),
            ("Fatigue", 0.7),
            ("Shortness of breath", 0.7),
            ("Headache", 0.7),
            ("Loss of appetite", 0.7),
        ],
        ..BASE
    },
    DiseaseProfile {
        disease: Disease::Diabetes,
        age: Some(Band::always(45, 85)),
        obesity_probability: Some(0.6),
        exercise: Some(Band::always(0, 1)),
        symptoms: &[
            ("Fatigue", 0.6),
            ("Weight loss", 0.6),
            ("Blurred vision", 0.6),
            ("Slow wound healing", 0.6),
            ("Tingling", 0.6),
        ],
        triggers: &[Trigger::Symptom {
            name: "Weight gain",
            probability: 0.7,
        }],
        ..BASE
    },
    DiseaseProfile {
        disease: Disease::Hypertension,
        age: Some(Band::always(50, 85)),
        systolic: Some(Band::always(140, 180)),
        diastolic: Some(Band::always(90, 110)),
        heart_rate: Some(Band::always(85, 110)),
        obesity_probability: Some(0.5),
        smoking_probability: Some(0.6),
        symptoms: &[
            ("High blood pressure", 0.6),
            ("Headache", 0.6),
            ("Dizziness", 0.6),
            ("Palpitations", 0.6),
        ],
        ..BASE
    },
    DiseaseProfile {
        disease: Disease::Anemia,
        female_probability: Some(0.85),
        heart_rate: Some(Band::always(90, 115)),
        temperature: Some(Band::always(35.8, 36.5)),
        symptoms: &[
            ("Weakness", 0.7),
            ("Fatigue", 0.7),
            ("Dizziness", 0.7),
            ("Shortness of breath", 0.7),
        ],
        ..BASE
    },
    DiseaseProfile {
        disease: Disease::Gastroenteritis,
        symptoms: &[
            ("Nausea", 0.8),
            ("Vomiting", 0.8),
            ("Diarrhea", 0.8),
            ("Abdominal pain", 0.8),
            ("Loss of appetite", 0.8),
        ],
        ..BASE
    },
    DiseaseProfile {
        disease: Disease::Asthma,
        heart_rate: Some(Band::always(85, 110)),
        symptoms: &[
            ("Wheezing", 0.7),
            ("Shortness of breath", 0.7),
            ("Chest tightness", 0.7),
            ("Cough", 0.7),
        ],
        triggers: &[Trigger::SmokerHeartRate(Band::always(95, 120))],
        ..BASE
    },
    DiseaseProfile {
        disease: Disease::Arthritis,
        symptoms: &[
            ("Joint pain", 0.8),
            ("Stiffness", 0.8),
            ("Swelling in joints", 0.8),
            ("Limited mobility", 0.8),
        ],
        ..BASE
    },
    DiseaseProfile {
        disease: Disease::Depression,
        symptoms: &[
            ("Depression", 0.7),
            ("Fatigue", 0.7),
            ("Insomnia", 0.7),
            ("Loss of appetite", 0.7),
            ("Mood swings", 0.7),
        ],
        ..BASE
    },
    DiseaseProfile {
        disease: Disease::AnxietyDisorder,
        symptoms: &[
            ("Anxiety", 0.7),
            ("Palpitations", 0.7),
            ("Rapid heartbeat", 0.7),
            ("Difficulty in concentrating", 0.7),
            ("Irritability", 0.7),
            ("Insomnia", 0.7),
        ],
        ..BASE
    },
    DiseaseProfile {
        disease: Disease::Migraine,
        symptoms: &[
            ("Headache", 0.8),
            ("Nausea", 0.8),
            ("Blurred vision", 0.8),
            ("Dizziness", 0.8),
            ("Irritability", 0.8),
        ],
        signature: Some("Headache"),
        ..BASE
    },
    DiseaseProfile {
        disease: Disease::Pneumonia,
        temperature: Some(FEBRILE),
        heart_rate: Some(FEBRILE_PULSE),
        symptoms: &[
            ("Fever", 0.8),
            ("Cough", 0.8),
            ("Shortness of breath", 0.8),
            ("Chest pain", 0.8),
            ("Fatigue", 0.8),
            ("Chills", 0.8),
        ],
        ..BASE
    },
    DiseaseProfile {
        disease: Disease::UrinaryTractInfection,
        female_probability: Some(0.9),
        temperature: Some(Band::sometimes(37.5, 38.5, 0.6)),
        symptoms: &[
            ("Abdominal pain", 0.7),
            ("Fever", 0.7),
            ("Weakness", 0.7),
            ("Nausea", 0.7),
        ],
        ..BASE
    },
    DiseaseProfile {
        disease: Disease::Hyperthyroidism,
        female_probability: Some(0.85),
        heart_rate: Some(Band::always(100, 140)),
        temperature: Some(Band::always(37.3, 37.8)),
        symptoms: &[
            ("Weight loss", 0.7),
            ("Rapid heartbeat", 0.7),
            ("Anxiety", 0.7),
            ("Irritability", 0.7),
            ("Insomnia", 0.7),
            ("Muscle aches", 0.7),
        ],
        ..BASE
    },
    DiseaseProfile {
        disease: Disease::VitaminDDeficiency,
        symptoms: &[
            ("Fatigue", 0.7),
            ("Weakness", 0.7),
            ("Muscle aches", 0.7),
            ("Joint pain", 0.7),
            ("Depression", 0.7),
            ("Irritability", 0.7),
        ],
        ..BASE
    },
    DiseaseProfile {
        disease: Disease::LymeDisease,
        symptoms: &[
            ("Fever", 0.7),
            ("Fatigue", 0.7),
            ("Joint pain", 0.7),
            ("Headache", 0.7),
            ("Muscle aches", 0.7),
            ("Chills", 0.7),
        ],
        // One 0.5 draw per pattern symptom: 1 - 0.5^6
        triggers: &[Trigger::Symptom {
            name: "Confusion",
            probability: 0.984_375,
        }],
        ..BASE
    },
    DiseaseProfile {
        disease: Disease::Tuberculosis,
        temperature: Some(Band::always(37.5, 39.0)),
        symptoms: &[
            ("Chronic cough", 0.8),
            ("Weight loss", 0.8),
            ("night sweats", 0.8),
            ("Fatigue", 0.8),
            ("Fever", 0.8),
            ("Chest pain", 0.8),
        ],
        triggers: &[Trigger::Symptom {
            name: "Cough",
            probability: 0.4,
        }],
        ..BASE
    },
    DiseaseProfile {
        disease: Disease::Dengue,
        temperature: Some(Band::always(39.5, 41.0)),
        heart_rate: Some(Band::always(100, 130)),
        symptoms: &[
            ("Fever", 0.8),
            ("Rash", 0.8),
            ("Joint pain", 0.8),
            ("Muscle aches", 0.8),
            ("Headache", 0.8),
            ("Nausea", 0.8),
        ],
        triggers: &[Trigger::Symptom {
            name: "Pain behind eyes",
            probability: 0.5,
        }],
        ..BASE
    },
    DiseaseProfile {
        disease: Disease::Malaria,
        temperature: Some(Band::always(38.5, 40.5)),
        heart_rate: Some(Band::always(100, 120)),
        symptoms: &[
            ("Fever", 0.8),
            ("Chills", 0.8),
            ("Headache", 0.8),
            ("Vomiting", 0.8),
            ("Jaundice", 0.8),
            ("Muscle aches", 0.8),
        ],
        triggers: &[Trigger::Symptom {
            name: "night sweats",
            probability: 0.5,
        }],
        ..BASE
    },
    DiseaseProfile {
        disease: Disease::Typhoid,
        temperature: Some(Band::always(39.0, 40.5)),
        // Relatively slow pulse for the height of the fever
        heart_rate: Some(Band::always(80, 100)),
        symptoms: &[
            ("Fever", 0.8),
            ("Headache", 0.8),
            ("Abdominal pain", 0.8),
            ("Weakness", 0.8),
            ("Loss of appetite", 0.8),
            ("Rash", 0.8),
        ],
        triggers: &[Trigger::Symptom {
            name: "Confusion",
            probability: 0.6,
        }],
        ..BASE
    },
    DiseaseProfile {
        disease: Disease::Hepatitis,
        symptoms: &[
            ("Jaundice", 0.8),
            ("Dark urine", 0.8),
            ("Pale stool", 0.8),
            ("Nausea", 0.8),
            ("Fatigue", 0.8),
            ("Abdominal pain", 0.8),
        ],
        ..BASE
    },
    DiseaseProfile {
        disease: Disease::ChronicKidneyDisease,
        systolic: Some(Band::always(140, 170)),
        diastolic: Some(Band::always(90, 105)),
        symptoms: &[
            ("Swelling in legs", 0.7),
            ("Fatigue", 0.7),
            ("Shortness of breath", 0.7),
            ("Itching", 0.7),
            ("Confusion", 0.7),
            ("Nausea", 0.7),
        ],
        ..BASE
    },
    DiseaseProfile {
        disease: Disease::Gerd,
        symptoms: &[
            ("Heartburn", 0.8),
            ("Bloating", 0.8),
            ("Nausea", 0.8),
            ("Chest pain", 0.8),
            ("Sore throat", 0.8),
        ],
        signature: Some("Heartburn"),
        ..BASE
    },
    DiseaseProfile {
        disease: Disease::Psoriasis,
        symptoms: &[
            ("Skin scaling", 0.8),
            ("Itching", 0.8),
            ("Dry skin", 0.8),
            ("Joint pain", 0.8),
        ],
        signature: Some("Skin scaling"),
        ..BASE
    },
    DiseaseProfile {
        disease: Disease::Gout,
        symptoms: &[
            ("Joint redness", 0.8),
            ("Swelling in joints", 0.8),
            ("Stiffness", 0.8),
            ("Joint pain", 0.8),
        ],
        signature: Some("Joint redness"),
        ..BASE
    },
    DiseaseProfile {
        disease: Disease::Hypothyroidism,
        temperature: Some(Band::always(35.5, 36.4)),
        heart_rate: Some(Band::always(50, 65)),
        symptoms: &[
            ("Weight gain", 0.8),
            ("Fatigue", 0.8),
            ("Cold intolerance", 0.8),
            ("Depression", 0.8),
            ("Memory problems", 0.8),
            ("Muscle aches", 0.8),
        ],
        ..BASE
    },
];

/// Generation profile for a disease
#[must_use]
pub fn profile(disease: Disease) -> &'static DiseaseProfile {
    &PROFILES[disease as usize]
}

impl DiseaseProfile {
    /// Configured presence probability of a symptom, counting the signature
    /// symptom as certain
    #[must_use]
    pub fn symptom_probability(&self, symptom: &str) -> Option<f64> {
        if self.signature == Some(symptom) {
            return Some(1.0);
        }
        self.symptoms
            .iter()
            .find(|(name, _)| *name == symptom)
            .map(|(_, p)| *p)
    }
}
