//! Fixed symptom, column and disease vocabularies.
//!
//! These lists define the layout of every feature row. Symptom names are kept
//! exactly as they appear in persisted datasets, including historical
//! spellings, so that previously trained models keep aligning.

use std::fmt;
use std::str::FromStr;

use crate::error::PredictError;

/// Ordered symptom vocabulary, one binary slot per entry
pub const SYMPTOMS: [&str; 69] = [
    // General
    "Fever",
    "Weakness",
    "Fatigue",
    "Weight loss",
    "Weight gain",
    "night sweats",
    "Chills",
    "Loss of appetite",
    // Neurological
    "Headache",
    "Confusion",
    "Fainting",
    "Tingling",
    "Dizziness",
    "Numbness",
    "Memory problems",
    "Blurred vision",
    // Respiratory
    "Cough",
    "Wheezing",
    "Sore throat",
    "Nazal congestion",
    "Shortness of breath",
    "Chest tightness",
    "Runny nose",
    "Sneezing",
    // Cardiovascular
    "Chest pain",
    "Rapid heartbeat",
    "Swelling in legs",
    "Palpitations",
    "Slow heartbeat",
    "High blood pressure",
    // Digestive
    "Nausea",
    "Diarrhea",
    "Vomiting",
    "Abdominal pain",
    "Constipation",
    "Bloating",
    "Heartburn",
    "Blood in stool",
    // Musculoskeletal
    "Joint pain",
    "Muscle aches",
    "Stiffness",
    "Swelling in joints",
    "Limited mobility",
    "Cramping",
    "Neck pain",
    // Skin
    "Rash",
    "Hives",
    "Dry skin",
    "Slow wound healing",
    "Itching",
    "Skin decoloration",
    "Bruising Easily",
    // Mental health
    "Anxiety",
    "Depression",
    "Insomnia",
    "Mood swings",
    "Difficulty in concentrating",
    "Irritability",
    // Specific markers
    "Jaundice",
    "Dark urine",
    "Pale stool",
    "Skin scaling",
    "Joint redness",
    "Cold intolerance",
    "Frequent urination",
    "Excessive thirst",
    "Chronic cough",
    "Swollen lymph nodes",
    "Pain behind eyes",
];

/// Patient age column
pub const AGE: &str = "Age";
/// Gender column, persisted as "Male"/"Female"
pub const GENDER: &str = "Gender";
/// Body temperature in °C
pub const TEMPERATURE: &str = "Temperature";
/// Systolic blood pressure
pub const SYSTOLIC_BP: &str = "Systolic_BP";
/// Diastolic blood pressure
pub const DIASTOLIC_BP: &str = "Diastolic_BP";
/// Resting heart rate
pub const HEART_RATE: &str = "Heart_Rate";
/// Smoking history flag
pub const SMOKING_HISTORY: &str = "Smoking_History";
/// Alcohol consumption flag
pub const ALCOHOL_CONSUMPTION: &str = "Alcohol_Consumption";
/// Exercise frequency, ordinal 0..=3
pub const EXERCISE_FREQUENCY: &str = "Exercise_Frequency";
/// Obesity flag
pub const OBESITY_STATUS: &str = "Obesity_Status";

/// Label column appended to persisted datasets
pub const LABEL_COLUMN: &str = "Disease";

/// Columns that pass through the fitted scaler
pub const NUMERIC_COLUMNS: [&str; 5] = [AGE, TEMPERATURE, SYSTOLIC_BP, DIASTOLIC_BP, HEART_RATE];

/// Non-symptom columns in their fixed order after the symptom block
pub const PATIENT_COLUMNS: [&str; 10] = [
    AGE,
    GENDER,
    TEMPERATURE,
    SYSTOLIC_BP,
    DIASTOLIC_BP,
    HEART_RATE,
    SMOKING_HISTORY,
    ALCOHOL_CONSUMPTION,
    EXERCISE_FREQUENCY,
    OBESITY_STATUS,
];

/// Position of a symptom in the vocabulary
#[must_use]
pub fn symptom_index(name: &str) -> Option<usize> {
    SYMPTOMS.iter().position(|s| *s == name)
}

/// Disease labels the generator and classifier know about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Disease {
    CommonCold,
    Influenza,
    Covid19,
    Diabetes,
    Hypertension,
    Anemia,
    Gastroenteritis,
    Asthma,
    Arthritis,
    Depression,
    AnxietyDisorder,
    Migraine,
    Pneumonia,
    UrinaryTractInfection,
    Hyperthyroidism,
    VitaminDDeficiency,
    LymeDisease,
    Tuberculosis,
    Dengue,
    Malaria,
    Typhoid,
    Hepatitis,
    ChronicKidneyDisease,
    Gerd,
    Psoriasis,
    Gout,
    Hypothyroidism,
}

impl Disease {
    /// Every disease, in generation order
    pub const ALL: [Self; 27] = [
        Self::CommonCold,
        Self::Influenza,
        Self::Covid19,
        Self::Diabetes,
        Self::Hypertension,
        Self::Anemia,
        Self::Gastroenteritis,
        Self::Asthma,
        Self::Arthritis,
        Self::Depression,
        Self::AnxietyDisorder,
        Self::Migraine,
        Self::Pneumonia,
        Self::UrinaryTractInfection,
        Self::Hyperthyroidism,
        Self::VitaminDDeficiency,
        Self::LymeDisease,
        Self::Tuberculosis,
        Self::Dengue,
        Self::Malaria,
        Self::Typhoid,
        Self::Hepatitis,
        Self::ChronicKidneyDisease,
        Self::Gerd,
        Self::Psoriasis,
        Self::Gout,
        Self::Hypothyroidism,
    ];

    /// Get all diseases in generation order
    #[must_use]
    pub fn all() -> &'static [Self] {
        &Self::ALL
    }

    /// The label used in datasets, model classes and the knowledge tables
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::CommonCold => "Common Cold",
            Self::Influenza => "Influenza",
            Self::Covid19 => "COVID-19",
            Self::Diabetes => "Diabetes",
            Self::Hypertension => "Hypertension",
            Self::Anemia => "Anemia",
            Self::Gastroenteritis => "Gastroenteritis",
            Self::Asthma => "Asthma",
            Self::Arthritis => "Arthritis",
            Self::Depression => "Depression",
            Self::AnxietyDisorder => "Anxiety Disorder",
            Self::Migraine => "Migraine",
            Self::Pneumonia => "Pneumonia",
            Self::UrinaryTractInfection => "Urinary Tract Infection",
            Self::Hyperthyroidism => "Hyperthyroidism",
            Self::VitaminDDeficiency => "Vitamin D Deficiency",
            Self::LymeDisease => "Lyme Disease",
            Self::Tuberculosis => "Tuberculosis",
            Self::Dengue => "Dengue",
            Self::Malaria => "Malaria",
            Self::Typhoid => "Typhoid",
            Self::Hepatitis => "Hepatitis",
            Self::ChronicKidneyDisease => "Chronic Kidney Disease",
            Self::Gerd => "GERD",
            Self::Psoriasis => "Psoriasis",
            Self::Gout => "Gout",
            Self::Hypothyroidism => "Hypothyroidism",
        }
    }
}

impl fmt::Display for Disease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Disease {
    type Err = PredictError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|d| d.name() == s)
            .ok_or_else(|| PredictError::UnknownDisease(s.to_string()))
    }
}
