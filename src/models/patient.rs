//! Patient-level data: demographics, vital signs, history and request input

use std::fmt;

use serde::{Deserialize, Serialize};

/// Patient gender as used by the feature encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Interpret free-form input; only a case-insensitive "female" is Female
    ///
    /// Surrounding whitespace is not stripped, so " female " is Male.
    #[must_use]
    pub fn from_input(value: &str) -> Self {
        if value.eq_ignore_ascii_case("female") {
            Self::Female
        } else {
            Self::Male
        }
    }

    /// Decode the binary indicator used in feature rows
    #[must_use]
    pub fn from_indicator(value: f64) -> Self {
        if value >= 0.5 { Self::Female } else { Self::Male }
    }

    /// Binary indicator: Female=1, Male=0
    #[must_use]
    pub const fn indicator(self) -> f64 {
        match self {
            Self::Male => 0.0,
            Self::Female => 1.0,
        }
    }

    /// Category label written to datasets
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Age and gender of a case
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Demographics {
    /// Age in years, 5..=85 for generated cases
    pub age: u32,
    pub gender: Gender,
}

/// Vital-sign measurements
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VitalSigns {
    /// Body temperature in °C
    pub temperature: f64,
    pub systolic_bp: u32,
    pub diastolic_bp: u32,
    pub heart_rate: u32,
}

impl VitalSigns {
    /// Default temperature used when none is reported
    pub const NORMAL_TEMPERATURE: f64 = 36.6;
    /// Default systolic pressure used when none is reported
    pub const NORMAL_SYSTOLIC: u32 = 120;
    /// Default diastolic pressure used when none is reported
    pub const NORMAL_DIASTOLIC: u32 = 80;
    /// Default heart rate used when none is reported
    pub const NORMAL_HEART_RATE: u32 = 72;

    /// Clinically normal readings
    #[must_use]
    pub const fn normal() -> Self {
        Self {
            temperature: Self::NORMAL_TEMPERATURE,
            systolic_bp: Self::NORMAL_SYSTOLIC,
            diastolic_bp: Self::NORMAL_DIASTOLIC,
            heart_rate: Self::NORMAL_HEART_RATE,
        }
    }
}

impl Default for VitalSigns {
    fn default() -> Self {
        Self::normal()
    }
}

/// Lifestyle history of a case
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HistoryFlags {
    pub smoking: bool,
    pub alcohol: bool,
    /// 0 = none, 3 = very active
    pub exercise_frequency: u8,
    pub obesity: bool,
}

impl HistoryFlags {
    /// Highest exercise level
    pub const MAX_EXERCISE: u8 = 3;
}

/// Partially reported vitals; missing fields fall back to [`VitalSigns::normal`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VitalsInput {
    pub temperature: Option<f64>,
    pub systolic: Option<u32>,
    pub diastolic: Option<u32>,
    pub heart_rate: Option<u32>,
}

impl VitalsInput {
    /// Fill missing readings with normal baselines
    #[must_use]
    pub fn resolve(&self) -> VitalSigns {
        VitalSigns {
            temperature: self.temperature.unwrap_or(VitalSigns::NORMAL_TEMPERATURE),
            systolic_bp: self.systolic.unwrap_or(VitalSigns::NORMAL_SYSTOLIC),
            diastolic_bp: self.diastolic.unwrap_or(VitalSigns::NORMAL_DIASTOLIC),
            heart_rate: self.heart_rate.unwrap_or(VitalSigns::NORMAL_HEART_RATE),
        }
    }
}

/// Everything a user reports for a single prediction request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatientInput {
    /// Reported symptom names; names outside the model's columns are ignored
    pub symptoms: Vec<String>,
    pub age: u32,
    /// Free-form gender text
    pub gender: String,
    pub vitals: Option<VitalsInput>,
    /// History tokens such as "Current smoker", "Moderate" or "Obesity"
    pub history: Vec<String>,
}

impl Default for PatientInput {
    fn default() -> Self {
        Self {
            symptoms: Vec::new(),
            age: 25,
            gender: Gender::Male.as_str().to_string(),
            vitals: None,
            history: Vec::new(),
        }
    }
}

impl PatientInput {
    /// Create an input with the given symptoms and default demographics
    pub fn with_symptoms<I, S>(symptoms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            symptoms: symptoms.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Set age and gender
    #[must_use]
    pub fn demographics(mut self, age: u32, gender: impl Into<String>) -> Self {
        self.age = age;
        self.gender = gender.into();
        self
    }

    /// Set reported vitals
    #[must_use]
    pub fn vitals(mut self, vitals: VitalsInput) -> Self {
        self.vitals = Some(vitals);
        self
    }

    /// Set history tokens
    #[must_use]
    pub fn history<I, S>(mut self, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.history = tokens.into_iter().map(Into::into).collect();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gender_from_input() {
        assert_eq!(Gender::from_input("Female"), Gender::Female);
        assert_eq!(Gender::from_input("FEMALE"), Gender::Female);
        assert_eq!(Gender::from_input("male"), Gender::Male);
        assert_eq!(Gender::from_input("other"), Gender::Male);
        assert_eq!(Gender::from_input(""), Gender::Male);
    }

    #[test]
    fn test_partial_vitals_resolve_to_baselines() {
        let vitals = VitalsInput {
            temperature: Some(39.2),
            ..VitalsInput::default()
        }
        .resolve();
        assert_eq!(vitals.temperature, 39.2);
        assert_eq!(vitals.systolic_bp, 120);
        assert_eq!(vitals.diastolic_bp, 80);
        assert_eq!(vitals.heart_rate, 72);
    }

    #[test]
    fn test_patient_input_from_json_uses_defaults() {
        let input: PatientInput = serde_json::from_str(r#"{"symptoms": ["Fever"]}"#).unwrap();
        assert_eq!(input.age, 25);
        assert_eq!(input.gender, "Male");
        assert!(input.vitals.is_none());
        assert!(input.history.is_empty());
    }

    #[test]
    fn test_gender_input_is_not_trimmed() {
        assert_eq!(Gender::from_input("FeMaLe"), Gender::Female);
        assert_eq!(Gender::from_input(" female "), Gender::Male);
        assert_eq!(Gender::from_input("f"), Gender::Male);
    }
}
