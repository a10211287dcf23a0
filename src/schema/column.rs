//! Column definitions for feature rows
//!
//! Each column carries the rule used to encode its value into a persisted
//! dataset cell and to decode it back into the dense numeric row.

use std::fmt;

use crate::models::Gender;
use crate::vocabulary::{
    AGE, ALCOHOL_CONSUMPTION, DIASTOLIC_BP, EXERCISE_FREQUENCY, GENDER, HEART_RATE,
    OBESITY_STATUS, SMOKING_HISTORY, SYSTOLIC_BP, TEMPERATURE,
};

/// Semantic type of a feature column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// Binary symptom presence slot
    Symptom,
    /// Continuous or integer measurement that is scaled before inference
    Numeric {
        /// Decimal places written to datasets
        precision: usize,
    },
    /// Gender, persisted as a category and encoded Female=1, Male=0
    Gender,
    /// Binary lifestyle or history flag
    Flag,
    /// Small ordinal scale
    Ordinal {
        /// Largest allowed level
        max: u8,
    },
}

impl ColumnKind {
    /// Resolve the kind of a column from its name
    ///
    /// Anything that is not one of the patient columns is a symptom slot.
    #[must_use]
    pub fn for_name(name: &str) -> Self {
        match name {
            AGE | SYSTOLIC_BP | DIASTOLIC_BP | HEART_RATE => Self::Numeric { precision: 0 },
            TEMPERATURE => Self::Numeric { precision: 1 },
            GENDER => Self::Gender,
            SMOKING_HISTORY | ALCOHOL_CONSUMPTION | OBESITY_STATUS => Self::Flag,
            EXERCISE_FREQUENCY => Self::Ordinal { max: 3 },
            _ => Self::Symptom,
        }
    }

    /// Whether the column is transformed by the fitted scaler
    #[must_use]
    pub const fn is_numeric(self) -> bool {
        matches!(self, Self::Numeric { .. })
    }

    /// Render an encoded value as a dataset cell
    #[must_use]
    pub fn encode_cell(self, value: f64) -> String {
        match self {
            Self::Numeric { precision } => format!("{value:.precision$}"),
            Self::Gender => Gender::from_indicator(value).as_str().to_string(),
            Self::Symptom | Self::Flag | Self::Ordinal { .. } => format!("{}", value.round() as i64),
        }
    }

    /// Parse a dataset cell back into its encoded value
    pub fn decode_cell(self, raw: &str) -> std::result::Result<f64, String> {
        let raw = raw.trim();
        match self {
            Self::Gender => match raw {
                "Male" | "0" => Ok(0.0),
                "Female" | "1" => Ok(1.0),
                other => Err(format!("unrecognized gender '{other}'")),
            },
            Self::Numeric { .. } => raw
                .parse::<f64>()
                .map_err(|e| format!("invalid number '{raw}': {e}")),
            Self::Symptom | Self::Flag => match raw.parse::<f64>() {
                Ok(v) if v == 0.0 || v == 1.0 => Ok(v),
                Ok(v) => Err(format!("expected 0 or 1, found {v}")),
                Err(e) => Err(format!("invalid flag '{raw}': {e}")),
            },
            Self::Ordinal { max } => match raw.parse::<u8>() {
                Ok(v) if v <= max => Ok(f64::from(v)),
                Ok(v) => Err(format!("level {v} exceeds maximum {max}")),
                Err(e) => Err(format!("invalid level '{raw}': {e}")),
            },
        }
    }
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Symptom => write!(f, "Symptom"),
            Self::Numeric { .. } => write!(f, "Numeric"),
            Self::Gender => write!(f, "Gender"),
            Self::Flag => write!(f, "Flag"),
            Self::Ordinal { max } => write!(f, "Ordinal(0..={max})"),
        }
    }
}

/// A single named column in a feature schema
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDefinition {
    /// Column header as persisted
    pub name: String,
    /// Encoding rule for the column
    pub kind: ColumnKind,
}

impl ColumnDefinition {
    /// Create a column whose kind is resolved from its name
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let kind = ColumnKind::for_name(&name);
        Self { name, kind }
    }
}
