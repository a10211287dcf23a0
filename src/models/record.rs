//! Feature records: one dense row over a [`FeatureSchema`]

use std::sync::Arc;

use crate::error::{PredictError, Result};
use crate::models::{Demographics, HistoryFlags, VitalSigns};
use crate::schema::FeatureSchema;
use crate::vocabulary::{
    AGE, ALCOHOL_CONSUMPTION, DIASTOLIC_BP, EXERCISE_FREQUENCY, GENDER, HEART_RATE,
    OBESITY_STATUS, SMOKING_HISTORY, SYSTOLIC_BP, TEMPERATURE,
};

fn flag(value: bool) -> f64 {
    if value { 1.0 } else { 0.0 }
}

/// A single feature row, optionally labelled with its disease
///
/// The row always has exactly one value per schema column; unset columns are
/// zero. Values are stored encoded (gender as 0/1, flags as 0/1).
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureRecord {
    schema: Arc<FeatureSchema>,
    values: Vec<f64>,
    label: Option<String>,
}

impl FeatureRecord {
    /// Create an all-zero row over a schema
    #[must_use]
    pub fn zeroed(schema: Arc<FeatureSchema>) -> Self {
        let values = vec![0.0; schema.len()];
        Self {
            schema,
            values,
            label: None,
        }
    }

    /// Create a row from explicit values
    pub fn from_values(
        schema: Arc<FeatureSchema>,
        values: Vec<f64>,
        label: Option<String>,
    ) -> Result<Self> {
        if values.len() != schema.len() {
            return Err(PredictError::SchemaMismatch(format!(
                "row has {} values but schema has {} columns",
                values.len(),
                schema.len()
            )));
        }
        Ok(Self {
            schema,
            values,
            label,
        })
    }

    /// Schema this row is laid out over
    #[must_use]
    pub fn schema(&self) -> &Arc<FeatureSchema> {
        &self.schema
    }

    /// Column names in row order
    pub fn column_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.schema.names()
    }

    /// Values in column order
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Mutable access to the values in column order
    pub fn values_mut(&mut self) -> &mut [f64] {
        &mut self.values
    }

    /// Value of a named column
    #[must_use]
    pub fn get(&self, column: &str) -> Option<f64> {
        self.schema.position(column).map(|i| self.values[i])
    }

    /// Set a named column; returns false if the schema has no such column
    pub fn set(&mut self, column: &str, value: f64) -> bool {
        match self.schema.position(column) {
            Some(i) => {
                self.values[i] = value;
                true
            }
            None => false,
        }
    }

    /// Encode demographics, vitals and history into their columns
    ///
    /// Columns missing from the schema are skipped, so the row stays strictly
    /// over the schema's column set.
    pub fn set_patient(
        &mut self,
        demographics: &Demographics,
        vitals: &VitalSigns,
        history: &HistoryFlags,
    ) {
        self.set(AGE, f64::from(demographics.age));
        self.set(GENDER, demographics.gender.indicator());
        self.set(TEMPERATURE, vitals.temperature);
        self.set(SYSTOLIC_BP, f64::from(vitals.systolic_bp));
        self.set(DIASTOLIC_BP, f64::from(vitals.diastolic_bp));
        self.set(HEART_RATE, f64::from(vitals.heart_rate));
        self.set(SMOKING_HISTORY, flag(history.smoking));
        self.set(ALCOHOL_CONSUMPTION, flag(history.alcohol));
        self.set(EXERCISE_FREQUENCY, f64::from(history.exercise_frequency));
        self.set(OBESITY_STATUS, flag(history.obesity));
    }

    /// Set a column by position
    pub fn set_at(&mut self, index: usize, value: f64) {
        self.values[index] = value;
    }

    /// Disease label, if the row is labelled
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Attach a disease label
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Number of columns
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the row has no columns
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
