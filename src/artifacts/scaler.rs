//! Standard scaling of numeric feature columns

use std::collections::BTreeMap;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{PredictError, Result};
use crate::models::FeatureRecord;
use crate::schema::FeatureSchema;

/// Fitted location and spread of one numeric column
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColumnStats {
    pub mean: f64,
    /// Population standard deviation; never zero
    pub std_dev: f64,
}

impl ColumnStats {
    /// Compute the mean and population standard deviation of the values
    fn from_values(values: &[f64]) -> Self {
        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;
        let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
        let std_dev = variance.sqrt();
        Self {
            mean,
            // A constant column is centred but left unscaled
            std_dev: if std_dev > 0.0 { std_dev } else { 1.0 },
        }
    }

    /// Apply the affine transform
    #[must_use]
    pub fn transform(&self, value: f64) -> f64 {
        (value - self.mean) / self.std_dev
    }
}

/// Per-column standard scaler, persisted as a column → stats mapping
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StandardScaler {
    columns: BTreeMap<String, ColumnStats>,
}

impl StandardScaler {
    /// Fit on every numeric column of the schema
    pub fn fit(schema: &FeatureSchema, records: &[FeatureRecord]) -> Result<Self> {
        if records.is_empty() {
            return Err(PredictError::Training(
                "cannot fit a scaler on an empty dataset".to_string(),
            ));
        }

        let numeric: Vec<(usize, &str)> = schema.numeric_columns().collect();
        let columns = numeric
            .par_iter()
            .map(|&(index, name)| {
                let values: Vec<f64> = records.iter().map(|r| r.values()[index]).collect();
                (name.to_string(), ColumnStats::from_values(&values))
            })
            .collect();

        Ok(Self { columns })
    }

    /// Build a scaler from known statistics
    pub fn from_stats<I, S>(stats: I) -> Self
    where
        I: IntoIterator<Item = (S, ColumnStats)>,
        S: Into<String>,
    {
        Self {
            columns: stats.into_iter().map(|(name, s)| (name.into(), s)).collect(),
        }
    }

    /// Statistics of a column, if it was fitted
    #[must_use]
    pub fn stats(&self, column: &str) -> Option<&ColumnStats> {
        self.columns.get(column)
    }

    /// Names of the fitted columns
    pub fn columns(&self) -> impl Iterator<Item = &str> + '_ {
        self.columns.keys().map(String::as_str)
    }

    /// Check that every numeric column of the schema has statistics
    pub fn validate_covers(&self, schema: &FeatureSchema) -> Result<()> {
        let missing: Vec<&str> = schema
            .numeric_columns()
            .map(|(_, name)| name)
            .filter(|name| !self.columns.contains_key(*name))
            .collect();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(PredictError::InvalidArtifact(format!(
                "scaler has no parameters for numeric columns: {}",
                missing.join(", ")
            )))
        }
    }

    /// Scale a single value of a named column; `None` if the column was not fitted
    #[must_use]
    pub fn transform_value(&self, column: &str, value: f64) -> Option<f64> {
        self.columns.get(column).map(|stats| stats.transform(value))
    }

    /// Scale the numeric columns of a record in place
    ///
    /// Binary and ordinal columns pass through untouched.
    pub fn transform(&self, record: &mut FeatureRecord) {
        let schema = std::sync::Arc::clone(record.schema());
        let values = record.values_mut();
        for (index, name) in schema.numeric_columns() {
            if let Some(scaled) = self.transform_value(name, values[index]) {
                values[index] = scaled;
            }
        }
    }
}
