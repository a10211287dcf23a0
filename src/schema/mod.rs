//! Feature schema shared by data generation, training and inference.
//!
//! A [`FeatureSchema`] is the single source of truth for which columns a
//! feature row has, in which order, and how each column is encoded. The
//! generator builds rows over [`FeatureSchema::canonical`]; the aligner builds
//! rows over the schema rebuilt from the persisted column list.

pub mod column;

pub use column::{ColumnDefinition, ColumnKind};

use rustc_hash::FxHashMap;

use crate::error::{PredictError, Result};
use crate::vocabulary::{LABEL_COLUMN, PATIENT_COLUMNS, SYMPTOMS};

/// Ordered column layout of a feature row
#[derive(Debug, Clone)]
pub struct FeatureSchema {
    columns: Vec<ColumnDefinition>,
    index: FxHashMap<String, usize>,
}

impl PartialEq for FeatureSchema {
    fn eq(&self, other: &Self) -> bool {
        self.columns == other.columns
    }
}

impl Eq for FeatureSchema {}

impl FeatureSchema {
    /// The generation-time layout: every symptom in vocabulary order followed
    /// by the patient columns
    #[must_use]
    pub fn canonical() -> Self {
        let columns = SYMPTOMS
            .iter()
            .chain(PATIENT_COLUMNS.iter())
            .map(|name| ColumnDefinition::new(*name))
            .collect();
        Self::from_definitions(columns)
    }

    /// Rebuild a schema from a persisted, ordered column list
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Result<Self> {
        let mut columns = Vec::with_capacity(names.len());
        let mut seen = FxHashMap::default();
        for (i, name) in names.iter().enumerate() {
            let name = name.as_ref();
            if name == LABEL_COLUMN {
                return Err(PredictError::SchemaMismatch(format!(
                    "label column '{LABEL_COLUMN}' cannot be a feature"
                )));
            }
            if let Some(previous) = seen.insert(name.to_string(), i) {
                return Err(PredictError::SchemaMismatch(format!(
                    "duplicate column '{name}' at positions {previous} and {i}"
                )));
            }
            columns.push(ColumnDefinition::new(name));
        }
        Ok(Self {
            columns,
            index: seen,
        })
    }

    fn from_definitions(columns: Vec<ColumnDefinition>) -> Self {
        let index = columns
            .iter()
            .enumerate()
            .map(|(i, c)| (c.name.clone(), i))
            .collect();
        Self { columns, index }
    }

    /// Number of columns
    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Whether the schema has no columns
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Position of a column by name
    #[must_use]
    pub fn position(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Whether the schema contains a column
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Column definitions in order
    #[must_use]
    pub fn columns(&self) -> &[ColumnDefinition] {
        &self.columns
    }

    /// Column names in order
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.columns.iter().map(|c| c.name.as_str())
    }

    /// Column names as an owned list, the form persisted as an artifact
    #[must_use]
    pub fn to_names(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.name.clone()).collect()
    }

    /// Positions and names of the columns that are scaled
    pub fn numeric_columns(&self) -> impl Iterator<Item = (usize, &str)> + '_ {
        self.columns
            .iter()
            .enumerate()
            .filter(|(_, c)| c.kind.is_numeric())
            .map(|(i, c)| (i, c.name.as_str()))
    }

    /// Header line for a persisted dataset, including the label column
    #[must_use]
    pub fn dataset_header(&self) -> Vec<&str> {
        self.names().chain(std::iter::once(LABEL_COLUMN)).collect()
    }
}
