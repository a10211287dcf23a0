//! Persisted labelled datasets
//!
//! Datasets are comma-separated text: a header with every feature column in
//! schema order plus the label column, then one row per case. Cells are
//! written with each column's encoding rule, so gender appears as
//! "Male"/"Female" and temperature with one decimal.

use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use itertools::Itertools;

use crate::error::{PredictError, Result};
use crate::models::FeatureRecord;
use crate::schema::FeatureSchema;
use crate::utils::logging::log_operation_start;
use crate::utils::{log_operation_complete, write_atomic};
use crate::vocabulary::LABEL_COLUMN;

const SEPARATOR: char = ',';

/// A set of labelled rows sharing one schema
#[derive(Debug, Clone)]
pub struct Dataset {
    schema: Arc<FeatureSchema>,
    records: Vec<FeatureRecord>,
}

impl Dataset {
    /// Create a dataset; every record must be laid out over `schema`
    #[must_use]
    pub fn new(schema: Arc<FeatureSchema>, records: Vec<FeatureRecord>) -> Self {
        debug_assert!(records.iter().all(|r| r.schema().as_ref() == schema.as_ref()));
        Self { schema, records }
    }

    #[must_use]
    pub fn schema(&self) -> &Arc<FeatureSchema> {
        &self.schema
    }

    #[must_use]
    pub fn records(&self) -> &[FeatureRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of rows per label, sorted by label
    #[must_use]
    pub fn label_counts(&self) -> Vec<(String, usize)> {
        self.records
            .iter()
            .filter_map(FeatureRecord::label)
            .counts()
            .into_iter()
            .map(|(label, count)| (label.to_string(), count))
            .sorted()
            .collect()
    }

    /// Write the dataset as comma-separated text
    pub fn write_csv(&self, path: &Path) -> Result<()> {
        let start = Instant::now();
        log_operation_start("Writing dataset to", path);

        let header = self.schema.dataset_header();
        if let Some(bad) = header.iter().find(|name| name.contains(SEPARATOR)) {
            return Err(PredictError::SchemaMismatch(format!(
                "column '{bad}' contains the separator"
            )));
        }

        write_atomic(path, |writer| {
            writeln!(writer, "{}", header.iter().join(","))?;
            for record in &self.records {
                let label = record.label().unwrap_or_default();
                if label.contains(SEPARATOR) {
                    return Err(PredictError::SchemaMismatch(format!(
                        "label '{label}' contains the separator"
                    )));
                }
                let mut cells = self
                    .schema
                    .columns()
                    .iter()
                    .zip(record.values())
                    .map(|(column, value)| column.kind.encode_cell(*value));
                writeln!(writer, "{},{}", cells.join(","), label)?;
            }
            Ok(())
        })?;

        log_operation_complete("wrote", path, self.records.len(), Some(start.elapsed()));
        Ok(())
    }

    /// Read a dataset written by [`Dataset::write_csv`]
    pub fn read_csv(path: &Path) -> Result<Self> {
        let start = Instant::now();
        log_operation_start("Reading dataset from", path);

        let reader = BufReader::new(File::open(path)?);
        let mut lines = reader.lines();

        let header_line = lines
            .next()
            .ok_or_else(|| PredictError::invalid_dataset(1, "missing header"))??;
        let header: Vec<&str> = header_line.split(SEPARATOR).map(str::trim).collect();
        let Some((&label_column, feature_columns)) = header.split_last() else {
            return Err(PredictError::invalid_dataset(1, "empty header"));
        };
        if label_column != LABEL_COLUMN {
            return Err(PredictError::invalid_dataset(
                1,
                format!("last column must be '{LABEL_COLUMN}', found '{label_column}'"),
            ));
        }
        let schema = Arc::new(FeatureSchema::from_names(feature_columns)?);

        let mut records = Vec::new();
        for (i, line) in lines.enumerate() {
            let line_no = i + 2;
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            records.push(parse_row(&schema, &line, line_no)?);
        }

        log_operation_complete("read", path, records.len(), Some(start.elapsed()));
        Ok(Self { schema, records })
    }
}

fn parse_row(schema: &Arc<FeatureSchema>, line: &str, line_no: usize) -> Result<FeatureRecord> {
    let cells: Vec<&str> = line.split(SEPARATOR).collect();
    if cells.len() != schema.len() + 1 {
        return Err(PredictError::invalid_dataset(
            line_no,
            format!("expected {} cells, found {}", schema.len() + 1, cells.len()),
        ));
    }

    let mut values = Vec::with_capacity(schema.len());
    for (column, raw) in schema.columns().iter().zip(&cells) {
        let value = column
            .kind
            .decode_cell(raw)
            .map_err(|e| PredictError::invalid_dataset(line_no, format!("{}: {e}", column.name)))?;
        values.push(value);
    }

    let label = cells[schema.len()].trim();
    if label.is_empty() {
        return Err(PredictError::invalid_dataset(line_no, "missing label"));
    }
    FeatureRecord::from_values(Arc::clone(schema), values, Some(label.to_string()))
}
