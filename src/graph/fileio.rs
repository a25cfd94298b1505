use crate::errors::ChartError;

use anyhow::{Context, Result};
use fs_err as fs;
use log::debug;

use csv::ReaderBuilder;
use std::collections::{BTreeMap, HashSet};
use std::hash::Hash;
use std::io::prelude::*;
use std::path::Path;

/// One data row of a CSV file, keyed by header name.
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    /// 1-based data row number (the header is row 0).
    pub row: usize,
    fields: BTreeMap<String, String>,
}

impl Record {
    pub fn new<K, V>(row: usize, fields: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            row,
            fields: fields
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields.get(column).map(String::as_str)
    }

    pub fn text(&self, column: &str) -> Result<&str> {
        match self.get(column) {
            Some(value) => Ok(value),
            None => Err(ChartError::missing_column(column).into()),
        }
    }

    /// Numeric value of `column`. Empty, unparsable and non-finite text is
    /// rejected with `InvalidInput`.
    pub fn number(&self, column: &str) -> Result<f64> {
        let raw = self.text(column)?;
        match raw.trim().parse::<f64>() {
            Ok(number) if number.is_finite() => Ok(number),
            _ => Err(ChartError::invalid_input(Some(self.row), column, raw).into()),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct Table {
    pub headers: Vec<String>,
    pub records: Vec<Record>,
}

impl Table {
    pub fn has_column(&self, column: &str) -> bool {
        self.headers.iter().any(|header| header == column)
    }

    pub fn require_columns(&self, columns: &[&str]) -> Result<()> {
        for column in columns {
            if !self.has_column(column) {
                return Err(ChartError::missing_column(column).into());
            }
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Distinct values in order of first appearance.
pub fn unique_in_order<T, I>(values: I) -> Vec<T>
where
    T: Eq + Hash + Clone,
    I: IntoIterator<Item = T>,
{
    let mut seen = HashSet::new();
    values
        .into_iter()
        .filter(|value| seen.insert(value.clone()))
        .collect()
}

pub fn create_file_from_string(path: &Path, data: &str) -> Result<()> {
    let mut file_out = fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;

    file_out
        .write_all(data.as_bytes())
        .with_context(|| format!("Failed to write {}", path.display()))?;

    debug!("wrote {} bytes to {}", data.len(), path.display());
    Ok(())
}

/// Read a CSV file whose first row names the columns.
pub fn read_csv_file(file_path: &Path) -> Result<Table> {
    let file = fs::File::open(file_path)?;
    read_csv(file)
        .with_context(|| format!("Failed to read records from {}", file_path.display()))
}

pub fn read_csv<R: Read>(reader: R) -> Result<Table> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let headers = csv_reader
        .headers()?
        .iter()
        .map(|str| str.to_string())
        .collect::<Vec<String>>();

    let mut records = Vec::new();
    for (index, result) in csv_reader.records().enumerate() {
        let row = result?;
        records.push(Record::new(
            index + 1,
            headers.iter().cloned().zip(row.iter().map(String::from)),
        ));
    }

    debug!("read {} records with columns {:?}", records.len(), headers);
    Ok(Table { headers, records })
}
