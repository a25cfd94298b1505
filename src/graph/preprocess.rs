use super::fileio::{read_csv_file, Table};

use anyhow::{Context, Result};
use fs_err as fs;
use log::info;
use serde::Serialize;

use std::collections::HashMap;
use std::path::{Path, PathBuf};

pub const AVERAGE_BY_TYPE_CSV: &str = "socialMediaAvg.csv";
pub const AVERAGE_BY_DATE_CSV: &str = "socialMediaTime.csv";

/// Column names of the raw per-post table.
#[derive(Clone, Debug)]
pub struct RawColumns {
    pub group: String,
    pub subgroup: String,
    pub date: String,
    pub measure: String,
}

impl Default for RawColumns {
    fn default() -> Self {
        Self {
            group: "Platform".to_string(),
            subgroup: "PostType".to_string(),
            date: "Date".to_string(),
            measure: "Likes".to_string(),
        }
    }
}

#[derive(Debug, PartialEq, Serialize)]
pub struct AverageByType {
    #[serde(rename = "Platform")]
    pub platform: String,
    #[serde(rename = "PostType")]
    pub post_type: String,
    #[serde(rename = "AvgLikes")]
    pub avg_likes: f64,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct AverageByDate {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "AvgLikes")]
    pub avg_likes: f64,
}

/// Running mean per key, remembering the order keys first appeared in.
struct OrderedMeans<K> {
    order: Vec<K>,
    sums: HashMap<K, (f64, usize)>,
}

impl<K: Clone + Eq + std::hash::Hash> OrderedMeans<K> {
    fn new() -> Self {
        Self {
            order: Vec::new(),
            sums: HashMap::new(),
        }
    }

    fn add(&mut self, key: K, value: f64) {
        if !self.sums.contains_key(&key) {
            self.order.push(key.clone());
        }
        let entry = self.sums.entry(key).or_insert((0.0, 0));
        entry.0 += value;
        entry.1 += 1;
    }

    fn into_means(self) -> Vec<(K, f64)> {
        let Self { order, sums } = self;
        order
            .into_iter()
            .map(|key| {
                let (sum, count) = sums[&key];
                (key, sum / count as f64)
            })
            .collect()
    }
}

pub fn average_by_type(table: &Table, columns: &RawColumns) -> Result<Vec<AverageByType>> {
    table.require_columns(&[
        columns.group.as_str(),
        columns.subgroup.as_str(),
        columns.measure.as_str(),
    ])?;

    let mut means = OrderedMeans::new();
    for record in &table.records {
        let key = (
            record.text(&columns.group)?.to_string(),
            record.text(&columns.subgroup)?.to_string(),
        );
        means.add(key, record.number(&columns.measure)?);
    }

    Ok(means
        .into_means()
        .into_iter()
        .map(|((platform, post_type), avg_likes)| AverageByType {
            platform,
            post_type,
            avg_likes,
        })
        .collect())
}

pub fn average_by_date(table: &Table, columns: &RawColumns) -> Result<Vec<AverageByDate>> {
    table.require_columns(&[columns.date.as_str(), columns.measure.as_str()])?;

    let mut means = OrderedMeans::new();
    for record in &table.records {
        means.add(
            record.text(&columns.date)?.to_string(),
            record.number(&columns.measure)?,
        );
    }

    Ok(means
        .into_means()
        .into_iter()
        .map(|(date, avg_likes)| AverageByDate { date, avg_likes })
        .collect())
}

fn write_rows<T: Serialize>(path: &Path, rows: &[T]) -> Result<()> {
    let file = fs::File::create(path)?;
    let mut writer = csv::Writer::from_writer(file);
    for row in rows {
        writer.serialize(row)?;
    }
    writer
        .flush()
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

/// Derive the two averaged tables from the raw per-post CSV and write them to
/// `out_dir`. Returns the written paths.
pub fn prepare_data(
    raw_csv: &Path,
    out_dir: &Path,
    columns: &RawColumns,
) -> Result<Vec<PathBuf>> {
    let table = read_csv_file(raw_csv)?;
    let by_type = average_by_type(&table, columns)?;
    let by_date = average_by_date(&table, columns)?;

    fs::create_dir_all(out_dir)?;
    let by_type_path = out_dir.join(AVERAGE_BY_TYPE_CSV);
    write_rows(&by_type_path, &by_type)?;
    info!(
        "{} averages by {}/{} -> {}",
        by_type.len(),
        columns.group,
        columns.subgroup,
        by_type_path.display()
    );

    let by_date_path = out_dir.join(AVERAGE_BY_DATE_CSV);
    write_rows(&by_date_path, &by_date)?;
    info!(
        "{} averages by {} -> {}",
        by_date.len(),
        columns.date,
        by_date_path.display()
    );

    Ok(vec![by_type_path, by_date_path])
}
