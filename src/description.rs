use crate::graph::config::{GraphConfig, GraphOutputType};
use crate::graph::preprocess::{AVERAGE_BY_DATE_CSV, AVERAGE_BY_TYPE_CSV};

use anyhow::{Context, Result};
use fs_err as fs;
use serde::{Deserialize, Serialize};

use std::path::Path;

/// Which chart to draw and which columns feed it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChartKind {
    BoxPlot {
        group: String,
        measure: String,
    },
    GroupedBar {
        group: String,
        subgroup: String,
        measure: String,
    },
    Line {
        x: String,
        measure: String,
    },
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChartDescription {
    /// Output file stem and id of the hosting container.
    pub name: String,
    /// CSV file, relative to the data directory.
    pub data_file: String,
    #[serde(flatten)]
    pub kind: ChartKind,
    #[serde(default)]
    pub config: GraphConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChartsDescription {
    pub title: String,
    #[serde(default)]
    pub output_type: GraphOutputType,
    pub charts: Vec<ChartDescription>,
}

impl Default for ChartsDescription {
    /// The box plot, grouped bar chart and line chart of the social media
    /// likes dataset.
    fn default() -> Self {
        Self {
            title: "Social media likes".to_string(),
            output_type: GraphOutputType::HTML,
            charts: vec![
                ChartDescription {
                    name: "boxplot".to_string(),
                    data_file: "socialMedia.csv".to_string(),
                    kind: ChartKind::BoxPlot {
                        group: "Platform".to_string(),
                        measure: "Likes".to_string(),
                    },
                    config: GraphConfig::box_plot(),
                },
                ChartDescription {
                    name: "barplot".to_string(),
                    data_file: AVERAGE_BY_TYPE_CSV.to_string(),
                    kind: ChartKind::GroupedBar {
                        group: "Platform".to_string(),
                        subgroup: "PostType".to_string(),
                        measure: "AvgLikes".to_string(),
                    },
                    config: GraphConfig::grouped_bar(),
                },
                ChartDescription {
                    name: "lineplot".to_string(),
                    data_file: AVERAGE_BY_DATE_CSV.to_string(),
                    kind: ChartKind::Line {
                        x: "Date".to_string(),
                        measure: "AvgLikes".to_string(),
                    },
                    config: GraphConfig::line(),
                },
            ],
        }
    }
}

impl ChartsDescription {
    pub fn write(&self, path: &Path) -> Result<()> {
        if let Some(dir_path) = path.parent() {
            if !dir_path.as_os_str().is_empty() && !dir_path.is_dir() {
                fs::create_dir_all(dir_path)?;
            }
        }
        let data = serde_json::to_string_pretty(self)?;
        fs::write(path, data)?;
        Ok(())
    }

    pub fn read(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)?;
        let description: ChartsDescription = serde_json::from_str(&data)
            .with_context(|| format!("Malformed chart description {}", path.display()))?;
        Ok(description)
    }
}
