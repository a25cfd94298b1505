use crate::render::svg::Margin;

use serde::{Deserialize, Serialize};

use std::fmt;

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum GraphOutputType {
    /// Only the per-chart `.svg` files.
    SVG,
    /// The `.svg` files plus an `index.html` hosting every chart.
    #[default]
    HTML,
}

impl fmt::Display for GraphOutputType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let output = match self {
            Self::SVG => "svg",
            Self::HTML => "html",
        };
        write!(f, "{}", output)
    }
}

/// Layout and styling of one chart. Missing JSON fields take the defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Outer width, margins included.
    pub width: f64,
    /// Outer height, margins included.
    pub height: f64,
    pub margin: Margin,
    pub x_label: String,
    pub y_label: String,
    /// Padding of the outer band scale.
    pub band_padding: f64,
    /// Padding of the nested band scale of grouped bars.
    pub inner_padding: f64,
    /// The y domain is `[0, max * y_headroom]`.
    pub y_headroom: f64,
    pub colors: Vec<String>,
    pub stroke: String,
    pub stroke_width: f64,
    pub x_label_rotation: Option<f64>,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 500.0,
            margin: Margin::new(50.0, 50.0, 70.0, 70.0),
            x_label: String::new(),
            y_label: String::new(),
            band_padding: 0.2,
            inner_padding: 0.05,
            y_headroom: 1.0,
            colors: vec!["#69b3a2".to_string()],
            stroke: "black".to_string(),
            stroke_width: 1.0,
            x_label_rotation: None,
        }
    }
}

impl GraphConfig {
    pub fn box_plot() -> Self {
        Self {
            x_label: "Platform".to_string(),
            y_label: "Number of Likes".to_string(),
            ..Self::default()
        }
    }

    pub fn grouped_bar() -> Self {
        Self {
            margin: Margin::new(80.0, 200.0, 70.0, 70.0),
            x_label: "Platform".to_string(),
            y_label: "Average Number of Likes".to_string(),
            y_headroom: 1.1,
            colors: vec![
                "#1f77b4".to_string(),
                "#ff7f0e".to_string(),
                "#2ca02c".to_string(),
            ],
            ..Self::default()
        }
    }

    pub fn line() -> Self {
        Self {
            margin: Margin::new(50.0, 50.0, 100.0, 70.0),
            x_label: "Date".to_string(),
            y_label: "Average Number of Likes".to_string(),
            band_padding: 0.1,
            y_headroom: 1.1,
            colors: Vec::new(),
            stroke: "steelblue".to_string(),
            stroke_width: 2.0,
            x_label_rotation: Some(-25.0),
            ..Self::default()
        }
    }
}
