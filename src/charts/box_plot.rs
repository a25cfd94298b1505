use super::{draw_axes, keyed_measures, value_scale};
use crate::errors::ChartError;
use crate::graph::config::GraphConfig;
use crate::graph::fileio::Table;
use crate::graph::quartiles::GroupSummary;
use crate::graph::summarize::summarize;
use crate::render::scale::{BandScale, LinearScale};
use crate::render::svg::{number, Canvas, Element};

use anyhow::Result;
use log::debug;

const DEFAULT_FILL: &str = "#69b3a2";
const MEDIAN_STROKE_WIDTH: f64 = 2.0;

/// Pixel geometry of one box-and-whisker glyph.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoxGeometry {
    pub x: f64,
    pub width: f64,
    pub center: f64,
    /// y of the maximum.
    pub whisker_top: f64,
    /// y of the minimum.
    pub whisker_bottom: f64,
    /// y of the third quartile.
    pub box_top: f64,
    pub box_height: f64,
    pub median: f64,
}

pub fn box_geometry(
    summary: &GroupSummary,
    x: f64,
    bandwidth: f64,
    y: &LinearScale,
) -> BoxGeometry {
    let box_top = y.map(summary.q3);
    BoxGeometry {
        x,
        width: bandwidth,
        center: x + bandwidth / 2.0,
        whisker_top: y.map(summary.max),
        whisker_bottom: y.map(summary.min),
        box_top,
        box_height: y.map(summary.q1) - box_top,
        median: y.map(summary.median),
    }
}

/// Whisker, box and median line, in drawing order.
pub fn box_elements(geometry: &BoxGeometry, config: &GraphConfig) -> [Element; 3] {
    let fill = config
        .colors
        .first()
        .map(String::as_str)
        .unwrap_or(DEFAULT_FILL);
    let g = geometry;
    [
        Element::line(g.center, g.whisker_bottom, g.center, g.whisker_top)
            .attr("stroke", &config.stroke)
            .attr("stroke-width", number(config.stroke_width)),
        Element::rect(g.x, g.box_top, g.width, g.box_height)
            .attr("fill", fill)
            .attr("stroke", &config.stroke)
            .attr("stroke-width", number(config.stroke_width)),
        Element::line(g.x, g.median, g.x + g.width, g.median)
            .attr("stroke", &config.stroke)
            .attr("stroke-width", number(MEDIAN_STROKE_WIDTH)),
    ]
}

pub fn draw(
    canvas: &mut Canvas,
    table: &Table,
    group: &str,
    measure: &str,
    config: &GraphConfig,
) -> Result<()> {
    let points = keyed_measures(table, group, measure)?;

    let keys = points.iter().map(|p| p.0.clone());
    let x = BandScale::new(keys, (0.0, canvas.inner_width()))
        .padding(config.band_padding);
    let y = value_scale(
        points.iter().map(|p| p.1),
        config.y_headroom,
        canvas.inner_height(),
    );
    draw_axes(canvas, &x, &y, config);

    let summaries = summarize(&points, |p| p.0.clone(), |p| p.1)?;
    for key in x.domain() {
        let summary = match summaries.get(key) {
            Some(summary) => summary,
            None => continue,
        };
        let left = x
            .position(key)
            .ok_or_else(|| ChartError::unknown_group(key))?;
        let geometry = box_geometry(summary, left, x.bandwidth(), &y);
        debug!("{}: {:?}", key, geometry);
        for element in box_elements(&geometry, config) {
            canvas.draw(element);
        }
    }
    Ok(())
}
