//! Chart pipelines. Each chart turns table rows into geometry with pure
//! functions and then draws that geometry onto a [`Canvas`].

pub mod bar_chart;
pub mod box_plot;
pub mod line_chart;

use crate::description::{ChartDescription, ChartKind};
use crate::graph::config::GraphConfig;
use crate::graph::fileio::Table;
use crate::render::axis::{
    axis_bottom, axis_left, x_axis_label, y_axis_label, AxisScale, LabelRotation,
};
use crate::render::scale::LinearScale;
use crate::render::svg::Canvas;

use anyhow::{Context, Result};
use log::debug;

/// Render one chart of `table` to SVG text.
pub fn render_chart(chart: &ChartDescription, table: &Table) -> Result<String> {
    let config = &chart.config;
    let mut canvas = Canvas::new(config.width, config.height, config.margin);
    let drawn = match &chart.kind {
        ChartKind::BoxPlot { group, measure } => {
            box_plot::draw(&mut canvas, table, group, measure, config)
        }
        ChartKind::GroupedBar {
            group,
            subgroup,
            measure,
        } => bar_chart::draw(&mut canvas, table, group, subgroup, measure, config),
        ChartKind::Line { x, measure } => {
            line_chart::draw(&mut canvas, table, x, measure, config)
        }
    };
    drawn.with_context(|| format!("Failed to draw chart '{}'", chart.name))?;
    Ok(canvas.render())
}

/// `(key, measure)` for every record, rejecting non-numeric measures.
pub fn keyed_measures(table: &Table, key: &str, measure: &str) -> Result<Vec<(String, f64)>> {
    table.require_columns(&[key, measure])?;
    table
        .records
        .iter()
        .map(|record| Ok((record.text(key)?.to_string(), record.number(measure)?)))
        .collect()
}

/// Linear y scale from 0 to the largest value times `headroom`, drawn
/// bottom-up over `inner_height`. The largest value may be negative; only an
/// empty input falls back to `[0, 0]`.
pub fn value_scale(
    values: impl IntoIterator<Item = f64>,
    headroom: f64,
    inner_height: f64,
) -> LinearScale {
    let max = values.into_iter().reduce(f64::max).unwrap_or(0.0);
    debug!("value axis: 0..{} (headroom {})", max, headroom);
    LinearScale::new((0.0, max * headroom), (inner_height, 0.0))
}

/// Both axes plus their labels.
pub fn draw_axes<X: AxisScale>(
    canvas: &mut Canvas,
    x: &X,
    y: &LinearScale,
    config: &GraphConfig,
) {
    let width = canvas.inner_width();
    let height = canvas.inner_height();
    let margin = canvas.margin();
    let rotation = config
        .x_label_rotation
        .map(|degrees| LabelRotation { degrees });

    canvas.draw(axis_bottom(x, height, rotation));
    canvas.draw(axis_left(y));
    canvas.draw(x_axis_label(&config.x_label, width, height, margin.bottom));
    canvas.draw(y_axis_label(&config.y_label, height, margin.left));
}
