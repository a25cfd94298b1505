use super::{draw_axes, value_scale};
use crate::errors::ChartError;
use crate::graph::config::GraphConfig;
use crate::graph::fileio::{unique_in_order, Table};
use crate::render::scale::{BandScale, LinearScale, OrdinalScale};
use crate::render::svg::{number, Canvas, Element};

use anyhow::Result;
use log::debug;

const LEGEND_OFFSET_X: f64 = 40.0;
const LEGEND_OFFSET_Y: f64 = 20.0;
const LEGEND_SWATCH: f64 = 18.0;
const LEGEND_SPACING: f64 = 30.0;
const FALLBACK_COLOR: &str = "gray";

#[derive(Clone, Debug, PartialEq)]
pub struct Bar {
    pub group: String,
    pub subgroup: String,
    pub value: f64,
}

/// Bar rectangle relative to its group's band.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarGeometry {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

pub fn bar_geometry(
    subgroup_left: f64,
    subgroup_width: f64,
    value: f64,
    y: &LinearScale,
    inner_height: f64,
) -> BarGeometry {
    let top = y.map(value);
    BarGeometry {
        x: subgroup_left,
        y: top,
        width: subgroup_width,
        height: inner_height - top,
    }
}

pub fn bars(table: &Table, group: &str, subgroup: &str, measure: &str) -> Result<Vec<Bar>> {
    table.require_columns(&[group, subgroup, measure])?;
    table
        .records
        .iter()
        .map(|record| {
            Ok(Bar {
                group: record.text(group)?.to_string(),
                subgroup: record.text(subgroup)?.to_string(),
                value: record.number(measure)?,
            })
        })
        .collect()
}

/// Colour swatch and name for every subgroup, stacked vertically.
pub fn legend(
    subgroups: &[String],
    colors: &OrdinalScale<String>,
    inner_width: f64,
) -> Element {
    let mut legend = Element::translated(inner_width + LEGEND_OFFSET_X, LEGEND_OFFSET_Y);
    for (i, subgroup) in subgroups.iter().enumerate() {
        let top = i as f64 * LEGEND_SPACING;
        let color = colors.color(subgroup).unwrap_or(FALLBACK_COLOR);
        legend = legend
            .child(Element::rect(0.0, top, LEGEND_SWATCH, LEGEND_SWATCH).attr("fill", color))
            .child(
                Element::text(LEGEND_SWATCH + 12.0, top + 14.0, subgroup)
                    .attr("alignment-baseline", "middle"),
            );
    }
    legend
}

pub fn draw(
    canvas: &mut Canvas,
    table: &Table,
    group: &str,
    subgroup: &str,
    measure: &str,
    config: &GraphConfig,
) -> Result<()> {
    let bars = bars(table, group, subgroup, measure)?;
    let inner_width = canvas.inner_width();
    let inner_height = canvas.inner_height();

    let x0 = BandScale::new(bars.iter().map(|b| b.group.clone()), (0.0, inner_width))
        .padding(config.band_padding);
    let subgroups = unique_in_order(bars.iter().map(|b| b.subgroup.clone()));
    let x1 = BandScale::new(subgroups.iter().cloned(), (0.0, x0.bandwidth()))
        .padding(config.inner_padding);
    let y = value_scale(bars.iter().map(|b| b.value), config.y_headroom, inner_height);
    let colors = OrdinalScale::new(subgroups.iter().cloned(), &config.colors);

    draw_axes(canvas, &x0, &y, config);

    for bar in &bars {
        let group_left = x0
            .position(&bar.group)
            .ok_or_else(|| ChartError::unknown_group(&bar.group))?;
        let subgroup_left = x1
            .position(&bar.subgroup)
            .ok_or_else(|| ChartError::unknown_group(&bar.subgroup))?;
        let geometry = bar_geometry(
            subgroup_left,
            x1.bandwidth(),
            bar.value,
            &y,
            inner_height,
        );
        debug!("{}/{}: {:?}", bar.group, bar.subgroup, geometry);

        let fill = colors.color(&bar.subgroup).unwrap_or(FALLBACK_COLOR);
        canvas.draw(
            Element::translated(group_left, 0.0).child(
                Element::rect(geometry.x, geometry.y, geometry.width, geometry.height)
                    .attr("fill", fill),
            ),
        );
    }

    canvas.draw(legend(&subgroups, &colors, inner_width).attr("font-size", number(12.0)));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::fileio::read_csv;

    const AVERAGES: &str = "Platform,PostType,AvgLikes\n\
                            Instagram,Image,200\n\
                            Instagram,Video,100\n\
                            Facebook,Image,50\n\
                            Facebook,Link,20\n";

    #[test]
    fn bars_stand_on_the_baseline() {
        let y = LinearScale::new((0.0, 100.0), (300.0, 0.0));
        let g = bar_geometry(12.0, 8.0, 25.0, &y, 300.0);
        assert_eq!(
            g,
            BarGeometry {
                x: 12.0,
                y: 225.0,
                width: 8.0,
                height: 75.0
            }
        );
    }

    #[test]
    fn legend_lists_subgroups_in_order() {
        let subgroups = vec!["Image".to_string(), "Video".to_string()];
        let palette = GraphConfig::grouped_bar().colors;
        let colors = OrdinalScale::new(subgroups.iter().cloned(), &palette);
        let legend = legend(&subgroups, &colors, 530.0);
        assert_eq!(legend.get_attr("transform"), Some("translate(570, 20)"));

        let mut rects = Vec::new();
        legend.descendants_by_tag("rect", &mut rects);
        assert_eq!(rects[0].get_attr("fill"), Some("#1f77b4"));
        assert_eq!(rects[1].get_attr("y"), Some("30"));
        assert_eq!(rects[1].get_attr("fill"), Some("#ff7f0e"));
    }

    #[test]
    fn one_bar_per_row() {
        let table = read_csv(AVERAGES.as_bytes()).unwrap();
        let config = GraphConfig::grouped_bar();
        let mut canvas = Canvas::new(config.width, config.height, config.margin);
        draw(&mut canvas, &table, "Platform", "PostType", "AvgLikes", &config).unwrap();

        let mut rects = Vec::new();
        canvas.plot().descendants_by_tag("rect", &mut rects);
        // four bars and three legend swatches
        assert_eq!(rects.len(), 7);
        let tallest = rects
            .iter()
            .filter_map(|r| r.get_attr("height"))
            .filter_map(|h| h.parse::<f64>().ok())
            .fold(0.0, f64::max);
        // headroom leaves the tallest bar short of the full plot height
        assert!(tallest < canvas.inner_height());
    }

    #[test]
    fn missing_subgroup_column() {
        let table = read_csv("Platform,AvgLikes\nA,1\n".as_bytes()).unwrap();
        assert!(bars(&table, "Platform", "PostType", "AvgLikes").is_err());
    }
}
