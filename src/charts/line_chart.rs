use super::{draw_axes, keyed_measures, value_scale};
use crate::errors::ChartError;
use crate::graph::config::GraphConfig;
use crate::graph::fileio::Table;
use crate::render::curve::natural_curve;
use crate::render::scale::{BandScale, LinearScale};
use crate::render::svg::{number, Canvas, Element};

use anyhow::Result;
use log::debug;

/// Curve vertices at the band centres, in row order.
pub fn line_points(
    points: &[(String, f64)],
    x: &BandScale<String>,
    y: &LinearScale,
) -> Result<Vec<(f64, f64)>> {
    points
        .iter()
        .map(|(key, value)| {
            let center = x.center(key).ok_or_else(|| ChartError::unknown_group(key))?;
            Ok((center, y.map(*value)))
        })
        .collect()
}

pub fn draw(
    canvas: &mut Canvas,
    table: &Table,
    x_column: &str,
    measure: &str,
    config: &GraphConfig,
) -> Result<()> {
    let points = keyed_measures(table, x_column, measure)?;

    let keys = points.iter().map(|p| p.0.clone());
    let x = BandScale::new(keys, (0.0, canvas.inner_width()))
        .padding(config.band_padding);
    let y = value_scale(
        points.iter().map(|p| p.1),
        config.y_headroom,
        canvas.inner_height(),
    );
    draw_axes(canvas, &x, &y, config);

    let vertices = line_points(&points, &x, &y)?;
    debug!("line through {} points", vertices.len());
    canvas.draw(
        Element::path(&natural_curve(&vertices))
            .attr("fill", "none")
            .attr("stroke", &config.stroke)
            .attr("stroke-width", number(config.stroke_width)),
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::fileio::read_csv;

    #[test]
    fn vertices_sit_on_band_centres() {
        let points = vec![("Mon".to_string(), 10.0), ("Tue".to_string(), 20.0)];
        let x = BandScale::new(points.iter().map(|p| p.0.clone()), (0.0, 200.0));
        let y = LinearScale::new((0.0, 20.0), (100.0, 0.0));
        let vertices = line_points(&points, &x, &y).unwrap();
        assert_eq!(vertices, [(50.0, 50.0), (150.0, 0.0)]);
    }

    #[test]
    fn draws_a_single_natural_curve() {
        let table = read_csv(
            "Date,AvgLikes\n3/1,120\n3/2,80\n3/3,150\n3/4,90\n".as_bytes(),
        )
        .unwrap();
        let config = GraphConfig::line();
        let mut canvas = Canvas::new(config.width, config.height, config.margin);
        draw(&mut canvas, &table, "Date", "AvgLikes", &config).unwrap();

        let curves: Vec<&Element> = canvas
            .plot()
            .children()
            .filter(|e| e.tag() == "path")
            .collect();
        assert_eq!(curves.len(), 1);
        assert_eq!(curves[0].get_attr("stroke"), Some("steelblue"));
        assert_eq!(curves[0].get_attr("d").map(|d| d.matches('C').count()), Some(3));
    }

    #[test]
    fn date_labels_are_rotated() {
        let table = read_csv("Date,AvgLikes\n3/1,1\n".as_bytes()).unwrap();
        let config = GraphConfig::line();
        let mut canvas = Canvas::new(config.width, config.height, config.margin);
        draw(&mut canvas, &table, "Date", "AvgLikes", &config).unwrap();
        let svg = canvas.render();
        assert!(svg.contains("transform=\"rotate(-25)\""));
    }
}
