use super::scale::{BandScale, LinearScale};
use super::svg::{number, rotate, Element};

use std::fmt::Display;
use std::hash::Hash;

pub const TICK_SIZE: f64 = 6.0;
const TICK_PADDING: f64 = 3.0;
const DEFAULT_TICK_COUNT: usize = 10;

/// A scale that can be drawn as an axis: a pixel range and labelled ticks.
pub trait AxisScale {
    fn pixel_range(&self) -> (f64, f64);
    fn axis_ticks(&self) -> Vec<(f64, String)>;
}

impl AxisScale for LinearScale {
    fn pixel_range(&self) -> (f64, f64) {
        self.range
    }

    fn axis_ticks(&self) -> Vec<(f64, String)> {
        self.tick_labels(DEFAULT_TICK_COUNT)
            .into_iter()
            .map(|(value, label)| (self.map(value), label))
            .collect()
    }
}

impl<K: Eq + Hash + Clone + Display> AxisScale for BandScale<K> {
    fn pixel_range(&self) -> (f64, f64) {
        self.range()
    }

    fn axis_ticks(&self) -> Vec<(f64, String)> {
        self.domain()
            .iter()
            .filter_map(|key| Some((self.center(key)?, key.to_string())))
            .collect()
    }
}

/// Options for the tick labels of a bottom axis.
#[derive(Clone, Copy, Debug, Default)]
pub struct LabelRotation {
    pub degrees: f64,
}

/// Horizontal axis drawn at `y_offset` with ticks pointing down.
pub fn axis_bottom<S: AxisScale>(
    scale: &S,
    y_offset: f64,
    rotation: Option<LabelRotation>,
) -> Element {
    let (r0, r1) = scale.pixel_range();
    let mut axis = Element::translated(0.0, y_offset)
        .attr("fill", "none")
        .attr("font-size", 10)
        .attr("font-family", "sans-serif")
        .attr("text-anchor", "middle")
        .child(
            Element::path(&format!(
                "M{},{}V0H{}V{}",
                number(r0),
                number(TICK_SIZE),
                number(r1),
                number(TICK_SIZE)
            ))
            .attr("class", "domain")
            .attr("stroke", "currentColor"),
        );

    for (x, label) in scale.axis_ticks() {
        let mut text = Element::new("text")
            .attr("fill", "currentColor")
            .attr("y", number(TICK_SIZE + TICK_PADDING))
            .attr("dy", "0.71em");
        if let Some(rotation) = rotation {
            text = text
                .attr("style", "text-anchor: end")
                .attr("transform", rotate(rotation.degrees));
        }
        axis = axis.child(
            Element::translated(x, 0.0)
                .attr("class", "tick")
                .attr("opacity", 1)
                .child(
                    Element::new("line")
                        .attr("stroke", "currentColor")
                        .attr("y2", number(TICK_SIZE)),
                )
                .child(text.content(&label)),
        );
    }
    axis
}

/// Vertical axis at x = 0 with ticks pointing left.
pub fn axis_left<S: AxisScale>(scale: &S) -> Element {
    let (r0, r1) = scale.pixel_range();
    let mut axis = Element::group()
        .attr("fill", "none")
        .attr("font-size", 10)
        .attr("font-family", "sans-serif")
        .attr("text-anchor", "end")
        .child(
            Element::path(&format!(
                "M{},{}H0V{}H{}",
                number(-TICK_SIZE),
                number(r0),
                number(r1),
                number(-TICK_SIZE)
            ))
            .attr("class", "domain")
            .attr("stroke", "currentColor"),
        );

    for (y, label) in scale.axis_ticks() {
        axis = axis.child(
            Element::translated(0.0, y)
                .attr("class", "tick")
                .attr("opacity", 1)
                .child(
                    Element::new("line")
                        .attr("stroke", "currentColor")
                        .attr("x2", number(-TICK_SIZE)),
                )
                .child(
                    Element::new("text")
                        .attr("fill", "currentColor")
                        .attr("x", number(-(TICK_SIZE + TICK_PADDING)))
                        .attr("dy", "0.32em")
                        .content(&label),
                ),
        );
    }
    axis
}

/// Centred label under the x axis.
pub fn x_axis_label(
    text: &str,
    inner_width: f64,
    inner_height: f64,
    margin_bottom: f64,
) -> Element {
    Element::text(inner_width / 2.0, inner_height + margin_bottom - 10.0, text)
        .attr("style", "text-anchor: middle")
}

/// Label rotated to run up the y axis.
pub fn y_axis_label(text: &str, inner_height: f64, margin_left: f64) -> Element {
    Element::text(-inner_height / 2.0, -margin_left + 20.0, text)
        .attr("transform", rotate(-90.0))
        .attr("style", "text-anchor: middle")
}
