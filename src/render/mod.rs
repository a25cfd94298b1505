//! SVG drawing primitives: scales, axes, curves and the canvas they are
//! drawn on.

pub mod axis;
pub mod curve;
pub mod scale;
pub mod svg;
