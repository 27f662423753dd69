//! Ring (donut) chart geometry, color policy, fill animation and SVG output.

mod animation;
mod color;
mod geometry;
mod svg;

pub use animation::{
    ChartState, CubicBezier, EASE_IN_OUT, FILL_DURATION, FillTransition, RingAnimation, START_DELAY,
};
pub use color::{
    ColorTiers, DEEP_GREEN, HIGH_GREEN, LOW_RED, MID_ORANGE, PALE_GREEN, Rgb, Threshold,
};
pub use geometry::{
    DEFAULT_SIZE, DEFAULT_STROKE_WIDTH, LineCap, Point, ReferenceTick, RingConfig, RingGeometry,
    compute_geometry, dash_offset, label,
};
pub use svg::{ring_svg_string, write_ring_svg_file};
