use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use super::color::{ColorTiers, Rgb};

pub const DEFAULT_SIZE: f64 = 180.0;
pub const DEFAULT_STROKE_WIDTH: f64 = 20.0;

/// Input for one ring. `percentage` is not clamped; values outside [0, 100] give offsets
/// outside the visual range.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RingConfig {
    pub size: f64,
    pub stroke_width: f64,
    pub percentage: f64,
    pub reference_mark_percentage: Option<f64>,
    /// Explicit stroke color; the threshold table is only consulted when absent.
    pub color: Option<Rgb>,
    /// Label font size in px; derived from `size` when absent.
    pub font_size: Option<f64>,
}

impl Default for RingConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            stroke_width: DEFAULT_STROKE_WIDTH,
            percentage: 0.0,
            reference_mark_percentage: None,
            color: None,
            font_size: None,
        }
    }
}

impl RingConfig {
    pub fn new(size: f64, stroke_width: f64, percentage: f64) -> Self {
        Self { size, stroke_width, percentage, ..Self::default() }
    }

    pub fn with_color(mut self, color: Rgb) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_reference_mark(mut self, percentage: f64) -> Self {
        self.reference_mark_percentage = Some(percentage);
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineCap {
    Butt,
    Round,
}

impl LineCap {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineCap::Butt => "butt",
            LineCap::Round => "round",
        }
    }
}

/// Radial tick marking a second percentage on the ring.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceTick {
    pub percentage: f64,
    pub angle_rad: f64,
    /// Endpoints in the ring's rotated frame (drawn inside `rotate(-90 c c)`).
    pub start: Point,
    pub end: Point,
    /// The same endpoints in unrotated SVG coordinates.
    pub screen_start: Point,
    pub screen_end: Point,
}

/// Everything needed to draw one ring.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RingGeometry {
    pub size: f64,
    pub stroke_width: f64,
    pub center: f64,
    pub radius: f64,
    pub circumference: f64,
    pub percentage: f64,
    /// Terminal dash offset; `circumference` is an empty ring, `0` a full one.
    pub dash_offset: f64,
    pub color: Rgb,
    pub label: String,
    pub font_size: f64,
    pub line_cap: LineCap,
    pub reference_tick: Option<ReferenceTick>,
}

impl RingGeometry {
    /// Dash offset for an arbitrary fill percentage on this ring.
    pub fn offset_for(&self, percentage: f64) -> f64 {
        dash_offset(self.circumference, percentage)
    }

    /// Dash offset of an unfilled ring.
    pub fn empty_offset(&self) -> f64 { self.circumference }
}

/// Compute the stroke geometry for a ring.
pub fn compute_geometry(config: &RingConfig, tiers: &ColorTiers) -> RingGeometry {
    let radius = (config.size - config.stroke_width) / 2.0;
    let circumference = 2.0 * PI * radius;
    let center = config.size / 2.0;

    let reference_tick = config.reference_mark_percentage
        .map(|mark| reference_tick(mark, center, radius, config.stroke_width));

    RingGeometry {
        size: config.size,
        stroke_width: config.stroke_width,
        center,
        radius,
        circumference,
        percentage: config.percentage,
        dash_offset: dash_offset(circumference, config.percentage),
        color: config.color.unwrap_or_else(|| tiers.pick(config.percentage)),
        label: label(config.percentage),
        font_size: config.font_size.unwrap_or_else(|| default_font_size(config.size)),
        line_cap: if config.size < 50.0 { LineCap::Butt } else { LineCap::Round },
        reference_tick,
    }
}

/// `circumference * (1 - percentage / 100)`, unclamped.
pub fn dash_offset(circumference: f64, percentage: f64) -> f64 {
    circumference * (1.0 - percentage / 100.0)
}

/// Percentage rounded to the nearest integer with a trailing `%`.
pub fn label(percentage: f64) -> String {
    format!("{}%", percentage.round() as i64)
}

fn default_font_size(size: f64) -> f64 {
    if size < 60.0 { size * 0.45 } else { size * 0.22 }
}

/// 0% sits at 12 o'clock after the −90° rotation; angles grow clockwise.
fn reference_tick(percentage: f64, center: f64, radius: f64, stroke_width: f64) -> ReferenceTick {
    let angle_rad = (percentage / 100.0 * 360.0).to_radians();
    let (sin, cos) = angle_rad.sin_cos();
    let inner = radius - stroke_width / 2.0;
    let outer = radius + stroke_width / 2.0;

    let rotated = |r: f64| Point { x: center + cos * r, y: center + sin * r };
    // rotate(-90) about the center maps (dx, dy) to (dy, -dx)
    let screen = |r: f64| Point { x: center + sin * r, y: center - cos * r };

    ReferenceTick {
        percentage,
        angle_rad,
        start: rotated(inner),
        end: rotated(outer),
        screen_start: screen(inner),
        screen_end: screen(outer),
    }
}
