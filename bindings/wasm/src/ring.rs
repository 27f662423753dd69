use courtstats_core::{RingConfig, compute_geometry, normalize_str, ring_svg_string};
use wasm_bindgen::{JsValue, prelude::wasm_bindgen};

use crate::common::*;

fn parse_config(config: JsValue) -> Result<RingConfig, JsValue> {
    if config.is_undefined() || config.is_null() {
        return Ok(RingConfig::default());
    }
    serde_wasm_bindgen::from_value(config).map_err(js_err)
}

/// Geometry for one ring. `config` is { size, strokeWidth, percentage, referenceMarkPercentage, color }.
#[wasm_bindgen]
pub fn ring_geometry(config: JsValue, tiers: Option<String>) -> Result<JsValue, JsValue> {
    let config = parse_config(config)?;
    let tiers = parse_tiers(tiers).map_err(js_err)?;
    to_js(&compute_geometry(&config, &tiers))
}

/// SVG text for one ring, with the fill animation unless `animate` is false.
#[wasm_bindgen]
pub fn ring_svg(config: JsValue, tiers: Option<String>, animate: Option<bool>) -> Result<String, JsValue> {
    let config = parse_config(config)?;
    let tiers = parse_tiers(tiers).map_err(js_err)?;
    let geometry = compute_geometry(&config, &tiers);
    ring_svg_string(&geometry, &geometry.fill_transition(animate.unwrap_or(true))).map_err(js_err)
}

/// "43%" -> 43, "" -> 0.
#[wasm_bindgen]
pub fn normalize_rate(value: &str) -> f64 {
    normalize_str(value)
}
