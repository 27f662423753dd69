use anyhow::{Result, anyhow};
use courtstats_core::{ColorTiers, Locale};
use wasm_bindgen::JsValue;

pub(crate) fn js_err(e: impl ToString) -> JsValue {
    JsValue::from_str(&e.to_string())
}

pub(crate) fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| e.into())
}

/// Primary language subtag ("es-MX" -> es); unknown codes fall back to English.
pub(crate) fn parse_locale(lang: Option<String>) -> Locale {
    lang.as_deref().and_then(Locale::parse).unwrap_or_default()
}

pub(crate) fn parse_tiers(tiers: Option<String>) -> Result<ColorTiers> {
    match tiers.as_deref().unwrap_or("three") {
        "three" => Ok(ColorTiers::three_tier()),
        "two" => Ok(ColorTiers::two_tier()),
        other => Err(anyhow!("Unknown color tiers {other:?}. Expected one of: three, two")),
    }
}
