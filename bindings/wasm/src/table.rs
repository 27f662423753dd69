use courtstats_core::{CityReport, JudgeReport, JudgeTable};
use wasm_bindgen::{JsValue, prelude::wasm_bindgen};

use crate::common::*;

#[wasm_bindgen]
pub struct WasmTable {
    inner: JudgeTable,
}

#[wasm_bindgen]
impl WasmTable {
    /// Parse a judge table from JSON text: { "City": { "Judge": { ... } } }
    #[wasm_bindgen(constructor)]
    pub fn new(json: &str) -> Result<WasmTable, JsValue> {
        let inner = JudgeTable::from_json_str(json).map_err(js_err)?;
        Ok(WasmTable { inner })
    }

    /// City names in table order.
    pub fn cities(&self) -> Result<JsValue, JsValue> {
        let names: Vec<&str> = self.inner.city_names().collect();
        to_js(&names)
    }

    #[wasm_bindgen(getter)]
    pub fn num_judges(&self) -> usize { self.inner.num_judges() }

    /// City page model. `city` defaults to San Francisco, `sort` to approvalHigh, `tiers` to
    /// three (colors the per-judge rings).
    pub fn city_report(
        &self,
        city: Option<String>,
        sort: Option<String>,
        lang: Option<String>,
        tiers: Option<String>,
    ) -> Result<JsValue, JsValue> {
        let tiers = parse_tiers(tiers).map_err(js_err)?;
        let report = CityReport::build(
            &self.inner,
            city.as_deref(),
            sort.as_deref().unwrap_or("approvalHigh"),
            parse_locale(lang),
            &tiers,
        );
        to_js(&report)
    }

    /// Judge page model, or `{ status: "notFound", ... }`.
    pub fn judge_report(&self, name: &str, lang: Option<String>) -> Result<JsValue, JsValue> {
        to_js(&JudgeReport::build(&self.inner, name, parse_locale(lang)))
    }
}
