use serde::{Deserialize, Deserializer, Serialize};

use super::RawRate;
use crate::stats::normalize;

/// One adjudicator as stored in the lookup table.
/// Rates are kept raw; they are independent and are not required to sum to 100.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct JudgeRecord {
    #[serde(rename = "city", default)]
    pub city_name: String,
    #[serde(default)]
    pub judge_name: String,
    #[serde(rename = "denied_percentage", default)]
    pub denied_rate: Option<RawRate>,
    #[serde(rename = "granted_asylum_percentage", default)]
    pub granted_asylum_rate: Option<RawRate>,
    #[serde(rename = "granted_other_relief_percentage", default)]
    pub granted_other_relief_rate: Option<RawRate>,
    #[serde(default, deserialize_with = "deserialize_count")]
    pub total_decisions: u64,
}

/// A judge record with every rate coerced to a number.
/// Values outside [0, 100] are kept as-is.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedJudgeRecord {
    pub city_name: String,
    pub judge_name: String,
    pub denied_rate: f64,
    pub granted_asylum_rate: f64,
    pub granted_other_relief_rate: f64,
    pub total_decisions: u64,
}

impl JudgeRecord {
    /// Build a record from already-typed parts.
    pub fn new(
        city_name: impl Into<String>,
        judge_name: impl Into<String>,
        denied_rate: impl Into<RawRate>,
        granted_asylum_rate: impl Into<RawRate>,
        granted_other_relief_rate: impl Into<RawRate>,
        total_decisions: u64,
    ) -> Self {
        Self {
            city_name: city_name.into(),
            judge_name: judge_name.into(),
            denied_rate: Some(denied_rate.into()),
            granted_asylum_rate: Some(granted_asylum_rate.into()),
            granted_other_relief_rate: Some(granted_other_relief_rate.into()),
            total_decisions,
        }
    }

    /// Coerce all three rates, leaving `self` untouched.
    pub fn normalize(&self) -> NormalizedJudgeRecord {
        NormalizedJudgeRecord {
            city_name: self.city_name.clone(),
            judge_name: self.judge_name.clone(),
            denied_rate: normalize(self.denied_rate.as_ref()),
            granted_asylum_rate: normalize(self.granted_asylum_rate.as_ref()),
            granted_other_relief_rate: normalize(self.granted_other_relief_rate.as_ref()),
            total_decisions: self.total_decisions,
        }
    }
}

/// Normalize a whole collection, preserving order.
pub fn normalize_all<'a>(records: impl IntoIterator<Item = &'a JudgeRecord>) -> Vec<NormalizedJudgeRecord> {
    records.into_iter().map(JudgeRecord::normalize).collect()
}

/// Decision counts show up as integers, floats, numeric strings or null.
/// Anything that is not a non-negative number counts as zero.
fn deserialize_count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Count {
        Int(u64),
        Float(f64),
        Text(String),
    }

    let count = match Option::<Count>::deserialize(deserializer)? {
        None => 0,
        Some(Count::Int(n)) => n,
        Some(Count::Float(f)) => float_count(f),
        Some(Count::Text(text)) => text.trim().parse::<f64>().map_or(0, float_count),
    };
    Ok(count)
}

fn float_count(value: f64) -> u64 {
    if value.is_finite() && value > 0.0 { value.round() as u64 } else { 0 }
}
