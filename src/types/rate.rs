use std::fmt;

use serde::{Deserialize, Serialize};

/// A percentage exactly as it appears in the lookup table: either a bare number
/// (`43`, `12.5`) or decorated text (`"43%"`, `" 7.1 % "`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawRate {
    Number(f64),
    Text(String),
}

impl From<f64> for RawRate {
    fn from(value: f64) -> Self { RawRate::Number(value) }
}

impl From<&str> for RawRate {
    fn from(value: &str) -> Self { RawRate::Text(value.to_string()) }
}

impl From<String> for RawRate {
    fn from(value: String) -> Self { RawRate::Text(value) }
}

impl fmt::Display for RawRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawRate::Number(value) => write!(f, "{value}"),
            RawRate::Text(text) => f.write_str(text),
        }
    }
}
