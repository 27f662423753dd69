//! Stroke colors and the threshold tables that pick them.

use std::fmt;

use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};

/// Simple RGB color, formatted as a CSS hex triplet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self { Self { r, g, b } }

    /// Parse `#RRGGBB` or `RRGGBB` (case-insensitive).
    pub fn from_hex(text: &str) -> Result<Self> {
        let hex = text.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            bail!("[ring::color] Expected a color like #9DE580, got {text:?}");
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16);
        Ok(Self { r: channel(0)?, g: channel(2)?, b: channel(4)? })
    }
}

impl fmt::Display for Rgb {
    /// Format as CSS: #RRGGBB
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl TryFrom<String> for Rgb {
    type Error = anyhow::Error;

    fn try_from(value: String) -> Result<Self> { Rgb::from_hex(&value) }
}

impl From<Rgb> for String {
    fn from(value: Rgb) -> Self { value.to_string() }
}

pub const HIGH_GREEN: Rgb = Rgb::new(0x9D, 0xE5, 0x80);
pub const MID_ORANGE: Rgb = Rgb::new(0xFF, 0xBD, 0x7A);
pub const LOW_RED: Rgb = Rgb::new(0xFF, 0x7A, 0x7A);
pub const PALE_GREEN: Rgb = Rgb::new(0xC5, 0xFB, 0xA3);
pub const DEEP_GREEN: Rgb = Rgb::new(0x6C, 0xAF, 0x5C);

/// Lower bound of one color band.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Threshold {
    pub min: f64,
    /// Whether a percentage equal to `min` falls in this band.
    pub inclusive: bool,
    pub color: Rgb,
}

impl Threshold {
    fn admits(&self, percentage: f64) -> bool {
        if self.inclusive { percentage >= self.min } else { percentage > self.min }
    }
}

/// Versioned color policy for rings without an explicit color.
///
/// Bands are checked from the first entry down; the first one that admits the percentage
/// wins, and `fallback` covers everything below the last band (and NaN).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColorTiers {
    pub version: u32,
    pub name: String,
    pub bands: Vec<Threshold>,
    pub fallback: Rgb,
}

impl ColorTiers {
    /// `> 67` green, `33..=67` orange, `< 33` red.
    pub fn three_tier() -> Self {
        Self {
            version: 1,
            name: "three-tier".into(),
            bands: vec![
                Threshold { min: 67.0, inclusive: false, color: HIGH_GREEN },
                Threshold { min: 33.0, inclusive: true, color: MID_ORANGE },
            ],
            fallback: LOW_RED,
        }
    }

    /// `>= 50` green, otherwise red.
    pub fn two_tier() -> Self {
        Self {
            version: 2,
            name: "two-tier".into(),
            bands: vec![Threshold { min: 50.0, inclusive: true, color: HIGH_GREEN }],
            fallback: LOW_RED,
        }
    }

    /// Pick the band color for a percentage.
    pub fn pick(&self, percentage: f64) -> Rgb {
        self.bands.iter()
            .find(|band| band.admits(percentage))
            .map_or(self.fallback, |band| band.color)
    }
}

impl Default for ColorTiers {
    fn default() -> Self { Self::three_tier() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_tier_boundaries() {
        let tiers = ColorTiers::three_tier();
        assert_eq!(tiers.pick(100.0), HIGH_GREEN);
        assert_eq!(tiers.pick(67.01), HIGH_GREEN);
        assert_eq!(tiers.pick(67.0), MID_ORANGE);
        assert_eq!(tiers.pick(33.0), MID_ORANGE);
        assert_eq!(tiers.pick(32.99), LOW_RED);
        assert_eq!(tiers.pick(0.0), LOW_RED);
        assert_eq!(tiers.pick(f64::NAN), LOW_RED);
    }

    #[test]
    fn two_tier_boundaries() {
        let tiers = ColorTiers::two_tier();
        assert_eq!(tiers.pick(50.0), HIGH_GREEN);
        assert_eq!(tiers.pick(49.9), LOW_RED);
        assert_eq!(tiers.pick(67.0), HIGH_GREEN);
    }

    #[test]
    fn hex_round_trip() {
        assert_eq!(HIGH_GREEN.to_string(), "#9DE580");
        assert_eq!(Rgb::from_hex("#9de580").unwrap(), HIGH_GREEN);
        assert_eq!(Rgb::from_hex("FF7A7A").unwrap(), LOW_RED);
        assert!(Rgb::from_hex("#12345").is_err());
        assert!(Rgb::from_hex("#12345G").is_err());
    }

    #[test]
    fn tiers_are_data() {
        let json = serde_json::to_string(&ColorTiers::two_tier()).unwrap();
        assert!(json.contains("\"#9DE580\""));
        let back: ColorTiers = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ColorTiers::two_tier());
    }
}
