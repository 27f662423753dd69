//! Localized text, keyed by an explicit locale.

mod strings;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use strings::{SortLabels, Strings};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Es,
    Ht,
}

impl Locale {
    pub const ALL: [Locale; 3] = [Locale::En, Locale::Es, Locale::Ht];

    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Es => "es",
            Locale::Ht => "ht",
        }
    }

    /// Parse a language code (`en`, `es-MX`, `HT`); only the primary subtag matters.
    pub fn parse(code: &str) -> Option<Self> {
        let primary = code.split(['-', '_']).next()?.trim().to_ascii_lowercase();
        Self::ALL.into_iter().find(|locale| locale.code() == primary)
    }

    pub fn strings(&self) -> &'static Strings {
        match self {
            Locale::En => &strings::EN,
            Locale::Es => &strings::ES,
            Locale::Ht => &strings::HT,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
