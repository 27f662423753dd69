//! Subcommand implementations behind [`crate::cli::Commands`].

pub mod city;
pub mod judge;
pub mod ring;

use tracing_subscriber::EnvFilter;

use crate::cli::{Lang, Tiers};
use crate::locale::Locale;
use crate::ring::ColorTiers;

/// Install the stderr log subscriber. `RUST_LOG` wins over `-v` when set.
pub fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    // a second install (e.g. from tests) is harmless
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

impl From<Lang> for Locale {
    fn from(lang: Lang) -> Self {
        match lang {
            Lang::En => Locale::En,
            Lang::Es => Locale::Es,
            Lang::Ht => Locale::Ht,
        }
    }
}

impl From<Tiers> for ColorTiers {
    fn from(tiers: Tiers) -> Self {
        match tiers {
            Tiers::Three => ColorTiers::three_tier(),
            Tiers::Two => ColorTiers::two_tier(),
        }
    }
}
