use clap::{Args, Parser, Subcommand, ValueEnum, ValueHint};
use std::path::PathBuf;

/// Immigration-court statistics CLI (argument schema only)
#[derive(Parser, Debug)]
#[command(name = "courtstats", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase output verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Summarize one city: average rates, case counts and the ordered judge list
    City(CityArgs),

    /// Show one judge's rates and case counts
    Judge(JudgeArgs),

    /// Draw a single ring chart as SVG (refuses to overwrite without --force)
    Ring(RingArgs),
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Default, ValueEnum)]
pub enum Lang {
    #[default]
    En,
    Es,
    Ht,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Default, ValueEnum)]
pub enum Tiers {
    /// >67 green, 33-67 orange, <33 red
    #[default]
    Three,
    /// >=50 green, otherwise red
    Two,
}

#[derive(Args, Debug)]
pub struct CityArgs {
    /// Judge table (JSON: city -> judge -> record)
    #[arg(value_hint = ValueHint::FilePath)]
    pub table: PathBuf,

    /// City name; defaults to San Francisco
    pub city: Option<String>,

    /// Sort policy: approvalHigh, approvalLow, casesHigh, casesLow, alpha
    #[arg(short, long, default_value = "approvalHigh")]
    pub sort: String,

    /// Output language
    #[arg(short, long, value_enum, default_value_t = Lang::En)]
    pub lang: Lang,

    /// Color tier table for the per-judge rings
    #[arg(long, value_enum, default_value_t = Tiers::Three)]
    pub tiers: Tiers,

    /// Print the report as JSON instead of text
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct JudgeArgs {
    /// Judge table (JSON: city -> judge -> record)
    #[arg(value_hint = ValueHint::FilePath)]
    pub table: PathBuf,

    /// Judge name (case-insensitive, may be URL-encoded)
    pub name: String,

    /// Output language
    #[arg(short, long, value_enum, default_value_t = Lang::En)]
    pub lang: Lang,

    /// Print the report as JSON instead of text
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct RingArgs {
    /// Fill percentage, plain or decorated ("43", "43%")
    pub percentage: String,

    /// Output SVG file
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    pub output: PathBuf,

    /// Outer size in px
    #[arg(long, default_value_t = 180.0)]
    pub size: f64,

    /// Stroke width in px
    #[arg(long, default_value_t = 20.0)]
    pub stroke: f64,

    /// Reference tick percentage
    #[arg(long)]
    pub mark: Option<String>,

    /// Explicit stroke color (#RRGGBB); overrides the tier table
    #[arg(long)]
    pub color: Option<String>,

    /// Color tier table used when no color is given
    #[arg(long, value_enum, default_value_t = Tiers::Three)]
    pub tiers: Tiers,

    /// Render the final state without the fill animation
    #[arg(long)]
    pub no_animate: bool,

    /// Overwrite if the file exists
    #[arg(long)]
    pub force: bool,
}
