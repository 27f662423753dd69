#![doc = "courtstats public API"]
pub mod cli;
pub mod commands;
mod data;
mod locale;
mod report;
mod ring;
mod stats;
mod types;

#[doc(inline)]
pub use types::{JudgeRecord, NormalizedJudgeRecord, RawRate, normalize_all};

#[doc(inline)]
pub use stats::{
    CityAggregate, JudgeSummary, SortPolicy, aggregate, amount, compare_names, normalize,
    normalize_str, sort_judges, sort_judges_by_name, summarize,
};

#[doc(inline)]
pub use ring::{
    ChartState, ColorTiers, CubicBezier, DEEP_GREEN, DEFAULT_SIZE, DEFAULT_STROKE_WIDTH,
    EASE_IN_OUT, FILL_DURATION, FillTransition, HIGH_GREEN, LOW_RED, LineCap, MID_ORANGE,
    PALE_GREEN, Point, ReferenceTick, Rgb, RingAnimation, RingConfig, RingGeometry, START_DELAY,
    Threshold, compute_geometry, dash_offset, label, ring_svg_string, write_ring_svg_file,
};

#[doc(inline)]
pub use data::{City, DEFAULT_CITY, JudgeTable, Lookup};

#[doc(inline)]
pub use locale::{Locale, SortLabels, Strings};

#[doc(inline)]
pub use report::{CityReport, JudgePage, JudgeReport, RingPanel, SortOption, sort_options};
