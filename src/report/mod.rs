//! Page-level views: the core outputs for one city or one judge, with localized text.

mod city;
mod judge;

use serde::Serialize;

use crate::ring::{ColorTiers, RingConfig, RingGeometry, Rgb, compute_geometry};

pub use city::{CityReport, SortOption, sort_options};
pub use judge::{JudgePage, JudgeReport};

/// One labelled ring on a page.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RingPanel {
    pub title: &'static str,
    pub info: &'static str,
    pub geometry: RingGeometry,
}

/// Size, stroke and color of a page's three rings (asylum, other relief, denied).
#[derive(Clone, Copy, Debug)]
pub(crate) struct PanelStyle {
    pub size: f64,
    pub stroke_width: f64,
    pub colors: [Rgb; 3],
}

impl PanelStyle {
    pub(crate) fn panel(
        &self,
        slot: usize,
        title: &'static str,
        info: &'static str,
        percentage: f64,
        reference_mark: Option<f64>,
    ) -> RingPanel {
        let config = RingConfig {
            reference_mark_percentage: reference_mark,
            color: Some(self.colors[slot]),
            ..RingConfig::new(self.size, self.stroke_width, percentage)
        };
        // the explicit color means the tier table is never consulted
        RingPanel { title, info, geometry: compute_geometry(&config, &ColorTiers::default()) }
    }
}
