use serde::Serialize;

use super::{PanelStyle, RingPanel};
use crate::data::{JudgeTable, Lookup};
use crate::locale::Locale;
use crate::ring::{ColorTiers, LOW_RED, PALE_GREEN, RingConfig, RingGeometry, compute_geometry};
use crate::stats::{CityAggregate, SortPolicy, aggregate, sort_judges_by_name};
use crate::types::{JudgeRecord, NormalizedJudgeRecord, normalize_all};

const CITY_RINGS: PanelStyle = PanelStyle {
    size: 110.0,
    stroke_width: 13.0,
    colors: [PALE_GREEN, PALE_GREEN, LOW_RED],
};

/// Small asylum-rate ring next to each judge in the list.
const JUDGE_LIST_RING_SIZE: f64 = 48.0;
const JUDGE_LIST_RING_STROKE: f64 = 6.0;

/// Entry in a sort menu.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SortOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// The five sort policies with their labels in `locale`.
pub fn sort_options(locale: Locale) -> Vec<SortOption> {
    let labels = &locale.strings().sort;
    SortPolicy::ALL.into_iter()
        .map(|policy| SortOption { value: policy.as_str(), label: labels.label(policy) })
        .collect()
}

/// Everything the city page shows.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CityReport {
    pub locale: Locale,
    pub city_name: String,
    /// `false` when the requested city is not in the table; the page still renders with
    /// zero judges.
    pub found: bool,
    /// Policy actually applied; `None` when the requested name was not recognized.
    pub sort_policy: Option<SortPolicy>,
    pub aggregate: CityAggregate,
    pub judges: Vec<NormalizedJudgeRecord>,
    /// One asylum-rate ring per entry of `judges`, same order, colored by the tier table.
    pub judge_rings: Vec<RingGeometry>,
    pub rings: Vec<RingPanel>,
    pub sort_options: Vec<SortOption>,
}

impl CityReport {
    /// Build the page for `city` (default city when `None`), ordered by `sort`.
    pub fn build(table: &JudgeTable, city: Option<&str>, sort: &str, locale: Locale, tiers: &ColorTiers) -> Self {
        match table.resolve_city(city) {
            Lookup::Found(city) => Self::from_records(&city.name, &city.judges, sort, locale, tiers),
            Lookup::NotFound { requested } => {
                let mut report = Self::from_records(&requested, &[], sort, locale, tiers);
                report.found = false;
                report
            }
        }
    }

    /// Build the page from an explicit record collection.
    pub fn from_records(city_name: &str, records: &[JudgeRecord], sort: &str, locale: Locale, tiers: &ColorTiers) -> Self {
        let normalized = normalize_all(records);
        let aggregate = aggregate(&normalized);
        let sort_policy = SortPolicy::parse(sort);
        if sort_policy.is_none() {
            tracing::warn!(sort, "unknown sort policy, keeping table order");
        }
        let judges = sort_judges_by_name(&normalized, sort);
        let judge_rings = judges.iter()
            .map(|judge| {
                let config = RingConfig::new(JUDGE_LIST_RING_SIZE, JUDGE_LIST_RING_STROKE, judge.granted_asylum_rate);
                compute_geometry(&config, tiers)
            })
            .collect();

        let t = locale.strings();
        let rings = vec![
            CITY_RINGS.panel(0, t.asylum_granted, t.city_asylum_info, aggregate.avg_asylum_rate, None),
            CITY_RINGS.panel(1, t.other_relief_granted, t.city_other_relief_info, aggregate.avg_other_relief_rate, None),
            CITY_RINGS.panel(2, t.denied, t.city_denied_info, aggregate.avg_denied_rate, None),
        ];

        Self {
            locale,
            city_name: city_name.to_string(),
            found: true,
            sort_policy,
            aggregate,
            judges,
            judge_rings,
            rings,
            sort_options: sort_options(locale),
        }
    }

    pub fn judge_count(&self) -> usize { self.judges.len() }

    /// "Out of N cases in CITY, A were granted asylum, B were granted other relief, and C were denied."
    pub fn summary_sentence(&self) -> String {
        let t = self.locale.strings();
        let a = &self.aggregate;
        format!(
            "{} {} {} {}, {} {} {} {} {} {}.",
            t.out_of, a.total_cases, t.cases_in, self.city_name,
            a.asylum_granted_amount, t.city_were_granted_asylum,
            a.other_relief_granted_amount, t.city_were_granted_other_relief,
            a.denied_amount, t.city_were_denied,
        )
    }

    /// Plain-text rendering for terminals.
    pub fn to_text(&self) -> String {
        let t = self.locale.strings();
        let mut out = String::new();
        out.push_str(&format!("{} ({})\n", self.city_name, t.city));
        out.push_str(&format!("{} {}\n\n", self.judge_count(), t.judges));

        out.push_str(&format!("{}\n", t.average_rates));
        for ring in &self.rings {
            out.push_str(&format!("  {:>5}  {}\n", ring.geometry.label, ring.title));
        }

        out.push_str(&format!("\n{}\n  {}\n\n", t.city_stats, self.summary_sentence()));

        let sort_label = self.sort_policy.map_or("-", |p| t.sort.label(p));
        out.push_str(&format!("{} ({}: {})\n", t.judges, t.sort_by, sort_label));
        for (judge, ring) in self.judges.iter().zip(&self.judge_rings) {
            out.push_str(&format!(
                "  {:<32} {:>6.1}%  {:>6}  {}\n",
                judge.judge_name, judge.granted_asylum_rate, judge.total_decisions, ring.color,
            ));
        }
        out
    }
}
