use serde::Serialize;

use super::{PanelStyle, RingPanel};
use crate::data::{JudgeTable, Lookup};
use crate::locale::Locale;
use crate::ring::{DEEP_GREEN, LOW_RED, PALE_GREEN};
use crate::stats::{CityAggregate, JudgeSummary, aggregate, summarize};
use crate::types::{NormalizedJudgeRecord, normalize_all};

const JUDGE_RINGS: PanelStyle = PanelStyle {
    size: 180.0,
    stroke_width: 20.0,
    colors: [DEEP_GREEN, PALE_GREEN, LOW_RED],
};

/// Everything the judge page shows for a judge that exists.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JudgePage {
    pub locale: Locale,
    pub judge: NormalizedJudgeRecord,
    pub summary: JudgeSummary,
    /// Averages of the judge's own city; each ring carries its city average as a
    /// reference tick.
    pub city_aggregate: CityAggregate,
    pub rings: Vec<RingPanel>,
}

/// Judge page, or an explicit miss the caller can render as a localized message.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum JudgeReport {
    Found(Box<JudgePage>),
    NotFound { requested: String, message: &'static str },
}

impl JudgeReport {
    pub fn build(table: &JudgeTable, name: &str, locale: Locale) -> Self {
        let record = match table.find_judge(name) {
            Lookup::Found(record) => record,
            Lookup::NotFound { requested } => {
                return JudgeReport::NotFound { requested, message: locale.strings().judge_not_found };
            }
        };

        let judge = record.normalize();
        let summary = summarize(&judge);
        let city_aggregate = match table.find_city(&record.city_name) {
            Lookup::Found(city) => aggregate(&normalize_all(&city.judges)),
            Lookup::NotFound { .. } => aggregate(std::slice::from_ref(&judge)),
        };

        let t = locale.strings();
        let rings = vec![
            JUDGE_RINGS.panel(0, t.asylum_granted, t.judge_asylum_info, judge.granted_asylum_rate, Some(city_aggregate.avg_asylum_rate)),
            JUDGE_RINGS.panel(1, t.other_relief_granted, t.judge_other_relief_info, judge.granted_other_relief_rate, Some(city_aggregate.avg_other_relief_rate)),
            JUDGE_RINGS.panel(2, t.denied, t.judge_denied_info, judge.denied_rate, Some(city_aggregate.avg_denied_rate)),
        ];

        JudgeReport::Found(Box::new(JudgePage { locale, judge, summary, city_aggregate, rings }))
    }

    pub fn page(&self) -> Option<&JudgePage> {
        match self {
            JudgeReport::Found(page) => Some(page.as_ref()),
            JudgeReport::NotFound { .. } => None,
        }
    }

    /// Plain-text rendering for terminals.
    pub fn to_text(&self) -> String {
        match self {
            JudgeReport::Found(page) => page.to_text(),
            JudgeReport::NotFound { requested, message } => format!("{message}: {requested}\n"),
        }
    }
}

impl JudgePage {
    /// "Out of N cases for NAME, G were granted asylum or other forms of relief."
    pub fn headline(&self) -> String {
        let t = self.locale.strings();
        format!(
            "{} {} {} {}, {} {}",
            t.out_of, self.summary.total_decisions, t.cases_for, self.judge.judge_name,
            self.summary.granted_amount(), t.judge_were_granted_any,
        )
    }

    /// One sentence per ring, in ring order.
    pub fn ring_sentences(&self) -> [String; 3] {
        let t = self.locale.strings();
        let s = &self.summary;
        let line = |amount: i64, tail: &str| {
            format!(
                "{} {} {} {} {} {}",
                amount, t.out_of.to_lowercase(), s.total_decisions, t.cases_for, self.judge.judge_name, tail,
            )
        };
        [
            line(s.asylum_granted_amount, t.judge_were_granted_asylum),
            line(s.other_relief_granted_amount, t.judge_were_granted_other_relief),
            line(s.denied_amount, t.judge_were_denied),
        ]
    }

    pub fn to_text(&self) -> String {
        let t = self.locale.strings();
        let mut out = String::new();
        out.push_str(&format!("{} ({}, {})\n", self.judge.judge_name, t.judge, self.judge.city_name));
        out.push_str(&format!("  {}\n\n", self.headline()));
        out.push_str(&format!("{}\n", t.judge_stats));
        for (ring, sentence) in self.rings.iter().zip(self.ring_sentences()) {
            out.push_str(&format!("  {:>5}  {}\n         {}\n", ring.geometry.label, ring.title, sentence));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> JudgeTable {
        JudgeTable::from_json_str(r#"{
            "Boston": {
                "Mary Major": {"city": "Boston", "judge_name": "Mary Major", "denied_percentage": "50%", "granted_asylum_percentage": "40%", "granted_other_relief_percentage": "10%", "total_decisions": 250},
                "Sam Minor": {"city": "Boston", "judge_name": "Sam Minor", "denied_percentage": "90%", "granted_asylum_percentage": "10%", "granted_other_relief_percentage": "0%", "total_decisions": 50}
            }
        }"#).unwrap()
    }

    #[test]
    fn found_judge() {
        let report = JudgeReport::build(&table(), "mary%20major", Locale::En);
        let page = report.page().unwrap();
        assert_eq!(page.summary.asylum_granted_amount, 100);
        assert_eq!(page.summary.other_relief_granted_amount, 25);
        assert_eq!(page.summary.denied_amount, 125);
        assert_eq!(page.city_aggregate.avg_asylum_rate, 25.0);
        assert_eq!(page.rings[0].geometry.color, DEEP_GREEN);
        assert_eq!(page.rings[0].geometry.reference_tick.unwrap().percentage, 25.0);
        assert_eq!(
            page.headline(),
            "Out of 250 cases for Mary Major, 125 were granted asylum or other forms of relief."
        );
        assert_eq!(page.ring_sentences()[0], "100 out of 250 cases for Mary Major were granted asylum.");
    }

    #[test]
    fn missing_judge_is_explicit() {
        let report = JudgeReport::build(&table(), "Nobody", Locale::Ht);
        assert_eq!(report, JudgeReport::NotFound { requested: "Nobody".into(), message: "Jij pa jwenn" });
        assert!(report.page().is_none());
        assert_eq!(report.to_text(), "Jij pa jwenn: Nobody\n");
    }

    #[test]
    fn serializes_with_status_tag() {
        let report = JudgeReport::build(&table(), "Nobody", Locale::En);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["status"], "notFound");
        let report = JudgeReport::build(&table(), "Sam Minor", Locale::En);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["status"], "found");
        assert_eq!(json["summary"]["deniedAmount"], 45);
    }
}
