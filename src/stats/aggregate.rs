use serde::Serialize;

use crate::types::NormalizedJudgeRecord;

/// City-level summary of a judge collection.
///
/// Rates are unweighted means over judges (a judge with 3 decisions counts as much as one
/// with 3000). Each amount is rounded on its own, so the three amounts need not add up to
/// `total_cases`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CityAggregate {
    pub total_cases: u64,
    pub avg_asylum_rate: f64,
    pub avg_other_relief_rate: f64,
    pub avg_denied_rate: f64,
    pub asylum_granted_amount: i64,
    pub other_relief_granted_amount: i64,
    pub denied_amount: i64,
}

/// Absolute counts for a single judge, derived from that judge's own rates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JudgeSummary {
    pub total_decisions: u64,
    pub asylum_rate: f64,
    pub other_relief_rate: f64,
    pub denied_rate: f64,
    pub asylum_granted_amount: i64,
    pub other_relief_granted_amount: i64,
    pub denied_amount: i64,
}

impl JudgeSummary {
    /// Decisions that ended in asylum or some other relief.
    pub fn granted_amount(&self) -> i64 {
        self.asylum_granted_amount + self.other_relief_granted_amount
    }
}

/// Summarize a city's judges. An empty collection yields all zeros.
pub fn aggregate(records: &[NormalizedJudgeRecord]) -> CityAggregate {
    let total_cases = records.iter().map(|r| r.total_decisions).fold(0u64, u64::saturating_add);

    let avg_asylum_rate = mean(records, |r| r.granted_asylum_rate);
    let avg_other_relief_rate = mean(records, |r| r.granted_other_relief_rate);
    let avg_denied_rate = mean(records, |r| r.denied_rate);

    CityAggregate {
        total_cases,
        avg_asylum_rate,
        avg_other_relief_rate,
        avg_denied_rate,
        asylum_granted_amount: amount(total_cases, avg_asylum_rate),
        other_relief_granted_amount: amount(total_cases, avg_other_relief_rate),
        denied_amount: amount(total_cases, avg_denied_rate),
    }
}

/// Per-judge counts, same rounding rule as [`aggregate`].
pub fn summarize(record: &NormalizedJudgeRecord) -> JudgeSummary {
    let total = record.total_decisions;
    JudgeSummary {
        total_decisions: total,
        asylum_rate: record.granted_asylum_rate,
        other_relief_rate: record.granted_other_relief_rate,
        denied_rate: record.denied_rate,
        asylum_granted_amount: amount(total, record.granted_asylum_rate),
        other_relief_granted_amount: amount(total, record.granted_other_relief_rate),
        denied_amount: amount(total, record.denied_rate),
    }
}

/// `round(total * rate / 100)`, ties away from zero.
pub fn amount(total: u64, rate: f64) -> i64 {
    (total as f64 * rate / 100.0).round() as i64
}

fn mean(records: &[NormalizedJudgeRecord], rate: impl Fn(&NormalizedJudgeRecord) -> f64) -> f64 {
    if records.is_empty() { 0.0 } else { records.iter().map(rate).sum::<f64>() / records.len() as f64 }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn judge(name: &str, asylum: f64, other: f64, denied: f64, total: u64) -> NormalizedJudgeRecord {
        NormalizedJudgeRecord {
            city_name: "San Francisco".into(),
            judge_name: name.into(),
            denied_rate: denied,
            granted_asylum_rate: asylum,
            granted_other_relief_rate: other,
            total_decisions: total,
        }
    }

    #[test]
    fn empty_is_all_zero() {
        let agg = aggregate(&[]);
        assert_eq!(agg, CityAggregate::default());
        assert_eq!(agg.total_cases, 0);
        assert_eq!(agg.avg_asylum_rate, 0.0);
        assert_eq!(agg.denied_amount, 0);
    }

    #[test]
    fn single_judge() {
        let agg = aggregate(&[judge("A", 40.0, 10.0, 50.0, 100)]);
        assert_eq!(agg.total_cases, 100);
        assert_eq!(agg.avg_asylum_rate, 40.0);
        assert_eq!(agg.asylum_granted_amount, 40);
        assert_eq!(agg.other_relief_granted_amount, 10);
        assert_eq!(agg.denied_amount, 50);
    }

    #[test]
    fn means_are_unweighted() {
        let agg = aggregate(&[judge("A", 10.0, 0.0, 90.0, 1000), judge("B", 50.0, 0.0, 50.0, 10)]);
        assert_eq!(agg.total_cases, 1010);
        assert_eq!(agg.avg_asylum_rate, 30.0);
        assert_eq!(agg.avg_denied_rate, 70.0);
        assert_eq!(agg.asylum_granted_amount, 303);
        assert_eq!(agg.denied_amount, 707);
    }

    #[test]
    fn amounts_round_independently() {
        // 3 cases at 50% each: every dimension rounds 1.5 up to 2, giving 6 of 3 cases.
        let agg = aggregate(&[judge("A", 50.0, 50.0, 50.0, 3)]);
        assert_eq!(agg.asylum_granted_amount, 2);
        assert_eq!(agg.other_relief_granted_amount, 2);
        assert_eq!(agg.denied_amount, 2);
        let sum = agg.asylum_granted_amount + agg.other_relief_granted_amount + agg.denied_amount;
        assert_ne!(sum, agg.total_cases as i64);
    }

    #[test]
    fn ties_round_away_from_zero() {
        assert_eq!(amount(1, 50.0), 1);
        assert_eq!(amount(5, 10.0), 1);
        assert_eq!(amount(5, 9.0), 0);
    }

    #[test]
    fn out_of_range_rates_pass_through() {
        let agg = aggregate(&[judge("A", 150.0, 0.0, 0.0, 10)]);
        assert_eq!(agg.avg_asylum_rate, 150.0);
        assert_eq!(agg.asylum_granted_amount, 15);
    }

    #[test]
    fn same_input_same_output() {
        let records = vec![judge("A", 12.3, 4.5, 83.2, 77), judge("B", 66.6, 1.1, 32.3, 19)];
        assert_eq!(aggregate(&records), aggregate(&records.clone()));
    }

    #[test]
    fn huge_totals_saturate() {
        let agg = aggregate(&[judge("A", 10.0, 0.0, 90.0, u64::MAX), judge("B", 10.0, 0.0, 90.0, 5)]);
        assert_eq!(agg.total_cases, u64::MAX);
    }

    #[test]
    fn judge_summary_counts() {
        let summary = summarize(&judge("A", 33.3, 12.0, 54.7, 250));
        assert_eq!(summary.asylum_granted_amount, 83);
        assert_eq!(summary.other_relief_granted_amount, 30);
        assert_eq!(summary.denied_amount, 137);
        assert_eq!(summary.granted_amount(), 113);
    }
}
