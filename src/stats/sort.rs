use std::{cmp::Ordering, fmt};

use serde::{Deserialize, Serialize};

use crate::types::NormalizedJudgeRecord;

/// Named orderings for a judge list. Stateless; the ordering is a pure function of the variant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortPolicy {
    #[default]
    ApprovalHigh,
    ApprovalLow,
    CasesHigh,
    CasesLow,
    Alpha,
}

impl SortPolicy {
    /// Display order used by sort menus.
    pub const ALL: [SortPolicy; 5] = [
        SortPolicy::ApprovalHigh,
        SortPolicy::ApprovalLow,
        SortPolicy::CasesHigh,
        SortPolicy::CasesLow,
        SortPolicy::Alpha,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortPolicy::ApprovalHigh => "approvalHigh",
            SortPolicy::ApprovalLow => "approvalLow",
            SortPolicy::CasesHigh => "casesHigh",
            SortPolicy::CasesLow => "casesLow",
            SortPolicy::Alpha => "alpha",
        }
    }

    /// Look up a policy by its wire name. Unknown names yield `None`.
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|policy| policy.as_str() == name)
    }
}

impl fmt::Display for SortPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Return a new, ordered copy of `records`. Equal keys keep their input order.
pub fn sort_judges(records: &[NormalizedJudgeRecord], policy: SortPolicy) -> Vec<NormalizedJudgeRecord> {
    let mut sorted = records.to_vec();
    match policy {
        SortPolicy::ApprovalHigh =>
            sorted.sort_by(|a, b| b.granted_asylum_rate.total_cmp(&a.granted_asylum_rate)),
        SortPolicy::ApprovalLow =>
            sorted.sort_by(|a, b| a.granted_asylum_rate.total_cmp(&b.granted_asylum_rate)),
        SortPolicy::CasesHigh =>
            sorted.sort_by(|a, b| b.total_decisions.cmp(&a.total_decisions)),
        SortPolicy::CasesLow =>
            sorted.sort_by(|a, b| a.total_decisions.cmp(&b.total_decisions)),
        SortPolicy::Alpha =>
            sorted.sort_by_cached_key(|r| collation_key(&r.judge_name)),
    }
    sorted
}

/// Sort by wire name; an unrecognized name leaves the input order unchanged.
pub fn sort_judges_by_name(records: &[NormalizedJudgeRecord], policy: &str) -> Vec<NormalizedJudgeRecord> {
    match SortPolicy::parse(policy) {
        Some(policy) => sort_judges(records, policy),
        None => records.to_vec(),
    }
}

/// Compare two names the way a reader would, ignoring case and accents. Names that differ
/// only in case or accents compare equal, so a stable sort keeps them in input order.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    collation_key(a).cmp(&collation_key(b))
}

/// Primary-strength key: lowercase, Latin diacritics folded to their base letter.
fn collation_key(name: &str) -> Vec<char> {
    name.chars().flat_map(char::to_lowercase).flat_map(fold_diacritic).collect()
}

fn fold_diacritic(c: char) -> impl Iterator<Item = char> {
    let (first, second) = match c {
        'à'..='å' | 'ā' | 'ă' | 'ą' => ('a', None),
        'æ' => ('a', Some('e')),
        'ç' | 'ć' | 'ĉ' | 'ċ' | 'č' => ('c', None),
        'ď' | 'đ' => ('d', None),
        'è'..='ë' | 'ē' | 'ĕ' | 'ė' | 'ę' | 'ě' => ('e', None),
        'ĝ' | 'ğ' | 'ġ' | 'ģ' => ('g', None),
        'ĥ' | 'ħ' => ('h', None),
        'ì'..='ï' | 'ĩ' | 'ī' | 'ĭ' | 'į' | 'ı' => ('i', None),
        'ĵ' => ('j', None),
        'ķ' => ('k', None),
        'ĺ' | 'ļ' | 'ľ' | 'ŀ' | 'ł' => ('l', None),
        'ñ' | 'ń' | 'ņ' | 'ň' => ('n', None),
        'ò'..='ö' | 'ø' | 'ō' | 'ŏ' | 'ő' => ('o', None),
        'œ' => ('o', Some('e')),
        'ŕ' | 'ŗ' | 'ř' => ('r', None),
        'ś' | 'ŝ' | 'ş' | 'š' => ('s', None),
        'ß' => ('s', Some('s')),
        'ţ' | 'ť' | 'ŧ' => ('t', None),
        'ù'..='ü' | 'ũ' | 'ū' | 'ŭ' | 'ů' | 'ű' | 'ų' => ('u', None),
        'ŵ' => ('w', None),
        'ý' | 'ÿ' | 'ŷ' => ('y', None),
        'ź' | 'ż' | 'ž' => ('z', None),
        other => (other, None),
    };
    std::iter::once(first).chain(second)
}
