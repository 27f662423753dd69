use crate::stats::SortPolicy;

/// Every user-facing string. A locale that leaves a field out does not compile.
#[derive(Debug)]
pub struct Strings {
    // shared
    pub asylum_granted: &'static str,
    pub other_relief_granted: &'static str,
    pub denied: &'static str,
    pub average_rates: &'static str,
    pub out_of: &'static str,

    // city page
    pub city: &'static str,
    pub judges: &'static str,
    pub city_stats: &'static str,
    pub sort_by: &'static str,
    pub cases_in: &'static str,
    pub city_were_granted_asylum: &'static str,
    pub city_were_granted_other_relief: &'static str,
    pub city_were_denied: &'static str,
    pub city_asylum_info: &'static str,
    pub city_other_relief_info: &'static str,
    pub city_denied_info: &'static str,

    // judge page
    pub judge: &'static str,
    pub judge_stats: &'static str,
    pub judge_not_found: &'static str,
    pub cases_for: &'static str,
    pub judge_were_granted_asylum: &'static str,
    pub judge_were_granted_other_relief: &'static str,
    pub judge_were_denied: &'static str,
    pub judge_were_granted_any: &'static str,
    pub judge_asylum_info: &'static str,
    pub judge_other_relief_info: &'static str,
    pub judge_denied_info: &'static str,

    pub sort: SortLabels,
}

#[derive(Debug)]
pub struct SortLabels {
    pub approval_high: &'static str,
    pub approval_low: &'static str,
    pub cases_high: &'static str,
    pub cases_low: &'static str,
    pub alpha: &'static str,
}

impl SortLabels {
    pub fn label(&self, policy: SortPolicy) -> &'static str {
        match policy {
            SortPolicy::ApprovalHigh => self.approval_high,
            SortPolicy::ApprovalLow => self.approval_low,
            SortPolicy::CasesHigh => self.cases_high,
            SortPolicy::CasesLow => self.cases_low,
            SortPolicy::Alpha => self.alpha,
        }
    }
}

pub(super) static EN: Strings = Strings {
    asylum_granted: "Asylum Granted",
    other_relief_granted: "Other Relief Granted",
    denied: "Cases Denied",
    average_rates: "Average Rates",
    out_of: "Out of",

    city: "City",
    judges: "Judges",
    city_stats: "City Stats",
    sort_by: "Sort by",
    cases_in: "cases in",
    city_were_granted_asylum: "were granted asylum,",
    city_were_granted_other_relief: "were granted other relief, and",
    city_were_denied: "were denied",
    city_asylum_info: "This number is the percent of cases in this city where asylum was granted.",
    city_other_relief_info: "This number is the percent of cases in this city where other relief, such as withholding of removal, convention against torture (CAT), or discretionary humanitarian relief was granted.",
    city_denied_info: "This number is the percent of cases in this city that were denied, whether asylum or other.",

    judge: "Judge",
    judge_stats: "Judge Stats",
    judge_not_found: "Judge not found",
    cases_for: "cases for",
    judge_were_granted_asylum: "were granted asylum.",
    judge_were_granted_other_relief: "received other relief.",
    judge_were_denied: "were denied asylum or other forms of relief.",
    judge_were_granted_any: "were granted asylum or other forms of relief.",
    judge_asylum_info: "This number is the percent of cases where this judge granted asylum.",
    judge_other_relief_info: "This number is the percent of cases where this judge granted other relief, such as withholding of removal, convention against torture (CAT), or discretionary humanitarian relief.",
    judge_denied_info: "This number is the percent of cases this judge denied, whether asylum or other.",

    sort: SortLabels {
        approval_high: "Approval Rate (High to Low)",
        approval_low: "Approval Rate (Low to High)",
        cases_high: "Amount of Cases (High to Low)",
        cases_low: "Amount of Cases (Low to High)",
        alpha: "Alphabetical",
    },
};

pub(super) static ES: Strings = Strings {
    asylum_granted: "Asilo Otorgado",
    other_relief_granted: "Otro Alivio Otorgado",
    denied: "Casos Denegados",
    average_rates: "Tasas Promedio",
    out_of: "De",

    city: "Ciudad",
    judges: "Jueces",
    city_stats: "Estadísticas de la Ciudad",
    sort_by: "Ordenar por",
    cases_in: "casos en",
    city_were_granted_asylum: "fueron otorgados asilo,",
    city_were_granted_other_relief: "fueron otorgados otro alivio, y",
    city_were_denied: "fueron denegados",
    city_asylum_info: "Este número es el porcentaje de casos en esta ciudad donde se otorgó asilo.",
    city_other_relief_info: "Este número es el porcentaje de casos en esta ciudad donde se otorgó otro tipo de ayuda, como la suspensión de la deportación, la convención contra la tortura (CAT) o la ayuda humanitaria discrecional.",
    city_denied_info: "Este número es el porcentaje de casos en esta ciudad donde se denegaron, ya sea asilo u otro tipo de alivio.",

    judge: "Juez",
    judge_stats: "Estadísticas del Juez",
    judge_not_found: "Juez no encontrado",
    cases_for: "casos de",
    judge_were_granted_asylum: "fueron otorgados asilo.",
    judge_were_granted_other_relief: "recibieron otro alivio.",
    judge_were_denied: "fueron denegados asilo u otros tipos de alivio.",
    judge_were_granted_any: "fueron otorgados asilo u otras formas de alivio.",
    judge_asylum_info: "Este número es el porcentaje de casos en los que este juez otorgó asilo.",
    judge_other_relief_info: "Este número es el porcentaje de casos en los que este juez otorgó otro alivio, como la suspensión de la deportación, convención contra la tortura (CAT) o ayuda humanitaria discrecional.",
    judge_denied_info: "Este número es el porcentaje de casos en los que este juez denegó, ya sea asilo u otro tipo de alivio.",

    sort: SortLabels {
        approval_high: "Tasa de Aprobación (Alta a Baja)",
        approval_low: "Tasa de Aprobación (Baja a Alta)",
        cases_high: "Cantidad de Casos (Alta a Baja)",
        cases_low: "Cantidad de Casos (Baja a Alta)",
        alpha: "Alfabético",
    },
};

pub(super) static HT: Strings = Strings {
    asylum_granted: "Azil Akòde",
    other_relief_granted: "Lòt Sekou Akòde",
    denied: "Ka Refize",
    average_rates: "To Mwayèn",
    out_of: "Soti nan",

    city: "Vil",
    judges: "Jij",
    city_stats: "Estatistik Vil",
    sort_by: "Triye pa",
    cases_in: "ka nan",
    city_were_granted_asylum: "te resevwa azil,",
    city_were_granted_other_relief: "te resevwa lòt sekou, e",
    city_were_denied: "te refize",
    city_asylum_info: "Nimewo sa a se pousantaj ka nan vil sa a kote azil te akòde.",
    city_other_relief_info: "Nimewo sa a se pousantaj ka nan vil sa a kote lòt sekou, tankou retansyon depòtasyon, Konvansyon kont Tòti (CAT), oswa sekou imanitè diskresyonè te akòde.",
    city_denied_info: "Nimewo sa a se pousantaj ka nan vil sa a ki te refize, kit se azil oswa lòt sekou.",

    judge: "Jij",
    judge_stats: "Estatistik Jij",
    judge_not_found: "Jij pa jwenn",
    cases_for: "ka pou",
    judge_were_granted_asylum: "te resevwa azil.",
    judge_were_granted_other_relief: "resevwa lòt sekou.",
    judge_were_denied: "te refize azil oswa lòt fòm sekou.",
    judge_were_granted_any: "te resevwa azil oswa lòt fòm sekou.",
    judge_asylum_info: "Nimewo sa a se pousantaj ka jij sa a te akòde azil.",
    judge_other_relief_info: "Nimewo sa a se pousantaj ka jij sa a te akòde lòt sekou, tankou retansyon depòtasyon, Konvansyon kont Tòti (CAT), oswa sekou imanitè diskresyonè.",
    judge_denied_info: "Nimewo sa a se pousantaj ka jij sa a te refize, kit se azil oswa lòt sekou.",

    sort: SortLabels {
        approval_high: "To Apwobasyon (Wo a Ba)",
        approval_low: "To Apwobasyon (Ba a Wo)",
        cases_high: "Kantite Ka (Wo a Ba)",
        cases_low: "Kantite Ka (Ba a Wo)",
        alpha: "Alfabètik",
    },
};
