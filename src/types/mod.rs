mod rate;
mod record;

pub use rate::RawRate;
pub use record::{JudgeRecord, NormalizedJudgeRecord, normalize_all};
