//! Pure statistics over judge records: rate coercion, city aggregates and ordering.

mod aggregate;
mod normalize;
mod sort;

pub use aggregate::{CityAggregate, JudgeSummary, aggregate, amount, summarize};
pub use normalize::{normalize, normalize_str};
pub use sort::{SortPolicy, compare_names, sort_judges, sort_judges_by_name};
