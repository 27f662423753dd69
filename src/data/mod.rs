//! Read-only access to the judge lookup table.

mod table;

pub use table::{City, DEFAULT_CITY, JudgeTable, Lookup};
