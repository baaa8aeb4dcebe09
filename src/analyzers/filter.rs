//! Year filter applied to both tables before aggregation.

use std::collections::BTreeSet;

use crate::records::YearKeyed;

/// Returns the rows whose derived year is a member of `years`.
///
/// An empty selection yields an empty table, never the original; rows whose
/// year code was unmapped carry no year and never match. The input is left
/// untouched, matching rows are copied into a new table.
pub fn by_years<R: YearKeyed + Copy>(rows: &[R], years: &BTreeSet<i32>) -> Vec<R> {
    rows.iter()
        .copied()
        .filter(|r| r.year().is_some_and(|y| years.contains(&y)))
        .collect()
}
