//! Pure aggregation over the `(year, num_parts)` series.
//!
//! These functions are deliberately free of printing so the ranking rules
//! can be pinned down by tests.

use std::collections::{BTreeMap, HashMap};

/// Sums piece counts per year and ranks the result descending.
///
/// Pairs are `(total, year)` and the sort is lexicographic on the pair, so
/// equal totals order year-descending. That tie-break is part of the
/// reported ranking and is kept on purpose.
pub fn rank_parts_by_year(year_parts: &[(i64, i64)]) -> Vec<(i64, i64)> {
    let mut totals: HashMap<i64, i64> = HashMap::new();
    for &(year, parts) in year_parts {
        *totals.entry(year).or_insert(0) += parts;
    }
    let mut ranked: Vec<(i64, i64)> = totals
        .into_iter()
        .map(|(year, total)| (total, year))
        .collect();
    ranked.sort_unstable_by(|a, b| b.cmp(a));
    ranked
}

/// Counts sets released per year, ordered by year ascending.
pub fn count_sets_per_year(years: &[i64]) -> Vec<(i64, usize)> {
    let mut counts: BTreeMap<i64, usize> = BTreeMap::new();
    for &year in years {
        *counts.entry(year).or_insert(0) += 1;
    }
    counts.into_iter().collect()
}
