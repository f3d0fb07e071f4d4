//! Descriptive statistics over the filtered trip table.
//!
//! Each reporter follows the same split: a `compute` function returning a
//! summary struct and a `report` function rendering it to the console with
//! the measured elapsed time and the section separator.

pub mod duration;
pub mod stations;
pub mod time;
pub mod users;

use std::collections::BTreeMap;
use std::time::Instant;

/// Most frequent value together with its count.
///
/// Tie-break is deterministic: the highest count wins and ties break toward
/// the smallest key (numeric or lexicographic).
pub fn mode<T, I>(values: I) -> Option<(T, usize)>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    let mut counts: BTreeMap<T, usize> = BTreeMap::new();
    for v in values {
        *counts.entry(v).or_insert(0) += 1;
    }

    let mut best: Option<(T, usize)> = None;
    for (value, count) in counts {
        match &best {
            Some((_, c)) if *c >= count => {}
            _ => best = Some((value, count)),
        }
    }
    best
}

/// Frequency table sorted by descending count; equal counts keep ascending
/// key order.
pub fn value_counts<T, I>(values: I) -> Vec<(T, usize)>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    let mut counts: BTreeMap<T, usize> = BTreeMap::new();
    for v in values {
        *counts.entry(v).or_insert(0) += 1;
    }

    let mut out: Vec<(T, usize)> = counts.into_iter().collect();
    out.sort_by(|a, b| b.1.cmp(&a.1));
    out
}

/// Elapsed-time line plus the section separator, closing every report.
pub(crate) fn section_footer(started: Instant) {
    println!("\nThis took {} seconds.", started.elapsed().as_secs_f64());
    crate::ui::messages::separator();
}
