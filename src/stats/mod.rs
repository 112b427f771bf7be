//! Statistics layer: four independent aggregations over a [`DatasetView`].
//!
//! Every "most frequent" result here breaks ties by first occurrence in
//! source order, so repeated runs over the same file give the same answer.
//!
//! [`DatasetView`]: crate::data::model::DatasetView

pub mod duration;
pub mod station;
pub mod time;
pub mod user;

pub use duration::{duration_stats, DurationStats};
pub use station::{station_stats, StationStats};
pub use time::{time_stats, TimeStats};
pub use user::{user_stats, BirthYearStats, UserStats};

use std::collections::HashMap;
use std::hash::Hash;

/// Most frequent value and its count; `None` on an empty input.
///
/// Ties go to the value whose first occurrence comes earliest.
pub(crate) fn mode<T, I>(values: I) -> Option<(T, usize)>
where
    T: Eq + Hash + Clone,
    I: IntoIterator<Item = T>,
{
    let counted = count_in_order(values);
    let mut best: Option<(T, usize)> = None;
    for (value, count) in counted {
        match &best {
            Some((_, best_count)) if *best_count >= count => {}
            _ => best = Some((value, count)),
        }
    }
    best
}

/// All distinct values with counts, descending by count; equal counts keep
/// first-occurrence order.
pub(crate) fn value_counts<T, I>(values: I) -> Vec<(T, usize)>
where
    T: Eq + Hash + Clone,
    I: IntoIterator<Item = T>,
{
    let mut counted = count_in_order(values);
    // Stable sort preserves first-occurrence order among equal counts.
    counted.sort_by(|a, b| b.1.cmp(&a.1));
    counted
}

/// Count occurrences, returning distinct values in first-occurrence order.
fn count_in_order<T, I>(values: I) -> Vec<(T, usize)>
where
    T: Eq + Hash + Clone,
    I: IntoIterator<Item = T>,
{
    let mut counts: HashMap<T, usize> = HashMap::new();
    let mut order: Vec<T> = Vec::new();
    for v in values {
        let slot = counts.entry(v.clone()).or_insert(0);
        if *slot == 0 {
            order.push(v);
        }
        *slot += 1;
    }
    order
        .into_iter()
        .map(|v| {
            let n = counts[&v];
            (v, n)
        })
        .collect()
}
