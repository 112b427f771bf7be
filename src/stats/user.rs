use serde::Serialize;

use super::{mode, value_counts};
use crate::data::model::DatasetView;
use crate::error::EmptyDatasetError;

/// Earliest, most recent, and most common year of birth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BirthYearStats {
    pub earliest: i64,
    pub most_recent: i64,
    pub most_common: i64,
}

/// Counts of user attributes.
///
/// `gender` and `birth_year` are `None` when the city's export has no such
/// column (or no usable cells) — that is "not available", not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserStats {
    /// Distinct user types with counts, descending by count.
    pub user_types: Vec<(String, usize)>,
    /// Distinct genders with counts, same ordering; `None` when unavailable.
    pub gender: Option<Vec<(String, usize)>>,
    pub birth_year: Option<BirthYearStats>,
}

/// Compute user-type, gender, and birth-year statistics.
///
/// An empty view is an error only when there is gender or birth-year data
/// that would need rows to compute on; a city without those columns just
/// reports empty counts and "not available" markers.
pub fn user_stats(view: &DatasetView) -> Result<UserStats, EmptyDatasetError> {
    if view.is_empty() && (view.has_gender() || view.has_birth_year()) {
        return Err(EmptyDatasetError);
    }

    let user_types = value_counts(view.records().map(|r| r.user_type.clone()));

    // Rows with an empty cell are skipped, as the legacy groupby did.
    let gender = if view.has_gender() {
        Some(value_counts(
            view.records().filter_map(|r| r.gender.clone()),
        ))
    } else {
        None
    };

    let birth_year = if view.has_birth_year() {
        birth_year_stats(view)
    } else {
        None
    };

    Ok(UserStats {
        user_types,
        gender,
        birth_year,
    })
}

/// `None` when every cell in the column is empty.
fn birth_year_stats(view: &DatasetView) -> Option<BirthYearStats> {
    let years: Vec<i64> = view.records().filter_map(|r| r.birth_year).collect();
    let earliest = *years.iter().min()?;
    let most_recent = *years.iter().max()?;
    let (most_common, _) = mode(years.iter().copied())?;

    Some(BirthYearStats {
        earliest,
        most_recent,
        most_common,
    })
}
