use serde::Serialize;

use super::mode;
use crate::data::model::DatasetView;
use crate::error::EmptyDatasetError;

/// Most frequent times of travel, all derived from start timestamps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeStats {
    /// Most common calendar month (1–12).
    pub month: u32,
    /// Most common weekday, as its full English name.
    pub day_of_week: String,
    /// Most common start hour (0–23).
    pub start_hour: u32,
}

/// Compute the most frequent month, weekday, and start hour.
///
/// Ties break to first occurrence in source order. Undefined on an empty
/// view.
pub fn time_stats(view: &DatasetView) -> Result<TimeStats, EmptyDatasetError> {
    let (month, _) = mode(view.records().map(|r| r.month)).ok_or(EmptyDatasetError)?;
    let (day_of_week, _) =
        mode(view.records().map(|r| r.weekday_name.clone())).ok_or(EmptyDatasetError)?;
    let (start_hour, _) = mode(view.records().map(|r| r.hour)).ok_or(EmptyDatasetError)?;

    Ok(TimeStats {
        month,
        day_of_week,
        start_hour,
    })
}
