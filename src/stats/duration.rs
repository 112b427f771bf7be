use serde::Serialize;

use crate::data::model::DatasetView;
use crate::error::EmptyDatasetError;

/// Total and average travel time, in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DurationStats {
    pub total: f64,
    pub mean: f64,
}

/// Sum and average the trip durations.
///
/// Values pass through as the source gave them; negative durations are not
/// filtered. The f64 accumulator keeps the legacy float-sum behavior while
/// covering sums far past 64-bit integer range.
pub fn duration_stats(view: &DatasetView) -> Result<DurationStats, EmptyDatasetError> {
    if view.is_empty() {
        return Err(EmptyDatasetError);
    }

    let total: f64 = view.records().map(|r| r.duration_secs).sum();
    let mean = total / view.len() as f64;

    Ok(DurationStats { total, mean })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{Dataset, TripRecord};
    use chrono::NaiveDate;

    fn trip(secs: f64) -> TripRecord {
        let t = NaiveDate::from_ymd_opt(2017, 1, 2)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap();
        TripRecord::new(
            t,
            t + chrono::Duration::seconds(secs as i64),
            "A".to_string(),
            "B".to_string(),
            secs,
            "Subscriber".to_string(),
        )
    }

    #[test]
    fn empty_view_is_an_error() {
        let ds = Dataset::new(vec![], false, false);
        assert_eq!(duration_stats(&ds.view()), Err(EmptyDatasetError));
    }

    #[test]
    fn mean_is_total_over_count() {
        let ds = Dataset::new(vec![trip(300.0), trip(600.0), trip(450.0)], false, false);
        let d = duration_stats(&ds.view()).unwrap();

        assert_eq!(d.total, 1350.0);
        assert_eq!(d.mean, d.total / ds.len() as f64);
        assert_eq!(d.mean, 450.0);
    }

    #[test]
    fn negative_durations_pass_through() {
        let ds = Dataset::new(vec![trip(-100.0), trip(400.0)], false, false);
        let d = duration_stats(&ds.view()).unwrap();

        assert_eq!(d.total, 300.0);
        assert_eq!(d.mean, 150.0);
    }
}
