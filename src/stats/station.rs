use std::fmt;

use serde::Serialize;

use super::mode;
use crate::data::model::DatasetView;
use crate::error::EmptyDatasetError;

/// A station name with its occurrence count. Renders as `"A (3)"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountedStation {
    pub name: String,
    pub count: usize,
}

impl fmt::Display for CountedStation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.count)
    }
}

/// A start/end station pair with its count. Renders as `"A -> B (2)"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountedTrip {
    pub start: String,
    pub end: String,
    pub count: usize,
}

impl fmt::Display for CountedTrip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} ({})", self.start, self.end, self.count)
    }
}

/// Most popular stations and trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StationStats {
    pub start_station: CountedStation,
    pub end_station: CountedStation,
    pub station_pair: CountedTrip,
}

/// Compute the most used start station, end station, and start→end pair.
///
/// Grouping is exact string equality on station names; ties break to the
/// value whose first row comes earliest.
pub fn station_stats(view: &DatasetView) -> Result<StationStats, EmptyDatasetError> {
    let (name, count) =
        mode(view.records().map(|r| r.start_station.clone())).ok_or(EmptyDatasetError)?;
    let start_station = CountedStation { name, count };

    let (name, count) =
        mode(view.records().map(|r| r.end_station.clone())).ok_or(EmptyDatasetError)?;
    let end_station = CountedStation { name, count };

    let ((start, end), count) = mode(
        view.records()
            .map(|r| (r.start_station.clone(), r.end_station.clone())),
    )
    .ok_or(EmptyDatasetError)?;
    let station_pair = CountedTrip { start, end, count };

    Ok(StationStats {
        start_station,
        end_station,
        station_pair,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{Dataset, TripRecord};
    use chrono::NaiveDate;

    fn trip(start: &str, end: &str) -> TripRecord {
        let t = NaiveDate::from_ymd_opt(2017, 1, 2)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap();
        TripRecord::new(
            t,
            t + chrono::Duration::minutes(5),
            start.to_string(),
            end.to_string(),
            300.0,
            "Subscriber".to_string(),
        )
    }

    #[test]
    fn empty_view_is_an_error() {
        let ds = Dataset::new(vec![], false, false);
        assert_eq!(station_stats(&ds.view()), Err(EmptyDatasetError));
    }

    #[test]
    fn pair_counting_is_exact_on_both_names() {
        let ds = Dataset::new(
            vec![
                trip("A", "B"),
                trip("A", "C"),
                trip("A", "B"),
                trip("B", "A"), // reversed pair is a different trip
            ],
            false,
            false,
        );

        let s = station_stats(&ds.view()).unwrap();
        assert_eq!(s.start_station.to_string(), "A (3)");
        assert_eq!(s.end_station.to_string(), "B (2)");
        assert_eq!(s.station_pair.to_string(), "A -> B (2)");
    }

    #[test]
    fn station_tie_goes_to_first_occurrence() {
        let ds = Dataset::new(vec![trip("X", "Q"), trip("Y", "Q")], false, false);
        let s = station_stats(&ds.view()).unwrap();
        assert_eq!(s.start_station.name, "X");
        assert_eq!(s.start_station.count, 1);
    }
}
