use super::model::{Dataset, DatasetView};

// ---------------------------------------------------------------------------
// Filter predicate: optional month / weekday constraints
// ---------------------------------------------------------------------------

/// Optional equality constraints on the derived calendar fields.
///
/// An unset axis means "no constraint"; both set means both must match.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterSpec {
    /// Calendar month, 1–12.
    pub month: Option<u32>,
    /// Weekday index, 0 = Monday.
    pub weekday: Option<u32>,
}

impl FilterSpec {
    pub fn is_unconstrained(&self) -> bool {
        self.month.is_none() && self.weekday.is_none()
    }
}

/// Return the view of rows passing the spec, in source order.
///
/// The dataset itself is never touched; an unconstrained spec yields a view
/// over every row.
pub fn filter<'a>(dataset: &'a Dataset, spec: &FilterSpec) -> DatasetView<'a> {
    if spec.is_unconstrained() {
        return dataset.view();
    }

    let indices = dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, r)| {
            spec.month.map_or(true, |m| r.month == m)
                && spec.weekday.map_or(true, |d| r.weekday == d)
        })
        .map(|(i, _)| i)
        .collect();
    DatasetView::from_indices(dataset, indices)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::TripRecord;
    use chrono::{NaiveDate, NaiveDateTime};

    fn trip(y: i32, m: u32, d: u32, h: u32, station: &str) -> TripRecord {
        let start: NaiveDateTime = NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap();
        TripRecord::new(
            start,
            start + chrono::Duration::minutes(10),
            station.to_string(),
            "End".to_string(),
            600.0,
            "Subscriber".to_string(),
        )
    }

    fn sample() -> Dataset {
        Dataset::new(
            vec![
                trip(2017, 1, 2, 8, "A"),  // Jan, Monday
                trip(2017, 2, 7, 9, "B"),  // Feb, Tuesday
                trip(2017, 1, 3, 10, "C"), // Jan, Tuesday
                trip(2017, 1, 2, 17, "D"), // Jan, Monday
            ],
            false,
            false,
        )
    }

    #[test]
    fn unconstrained_spec_is_identity() {
        let ds = sample();
        let view = filter(&ds, &FilterSpec::default());

        assert_eq!(view.len(), ds.len());
        let stations: Vec<&str> = view.records().map(|r| r.start_station.as_str()).collect();
        assert_eq!(stations, vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn month_filter_keeps_only_that_month_in_order() {
        let ds = sample();
        let spec = FilterSpec {
            month: Some(1),
            weekday: None,
        };
        let view = filter(&ds, &spec);

        assert!(view.records().all(|r| r.month == 1));
        let stations: Vec<&str> = view.records().map(|r| r.start_station.as_str()).collect();
        assert_eq!(stations, vec!["A", "C", "D"]);
    }

    #[test]
    fn weekday_filter_keeps_only_that_weekday() {
        let ds = sample();
        let spec = FilterSpec {
            month: None,
            weekday: Some(1), // Tuesday
        };
        let view = filter(&ds, &spec);

        let stations: Vec<&str> = view.records().map(|r| r.start_station.as_str()).collect();
        assert_eq!(stations, vec!["B", "C"]);
    }

    #[test]
    fn month_and_weekday_are_a_conjunction() {
        let ds = sample();
        let spec = FilterSpec {
            month: Some(1),
            weekday: Some(1),
        };
        let view = filter(&ds, &spec);

        let stations: Vec<&str> = view.records().map(|r| r.start_station.as_str()).collect();
        assert_eq!(stations, vec!["C"]);
    }

    #[test]
    fn filtering_does_not_touch_the_dataset() {
        let ds = sample();
        let _ = filter(
            &ds,
            &FilterSpec {
                month: Some(2),
                weekday: None,
            },
        );
        assert_eq!(ds.len(), 4);
    }
}
