use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;

use super::model::{Dataset, TripRecord};
use crate::error::DataSourceError;

// ---------------------------------------------------------------------------
// City registry
// ---------------------------------------------------------------------------

/// A known city and the CSV file holding its trips.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct City {
    pub name: &'static str,
    pub file: &'static str,
}

/// The cities with published trip data, in menu order.
pub static CITIES: [City; 3] = [
    City {
        name: "chicago",
        file: "chicago.csv",
    },
    City {
        name: "new york city",
        file: "new_york_city.csv",
    },
    City {
        name: "washington",
        file: "washington.csv",
    },
];

impl City {
    /// Where the city's CSV lives. `BIKESHARE_DATA_DIR` overrides the
    /// working directory.
    pub fn data_path(&self) -> PathBuf {
        match std::env::var_os("BIKESHARE_DATA_DIR") {
            Some(dir) => Path::new(&dir).join(self.file),
            None => PathBuf::from(self.file),
        }
    }
}

// ---------------------------------------------------------------------------
// CSV loading
// ---------------------------------------------------------------------------

/// Required source columns, by header name.
const COL_START_TIME: &str = "Start Time";
const COL_END_TIME: &str = "End Time";
const COL_START_STATION: &str = "Start Station";
const COL_END_STATION: &str = "End Station";
const COL_DURATION: &str = "Trip Duration";
const COL_USER_TYPE: &str = "User Type";

/// Optional columns: Washington's export carries neither.
const COL_GENDER: &str = "Gender";
const COL_BIRTH_YEAR: &str = "Birth Year";

/// Timestamp layouts seen across the city exports, most common first.
const TIMESTAMP_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

/// Load the full trip table for a city.
///
/// Any missing file, missing required column, or malformed field fails the
/// whole load: partial loads would silently skew every aggregate.
pub fn load_city(city: &City) -> Result<Dataset, DataSourceError> {
    load_csv(&city.data_path())
}

/// Load a trip table from an explicit CSV path.
pub fn load_csv(path: &Path) -> Result<Dataset, DataSourceError> {
    let mut reader = csv::Reader::from_path(path).map_err(|source| DataSourceError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let headers: Vec<String> = reader
        .headers()
        .map_err(|source| DataSourceError::Open {
            path: path.to_path_buf(),
            source,
        })?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let required = |column: &'static str| -> Result<usize, DataSourceError> {
        headers
            .iter()
            .position(|h| h == column)
            .ok_or(DataSourceError::MissingColumn {
                path: path.to_path_buf(),
                column,
            })
    };
    let optional = |column: &str| headers.iter().position(|h| h == column);

    let start_time_idx = required(COL_START_TIME)?;
    let end_time_idx = required(COL_END_TIME)?;
    let start_station_idx = required(COL_START_STATION)?;
    let end_station_idx = required(COL_END_STATION)?;
    let duration_idx = required(COL_DURATION)?;
    let user_type_idx = required(COL_USER_TYPE)?;

    let gender_idx = optional(COL_GENDER);
    let birth_year_idx = optional(COL_BIRTH_YEAR);

    let row_err = |row: usize, message: String| DataSourceError::Row {
        path: path.to_path_buf(),
        row,
        message,
    };

    let mut records = Vec::new();

    for (row_no, result) in reader.records().enumerate() {
        let record = result.map_err(|e| row_err(row_no, e.to_string()))?;
        let field = |idx: usize| record.get(idx).unwrap_or("");

        let start_time = parse_timestamp(field(start_time_idx))
            .ok_or_else(|| row_err(row_no, bad_timestamp(COL_START_TIME, field(start_time_idx))))?;
        let end_time = parse_timestamp(field(end_time_idx))
            .ok_or_else(|| row_err(row_no, bad_timestamp(COL_END_TIME, field(end_time_idx))))?;

        let duration_secs: f64 = field(duration_idx).trim().parse().map_err(|_| {
            row_err(
                row_no,
                format!("'{}' is not a number in '{COL_DURATION}'", field(duration_idx)),
            )
        })?;

        let gender = gender_idx.and_then(|idx| {
            let v = field(idx).trim();
            (!v.is_empty()).then(|| v.to_string())
        });

        let birth_year = match birth_year_idx {
            Some(idx) => parse_birth_year(field(idx))
                .map_err(|v| row_err(row_no, format!("'{v}' is not a year in '{COL_BIRTH_YEAR}'")))?,
            None => None,
        };

        records.push(
            TripRecord::new(
                start_time,
                end_time,
                field(start_station_idx).to_string(),
                field(end_station_idx).to_string(),
                duration_secs,
                field(user_type_idx).to_string(),
            )
            .with_gender(gender)
            .with_birth_year(birth_year),
        );
    }

    log::info!(
        "loaded {} trips from {} (gender: {}, birth year: {})",
        records.len(),
        path.display(),
        gender_idx.is_some(),
        birth_year_idx.is_some()
    );

    Ok(Dataset::new(
        records,
        gender_idx.is_some(),
        birth_year_idx.is_some(),
    ))
}

fn bad_timestamp(column: &str, value: &str) -> String {
    format!("'{value}' is not a recognized timestamp in '{column}'")
}

fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
}

/// Birth years come through the source as floats (`1992.0`). An empty cell
/// is a missing value, not an error.
fn parse_birth_year(s: &str) -> Result<Option<i64>, String> {
    let s = s.trim();
    if s.is_empty() {
        return Ok(None);
    }
    s.parse::<f64>()
        .map(|y| Some(y as i64))
        .map_err(|_| s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".csv")
            .tempfile()
            .unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    const FULL_HEADER: &str =
        "Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year";

    #[test]
    fn loads_rows_with_all_columns() {
        let file = write_csv(&format!(
            "{FULL_HEADER}\n\
             2017-01-02 08:05:00,2017-01-02 08:10:00,300.0,A St,B St,Subscriber,Male,1992.0\n\
             2017-02-07 09:00:00,2017-02-07 09:07:30,450.0,A St,C St,Customer,,\n"
        ));

        let ds = load_csv(file.path()).unwrap();

        assert_eq!(ds.len(), 2);
        assert!(ds.has_gender);
        assert!(ds.has_birth_year);

        let first = &ds.records[0];
        assert_eq!(first.start_station, "A St");
        assert_eq!(first.month, 1);
        assert_eq!(first.weekday, 0);
        assert_eq!(first.hour, 8);
        assert_eq!(first.gender.as_deref(), Some("Male"));
        assert_eq!(first.birth_year, Some(1992));

        // Empty optional cells become missing values, not errors.
        let second = &ds.records[1];
        assert_eq!(second.gender, None);
        assert_eq!(second.birth_year, None);
    }

    #[test]
    fn optional_columns_may_be_absent() {
        let file = write_csv(
            "Start Time,End Time,Trip Duration,Start Station,End Station,User Type\n\
             2017-01-02 08:05:00,2017-01-02 08:10:00,300.0,A St,B St,Subscriber\n",
        );

        let ds = load_csv(file.path()).unwrap();

        assert!(!ds.has_gender);
        assert!(!ds.has_birth_year);
        assert_eq!(ds.records[0].gender, None);
        assert_eq!(ds.records[0].birth_year, None);
    }

    #[test]
    fn missing_required_column_fails() {
        let file = write_csv(
            "Start Time,End Time,Trip Duration,Start Station,User Type\n\
             2017-01-02 08:05:00,2017-01-02 08:10:00,300.0,A St,Subscriber\n",
        );

        let err = load_csv(file.path()).unwrap_err();
        assert!(matches!(
            err,
            DataSourceError::MissingColumn {
                column: "End Station",
                ..
            }
        ));
    }

    #[test]
    fn malformed_timestamp_fails_the_whole_load() {
        let file = write_csv(&format!(
            "{FULL_HEADER}\n\
             not-a-date,2017-01-02 08:10:00,300.0,A St,B St,Subscriber,Male,1992.0\n"
        ));

        let err = load_csv(file.path()).unwrap_err();
        assert!(matches!(err, DataSourceError::Row { row: 0, .. }));
    }

    #[test]
    fn missing_file_is_an_open_error() {
        let err = load_csv(Path::new("definitely-not-here.csv")).unwrap_err();
        assert!(matches!(err, DataSourceError::Open { .. }));
    }

    #[test]
    fn slash_timestamps_are_accepted() {
        let file = write_csv(
            "Start Time,End Time,Trip Duration,Start Station,End Station,User Type\n\
             6/30/2017 15:30:00,6/30/2017 15:45:00,900,A St,B St,Subscriber\n",
        );

        let ds = load_csv(file.path()).unwrap();
        assert_eq!(ds.records[0].month, 6);
        assert_eq!(ds.records[0].hour, 15);
    }
}
