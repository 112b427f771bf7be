use chrono::{Datelike, NaiveDateTime, Timelike};

// ---------------------------------------------------------------------------
// TripRecord – one row of the source table
// ---------------------------------------------------------------------------

/// A single bike-share trip with its derived calendar fields.
///
/// The derived fields (`month`, `weekday`, `weekday_name`, `hour`) are pure
/// functions of `start_time`, computed once in [`TripRecord::new`] so they can
/// never diverge from it.
#[derive(Debug, Clone)]
pub struct TripRecord {
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub start_station: String,
    pub end_station: String,
    /// Trip duration in seconds, as given by the source (no outlier filtering).
    pub duration_secs: f64,
    pub user_type: String,
    /// `None` for an empty cell or when the column is absent from the source.
    pub gender: Option<String>,
    /// Source cells look like `1992.0`; kept as a plain year.
    pub birth_year: Option<i64>,

    /// Calendar month of the start timestamp (1–12).
    pub month: u32,
    /// Weekday index of the start timestamp, 0 = Monday (ISO ordering).
    pub weekday: u32,
    /// Full English weekday name ("Monday".."Sunday").
    pub weekday_name: String,
    /// Hour of day of the start timestamp (0–23).
    pub hour: u32,
}

impl TripRecord {
    pub fn new(
        start_time: NaiveDateTime,
        end_time: NaiveDateTime,
        start_station: String,
        end_station: String,
        duration_secs: f64,
        user_type: String,
    ) -> Self {
        TripRecord {
            month: start_time.month(),
            weekday: start_time.weekday().num_days_from_monday(),
            weekday_name: start_time.format("%A").to_string(),
            hour: start_time.hour(),
            start_time,
            end_time,
            start_station,
            end_station,
            duration_secs,
            user_type,
            gender: None,
            birth_year: None,
        }
    }

    pub fn with_gender(mut self, gender: Option<String>) -> Self {
        self.gender = gender;
        self
    }

    pub fn with_birth_year(mut self, birth_year: Option<i64>) -> Self {
        self.birth_year = birth_year;
        self
    }
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded table for one city
// ---------------------------------------------------------------------------

/// All trips for one city, in source-file order. Read-only after load.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub records: Vec<TripRecord>,
    /// Whether the source carried a `Gender` column (it is per-city).
    pub has_gender: bool,
    /// Whether the source carried a `Birth Year` column.
    pub has_birth_year: bool,
}

impl Dataset {
    pub fn new(records: Vec<TripRecord>, has_gender: bool, has_birth_year: bool) -> Self {
        Dataset {
            records,
            has_gender,
            has_birth_year,
        }
    }

    /// Number of trips.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset has zero trips.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// A view over every row, in source order.
    pub fn view(&self) -> DatasetView<'_> {
        DatasetView {
            dataset: self,
            indices: (0..self.records.len()).collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// DatasetView – a non-owning row subset
// ---------------------------------------------------------------------------

/// An ordered subset of a [`Dataset`], held as row indices.
///
/// Filtering never copies or mutates rows; a view is just which rows survive,
/// in their original relative order.
#[derive(Debug, Clone)]
pub struct DatasetView<'a> {
    dataset: &'a Dataset,
    indices: Vec<usize>,
}

impl<'a> DatasetView<'a> {
    pub(crate) fn from_indices(dataset: &'a Dataset, indices: Vec<usize>) -> Self {
        DatasetView { dataset, indices }
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Iterate the surviving rows in source order.
    pub fn records(&self) -> impl Iterator<Item = &'a TripRecord> + '_ {
        self.indices.iter().map(|&i| &self.dataset.records[i])
    }

    /// The i-th surviving row, if any.
    pub fn get(&self, i: usize) -> Option<&'a TripRecord> {
        self.indices.get(i).map(|&idx| &self.dataset.records[idx])
    }

    pub fn has_gender(&self) -> bool {
        self.dataset.has_gender
    }

    pub fn has_birth_year(&self) -> bool {
        self.dataset.has_birth_year
    }
}
