/// Data layer: core types, loading, and filtering.
///
/// Architecture:
/// ```text
///  chicago.csv / new_york_city.csv / washington.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse CSV → Dataset, derive calendar fields
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Dataset  │  Vec<TripRecord>, optional-column flags
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  month/weekday predicates → DatasetView (indices)
///   └──────────┘
/// ```
pub mod filter;
pub mod loader;
pub mod model;
