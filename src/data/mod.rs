/// Data layer: core types, loading, catalog and chart view-models.
///
/// Architecture:
/// ```text
///  .csv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → LaunchDataset (fails with DataLoadError)
///   └──────────┘
///        │
///        ▼
///   ┌───────────────┐
///   │ LaunchDataset  │  Vec<LaunchRecord>, payload bounds; Arc-shared, read-only
///   └───────────────┘
///        │
///        ├──────────────► catalog   distinct sites → dropdown options
///        ▼
///   ┌──────────┐
///   │   view    │  SiteSelector + PayloadRange → pie slices / scatter points
///   └──────────┘
/// ```

pub mod catalog;
pub mod error;
pub mod filter;
pub mod loader;
pub mod model;
pub mod view;
