/// Data layer: core types, loading, filtering, and summaries.
///
/// Architecture:
/// ```text
///  iris.csv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → IrisDataset
///   └──────────┘
///        │
///        ▼
///   ┌────────────┐
///   │ IrisDataset │  immutable Vec<IrisRow>
///   └────────────┘
///        │
///        ├──────────────────────┐
///        ▼                      ▼
///   ┌──────────┐          ┌──────────┐
///   │  filter   │          │  stats    │
///   │ ranges →  │          │ describe, │
///   │ indices   │          │ counts    │
///   └──────────┘          └──────────┘
/// ```

pub mod loader;
pub mod model;
pub mod filter;
pub mod stats;
