/// Data layer: core types, loading, filtering, counting and export.
///
/// Architecture:
/// ```text
///  .xlsx / .ods / .csv / .parquet / .json
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Table
///   └──────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ normalize  │  Sí / No canonical form for categorical columns
///   └───────────┘
///        │            (cache keeps the result for the session)
///        ▼
///   ┌──────────┐      ┌──────────┐
///   │  filter   │ ──▶ │  counts   │  per-column Sí / No frequencies
///   └──────────┘      └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  export   │  filtered Table → .xlsx bytes
///   └──────────┘
/// ```

pub mod cache;
pub mod counts;
pub mod error;
pub mod export;
pub mod filter;
pub mod loader;
pub mod model;
pub mod normalize;
pub mod pipeline;
