/// Data layer: core types, loading, filtering and aggregation.
///
/// Architecture:
/// ```text
///  .csv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → TweetDataset (cached per session)
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │ TweetDataset  │  Vec<TweetRecord>, airline index
///   └──────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  airline, then optional sentiment → subset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  stats    │  metrics, counts, proportions, corpus → words
///   └──────────┘
/// ```

pub mod error;
pub mod filter;
pub mod loader;
pub mod model;
pub mod stats;
pub mod words;
