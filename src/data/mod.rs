//! Data layer: song table loading, caching, filtering, and aggregation.
//!
//! Architecture:
//! ```text
//!  .csv / .json / .parquet        seed
//!        │                          │
//!        ▼                          ▼
//!   ┌──────────┐             ┌───────────┐
//!   │  loader   │            │ synthetic  │
//!   └──────────┘             └───────────┘
//!        │   alias → validate → derive → clean
//!        ▼
//!   ┌──────────┐
//!   │  cache    │  Source → Arc<Dataset>
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  filter   │  FilterSpec → FilteredView (indices)
//!   └──────────┘
//!        │
//!        ▼
//!   ┌────────────────────┐
//!   │ aggregate / stats   │  yearly means, genre counts, trend,
//!   │ summary / export    │  correlation, distributions, CSV
//!   └────────────────────┘
//! ```

pub mod aggregate;
pub mod cache;
pub mod error;
pub mod export;
pub mod filter;
pub mod loader;
pub mod model;
pub mod stats;
pub mod summary;
pub mod synthetic;

#[cfg(test)]
pub(crate) mod testing;
