//! Data layer: core types, fetching, and histogram binning.
//!
//! Architecture:
//! ```text
//!   raw URL / preprocessed URL
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  loader   │  fetch bytes (CsvSource) → parse CSV → DataTable
//!   └──────────┘
//!        │
//!        ▼
//!   ┌───────────┐
//!   │ histogram │  one frequency Histogram per column
//!   └───────────┘
//! ```

pub mod histogram;
pub mod loader;
pub mod model;
