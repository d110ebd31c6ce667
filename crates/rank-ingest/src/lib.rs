//! Scored-dataset ingestion.
//!
//! Reads classifier scoring exports (CSV with a header row) into Polars
//! DataFrames. Column-role inference lives in `rank-transform`; this crate
//! only gets bytes off disk with sensible error context.

pub mod csv_ingest;

pub use csv_ingest::{IngestOptions, read_scored_csv};
