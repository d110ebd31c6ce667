//! Scored-dataset transformation for classifier outputs.
//!
//! This crate turns raw scoring exports into typed scored frames and derives
//! top-k prediction rankings from per-class confidences:
//!
//! - **frame**: [`ScoredFrame`], a Polars `DataFrame` paired with column
//!   metadata that is kept aligned through every schema mutation
//! - **inference**: column-role detection from raw CSV column names
//! - **ranking**: the rank-extraction transform itself
//!
//! [`ScoredFrame`]: frame::ScoredFrame

pub mod frame;
pub mod inference;
pub mod ranking;

pub use frame::ScoredFrame;
pub use inference::infer_scored_frame;
pub use ranking::generate_prediction_ranking;
