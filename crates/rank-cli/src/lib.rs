//! CLI library components for the prediction ranker.

pub mod logging;
