use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// What a single ranking run did to a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingOutcome {
    /// Rows processed.
    pub rows: usize,
    /// Classes in the label mapping.
    pub classes: usize,
    /// Rank depth actually produced after clamping to the class count.
    pub effective_ranks: usize,
}

/// Rows whose rank-1 prediction is a given class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassCount {
    pub class: String,
    pub rows: usize,
}

/// Machine-readable summary of a CLI ranking run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingSummary {
    pub input: PathBuf,
    pub output: PathBuf,
    pub rows: usize,
    pub classes: usize,
    pub requested_ranks: usize,
    pub effective_ranks: usize,
    pub removed_old_confidences: bool,
    /// Rank-1 class distribution, in mapping order.
    pub rank_one_counts: Vec<ClassCount>,
}
