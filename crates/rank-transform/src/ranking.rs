//! Top-k prediction ranking over per-class confidences.
//!
//! For every row the per-class confidences are ordered and the best
//! `effective_k` classes are written out as `(label, confidence)` column
//! pairs, replacing the single predicted label. `effective_k` is the
//! requested depth clamped to the class count.

use std::cmp::Ordering;

use polars::prelude::{NamedFrom, Series};

use rank_model::{ColumnMeta, RankError, RankingOutcome, Result};

use crate::frame::ScoredFrame;

/// Name prefix for ranked confidence columns (`confidence_1`, `confidence_2`, ...).
const CONFIDENCE_NAME: &str = "confidence";

/// Replace a frame's single-label prediction with top-k ranked predictions.
///
/// Validates the frame, appends `effective_k` pairs of
/// `<prediction>_<i>` / `confidence_<i>` columns in descending-confidence
/// order, then removes the predicted-label column and, when
/// `remove_old_confidences` is set, the original per-class confidence
/// columns.
///
/// Every rank-label column receives an independent clone of the label
/// mapping, so its index values cannot be invalidated by later edits to any
/// other column's mapping.
///
/// # Errors
///
/// All validation happens before any mutation; on error the frame is
/// untouched.
///
/// - [`RankError::MissingPredictedLabel`] when no predicted-label column is
///   present.
/// - [`RankError::MissingConfidenceColumn`] naming the first class in mapping
///   order that has no confidence column.
/// - [`RankError::DuplicateColumn`] when an output column name already exists
///   in the frame.
pub fn generate_prediction_ranking(
    frame: &mut ScoredFrame,
    ranks: usize,
    remove_old_confidences: bool,
) -> Result<RankingOutcome> {
    let predicted = frame
        .predicted_label()
        .ok_or(RankError::MissingPredictedLabel)?;
    let mapping = predicted.mapping.clone().ok_or_else(|| {
        RankError::SchemaMismatch("predicted label column has no label mapping".to_string())
    })?;
    let prediction_name = predicted.name.clone();
    let classes = mapping.len();

    let mut confidence_names = Vec::with_capacity(classes);
    for class in mapping.labels() {
        let meta = frame
            .confidence_column(class)
            .ok_or_else(|| RankError::MissingConfidenceColumn(class.to_string()))?;
        confidence_names.push(meta.name.clone());
    }

    let effective = ranks.min(classes);
    for rank in 1..=effective {
        for name in [
            rank_label_name(&prediction_name, rank),
            rank_confidence_name(rank),
        ] {
            if frame.has_column(&name) {
                return Err(RankError::DuplicateColumn(name));
            }
        }
    }

    let height = frame.height();
    let mut scores: Vec<Vec<f64>> = Vec::with_capacity(classes);
    for name in &confidence_names {
        scores.push(frame.f64_values(name)?);
    }

    let mut rank_labels: Vec<Vec<u32>> = (0..effective).map(|_| Vec::with_capacity(height)).collect();
    let mut rank_confidences: Vec<Vec<f64>> =
        (0..effective).map(|_| Vec::with_capacity(height)).collect();
    let mut ordered: Vec<(f64, usize)> = Vec::with_capacity(classes);
    for row in 0..height {
        ordered.clear();
        for (class_index, column) in scores.iter().enumerate() {
            ordered.push((column[row], class_index));
        }
        ordered.sort_by(compare_scored);
        for (rank, &(confidence, class_index)) in ordered.iter().take(effective).enumerate() {
            rank_labels[rank].push(class_index as u32);
            rank_confidences[rank].push(confidence);
        }
    }

    for rank in 1..=effective {
        let label_name = rank_label_name(&prediction_name, rank);
        let label_meta = ColumnMeta::ranked_label(label_name.as_str(), rank as u32, mapping.detached());
        frame.append_column(
            label_meta,
            Series::new(
                label_name.as_str().into(),
                std::mem::take(&mut rank_labels[rank - 1]),
            ),
        )?;

        let confidence_name = rank_confidence_name(rank);
        let confidence_meta = ColumnMeta::ranked_confidence(confidence_name.as_str(), rank as u32);
        frame.append_column(
            confidence_meta,
            Series::new(
                confidence_name.as_str().into(),
                std::mem::take(&mut rank_confidences[rank - 1]),
            ),
        )?;
    }

    frame.remove_column(&prediction_name)?;
    if remove_old_confidences {
        for name in &confidence_names {
            frame.remove_column(name)?;
        }
    }

    tracing::info!(
        rows = height,
        classes,
        ranks = effective,
        "generated prediction ranking"
    );
    Ok(RankingOutcome {
        rows: height,
        classes,
        effective_ranks: effective,
    })
}

/// Descending confidence; equal confidences rank the lower class index
/// first. NaN orders above every finite value (`f64::total_cmp`), so a
/// missing confidence takes rank 1 rather than poisoning the sort.
fn compare_scored(a: &(f64, usize), b: &(f64, usize)) -> Ordering {
    b.0.total_cmp(&a.0).then_with(|| a.1.cmp(&b.1))
}

fn rank_label_name(prediction_name: &str, rank: usize) -> String {
    format!("{prediction_name}_{rank}")
}

fn rank_confidence_name(rank: usize) -> String {
    format!("{CONFIDENCE_NAME}_{rank}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_is_descending_with_index_tiebreak() {
        let mut pairs = vec![(0.2, 0), (0.7, 1), (0.2, 2), (0.9, 3)];
        pairs.sort_by(compare_scored);
        assert_eq!(pairs, vec![(0.9, 3), (0.7, 1), (0.2, 0), (0.2, 2)]);
    }

    #[test]
    fn nan_orders_first() {
        let mut pairs = vec![(0.4, 0), (f64::NAN, 1), (0.9, 2)];
        pairs.sort_by(compare_scored);
        assert_eq!(pairs[0].1, 1);
        assert_eq!(pairs[1], (0.9, 2));
    }

    #[test]
    fn rank_column_names() {
        assert_eq!(rank_label_name("prediction", 1), "prediction_1");
        assert_eq!(rank_confidence_name(3), "confidence_3");
    }
}
