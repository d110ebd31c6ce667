//! Column-role inference for raw scoring exports.
//!
//! Roles are derived purely from column names, the way scoring exports spell
//! them: a `prediction` column carries the predicted class and
//! `confidence(<class>)` columns carry per-class scores. No per-dataset
//! configuration is involved.
//!
//! The label mapping is assembled from the confidence columns in header
//! order, followed by any predicted values (first-appearance order) no
//! confidence column covers. Keeping those uncovered classes in the mapping
//! is what lets the ranking transform reject them by name later instead of
//! dropping them silently.

use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::sync::Arc;

use polars::prelude::{DataFrame, DataType, NamedFrom, Series};

use rank_model::{ColumnMeta, LabelMapping, RankError, Result, ValueType};

use crate::frame::{ScoredFrame, frame_error};

const CONFIDENCE_PREFIX: &str = "confidence(";

/// Derive a [`ScoredFrame`] from a raw DataFrame.
///
/// Confidence columns are cast to `Float64` (unparseable values become null)
/// and the prediction column is re-encoded as `u32` indices into the label
/// mapping. Fails on more than one prediction column or two confidence
/// columns naming the same class.
pub fn infer_scored_frame(df: DataFrame) -> Result<ScoredFrame> {
    let mut df = df;
    let names: Vec<String> = df
        .get_column_names_owned()
        .iter()
        .map(|name| name.to_string())
        .collect();

    let mut prediction: Option<String> = None;
    let mut confidences: Vec<(String, String)> = Vec::new();
    for name in &names {
        if name.eq_ignore_ascii_case("prediction") {
            if prediction.is_some() {
                return Err(RankError::MultiplePredictionColumns);
            }
            prediction = Some(name.clone());
        } else if let Some(class) = confidence_class(name) {
            confidences.push((name.clone(), class.to_string()));
        }
    }

    let mut classes: Vec<String> = Vec::with_capacity(confidences.len());
    let mut seen: BTreeSet<String> = BTreeSet::new();
    for (_, class) in &confidences {
        if !seen.insert(class.clone()) {
            return Err(RankError::DuplicateClass(class.clone()));
        }
        classes.push(class.clone());
    }

    for (name, _) in &confidences {
        let cast = df
            .column(name)
            .map_err(frame_error)?
            .cast(&DataType::Float64)
            .map_err(frame_error)?;
        df.with_column(cast).map_err(frame_error)?;
    }

    let mut mapping: Option<Arc<LabelMapping>> = None;
    if let Some(prediction_name) = &prediction {
        let column = df.column(prediction_name).map_err(frame_error)?;
        let column = if column.dtype() == &DataType::String {
            column.clone()
        } else {
            column.cast(&DataType::String).map_err(frame_error)?
        };
        let values = column.str().map_err(frame_error)?;
        for value in values.into_iter().flatten() {
            if seen.insert(value.to_string()) {
                classes.push(value.to_string());
            }
        }
        let built = Arc::new(LabelMapping::from_labels(classes.clone())?);
        let indices: Vec<Option<u32>> = values
            .into_iter()
            .map(|value| value.and_then(|label| built.index_of(label)))
            .collect();
        let encoded = Series::new(prediction_name.as_str().into(), indices);
        df.with_column(encoded).map_err(frame_error)?;
        mapping = Some(built);
    }

    let class_by_column: BTreeMap<&str, &str> = confidences
        .iter()
        .map(|(name, class)| (name.as_str(), class.as_str()))
        .collect();
    let mut metas = Vec::with_capacity(df.width());
    for name in df.get_column_names_owned() {
        let name = name.to_string();
        let meta = if prediction.as_deref() == Some(name.as_str()) {
            let mapping = mapping.clone().ok_or_else(|| {
                RankError::SchemaMismatch("prediction column lost its mapping".to_string())
            })?;
            ColumnMeta::predicted_label(name, mapping)
        } else if let Some(class) = class_by_column.get(name.as_str()) {
            ColumnMeta::confidence(name, *class)
        } else {
            let dtype = df.column(&name).map_err(frame_error)?.dtype().clone();
            let value_type = if is_numeric_dtype(&dtype) {
                ValueType::Num
            } else {
                ValueType::Char
            };
            ColumnMeta::regular(name, value_type)
        };
        metas.push(meta);
    }

    tracing::debug!(
        columns = metas.len(),
        confidences = confidences.len(),
        has_prediction = prediction.is_some(),
        "inferred scored schema"
    );
    ScoredFrame::new(df, metas)
}

/// The class name inside a `confidence(<class>)` column name.
fn confidence_class(name: &str) -> Option<&str> {
    if name.len() <= CONFIDENCE_PREFIX.len() || !name.is_char_boundary(CONFIDENCE_PREFIX.len()) {
        return None;
    }
    let (head, tail) = name.split_at(CONFIDENCE_PREFIX.len());
    if !head.eq_ignore_ascii_case(CONFIDENCE_PREFIX) {
        return None;
    }
    let class = tail.strip_suffix(')')?;
    if class.is_empty() { None } else { Some(class) }
}

fn is_numeric_dtype(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Float64
            | DataType::Float32
            | DataType::Int64
            | DataType::Int32
            | DataType::Int16
            | DataType::Int8
            | DataType::UInt64
            | DataType::UInt32
            | DataType::UInt16
            | DataType::UInt8
    )
}
