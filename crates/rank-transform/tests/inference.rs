//! Tests for scored-schema inference.

use polars::prelude::*;

use rank_model::{ColumnRole, RankError, ValueType};
use rank_transform::infer_scored_frame;

#[test]
fn detects_roles_from_column_names() {
    let df = DataFrame::new(vec![
        Series::new("sepal_len".into(), vec![5.1, 4.9]).into(),
        Series::new("prediction".into(), vec!["setosa", "versicolor"]).into(),
        Series::new("confidence(setosa)".into(), vec![0.9, 0.2]).into(),
        Series::new("confidence(versicolor)".into(), vec![0.1, 0.8]).into(),
    ])
    .unwrap();

    let frame = infer_scored_frame(df).unwrap();

    assert_eq!(
        frame.column_meta("sepal_len").unwrap().role,
        ColumnRole::Regular
    );
    assert_eq!(
        frame.column_meta("sepal_len").unwrap().value_type,
        ValueType::Num
    );
    assert_eq!(
        frame.column_meta("prediction").unwrap().role,
        ColumnRole::PredictedLabel
    );
    assert_eq!(
        frame
            .column_meta("confidence(setosa)")
            .unwrap()
            .role
            .confidence_class(),
        Some("setosa")
    );
    assert!(frame.confidence_column("versicolor").is_some());

    insta::assert_snapshot!(frame.describe().join("\n"), @r#"
    sepal_len: num (regular)
    prediction: char (predicted label, 2 classes)
    confidence(setosa): num (confidence for class "setosa")
    confidence(versicolor): num (confidence for class "versicolor")
    "#);
}

#[test]
fn mapping_orders_confidence_classes_before_uncovered_predictions() {
    let df = DataFrame::new(vec![
        Series::new("prediction".into(), vec!["C", "A", "D", "C"]).into(),
        Series::new("confidence(A)".into(), vec![0.2, 0.9, 0.1, 0.3]).into(),
        Series::new("confidence(B)".into(), vec![0.8, 0.1, 0.9, 0.7]).into(),
    ])
    .unwrap();

    let frame = infer_scored_frame(df).unwrap();

    let mapping = frame
        .predicted_label()
        .and_then(|meta| meta.mapping.clone())
        .expect("prediction mapping");
    let labels: Vec<&str> = mapping.labels().collect();
    // Confidence classes in header order, then uncovered predictions in
    // first-appearance order.
    assert_eq!(labels, vec!["A", "B", "C", "D"]);
}

#[test]
fn prediction_column_is_index_encoded() {
    let df = DataFrame::new(vec![
        Series::new("prediction".into(), vec!["no", "yes", "no"]).into(),
        Series::new("confidence(yes)".into(), vec![0.3, 0.8, 0.1]).into(),
        Series::new("confidence(no)".into(), vec![0.7, 0.2, 0.9]).into(),
    ])
    .unwrap();

    let frame = infer_scored_frame(df).unwrap();

    let meta = frame.predicted_label().unwrap();
    assert!(meta.is_index_encoded());
    let indices = frame.data().column("prediction").unwrap().u32().unwrap();
    // Mapping order is yes=0, no=1.
    assert_eq!(indices.get(0), Some(1));
    assert_eq!(indices.get(1), Some(0));
    assert_eq!(indices.get(2), Some(1));
}

#[test]
fn confidence_columns_are_cast_to_f64() {
    // String-typed scores happen when an export quotes numeric cells.
    let df = DataFrame::new(vec![
        Series::new("prediction".into(), vec!["a", "b"]).into(),
        Series::new("confidence(a)".into(), vec!["0.75", "0.25"]).into(),
        Series::new("confidence(b)".into(), vec!["0.25", "0.75"]).into(),
    ])
    .unwrap();

    let frame = infer_scored_frame(df).unwrap();

    let scores = frame
        .data()
        .column("confidence(a)")
        .unwrap()
        .f64()
        .unwrap();
    assert_eq!(scores.get(0), Some(0.75));
    assert_eq!(scores.get(1), Some(0.25));
}

#[test]
fn numeric_prediction_labels_become_classes() {
    let df = DataFrame::new(vec![
        Series::new("prediction".into(), vec![2i64, 7, 2]).into(),
        Series::new("confidence(2)".into(), vec![0.6, 0.1, 0.8]).into(),
        Series::new("confidence(7)".into(), vec![0.4, 0.9, 0.2]).into(),
    ])
    .unwrap();

    let frame = infer_scored_frame(df).unwrap();

    let mapping = frame
        .predicted_label()
        .and_then(|meta| meta.mapping.clone())
        .unwrap();
    let labels: Vec<&str> = mapping.labels().collect();
    assert_eq!(labels, vec!["2", "7"]);
}

#[test]
fn role_names_match_case_insensitively() {
    let df = DataFrame::new(vec![
        Series::new("Prediction".into(), vec!["x"]).into(),
        Series::new("CONFIDENCE(x)".into(), vec![1.0]).into(),
    ])
    .unwrap();

    let frame = infer_scored_frame(df).unwrap();

    assert!(frame.predicted_label().is_some());
    assert!(frame.confidence_column("x").is_some());
}

#[test]
fn two_prediction_columns_fail() {
    let df = DataFrame::new(vec![
        Series::new("prediction".into(), vec!["a"]).into(),
        Series::new("PREDICTION".into(), vec!["b"]).into(),
    ])
    .unwrap();

    let error = infer_scored_frame(df).unwrap_err();
    assert!(matches!(error, RankError::MultiplePredictionColumns));
}

#[test]
fn duplicate_confidence_class_fails() {
    let df = DataFrame::new(vec![
        Series::new("confidence(a)".into(), vec![0.5]).into(),
        Series::new("CONFIDENCE(a)".into(), vec![0.5]).into(),
    ])
    .unwrap();

    let error = infer_scored_frame(df).unwrap_err();
    assert!(matches!(error, RankError::DuplicateClass(class) if class == "a"));
}

#[test]
fn frame_without_prediction_column_is_allowed() {
    let df = DataFrame::new(vec![
        Series::new("confidence(a)".into(), vec![0.5]).into(),
        Series::new("note".into(), vec!["n"]).into(),
    ])
    .unwrap();

    let frame = infer_scored_frame(df).unwrap();

    assert!(frame.predicted_label().is_none());
    assert!(frame.confidence_column("a").is_some());
    assert_eq!(frame.column_meta("note").unwrap().value_type, ValueType::Char);
}
