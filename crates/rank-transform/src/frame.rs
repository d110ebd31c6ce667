//! Scored frame: a DataFrame plus aligned column metadata.
//!
//! The metadata vector mirrors the data columns one-to-one, in order. Every
//! schema mutation goes through [`ScoredFrame::append_column`] or
//! [`ScoredFrame::remove_column`] so the two sides cannot drift apart.

use polars::prelude::{DataFrame, PolarsError, Series};

use rank_model::{ColumnMeta, ColumnRole, RankError, Result};

/// A scored dataset: row data plus per-column scoring metadata.
#[derive(Debug, Clone)]
pub struct ScoredFrame {
    data: DataFrame,
    columns: Vec<ColumnMeta>,
}

impl ScoredFrame {
    /// Pair a DataFrame with its column metadata.
    ///
    /// Fails if the metadata does not describe exactly the data's columns in
    /// the data's order.
    pub fn new(data: DataFrame, columns: Vec<ColumnMeta>) -> Result<Self> {
        let names = data.get_column_names_owned();
        if names.len() != columns.len() {
            return Err(RankError::SchemaMismatch(format!(
                "{} data columns but {} metadata entries",
                names.len(),
                columns.len()
            )));
        }
        for (name, meta) in names.iter().zip(&columns) {
            if name.as_str() != meta.name {
                return Err(RankError::SchemaMismatch(format!(
                    "data column \"{}\" described as \"{}\"",
                    name.as_str(),
                    meta.name
                )));
            }
        }
        Ok(Self { data, columns })
    }

    pub fn data(&self) -> &DataFrame {
        &self.data
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.data.height()
    }

    /// Column metadata in data order.
    pub fn columns(&self) -> &[ColumnMeta] {
        &self.columns
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|meta| meta.name == name)
    }

    pub fn column_meta(&self, name: &str) -> Option<&ColumnMeta> {
        self.columns.iter().find(|meta| meta.name == name)
    }

    /// The predicted-label column, if the frame has one.
    pub fn predicted_label(&self) -> Option<&ColumnMeta> {
        self.columns
            .iter()
            .find(|meta| meta.role == ColumnRole::PredictedLabel)
    }

    /// The confidence column scoring the given class, if present.
    pub fn confidence_column(&self, class: &str) -> Option<&ColumnMeta> {
        self.columns
            .iter()
            .find(|meta| meta.role.confidence_class() == Some(class))
    }

    /// Append a new column; the series name must match the metadata name and
    /// must not collide with an existing column.
    pub fn append_column(&mut self, meta: ColumnMeta, values: Series) -> Result<()> {
        if values.name().as_str() != meta.name {
            return Err(RankError::SchemaMismatch(format!(
                "series \"{}\" appended with metadata for \"{}\"",
                values.name().as_str(),
                meta.name
            )));
        }
        if self.has_column(&meta.name) {
            return Err(RankError::DuplicateColumn(meta.name.clone()));
        }
        self.data.with_column(values).map_err(frame_error)?;
        self.columns.push(meta);
        Ok(())
    }

    /// Remove a column from data and metadata.
    pub fn remove_column(&mut self, name: &str) -> Result<()> {
        if !self.has_column(name) {
            return Err(RankError::UnknownColumn(name.to_string()));
        }
        self.data.drop_in_place(name).map_err(frame_error)?;
        self.columns.retain(|meta| meta.name != name);
        Ok(())
    }

    /// Read a numeric column as `f64` values, with nulls mapped to NaN.
    pub fn f64_values(&self, name: &str) -> Result<Vec<f64>> {
        let column = self.data.column(name).map_err(frame_error)?;
        let values = column.f64().map_err(frame_error)?;
        Ok(values
            .into_iter()
            .map(|value| value.unwrap_or(f64::NAN))
            .collect())
    }

    /// One line per column for logs and schema listings.
    pub fn describe(&self) -> Vec<String> {
        self.columns
            .iter()
            .map(|meta| {
                let classes = match &meta.mapping {
                    Some(mapping) => format!(", {} classes", mapping.len()),
                    None => String::new(),
                };
                format!(
                    "{}: {} ({}{})",
                    meta.name,
                    meta.value_type.as_str(),
                    meta.role.describe(),
                    classes
                )
            })
            .collect()
    }
}

pub(crate) fn frame_error(error: PolarsError) -> RankError {
    RankError::Message(format!("dataframe operation failed: {error}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::{DataFrame, NamedFrom, Series};
    use rank_model::ValueType;

    fn two_column_frame() -> ScoredFrame {
        let data = DataFrame::new(vec![
            Series::new("id".into(), vec!["r1", "r2"]).into(),
            Series::new("score".into(), vec![0.5, 0.25]).into(),
        ])
        .unwrap();
        let columns = vec![
            ColumnMeta::regular("id", ValueType::Char),
            ColumnMeta::regular("score", ValueType::Num),
        ];
        ScoredFrame::new(data, columns).unwrap()
    }

    #[test]
    fn new_rejects_misaligned_metadata() {
        let data = DataFrame::new(vec![Series::new("id".into(), vec!["r1"]).into()]).unwrap();
        let columns = vec![ColumnMeta::regular("other", ValueType::Char)];
        let error = ScoredFrame::new(data, columns).unwrap_err();
        assert!(matches!(error, RankError::SchemaMismatch(_)));
    }

    #[test]
    fn append_rejects_duplicate_names() {
        let mut frame = two_column_frame();
        let error = frame
            .append_column(
                ColumnMeta::regular("score", ValueType::Num),
                Series::new("score".into(), vec![1.0, 2.0]),
            )
            .unwrap_err();
        assert!(matches!(error, RankError::DuplicateColumn(name) if name == "score"));
    }

    #[test]
    fn append_and_remove_keep_metadata_aligned() {
        let mut frame = two_column_frame();
        frame
            .append_column(
                ColumnMeta::regular("extra", ValueType::Num),
                Series::new("extra".into(), vec![1.0, 2.0]),
            )
            .unwrap();
        assert_eq!(frame.data().width(), 3);
        assert_eq!(frame.columns().len(), 3);

        frame.remove_column("score").unwrap();
        assert_eq!(frame.data().width(), 2);
        assert!(frame.column_meta("score").is_none());
        assert!(frame.data().column("score").is_err());
    }

    #[test]
    fn remove_unknown_column_fails() {
        let mut frame = two_column_frame();
        let error = frame.remove_column("missing").unwrap_err();
        assert!(matches!(error, RankError::UnknownColumn(name) if name == "missing"));
    }

    #[test]
    fn f64_values_map_nulls_to_nan() {
        let data = DataFrame::new(vec![
            Series::new("score".into(), vec![Some(0.5), None, Some(0.1)]).into(),
        ])
        .unwrap();
        let frame =
            ScoredFrame::new(data, vec![ColumnMeta::regular("score", ValueType::Num)]).unwrap();
        let values = frame.f64_values("score").unwrap();
        assert_eq!(values[0], 0.5);
        assert!(values[1].is_nan());
        assert_eq!(values[2], 0.1);
    }
}
