//! CSV materialization for scored frames.
//!
//! Index-encoded label columns are rendered back through their mappings, so
//! the file carries class names rather than mapping positions.

use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use polars::prelude::{Column, CsvWriter, DataFrame, NamedFrom, SerWriter, Series};

use rank_transform::ScoredFrame;

/// Render a frame for output: label indices become class-name strings,
/// every other column is passed through.
pub fn render_frame(frame: &ScoredFrame) -> Result<DataFrame> {
    let mut rendered: Vec<Column> = Vec::with_capacity(frame.columns().len());
    for meta in frame.columns() {
        let column = frame.data().column(&meta.name)?;
        if let Some(mapping) = meta.mapping.as_ref().filter(|_| meta.is_index_encoded()) {
            let indices = column.u32()?;
            let labels: Vec<Option<&str>> = indices
                .into_iter()
                .map(|index| index.and_then(|index| mapping.label_of(index)))
                .collect();
            rendered.push(Series::new(meta.name.as_str().into(), labels).into());
        } else {
            rendered.push(column.clone());
        }
    }
    Ok(DataFrame::new(rendered)?)
}

/// Write a scored frame to a CSV file.
pub fn write_scored_csv(frame: &ScoredFrame, path: &Path) -> Result<()> {
    let mut rendered = render_frame(frame)?;
    let mut file =
        File::create(path).with_context(|| format!("create output file: {}", path.display()))?;
    CsvWriter::new(&mut file)
        .finish(&mut rendered)
        .with_context(|| format!("write CSV: {}", path.display()))?;
    tracing::info!(
        rows = rendered.height(),
        columns = rendered.width(),
        path = %path.display(),
        "wrote ranked csv"
    );
    Ok(())
}
