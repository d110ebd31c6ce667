//! CSV loading for classifier scoring exports.

use std::path::Path;

use anyhow::{Context, Result};
use polars::prelude::{CsvReadOptions, DataFrame, SerReader};

/// Options for reading a scored CSV export.
#[derive(Debug, Clone, Default)]
pub struct IngestOptions {
    /// Rows to skip before the header line, for exports that prepend a
    /// tool banner.
    pub skip_rows: usize,
    /// Read at most this many data rows.
    pub n_rows: Option<usize>,
}

impl IngestOptions {
    /// Skip rows before the header line.
    pub fn with_skip_rows(mut self, skip_rows: usize) -> Self {
        self.skip_rows = skip_rows;
        self
    }

    /// Cap the number of data rows read.
    pub fn with_n_rows(mut self, n_rows: Option<usize>) -> Self {
        self.n_rows = n_rows;
        self
    }
}

/// Read a scoring export into a DataFrame.
///
/// The file must have a header row; column roles are inferred downstream
/// from the header names.
pub fn read_scored_csv(path: &Path, options: &IngestOptions) -> Result<DataFrame> {
    if !path.exists() {
        anyhow::bail!("scored CSV not found: {}", path.display());
    }
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_skip_rows(options.skip_rows)
        .with_n_rows(options.n_rows)
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .with_context(|| format!("failed to open CSV reader: {}", path.display()))?
        .finish()
        .with_context(|| format!("failed to read CSV: {}", path.display()))?;
    tracing::debug!(
        rows = df.height(),
        columns = df.width(),
        path = %path.display(),
        "read scored csv"
    );
    Ok(df)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_headers_and_infers_numeric_scores() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scores.csv");
        std::fs::write(
            &path,
            "prediction,confidence(yes),confidence(no)\nyes,0.8,0.2\nno,0.4,0.6\n",
        )
        .unwrap();

        let df = read_scored_csv(&path, &IngestOptions::default()).unwrap();

        assert_eq!(df.height(), 2);
        assert_eq!(df.width(), 3);
        let scores = df.column("confidence(yes)").unwrap().f64().unwrap();
        assert_eq!(scores.get(0), Some(0.8));
        assert_eq!(scores.get(1), Some(0.4));
    }

    #[test]
    fn skip_rows_jumps_over_banner_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("banner.csv");
        std::fs::write(
            &path,
            "exported by scorer v2\nprediction,confidence(yes),confidence(no)\nyes,0.9,0.1\n",
        )
        .unwrap();

        let df = read_scored_csv(&path, &IngestOptions::default().with_skip_rows(1)).unwrap();

        assert_eq!(df.height(), 1);
        assert!(df.column("prediction").is_ok());
    }

    #[test]
    fn n_rows_caps_the_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("capped.csv");
        std::fs::write(
            &path,
            "prediction,confidence(a)\na,0.1\na,0.2\na,0.3\n",
        )
        .unwrap();

        let df =
            read_scored_csv(&path, &IngestOptions::default().with_n_rows(Some(2))).unwrap();

        assert_eq!(df.height(), 2);
    }

    #[test]
    fn missing_file_is_a_contextual_error() {
        let error =
            read_scored_csv(Path::new("/no/such/scores.csv"), &IngestOptions::default())
                .unwrap_err();
        assert!(error.to_string().contains("not found"));
    }
}
