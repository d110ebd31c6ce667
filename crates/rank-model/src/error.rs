use thiserror::Error;

/// Errors surfaced while preparing or ranking a scored dataset.
///
/// `MissingPredictedLabel` and `MissingConfidenceColumn` are user-facing
/// configuration errors: the caller is expected to show them verbatim,
/// including the offending class name. Everything else signals a malformed
/// frame or a failed dataframe operation.
#[derive(Debug, Error)]
pub enum RankError {
    #[error("dataset has no predicted label column")]
    MissingPredictedLabel,
    #[error("no confidence column for class \"{0}\"")]
    MissingConfidenceColumn(String),
    #[error("more than one prediction column present")]
    MultiplePredictionColumns,
    #[error("column \"{0}\" already exists")]
    DuplicateColumn(String),
    #[error("column \"{0}\" is not part of the dataset")]
    UnknownColumn(String),
    #[error("duplicate class \"{0}\" in label mapping")]
    DuplicateClass(String),
    #[error("empty class name in label mapping")]
    EmptyClass,
    #[error("schema metadata out of sync with data: {0}")]
    SchemaMismatch(String),
    #[error("{0}")]
    Message(String),
}

pub type Result<T> = std::result::Result<T, RankError>;
