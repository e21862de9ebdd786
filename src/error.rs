use thiserror::Error;

/// Convenience result type for restriction operations.
pub type RestrictResult<T> = Result<T, RestrictError>;

/// Error type shared across ingestion, restriction, and export.
///
/// Empty results are deliberately *not* represented here: an empty table is a
/// valid table, and every stage, the splitter, and the statistics reporter
/// accept one. The pipeline reports emptiness as a warning instead (see
/// [`crate::pipeline::PlanOutcome::emptied_at`]).
#[derive(Debug, Error)]
pub enum RestrictError {
    /// Underlying I/O error (e.g. file not found, permission denied).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV read/write error.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error (restriction summary).
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// The input table lacks one of the configured column names.
    #[error("missing required column '{column}'. headers={headers:?}")]
    MissingColumn {
        column: String,
        headers: Vec<String>,
    },

    /// A cell could not be parsed as an identifier.
    #[error("failed to parse value at row {row} column '{column}': {message} (raw='{raw}')")]
    ParseError {
        row: usize,
        column: String,
        raw: String,
        message: String,
    },

    /// A filter bound is inverted (min > max) or a sample/cap size is zero.
    #[error("invalid parameter: {message}")]
    InvalidParameter { message: String },
}
