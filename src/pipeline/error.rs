use std::path::PathBuf;

/// Fatal pipeline failures. Rows with missing values are not errors; they are
/// removed by the row filter.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("required column '{column}' not found in input header")]
    MissingColumn { column: &'static str },

    #[error("malformed CSV record: {0}")]
    Csv(#[from] csv::Error),

    #[error("line {line}: column '{column}' has non-numeric value '{value}'")]
    Parse {
        line: u64,
        column: &'static str,
        value: String,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, PipelineError>;
