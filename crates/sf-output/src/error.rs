//! Output backend errors.

/// Failures raised by an output backend.
#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("output I/O: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv write: {0}")]
    Csv(#[from] ::csv::Error),
}

pub type OutputResult<T> = Result<T, OutputError>;
