use std::path::PathBuf;

use thiserror::Error;

/// Failures of the load → export path. Missing configured columns are not
/// errors and never show up here.
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("input file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("cannot read {} as tabular data: {message}", path.display())]
    Format { path: PathBuf, message: String },

    #[error("failed to build spreadsheet: {0}")]
    Serialization(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl DashboardError {
    pub fn format(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        DashboardError::Format {
            path: path.into(),
            message: message.to_string(),
        }
    }
}

impl From<rust_xlsxwriter::XlsxError> for DashboardError {
    fn from(e: rust_xlsxwriter::XlsxError) -> Self {
        DashboardError::Serialization(e.to_string())
    }
}
