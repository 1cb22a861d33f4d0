// ==========================================
// Stock Aging Analytics - ingestion error types
// ==========================================
// Tool: thiserror derive macro
// ==========================================
// Every variant here is fatal to the ingestion call and carries the
// underlying cause; per-row coercion failures are NOT errors, they are
// counted in the IngestReport instead.
// ==========================================

use thiserror::Error;

/// Ingestion (format) error family.
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== File errors =====
    #[error("file not found: {0}")]
    FileNotFound(String),

    #[error("unsupported file format: {0} (expected .xlsx/.xls/.csv)")]
    UnsupportedFormat(String),

    #[error("file read failed: {0}")]
    FileReadError(String),

    #[error("Excel parsing failed: {0}")]
    ExcelParseError(String),

    #[error("CSV parsing failed: {0}")]
    CsvParseError(String),

    // ===== Structure errors =====
    #[error("header row has {found} columns, expected at least {expected}")]
    ColumnCountMismatch { expected: usize, found: usize },

    #[error("header mismatch at column {column}: expected '{expected}', found '{found}'")]
    HeaderMismatch {
        column: usize,
        expected: String,
        found: String,
    },

    #[error("source has no data rows after the {skipped}-row preamble")]
    MissingHeaderRow { skipped: usize },

    // ===== Catch-all =====
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        ImportError::FileReadError(err.to_string())
    }
}

impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        ImportError::CsvParseError(err.to_string())
    }
}

impl From<calamine::Error> for ImportError {
    fn from(err: calamine::Error) -> Self {
        ImportError::ExcelParseError(err.to_string())
    }
}

impl From<calamine::XlsxError> for ImportError {
    fn from(err: calamine::XlsxError) -> Self {
        ImportError::ExcelParseError(err.to_string())
    }
}

/// Result alias for the ingestion layer.
pub type IngestResult<T> = Result<T, ImportError>;
