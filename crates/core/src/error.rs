use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("failed to create directory {path}: {source}", path = path.display())]
    DirCreation {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to open data file {path}: {source}", path = path.display())]
    DataFileOpen {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("failed to read CSV: {0}")]
    CsvRead(csv::Error),
    #[error("failed to write CSV: {0}")]
    CsvWrite(csv::Error),
    #[error("failed to flush CSV output: {0}")]
    CsvFlush(std::io::Error),
    #[error("failed to open spreadsheet {path}: {source}", path = path.display())]
    SpreadsheetOpen {
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },
    #[error("spreadsheet has no worksheets")]
    NoWorksheet,
    #[error("unsupported source file extension: {0}")]
    UnsupportedSource(String),
    #[error("missing required column: {0}")]
    MissingColumn(String),
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        found: usize,
        expected: usize,
    },
}

pub type CoreResult<T> = std::result::Result<T, CoreError>;
