use thiserror::Error;

pub type RosterResult<T> = Result<T, RosterError>;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Schema mismatch: found {columns} columns, expected at least {required}")]
    SchemaMismatch { columns: usize, required: usize },

    #[error("Source read error: {0}")]
    SourceRead(String),

    #[error("Malformed JSON input: {0}")]
    MalformedJson(String),

    #[error("Export error: {0}")]
    Export(String),

    #[error("No data: {0}")]
    NoData(String),
}
