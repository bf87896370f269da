use thiserror::Error;

pub type Result<T> = std::result::Result<T, CorpusError>;

#[derive(Error, Debug)]
pub enum CorpusError {
    #[error("failed to read corpus file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse corpus: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("post {id}: invalid timestamp {value:?}: {source}")]
    Timestamp {
        id: String,
        value: String,
        source: chrono::ParseError,
    },
}
