use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

pub type DialogueResult<T> = Result<T, DialogueError>;

#[derive(Debug, Error, Diagnostic)]
pub enum DialogueError {
    #[error("row {row}: line id '{raw_id}' is not an integer")]
    #[diagnostic(
        code("dialogue.malformed_row"),
        help("the first column of every data row must be a whole number")
    )]
    MalformedRow { row: usize, raw_id: String },
    #[error("header column {column} is '{found}', expected '{expected}'")]
    #[diagnostic(code("dialogue.header_mismatch"))]
    HeaderMismatch {
        column: usize,
        expected: &'static str,
        found: String,
    },
    #[error("csv error on line {line}: {message}")]
    #[diagnostic(code("dialogue.csv"))]
    Csv { line: usize, message: String },
    #[error("index {index} is out of range for a sequence of length {len}")]
    #[diagnostic(code("dialogue.index_out_of_range"))]
    IndexOutOfRange { index: usize, len: usize },
    #[error("io error at {path}: {source}")]
    #[diagnostic(code("dialogue.io"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("serialization error: {0}")]
    #[diagnostic(code("dialogue.serialization"))]
    Serialization(String),
}

impl DialogueError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
