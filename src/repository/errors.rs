use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("couldn't read dataset {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed dataset row: {0}")]
    Decode(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

impl From<csv::Error> for RepositoryError {
    fn from(err: csv::Error) -> Self {
        let line = err
            .position()
            .map(|pos| format!("line {}", pos.line()))
            .unwrap_or_else(|| "unknown line".to_string());

        match err.into_kind() {
            csv::ErrorKind::Deserialize { err, .. } => {
                RepositoryError::Decode(format!("{line}: {err}"))
            }

            csv::ErrorKind::UnequalLengths {
                expected_len, len, ..
            } => RepositoryError::Decode(format!(
                "{line}: expected {expected_len} fields, found {len}"
            )),

            csv::ErrorKind::Utf8 { err, .. } => RepositoryError::Decode(format!("{line}: {err}")),

            csv::ErrorKind::Io(e) => RepositoryError::Unexpected(format!("I/O error: {e}")),

            other => RepositoryError::Unexpected(format!("Unexpected csv error: {other:?}")),
        }
    }
}
