// web_app/api/error.rs - Errors raised while talking to the course service

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure of a single course-listing request.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The request never produced a response (DNS, connect, body read).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("course service returned HTTP {status} for {url}")]
    Status { status: u16, url: String },

    /// The body was not a JSON array of courses.
    #[error("malformed course list: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Coarse classification of [`CatalogError`], cheap to clone into UI state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorKind {
    Transport,
    Status,
    Decode,
}

impl ErrorKind {
    /// Message suitable for the error banner.
    pub fn user_message(self) -> &'static str {
        match self {
            ErrorKind::Transport => "Не удалось связаться с сервером курсов.",
            ErrorKind::Status => "Сервер курсов вернул ошибку.",
            ErrorKind::Decode => "Сервер курсов вернул некорректный ответ.",
        }
    }
}

impl CatalogError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Transport(_) => ErrorKind::Transport,
            Self::Status { .. } => ErrorKind::Status,
            Self::Decode(_) => ErrorKind::Decode,
        }
    }

    pub fn user_message(&self) -> &'static str {
        self.kind().user_message()
    }
}

/// Snapshot of the last failed fetch, kept in the catalog state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchFailure {
    pub kind: ErrorKind,
    pub message: String,
}

impl From<&CatalogError> for FetchFailure {
    fn from(error: &CatalogError) -> Self {
        FetchFailure {
            kind: error.kind(),
            message: error.to_string(),
        }
    }
}

impl FetchFailure {
    pub fn user_message(&self) -> &'static str {
        self.kind.user_message()
    }
}
