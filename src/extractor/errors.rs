use thiserror::Error;

use crate::fetcher::FetchError;

#[derive(Error, Debug)]
pub enum ExtractionError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("no readable content found")]
    NoContent,

    #[error("extracted content too short ({length} < {minimum} chars)")]
    TooShort { length: usize, minimum: usize },

    #[error("extraction task failed: {0}")]
    Task(String),
}

impl ExtractionError {
    pub fn cause(&self) -> &'static str {
        match self {
            Self::Fetch(err) => err.cause(),
            Self::NoContent => "parse",
            Self::TooShort { .. } => "too_short",
            Self::Task(_) => "task",
        }
    }
}
