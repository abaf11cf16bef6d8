use reqwest::StatusCode;
use thiserror::Error;

/// Page-level failure: the whole page contributes nothing.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("{url} returned {status}")]
    Status { url: String, status: StatusCode },
}

/// Container-level failure: one faculty entry is skipped, the page continues.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContainerError {
    #[error("No table found")]
    MissingTable,

    #[error("No content td found")]
    MissingContentCell,

    #[error("No content table found")]
    MissingContentTable,

    #[error("No rows found")]
    NoRows,
}
