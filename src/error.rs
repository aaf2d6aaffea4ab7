//! Error Types
//!
//! Two failure grades: a failed load is blocking (nothing can render), a
//! failed mutation is logged and degrades to a best-effort local state that
//! the next full refetch corrects.

use thiserror::Error;

/// Failure of a single remote store call
#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("server rejected the request with status {0}")]
    Status(u16),

    #[error("could not decode response body: {0}")]
    Decode(String),

    #[error("remote store unavailable: {0}")]
    Unavailable(String),
}

/// Top-level planner failure surfaced to the shell
#[derive(Debug, Error)]
pub enum PlannerError {
    /// Initial or refresh load failed
    #[error("failed to load planner data: {0}")]
    FetchFailure(#[from] RemoteError),
}
