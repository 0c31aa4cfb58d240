use crate::filter::FilterError;
use crate::session::SessionId;
use thiserror::Error;

/// Failure of a query against a session.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Unknown id, or the upload is still being parsed. Clients retry.
    #[error("session {0} not found or not ready yet")]
    NotFound(SessionId),

    #[error("ingestion failed: {0}")]
    IngestionFailed(String),

    #[error(transparent)]
    InvalidFilter(#[from] FilterError),

    #[error("internal fault: {0}")]
    InternalFault(String),
}

pub type EngineResult<T> = Result<T, EngineError>;
