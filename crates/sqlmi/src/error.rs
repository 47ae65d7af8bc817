//! Data source error types.

use sqlmi_core::{ClientError, MappingError, ParseError, ValidationError};
use std::time::Duration;
use thiserror::Error;

/// Errors that abort a read. A missing instance is not one of them.
#[derive(Debug, Error)]
pub enum ReadError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("invalid input: {0}")]
    Validation(#[from] ValidationError),

    #[error("reading SQL Managed Instance {id:?}: {source}")]
    Fetch {
        id: String,
        #[source]
        source: ClientError,
    },

    #[error("reading SQL Managed Instance {id:?}: setting `{field}`: {source}")]
    Mapping {
        id: String,
        field: &'static str,
        #[source]
        source: MappingError,
    },

    #[error("reading SQL Managed Instance {id:?}: timed out after {after:?}")]
    Timeout { id: String, after: Duration },

    #[error("reading SQL Managed Instance {id:?}: cancelled")]
    Cancelled { id: String },
}

impl ReadError {
    /// The resource id the error refers to, when it got that far.
    pub fn id(&self) -> Option<&str> {
        match self {
            ReadError::Fetch { id, .. }
            | ReadError::Mapping { id, .. }
            | ReadError::Timeout { id, .. }
            | ReadError::Cancelled { id } => Some(id),
            ReadError::Parse(_) | ReadError::Validation(_) => None,
        }
    }
}
