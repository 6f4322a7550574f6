//! Unified error types for the data access layer.

use std::fmt::Debug;
use thiserror::Error;

/// Unified error type for the Facets data access crates.
///
/// Query execution failures all collapse into [`FacetsError::Read`], which
/// carries the offending SQL text and the underlying driver error. Callers
/// are not expected to distinguish finer-grained database error subtypes.
#[derive(Error, Debug)]
pub enum FacetsError {
    /// A query failed to execute or its rows failed to decode.
    ///
    /// The SQL text is included verbatim so operators can locate the
    /// query definition from the log line alone.
    #[error("read failed for SQL [{sql}]: {source}")]
    Read {
        sql: String,
        #[source]
        source: sqlx::Error,
    },

    /// Failure establishing or checking a connection pool.
    #[error("connection error: {0}")]
    Connection(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A datasource name that is not present in the registry.
    #[error("unknown datasource: {0}")]
    Datasource(String),

    /// Internal error
    #[error("internal error: {0}")]
    Internal(String),

    /// Generic error wrapper
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FacetsError {
    /// Wraps a driver error together with the SQL that produced it.
    #[must_use]
    pub fn read(sql: impl Into<String>, source: sqlx::Error) -> Self {
        Self::Read {
            sql: sql.into(),
            source,
        }
    }

    /// Creates a connection error.
    #[must_use]
    pub fn connection<T: Into<String>>(message: T) -> Self {
        Self::Connection(message.into())
    }

    /// Creates a configuration error.
    #[must_use]
    pub fn configuration<T: Into<String>>(message: T) -> Self {
        Self::Configuration(message.into())
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal<T: Into<String>>(message: T) -> Self {
        Self::Internal(message.into())
    }

    /// Returns a machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Read { .. } => "READ_ERROR",
            Self::Connection(_) => "CONNECTION_ERROR",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Datasource(_) => "UNKNOWN_DATASOURCE",
            Self::Internal(_) | Self::Other(_) => "INTERNAL_ERROR",
        }
    }

    /// Checks if this error is retriable by an outer layer.
    ///
    /// Nothing in this crate retries; this only advises callers.
    #[must_use]
    pub const fn is_retriable(&self) -> bool {
        matches!(self, Self::Read { .. } | Self::Connection(_))
    }
}

/// Fallback conversion for driver errors raised outside the query routine
/// (pool acquisition, health checks). Query execution paths use
/// [`FacetsError::read`] so the SQL text is never lost.
impl From<sqlx::Error> for FacetsError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed => {
                Self::Connection(err.to_string())
            }
            _ => Self::Internal(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for FacetsError {
    fn from(err: serde_json::Error) -> Self {
        Self::Internal(format!("JSON serialization error: {}", err))
    }
}
