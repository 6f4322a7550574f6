//! Result type aliases for the Facets data access layer.

use crate::FacetsError;

/// A specialized `Result` type for data access operations.
pub type FacetsResult<T> = Result<T, FacetsError>;

/// A boxed future returning a `FacetsResult`.
pub type BoxFuture<'a, T> =
    std::pin::Pin<Box<dyn std::future::Future<Output = FacetsResult<T>> + Send + 'a>>;
