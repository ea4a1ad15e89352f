//! Domain-level error types.

use thiserror::Error;

/// Repository-level errors.
///
/// The in-memory adapter is infallible, but the port contract keeps these
/// variants so a persistent adapter can surface its failures without
/// changing callers. "Not found" is never an error at this layer; lookups
/// return `Option`.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Storage connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),
}
