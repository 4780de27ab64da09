//! Model accessor trait and error types
//!
//! The model accessor is the lookup side of a resource: find one record by
//! id, find many by id list, or fetch a page. It uses RPITIT (Return
//! Position Impl Trait In Traits) for ergonomic async methods without
//! `async_trait`.
//!
//! Accessor errors describe backend faults only. "No such record" is not an
//! error at this layer; lookups return `Ok(None)` or a shorter `Vec` and the
//! controller decides what that means for the request.
//!
//! # Example
//!
//! ```rust,ignore
//! use rest_foundation::model::{AccessorError, AccessorOperation, AccessorResult, ModelAccessor};
//!
//! struct ArtworkModel {
//!     pool: PgPool,
//! }
//!
//! impl ModelAccessor for ArtworkModel {
//!     type Record = Artwork;
//!
//!     async fn find_by_id(&self, id: &str) -> AccessorResult<Option<Artwork>> {
//!         sqlx::query_as!(Artwork, "SELECT * FROM artworks WHERE id = $1", id)
//!             .fetch_optional(&self.pool)
//!             .await
//!             .map_err(|e| AccessorError::backend(AccessorOperation::FindById, e.to_string()))
//!     }
//!
//!     // ... other methods
//! }
//! ```

use std::fmt;
use std::future::Future;

use thiserror::Error;

/// Result type for accessor operations
pub type AccessorResult<T> = std::result::Result<T, AccessorError>;

/// Operation being performed when the accessor error occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessorOperation {
    /// Finding a single record by id
    FindById,
    /// Finding multiple records by id list
    FindByIds,
    /// Fetching a page of records
    Paginate,
    /// Finding a single record under a scope
    FindScoped,
    /// Fetching a page of records under a scope
    PaginateScoped,
}

impl fmt::Display for AccessorOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FindById => write!(f, "find_by_id"),
            Self::FindByIds => write!(f, "find_by_ids"),
            Self::Paginate => write!(f, "paginate"),
            Self::FindScoped => write!(f, "find_scoped"),
            Self::PaginateScoped => write!(f, "paginate_scoped"),
        }
    }
}

/// Category of accessor error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessorErrorKind {
    /// Failed to reach the backing store
    ConnectionFailed,
    /// Operation timed out
    Timeout,
    /// Underlying store reported an error
    Backend,
    /// Record could not be decoded
    Serialization,
    /// Other unclassified error
    Other,
}

impl fmt::Display for AccessorErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConnectionFailed => write!(f, "connection_failed"),
            Self::Timeout => write!(f, "timeout"),
            Self::Backend => write!(f, "backend"),
            Self::Serialization => write!(f, "serialization"),
            Self::Other => write!(f, "other"),
        }
    }
}

/// Structured accessor error with operation context
///
/// # Example
///
/// ```rust
/// use rest_foundation::model::{AccessorError, AccessorErrorKind, AccessorOperation};
///
/// let error = AccessorError::timeout(AccessorOperation::Paginate, "query exceeded 5s");
/// assert_eq!(error.kind, AccessorErrorKind::Timeout);
/// assert!(error.is_retriable());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("accessor {kind} error during {operation}: {message}")]
pub struct AccessorError {
    /// The operation being performed when the error occurred
    pub operation: AccessorOperation,
    /// The category of error
    pub kind: AccessorErrorKind,
    /// Human-readable error message
    pub message: String,
}

impl AccessorError {
    /// Create a new accessor error
    pub fn new(
        operation: AccessorOperation,
        kind: AccessorErrorKind,
        message: impl Into<String>,
    ) -> Self {
        Self {
            operation,
            kind,
            message: message.into(),
        }
    }

    /// Create a connection failure error
    pub fn connection_failed(operation: AccessorOperation, message: impl Into<String>) -> Self {
        Self::new(operation, AccessorErrorKind::ConnectionFailed, message)
    }

    /// Create a timeout error
    pub fn timeout(operation: AccessorOperation, message: impl Into<String>) -> Self {
        Self::new(operation, AccessorErrorKind::Timeout, message)
    }

    /// Create a backend error
    pub fn backend(operation: AccessorOperation, message: impl Into<String>) -> Self {
        Self::new(operation, AccessorErrorKind::Backend, message)
    }

    /// Create a serialization error
    pub fn serialization(operation: AccessorOperation, message: impl Into<String>) -> Self {
        Self::new(operation, AccessorErrorKind::Serialization, message)
    }

    /// Create an unclassified error
    pub fn other(operation: AccessorOperation, message: impl Into<String>) -> Self {
        Self::new(operation, AccessorErrorKind::Other, message)
    }

    /// Whether the error is transient and the operation may succeed on retry
    #[must_use]
    pub fn is_retriable(&self) -> bool {
        matches!(
            self.kind,
            AccessorErrorKind::ConnectionFailed | AccessorErrorKind::Timeout
        )
    }
}

/// Lookup and pagination over a record store
///
/// One implementation per resource type. The controller drives this trait
/// and never interprets record contents; it only checks presence and counts.
///
/// Scope-aware variants receive a normalized scope method name (see
/// [`crate::scope::scope_method_name`]). The controller verifies
/// [`ModelAccessor::has_scope`] before calling them, so implementations may
/// treat an unknown name as an internal fault. The default bodies ignore the
/// scope and delegate to the unscoped operations, which suits models that
/// register no scopes.
pub trait ModelAccessor: Send + Sync {
    /// The record type this accessor produces
    type Record: Send + Sync;

    /// Find a single record by id
    ///
    /// Returns `Ok(None)` when no record carries the id.
    fn find_by_id(
        &self,
        id: &str,
    ) -> impl Future<Output = AccessorResult<Option<Self::Record>>> + Send;

    /// Find all records whose ids appear in `ids`
    ///
    /// Missing ids are skipped; the result may be shorter than the request.
    fn find_by_ids(
        &self,
        ids: &[String],
    ) -> impl Future<Output = AccessorResult<Vec<Self::Record>>> + Send;

    /// Fetch a page of at most `limit` records
    ///
    /// `parent` carries the route id on nested routes such as
    /// `/authors/{id}/artworks`; top-level listings receive `None`.
    fn paginate(
        &self,
        limit: u32,
        parent: Option<&str>,
    ) -> impl Future<Output = AccessorResult<Vec<Self::Record>>> + Send;

    /// Whether a scope with this method name is registered
    fn has_scope(&self, _method: &str) -> bool {
        false
    }

    /// Find a single record by id under the named scope
    fn find_scoped(
        &self,
        _method: &str,
        id: &str,
    ) -> impl Future<Output = AccessorResult<Option<Self::Record>>> + Send {
        self.find_by_id(id)
    }

    /// Fetch a page of records under the named scope
    fn paginate_scoped(
        &self,
        _method: &str,
        limit: u32,
        parent: Option<&str>,
    ) -> impl Future<Output = AccessorResult<Vec<Self::Record>>> + Send {
        self.paginate(limit, parent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_display() {
        assert_eq!(format!("{}", AccessorOperation::FindById), "find_by_id");
        assert_eq!(format!("{}", AccessorOperation::FindByIds), "find_by_ids");
        assert_eq!(format!("{}", AccessorOperation::Paginate), "paginate");
        assert_eq!(format!("{}", AccessorOperation::FindScoped), "find_scoped");
        assert_eq!(
            format!("{}", AccessorOperation::PaginateScoped),
            "paginate_scoped"
        );
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(
            format!("{}", AccessorErrorKind::ConnectionFailed),
            "connection_failed"
        );
        assert_eq!(format!("{}", AccessorErrorKind::Timeout), "timeout");
        assert_eq!(format!("{}", AccessorErrorKind::Backend), "backend");
        assert_eq!(
            format!("{}", AccessorErrorKind::Serialization),
            "serialization"
        );
        assert_eq!(format!("{}", AccessorErrorKind::Other), "other");
    }

    #[test]
    fn test_error_display() {
        let error = AccessorError::backend(AccessorOperation::Paginate, "syntax error");
        let display = format!("{}", error);
        assert!(display.contains("backend"));
        assert!(display.contains("paginate"));
        assert!(display.contains("syntax error"));
    }

    #[test]
    fn test_retriable_kinds() {
        assert!(AccessorError::connection_failed(AccessorOperation::FindById, "down")
            .is_retriable());
        assert!(AccessorError::timeout(AccessorOperation::Paginate, "slow").is_retriable());
        assert!(!AccessorError::backend(AccessorOperation::FindById, "bad").is_retriable());
        assert!(!AccessorError::serialization(AccessorOperation::FindById, "bad").is_retriable());
        assert!(!AccessorError::other(AccessorOperation::FindById, "bad").is_retriable());
    }

    #[test]
    fn test_error_clone_and_eq() {
        let error = AccessorError::other(AccessorOperation::FindByIds, "oops");
        assert_eq!(error.clone(), error);
    }
}
