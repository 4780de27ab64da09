//! Resource error types with HTTP response conversion
//!
//! Every failure a resource operation can produce, as a structured error
//! with operation context and an HTTP status mapping. Errors are raised at
//! the point of detection and never caught inside the crate; the
//! `IntoResponse` impl is the boundary that turns them into transport
//! responses for axum consumers.
//!
//! Four kinds describe bad client input (`InvalidSyntax`, `ItemNotFound`,
//! `BigLimit`, `TooManyIds`), one is a defensive guard (`MethodNotAllowed`),
//! and `UnknownScope` is a configuration fault: a route wired to a scope the
//! model never registered. The remaining kinds surface accessor faults.
//!
//! # Example
//!
//! ```rust
//! use rest_foundation::error::{ResourceError, ResourceErrorKind};
//!
//! let error = ResourceError::item_not_found("42");
//! assert_eq!(error.kind, ResourceErrorKind::ItemNotFound);
//! assert!(error.is_client_error());
//!
//! let error = ResourceError::unknown_scope("scopeByAuthor");
//! assert!(!error.is_client_error());
//! ```

use std::fmt;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use http::Method;
use serde::{Deserialize, Serialize};

use crate::model::{AccessorError, AccessorErrorKind, AccessorOperation};

/// Operation being performed when the error occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceOperation {
    /// Showing a single resource
    Show,
    /// Listing resources
    Index,
    /// Showing a single resource under a scope
    ShowScope,
    /// Listing resources under a scope
    IndexScope,
    /// Showing multiple resources by id list
    ShowMultiple,
}

impl fmt::Display for ResourceOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Show => write!(f, "show"),
            Self::Index => write!(f, "index"),
            Self::ShowScope => write!(f, "show_scope"),
            Self::IndexScope => write!(f, "index_scope"),
            Self::ShowMultiple => write!(f, "show_multiple"),
        }
    }
}

/// Category of resource error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceErrorKind {
    /// Non-read request reached a read-only operation
    MethodNotAllowed,
    /// Malformed resource identifier
    InvalidSyntax,
    /// No such resource
    ItemNotFound,
    /// Requested page size exceeds the ceiling
    BigLimit,
    /// Requested too many ids at once
    TooManyIds,
    /// Route names a scope the model never registered
    UnknownScope,
    /// Internal fault in the accessor or its store
    InternalError,
    /// Backing store temporarily unreachable
    ServiceUnavailable,
}

impl fmt::Display for ResourceErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MethodNotAllowed => write!(f, "method_not_allowed"),
            Self::InvalidSyntax => write!(f, "invalid_syntax"),
            Self::ItemNotFound => write!(f, "item_not_found"),
            Self::BigLimit => write!(f, "big_limit"),
            Self::TooManyIds => write!(f, "too_many_ids"),
            Self::UnknownScope => write!(f, "unknown_scope"),
            Self::InternalError => write!(f, "internal_error"),
            Self::ServiceUnavailable => write!(f, "service_unavailable"),
        }
    }
}

impl ResourceErrorKind {
    /// HTTP status code for this error kind
    ///
    /// Over-limit requests are refused rather than malformed, hence 403.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::InvalidSyntax => StatusCode::BAD_REQUEST,
            Self::ItemNotFound => StatusCode::NOT_FOUND,
            Self::BigLimit | Self::TooManyIds => StatusCode::FORBIDDEN,
            Self::UnknownScope | Self::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
            Self::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    /// Error code string for this error kind
    #[must_use]
    pub fn error_code(&self) -> String {
        format!("{}", self).to_uppercase()
    }
}

/// Structured resource error with operation context
///
/// # Example
///
/// ```rust
/// use rest_foundation::error::{ResourceError, ResourceOperation};
///
/// let error = ResourceError::big_limit(5000, 1000).with_operation(ResourceOperation::Index);
/// assert_eq!(error.operation, ResourceOperation::Index);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceError {
    /// The operation being performed when the error occurred
    pub operation: ResourceOperation,
    /// The category of error
    pub kind: ResourceErrorKind,
    /// Human-readable error message
    pub message: String,
    /// The resource type involved (e.g. "artworks")
    pub resource_type: Option<String>,
    /// The id involved
    pub resource_id: Option<String>,
}

impl ResourceError {
    /// Create a new resource error
    pub fn new(
        operation: ResourceOperation,
        kind: ResourceErrorKind,
        message: impl Into<String>,
    ) -> Self {
        Self {
            operation,
            kind,
            message: message.into(),
            resource_type: None,
            resource_id: None,
        }
    }

    /// Non-read request reached a read-only operation
    pub fn method_not_allowed(method: &Method) -> Self {
        Self::new(
            ResourceOperation::Show,
            ResourceErrorKind::MethodNotAllowed,
            format!("Method {} is not allowed on a read-only resource", method),
        )
    }

    /// Identifier failed validation
    pub fn invalid_syntax(id: impl Into<String>) -> Self {
        let id = id.into();
        let mut error = Self::new(
            ResourceOperation::Show,
            ResourceErrorKind::InvalidSyntax,
            "Invalid resource identifier",
        );
        error.resource_id = Some(id);
        error
    }

    /// Lookup yielded nothing for a valid id
    pub fn item_not_found(id: impl Into<String>) -> Self {
        let id = id.into();
        let mut error = Self::new(
            ResourceOperation::Show,
            ResourceErrorKind::ItemNotFound,
            "Resource not found",
        );
        error.resource_id = Some(id);
        error
    }

    /// Requested page size exceeds the ceiling
    pub fn big_limit(limit: u32, max: u32) -> Self {
        Self::new(
            ResourceOperation::Index,
            ResourceErrorKind::BigLimit,
            format!("Requested limit {} exceeds the maximum of {}", limit, max),
        )
    }

    /// Requested id-list length exceeds the ceiling
    pub fn too_many_ids(count: usize, max: u32) -> Self {
        Self::new(
            ResourceOperation::ShowMultiple,
            ResourceErrorKind::TooManyIds,
            format!("Requested {} ids; at most {} are allowed", count, max),
        )
    }

    /// Route names a scope the model never registered
    ///
    /// This is a developer mistake, not bad input; it surfaces as a
    /// server-side fault.
    pub fn unknown_scope(method: impl Into<String>) -> Self {
        Self::new(
            ResourceOperation::IndexScope,
            ResourceErrorKind::UnknownScope,
            format!("Model has no scope named `{}`", method.into()),
        )
    }

    /// Set the operation that produced the error
    #[must_use]
    pub fn with_operation(mut self, operation: ResourceOperation) -> Self {
        self.operation = operation;
        self
    }

    /// Attach resource context
    #[must_use]
    pub fn with_resource(
        mut self,
        resource_type: impl Into<String>,
        resource_id: impl Into<String>,
    ) -> Self {
        self.resource_type = Some(resource_type.into());
        self.resource_id = Some(resource_id.into());
        self
    }

    /// Whether this error describes bad client input
    ///
    /// `UnknownScope` and the accessor-fault kinds are server-side.
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(
            self.kind,
            ResourceErrorKind::MethodNotAllowed
                | ResourceErrorKind::InvalidSyntax
                | ResourceErrorKind::ItemNotFound
                | ResourceErrorKind::BigLimit
                | ResourceErrorKind::TooManyIds
        )
    }
}

impl fmt::Display for ResourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "resource {} error during {}: {}",
            self.kind, self.operation, self.message
        )?;
        match (&self.resource_type, &self.resource_id) {
            (Some(resource_type), Some(id)) => write!(f, " [{}: {}]", resource_type, id),
            (None, Some(id)) => write!(f, " [id: {}]", id),
            _ => Ok(()),
        }
    }
}

impl std::error::Error for ResourceError {}

impl From<AccessorError> for ResourceError {
    fn from(err: AccessorError) -> Self {
        let operation = match err.operation {
            AccessorOperation::FindById | AccessorOperation::FindScoped => ResourceOperation::Show,
            AccessorOperation::FindByIds => ResourceOperation::ShowMultiple,
            AccessorOperation::Paginate | AccessorOperation::PaginateScoped => {
                ResourceOperation::Index
            }
        };
        let (kind, message) = match err.kind {
            AccessorErrorKind::ConnectionFailed | AccessorErrorKind::Timeout => (
                ResourceErrorKind::ServiceUnavailable,
                "Service temporarily unavailable".to_string(),
            ),
            AccessorErrorKind::Backend
            | AccessorErrorKind::Serialization
            | AccessorErrorKind::Other => (
                ResourceErrorKind::InternalError,
                "An internal error occurred".to_string(),
            ),
        };
        // Backend detail stays in the logs; see into_response.
        tracing::error!(
            operation = %err.operation,
            kind = %err.kind,
            retriable = err.is_retriable(),
            "accessor error: {}", err.message
        );
        Self::new(operation, kind, message)
    }
}

/// Response body for resource errors
#[derive(Debug, Serialize, Deserialize)]
struct ResourceErrorResponse {
    error: String,
    code: String,
    status: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    operation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    resource_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    resource_id: Option<String>,
}

impl IntoResponse for ResourceError {
    fn into_response(self) -> Response {
        let status = self.kind.status_code();
        let code = self.kind.error_code();

        if self.is_client_error() {
            tracing::warn!(
                operation = %self.operation,
                kind = %self.kind,
                resource_id = ?self.resource_id,
                "resource error: {}", self.message
            );
        } else {
            tracing::error!(
                operation = %self.operation,
                kind = %self.kind,
                resource_id = ?self.resource_id,
                "resource error: {}", self.message
            );
        }

        let body = ResourceErrorResponse {
            error: self.message,
            code,
            status: status.as_u16(),
            operation: Some(self.operation.to_string()),
            resource_type: self.resource_type,
            resource_id: self.resource_id,
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_display() {
        assert_eq!(format!("{}", ResourceOperation::Show), "show");
        assert_eq!(format!("{}", ResourceOperation::Index), "index");
        assert_eq!(format!("{}", ResourceOperation::ShowScope), "show_scope");
        assert_eq!(format!("{}", ResourceOperation::IndexScope), "index_scope");
        assert_eq!(
            format!("{}", ResourceOperation::ShowMultiple),
            "show_multiple"
        );
    }

    #[test]
    fn test_kind_status_codes() {
        assert_eq!(
            ResourceErrorKind::MethodNotAllowed.status_code(),
            StatusCode::METHOD_NOT_ALLOWED
        );
        assert_eq!(
            ResourceErrorKind::InvalidSyntax.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ResourceErrorKind::ItemNotFound.status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ResourceErrorKind::BigLimit.status_code(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            ResourceErrorKind::TooManyIds.status_code(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            ResourceErrorKind::UnknownScope.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ResourceErrorKind::ServiceUnavailable.status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }

    #[test]
    fn test_kind_error_codes() {
        assert_eq!(ResourceErrorKind::BigLimit.error_code(), "BIG_LIMIT");
        assert_eq!(ResourceErrorKind::TooManyIds.error_code(), "TOO_MANY_IDS");
        assert_eq!(
            ResourceErrorKind::UnknownScope.error_code(),
            "UNKNOWN_SCOPE"
        );
    }

    #[test]
    fn test_method_not_allowed_message() {
        let error = ResourceError::method_not_allowed(&Method::POST);
        assert_eq!(error.kind, ResourceErrorKind::MethodNotAllowed);
        assert!(error.message.contains("POST"));
    }

    #[test]
    fn test_invalid_syntax_carries_id() {
        let error = ResourceError::invalid_syntax("abc");
        assert_eq!(error.kind, ResourceErrorKind::InvalidSyntax);
        assert_eq!(error.resource_id, Some("abc".to_string()));
    }

    #[test]
    fn test_item_not_found_carries_id() {
        let error = ResourceError::item_not_found("42");
        assert_eq!(error.resource_id, Some("42".to_string()));
    }

    #[test]
    fn test_big_limit_message() {
        let error = ResourceError::big_limit(5000, 1000);
        assert!(error.message.contains("5000"));
        assert!(error.message.contains("1000"));
    }

    #[test]
    fn test_too_many_ids_message() {
        let error = ResourceError::too_many_ids(1001, 1000);
        assert!(error.message.contains("1001"));
    }

    #[test]
    fn test_unknown_scope_is_server_side() {
        let error = ResourceError::unknown_scope("scopeByAuthor");
        assert!(!error.is_client_error());
        assert!(error.message.contains("scopeByAuthor"));
    }

    #[test]
    fn test_client_error_kinds() {
        assert!(ResourceError::invalid_syntax("x").is_client_error());
        assert!(ResourceError::item_not_found("1").is_client_error());
        assert!(ResourceError::big_limit(2000, 1000).is_client_error());
        assert!(ResourceError::too_many_ids(1001, 1000).is_client_error());
        assert!(ResourceError::method_not_allowed(&Method::PUT).is_client_error());
    }

    #[test]
    fn test_with_operation_and_resource() {
        let error = ResourceError::item_not_found("9")
            .with_operation(ResourceOperation::ShowScope)
            .with_resource("artworks", "9");
        assert_eq!(error.operation, ResourceOperation::ShowScope);
        assert_eq!(error.resource_type, Some("artworks".to_string()));
    }

    #[test]
    fn test_display_with_id_only() {
        let display = format!("{}", ResourceError::item_not_found("42"));
        assert!(display.contains("item_not_found"));
        assert!(display.contains("[id: 42]"));
    }

    #[test]
    fn test_display_with_resource_context() {
        let error = ResourceError::item_not_found("42").with_resource("artworks", "42");
        let display = format!("{}", error);
        assert!(display.contains("[artworks: 42]"));
    }

    #[test]
    fn test_from_accessor_error_transient() {
        let err = AccessorError::timeout(AccessorOperation::Paginate, "slow query");
        let resource_err: ResourceError = err.into();
        assert_eq!(resource_err.kind, ResourceErrorKind::ServiceUnavailable);
        assert_eq!(resource_err.operation, ResourceOperation::Index);
        // Backend detail must not leak to the client.
        assert_eq!(resource_err.message, "Service temporarily unavailable");
    }

    #[test]
    fn test_from_accessor_error_backend() {
        let err = AccessorError::backend(AccessorOperation::FindById, "syntax error near SELECT");
        let resource_err: ResourceError = err.into();
        assert_eq!(resource_err.kind, ResourceErrorKind::InternalError);
        assert_eq!(resource_err.operation, ResourceOperation::Show);
        assert_eq!(resource_err.message, "An internal error occurred");
    }

    #[test]
    fn test_from_accessor_error_bulk_maps_to_show_multiple() {
        let err = AccessorError::other(AccessorOperation::FindByIds, "oops");
        let resource_err: ResourceError = err.into();
        assert_eq!(resource_err.operation, ResourceOperation::ShowMultiple);
    }
}
