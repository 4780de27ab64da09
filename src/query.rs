//! Query parameters for resource operations
//!
//! This module provides the query-string surface shared by every resource
//! endpoint: the `ids` fan-out parameter, the `limit` page size, and the
//! `fields` sparse-fieldset selector.
//!
//! # Example
//!
//! ```rust
//! use rest_foundation::query::{ListQuery, DEFAULT_LIMIT};
//!
//! let query = ListQuery::new().with_limit(50);
//! assert_eq!(query.limit_or(DEFAULT_LIMIT), 50);
//!
//! let query = ListQuery::new();
//! assert_eq!(query.limit_or(DEFAULT_LIMIT), 12);
//! ```

use serde::{Deserialize, Serialize};

/// Default page size when `limit` is absent or zero
pub const DEFAULT_LIMIT: u32 = 12;

/// Global ceiling applied to both the page size and the id-list length.
///
/// A maximum of this many items will be served per request before erroring.
/// Requests for more ids than this tend to hit URL length limits anyway.
pub const LIMIT_MAX: u32 = 1000;

/// Query parameters for resource endpoints
///
/// Deserializes directly from the query string via `axum::extract::Query`.
/// All three parameters are optional; absence and emptiness are treated the
/// same way throughout the crate.
///
/// # Example
///
/// ```rust
/// use rest_foundation::query::ListQuery;
///
/// let query = ListQuery::new()
///     .with_ids("1,2,3")
///     .with_fields("id,title");
///
/// assert_eq!(query.requested_ids(), Some("1,2,3"));
/// assert_eq!(query.fields(), Some("id,title"));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ListQuery {
    /// Comma-separated id list. Presence short-circuits pagination.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ids: Option<String>,

    /// Requested page size. None or zero falls back to [`DEFAULT_LIMIT`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    /// Sparse-fieldset selector, passed through to the transformer unparsed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,
}

impl ListQuery {
    /// Create an empty query
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the comma-separated id list
    ///
    /// # Example
    ///
    /// ```rust
    /// use rest_foundation::query::ListQuery;
    ///
    /// let query = ListQuery::new().with_ids("4,5");
    /// assert_eq!(query.requested_ids(), Some("4,5"));
    /// ```
    #[must_use]
    pub fn with_ids(mut self, ids: impl Into<String>) -> Self {
        self.ids = Some(ids.into());
        self
    }

    /// Set the requested page size
    #[must_use]
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Set the fields selector
    #[must_use]
    pub fn with_fields(mut self, fields: impl Into<String>) -> Self {
        self.fields = Some(fields.into());
        self
    }

    /// The id list, if present and non-empty
    ///
    /// An empty `?ids=` parameter is treated as absent, so the normal
    /// paginated path runs.
    #[must_use]
    pub fn requested_ids(&self) -> Option<&str> {
        self.ids.as_deref().filter(|s| !s.is_empty())
    }

    /// The requested page size, with `default` substituted when the
    /// parameter is absent or zero
    ///
    /// No ceiling is applied here; the controller rejects over-limit values
    /// instead of clamping them.
    ///
    /// # Example
    ///
    /// ```rust
    /// use rest_foundation::query::ListQuery;
    ///
    /// assert_eq!(ListQuery::new().limit_or(12), 12);
    /// assert_eq!(ListQuery::new().with_limit(0).limit_or(12), 12);
    /// assert_eq!(ListQuery::new().with_limit(5000).limit_or(12), 5000);
    /// ```
    #[must_use]
    pub fn limit_or(&self, default: u32) -> u32 {
        match self.limit {
            None | Some(0) => default,
            Some(limit) => limit,
        }
    }

    /// The fields selector, if present and non-empty
    #[must_use]
    pub fn fields(&self) -> Option<&str> {
        self.fields.as_deref().filter(|s| !s.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_query_default() {
        let query = ListQuery::default();
        assert!(query.ids.is_none());
        assert!(query.limit.is_none());
        assert!(query.fields.is_none());
    }

    #[test]
    fn test_requested_ids_absent() {
        assert_eq!(ListQuery::new().requested_ids(), None);
    }

    #[test]
    fn test_requested_ids_empty_is_absent() {
        let query = ListQuery::new().with_ids("");
        assert_eq!(query.requested_ids(), None);
    }

    #[test]
    fn test_requested_ids_present() {
        let query = ListQuery::new().with_ids("1,2,3");
        assert_eq!(query.requested_ids(), Some("1,2,3"));
    }

    #[test]
    fn test_limit_or_default_when_absent() {
        assert_eq!(ListQuery::new().limit_or(DEFAULT_LIMIT), DEFAULT_LIMIT);
    }

    #[test]
    fn test_limit_or_default_when_zero() {
        let query = ListQuery::new().with_limit(0);
        assert_eq!(query.limit_or(DEFAULT_LIMIT), DEFAULT_LIMIT);
    }

    #[test]
    fn test_limit_or_passes_value_through_unclamped() {
        let query = ListQuery::new().with_limit(LIMIT_MAX + 1);
        assert_eq!(query.limit_or(DEFAULT_LIMIT), LIMIT_MAX + 1);
    }

    #[test]
    fn test_fields_empty_is_absent() {
        let query = ListQuery::new().with_fields("");
        assert_eq!(query.fields(), None);
    }

    #[test]
    fn test_query_string_deserialization() {
        let query: ListQuery =
            serde_json::from_str(r#"{"ids":"1,2","limit":30,"fields":"id,title"}"#).unwrap();
        assert_eq!(query.requested_ids(), Some("1,2"));
        assert_eq!(query.limit_or(DEFAULT_LIMIT), 30);
        assert_eq!(query.fields(), Some("id,title"));
    }

    #[test]
    fn test_serde_round_trip() {
        let query = ListQuery::new().with_ids("7").with_limit(3);
        let json = serde_json::to_string(&query).unwrap();
        let back: ListQuery = serde_json::from_str(&json).unwrap();
        assert_eq!(query, back);
    }
}
