//! Response envelopes for resource endpoints
//!
//! Single-item and collection wrappers around transformed payloads, with
//! optional diagnostic metadata. Both implement `IntoResponse` for direct
//! return from axum handlers.
//!
//! # Example
//!
//! ```rust
//! use rest_foundation::response::{ItemResponse, ListResponse};
//!
//! let single = ItemResponse::new("payload");
//! assert_eq!(single.data, "payload");
//!
//! let list = ListResponse::new(vec![1, 2, 3]);
//! assert_eq!(list.len(), 3);
//! ```

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Diagnostic metadata attached to a response
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ResponseMeta {
    /// The unique identifier for this request
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

impl ResponseMeta {
    /// Set the request id
    #[must_use]
    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }

    /// Whether any metadata is set
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.request_id.is_none()
    }
}

/// Single resource envelope
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ItemResponse<T> {
    /// The transformed resource
    pub data: T,
    /// Optional response metadata
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<ResponseMeta>,
}

impl<T> ItemResponse<T> {
    /// Wrap a transformed resource
    pub fn new(data: T) -> Self {
        Self { data, meta: None }
    }

    /// Attach metadata
    #[must_use]
    pub fn with_meta(mut self, meta: ResponseMeta) -> Self {
        self.meta = Some(meta);
        self
    }

    /// Map the inner payload to a new type
    ///
    /// # Example
    ///
    /// ```rust
    /// use rest_foundation::response::ItemResponse;
    ///
    /// let mapped = ItemResponse::new(42).map(|n| n.to_string());
    /// assert_eq!(mapped.data, "42");
    /// ```
    pub fn map<U, F>(self, f: F) -> ItemResponse<U>
    where
        F: FnOnce(T) -> U,
    {
        ItemResponse {
            data: f(self.data),
            meta: self.meta,
        }
    }
}

impl<T: Serialize> IntoResponse for ItemResponse<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

/// Collection envelope
///
/// The id-list read path always produces this shape, even when exactly one
/// id was requested.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ListResponse<T> {
    /// The transformed resources
    pub data: Vec<T>,
    /// Optional response metadata
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<ResponseMeta>,
}

impl<T> ListResponse<T> {
    /// Wrap a collection of transformed resources
    pub fn new(data: Vec<T>) -> Self {
        Self { data, meta: None }
    }

    /// Create an empty collection envelope
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Attach metadata
    #[must_use]
    pub fn with_meta(mut self, meta: ResponseMeta) -> Self {
        self.meta = Some(meta);
        self
    }

    /// Map each payload to a new type
    pub fn map<U, F>(self, f: F) -> ListResponse<U>
    where
        F: FnMut(T) -> U,
    {
        ListResponse {
            data: self.data.into_iter().map(f).collect(),
            meta: self.meta,
        }
    }

    /// Number of items in the envelope
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the envelope is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl<T: Serialize> IntoResponse for ListResponse<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_response_new() {
        let response = ItemResponse::new("data");
        assert_eq!(response.data, "data");
        assert!(response.meta.is_none());
    }

    #[test]
    fn test_item_response_with_meta() {
        let response =
            ItemResponse::new(1).with_meta(ResponseMeta::default().with_request_id("req_1"));
        assert_eq!(response.meta.unwrap().request_id, Some("req_1".to_string()));
    }

    #[test]
    fn test_item_response_map_preserves_meta() {
        let response = ItemResponse::new(42)
            .with_meta(ResponseMeta::default().with_request_id("req_1"))
            .map(|n| n + 1);
        assert_eq!(response.data, 43);
        assert!(response.meta.is_some());
    }

    #[test]
    fn test_list_response_new_and_len() {
        let response = ListResponse::new(vec![1, 2, 3]);
        assert_eq!(response.len(), 3);
        assert!(!response.is_empty());
    }

    #[test]
    fn test_list_response_empty() {
        let response: ListResponse<i64> = ListResponse::empty();
        assert!(response.is_empty());
    }

    #[test]
    fn test_list_response_map() {
        let response = ListResponse::new(vec![1, 2]).map(|n| n * 10);
        assert_eq!(response.data, vec![10, 20]);
    }

    #[test]
    fn test_meta_is_empty() {
        assert!(ResponseMeta::default().is_empty());
        assert!(!ResponseMeta::default().with_request_id("r").is_empty());
    }

    #[test]
    fn test_item_serialization_skips_absent_meta() {
        let json = serde_json::to_string(&ItemResponse::new(7)).unwrap();
        assert_eq!(json, r#"{"data":7}"#);
    }

    #[test]
    fn test_list_serialization_shape() {
        let json = serde_json::to_string(&ListResponse::new(vec![1, 2])).unwrap();
        assert_eq!(json, r#"{"data":[1,2]}"#);
    }
}
