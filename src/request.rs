//! Explicit request context for resource operations
//!
//! Every operation receives a [`ResourceRequest`] rather than reaching into
//! framework globals. It carries exactly what the read path needs: the HTTP
//! method, the positional path segments, the `id` route parameter, and the
//! parsed query parameters.
//!
//! # Example
//!
//! ```rust
//! use rest_foundation::query::ListQuery;
//! use rest_foundation::request::ResourceRequest;
//!
//! let request = ResourceRequest::get("/artworks/by-author/42")
//!     .with_route_id("42")
//!     .with_query(ListQuery::new().with_fields("id,title"));
//!
//! assert!(request.is_read());
//! assert_eq!(request.segment(-2), Some("by-author"));
//! assert_eq!(request.route_id(), Some("42"));
//! ```

use http::Method;

use crate::query::ListQuery;

/// Request context threaded through every resource operation
#[derive(Debug, Clone)]
pub struct ResourceRequest {
    method: Method,
    segments: Vec<String>,
    route_id: Option<String>,
    query: ListQuery,
}

impl ResourceRequest {
    /// Build a request from its parts
    ///
    /// `path` is split into positional segments; empty segments from leading,
    /// trailing, or doubled slashes are discarded.
    #[must_use]
    pub fn from_parts(
        method: Method,
        path: &str,
        route_id: Option<String>,
        query: ListQuery,
    ) -> Self {
        let segments = path
            .split('/')
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
        Self {
            method,
            segments,
            route_id,
            query,
        }
    }

    /// Build a GET request for the given path
    ///
    /// # Example
    ///
    /// ```rust
    /// use rest_foundation::request::ResourceRequest;
    ///
    /// let request = ResourceRequest::get("/artworks");
    /// assert_eq!(request.segment(0), Some("artworks"));
    /// ```
    #[must_use]
    pub fn get(path: &str) -> Self {
        Self::from_parts(Method::GET, path, None, ListQuery::default())
    }

    /// Replace the HTTP method
    #[must_use]
    pub fn with_method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Set the `id` route parameter
    #[must_use]
    pub fn with_route_id(mut self, id: impl Into<String>) -> Self {
        self.route_id = Some(id.into());
        self
    }

    /// Replace the query parameters
    #[must_use]
    pub fn with_query(mut self, query: ListQuery) -> Self {
        self.query = query;
        self
    }

    /// The HTTP method
    #[must_use]
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Whether this is a read request
    ///
    /// The routing layer is expected to make this always true; the guard in
    /// the controller exists as part of the contract regardless.
    #[must_use]
    pub fn is_read(&self) -> bool {
        self.method == Method::GET
    }

    /// Path segment at `offset`; negative offsets count from the end
    ///
    /// # Example
    ///
    /// ```rust
    /// use rest_foundation::request::ResourceRequest;
    ///
    /// let request = ResourceRequest::get("/artworks/by-author/42");
    /// assert_eq!(request.segment(0), Some("artworks"));
    /// assert_eq!(request.segment(-1), Some("42"));
    /// assert_eq!(request.segment(-2), Some("by-author"));
    /// assert_eq!(request.segment(-4), None);
    /// ```
    #[must_use]
    pub fn segment(&self, offset: isize) -> Option<&str> {
        let len = self.segments.len() as isize;
        let index = if offset < 0 { len + offset } else { offset };
        if index < 0 {
            return None;
        }
        self.segments.get(index as usize).map(String::as_str)
    }

    /// The `id` route parameter, if the route carries one
    #[must_use]
    pub fn route_id(&self) -> Option<&str> {
        self.route_id.as_deref()
    }

    /// The parsed query parameters
    #[must_use]
    pub fn query(&self) -> &ListQuery {
        &self.query
    }
}
