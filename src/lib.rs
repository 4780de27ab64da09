//! # rest-foundation
//!
//! Reusable foundation for read-only REST resource endpoints: validated
//! identifiers, bounded pagination, id-list fan-out, and named query scopes,
//! with a uniform error taxonomy and axum wiring on top.
//!
//! ## Architecture
//!
//! A resource is three collaborators, each injected explicitly:
//!
//! - [`model::ModelAccessor`] looks records up: one by id, many by id list,
//!   or a page, with scope-aware variants.
//! - [`transform::ResponseTransformer`] shapes records into wire payloads,
//!   honoring an optional sparse-fieldset selector.
//! - [`controller::ResourceController`] ties them together and owns the read
//!   path: method guard, id validation, limit enforcement, lookup, presence
//!   check, transformation. Every operation has a provided body; controllers
//!   override only the seams they need.
//!
//! Operations take an explicit [`request::ResourceRequest`] and return
//! `Result`; nothing reads framework globals and nothing is thrown. The
//! [`error::ResourceError`] taxonomy maps each failure to an HTTP status at
//! the axum boundary.
//!
//! ## Quick start
//!
//! ```rust
//! use rest_foundation::prelude::*;
//!
//! #[derive(Clone)]
//! struct Artwork {
//!     title: &'static str,
//! }
//!
//! struct ArtworkTransformer;
//!
//! impl ResponseTransformer<Artwork> for ArtworkTransformer {
//!     type Output = String;
//!
//!     fn with_fields(_fields: Option<FieldSelector>) -> Self {
//!         Self
//!     }
//!
//!     fn transform(&self, artwork: &Artwork) -> String {
//!         artwork.title.to_string()
//!     }
//! }
//!
//! struct ArtworkController {
//!     model: InMemoryModel<Artwork>,
//! }
//!
//! impl ResourceController for ArtworkController {
//!     type Model = InMemoryModel<Artwork>;
//!     type Transformer = ArtworkTransformer;
//!
//!     fn model(&self) -> &InMemoryModel<Artwork> {
//!         &self.model
//!     }
//! }
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let controller = ArtworkController {
//!     model: InMemoryModel::new().with_record("1", Artwork { title: "Nighthawks" }),
//! };
//!
//! let request = ResourceRequest::get("/artworks/1").with_route_id("1");
//! let response = controller.show(&request).await.unwrap();
//! assert_eq!(response.data, "Nighthawks");
//! # }
//! ```
//!
//! ## Limits
//!
//! Listings default to [`query::DEFAULT_LIMIT`] items and refuse requests
//! beyond [`query::LIMIT_MAX`], which also caps the id-list length. Both are
//! associated consts on [`controller::ResourceController`] and overridable
//! per controller.

pub mod controller;
pub mod error;
pub mod memory;
pub mod model;
pub mod query;
pub mod request;
pub mod response;
pub mod router;
pub mod scope;
pub mod transform;

/// Commonly used types, re-exported for convenience
pub mod prelude {
    pub use crate::controller::{OutputOf, RecordOf, ResourceController, ResourceResult};
    pub use crate::error::{ResourceError, ResourceErrorKind, ResourceOperation};
    pub use crate::memory::InMemoryModel;
    pub use crate::model::{
        AccessorError, AccessorErrorKind, AccessorOperation, AccessorResult, ModelAccessor,
    };
    pub use crate::query::{ListQuery, DEFAULT_LIMIT, LIMIT_MAX};
    pub use crate::request::ResourceRequest;
    pub use crate::response::{ItemResponse, ListResponse, ResponseMeta};
    pub use crate::router::{parented_resource_routes, resource_routes, scoped_resource_routes};
    pub use crate::scope::{scope_method_name, ScopeFn, ScopeRegistry};
    pub use crate::transform::{FieldSelector, ResponseTransformer};
}
