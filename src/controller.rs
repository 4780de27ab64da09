//! Resource controller trait
//!
//! The generic read path shared by every resource type: show one, list a
//! page, or fan out over an id list, with validation and limit enforcement
//! up front and transformation at the end. Implementations name their model
//! accessor and transformer and supply the accessor; every operation comes
//! with a provided body, and the seams the original pattern leaves open for
//! specialization (`validate_id`, `find_one`, `find_many`, `paginate`, the
//! limit consts) are overridable trait items.
//!
//! # Example
//!
//! ```rust,ignore
//! use rest_foundation::prelude::*;
//!
//! struct ArtworkController {
//!     model: ArtworkModel,
//! }
//!
//! impl ResourceController for ArtworkController {
//!     type Model = ArtworkModel;
//!     type Transformer = ArtworkTransformer;
//!
//!     fn model(&self) -> &ArtworkModel {
//!         &self.model
//!     }
//!
//!     // Accept UUID-shaped ids instead of the numeric default.
//!     fn validate_id(&self, id: &str) -> bool {
//!         id.len() == 36 && id.chars().all(|c| c.is_ascii_hexdigit() || c == '-')
//!     }
//! }
//! ```

use std::future::Future;

use crate::error::{ResourceError, ResourceOperation};
use crate::model::{AccessorResult, ModelAccessor};
use crate::query;
use crate::request::ResourceRequest;
use crate::response::{ItemResponse, ListResponse};
use crate::scope::scope_method_name;
use crate::transform::{FieldSelector, ResponseTransformer};

/// Result type for resource operations
pub type ResourceResult<T> = std::result::Result<T, ResourceError>;

/// Record type produced by a controller's model accessor
pub type RecordOf<C> = <<C as ResourceController>::Model as ModelAccessor>::Record;

/// Payload type produced by a controller's transformer
pub type OutputOf<C> =
    <<C as ResourceController>::Transformer as ResponseTransformer<RecordOf<C>>>::Output;

/// Read-only REST resource controller
///
/// Every operation is a single linear pass with early-exit failure branches;
/// there is no state beyond the injected collaborators, so a controller is
/// safe to share across request-handling tasks.
pub trait ResourceController: Send + Sync + Sized {
    /// The model accessor for this resource type
    type Model: ModelAccessor;

    /// The transformer shaping this resource's records
    type Transformer: ResponseTransformer<RecordOf<Self>>;

    /// Ceiling for both page size and id-list length
    const LIMIT_MAX: u32 = query::LIMIT_MAX;

    /// Page size when the request carries no usable `limit`
    const DEFAULT_LIMIT: u32 = query::DEFAULT_LIMIT;

    /// The injected model accessor
    fn model(&self) -> &Self::Model;

    /// Validate an identifier before any query is issued
    ///
    /// Default policy: base-10 integer strictly greater than zero. Override
    /// wholesale for other id shapes; `true` must mean "usable by the model
    /// accessor" and `false` turns into `InvalidSyntax` before any lookup.
    fn validate_id(&self, id: &str) -> bool {
        id.parse::<u64>().is_ok_and(|n| n > 0)
    }

    /// Look up a single record by id
    ///
    /// Override when the lookup needs more than a plain accessor call
    /// (joins, eager loading, extra filters); the contract stays id in,
    /// record or `None` out.
    fn find_one(
        &self,
        id: &str,
    ) -> impl Future<Output = AccessorResult<Option<RecordOf<Self>>>> + Send {
        self.model().find_by_id(id)
    }

    /// Look up all records for an id list
    fn find_many(
        &self,
        ids: &[String],
    ) -> impl Future<Output = AccessorResult<Vec<RecordOf<Self>>>> + Send {
        self.model().find_by_ids(ids)
    }

    /// Fetch a page of records
    fn paginate(
        &self,
        limit: u32,
        parent: Option<&str>,
    ) -> impl Future<Output = AccessorResult<Vec<RecordOf<Self>>>> + Send {
        self.model().paginate(limit, parent)
    }

    /// Display the specified resource
    fn show(
        &self,
        request: &ResourceRequest,
    ) -> impl Future<Output = ResourceResult<ItemResponse<OutputOf<Self>>>> + Send {
        self.select(ResourceOperation::Show, request, move |id| async move {
            self.find_one(&id).await
        })
    }

    /// Display a listing of the resource
    fn index(
        &self,
        request: &ResourceRequest,
    ) -> impl Future<Output = ResourceResult<ListResponse<OutputOf<Self>>>> + Send {
        self.collect(ResourceOperation::Index, request, move |limit, parent| {
            async move { self.paginate(limit, parent.as_deref()).await }
        })
    }

    /// Display the specified resource under the scope named by the route
    ///
    /// The scope segment sits second to last on show routes
    /// (`/artworks/by-author/42`).
    fn show_scope(
        &self,
        request: &ResourceRequest,
    ) -> impl Future<Output = ResourceResult<ItemResponse<OutputOf<Self>>>> + Send {
        async move {
            let method = self.resolve_scope(request, -2)?;
            self.select(ResourceOperation::ShowScope, request, move |id| {
                let model = self.model();
                async move { model.find_scoped(&method, &id).await }
            })
            .await
        }
    }

    /// Display a listing of the resource under the scope named by the route
    ///
    /// The scope segment is the last on listing routes
    /// (`/artworks/by-author`).
    fn index_scope(
        &self,
        request: &ResourceRequest,
    ) -> impl Future<Output = ResourceResult<ListResponse<OutputOf<Self>>>> + Send {
        async move {
            let method = self.resolve_scope(request, -1)?;
            self.collect(ResourceOperation::IndexScope, request, move |limit, parent| {
                let model = self.model();
                async move { model.paginate_scoped(&method, limit, parent.as_deref()).await }
            })
            .await
        }
    }

    /// Resolve the scope method named by the path segment at `offset`
    ///
    /// A segment naming no registered scope is a configuration fault
    /// (`UnknownScope`), not a client error: the route itself is wired
    /// wrong.
    fn resolve_scope(
        &self,
        request: &ResourceRequest,
        offset: isize,
    ) -> Result<String, ResourceError> {
        let segment = request
            .segment(offset)
            .ok_or_else(|| ResourceError::unknown_scope("<missing path segment>"))?;
        let method = scope_method_name(segment);
        if !self.model().has_scope(&method) {
            return Err(ResourceError::unknown_scope(&method));
        }
        Ok(method)
    }

    /// Single-item read path shared by [`ResourceController::show`] and
    /// [`ResourceController::show_scope`]
    ///
    /// Guard, validate, look up, check presence, transform. Routing binds
    /// only GET here, so the method guard should be unreachable; it stays
    /// part of the contract.
    fn select<F, Fut>(
        &self,
        op: ResourceOperation,
        request: &ResourceRequest,
        lookup: F,
    ) -> impl Future<Output = ResourceResult<ItemResponse<OutputOf<Self>>>> + Send
    where
        F: FnOnce(String) -> Fut + Send,
        Fut: Future<Output = AccessorResult<Option<RecordOf<Self>>>> + Send,
    {
        async move {
            if !request.is_read() {
                return Err(ResourceError::method_not_allowed(request.method()).with_operation(op));
            }
            let id = request.route_id().unwrap_or("").to_string();
            if !self.validate_id(&id) {
                return Err(ResourceError::invalid_syntax(id).with_operation(op));
            }
            let Some(record) = lookup(id.clone()).await? else {
                return Err(ResourceError::item_not_found(id).with_operation(op));
            };
            let transformer =
                Self::Transformer::with_fields(FieldSelector::from_query(request.query().fields()));
            Ok(ItemResponse::new(transformer.transform(&record)))
        }
    }

    /// List read path shared by [`ResourceController::index`] and
    /// [`ResourceController::index_scope`]
    ///
    /// A present, non-empty `ids` parameter short-circuits to
    /// [`ResourceController::show_multiple`]; pagination parameters are
    /// ignored on that branch. The route id, when present, names the parent
    /// on nested listing routes.
    fn collect<F, Fut>(
        &self,
        op: ResourceOperation,
        request: &ResourceRequest,
        list: F,
    ) -> impl Future<Output = ResourceResult<ListResponse<OutputOf<Self>>>> + Send
    where
        F: FnOnce(u32, Option<String>) -> Fut + Send,
        Fut: Future<Output = AccessorResult<Vec<RecordOf<Self>>>> + Send,
    {
        async move {
            if !request.is_read() {
                return Err(ResourceError::method_not_allowed(request.method()).with_operation(op));
            }
            if let Some(ids) = request.query().requested_ids() {
                return self.show_multiple(ids, request.query().fields()).await;
            }
            let limit = request.query().limit_or(Self::DEFAULT_LIMIT);
            if limit > Self::LIMIT_MAX {
                return Err(ResourceError::big_limit(limit, Self::LIMIT_MAX).with_operation(op));
            }
            let parent = request.route_id().map(str::to_string);
            let records = list(limit, parent).await?;
            let transformer =
                Self::Transformer::with_fields(FieldSelector::from_query(request.query().fields()));
            Ok(ListResponse::new(transformer.transform_all(&records)))
        }
    }

    /// Id-list read path
    ///
    /// The count ceiling applies before any id is validated; validation then
    /// runs left to right and fails fast on the first bad entry, with no
    /// lookup performed. The result is always a collection envelope, even
    /// for a single requested id.
    fn show_multiple(
        &self,
        ids: &str,
        fields: Option<&str>,
    ) -> impl Future<Output = ResourceResult<ListResponse<OutputOf<Self>>>> + Send {
        async move {
            let ids: Vec<String> = ids.split(',').map(str::to_string).collect();
            if ids.len() > Self::LIMIT_MAX as usize {
                return Err(ResourceError::too_many_ids(ids.len(), Self::LIMIT_MAX));
            }
            for id in &ids {
                if !self.validate_id(id) {
                    return Err(ResourceError::invalid_syntax(id.clone())
                        .with_operation(ResourceOperation::ShowMultiple));
                }
            }
            let records = self.find_many(&ids).await?;
            let transformer = Self::Transformer::with_fields(FieldSelector::from_query(fields));
            Ok(ListResponse::new(transformer.transform_all(&records)))
        }
    }
}
