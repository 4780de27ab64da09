//! Axum routing for resource controllers
//!
//! Builders that mount a [`ResourceController`] as a set of GET routes, plus
//! the handlers behind them. Each handler assembles a [`ResourceRequest`]
//! from the extracted parts, runs the operation, and lets the envelope or
//! the error convert itself into a response.
//!
//! Scope routes are declared per scope name because a literal segment is the
//! only way to keep `/published` distinct from `/{id}` in the route table;
//! the same explicitness also means a typo in a route registration shows up
//! as an `UnknownScope` fault, never as a silent fallthrough.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use axum::Router;
//! use rest_foundation::router::{resource_routes, scoped_resource_routes};
//!
//! let app: Router = Router::new()
//!     .nest("/artworks", scoped_resource_routes(Arc::new(artworks), &["by-author"]))
//!     .nest("/authors", resource_routes(Arc::new(authors)));
//! ```

use std::sync::Arc;

use axum::{
    extract::{OriginalUri, Path, Query, State},
    http::Method,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};

use crate::controller::ResourceController;
use crate::query::ListQuery;
use crate::request::ResourceRequest;

/// Routes for a plain resource: listing at `/` and single items at `/{id}`
pub fn resource_routes<C>(controller: Arc<C>) -> Router
where
    C: ResourceController + 'static,
{
    Router::new()
        .route("/", get(index::<C>))
        .route("/{id}", get(show::<C>))
        .with_state(controller)
}

/// Routes for a resource with named scopes
///
/// On top of [`resource_routes`], each entry in `scopes` (route-segment
/// spelling, e.g. `"by-author"`) gets a listing route at `/{scope}` and a
/// single-item route at `/{scope}/{id}`. The scope must be registered on the
/// controller's model under the same name.
pub fn scoped_resource_routes<C>(controller: Arc<C>, scopes: &[&str]) -> Router
where
    C: ResourceController + 'static,
{
    let mut router = Router::new()
        .route("/", get(index::<C>))
        .route("/{id}", get(show::<C>));
    for scope in scopes {
        router = router
            .route(&format!("/{}", scope), get(index_scope::<C>))
            .route(&format!("/{}/{{id}}", scope), get(show_scope::<C>));
    }
    router.with_state(controller)
}

/// Listing routes nested under a parent resource
///
/// Mounted next to the parent's own routes, e.g. nested at `/authors` with
/// `segment = "artworks"` this serves `/authors/{id}/artworks`, forwarding
/// the parent id to the controller's pagination.
pub fn parented_resource_routes<C>(segment: &str, controller: Arc<C>) -> Router
where
    C: ResourceController + 'static,
{
    Router::new()
        .route(&format!("/{{id}}/{}", segment), get(index_parented::<C>))
        .with_state(controller)
}

async fn show<C>(
    State(controller): State<Arc<C>>,
    method: Method,
    OriginalUri(uri): OriginalUri,
    Path(id): Path<String>,
    Query(query): Query<ListQuery>,
) -> Response
where
    C: ResourceController,
{
    let request = ResourceRequest::from_parts(method, uri.path(), Some(id), query);
    match controller.show(&request).await {
        Ok(response) => response.into_response(),
        Err(error) => error.into_response(),
    }
}

async fn index<C>(
    State(controller): State<Arc<C>>,
    method: Method,
    OriginalUri(uri): OriginalUri,
    Query(query): Query<ListQuery>,
) -> Response
where
    C: ResourceController,
{
    let request = ResourceRequest::from_parts(method, uri.path(), None, query);
    match controller.index(&request).await {
        Ok(response) => response.into_response(),
        Err(error) => error.into_response(),
    }
}

async fn show_scope<C>(
    State(controller): State<Arc<C>>,
    method: Method,
    OriginalUri(uri): OriginalUri,
    Path(id): Path<String>,
    Query(query): Query<ListQuery>,
) -> Response
where
    C: ResourceController,
{
    let request = ResourceRequest::from_parts(method, uri.path(), Some(id), query);
    match controller.show_scope(&request).await {
        Ok(response) => response.into_response(),
        Err(error) => error.into_response(),
    }
}

async fn index_scope<C>(
    State(controller): State<Arc<C>>,
    method: Method,
    OriginalUri(uri): OriginalUri,
    Query(query): Query<ListQuery>,
) -> Response
where
    C: ResourceController,
{
    let request = ResourceRequest::from_parts(method, uri.path(), None, query);
    match controller.index_scope(&request).await {
        Ok(response) => response.into_response(),
        Err(error) => error.into_response(),
    }
}

async fn index_parented<C>(
    State(controller): State<Arc<C>>,
    method: Method,
    OriginalUri(uri): OriginalUri,
    Path(parent_id): Path<String>,
    Query(query): Query<ListQuery>,
) -> Response
where
    C: ResourceController,
{
    let request = ResourceRequest::from_parts(method, uri.path(), Some(parent_id), query);
    match controller.index(&request).await {
        Ok(response) => response.into_response(),
        Err(error) => error.into_response(),
    }
}
