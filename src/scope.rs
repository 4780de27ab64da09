//! Named query scopes
//!
//! A scope is a named, reusable query transformation applied before a find or
//! a paginate. Scopes are registered explicitly per model in a
//! [`ScopeRegistry`] keyed by a normalized method name; a route segment like
//! `by-author` resolves to the method name `scopeByAuthor`. A lookup miss is
//! a configuration fault (a route wired to a scope nobody registered), never
//! a client error.
//!
//! # Example
//!
//! ```rust
//! use rest_foundation::scope::{scope_method_name, ScopeRegistry};
//!
//! let registry: ScopeRegistry<Vec<i64>> = ScopeRegistry::new()
//!     .register("positive", |values: Vec<i64>| {
//!         values.into_iter().filter(|v| *v > 0).collect()
//!     });
//!
//! let method = scope_method_name("positive");
//! assert_eq!(method, "scopePositive");
//! assert_eq!(registry.apply(&method, vec![-1, 2, 3]), Some(vec![2, 3]));
//! assert_eq!(registry.apply("scopeMissing", vec![1]), None);
//! ```

use std::collections::HashMap;
use std::sync::Arc;

/// Normalize a route segment into a scope method name
///
/// Hyphen-separated words become PascalCase and the result is prefixed with
/// `scope`: `"by-author"` becomes `"scopeByAuthor"`.
///
/// # Example
///
/// ```rust
/// use rest_foundation::scope::scope_method_name;
///
/// assert_eq!(scope_method_name("by-author"), "scopeByAuthor");
/// assert_eq!(scope_method_name("published"), "scopePublished");
/// assert_eq!(scope_method_name("top-rated-today"), "scopeTopRatedToday");
/// ```
#[must_use]
pub fn scope_method_name(segment: &str) -> String {
    let mut name = String::with_capacity(segment.len() + 5);
    name.push_str("scope");
    for word in segment.split('-').filter(|w| !w.is_empty()) {
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            name.extend(first.to_uppercase());
            name.push_str(chars.as_str());
        }
    }
    name
}

/// Transformation applied to a model query by a scope
pub type ScopeFn<Q> = Arc<dyn Fn(Q) -> Q + Send + Sync>;

/// Explicit mapping from scope method names to query transformations
///
/// `Q` is whatever query representation the owning model accessor composes:
/// a SQL builder, an in-memory record set, anything the accessor can
/// transform and then fetch from.
///
/// Registration accepts the route-segment form and normalizes it, so the
/// registration site and the route definition can share the same spelling.
pub struct ScopeRegistry<Q> {
    scopes: HashMap<String, ScopeFn<Q>>,
}

impl<Q> ScopeRegistry<Q> {
    /// Create an empty registry
    #[must_use]
    pub fn new() -> Self {
        Self {
            scopes: HashMap::new(),
        }
    }

    /// Register a scope under the given route-segment name
    ///
    /// The name is normalized with [`scope_method_name`], so
    /// `register("by-author", ...)` stores the transform under
    /// `scopeByAuthor`.
    #[must_use]
    pub fn register<F>(mut self, name: &str, transform: F) -> Self
    where
        F: Fn(Q) -> Q + Send + Sync + 'static,
    {
        self.scopes
            .insert(scope_method_name(name), Arc::new(transform));
        self
    }

    /// Whether a scope with this method name is registered
    #[must_use]
    pub fn contains(&self, method: &str) -> bool {
        self.scopes.contains_key(method)
    }

    /// Apply the named scope to `query`
    ///
    /// Returns `None` when no such scope is registered.
    #[must_use]
    pub fn apply(&self, method: &str, query: Q) -> Option<Q> {
        self.scopes.get(method).map(|scope| scope(query))
    }

    /// Number of registered scopes
    #[must_use]
    pub fn len(&self) -> usize {
        self.scopes.len()
    }

    /// Whether the registry is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }
}

impl<Q> Default for ScopeRegistry<Q> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Q> Clone for ScopeRegistry<Q> {
    fn clone(&self) -> Self {
        Self {
            scopes: self.scopes.clone(),
        }
    }
}

impl<Q> std::fmt::Debug for ScopeRegistry<Q> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names: Vec<&str> = self.scopes.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("ScopeRegistry")
            .field("scopes", &names)
            .finish()
    }
}
