//! In-memory model accessor
//!
//! A [`ModelAccessor`] over a vector of keyed records, suitable for tests,
//! demos, and small fixed datasets. Scopes are explicit entries in a
//! [`ScopeRegistry`] over the keyed record set; there is no reflection or
//! name-based dispatch anywhere.
//!
//! # Example
//!
//! ```rust
//! use rest_foundation::memory::InMemoryModel;
//! use rest_foundation::model::ModelAccessor;
//!
//! let model = InMemoryModel::new()
//!     .with_record("1", "anchor")
//!     .with_record("2", "bolt")
//!     .with_scope("starts-with-a", |records| {
//!         records
//!             .into_iter()
//!             .filter(|(_, r): &(String, &str)| r.starts_with('a'))
//!             .collect()
//!     });
//!
//! assert!(model.has_scope("scopeStartsWithA"));
//! assert_eq!(model.len(), 2);
//! ```

use crate::model::{AccessorError, AccessorOperation, AccessorResult, ModelAccessor};
use crate::scope::ScopeRegistry;

/// Keyed record set a scope transforms
pub type Records<R> = Vec<(String, R)>;

/// Model accessor backed by an in-memory record vector
///
/// Records keep insertion order; pagination slices from the front. The
/// `parent` argument on pagination is ignored, as a flat record set has no
/// parent relation.
pub struct InMemoryModel<R> {
    records: Records<R>,
    scopes: ScopeRegistry<Records<R>>,
}

impl<R> InMemoryModel<R> {
    /// Create an empty model
    #[must_use]
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            scopes: ScopeRegistry::new(),
        }
    }

    /// Add a record under the given id
    ///
    /// A repeated id shadows nothing; lookups return the first match, so
    /// insert each id once.
    #[must_use]
    pub fn with_record(mut self, id: impl Into<String>, record: R) -> Self {
        self.records.push((id.into(), record));
        self
    }

    /// Register a scope under the given route-segment name
    ///
    /// The transform receives the full keyed record set and returns the
    /// subset (or reordering) visible under the scope.
    #[must_use]
    pub fn with_scope<F>(mut self, name: &str, transform: F) -> Self
    where
        F: Fn(Records<R>) -> Records<R> + Send + Sync + 'static,
    {
        self.scopes = self.scopes.register(name, transform);
        self
    }

    /// Number of records
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the model holds no records
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<R> Default for InMemoryModel<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> InMemoryModel<R>
where
    R: Clone,
{
    fn scoped_records(
        &self,
        method: &str,
        operation: AccessorOperation,
    ) -> AccessorResult<Records<R>> {
        self.scopes
            .apply(method, self.records.clone())
            .ok_or_else(|| {
                AccessorError::other(operation, format!("scope `{}` is not registered", method))
            })
    }
}

impl<R> ModelAccessor for InMemoryModel<R>
where
    R: Clone + Send + Sync,
{
    type Record = R;

    async fn find_by_id(&self, id: &str) -> AccessorResult<Option<R>> {
        Ok(self
            .records
            .iter()
            .find(|(record_id, _)| record_id == id)
            .map(|(_, record)| record.clone()))
    }

    async fn find_by_ids(&self, ids: &[String]) -> AccessorResult<Vec<R>> {
        Ok(self
            .records
            .iter()
            .filter(|(record_id, _)| ids.contains(record_id))
            .map(|(_, record)| record.clone())
            .collect())
    }

    async fn paginate(&self, limit: u32, _parent: Option<&str>) -> AccessorResult<Vec<R>> {
        Ok(self
            .records
            .iter()
            .take(limit as usize)
            .map(|(_, record)| record.clone())
            .collect())
    }

    fn has_scope(&self, method: &str) -> bool {
        self.scopes.contains(method)
    }

    async fn find_scoped(&self, method: &str, id: &str) -> AccessorResult<Option<R>> {
        let records = self.scoped_records(method, AccessorOperation::FindScoped)?;
        Ok(records
            .into_iter()
            .find(|(record_id, _)| record_id == id)
            .map(|(_, record)| record))
    }

    async fn paginate_scoped(
        &self,
        method: &str,
        limit: u32,
        _parent: Option<&str>,
    ) -> AccessorResult<Vec<R>> {
        let records = self.scoped_records(method, AccessorOperation::PaginateScoped)?;
        Ok(records
            .into_iter()
            .take(limit as usize)
            .map(|(_, record)| record)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> InMemoryModel<&'static str> {
        InMemoryModel::new()
            .with_record("1", "anchor")
            .with_record("2", "bolt")
            .with_record("3", "awl")
            .with_scope("starts-with-a", |records| {
                records
                    .into_iter()
                    .filter(|(_, record)| record.starts_with('a'))
                    .collect()
            })
    }

    #[tokio::test]
    async fn test_find_by_id_present() {
        assert_eq!(model().find_by_id("2").await.unwrap(), Some("bolt"));
    }

    #[tokio::test]
    async fn test_find_by_id_absent() {
        assert_eq!(model().find_by_id("9").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_find_by_ids_keeps_store_order_and_skips_missing() {
        let ids = vec!["3".to_string(), "1".to_string(), "9".to_string()];
        let found = model().find_by_ids(&ids).await.unwrap();
        assert_eq!(found, vec!["anchor", "awl"]);
    }

    #[tokio::test]
    async fn test_paginate_takes_from_front() {
        let page = model().paginate(2, None).await.unwrap();
        assert_eq!(page, vec!["anchor", "bolt"]);
    }

    #[tokio::test]
    async fn test_paginate_limit_beyond_len() {
        let page = model().paginate(50, None).await.unwrap();
        assert_eq!(page.len(), 3);
    }

    #[test]
    fn test_has_scope_uses_normalized_name() {
        let model = model();
        assert!(model.has_scope("scopeStartsWithA"));
        assert!(!model.has_scope("starts-with-a"));
        assert!(!model.has_scope("scopeMissing"));
    }

    #[tokio::test]
    async fn test_find_scoped_filters_then_finds() {
        let model = model();
        assert_eq!(
            model.find_scoped("scopeStartsWithA", "3").await.unwrap(),
            Some("awl")
        );
        // "bolt" exists but is outside the scope.
        assert_eq!(model.find_scoped("scopeStartsWithA", "2").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_paginate_scoped() {
        let page = model().paginate_scoped("scopeStartsWithA", 10, None).await.unwrap();
        assert_eq!(page, vec!["anchor", "awl"]);
    }

    #[tokio::test]
    async fn test_unregistered_scope_is_accessor_fault() {
        let err = model().find_scoped("scopeMissing", "1").await.unwrap_err();
        assert!(err.message.contains("scopeMissing"));
    }

    #[test]
    fn test_len_and_is_empty() {
        assert!(InMemoryModel::<i64>::new().is_empty());
        assert_eq!(model().len(), 3);
    }
}
