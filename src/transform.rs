//! Response transformers
//!
//! A transformer shapes domain records into wire payloads. One transformer
//! instance is constructed per request, carrying the request's optional
//! fields selector, so implementations are free to hold per-request state.
//!
//! The core never interprets the `fields` parameter; it hands the raw
//! selector to the transformer. [`FieldSelector`] offers the conventional
//! comma-split reading for implementations that want it.

use serde::Serialize;

/// Uninterpreted sparse-fieldset selector
///
/// Wraps the raw `fields` query parameter. The split/lookup helpers exist
/// for transformer implementations; nothing in the core calls them.
///
/// # Example
///
/// ```rust
/// use rest_foundation::transform::FieldSelector;
///
/// let fields = FieldSelector::new("id, title,artist_id");
/// assert!(fields.contains("title"));
/// assert!(!fields.contains("medium"));
/// assert_eq!(fields.names().collect::<Vec<_>>(), vec!["id", "title", "artist_id"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldSelector {
    raw: String,
}

impl FieldSelector {
    /// Wrap a raw selector string
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    /// Build a selector from an optional query parameter
    ///
    /// Absent or empty parameters yield `None`.
    #[must_use]
    pub fn from_query(fields: Option<&str>) -> Option<Self> {
        fields.filter(|s| !s.is_empty()).map(Self::new)
    }

    /// The raw selector string as received
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The selected field names: comma-split, trimmed, empties dropped
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.raw
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }

    /// Whether `field` appears in the selector
    #[must_use]
    pub fn contains(&self, field: &str) -> bool {
        self.names().any(|name| name == field)
    }
}

/// Shape records into response payloads
///
/// Constructed once per request with the request's fields selector. The
/// output type must serialize; the envelopes in [`crate::response`] wrap it.
///
/// # Example
///
/// ```rust,ignore
/// use rest_foundation::transform::{FieldSelector, ResponseTransformer};
///
/// struct ArtworkTransformer {
///     fields: Option<FieldSelector>,
/// }
///
/// impl ResponseTransformer<Artwork> for ArtworkTransformer {
///     type Output = ArtworkPayload;
///
///     fn with_fields(fields: Option<FieldSelector>) -> Self {
///         Self { fields }
///     }
///
///     fn transform(&self, artwork: &Artwork) -> ArtworkPayload {
///         ArtworkPayload {
///             id: artwork.id,
///             title: self
///                 .fields
///                 .as_ref()
///                 .map_or(true, |f| f.contains("title"))
///                 .then(|| artwork.title.clone()),
///         }
///     }
/// }
/// ```
pub trait ResponseTransformer<Record>: Send + Sync {
    /// Serialized payload for one record
    type Output: Serialize + Send;

    /// Construct a transformer for one request
    fn with_fields(fields: Option<FieldSelector>) -> Self
    where
        Self: Sized;

    /// Shape a single record
    fn transform(&self, record: &Record) -> Self::Output;

    /// Shape a collection of records
    fn transform_all(&self, records: &[Record]) -> Vec<Self::Output> {
        records.iter().map(|record| self.transform(record)).collect()
    }
}
