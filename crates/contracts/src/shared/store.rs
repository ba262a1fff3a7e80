//! Document store vocabulary shared by the HTTP client and the server.

use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

/// Id of the singleton site configuration document.
pub const SITE_CONFIG_ID: &str = "site";

/// Коллекции документного хранилища
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Config,
    Products,
    Blogs,
    Quotations,
    LandingPages,
}

impl Collection {
    pub fn name(&self) -> &'static str {
        match self {
            Collection::Config => "config",
            Collection::Products => "products",
            Collection::Blogs => "blogs",
            Collection::Quotations => "quotations",
            Collection::LandingPages => "landingPages",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::all().into_iter().find(|c| c.name() == name)
    }

    pub fn all() -> [Collection; 5] {
        [
            Collection::Config,
            Collection::Products,
            Collection::Blogs,
            Collection::Quotations,
            Collection::LandingPages,
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The caller lacks rights for this collection; prompt for credentials.
    #[error("permission denied")]
    PermissionDenied,
    #[error("document not found")]
    NotFound,
    #[error("network error: {0}")]
    Network(String),
    #[error("failed to decode response: {0}")]
    Decode(String),
    #[error("server responded with status {0}")]
    Server(u16),
}

impl StoreError {
    /// Error for a non-success HTTP status, `None` for 2xx.
    pub fn from_status(status: u16) -> Option<Self> {
        match status {
            200..=299 => None,
            401 | 403 => Some(StoreError::PermissionDenied),
            404 => Some(StoreError::NotFound),
            other => Some(StoreError::Server(other)),
        }
    }

    pub fn is_permission_denied(&self) -> bool {
        matches!(self, StoreError::PermissionDenied)
    }
}

/// Result of decoding a collection snapshot document by document.
#[derive(Debug, Clone, PartialEq)]
pub struct Decoded<T> {
    pub items: Vec<T>,
    /// `(document id, error)` of documents that did not fit the schema.
    pub rejected: Vec<(String, String)>,
}

/// Schema-on-read: every document is decoded on its own, so one malformed
/// document never hides the rest of the collection.
pub fn decode_documents<T: DeserializeOwned>(docs: &[Value]) -> Decoded<T> {
    let mut items = Vec::with_capacity(docs.len());
    let mut rejected = Vec::new();
    for doc in docs {
        match serde_json::from_value::<T>(doc.clone()) {
            Ok(item) => items.push(item),
            Err(e) => {
                let id = doc
                    .get("id")
                    .and_then(Value::as_str)
                    .unwrap_or("<no id>")
                    .to_string();
                rejected.push((id, e.to_string()));
            }
        }
    }
    Decoded { items, rejected }
}

/// Copy the document key into the payload, as readers expect `id` inline.
pub fn with_id(mut doc: Value, id: &str) -> Value {
    if let Value::Object(map) = &mut doc {
        map.insert("id".to_string(), Value::String(id.to_string()));
    }
    doc
}

/// Shallow merge used by upserts: top-level keys of `patch` replace those of
/// `base`; `id` is never stored inside the payload.
pub fn merge_documents(base: Value, patch: Value) -> Value {
    let mut merged = match base {
        Value::Object(map) => map,
        _ => serde_json::Map::new(),
    };
    if let Value::Object(patch) = patch {
        for (key, value) in patch {
            merged.insert(key, value);
        }
    }
    merged.remove("id");
    Value::Object(merged)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_product::aggregate::Product;
    use serde_json::json;

    #[test]
    fn test_collection_names() {
        for collection in Collection::all() {
            assert_eq!(Collection::from_name(collection.name()), Some(collection));
        }
        assert_eq!(Collection::from_name("landingPages"), Some(Collection::LandingPages));
        assert_eq!(Collection::from_name("users"), None);
    }

    #[test]
    fn test_from_status() {
        assert_eq!(StoreError::from_status(200), None);
        assert_eq!(StoreError::from_status(204), None);
        assert_eq!(StoreError::from_status(401), Some(StoreError::PermissionDenied));
        assert_eq!(StoreError::from_status(403), Some(StoreError::PermissionDenied));
        assert_eq!(StoreError::from_status(404), Some(StoreError::NotFound));
        assert_eq!(StoreError::from_status(500), Some(StoreError::Server(500)));
        assert!(StoreError::PermissionDenied.is_permission_denied());
    }

    #[test]
    fn test_decode_skips_malformed_documents() {
        let docs = vec![
            json!({"id": "p1", "name": "Polo", "price": 10}),
            json!({"id": "p2", "name": "Broken", "price": "ten"}),
            json!({"id": "p3", "name": "Vest"}),
        ];
        let decoded = decode_documents::<Product>(&docs);
        let ids: Vec<_> = decoded.items.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["p1", "p3"]);
        assert_eq!(decoded.rejected.len(), 1);
        assert_eq!(decoded.rejected[0].0, "p2");
    }

    #[test]
    fn test_merge_and_with_id() {
        let base = json!({"name": "Old", "price": 1, "sizes": ["M"]});
        let patch = json!({"id": "p1", "name": "New", "brand": "TKAP"});
        let merged = merge_documents(base, patch);
        assert_eq!(merged, json!({"name": "New", "price": 1, "sizes": ["M"], "brand": "TKAP"}));

        let doc = with_id(merged, "p1");
        assert_eq!(doc["id"], "p1");
    }

    #[test]
    fn test_merge_into_missing_document() {
        let merged = merge_documents(Value::Null, json!({"title": "x"}));
        assert_eq!(merged, json!({"title": "x"}));
    }
}
