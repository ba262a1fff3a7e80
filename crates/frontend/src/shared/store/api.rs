use contracts::shared::store::{Collection, StoreError};
use gloo_net::http::{Request, RequestBuilder, Response};
use serde_json::Value;

use crate::shared::api_utils::{api_base, store_url};
use crate::system::auth::storage;

/// Document store operations. Documents are plain JSON objects carrying their
/// `id`; typed decoding happens in the caller.
#[allow(async_fn_in_trait)]
pub trait DocumentStore {
    /// `Ok(None)` when the document does not exist.
    async fn get_once(&self, collection: Collection, id: &str) -> Result<Option<Value>, StoreError>;
    async fn get_collection_once(&self, collection: Collection) -> Result<Vec<Value>, StoreError>;
    /// Merge-upsert; returns the stored document.
    async fn upsert(&self, collection: Collection, id: &str, data: &Value) -> Result<Value, StoreError>;
    async fn remove(&self, collection: Collection, id: &str) -> Result<(), StoreError>;
}

/// REST implementation over gloo-net.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HttpDocumentStore {
    /// Owner filter for `quotations` (anonymous shopper id)
    owner: Option<String>,
}

impl HttpDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_owner(owner: impl Into<String>) -> Self {
        Self {
            owner: Some(owner.into()),
        }
    }

    fn url(&self, collection: Collection, id: Option<&str>) -> String {
        self.url_on(&api_base(), collection, id)
    }

    /// Адрес запроса; владелец добавляется только к заявкам
    fn url_on(&self, base: &str, collection: Collection, id: Option<&str>) -> String {
        let url = store_url(base, collection.name(), id);
        match (&self.owner, collection) {
            (Some(owner), Collection::Quotations) => {
                format!("{}?user_id={}", url, urlencoding::encode(owner))
            }
            _ => url,
        }
    }
}

/// Bearer-токен администратора, если он сохранён
fn authorize(builder: RequestBuilder) -> RequestBuilder {
    match storage::get_admin_token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    }
}

fn network(e: gloo_net::Error) -> StoreError {
    StoreError::Network(e.to_string())
}

fn check(response: &Response) -> Result<(), StoreError> {
    match StoreError::from_status(response.status()) {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

async fn read_json<T: serde::de::DeserializeOwned>(response: Response) -> Result<T, StoreError> {
    response
        .json::<T>()
        .await
        .map_err(|e| StoreError::Decode(e.to_string()))
}

impl DocumentStore for HttpDocumentStore {
    async fn get_once(&self, collection: Collection, id: &str) -> Result<Option<Value>, StoreError> {
        let response = authorize(Request::get(&self.url(collection, Some(id))))
            .send()
            .await
            .map_err(network)?;
        match check(&response) {
            Ok(()) => read_json(response).await.map(Some),
            Err(StoreError::NotFound) => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn get_collection_once(&self, collection: Collection) -> Result<Vec<Value>, StoreError> {
        let response = authorize(Request::get(&self.url(collection, None)))
            .send()
            .await
            .map_err(network)?;
        check(&response)?;
        read_json(response).await
    }

    async fn upsert(&self, collection: Collection, id: &str, data: &Value) -> Result<Value, StoreError> {
        let response = authorize(Request::put(&self.url(collection, Some(id))))
            .json(data)
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;
        check(&response)?;
        read_json(response).await
    }

    async fn remove(&self, collection: Collection, id: &str) -> Result<(), StoreError> {
        let response = authorize(Request::delete(&self.url(collection, Some(id))))
            .send()
            .await
            .map_err(network)?;
        check(&response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "http://h:3000";
    const OWNER: &str = "guest-0123456789abcdef0123456789abcdef";

    #[test]
    fn test_owner_scopes_only_quotations() {
        let store = HttpDocumentStore::with_owner(OWNER);
        assert_eq!(
            store.url_on(BASE, Collection::Quotations, None),
            format!("{BASE}/api/store/quotations?user_id={OWNER}")
        );
        assert_eq!(
            store.url_on(BASE, Collection::Products, Some("p1")),
            format!("{BASE}/api/store/products/p1")
        );
    }

    #[test]
    fn test_document_url_for_admin() {
        // удаление и чтение одной заявки администратором идут без user_id
        let store = HttpDocumentStore::new();
        assert_eq!(
            store.url_on(BASE, Collection::Quotations, Some("Q-1")),
            format!("{BASE}/api/store/quotations/Q-1")
        );
    }
}
