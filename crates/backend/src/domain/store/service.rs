use super::repository;
use crate::shared::data::db::get_connection;
use contracts::domain::a001_product::aggregate::Product;
use contracts::domain::a002_blog::aggregate::Blog;
use contracts::domain::a005_site_config::aggregate::SiteConfig;
use contracts::routing::slug::sanitize_page_slug;
use contracts::shared::sitemap::{render_sitemap, sitemap_entries};
use contracts::shared::store::{decode_documents, Collection, SITE_CONFIG_ID};
use serde_json::Value;

/// Поле владельца в документах `quotations`
pub const USER_ID_FIELD: &str = "userId";

/// Ошибка проверки идентификатора документа
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DocumentIdError {
    #[error("document id must not be empty")]
    Empty,
    #[error("landing page id must be a canonical slug, e.g. '{0}'")]
    NonCanonicalSlug(String),
    #[error("{0}")]
    InvalidSlug(String),
}

/// Landing page ids double as URL slugs and must already be canonical.
pub fn validate_document_id(collection: Collection, id: &str) -> Result<(), DocumentIdError> {
    if id.trim().is_empty() {
        return Err(DocumentIdError::Empty);
    }
    if collection == Collection::LandingPages {
        let canonical = sanitize_page_slug(id).map_err(|e| DocumentIdError::InvalidSlug(e.to_string()))?;
        if canonical != id {
            return Err(DocumentIdError::NonCanonicalSlug(canonical));
        }
    }
    Ok(())
}

/// Оставить только документы пользователя `user_id`
pub fn filter_by_owner(docs: Vec<Value>, user_id: &str) -> Vec<Value> {
    docs.into_iter()
        .filter(|doc| doc.get(USER_ID_FIELD).and_then(Value::as_str) == Some(user_id))
        .collect()
}

pub async fn list(collection: Collection, owner: Option<&str>) -> anyhow::Result<Vec<Value>> {
    let docs = repository::list(get_connection(), collection).await?;
    Ok(match owner {
        Some(user_id) => filter_by_owner(docs, user_id),
        None => docs,
    })
}

pub async fn get(collection: Collection, id: &str) -> anyhow::Result<Option<Value>> {
    repository::get(get_connection(), collection, id).await
}

pub async fn exists(collection: Collection, id: &str) -> anyhow::Result<bool> {
    repository::exists(get_connection(), collection, id).await
}

pub async fn upsert(collection: Collection, id: &str, patch: Value) -> anyhow::Result<Value> {
    let doc = repository::upsert(get_connection(), collection, id, patch).await?;
    tracing::info!("Upserted {}/{}", collection.name(), id);
    Ok(doc)
}

pub async fn delete(collection: Collection, id: &str) -> anyhow::Result<bool> {
    let deleted = repository::delete(get_connection(), collection, id).await?;
    if deleted {
        tracing::info!("Deleted {}/{}", collection.name(), id);
    }
    Ok(deleted)
}

/// Создаёт `config/site` с настройками по умолчанию, если документа нет.
/// Витрина не отрисовывается, пока конфигурация не загружена.
pub async fn ensure_site_config() -> anyhow::Result<()> {
    let conn = get_connection();
    if repository::exists(conn, Collection::Config, SITE_CONFIG_ID).await? {
        return Ok(());
    }
    let defaults = serde_json::to_value(SiteConfig::default())?;
    repository::upsert(conn, Collection::Config, SITE_CONFIG_ID, defaults).await?;
    tracing::info!("Seeded default {}/{}", Collection::Config.name(), SITE_CONFIG_ID);
    Ok(())
}

/// sitemap.xml по текущим товарам и статьям
pub async fn sitemap(base_url: &str) -> anyhow::Result<String> {
    let conn = get_connection();
    let products = decode_documents::<Product>(&repository::list(conn, Collection::Products).await?);
    let blogs = decode_documents::<Blog>(&repository::list(conn, Collection::Blogs).await?);
    for (id, err) in products.rejected.iter().chain(blogs.rejected.iter()) {
        tracing::warn!("Skipping malformed document {} in sitemap: {}", id, err);
    }
    Ok(render_sitemap(
        base_url,
        &sitemap_entries(&products.items, &blogs.items),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_landing_page_ids_must_be_canonical() {
        assert_eq!(
            validate_document_id(Collection::LandingPages, "summer-sale"),
            Ok(())
        );
        assert_eq!(
            validate_document_id(Collection::LandingPages, "Summer Sale"),
            Err(DocumentIdError::NonCanonicalSlug("summer-sale".into()))
        );
        assert!(matches!(
            validate_document_id(Collection::LandingPages, "ab"),
            Err(DocumentIdError::InvalidSlug(_))
        ));
    }

    #[test]
    fn test_other_ids_are_free_form() {
        assert_eq!(validate_document_id(Collection::Products, "P-01_x"), Ok(()));
        assert_eq!(
            validate_document_id(Collection::Products, "  "),
            Err(DocumentIdError::Empty)
        );
    }

    #[test]
    fn test_filter_by_owner() {
        let docs = vec![
            json!({"id": "ORD-1", "userId": "u1"}),
            json!({"id": "ORD-2", "userId": "u2"}),
            json!({"id": "INQ-3"}),
        ];
        let mine = filter_by_owner(docs, "u1");
        assert_eq!(mine, vec![json!({"id": "ORD-1", "userId": "u1"})]);
    }
}
