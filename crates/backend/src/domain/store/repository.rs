use chrono::Utc;
use contracts::shared::store::{merge_documents, with_id, Collection};
use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use serde_json::Value;

/// Документ коллекции; `data` хранит JSON без поля `id`
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "documents")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub collection: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub data: String,
    pub updated_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Payload с восстановленным `id`. Битый JSON отдаётся как пустой объект
    fn into_document(self) -> Value {
        let data = serde_json::from_str::<Value>(&self.data).unwrap_or_else(|e| {
            tracing::warn!(
                "Corrupt document {}/{}: {}",
                self.collection,
                self.id,
                e
            );
            Value::Object(Default::default())
        });
        with_id(data, &self.id)
    }
}

fn now() -> String {
    Utc::now().format("%Y-%m-%d %H:%M:%S%.3f").to_string()
}

pub async fn list(conn: &DatabaseConnection, collection: Collection) -> anyhow::Result<Vec<Value>> {
    let docs = Entity::find()
        .filter(Column::Collection.eq(collection.name()))
        .order_by_asc(Column::Id)
        .all(conn)
        .await?
        .into_iter()
        .map(Model::into_document)
        .collect();
    Ok(docs)
}

pub async fn get(
    conn: &DatabaseConnection,
    collection: Collection,
    id: &str,
) -> anyhow::Result<Option<Value>> {
    let result = Entity::find_by_id((collection.name().to_string(), id.to_string()))
        .one(conn)
        .await?;
    Ok(result.map(Model::into_document))
}

pub async fn exists(conn: &DatabaseConnection, collection: Collection, id: &str) -> anyhow::Result<bool> {
    Ok(get(conn, collection, id).await?.is_some())
}

/// Merge-upsert: ключи верхнего уровня из `patch` перезаписывают сохранённые
pub async fn upsert(
    conn: &DatabaseConnection,
    collection: Collection,
    id: &str,
    patch: Value,
) -> anyhow::Result<Value> {
    let key = (collection.name().to_string(), id.to_string());
    let existing = Entity::find_by_id(key.clone()).one(conn).await?;

    let base = existing
        .as_ref()
        .and_then(|m| serde_json::from_str::<Value>(&m.data).ok())
        .unwrap_or(Value::Null);
    let merged = merge_documents(base, patch);

    let active = ActiveModel {
        collection: Set(key.0),
        id: Set(key.1),
        data: Set(serde_json::to_string(&merged)?),
        updated_at: Set(now()),
    };
    if existing.is_some() {
        active.update(conn).await?;
    } else {
        active.insert(conn).await?;
    }

    Ok(with_id(merged, id))
}

pub async fn delete(conn: &DatabaseConnection, collection: Collection, id: &str) -> anyhow::Result<bool> {
    let result = Entity::delete_by_id((collection.name().to_string(), id.to_string()))
        .exec(conn)
        .await?;
    Ok(result.rows_affected > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::db;
    use serde_json::json;

    async fn test_conn(name: &str) -> DatabaseConnection {
        let nanos = Utc::now().timestamp_nanos_opt().unwrap_or_default();
        let path = std::env::temp_dir().join(format!("storefront-{name}-{nanos}.db"));
        db::connect(&path).await.unwrap()
    }

    #[tokio::test]
    async fn test_upsert_merges_top_level_keys() {
        let conn = test_conn("merge").await;

        upsert(
            &conn,
            Collection::Products,
            "p1",
            json!({"name": "Polo", "price": 10, "sizes": ["M", "L"]}),
        )
        .await
        .unwrap();
        let merged = upsert(
            &conn,
            Collection::Products,
            "p1",
            json!({"id": "ignored", "price": 12}),
        )
        .await
        .unwrap();

        assert_eq!(
            merged,
            json!({"id": "p1", "name": "Polo", "price": 12, "sizes": ["M", "L"]})
        );
        let stored = get(&conn, Collection::Products, "p1").await.unwrap();
        assert_eq!(stored, Some(merged));
    }

    #[tokio::test]
    async fn test_collections_are_isolated() {
        let conn = test_conn("isolated").await;

        upsert(&conn, Collection::Blogs, "x", json!({"author": "A"})).await.unwrap();
        upsert(&conn, Collection::Products, "x", json!({"name": "B"})).await.unwrap();
        upsert(&conn, Collection::Products, "a", json!({"name": "C"})).await.unwrap();

        let products = list(&conn, Collection::Products).await.unwrap();
        let ids: Vec<_> = products.iter().map(|d| d["id"].as_str().unwrap_or_default()).collect();
        assert_eq!(ids, vec!["a", "x"]);
        assert_eq!(list(&conn, Collection::Blogs).await.unwrap().len(), 1);
        assert!(list(&conn, Collection::Quotations).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete() {
        let conn = test_conn("delete").await;

        upsert(&conn, Collection::LandingPages, "summer-sale", json!({"title": "Sale"}))
            .await
            .unwrap();
        assert!(exists(&conn, Collection::LandingPages, "summer-sale").await.unwrap());
        assert!(delete(&conn, Collection::LandingPages, "summer-sale").await.unwrap());
        assert!(!delete(&conn, Collection::LandingPages, "summer-sale").await.unwrap());
        assert_eq!(get(&conn, Collection::LandingPages, "summer-sale").await.unwrap(), None);
    }
}
