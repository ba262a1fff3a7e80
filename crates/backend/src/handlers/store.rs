use axum::{
    extract::{Path, Query},
    http::StatusCode,
    Json,
};
use contracts::shared::store::Collection;
use contracts::shopping::shopper::is_valid_shopper_id;
use serde::Deserialize;
use serde_json::Value;

use super::error::ApiError;
use crate::domain::store::service::{self, USER_ID_FIELD};
use crate::system::auth::extractor::Admin;
use crate::system::auth::policy::{required_access, Access, Operation};

#[derive(Debug, Default, Deserialize)]
pub struct OwnerQuery {
    pub user_id: Option<String>,
}

impl OwnerQuery {
    /// Только идентификаторы, выданные витриной; короткие и подобранные
    /// значения не дают доступа к чужим заявкам
    fn owner(&self) -> Option<&str> {
        self.user_id.as_deref().filter(|u| is_valid_shopper_id(u))
    }
}

fn parse_collection(name: &str) -> Result<Collection, ApiError> {
    Collection::from_name(name).ok_or(ApiError::NotFound)
}

fn authorize(collection: Collection, op: Operation, is_admin: bool) -> Result<Access, ApiError> {
    let access = required_access(collection, op);
    if access == Access::Admin && !is_admin {
        return Err(ApiError::Forbidden);
    }
    Ok(access)
}

/// GET /api/store/:collection
pub async fn list(
    Admin(is_admin): Admin,
    Path(collection): Path<String>,
    Query(query): Query<OwnerQuery>,
) -> Result<Json<Vec<Value>>, ApiError> {
    let collection = parse_collection(&collection)?;
    let owner = match authorize(collection, Operation::Read, is_admin)? {
        Access::OwnerOnly if !is_admin => Some(query.owner().ok_or(ApiError::Forbidden)?),
        Access::OwnerOnly => query.owner(),
        _ => None,
    };
    Ok(Json(service::list(collection, owner).await?))
}

/// GET /api/store/:collection/:id
pub async fn get_by_id(
    Admin(is_admin): Admin,
    Path((collection, id)): Path<(String, String)>,
    Query(query): Query<OwnerQuery>,
) -> Result<Json<Value>, ApiError> {
    let collection = parse_collection(&collection)?;
    let access = authorize(collection, Operation::Read, is_admin)?;
    let doc = service::get(collection, &id).await?.ok_or(ApiError::NotFound)?;

    if access == Access::OwnerOnly && !is_admin {
        let owner = doc.get(USER_ID_FIELD).and_then(Value::as_str);
        if owner.is_none() || owner != query.owner() {
            return Err(ApiError::Forbidden);
        }
    }
    Ok(Json(doc))
}

/// PUT /api/store/:collection/:id
pub async fn upsert(
    Admin(is_admin): Admin,
    Path((collection, id)): Path<(String, String)>,
    Json(patch): Json<Value>,
) -> Result<Json<Value>, ApiError> {
    let collection = parse_collection(&collection)?;
    let access = authorize(collection, Operation::Write, is_admin)?;
    service::validate_document_id(collection, &id)
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;
    if !patch.is_object() {
        return Err(ApiError::BadRequest("document must be a JSON object".into()));
    }
    if access == Access::CreateOnly && !is_admin && service::exists(collection, &id).await? {
        return Err(ApiError::Forbidden);
    }
    Ok(Json(service::upsert(collection, &id, patch).await?))
}

/// DELETE /api/store/:collection/:id
pub async fn delete(
    Admin(is_admin): Admin,
    Path((collection, id)): Path<(String, String)>,
) -> Result<StatusCode, ApiError> {
    let collection = parse_collection(&collection)?;
    authorize(collection, Operation::Delete, is_admin)?;
    if service::delete(collection, &id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_collection_is_not_found() {
        assert!(matches!(parse_collection("users"), Err(ApiError::NotFound)));
        assert_eq!(
            parse_collection("landingPages").ok(),
            Some(Collection::LandingPages)
        );
    }

    #[test]
    fn test_authorize() {
        assert!(matches!(
            authorize(Collection::Products, Operation::Write, false),
            Err(ApiError::Forbidden)
        ));
        assert_eq!(
            authorize(Collection::Products, Operation::Write, true).ok(),
            Some(Access::Admin)
        );
        assert_eq!(
            authorize(Collection::Quotations, Operation::Write, false).ok(),
            Some(Access::CreateOnly)
        );
        assert_eq!(
            authorize(Collection::Blogs, Operation::Read, false).ok(),
            Some(Access::Public)
        );
    }

    #[test]
    fn test_owner_query_accepts_only_shopper_ids() {
        let owner = |id: &str| OwnerQuery {
            user_id: Some(id.to_string()),
        };
        assert_eq!(owner("").owner(), None);
        assert_eq!(owner("u1").owner(), None);
        assert_eq!(owner("guest-18c2f3a1b0000000001").owner(), None);
        assert_eq!(OwnerQuery::default().owner(), None);

        let id = "guest-0123456789abcdef0123456789abcdef";
        assert_eq!(owner(id).owner(), Some(id));
    }
}
