use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use std::convert::Infallible;

use super::policy::is_admin;
use crate::shared::config::get_config;

/// Extractor: является ли запрос администраторским (Bearer-токен из config.toml)
/// Usage in handlers: `async fn handler(Admin(is_admin): Admin) -> Response`
pub struct Admin(pub bool);

#[async_trait]
impl<S> FromRequestParts<S> for Admin
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let authorization = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|h| h.to_str().ok());
        Ok(Admin(is_admin(
            get_config().site.admin_token(),
            authorization,
        )))
    }
}
