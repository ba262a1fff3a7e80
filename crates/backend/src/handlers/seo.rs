use axum::{
    http::header,
    response::IntoResponse,
};
use contracts::shared::sitemap::render_robots;

use super::error::ApiError;
use crate::domain::store::service;
use crate::shared::config::get_config;

/// GET /sitemap.xml
pub async fn sitemap() -> Result<impl IntoResponse, ApiError> {
    let xml = service::sitemap(&get_config().site.base_url).await?;
    Ok(([(header::CONTENT_TYPE, "application/xml; charset=utf-8")], xml))
}

/// GET /robots.txt
pub async fn robots() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        render_robots(&get_config().site.base_url),
    )
}
