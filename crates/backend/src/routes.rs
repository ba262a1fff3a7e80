use axum::{middleware, routing::get, Router};
use tower_http::services::{ServeDir, ServeFile};

use crate::{handlers, system};

/// Каталог собранного frontend (trunk build)
pub const DIST_DIR: &str = "dist";

/// Конфигурация всех роутов приложения
pub fn configure_routes() -> Router {
    // Неизвестные пути отдают index.html: маршрутизация витрины на клиенте
    let spa = ServeDir::new(DIST_DIR).fallback(ServeFile::new(format!("{DIST_DIR}/index.html")));

    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // DOCUMENT STORE
        // ========================================
        .route(
            "/api/store/:collection",
            get(handlers::store::list),
        )
        .route(
            "/api/store/:collection/:id",
            get(handlers::store::get_by_id)
                .put(handlers::store::upsert)
                .delete(handlers::store::delete),
        )
        // ========================================
        // SEO
        // ========================================
        .route("/sitemap.xml", get(handlers::seo::sitemap))
        .route("/robots.txt", get(handlers::seo::robots))
        .fallback_service(spa)
        .layer(middleware::from_fn(
            system::middleware::request_logger::request_logger,
        ))
}
