pub mod format;
pub mod seo;
pub mod site_snapshot;
pub mod sitemap;
pub mod store;
