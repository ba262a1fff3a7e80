pub mod a001_product;
pub mod a002_blog;
pub mod a003_quotation;
pub mod a004_landing_page;
pub mod a005_site_config;
