pub mod error;
pub mod seo;
pub mod store;
