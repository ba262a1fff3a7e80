pub mod aggregate;
pub mod banners;
