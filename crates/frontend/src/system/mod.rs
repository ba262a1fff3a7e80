pub mod auth;
pub mod navigation;
pub mod pages;
pub mod shopping;
pub mod site_data;
