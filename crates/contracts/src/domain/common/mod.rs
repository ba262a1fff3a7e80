//! Common types shared by all storefront documents

pub mod localized;

pub use localized::{Language, Localized};
