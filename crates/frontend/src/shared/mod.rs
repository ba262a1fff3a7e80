pub mod api_utils;
pub mod components;
pub mod document_meta;
pub mod i18n;
pub mod storage;
pub mod store;
