//! Клиент документного хранилища backend (`/api/store`)

pub mod api;
pub mod subscription;

pub use api::{DocumentStore, HttpDocumentStore};
pub use subscription::{subscribe, subscribe_one, Subscription};
