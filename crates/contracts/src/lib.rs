//! Shared types and pure logic for the storefront.
//!
//! Everything in this crate compiles for both the wasm frontend and the
//! native backend, so it carries no I/O: route classification, slug
//! construction, the site read-model, cart/wishlist state and sitemap
//! rendering all live here and are unit-tested natively.

pub mod domain;
pub mod routing;
pub mod shared;
pub mod shopping;
