//! Client-side routing: path classification, entity matching and the
//! `ActiveCategory` every top-level view switches on.
//!
//! ```text
//! path ──classify──▶ RouteInfo ──resolve_entities──▶ (landing page, hidden link)
//!                         │                                   │
//!                         └────────derive_active_category◀────┘
//! ```

pub mod category;
pub mod menu;
pub mod resolver;
pub mod route_info;
pub mod slug;
pub mod state;

pub use category::{derive_active_category, ActiveCategory};
pub use menu::{category_path, navigation_menu};
pub use resolver::{resolve_entities, MatchedEntity, ResolvedEntities, RouteSnapshot};
pub use route_info::{classify, normalize_path, RouteInfo};
pub use slug::{make_blog_path, make_product_path, slugify};
pub use state::{History, MemoryHistory, RouteState};
