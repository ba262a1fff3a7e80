pub mod browser_history;
pub mod context;

pub use context::{use_navigator, use_route, Navigator};
