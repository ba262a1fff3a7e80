pub mod context;

pub use context::{use_site_data, SiteData};
