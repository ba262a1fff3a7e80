pub mod nav_link;
pub mod not_found;
pub mod price;

pub use nav_link::NavLink;
pub use not_found::NotFound;
pub use price::PriceLabel;
