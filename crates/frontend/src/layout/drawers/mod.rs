pub mod cart;
pub mod wishlist;

pub use cart::CartDrawer;
pub use wishlist::WishlistDrawer;
