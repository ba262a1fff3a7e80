pub mod cart_context;
pub mod wishlist_context;

pub use cart_context::{use_cart, CartContext};
pub use wishlist_context::{use_wishlist, WishlistContext};
