pub mod cart;
pub mod quotation_draft;
pub mod shopper;
pub mod wishlist;

pub use cart::{Cart, CartItem};
pub use quotation_draft::{CheckoutMode, CustomerDetails, QuotationDraftError};
pub use wishlist::Wishlist;
