use contracts::shopping::wishlist::WISHLIST_STORAGE_KEY;
use contracts::shopping::Wishlist;
use leptos::prelude::*;

use crate::shared::storage;

/// Избранное, зеркалируется в localStorage при каждом изменении
#[derive(Clone, Copy)]
pub struct WishlistContext {
    pub wishlist: RwSignal<Wishlist>,
    pub is_open: RwSignal<bool>,
}

impl WishlistContext {
    /// Восстанавливает избранное из localStorage; битые данные = пустой список
    pub fn new() -> Self {
        let wishlist = match storage::load(WISHLIST_STORAGE_KEY) {
            Some(raw) => Wishlist::from_json(&raw).unwrap_or_else(|e| {
                log::error!("Failed to parse wishlist from storage: {}", e);
                Wishlist::default()
            }),
            None => Wishlist::default(),
        };
        Self {
            wishlist: RwSignal::new(wishlist),
            is_open: RwSignal::new(false),
        }
    }

    /// Returns whether the product is in the wishlist afterwards.
    pub fn toggle(&self, product_id: &str) -> bool {
        let mut added = false;
        self.wishlist.update(|w| added = w.toggle(product_id));
        self.wishlist
            .with_untracked(|w| storage::save(WISHLIST_STORAGE_KEY, &w.to_json()));
        added
    }

    pub fn contains(&self, product_id: &str) -> bool {
        self.wishlist.with(|w| w.contains(product_id))
    }

    pub fn len(&self) -> Signal<usize> {
        let wishlist = self.wishlist;
        Signal::derive(move || wishlist.with(Wishlist::len))
    }
}

impl Default for WishlistContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_wishlist() -> WishlistContext {
    use_context::<WishlistContext>().expect("WishlistContext not found in component tree")
}
