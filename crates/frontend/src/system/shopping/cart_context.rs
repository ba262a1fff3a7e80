use contracts::domain::a001_product::aggregate::Product;
use contracts::shopping::Cart;
use leptos::prelude::*;

/// Корзина текущей вкладки (в памяти, не сохраняется)
#[derive(Clone, Copy)]
pub struct CartContext {
    pub cart: RwSignal<Cart>,
    /// Выезжающая панель корзины
    pub is_open: RwSignal<bool>,
}

impl CartContext {
    pub fn new() -> Self {
        Self {
            cart: RwSignal::new(Cart::new()),
            is_open: RwSignal::new(false),
        }
    }

    pub fn add(&self, product: &Product, size: Option<&str>) {
        self.cart.update(|cart| cart.add(product, size));
    }

    pub fn remove(&self, product_id: &str, size: Option<&str>) {
        self.cart.update(|cart| {
            cart.remove(product_id, size);
        });
    }

    pub fn clear(&self) {
        self.cart.update(Cart::clear);
    }

    pub fn count(&self) -> Signal<u32> {
        let cart = self.cart;
        Signal::derive(move || cart.with(Cart::count))
    }

    pub fn total(&self) -> Signal<f64> {
        let cart = self.cart;
        Signal::derive(move || cart.with(Cart::total))
    }
}

impl Default for CartContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_cart() -> CartContext {
    use_context::<CartContext>().expect("CartContext not found in component tree")
}
