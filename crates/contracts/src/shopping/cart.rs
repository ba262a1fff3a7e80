use serde::{Deserialize, Serialize};

use crate::domain::a001_product::aggregate::Product;

/// Строка корзины: товар, выбранный размер и количество
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub product: Product,
    pub quantity: u32,
    pub selected_size: Option<String>,
}

impl CartItem {
    fn is_keyed(&self, product_id: &str, size: Option<&str>) -> bool {
        self.product.id == product_id && self.selected_size.as_deref() == size
    }

    pub fn line_total(&self) -> f64 {
        self.product.price * f64::from(self.quantity)
    }
}

/// Shopping bag. Rows are unique by `(product id, selected size)`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Add one unit. An existing row with the same key gets its quantity
    /// incremented instead of a duplicate row.
    pub fn add(&mut self, product: &Product, size: Option<&str>) {
        if let Some(item) = self.items.iter_mut().find(|i| i.is_keyed(&product.id, size)) {
            item.quantity += 1;
            return;
        }
        self.items.push(CartItem {
            product: product.clone(),
            quantity: 1,
            selected_size: size.map(str::to_string),
        });
    }

    /// Remove the row with this key. Returns whether a row was removed.
    pub fn remove(&mut self, product_id: &str, size: Option<&str>) -> bool {
        let before = self.items.len();
        self.items.retain(|i| !i.is_keyed(product_id, size));
        self.items.len() != before
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Total number of units.
    pub fn count(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    pub fn total(&self) -> f64 {
        self.items.iter().map(CartItem::line_total).sum()
    }
}
