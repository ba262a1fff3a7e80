//! Building a `QuotationRequest` from the cart for the quotation and
//! checkout pages.

use chrono::{DateTime, Utc};
use thiserror::Error;

use super::cart::{Cart, CartItem};
use crate::domain::a001_product::aggregate::Product;
use crate::domain::a003_quotation::aggregate::{
    ProductDetail, QuotationKind, QuotationRequest, QuotationStatus,
};

/// Size label stored when no size was selected.
pub const NO_SIZE: &str = "N/A";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutMode {
    /// `/quotation`: only quotation-priced items of the cart are submitted.
    Quotation,
    /// `/checkout`: the whole cart is submitted.
    Checkout,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuotationDraftError {
    #[error("customer name is required")]
    MissingName,
    #[error("phone number is required")]
    MissingPhone,
    #[error("email address is invalid")]
    InvalidEmail,
    #[error("at least one product must be selected")]
    NoProducts,
}

/// Данные клиента из формы заявки
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CustomerDetails {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub company_name: String,
    pub notes: String,
}

impl CustomerDetails {
    pub fn validate(&self) -> Result<(), QuotationDraftError> {
        if self.name.trim().is_empty() {
            return Err(QuotationDraftError::MissingName);
        }
        if self.phone.trim().is_empty() {
            return Err(QuotationDraftError::MissingPhone);
        }
        let email = self.email.trim();
        if !email.is_empty() && !email.contains('@') {
            return Err(QuotationDraftError::InvalidEmail);
        }
        Ok(())
    }
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Cart rows shown on the page for `mode`.
pub fn display_items(cart: &Cart, mode: CheckoutMode) -> Vec<&CartItem> {
    cart.items()
        .iter()
        .filter(|i| mode == CheckoutMode::Checkout || i.product.requires_quotation())
        .collect()
}

/// Sum of priced rows; quotation-priced rows have no price yet.
pub fn priced_total(items: &[&CartItem]) -> f64 {
    items
        .iter()
        .filter(|i| !i.product.requires_quotation())
        .map(|i| i.line_total())
        .sum()
}

/// Assemble the request document.
///
/// It is an order only when nothing in it needs a quotation and it comes
/// from checkout (or from a cart with priced items only); otherwise it is an
/// inquiry. `fallback_product` is the product the quotation page was opened
/// for when the cart has nothing to submit.
pub fn build_quotation(
    cart: &Cart,
    mode: CheckoutMode,
    customer: &CustomerDetails,
    fallback_product: Option<&Product>,
    user_id: Option<&str>,
    created_at: DateTime<Utc>,
) -> Result<QuotationRequest, QuotationDraftError> {
    customer.validate()?;

    let items = display_items(cart, mode);
    let has_quotation_items = items.iter().any(|i| i.product.requires_quotation());

    let mut product_ids: Vec<String> = Vec::new();
    let mut product_names: Vec<String> = Vec::new();
    for item in &items {
        if !product_ids.contains(&item.product.id) {
            product_ids.push(item.product.id.clone());
            product_names.push(item.product.name.clone());
        }
    }
    if product_ids.is_empty() {
        if let Some(product) = fallback_product {
            product_ids.push(product.id.clone());
            product_names.push(product.name.clone());
        }
    }
    if product_ids.is_empty() {
        return Err(QuotationDraftError::NoProducts);
    }

    let is_order = mode == CheckoutMode::Checkout || (!items.is_empty() && !has_quotation_items);
    let kind = if is_order && !has_quotation_items {
        QuotationKind::Order
    } else {
        QuotationKind::Inquiry
    };

    let product_details = items
        .iter()
        .map(|i| ProductDetail {
            id: i.product.id.clone(),
            name: i.product.name.clone(),
            size: i.selected_size.clone().unwrap_or_else(|| NO_SIZE.to_string()),
            price: if i.product.requires_quotation() {
                0.0
            } else {
                i.product.price
            },
        })
        .collect();

    Ok(QuotationRequest {
        id: format!("{}-{}", kind.id_prefix(), created_at.timestamp_millis()),
        user_id: user_id.map(str::to_string),
        kind,
        customer_name: customer.name.trim().to_string(),
        phone: customer.phone.trim().to_string(),
        email: customer.email.trim().to_string(),
        company_name: non_empty(&customer.company_name),
        product_ids,
        product_names,
        product_details,
        notes: non_empty(&customer.notes),
        status: QuotationStatus::Pending,
        created_at,
        total_amount: Some(priced_total(&items)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_product::aggregate::PricingType;
    use chrono::TimeZone;

    fn priced(id: &str, price: f64) -> Product {
        Product {
            id: id.into(),
            name: format!("Priced {id}"),
            price,
            ..Default::default()
        }
    }

    fn quoted(id: &str) -> Product {
        Product {
            id: id.into(),
            name: format!("Quoted {id}"),
            price: 999.0,
            pricing_type: PricingType::Quotation,
            ..Default::default()
        }
    }

    fn customer() -> CustomerDetails {
        CustomerDetails {
            name: " Nguyễn Văn A ".into(),
            phone: "0900000000".into(),
            email: "a@example.com".into(),
            ..Default::default()
        }
    }

    fn at() -> DateTime<Utc> {
        Utc.timestamp_millis_opt(1_700_000_000_000).unwrap()
    }

    #[test]
    fn test_checkout_with_priced_items_is_order() {
        let mut cart = Cart::new();
        cart.add(&priced("p1", 100.0), Some("M"));
        cart.add(&priced("p1", 100.0), Some("M"));
        cart.add(&priced("p2", 50.0), None);

        let q = build_quotation(&cart, CheckoutMode::Checkout, &customer(), None, Some("u1"), at())
            .unwrap();
        assert_eq!(q.kind, QuotationKind::Order);
        assert_eq!(q.id, "ORD-1700000000000");
        assert_eq!(q.customer_name, "Nguyễn Văn A");
        assert_eq!(q.product_ids, vec!["p1", "p2"]);
        assert_eq!(q.product_details[1].size, NO_SIZE);
        assert_eq!(q.total_amount, Some(250.0));
        assert_eq!(q.user_id.as_deref(), Some("u1"));
        assert!(q.company_name.is_none());
    }

    #[test]
    fn test_quotation_items_make_inquiry_with_zero_price() {
        let mut cart = Cart::new();
        cart.add(&priced("p1", 100.0), None);
        cart.add(&quoted("q1"), Some("L"));

        let q = build_quotation(&cart, CheckoutMode::Checkout, &customer(), None, None, at()).unwrap();
        assert_eq!(q.kind, QuotationKind::Inquiry);
        assert!(q.id.starts_with("INQ-"));
        assert_eq!(q.total_amount, Some(100.0));
        assert_eq!(q.product_details[1].price, 0.0);
    }

    #[test]
    fn test_quotation_mode_submits_only_quoted_items() {
        let mut cart = Cart::new();
        cart.add(&priced("p1", 100.0), None);
        cart.add(&quoted("q1"), None);

        let q = build_quotation(&cart, CheckoutMode::Quotation, &customer(), None, None, at()).unwrap();
        assert_eq!(q.product_ids, vec!["q1"]);
        assert_eq!(q.kind, QuotationKind::Inquiry);
        assert_eq!(q.total_amount, Some(0.0));
    }

    #[test]
    fn test_fallback_product_for_empty_cart() {
        let cart = Cart::new();
        let product = quoted("q9");
        let q = build_quotation(&cart, CheckoutMode::Quotation, &customer(), Some(&product), None, at())
            .unwrap();
        assert_eq!(q.product_ids, vec!["q9"]);
        assert!(q.product_details.is_empty());
        assert_eq!(q.kind, QuotationKind::Inquiry);
    }

    #[test]
    fn test_validation_errors() {
        let cart = Cart::new();
        let err = build_quotation(&cart, CheckoutMode::Quotation, &customer(), None, None, at());
        assert_eq!(err, Err(QuotationDraftError::NoProducts));

        let mut c = customer();
        c.name = "  ".into();
        assert_eq!(c.validate(), Err(QuotationDraftError::MissingName));

        let mut c = customer();
        c.phone.clear();
        assert_eq!(c.validate(), Err(QuotationDraftError::MissingPhone));

        let mut c = customer();
        c.email = "not-an-email".into();
        assert_eq!(c.validate(), Err(QuotationDraftError::InvalidEmail));
    }
}
