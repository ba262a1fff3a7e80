use serde::{Deserialize, Serialize};

use crate::routing::slug::{fold_accents, make_product_path};

// ============================================================================
// Enums
// ============================================================================

/// Способ ценообразования товара
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PricingType {
    #[default]
    Price,
    /// Цена не публикуется, товар оформляется через запрос коммерческого предложения
    Quotation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductStatus {
    #[default]
    Active,
    Hidden,
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Товар каталога (документ коллекции `products`)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub brand: String,
    /// "Men" / "Women"
    pub category: String,
    pub sub_category: String,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_price: Option<f64>,
    pub pricing_type: PricingType,
    pub status: ProductStatus,
    pub sizes: Vec<String>,
    pub colors: Vec<String>,
    pub image_url: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seo_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seo_description: Option<String>,
}

impl Product {
    /// Canonical storefront URL: `/product/{slug}-{id}`.
    pub fn path(&self) -> String {
        make_product_path(&self.name, &self.id)
    }

    pub fn is_visible(&self) -> bool {
        self.status == ProductStatus::Active
    }

    pub fn requires_quotation(&self) -> bool {
        self.pricing_type == PricingType::Quotation
    }

    pub fn is_discounted(&self) -> bool {
        self.original_price.is_some_and(|original| original > self.price)
    }

    /// Case-insensitive match against a top-level category ("Men", "women").
    pub fn in_category(&self, category: &str) -> bool {
        self.category.eq_ignore_ascii_case(category)
    }

    /// Accent-insensitive search over name and brand.
    pub fn matches_query(&self, folded_query: &str) -> bool {
        fold_accents(&self.name).contains(folded_query)
            || fold_accents(&self.brand).contains(folded_query)
    }

    /// Title for the browser tab: SEO title when set, product name otherwise.
    pub fn display_title(&self) -> &str {
        match self.seo_title.as_deref() {
            Some(title) if !title.trim().is_empty() => title,
            _ => &self.name,
        }
    }
}

/// Максимальное количество результатов быстрого поиска
pub const SEARCH_RESULT_LIMIT: usize = 8;

/// Quick search as used by the navbar: visible products whose name or brand
/// contains the query, ignoring case and Vietnamese diacritics.
pub fn search_products<'a>(products: &'a [Product], query: &str) -> Vec<&'a Product> {
    let query = query.trim();
    if query.is_empty() {
        return Vec::new();
    }
    let folded = fold_accents(query);
    products
        .iter()
        .filter(|p| p.is_visible() && p.matches_query(&folded))
        .take(SEARCH_RESULT_LIMIT)
        .collect()
}

/// Lookup used by the product detail view. An empty id never matches.
pub fn find_product<'a>(products: &'a [Product], id: &str) -> Option<&'a Product> {
    if id.is_empty() {
        return None;
    }
    products.iter().find(|p| p.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, name: &str, brand: &str) -> Product {
        Product {
            id: id.into(),
            name: name.into(),
            brand: brand.into(),
            category: "Men".into(),
            price: 450_000.0,
            ..Default::default()
        }
    }

    #[test]
    fn test_deserialize_partial_document() {
        let json = r#"{
            "id": "p1",
            "name": "Áo Polo Slim Fit",
            "price": 390000,
            "pricingType": "quotation",
            "imageUrl": "https://cdn.example/p1.jpg"
        }"#;
        let p: Product = serde_json::from_str(json).unwrap();
        assert_eq!(p.id, "p1");
        assert!(p.requires_quotation());
        assert!(p.is_visible());
        assert!(p.sizes.is_empty());
        assert_eq!(p.image_url, "https://cdn.example/p1.jpg");
    }

    #[test]
    fn test_path_uses_slug_and_id() {
        let p = product("p1", "Slim Fit Polo", "TKAP");
        assert_eq!(p.path(), "/product/slim-fit-polo-p1");
    }

    #[test]
    fn test_search_ignores_accents_and_case() {
        let products = vec![
            product("1", "Áo Sơ Mi Trắng", "TKAP"),
            product("2", "Quần Tây", "Đông Á"),
            product("3", "Vest", "Other"),
        ];
        let found: Vec<_> = search_products(&products, "ao so mi")
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(found, vec!["1"]);

        let found: Vec<_> = search_products(&products, "dong a")
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(found, vec!["2"]);

        assert!(search_products(&products, "   ").is_empty());
    }

    #[test]
    fn test_search_skips_hidden_and_limits_results() {
        let mut products: Vec<Product> = (0..12)
            .map(|i| product(&format!("p{i}"), "Polo", "TKAP"))
            .collect();
        products[0].status = ProductStatus::Hidden;
        let found = search_products(&products, "polo");
        assert_eq!(found.len(), SEARCH_RESULT_LIMIT);
        assert!(found.iter().all(|p| p.id != "p0"));
    }

    #[test]
    fn test_find_product_rejects_empty_id() {
        let products = vec![product("", "Broken", "X"), product("p1", "Polo", "X")];
        assert!(find_product(&products, "").is_none());
        assert_eq!(find_product(&products, "p1").map(|p| p.name.as_str()), Some("Polo"));
    }

    #[test]
    fn test_display_title_prefers_seo_title() {
        let mut p = product("p1", "Polo", "TKAP");
        assert_eq!(p.display_title(), "Polo");
        p.seo_title = Some("Polo Premium".into());
        assert_eq!(p.display_title(), "Polo Premium");
        p.seo_title = Some("  ".into());
        assert_eq!(p.display_title(), "Polo");
    }
}
