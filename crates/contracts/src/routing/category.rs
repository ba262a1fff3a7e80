use serde::{Deserialize, Serialize};

use super::route_info::RouteInfo;
use crate::domain::a004_landing_page::aggregate::LandingPage;
use crate::domain::a005_site_config::aggregate::HiddenLink;

/// Top-level view selected by the current route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActiveCategory {
    HiddenLink,
    Landing,
    Admin,
    Product,
    Blog,
    Stores,
    Quotation,
    Checkout,
    History,
    Men,
    Women,
    All,
}

impl ActiveCategory {
    /// Fixed slug → category table for page routes.
    pub fn from_page_slug(slug: &str) -> Option<Self> {
        match slug {
            "men" => Some(ActiveCategory::Men),
            "women" => Some(ActiveCategory::Women),
            "journal" | "blog" => Some(ActiveCategory::Blog),
            "stores" => Some(ActiveCategory::Stores),
            "quotation" => Some(ActiveCategory::Quotation),
            "checkout" => Some(ActiveCategory::Checkout),
            "history" => Some(ActiveCategory::History),
            "admin" => Some(ActiveCategory::Admin),
            _ => None,
        }
    }

    /// Canonical path of a category that has one. Dynamic categories
    /// (landing pages, hidden links, entity pages) return `None`.
    pub fn canonical_path(&self) -> Option<&'static str> {
        match self {
            ActiveCategory::All => Some("/"),
            ActiveCategory::Men => Some("/men"),
            ActiveCategory::Women => Some("/women"),
            ActiveCategory::Blog => Some("/journal"),
            ActiveCategory::Stores => Some("/stores"),
            ActiveCategory::Quotation => Some("/quotation"),
            ActiveCategory::Checkout => Some("/checkout"),
            ActiveCategory::History => Some("/history"),
            ActiveCategory::Admin => Some("/admin"),
            ActiveCategory::HiddenLink | ActiveCategory::Landing | ActiveCategory::Product => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ActiveCategory::HiddenLink => "HiddenLink",
            ActiveCategory::Landing => "Landing",
            ActiveCategory::Admin => "Admin",
            ActiveCategory::Product => "Product",
            ActiveCategory::Blog => "Blog",
            ActiveCategory::Stores => "Stores",
            ActiveCategory::Quotation => "Quotation",
            ActiveCategory::Checkout => "Checkout",
            ActiveCategory::History => "History",
            ActiveCategory::Men => "Men",
            ActiveCategory::Women => "Women",
            ActiveCategory::All => "All",
        }
    }

    /// Product catalog category shown by this view, if it is a catalog view.
    pub fn catalog_category(&self) -> Option<&'static str> {
        match self {
            ActiveCategory::Men => Some("Men"),
            ActiveCategory::Women => Some("Women"),
            _ => None,
        }
    }
}

/// Precedence: hidden link, landing page, product route, blog route, the
/// fixed slug table, then `All`. Unknown slugs are not an error.
pub fn derive_active_category(
    route: &RouteInfo,
    landing_page: Option<&LandingPage>,
    hidden_link: Option<&HiddenLink>,
) -> ActiveCategory {
    if hidden_link.is_some() {
        return ActiveCategory::HiddenLink;
    }
    if landing_page.is_some() {
        return ActiveCategory::Landing;
    }
    match route {
        RouteInfo::Product { .. } => ActiveCategory::Product,
        RouteInfo::Blog { .. } => ActiveCategory::Blog,
        RouteInfo::Page { slug } => {
            ActiveCategory::from_page_slug(slug).unwrap_or(ActiveCategory::All)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::route_info::classify;

    fn landing(id: &str) -> LandingPage {
        LandingPage {
            id: id.into(),
            is_active: true,
            ..Default::default()
        }
    }

    fn hidden(id: &str) -> HiddenLink {
        HiddenLink {
            id: id.into(),
            is_active: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_slug_table() {
        let cases = [
            ("/men", ActiveCategory::Men),
            ("/women", ActiveCategory::Women),
            ("/journal", ActiveCategory::Blog),
            ("/blog", ActiveCategory::Blog),
            ("/stores", ActiveCategory::Stores),
            ("/quotation", ActiveCategory::Quotation),
            ("/checkout", ActiveCategory::Checkout),
            ("/history", ActiveCategory::History),
            ("/admin", ActiveCategory::Admin),
            ("/", ActiveCategory::All),
            ("/unknown-garbage", ActiveCategory::All),
        ];
        for (path, expected) in cases {
            assert_eq!(derive_active_category(&classify(path), None, None), expected, "{path}");
        }
    }

    #[test]
    fn test_entity_routes() {
        let route = classify("/product/slim-fit-polo-p1");
        assert_eq!(derive_active_category(&route, None, None), ActiveCategory::Product);
        let route = classify("/blog/");
        assert_eq!(derive_active_category(&route, None, None), ActiveCategory::Blog);
    }

    #[test]
    fn test_precedence() {
        let route = classify("/men");
        let lp = landing("men");
        let link = hidden("men");
        assert_eq!(derive_active_category(&route, Some(&lp), None), ActiveCategory::Landing);
        assert_eq!(derive_active_category(&route, None, Some(&link)), ActiveCategory::HiddenLink);
        assert_eq!(
            derive_active_category(&route, Some(&lp), Some(&link)),
            ActiveCategory::HiddenLink
        );
    }

    #[test]
    fn test_canonical_paths_classify_back() {
        let categories = [
            ActiveCategory::All,
            ActiveCategory::Men,
            ActiveCategory::Women,
            ActiveCategory::Blog,
            ActiveCategory::Stores,
            ActiveCategory::Quotation,
            ActiveCategory::Checkout,
            ActiveCategory::History,
            ActiveCategory::Admin,
        ];
        for category in categories {
            let path = category.canonical_path().unwrap();
            assert_eq!(derive_active_category(&classify(path), None, None), category);
        }
        assert_eq!(ActiveCategory::Landing.canonical_path(), None);
    }
}
