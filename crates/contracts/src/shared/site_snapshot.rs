//! Read-model of the five site collections.

use crate::domain::a001_product::aggregate::Product;
use crate::domain::a002_blog::aggregate::Blog;
use crate::domain::a003_quotation::aggregate::QuotationRequest;
use crate::domain::a004_landing_page::aggregate::LandingPage;
use crate::domain::a005_site_config::aggregate::SiteConfig;

/// One subscription delivery. Each replaces its slice wholesale.
#[derive(Debug, Clone, PartialEq)]
pub enum SiteUpdate {
    /// `None` when the config document does not exist (yet).
    Config(Option<SiteConfig>),
    Products(Vec<Product>),
    Blogs(Vec<Blog>),
    Quotations(Vec<QuotationRequest>),
    LandingPages(Vec<LandingPage>),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SiteSnapshot {
    pub config: SiteConfig,
    pub products: Vec<Product>,
    pub blogs: Vec<Blog>,
    pub quotations: Vec<QuotationRequest>,
    pub landing_pages: Vec<LandingPage>,
    /// Set by the first delivered config document; views wait for it so they
    /// never render with the default configuration.
    pub is_config_loaded: bool,
}

impl SiteSnapshot {
    pub fn apply(&mut self, update: SiteUpdate) {
        match update {
            SiteUpdate::Config(Some(config)) => {
                self.config = config;
                self.is_config_loaded = true;
            }
            SiteUpdate::Config(None) => {}
            SiteUpdate::Products(products) => self.products = products,
            SiteUpdate::Blogs(blogs) => self.blogs = blogs,
            SiteUpdate::Quotations(quotations) => self.quotations = quotations,
            SiteUpdate::LandingPages(pages) => self.landing_pages = pages,
        }
    }

    /// Products shown in the storefront.
    pub fn visible_products(&self) -> Vec<&Product> {
        self.products.iter().filter(|p| p.is_visible()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str) -> Product {
        Product {
            id: id.into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_config_loaded_only_after_document() {
        let mut snapshot = SiteSnapshot::default();
        assert!(!snapshot.is_config_loaded);

        snapshot.apply(SiteUpdate::Config(None));
        assert!(!snapshot.is_config_loaded);

        let config = SiteConfig {
            contact_phone: "0900".into(),
            ..Default::default()
        };
        snapshot.apply(SiteUpdate::Config(Some(config)));
        assert!(snapshot.is_config_loaded);
        assert_eq!(snapshot.config.contact_phone, "0900");

        snapshot.apply(SiteUpdate::Config(None));
        assert!(snapshot.is_config_loaded);
        assert_eq!(snapshot.config.contact_phone, "0900");
    }

    #[test]
    fn test_slices_are_replaced_wholesale() {
        let mut snapshot = SiteSnapshot::default();
        snapshot.apply(SiteUpdate::Products(vec![product("a"), product("b")]));
        snapshot.apply(SiteUpdate::Products(vec![product("c")]));
        let ids: Vec<_> = snapshot.products.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["c"]);

        snapshot.apply(SiteUpdate::LandingPages(vec![LandingPage::default()]));
        assert_eq!(snapshot.landing_pages.len(), 1);
        assert_eq!(snapshot.products.len(), 1);
        assert!(!snapshot.is_config_loaded);
    }
}
