//! Document title and meta description of the current page.

use crate::domain::a001_product::aggregate::{find_product, Product};
use crate::domain::a002_blog::aggregate::{find_blog, Blog};
use crate::domain::common::Language;
use crate::routing::{ActiveCategory, RouteInfo, RouteSnapshot};

pub const SITE_NAME: &str = "T-kap Fashion";

pub fn default_title(lang: Language) -> &'static str {
    match lang {
        Language::Vi => "T-kap Fashion | Thời Trang May Đo Cao Cấp",
        Language::En => "T-kap Fashion | Luxury Tailoring Specialist",
    }
}

pub fn default_description(lang: Language) -> &'static str {
    match lang {
        Language::Vi => "Khám phá bộ sưu tập thời trang may đo cao cấp TKAP. Tinh hoa di sản kết hợp cùng phong cách lãnh đạo hiện đại.",
        Language::En => "Discover TKAP luxury tailoring collection. Heritage excellence meets modern executive style.",
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SeoMeta {
    pub title: String,
    pub description: String,
    pub og_image: Option<String>,
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// `"{page} | T-kap Fashion"` for product, blog and dynamic pages, the
/// language default everywhere else.
pub fn page_seo(snapshot: &RouteSnapshot, products: &[Product], blogs: &[Blog], lang: Language) -> SeoMeta {
    let mut page_title: Option<String> = None;
    let mut description: Option<String> = None;
    let mut og_image: Option<String> = None;

    match (&snapshot.category, &snapshot.route) {
        (ActiveCategory::Product, RouteInfo::Product { id }) => {
            if let Some(product) = find_product(products, id) {
                page_title = Some(product.display_title().to_string());
                description = non_empty(product.seo_description.as_deref())
                    .or(non_empty(product.short_description.as_deref()))
                    .map(str::to_string);
                og_image = non_empty(Some(&product.image_url)).map(str::to_string);
            }
        }
        (ActiveCategory::Blog, RouteInfo::Blog { id }) => {
            if let Some(blog) = find_blog(blogs, id) {
                page_title = non_empty(blog.seo_title.as_deref())
                    .map(str::to_string)
                    .or_else(|| non_empty(Some(blog.title_in(lang))).map(str::to_string));
                description = non_empty(blog.seo_description.as_deref())
                    .or(non_empty(Some(blog.short_desc.get(lang))))
                    .map(str::to_string);
                og_image = non_empty(Some(&blog.image_url)).map(str::to_string);
            }
        }
        _ => page_title = snapshot.matched_title().map(str::to_string),
    }

    SeoMeta {
        title: match page_title {
            Some(title) => format!("{} | {}", title, SITE_NAME),
            None => default_title(lang).to_string(),
        },
        description: description.unwrap_or_else(|| default_description(lang).to_string()),
        og_image,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a004_landing_page::aggregate::LandingPage;
    use crate::domain::a005_site_config::aggregate::HiddenLink;

    fn products() -> Vec<Product> {
        vec![Product {
            id: "p1".into(),
            name: "Slim Fit Polo".into(),
            short_description: Some("Cotton polo".into()),
            ..Default::default()
        }]
    }

    #[test]
    fn test_product_title() {
        let snapshot = RouteSnapshot::resolve("/product/slim-fit-polo-p1", &[], &[]);
        let seo = page_seo(&snapshot, &products(), &[], Language::En);
        assert_eq!(seo.title, "Slim Fit Polo | T-kap Fashion");
        assert_eq!(seo.description, "Cotton polo");
    }

    #[test]
    fn test_missing_product_uses_default() {
        let snapshot = RouteSnapshot::resolve("/product/ghost-p404", &[], &[]);
        let seo = page_seo(&snapshot, &products(), &[], Language::Vi);
        assert_eq!(seo.title, default_title(Language::Vi));
        assert_eq!(seo.description, default_description(Language::Vi));
    }

    #[test]
    fn test_dynamic_page_title() {
        let pages = vec![LandingPage {
            id: "summer-sale".into(),
            title: "Summer Sale".into(),
            is_active: true,
            ..Default::default()
        }];
        let links = vec![HiddenLink {
            id: "vip".into(),
            title: "VIP Lookbook".into(),
            url: "https://example.com".into(),
            is_active: true,
        }];
        let snapshot = RouteSnapshot::resolve("/summer-sale", &pages, &links);
        assert_eq!(page_seo(&snapshot, &[], &[], Language::En).title, "Summer Sale | T-kap Fashion");
        let snapshot = RouteSnapshot::resolve("/vip", &pages, &links);
        assert_eq!(page_seo(&snapshot, &[], &[], Language::En).title, "VIP Lookbook | T-kap Fashion");
    }

    #[test]
    fn test_static_page_uses_default() {
        let snapshot = RouteSnapshot::resolve("/men", &[], &[]);
        assert_eq!(
            page_seo(&snapshot, &[], &[], Language::En).title,
            default_title(Language::En)
        );
    }
}
