use super::slug::{extract_id, BLOG_PREFIX, PRODUCT_PREFIX};

/// Slug of the root path.
pub const ROOT_SLUG: &str = "all";

/// Structured form of a pathname.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RouteInfo {
    /// `/product/{slug}-{id}`
    Product { id: String },
    /// `/blog/{slug}-{id}`
    Blog { id: String },
    /// Any other path; `slug` is lowercase without the leading slash.
    Page { slug: String },
}

impl RouteInfo {
    /// Page slug, `None` for entity routes.
    pub fn slug(&self) -> Option<&str> {
        match self {
            RouteInfo::Page { slug } => Some(slug),
            _ => None,
        }
    }

    /// Entity id of a product/blog route. Empty ids are reported as `None`.
    pub fn entity_id(&self) -> Option<&str> {
        match self {
            RouteInfo::Product { id } | RouteInfo::Blog { id } if !id.is_empty() => Some(id),
            _ => None,
        }
    }

    pub fn is_root(&self) -> bool {
        self.slug() == Some(ROOT_SLUG)
    }
}

/// Ensure a leading `/`. Empty input is the root.
pub fn normalize_path(path: &str) -> String {
    let path = path.trim();
    if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    }
}

fn strip_prefix_ignore_case<'a>(path: &'a str, prefix: &str) -> Option<&'a str> {
    let head = path.get(..prefix.len())?;
    if head.eq_ignore_ascii_case(prefix) {
        path.get(prefix.len()..)
    } else {
        None
    }
}

/// Classify a pathname. Total and deterministic: every input maps to some
/// `RouteInfo`, and malformed entity paths yield an empty id.
///
/// Entity ids keep their case so they compare equal to document keys;
/// page slugs are lowercased.
pub fn classify(path: &str) -> RouteInfo {
    let path = normalize_path(path);

    if let Some(rest) = strip_prefix_ignore_case(&path, PRODUCT_PREFIX) {
        return RouteInfo::Product {
            id: extract_id(first_segment(rest)),
        };
    }
    if let Some(rest) = strip_prefix_ignore_case(&path, BLOG_PREFIX) {
        return RouteInfo::Blog {
            id: extract_id(first_segment(rest)),
        };
    }

    let slug = path
        .strip_prefix('/')
        .unwrap_or(&path)
        .trim_end_matches('/')
        .to_lowercase();
    let slug = if slug.is_empty() {
        ROOT_SLUG.to_string()
    } else {
        slug
    };
    RouteInfo::Page { slug }
}

fn first_segment(rest: &str) -> &str {
    rest.split('/').next().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::slug::{make_blog_path, make_product_path};

    fn page(slug: &str) -> RouteInfo {
        RouteInfo::Page { slug: slug.into() }
    }

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path("men"), "/men");
        assert_eq!(normalize_path("/men"), "/men");
        assert_eq!(normalize_path(""), "/");
        assert_eq!(normalize_path("  /stores "), "/stores");
    }

    #[test]
    fn test_classify_product() {
        assert_eq!(
            classify("/product/slim-fit-polo-p1"),
            RouteInfo::Product { id: "p1".into() }
        );
        assert_eq!(
            classify("/PRODUCT/Slim-Fit-Polo-AbC123"),
            RouteInfo::Product { id: "AbC123".into() }
        );
        assert_eq!(
            classify("/product/polo-p1/"),
            RouteInfo::Product { id: "p1".into() }
        );
    }

    #[test]
    fn test_classify_blog() {
        assert_eq!(
            classify("/blog/tin-tuc-b2"),
            RouteInfo::Blog { id: "b2".into() }
        );
    }

    #[test]
    fn test_classify_missing_id() {
        assert_eq!(classify("/product/"), RouteInfo::Product { id: String::new() });
        assert_eq!(classify("/blog/"), RouteInfo::Blog { id: String::new() });
        assert_eq!(classify("/product/polo-"), RouteInfo::Product { id: String::new() });
        assert_eq!(classify("/product/").entity_id(), None);
    }

    #[test]
    fn test_classify_id_only_path() {
        assert_eq!(classify("/product/p9"), RouteInfo::Product { id: "p9".into() });
    }

    #[test]
    fn test_classify_pages() {
        assert_eq!(classify("/"), page("all"));
        assert_eq!(classify(""), page("all"));
        assert_eq!(classify("/men"), page("men"));
        assert_eq!(classify("/Men/"), page("men"));
        assert_eq!(classify("/Summer-Sale"), page("summer-sale"));
        assert_eq!(classify("/product"), page("product"));
        assert_eq!(classify("/blog"), page("blog"));
        assert!(classify("/").is_root());
    }

    #[test]
    fn test_classify_is_deterministic_and_total() {
        let inputs = [
            "", "/", "//", "///x", "/product", "/product/", "/product/-", "/product/--",
            "/blog/%", "/blog/a-%zz", "/ü/ß", "/😀", "no-slash", "/product/a/b/c",
        ];
        for input in inputs {
            assert_eq!(classify(input), classify(input), "input {input:?}");
        }
        assert_eq!(classify("/blog/a-%zz"), RouteInfo::Blog { id: "%zz".into() });
    }

    #[test]
    fn test_round_trip_with_path_builders() {
        let cases = [
            ("Slim Fit Polo", "p1"),
            ("Áo sơ mi - trắng", "X7yZ"),
            ("", "p2"),
            ("!!!", "p3"),
            ("Polo", "with-hyphen"),
            ("Polo", "slash/inside"),
        ];
        for (name, id) in cases {
            assert_eq!(classify(&make_product_path(name, id)).entity_id(), Some(id));
            assert_eq!(classify(&make_blog_path(name, id)).entity_id(), Some(id));
        }
    }
}
