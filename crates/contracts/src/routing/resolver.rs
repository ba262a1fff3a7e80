use super::category::{derive_active_category, ActiveCategory};
use super::route_info::{classify, RouteInfo};
use crate::domain::a004_landing_page::aggregate::LandingPage;
use crate::domain::a005_site_config::aggregate::HiddenLink;

/// Dynamic content matched by a page slug.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ResolvedEntities<'a> {
    pub landing_page: Option<&'a LandingPage>,
    pub hidden_link: Option<&'a HiddenLink>,
}

/// Match a page route against active landing pages and active hidden links.
/// Comparison is exact after lowercasing; entity routes match nothing.
pub fn resolve_entities<'a>(
    route: &RouteInfo,
    landing_pages: &'a [LandingPage],
    hidden_links: &'a [HiddenLink],
) -> ResolvedEntities<'a> {
    let Some(slug) = route.slug() else {
        return ResolvedEntities::default();
    };

    ResolvedEntities {
        landing_page: landing_pages
            .iter()
            .filter(|lp| lp.is_active)
            .find(|lp| lp.id.to_lowercase() == slug),
        hidden_link: hidden_links
            .iter()
            .filter(|link| link.is_active)
            .find(|link| link.id.to_lowercase() == slug),
    }
}

/// The single authoritative match of a resolution. A hidden link shadows a
/// landing page with the same slug.
#[derive(Debug, Clone, PartialEq)]
pub enum MatchedEntity {
    HiddenLink(HiddenLink),
    LandingPage(LandingPage),
}

/// Everything the views need to know about the current location, computed
/// in one pass.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteSnapshot {
    pub path: String,
    pub route: RouteInfo,
    pub category: ActiveCategory,
    pub matched: Option<MatchedEntity>,
}

impl RouteSnapshot {
    pub fn resolve(path: &str, landing_pages: &[LandingPage], hidden_links: &[HiddenLink]) -> Self {
        let route = classify(path);
        let entities = resolve_entities(&route, landing_pages, hidden_links);
        let category = derive_active_category(&route, entities.landing_page, entities.hidden_link);
        let matched = match (entities.hidden_link, entities.landing_page) {
            (Some(link), _) => Some(MatchedEntity::HiddenLink(link.clone())),
            (None, Some(page)) => Some(MatchedEntity::LandingPage(page.clone())),
            (None, None) => None,
        };

        Self {
            path: path.to_string(),
            route,
            category,
            matched,
        }
    }

    pub fn hidden_link(&self) -> Option<&HiddenLink> {
        match &self.matched {
            Some(MatchedEntity::HiddenLink(link)) => Some(link),
            _ => None,
        }
    }

    pub fn landing_page(&self) -> Option<&LandingPage> {
        match &self.matched {
            Some(MatchedEntity::LandingPage(page)) => Some(page),
            _ => None,
        }
    }

    /// Title of the matched dynamic page, if any.
    pub fn matched_title(&self) -> Option<&str> {
        match &self.matched {
            Some(MatchedEntity::HiddenLink(link)) => Some(&link.title),
            Some(MatchedEntity::LandingPage(page)) => Some(&page.title),
            None => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn landing(id: &str, is_active: bool) -> LandingPage {
        LandingPage {
            id: id.into(),
            title: format!("LP {id}"),
            is_active,
            ..Default::default()
        }
    }

    fn hidden(id: &str, is_active: bool) -> HiddenLink {
        HiddenLink {
            id: id.into(),
            title: format!("HL {id}"),
            url: format!("https://embed.example/{id}"),
            is_active,
        }
    }

    #[test]
    fn test_landing_page_match() {
        let pages = vec![landing("summer-sale", true)];
        let snapshot = RouteSnapshot::resolve("/summer-sale", &pages, &[]);
        assert_eq!(snapshot.category, ActiveCategory::Landing);
        assert_eq!(snapshot.landing_page().map(|p| p.id.as_str()), Some("summer-sale"));
        assert_eq!(snapshot.matched_title(), Some("LP summer-sale"));
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let pages = vec![landing("Summer-Sale", true)];
        let entities = resolve_entities(&classify("/SUMMER-sale"), &pages, &[]);
        assert!(entities.landing_page.is_some());
    }

    #[test]
    fn test_inactive_entities_never_match() {
        let pages = vec![landing("summer-sale", false)];
        let links = vec![hidden("summer-sale", false)];
        let snapshot = RouteSnapshot::resolve("/summer-sale", &pages, &links);
        assert_eq!(snapshot.category, ActiveCategory::All);
        assert!(snapshot.matched.is_none());
    }

    #[test]
    fn test_first_active_duplicate_wins() {
        let pages = vec![
            landing("promo", false),
            LandingPage {
                title: "second".into(),
                ..landing("promo", true)
            },
            LandingPage {
                title: "third".into(),
                ..landing("promo", true)
            },
        ];
        let snapshot = RouteSnapshot::resolve("/promo", &pages, &[]);
        assert_eq!(snapshot.matched_title(), Some("second"));
    }

    #[test]
    fn test_hidden_link_wins_over_landing_page() {
        let pages = vec![landing("catalog", true)];
        let links = vec![hidden("catalog", true)];
        let entities = resolve_entities(&classify("/catalog"), &pages, &links);
        assert!(entities.landing_page.is_some());
        assert!(entities.hidden_link.is_some());

        let snapshot = RouteSnapshot::resolve("/catalog", &pages, &links);
        assert_eq!(snapshot.category, ActiveCategory::HiddenLink);
        assert!(snapshot.landing_page().is_none());
        assert_eq!(
            snapshot.hidden_link().map(|l| l.url.as_str()),
            Some("https://embed.example/catalog")
        );
    }

    #[test]
    fn test_landing_page_shadows_static_category() {
        let pages = vec![landing("men", true)];
        let snapshot = RouteSnapshot::resolve("/men", &pages, &[]);
        assert_eq!(snapshot.category, ActiveCategory::Landing);
    }

    #[test]
    fn test_entity_routes_do_not_match_dynamic_pages() {
        let pages = vec![landing("p1", true)];
        let links = vec![hidden("p1", true)];
        let snapshot = RouteSnapshot::resolve("/product/slim-fit-polo-p1", &pages, &links);
        assert_eq!(snapshot.category, ActiveCategory::Product);
        assert_eq!(snapshot.route, RouteInfo::Product { id: "p1".into() });
        assert!(snapshot.matched.is_none());
    }

    #[test]
    fn test_unknown_path_falls_back_to_all() {
        let snapshot = RouteSnapshot::resolve("/unknown-garbage", &[], &[]);
        assert_eq!(snapshot.category, ActiveCategory::All);
        assert_eq!(snapshot.route.slug(), Some("unknown-garbage"));
    }
}
