//! Navigation menu assembly and link targets.

use super::category::ActiveCategory;
use super::slug::slugify;
use crate::domain::a004_landing_page::aggregate::LandingPage;
use crate::domain::a005_site_config::aggregate::MenuItem;
use crate::domain::common::Localized;

fn bare_target(target: &str) -> String {
    target.trim_start_matches('/').to_lowercase()
}

/// URL path for a menu target. Explicit paths are kept as-is, known pages get
/// their canonical path, any other label is slugified.
pub fn category_path(target: &str) -> String {
    let bare = bare_target(target);
    match bare.as_str() {
        "" | "all" => return "/".to_string(),
        "blog" | "journal" => return "/journal".to_string(),
        _ => {}
    }
    if let Some(path) = ActiveCategory::from_page_slug(&bare).and_then(|c| c.canonical_path()) {
        return path.to_string();
    }
    if target.starts_with('/') {
        return target.to_string();
    }
    format!("/{}", slugify(target))
}

/// Menu as displayed: configured items, then active landing pages flagged
/// `show_in_menu` (unless already linked), a guaranteed quotation entry, and
/// the admin entry only for administrators.
pub fn navigation_menu(
    configured: &[MenuItem],
    landing_pages: &[LandingPage],
    show_admin: bool,
) -> Vec<MenuItem> {
    let mut items: Vec<MenuItem> = configured.to_vec();

    for page in landing_pages.iter().filter(|p| p.is_active && p.show_in_menu) {
        let page_id = page.id.to_lowercase();
        let already_linked = items
            .iter()
            .any(|item| item.target_category.to_lowercase().contains(&page_id));
        if !already_linked {
            let label = page.title.to_uppercase();
            items.push(MenuItem::new(
                format!("dynamic-lp-{}", page.id),
                Localized::new(label.clone(), label),
                format!("/{page_id}"),
            ));
        }
    }

    if !items.iter().any(|i| bare_target(&i.target_category) == "quotation") {
        items.push(MenuItem::new(
            "fixed-quotation",
            Localized::new("QUOTATION", "BÁO GIÁ"),
            "Quotation",
        ));
    }

    let has_admin = items.iter().any(|i| bare_target(&i.target_category) == "admin");
    if show_admin && !has_admin {
        items.push(MenuItem::new(
            "fixed-admin",
            Localized::new("ADMIN", "QUẢN TRỊ"),
            "Admin",
        ));
    } else if !show_admin {
        items.retain(|i| bare_target(&i.target_category) != "admin");
    }

    items
}

/// Highlight rule: the item's path equals the current path, or its target
/// names the active category.
pub fn is_menu_item_active(item: &MenuItem, current_path: &str, category: ActiveCategory) -> bool {
    if category_path(&item.target_category).eq_ignore_ascii_case(current_path) {
        return true;
    }
    bare_target(&item.target_category) == category.as_str().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, target: &str) -> MenuItem {
        MenuItem::new(id, Localized::new(id, id), target)
    }

    fn page(id: &str, is_active: bool, show_in_menu: bool) -> LandingPage {
        LandingPage {
            id: id.into(),
            title: "Summer Sale".into(),
            is_active,
            show_in_menu,
            ..Default::default()
        }
    }

    #[test]
    fn test_category_path() {
        assert_eq!(category_path("All"), "/");
        assert_eq!(category_path(""), "/");
        assert_eq!(category_path("/"), "/");
        assert_eq!(category_path("Blog"), "/journal");
        assert_eq!(category_path("journal"), "/journal");
        assert_eq!(category_path("Men"), "/men");
        assert_eq!(category_path("Stores"), "/stores");
        assert_eq!(category_path("/admin"), "/admin");
        assert_eq!(category_path("/summer-sale"), "/summer-sale");
        assert_eq!(category_path("Bộ Sưu Tập Mới"), "/bo-suu-tap-moi");
    }

    #[test]
    fn test_menu_appends_landing_pages_and_quotation() {
        let configured = vec![item("men", "Men")];
        let pages = vec![
            page("summer-sale", true, true),
            page("hidden-sale", true, false),
            page("old-sale", false, true),
        ];
        let menu = navigation_menu(&configured, &pages, false);
        let targets: Vec<_> = menu.iter().map(|i| i.target_category.as_str()).collect();
        assert_eq!(targets, vec!["Men", "/summer-sale", "Quotation"]);
        assert_eq!(menu[1].label.en, "SUMMER SALE");
    }

    #[test]
    fn test_menu_does_not_duplicate_linked_page() {
        let configured = vec![item("sale", "/Summer-Sale"), item("q", "/quotation")];
        let menu = navigation_menu(&configured, &[page("summer-sale", true, true)], false);
        assert_eq!(menu.len(), 2);
    }

    #[test]
    fn test_admin_entry_only_for_admins() {
        let configured = vec![item("admin", "/admin")];
        let menu = navigation_menu(&configured, &[], false);
        assert!(menu.iter().all(|i| i.target_category != "/admin"));

        let menu = navigation_menu(&[], &[], true);
        assert!(menu.iter().any(|i| i.id == "fixed-admin"));

        let menu = navigation_menu(&configured, &[], true);
        assert_eq!(menu.iter().filter(|i| bare_target(&i.target_category) == "admin").count(), 1);
    }

    #[test]
    fn test_is_menu_item_active() {
        let men = item("men", "Men");
        assert!(is_menu_item_active(&men, "/men", ActiveCategory::Men));
        assert!(!is_menu_item_active(&men, "/women", ActiveCategory::Women));

        let all = item("home", "All");
        assert!(is_menu_item_active(&all, "/", ActiveCategory::All));

        let sale = item("sale", "/summer-sale");
        assert!(is_menu_item_active(&sale, "/summer-sale", ActiveCategory::Landing));
    }
}
