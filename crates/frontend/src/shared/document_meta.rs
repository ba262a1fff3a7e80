//! Заголовок вкладки и meta-теги текущей страницы

use contracts::shared::seo::SeoMeta;
use web_sys::window;

/// `<meta name=.. content=..>` (или `property=` для Open Graph); создаётся,
/// если его ещё нет в `<head>`
fn set_meta(document: &web_sys::Document, attr: &str, key: &str, content: &str) {
    let selector = format!("meta[{}=\"{}\"]", attr, key);
    let existing = document.query_selector(&selector).ok().flatten();
    let element = match existing {
        Some(element) => element,
        None => {
            let Some(head) = document.head() else {
                return;
            };
            let Ok(element) = document.create_element("meta") else {
                return;
            };
            let _ = element.set_attribute(attr, key);
            if head.append_child(&element).is_err() {
                log::warn!("Failed to add meta {}", key);
                return;
            }
            element
        }
    };
    let _ = element.set_attribute("content", content);
}

pub fn apply_seo(meta: &SeoMeta) {
    let Some(document) = window().and_then(|w| w.document()) else {
        return;
    };
    document.set_title(&meta.title);
    set_meta(&document, "name", "description", &meta.description);
    set_meta(&document, "property", "og:title", &meta.title);
    set_meta(&document, "property", "og:description", &meta.description);
    if let Some(image) = &meta.og_image {
        set_meta(&document, "property", "og:image", image);
    }
}
