use serde::{Deserialize, Serialize};

use super::banners::BannerConfig;
use crate::domain::common::Localized;

/// Logo shown until the config document arrives.
pub const DEFAULT_LOGO_URL: &str =
    "https://res.cloudinary.com/dozhznwuf/image/upload/v1768206325/logo-tkap_hrspdt.png";

/// Пункт главного меню
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MenuItem {
    pub id: String,
    pub label: Localized,
    /// Category name ("Men", "All"), fixed page ("stores") or explicit path ("/summer-sale").
    pub target_category: String,
}

impl MenuItem {
    pub fn new(id: impl Into<String>, label: Localized, target_category: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label,
            target_category: target_category.into(),
        }
    }
}

/// Скрытая ссылка: slug, по которому во фрейме открывается внешний URL
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HiddenLink {
    pub id: String,
    pub title: String,
    pub url: String,
    pub is_active: bool,
}

/// Страница "Магазины"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StoresPageConfig {
    pub title: Localized,
    pub description: Localized,
    pub hq_name: String,
    pub hq_address: String,
    pub hq_phone: String,
    pub hq_email: String,
    pub map_embed_url: String,
    pub map_direction_url: String,
    pub opening_hours_weekdays: String,
    pub opening_hours_sunday: String,
}

impl Default for StoresPageConfig {
    fn default() -> Self {
        Self {
            title: Localized::new("Our Stores", "Cửa hàng"),
            description: Localized::default(),
            hq_name: String::new(),
            hq_address: String::new(),
            hq_phone: String::new(),
            hq_email: String::new(),
            map_embed_url: String::new(),
            map_direction_url: String::new(),
            opening_hours_weekdays: String::new(),
            opening_hours_sunday: String::new(),
        }
    }
}

/// Настройки сайта (singleton-документ `config/site`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SiteConfig {
    pub nav_items: Vec<MenuItem>,
    pub banners: Vec<BannerConfig>,
    pub hidden_links: Vec<HiddenLink>,
    pub logo_image_url: String,
    /// Category the logo navigates to.
    pub logo_redirect: String,
    pub brand_primary_color: String,
    pub contact_phone: String,
    pub contact_email: String,
    #[serde(rename = "contactHQ")]
    pub contact_hq: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_zalo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_facebook: Option<String>,
    pub show_zalo: bool,
    pub show_facebook: bool,
    pub stores_page: StoresPageConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            nav_items: Vec::new(),
            banners: Vec::new(),
            hidden_links: Vec::new(),
            logo_image_url: DEFAULT_LOGO_URL.to_string(),
            logo_redirect: "All".to_string(),
            brand_primary_color: "#000000".to_string(),
            contact_phone: String::new(),
            contact_email: String::new(),
            contact_hq: String::new(),
            contact_zalo: None,
            contact_facebook: None,
            show_zalo: false,
            show_facebook: false,
            stores_page: StoresPageConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let json = r#"{
            "hiddenLinks": [{"id": "catalog-2024", "title": "Catalog", "url": "https://x.example", "isActive": true}],
            "contactHQ": "Hà Nội"
        }"#;
        let cfg: SiteConfig = serde_json::from_str(json).unwrap();
        assert_eq!(cfg.hidden_links.len(), 1);
        assert!(cfg.hidden_links[0].is_active);
        assert_eq!(cfg.contact_hq, "Hà Nội");
        assert_eq!(cfg.logo_redirect, "All");
        assert_eq!(cfg.logo_image_url, DEFAULT_LOGO_URL);
        assert_eq!(cfg.stores_page.title.en, "Our Stores");
    }
}
