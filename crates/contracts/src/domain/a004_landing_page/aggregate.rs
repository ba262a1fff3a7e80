use serde::{Deserialize, Serialize};

use crate::domain::common::Localized;

/// Тип блока посадочной страницы
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BlockKind {
    #[default]
    Hero,
    VideoBackground,
    ImageText,
    FullImage,
    CallToAction,
    /// Block types this build does not know how to render.
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockLayout {
    #[default]
    Left,
    Right,
}

/// Content block of a landing page, rendered in order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LpBlock {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: BlockKind,
    pub title: Localized,
    pub content: Localized,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    pub button_text: Localized,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_link: Option<String>,
    pub layout: BlockLayout,
    pub animation: String,
}

/// Посадочная страница (документ коллекции `landingPages`).
///
/// `id` is the page slug: unique, lowercase, addressed as `/{id}`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LandingPage {
    pub id: String,
    pub title: String,
    pub is_active: bool,
    pub show_in_menu: bool,
    pub blocks: Vec<LpBlock>,
}

impl LandingPage {
    pub fn path(&self) -> String {
        format!("/{}", self.id.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_with_unknown_block() {
        let json = r#"{
            "id": "summer-sale",
            "title": "Summer Sale",
            "isActive": true,
            "blocks": [
                {"id": "b1", "type": "Hero", "title": {"en": "Hi", "vi": "Chào"}, "animation": "fade-up"},
                {"id": "b2", "type": "Carousel3D"},
                {"id": "b3", "type": "ImageText", "layout": "right"}
            ]
        }"#;
        let page: LandingPage = serde_json::from_str(json).unwrap();
        assert!(page.is_active);
        assert!(!page.show_in_menu);
        assert_eq!(page.blocks[0].kind, BlockKind::Hero);
        assert_eq!(page.blocks[1].kind, BlockKind::Unknown);
        assert_eq!(page.blocks[2].layout, BlockLayout::Right);
        assert_eq!(page.path(), "/summer-sale");
    }
}
