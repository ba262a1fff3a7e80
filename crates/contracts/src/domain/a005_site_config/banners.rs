//! Баннеры героя: фильтр по разделу, группы слайдеров, порядок слайдов

use serde::{Deserialize, Serialize};

use crate::domain::common::Localized;
use crate::routing::ActiveCategory;

/// Slider group used when a banner does not name one.
pub const DEFAULT_SLIDER_GROUP: &str = "default";

/// Интервал смены слайдов, мс
pub const SLIDE_INTERVAL_MS: u32 = 6_500;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BannerMedia {
    Video,
    #[default]
    Image,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentPosition {
    Left,
    Right,
    #[default]
    Center,
}

impl ContentPosition {
    pub fn css_class(&self) -> &'static str {
        match self {
            ContentPosition::Left => "banner__content--left",
            ContentPosition::Right => "banner__content--right",
            ContentPosition::Center => "banner__content--center",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BannerConfig {
    pub id: String,
    #[serde(rename = "type")]
    pub media: BannerMedia,
    pub url: String,
    pub title: Localized,
    pub description: Localized,
    pub primary_btn_text: Localized,
    pub primary_btn_link: String,
    pub secondary_btn_text: Localized,
    pub secondary_btn_link: String,
    /// Section the banner belongs to: "All", "Men", "Women", "Blog".
    pub target_menu: String,
    pub content_position: ContentPosition,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slider_group_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
}

impl BannerConfig {
    pub fn group_id(&self) -> &str {
        match self.slider_group_id.as_deref() {
            Some(id) if !id.is_empty() => id,
            _ => DEFAULT_SLIDER_GROUP,
        }
    }

    pub fn has_secondary_button(&self) -> bool {
        !self.secondary_btn_text.en.is_empty() || !self.secondary_btn_text.vi.is_empty()
    }
}

/// Banners of one section grouped into sliders. Groups keep the order in
/// which they first appear; slides inside a group are sorted by `order`
/// (missing counts as 0, ties keep the configured order).
pub fn banner_groups(banners: &[BannerConfig], category: ActiveCategory) -> Vec<(String, Vec<BannerConfig>)> {
    let target = category.as_str();
    let mut groups: Vec<(String, Vec<BannerConfig>)> = Vec::new();

    for banner in banners.iter().filter(|b| b.target_menu == target) {
        let gid = banner.group_id();
        match groups.iter_mut().find(|(id, _)| id == gid) {
            Some((_, slides)) => slides.push(banner.clone()),
            None => groups.push((gid.to_string(), vec![banner.clone()])),
        }
    }

    for (_, slides) in groups.iter_mut() {
        slides.sort_by_key(|b| b.order.unwrap_or(0));
    }
    groups
}

/// Следующий слайд по кругу; группа из одного слайда стоит на месте
pub fn next_slide(current: usize, len: usize) -> usize {
    if len <= 1 {
        0
    } else {
        (current + 1) % len
    }
}
