use serde::{Deserialize, Serialize};

use crate::domain::common::{Language, Localized};
use crate::routing::slug::make_blog_path;

/// Статья журнала (документ коллекции `blogs`)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Blog {
    pub id: String,
    pub title: Localized,
    pub short_desc: Localized,
    pub content: Localized,
    pub image_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Localized>,
    /// ISO date, e.g. "2024-03-15"
    pub date: String,
    pub author: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seo_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seo_description: Option<String>,
}

impl Blog {
    /// Canonical URL `/blog/{slug}-{id}`. The slug comes from the Vietnamese
    /// title (the site's default language), English when that is empty.
    pub fn path(&self) -> String {
        make_blog_path(self.title.any(), &self.id)
    }

    pub fn title_in(&self, lang: Language) -> &str {
        self.title.get(lang)
    }
}

/// Newest first. ISO dates compare correctly as strings.
pub fn sort_newest_first(blogs: &mut [Blog]) {
    blogs.sort_by(|a, b| b.date.cmp(&a.date));
}

pub fn find_blog<'a>(blogs: &'a [Blog], id: &str) -> Option<&'a Blog> {
    if id.is_empty() {
        return None;
    }
    blogs.iter().find(|b| b.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blog(id: &str, vi: &str, en: &str, date: &str) -> Blog {
        Blog {
            id: id.into(),
            title: Localized::new(en, vi),
            date: date.into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_path_prefers_vietnamese_title() {
        let b = blog("b7", "Bí quyết chọn vải", "How to pick fabric", "2024-01-01");
        assert_eq!(b.path(), "/blog/bi-quyet-chon-vai-b7");

        let b = blog("b8", "", "How to pick fabric", "2024-01-01");
        assert_eq!(b.path(), "/blog/how-to-pick-fabric-b8");
    }

    #[test]
    fn test_sort_newest_first() {
        let mut blogs = vec![
            blog("a", "A", "A", "2023-05-01"),
            blog("b", "B", "B", "2024-02-10"),
            blog("c", "C", "C", "2023-12-31"),
        ];
        sort_newest_first(&mut blogs);
        let ids: Vec<_> = blogs.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "c", "a"]);
    }

    #[test]
    fn test_find_blog() {
        let blogs = vec![blog("b1", "Một", "One", "2024-01-01")];
        assert!(find_blog(&blogs, "b1").is_some());
        assert!(find_blog(&blogs, "").is_none());
        assert!(find_blog(&blogs, "b2").is_none());
    }
}
