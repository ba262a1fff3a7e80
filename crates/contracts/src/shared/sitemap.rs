//! sitemap.xml and robots.txt rendering.

use crate::domain::a001_product::aggregate::Product;
use crate::domain::a002_blog::aggregate::Blog;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeFreq {
    Daily,
    Weekly,
    Monthly,
}

impl ChangeFreq {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeFreq::Daily => "daily",
            ChangeFreq::Weekly => "weekly",
            ChangeFreq::Monthly => "monthly",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SitemapEntry {
    /// Path relative to the site root, `""` for the home page.
    pub path: String,
    pub change_freq: ChangeFreq,
    pub priority: f32,
}

impl SitemapEntry {
    fn new(path: impl Into<String>, change_freq: ChangeFreq, priority: f32) -> Self {
        Self {
            path: path.into(),
            change_freq,
            priority,
        }
    }
}

const STATIC_PAGES: [(&str, f32); 6] = [
    ("", 1.0),
    ("/men", 0.9),
    ("/women", 0.9),
    ("/journal", 0.9),
    ("/stores", 0.9),
    ("/quotation", 0.9),
];

/// Static pages, visible products, then blogs.
pub fn sitemap_entries(products: &[Product], blogs: &[Blog]) -> Vec<SitemapEntry> {
    let mut entries: Vec<SitemapEntry> = STATIC_PAGES
        .iter()
        .map(|(path, priority)| SitemapEntry::new(*path, ChangeFreq::Daily, *priority))
        .collect();

    entries.extend(
        products
            .iter()
            .filter(|p| p.is_visible() && !p.id.is_empty())
            .map(|p| SitemapEntry::new(p.path(), ChangeFreq::Weekly, 0.8)),
    );
    entries.extend(
        blogs
            .iter()
            .filter(|b| !b.id.is_empty())
            .map(|b| SitemapEntry::new(b.path(), ChangeFreq::Monthly, 0.6)),
    );
    entries
}

fn escape_xml(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn render_sitemap(base_url: &str, entries: &[SitemapEntry]) -> String {
    let base = base_url.trim_end_matches('/');
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );
    for entry in entries {
        xml.push_str("  <url>\n");
        xml.push_str(&format!(
            "    <loc>{}</loc>\n",
            escape_xml(&format!("{}{}", base, entry.path))
        ));
        xml.push_str(&format!(
            "    <changefreq>{}</changefreq>\n",
            entry.change_freq.as_str()
        ));
        xml.push_str(&format!("    <priority>{:.1}</priority>\n", entry.priority));
        xml.push_str("  </url>\n");
    }
    xml.push_str("</urlset>\n");
    xml
}

pub fn render_robots(base_url: &str) -> String {
    format!(
        "User-agent: *\nAllow: /\nDisallow: /admin/\nDisallow: /checkout/\n\nSitemap: {}/sitemap.xml\n",
        base_url.trim_end_matches('/')
    )
}
