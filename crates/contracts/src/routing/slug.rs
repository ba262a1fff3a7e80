//! Slug construction and the inverse id extraction used by [`classify`].
//!
//! An entity URL is `/{prefix}/{slug}-{id}`. The resolver takes the token
//! after the last hyphen as the id, so hyphens inside the id itself are
//! percent-encoded here and decoded there.
//!
//! [`classify`]: crate::routing::route_info::classify

use thiserror::Error;
use unicode_normalization::UnicodeNormalization;

pub const PRODUCT_PREFIX: &str = "/product/";
pub const BLOG_PREFIX: &str = "/blog/";

/// Минимальная длина slug посадочной страницы
pub const MIN_PAGE_SLUG_LEN: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SlugError {
    #[error("slug must contain at least 3 characters after sanitizing, got {0:?}")]
    TooShort(String),
}

fn is_diacritic(c: char) -> bool {
    ('\u{0300}'..='\u{036f}').contains(&c)
}

/// Lowercase and strip diacritics. `đ` does not decompose under NFD, so it is
/// mapped explicitly.
pub fn fold_accents(input: &str) -> String {
    input
        .nfd()
        .filter(|c| !is_diacritic(*c))
        .map(|c| match c {
            'đ' => 'd',
            'Đ' => 'D',
            other => other,
        })
        .collect::<String>()
        .to_lowercase()
}

/// URL-safe slug from a human-readable title.
///
/// Only ASCII letters and digits survive; runs of whitespace, `_` and `-`
/// become a single `-`; leading and trailing hyphens are dropped.
pub fn slugify(title: &str) -> String {
    let folded = fold_accents(title);
    let mut slug = String::with_capacity(folded.len());
    let mut pending_separator = false;

    for c in folded.trim().chars() {
        if c.is_whitespace() || c == '_' || c == '-' {
            pending_separator = true;
        } else if c.is_ascii_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(c);
        }
    }

    slug
}

/// Percent-encode an id so it never contains a hyphen.
pub fn encode_id(id: &str) -> String {
    urlencoding::encode(id).replace('-', "%2D")
}

/// Inverse of [`encode_id`]. Malformed escapes are kept verbatim.
pub fn decode_id(token: &str) -> String {
    urlencoding::decode(token)
        .map(|decoded| decoded.into_owned())
        .unwrap_or_else(|_| token.to_string())
}

fn entity_path(prefix: &str, title: &str, id: &str) -> String {
    let slug = slugify(title);
    let id = encode_id(id);
    if slug.is_empty() {
        format!("{prefix}{id}")
    } else {
        format!("{prefix}{slug}-{id}")
    }
}

/// `/product/{slug}-{id}`, or `/product/{id}` when the name has no slug.
pub fn make_product_path(name: &str, id: &str) -> String {
    entity_path(PRODUCT_PREFIX, name, id)
}

/// `/blog/{slug}-{id}`, or `/blog/{id}` when the title has no slug.
pub fn make_blog_path(title: &str, id: &str) -> String {
    entity_path(BLOG_PREFIX, title, id)
}

/// Id token of an entity path segment: everything after the last hyphen, or
/// the whole segment when there is none. Empty segment gives an empty id.
pub fn extract_id(segment: &str) -> String {
    let token = segment.rsplit('-').next().unwrap_or_default();
    decode_id(token)
}

/// Canonical id for a landing page entered by an editor: lowercase ASCII,
/// digits and single hyphens.
pub fn sanitize_page_slug(raw: &str) -> Result<String, SlugError> {
    let folded = fold_accents(raw);
    let mut slug = String::with_capacity(folded.len());
    for c in folded.chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            slug.push(c);
        } else if !slug.ends_with('-') {
            slug.push('-');
        }
    }
    let slug = slug.trim_matches('-').to_string();
    if slug.len() < MIN_PAGE_SLUG_LEN {
        return Err(SlugError::TooShort(slug));
    }
    Ok(slug)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_vietnamese() {
        assert_eq!(slugify("Áo Polo Đồng Phục"), "ao-polo-dong-phuc");
        assert_eq!(slugify("Quần Tây Nữ"), "quan-tay-nu");
        assert_eq!(slugify("ĐẶC BIỆT"), "dac-biet");
    }

    #[test]
    fn test_slugify_separators_and_symbols() {
        assert_eq!(slugify("  Slim   Fit -- Polo  "), "slim-fit-polo");
        assert_eq!(slugify("polo_shirt"), "polo-shirt");
        assert_eq!(slugify("Tom & Jerry"), "tom-jerry");
        assert_eq!(slugify("100% Cotton!"), "100-cotton");
        assert_eq!(slugify("-leading and trailing-"), "leading-and-trailing");
        assert_eq!(slugify("a&b"), "ab");
    }

    #[test]
    fn test_slugify_empty_results() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("  "), "");
        assert_eq!(slugify("!!!"), "");
        assert_eq!(slugify("衬衫"), "");
    }

    #[test]
    fn test_entity_paths() {
        assert_eq!(make_product_path("Slim Fit Polo", "p1"), "/product/slim-fit-polo-p1");
        assert_eq!(make_blog_path("Tin tức", "b2"), "/blog/tin-tuc-b2");
        assert_eq!(make_product_path("***", "p1"), "/product/p1");
        assert_eq!(make_product_path("Polo", "a-b"), "/product/polo-a%2Db");
    }

    #[test]
    fn test_extract_id() {
        assert_eq!(extract_id("slim-fit-polo-p1"), "p1");
        assert_eq!(extract_id("p1"), "p1");
        assert_eq!(extract_id(""), "");
        assert_eq!(extract_id("polo-"), "");
        assert_eq!(extract_id("polo-a%2Db"), "a-b");
        assert_eq!(extract_id("polo-AbC9"), "AbC9");
    }

    #[test]
    fn test_id_encoding_round_trip() {
        for id in ["p1", "a-b-c", "x/y", "Mixed_Case", "sp 01", "đ"] {
            assert_eq!(decode_id(&encode_id(id)), id);
            assert!(!encode_id(id).contains('-'));
        }
    }

    #[test]
    fn test_sanitize_page_slug() {
        assert_eq!(sanitize_page_slug("Summer Sale!").unwrap(), "summer-sale");
        assert_eq!(sanitize_page_slug("--Khuyến mãi--hè").unwrap(), "khuyen-mai-he");
        assert_eq!(
            sanitize_page_slug("a!"),
            Err(SlugError::TooShort("a".to_string()))
        );
    }
}
