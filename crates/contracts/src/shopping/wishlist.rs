use serde::{Deserialize, Serialize};

use crate::domain::a001_product::aggregate::Product;

/// Ключ localStorage, под которым хранится избранное
pub const WISHLIST_STORAGE_KEY: &str = "tkap-wishlist";

/// Favorite product ids, in the order they were added. Serialized as a plain
/// JSON array of strings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Wishlist {
    ids: Vec<String>,
}

impl Wishlist {
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|i| i == id)
    }

    /// Add when absent, remove when present. Returns the new membership.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.contains(id) {
            self.ids.retain(|i| i != id);
            false
        } else {
            self.ids.push(id.to_string());
            true
        }
    }

    /// Products of the catalog that are in the wishlist, in catalog order.
    /// Ids of products that no longer exist are ignored.
    pub fn products<'a>(&self, catalog: &'a [Product]) -> Vec<&'a Product> {
        catalog.iter().filter(|p| self.contains(&p.id)).collect()
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.ids).unwrap_or_else(|_| "[]".to_string())
    }

    /// Parse persisted data. Duplicate ids are collapsed.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        let stored: Vec<String> = serde_json::from_str(raw)?;
        let mut wishlist = Wishlist::default();
        for id in stored {
            if !wishlist.contains(&id) {
                wishlist.ids.push(id);
            }
        }
        Ok(wishlist)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_is_involution() {
        let mut wishlist = Wishlist::default();
        wishlist.toggle("keep");
        for id in ["p1", "keep"] {
            let before = wishlist.clone();
            wishlist.toggle(id);
            wishlist.toggle(id);
            assert_eq!(wishlist.contains(id), before.contains(id));
        }
    }

    #[test]
    fn test_toggle_returns_membership() {
        let mut wishlist = Wishlist::default();
        assert!(wishlist.toggle("p1"));
        assert!(wishlist.contains("p1"));
        assert!(!wishlist.toggle("p1"));
        assert!(wishlist.is_empty());
    }

    #[test]
    fn test_json_round_trip_and_dedup() {
        let wishlist = Wishlist::from_json(r#"["a","b","a"]"#).unwrap();
        assert_eq!(wishlist.ids(), ["a", "b"]);
        assert_eq!(wishlist.to_json(), r#"["a","b"]"#);
    }

    #[test]
    fn test_corrupt_json_is_an_error() {
        assert!(Wishlist::from_json("{not json").is_err());
        assert!(Wishlist::from_json(r#"{"ids":["a"]}"#).is_err());
        assert!(Wishlist::from_json("[1,2]").is_err());
    }

    #[test]
    fn test_products_skips_unknown_ids() {
        let catalog = vec![
            Product { id: "p1".into(), ..Default::default() },
            Product { id: "p2".into(), ..Default::default() },
        ];
        let mut wishlist = Wishlist::default();
        wishlist.toggle("p2");
        wishlist.toggle("gone");
        let ids: Vec<_> = wishlist.products(&catalog).iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["p2"]);
    }
}
