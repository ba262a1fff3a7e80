use serde::{Deserialize, Serialize};

/// Языки интерфейса витрины
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    #[default]
    Vi,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Vi => "vi",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "en" => Some(Language::En),
            "vi" => Some(Language::Vi),
            _ => None,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Language::En => Language::Vi,
            Language::Vi => Language::En,
        }
    }
}

/// Bilingual text as stored in documents: `{ "en": "...", "vi": "..." }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Localized {
    pub en: String,
    pub vi: String,
}

impl Localized {
    pub fn new(en: impl Into<String>, vi: impl Into<String>) -> Self {
        Self {
            en: en.into(),
            vi: vi.into(),
        }
    }

    /// Text in `lang`, falling back to Vietnamese when the translation is empty.
    pub fn get(&self, lang: Language) -> &str {
        let text = match lang {
            Language::En => &self.en,
            Language::Vi => &self.vi,
        };
        if text.is_empty() {
            &self.vi
        } else {
            text
        }
    }

    /// First non-empty variant, Vietnamese first.
    pub fn any(&self) -> &str {
        if self.vi.is_empty() {
            &self.en
        } else {
            &self.vi
        }
    }

    pub fn is_empty(&self) -> bool {
        self.en.is_empty() && self.vi.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_falls_back_to_vi() {
        let text = Localized::new("", "Cửa hàng");
        assert_eq!(text.get(Language::En), "Cửa hàng");
        assert_eq!(text.get(Language::Vi), "Cửa hàng");

        let text = Localized::new("Stores", "Cửa hàng");
        assert_eq!(text.get(Language::En), "Stores");
    }

    #[test]
    fn test_missing_fields_deserialize_empty() {
        let text: Localized = serde_json::from_str(r#"{"en":"Only English"}"#).unwrap();
        assert_eq!(text.vi, "");
        assert_eq!(text.any(), "Only English");
    }

    #[test]
    fn test_language_codes() {
        assert_eq!(Language::from_code("en"), Some(Language::En));
        assert_eq!(Language::from_code("fr"), None);
        assert_eq!(Language::default().code(), "vi");
        assert_eq!(Language::Vi.toggled(), Language::En);
    }
}
