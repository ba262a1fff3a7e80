use contracts::domain::common::Language;

/// Короткие подписи интерфейса на двух языках
pub fn tr(lang: Language, en: &'static str, vi: &'static str) -> &'static str {
    match lang {
        Language::En => en,
        Language::Vi => vi,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tr() {
        assert_eq!(tr(Language::En, "Bag", "Giỏ hàng"), "Bag");
        assert_eq!(tr(Language::Vi, "Bag", "Giỏ hàng"), "Giỏ hàng");
    }
}
