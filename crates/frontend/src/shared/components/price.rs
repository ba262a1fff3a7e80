use contracts::domain::a001_product::aggregate::Product;
use contracts::domain::common::Language;
use contracts::shared::format::format_price;
use leptos::prelude::*;

use crate::shared::i18n::tr;

/// Цена товара; для товаров "по запросу" вместо цены надпись
#[component]
pub fn PriceLabel(product: Product, language: Signal<Language>) -> impl IntoView {
    let requires_quotation = product.requires_quotation();
    let price = format_price(product.price);
    let original = product
        .is_discounted()
        .then(|| product.original_price.map(format_price))
        .flatten();

    view! {
        <span class="price">
            {move || {
                if requires_quotation {
                    tr(language.get(), "Quote", "Báo giá").to_string()
                } else {
                    price.clone()
                }
            }}
            {original.map(|o| view! { <s class="price-original">{o}</s> })}
        </span>
    }
}
