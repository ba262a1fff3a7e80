use contracts::domain::a001_product::aggregate::Product;
use contracts::domain::common::Language;
use leptos::prelude::*;

use super::card::ProductCard;
use crate::shared::i18n::tr;

#[component]
pub fn ProductGrid(
    #[prop(into)] products: Signal<Vec<Product>>,
    #[prop(into)] language: Signal<Language>,
) -> impl IntoView {
    view! {
        <Show
            when=move || products.with(|p| !p.is_empty())
            fallback=move || {
                view! {
                    <p class="empty-state">
                        {move || tr(language.get(), "No products yet", "Chưa có sản phẩm")}
                    </p>
                }
            }
        >
            <div class="product-grid">
                <For
                    each=move || products.get()
                    key=|p| p.id.clone()
                    children=move |product: Product| view! { <ProductCard product=product /> }
                />
            </div>
        </Show>
    }
}
