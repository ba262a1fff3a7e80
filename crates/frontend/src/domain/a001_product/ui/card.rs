use contracts::domain::a001_product::aggregate::Product;
use leptos::prelude::*;

use crate::layout::global_context::use_app;
use crate::shared::components::{NavLink, PriceLabel};
use crate::system::shopping::use_wishlist;

#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let app = use_app();
    let wishlist = use_wishlist();
    let href = product.path();
    let name = product.name.clone();
    let brand = product.brand.clone();
    let image_url = product.image_url.clone();
    let id = product.id.clone();
    let id_for_toggle = id.clone();
    let is_favorite = move || wishlist.contains(&id);
    let is_favorite_class = is_favorite.clone();
    let name_alt = name.clone();

    view! {
        <div class="product-card">
            <NavLink href=href.clone() class="product-card__image">
                <img src=image_url alt=name_alt loading="lazy" />
            </NavLink>
            <button
                class="product-card__favorite"
                class:active=is_favorite_class
                on:click=move |_| {
                    wishlist.toggle(&id_for_toggle);
                }
            >
                {move || if is_favorite() { "♥" } else { "♡" }}
            </button>
            <div class="product-card__info">
                <span class="product-card__brand">{brand}</span>
                <NavLink href=href class="product-card__name">
                    {name}
                </NavLink>
                <PriceLabel product=product language=app.lang() />
            </div>
        </div>
    }
}
