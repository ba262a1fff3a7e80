use contracts::domain::a001_product::aggregate::Product;
use leptos::prelude::*;

use crate::layout::global_context::use_app;
use crate::shared::components::PriceLabel;
use crate::shared::i18n::tr;
use crate::system::navigation::use_navigator;
use crate::system::shopping::{use_cart, use_wishlist};
use crate::system::site_data::use_site_data;

/// Выезжающая панель избранного
#[component]
pub fn WishlistDrawer() -> impl IntoView {
    let app = use_app();
    let wishlist = use_wishlist();
    let site = use_site_data();
    let lang = app.lang();
    let count = wishlist.len();

    // id без товара в каталоге не показываются
    let products = Memo::new(move |_| {
        wishlist.wishlist.with(|w| {
            site.snapshot
                .with(|s| w.products(&s.products).into_iter().cloned().collect::<Vec<_>>())
        })
    });

    view! {
        <div class="drawer" class:open=move || wishlist.is_open.get()>
            <div class="drawer__backdrop" on:click=move |_| wishlist.is_open.set(false)></div>
            <aside class="drawer__panel">
                <div class="drawer__header">
                    <h3>{move || tr(lang.get(), "Favorites", "Yêu thích")} " (" {move || count.get()} ")"</h3>
                    <button on:click=move |_| wishlist.is_open.set(false)>"✕"</button>
                </div>
                <Show
                    when=move || products.with(|p| !p.is_empty())
                    fallback=move || view! {
                        <div class="drawer__empty">
                            <p>{move || tr(lang.get(), "Your favorites list is empty", "Danh sách yêu thích trống")}</p>
                        </div>
                    }
                >
                    <ul class="drawer__items">
                        <For
                            each=move || products.get()
                            key=|p| p.id.clone()
                            children=move |product: Product| view! { <WishlistItem product=product /> }
                        />
                    </ul>
                </Show>
            </aside>
        </div>
    }
}

#[component]
fn WishlistItem(product: Product) -> impl IntoView {
    let app = use_app();
    let cart = use_cart();
    let wishlist = use_wishlist();
    let navigator = use_navigator();
    let lang = app.lang();

    let requires_quotation = product.requires_quotation();
    let path = product.path();
    let id = product.id.clone();
    let name = product.name.clone();
    let brand = product.brand.clone();
    let image_url = product.image_url.clone();
    let for_cart = product.clone();

    let open_product = move |_| {
        wishlist.is_open.set(false);
        navigator.navigate(&path);
    };
    // "По запросу" ведёт сразу на форму заявки
    let add_to_cart = move |_| {
        cart.add(&for_cart, None);
        wishlist.is_open.set(false);
        if requires_quotation {
            navigator.navigate("/quotation");
        }
    };

    view! {
        <li class="drawer-item">
            <img src=image_url alt="" on:click=open_product />
            <div class="drawer-item__info">
                <h4>{name}</h4>
                <p>{brand}</p>
                <PriceLabel product=product language=lang />
                <div class="drawer-item__actions">
                    <button on:click=add_to_cart>
                        {move || {
                            if requires_quotation {
                                tr(lang.get(), "Add to quote", "Thêm vào báo giá")
                            } else {
                                tr(lang.get(), "Add to bag", "Thêm vào túi")
                            }
                        }}
                    </button>
                    <button
                        class="drawer-item__remove"
                        on:click=move |_| {
                            wishlist.toggle(&id);
                        }
                    >
                        {move || tr(lang.get(), "Remove", "Xóa")}
                    </button>
                </div>
            </div>
        </li>
    }
}
