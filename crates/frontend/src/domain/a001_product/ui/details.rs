use contracts::domain::a001_product::aggregate::{find_product, Product};
use leptos::prelude::*;
use thaw::*;

use super::grid::ProductGrid;
use crate::layout::global_context::use_app;
use crate::shared::components::{NotFound, PriceLabel};
use crate::shared::i18n::tr;
use crate::system::navigation::use_navigator;
use crate::system::shopping::{use_cart, use_wishlist};
use crate::system::site_data::use_site_data;

const RELATED_LIMIT: usize = 4;

/// Страница товара по id из маршрута; пустой или неизвестный id = "не найдено"
#[component]
pub fn ProductDetailsPage(#[prop(into)] product_id: Signal<String>) -> impl IntoView {
    let site = use_site_data();
    let app = use_app();

    let product = Memo::new(move |_| {
        let id = product_id.get();
        site.snapshot
            .with(|s| find_product(&s.products, &id).cloned())
            .filter(Product::is_visible)
    });

    move || match product.get() {
        Some(product) => view! { <ProductDetails product=product /> }.into_any(),
        None => view! {
            <NotFound message=Signal::derive(move || {
                tr(app.language.get(), "Product not found", "Không tìm thấy sản phẩm")
            }) />
        }
        .into_any(),
    }
}

#[component]
fn ProductDetails(product: Product) -> impl IntoView {
    let app = use_app();
    let cart = use_cart();
    let wishlist = use_wishlist();
    let navigator = use_navigator();
    let site = use_site_data();
    let lang = app.lang();

    let selected_size = RwSignal::new(product.sizes.first().cloned());
    let has_sizes = !product.sizes.is_empty();
    let requires_quotation = product.requires_quotation();

    let related = {
        let id = product.id.clone();
        let category = product.category.clone();
        Signal::derive(move || {
            site.snapshot.with(|s| {
                s.visible_products()
                    .into_iter()
                    .filter(|p| p.id != id && p.in_category(&category))
                    .take(RELATED_LIMIT)
                    .cloned()
                    .collect::<Vec<_>>()
            })
        })
    };

    let name = product.name.clone();
    let brand = product.brand.clone();
    let image_url = product.image_url.clone();
    let description = product.description.clone();
    let size_options = product.sizes.clone();
    let id_for_wishlist = product.id.clone();
    let id_for_label = product.id.clone();
    let product_for_cart = product.clone();
    // Товар "по запросу" тоже попадает в корзину: из неё собирается заявка
    let on_primary = move |_| {
        cart.add(&product_for_cart, selected_size.get_untracked().as_deref());
        if requires_quotation {
            navigator.navigate("/quotation");
        } else {
            cart.is_open.set(true);
        }
    };

    view! {
        <section class="product-details">
            <div class="product-details__media">
                <img src=image_url alt=name.clone() />
            </div>
            <div class="product-details__info">
                <span class="product-details__brand">{brand}</span>
                <h1 class="product-details__name">{name}</h1>
                <PriceLabel product=product language=lang />
                <p class="product-details__description">{description}</p>

                <Show when=move || !requires_quotation && has_sizes>
                    <div class="product-details__sizes">
                        <label>{move || tr(lang.get(), "Size", "Kích cỡ")}</label>
                        <div class="size-picker">
                            {size_options
                                .iter()
                                .cloned()
                                .map(|size| {
                                    let value = size.clone();
                                    let is_selected = {
                                        let size = size.clone();
                                        move || selected_size.get().as_deref() == Some(size.as_str())
                                    };
                                    view! {
                                        <button
                                            class="size-picker__option"
                                            class:active=is_selected
                                            on:click=move |_| selected_size.set(Some(value.clone()))
                                        >
                                            {size}
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </Show>

                <div class="product-details__actions">
                    <Button appearance=ButtonAppearance::Primary on_click=on_primary>
                        {move || {
                            if requires_quotation {
                                tr(lang.get(), "Request a quote", "Yêu cầu báo giá")
                            } else {
                                tr(lang.get(), "Add to bag", "Thêm vào túi")
                            }
                        }}
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| {
                            wishlist.toggle(&id_for_wishlist);
                        }
                    >
                        {move || {
                            if wishlist.contains(&id_for_label) {
                                tr(lang.get(), "Remove from favorites", "Bỏ yêu thích")
                            } else {
                                tr(lang.get(), "Add to favorites", "Yêu thích")
                            }
                        }}
                    </Button>
                </div>
            </div>
        </section>

        <Show when=move || related.with(|r| !r.is_empty())>
            <section class="product-related">
                <h2>{move || tr(lang.get(), "You may also like", "Có thể bạn sẽ thích")}</h2>
                <ProductGrid products=related language=lang />
            </section>
        </Show>
    }
}
