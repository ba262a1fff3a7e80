use contracts::shared::format::format_price;
use contracts::shopping::quotation_draft::NO_SIZE;
use contracts::shopping::CartItem;
use leptos::prelude::*;
use thaw::*;

use crate::layout::global_context::use_app;
use crate::shared::i18n::tr;
use crate::system::navigation::use_navigator;
use crate::system::shopping::use_cart;

/// Выезжающая панель корзины
#[component]
pub fn CartDrawer() -> impl IntoView {
    let app = use_app();
    let cart = use_cart();
    let navigator = use_navigator();
    let lang = app.lang();
    let count = cart.count();
    let total = cart.total();

    let items = Memo::new(move |_| cart.cart.with(|c| c.items().to_vec()));

    view! {
        <div class="drawer" class:open=move || cart.is_open.get()>
            <div class="drawer__backdrop" on:click=move |_| cart.is_open.set(false)></div>
            <aside class="drawer__panel">
                <div class="drawer__header">
                    <h3>{move || tr(lang.get(), "Shopping bag", "Túi mua sắm")} " (" {move || count.get()} ")"</h3>
                    <button on:click=move |_| cart.is_open.set(false)>"✕"</button>
                </div>
                <Show
                    when=move || items.with(|i| !i.is_empty())
                    fallback=move || view! {
                        <div class="drawer__empty">
                            <p>{move || tr(lang.get(), "Your bag is empty", "Túi của bạn đang trống")}</p>
                        </div>
                    }
                >
                    <ul class="drawer__items">
                        <For
                            each=move || items.get()
                            key=|item| (item.product.id.clone(), item.selected_size.clone(), item.quantity)
                            children=move |item: CartItem| {
                                let id = item.product.id.clone();
                                let size = item.selected_size.clone();
                                let price = if item.product.requires_quotation() {
                                    None
                                } else {
                                    Some(format_price(item.line_total()))
                                };
                                view! {
                                    <li class="drawer-item">
                                        <img src=item.product.image_url.clone() alt="" />
                                        <div class="drawer-item__info">
                                            <h4>{item.product.name.clone()}</h4>
                                            <p>
                                                "Size: " {item.selected_size.clone().unwrap_or_else(|| NO_SIZE.to_string())}
                                                " × " {item.quantity}
                                            </p>
                                            <span>
                                                {move || price.clone().unwrap_or_else(|| tr(lang.get(), "Quote", "Báo giá").to_string())}
                                            </span>
                                            <button
                                                class="drawer-item__remove"
                                                on:click=move |_| cart.remove(&id, size.as_deref())
                                            >
                                                {move || tr(lang.get(), "Remove", "Xóa")}
                                            </button>
                                        </div>
                                    </li>
                                }
                            }
                        />
                    </ul>
                    <div class="drawer__footer">
                        <div class="drawer__total">
                            <span>{move || tr(lang.get(), "Subtotal", "Tạm tính")}</span>
                            <strong>{move || format_price(total.get())}</strong>
                        </div>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| {
                                cart.is_open.set(false);
                                navigator.navigate("/checkout");
                            }
                        >
                            {move || tr(lang.get(), "Proceed to checkout", "Tiến hành thanh toán")}
                        </Button>
                    </div>
                </Show>
            </aside>
        </div>
    }
}
