use contracts::domain::a005_site_config::aggregate::MenuItem;
use contracts::routing::menu::{category_path, is_menu_item_active, navigation_menu};
use leptos::prelude::*;

use crate::domain::a001_product::ui::search::ProductSearch;
use crate::layout::global_context::use_app;
use crate::shared::components::NavLink;
use crate::shared::i18n::tr;
use crate::system::auth::context::use_admin;
use crate::system::navigation::{use_navigator, use_route};
use crate::system::shopping::{use_cart, use_wishlist};
use crate::system::site_data::use_site_data;

#[component]
pub fn Navbar() -> impl IntoView {
    let app = use_app();
    let admin = use_admin();
    let site = use_site_data();
    let navigator = use_navigator();
    let route = use_route();
    let cart = use_cart();
    let wishlist = use_wishlist();
    let lang = app.lang();
    let cart_count = cart.count();
    let wishlist_count = wishlist.len();

    let menu = Memo::new(move |_| {
        let show_admin = admin.is_admin();
        site.snapshot.with(|s| {
            navigation_menu(&s.config.nav_items, &s.landing_pages, show_admin)
        })
    });
    let logo = Memo::new(move |_| site.snapshot.with(|s| s.config.logo_image_url.clone()));
    let logo_target = Memo::new(move |_| {
        site.snapshot
            .with(|s| category_path(&s.config.logo_redirect))
    });

    // Любой переход закрывает поиск и мобильное меню
    Effect::new(move |_| {
        navigator.path().track();
        app.close_overlays();
    });

    view! {
        <nav class="navbar">
            <div class="navbar__top">
                <button
                    class="navbar__burger"
                    on:click=move |_| app.mobile_menu_open.update(|open| *open = !*open)
                >
                    "☰"
                </button>
                <a
                    class="navbar__logo"
                    href=move || logo_target.get()
                    on:click=move |ev: leptos::ev::MouseEvent| {
                        ev.prevent_default();
                        navigator.navigate(&logo_target.get_untracked());
                    }
                >
                    <img src=move || logo.get() alt="Logo" />
                </a>
                <div class="navbar__actions">
                    <button
                        class="navbar__icon"
                        on:click=move |_| app.search_open.update(|open| *open = !*open)
                    >
                        {move || tr(lang.get(), "Search", "Tìm kiếm")}
                    </button>
                    <button class="navbar__icon" on:click=move |_| app.toggle_language()>
                        {move || lang.get().toggled().code().to_uppercase()}
                    </button>
                    <NavLink href="/history" class="navbar__icon">
                        {move || tr(lang.get(), "History", "Lịch sử")}
                    </NavLink>
                    <button class="navbar__icon" on:click=move |_| wishlist.is_open.set(true)>
                        "♡ " {move || wishlist_count.get()}
                    </button>
                    <button class="navbar__icon" on:click=move |_| cart.is_open.set(true)>
                        {move || tr(lang.get(), "Bag", "Túi")} " (" {move || cart_count.get()} ")"
                    </button>
                </div>
            </div>
            <ul class="navbar__menu" class:open=move || app.mobile_menu_open.get()>
                <For
                    each=move || menu.get()
                    key=|item| item.id.clone()
                    children=move |item: MenuItem| {
                        let href = category_path(&item.target_category);
                        let label = item.label.clone();
                        let is_active = move || {
                            let snapshot = route.get();
                            is_menu_item_active(&item, &snapshot.path, snapshot.category)
                        };
                        view! {
                            <li class="navbar__item" class:active=is_active>
                                <NavLink href=href>{move || label.get(lang.get()).to_string()}</NavLink>
                            </li>
                        }
                    }
                />
            </ul>
            <ProductSearch />
        </nav>
    }
}
