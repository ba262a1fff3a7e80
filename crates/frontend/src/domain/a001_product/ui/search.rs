use contracts::domain::a001_product::aggregate::search_products;
use leptos::prelude::*;
use thaw::*;

use crate::layout::global_context::use_app;
use crate::shared::components::NavLink;
use crate::shared::i18n::tr;
use crate::system::site_data::use_site_data;

/// Быстрый поиск по каталогу (название и бренд, без учёта диакритики)
#[component]
pub fn ProductSearch() -> impl IntoView {
    let app = use_app();
    let site = use_site_data();
    let query = RwSignal::new(String::new());

    let results = Memo::new(move |_| {
        let query = query.get();
        if query.trim().is_empty() {
            return Vec::new();
        }
        site.snapshot.with(|s| {
            search_products(&s.products, &query)
                .into_iter()
                .map(|p| (p.id.clone(), p.name.clone(), p.path()))
                .collect::<Vec<_>>()
        })
    });

    view! {
        <Show when=move || app.search_open.get()>
            <div class="search-overlay">
                <Input
                    value=query
                    placeholder=tr(
                        app.language.get_untracked(),
                        "Search products...",
                        "Tìm kiếm sản phẩm...",
                    )
                />
                <ul class="search-overlay__results">
                    <For
                        each=move || results.get()
                        key=|(id, _, _)| id.clone()
                        children=move |(_, name, path)| {
                            view! {
                                <li on:click=move |_| {
                                    query.set(String::new());
                                    app.close_overlays();
                                }>
                                    <NavLink href=path>{name}</NavLink>
                                </li>
                            }
                        }
                    />
                </ul>
                <Show when=move || {
                    !query.with(|q| q.trim().is_empty()) && results.with(Vec::is_empty)
                }>
                    <p class="search-overlay__empty">
                        {move || tr(app.language.get(), "No results", "Không có kết quả")}
                    </p>
                </Show>
            </div>
        </Show>
    }
}
