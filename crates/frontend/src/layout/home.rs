use contracts::domain::a001_product::aggregate::Product;
use contracts::domain::a002_blog::aggregate::sort_newest_first;
use contracts::routing::ActiveCategory;
use leptos::prelude::*;

use crate::domain::a001_product::ui::grid::ProductGrid;
use crate::domain::a002_blog::ui::list::BlogCards;
use crate::domain::a005_site_config::ui::hero::Hero;
use crate::layout::global_context::use_app;
use crate::shared::components::NavLink;
use crate::shared::i18n::tr;
use crate::system::site_data::use_site_data;

const NEW_ARRIVALS: usize = 8;
const LATEST_STORIES: usize = 3;

/// Главная (`/` и все неизвестные адреса)
#[component]
pub fn HomePage() -> impl IntoView {
    let app = use_app();
    let site = use_site_data();
    let lang = app.lang();

    let arrivals = Signal::derive(move || {
        site.snapshot.with(|s| {
            s.visible_products()
                .into_iter()
                .take(NEW_ARRIVALS)
                .cloned()
                .collect::<Vec<Product>>()
        })
    });
    let stories = Signal::derive(move || {
        let mut blogs = site.snapshot.with(|s| s.blogs.clone());
        sort_newest_first(&mut blogs);
        blogs.truncate(LATEST_STORIES);
        blogs
    });

    view! {
        <Hero category=ActiveCategory::All />
        <section class="home-section">
            <div class="home-section__header">
                <h2>{move || tr(lang.get(), "New arrivals", "Hàng mới về")}</h2>
                <NavLink href="/men" class="home-section__more">
                    {move || tr(lang.get(), "View all", "Xem tất cả")}
                </NavLink>
            </div>
            <ProductGrid products=arrivals language=lang />
        </section>
        <Show when=move || stories.with(|s| !s.is_empty())>
            <section class="home-section">
                <div class="home-section__header">
                    <h2>{move || tr(lang.get(), "Journal", "Tạp chí")}</h2>
                    <NavLink href="/journal" class="home-section__more">
                        {move || tr(lang.get(), "View all", "Xem tất cả")}
                    </NavLink>
                </div>
                <BlogCards blogs=stories language=lang />
            </section>
        </Show>
    }
}

/// Каталог одной категории (`/men`, `/women`)
#[component]
pub fn CatalogPage(category: ActiveCategory) -> impl IntoView {
    let app = use_app();
    let site = use_site_data();
    let lang = app.lang();
    let catalog = category.catalog_category().unwrap_or_default();

    let products = Signal::derive(move || {
        site.snapshot.with(|s| {
            s.visible_products()
                .into_iter()
                .filter(|p| p.in_category(catalog))
                .cloned()
                .collect::<Vec<Product>>()
        })
    });

    let title = move || match category {
        ActiveCategory::Women => tr(lang.get(), "Women", "Nữ"),
        _ => tr(lang.get(), "Men", "Nam"),
    };

    view! {
        <Hero category=category />
        <section class="catalog">
            <header class="catalog__header">
                <h1 class="catalog__title">{title}</h1>
                <p class="catalog__subtitle">
                    {move || tr(lang.get(), "Discover the signature collection", "Khám phá bộ sưu tập")}
                </p>
            </header>
            <ProductGrid products=products language=lang />
        </section>
    }
}
