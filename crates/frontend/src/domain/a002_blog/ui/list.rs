use contracts::domain::a002_blog::aggregate::{sort_newest_first, Blog};
use contracts::domain::common::Language;
use contracts::routing::ActiveCategory;
use leptos::prelude::*;

use crate::domain::a005_site_config::ui::hero::Hero;
use crate::layout::global_context::use_app;
use crate::shared::components::NavLink;
use crate::shared::i18n::tr;
use crate::system::site_data::use_site_data;

/// Журнал: все статьи, новые сверху
#[component]
pub fn BlogListPage() -> impl IntoView {
    let app = use_app();
    let site = use_site_data();
    let lang = app.lang();

    let blogs = Memo::new(move |_| {
        let mut blogs = site.snapshot.with(|s| s.blogs.clone());
        sort_newest_first(&mut blogs);
        blogs
    });

    view! {
        <Hero category=ActiveCategory::Blog />
        <section class="journal">
            <h1 class="journal__title">{move || tr(lang.get(), "Journal", "Tạp chí")}</h1>
            <BlogCards blogs=Signal::derive(move || blogs.get()) language=lang />
        </section>
    }
}

#[component]
pub fn BlogCards(
    #[prop(into)] blogs: Signal<Vec<Blog>>,
    #[prop(into)] language: Signal<Language>,
) -> impl IntoView {
    view! {
        <Show
            when=move || blogs.with(|b| !b.is_empty())
            fallback=move || view! {
                <p class="empty-state">
                    {move || tr(language.get(), "No stories yet", "Chưa có bài viết")}
                </p>
            }
        >
            <div class="blog-grid">
                <For
                    each=move || blogs.get()
                    key=|b| b.id.clone()
                    children=move |blog: Blog| {
                        let title = blog.clone();
                        let short = blog.clone();
                        let image_url = blog.image_url.clone();
                        view! {
                            <article class="blog-card">
                                <NavLink href=blog.path() class="blog-card__image">
                                    <img src=image_url alt="" loading="lazy" />
                                </NavLink>
                                <span class="blog-card__date">{blog.date.clone()}</span>
                                <NavLink href=blog.path() class="blog-card__title">
                                    {move || title.title_in(language.get()).to_string()}
                                </NavLink>
                                <p class="blog-card__desc">
                                    {move || short.short_desc.get(language.get()).to_string()}
                                </p>
                            </article>
                        }
                    }
                />
            </div>
        </Show>
    }
}
