use contracts::domain::a002_blog::aggregate::{find_blog, sort_newest_first, Blog};
use leptos::prelude::*;

use super::list::BlogCards;
use super::video_embed_url;
use crate::layout::global_context::use_app;
use crate::shared::components::{NavLink, NotFound};
use crate::shared::i18n::tr;
use crate::system::site_data::use_site_data;

const OTHER_STORIES: usize = 3;

#[component]
pub fn BlogDetailsPage(#[prop(into)] blog_id: Signal<String>) -> impl IntoView {
    let app = use_app();
    let site = use_site_data();

    let blog = Memo::new(move |_| {
        let id = blog_id.get();
        site.snapshot.with(|s| find_blog(&s.blogs, &id).cloned())
    });

    move || match blog.get() {
        Some(blog) => view! { <BlogArticle blog=blog /> }.into_any(),
        None => view! {
            <NotFound message=Signal::derive(move || {
                tr(app.language.get(), "Story not found", "Không tìm thấy bài viết")
            }) />
        }
        .into_any(),
    }
}

#[component]
fn BlogArticle(blog: Blog) -> impl IntoView {
    let app = use_app();
    let site = use_site_data();
    let lang = app.lang();

    let others = {
        let id = blog.id.clone();
        Signal::derive(move || {
            let mut blogs: Vec<Blog> =
                site.snapshot.with(|s| s.blogs.iter().filter(|b| b.id != id).cloned().collect());
            sort_newest_first(&mut blogs);
            blogs.truncate(OTHER_STORIES);
            blogs
        })
    };

    let embed = blog.video_url.as_deref().and_then(video_embed_url);
    let image_url = blog.image_url.clone();
    let category = blog.category.clone();
    let title = blog.title.clone();
    let content = blog.content.clone();
    let byline = format!("{} · {}", blog.date, blog.author);

    view! {
        <article class="blog-article">
            <NavLink href="/journal" class="blog-article__back">
                {move || tr(lang.get(), "Back to journal", "Quay lại danh sách")}
            </NavLink>
            <div class="blog-article__meta">
                <span class="blog-article__category">
                    {move || {
                        category
                            .as_ref()
                            .map(|c| c.get(lang.get()).to_string())
                            .filter(|c| !c.is_empty())
                            .unwrap_or_else(|| "NEWS".to_string())
                    }}
                </span>
                <span class="blog-article__byline">{byline}</span>
            </div>
            <h1 class="blog-article__title">{move || title.get(lang.get()).to_string()}</h1>
            <div class="blog-article__media">
                {match embed {
                    Some(src) => view! { <iframe src=src allowfullscreen=true></iframe> }.into_any(),
                    None => view! { <img src=image_url alt="" /> }.into_any(),
                }}
            </div>
            <div class="blog-article__content" inner_html=move || content.get(lang.get()).to_string()></div>
        </article>

        <Show when=move || others.with(|o| !o.is_empty())>
            <section class="blog-article__others">
                <h3>{move || tr(lang.get(), "Other stories", "Tin tức khác")}</h3>
                <BlogCards blogs=others language=lang />
            </section>
        </Show>
    }
}
