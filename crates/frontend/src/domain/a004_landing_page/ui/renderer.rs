use contracts::domain::a004_landing_page::aggregate::{BlockKind, BlockLayout, LandingPage, LpBlock};
use contracts::domain::common::{Language, Localized};
use leptos::prelude::*;

use crate::layout::global_context::use_app;
use crate::shared::components::NavLink;

/// CSS-класс анимации появления блока
fn animation_class(animation: &str) -> &'static str {
    match animation {
        "fade-in" => "anim-fade-in",
        "zoom-in" => "anim-zoom-in",
        _ => "anim-reveal",
    }
}

/// Посадочная страница: блоки по порядку. Неактивная страница не рисуется
#[component]
pub fn LandingPageView(page: LandingPage) -> impl IntoView {
    if !page.is_active {
        return ().into_any();
    }
    view! {
        <div class="landing-page">
            {page
                .blocks
                .into_iter()
                .map(|block| view! { <Block block=block /> })
                .collect_view()}
        </div>
    }
    .into_any()
}

fn text(value: &Localized, lang: Language) -> String {
    value.get(lang).to_string()
}

#[component]
fn Block(block: LpBlock) -> impl IntoView {
    let app = use_app();
    let lang = app.lang();
    let anim = animation_class(&block.animation);
    let LpBlock {
        kind,
        title,
        content,
        image_url,
        video_url,
        button_text,
        button_link,
        layout,
        ..
    } = block;
    let image_url = image_url.unwrap_or_default();
    let title_text = {
        let title = title.clone();
        move || text(&title, lang.get())
    };
    let content_text = {
        let content = content.clone();
        move || text(&content, lang.get())
    };
    let button = move || {
        let label = text(&button_text, lang.get());
        let href = button_link.clone().unwrap_or_else(|| "#".to_string());
        (!label.is_empty()).then(|| view! { <BlockLink href=href label=label /> })
    };

    match kind {
        BlockKind::Hero | BlockKind::VideoBackground => {
            let background = match (kind, video_url) {
                (BlockKind::VideoBackground, Some(src)) if !src.is_empty() => view! {
                    <video autoplay=true loop=true muted=true playsinline=true>
                        <source src=src type="video/mp4" />
                    </video>
                }
                .into_any(),
                _ => view! { <img src=image_url alt="" /> }.into_any(),
            };
            view! {
                <section class="lp-block lp-hero">
                    <div class="lp-hero__background">{background}</div>
                    <div class=format!("lp-hero__content {anim}")>
                        <h1>{title_text}</h1>
                        <p>{content_text}</p>
                        {button}
                    </div>
                </section>
            }
            .into_any()
        }
        BlockKind::ImageText => view! {
            <section class="lp-block lp-image-text" class:lp-image-text--right=layout == BlockLayout::Right>
                <div class=format!("lp-image-text__image {anim}")>
                    <img src=image_url alt="" />
                </div>
                <div class="lp-image-text__body">
                    <h2>{title_text}</h2>
                    <p>{content_text}</p>
                    {button}
                </div>
            </section>
        }
        .into_any(),
        BlockKind::FullImage => {
            let has_caption = !title.is_empty() || !content.is_empty();
            view! {
                <section class="lp-block lp-full-image">
                    <div class=format!("lp-full-image__image {anim}")>
                        <img src=image_url alt="" />
                    </div>
                    <Show when=move || has_caption>
                        <div class="lp-full-image__caption">
                            <h2>{title_text.clone()}</h2>
                            <p>{content_text.clone()}</p>
                        </div>
                    </Show>
                </section>
            }
            .into_any()
        }
        BlockKind::CallToAction => view! {
            <section class="lp-block lp-cta">
                <div class=format!("lp-cta__content {anim}")>
                    <h2>{title_text}</h2>
                    <p>{content_text}</p>
                    {button}
                </div>
            </section>
        }
        .into_any(),
        BlockKind::Unknown => {
            log::warn!("Skipping landing page block of unknown type");
            ().into_any()
        }
    }
}

/// Внутренние ссылки идут через навигатор, внешние открываются как обычно
#[component]
fn BlockLink(href: String, label: String) -> impl IntoView {
    if href.starts_with('/') {
        view! { <NavLink href=href class="lp-button">{label}</NavLink> }.into_any()
    } else {
        view! { <a href=href class="lp-button">{label}</a> }.into_any()
    }
}
