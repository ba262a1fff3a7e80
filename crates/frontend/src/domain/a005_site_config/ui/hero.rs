use std::time::Duration;

use contracts::domain::a005_site_config::banners::{
    banner_groups, next_slide, BannerConfig, BannerMedia, SLIDE_INTERVAL_MS,
};
use contracts::domain::common::{Language, Localized};
use contracts::routing::menu::category_path;
use contracts::routing::ActiveCategory;
use leptos::prelude::*;

use crate::layout::global_context::use_app;
use crate::shared::components::NavLink;
use crate::system::site_data::use_site_data;

/// Баннеры раздела из настроек сайта. Без баннеров ничего не выводит
#[component]
pub fn Hero(category: ActiveCategory) -> impl IntoView {
    let app = use_app();
    let site = use_site_data();
    let lang = app.lang();

    let groups = Memo::new(move |_| site.snapshot.with(|s| banner_groups(&s.config.banners, category)));

    view! {
        <Show when=move || groups.with(|g| !g.is_empty())>
            <section class="hero">
                {move || {
                    groups
                        .get()
                        .into_iter()
                        .map(|(_, slides)| view! { <BannerSlider slides=slides language=lang /> })
                        .collect_view()
                }}
            </section>
        </Show>
    }
}

#[component]
fn BannerSlider(slides: Vec<BannerConfig>, language: Signal<Language>) -> impl IntoView {
    let len = slides.len();
    let current = RwSignal::new(0usize);

    if len > 1 {
        let rotate = move || current.update(|i| *i = next_slide(*i, len));
        match set_interval_with_handle(rotate, Duration::from_millis(u64::from(SLIDE_INTERVAL_MS))) {
            Ok(handle) => on_cleanup(move || handle.clear()),
            Err(e) => log::warn!("Banner slider timer failed: {:?}", e),
        }
    }

    view! {
        <div class="banner-slider">
            {slides
                .into_iter()
                .enumerate()
                .map(|(idx, banner)| {
                    let is_active = Signal::derive(move || current.get() == idx);
                    view! { <Slide banner=banner language=language is_active=is_active /> }
                })
                .collect_view()}
            <Show when=move || (len > 1)>
                <div class="banner-slider__dots">
                    {(0..len)
                        .map(|idx| {
                            view! {
                                <button
                                    class=move || {
                                        if current.get() == idx { "dot dot--active" } else { "dot" }
                                    }
                                    on:click=move |_| current.set(idx)
                                ></button>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>
        </div>
    }
}

#[component]
fn Slide(banner: BannerConfig, language: Signal<Language>, is_active: Signal<bool>) -> impl IntoView {
    let media = match banner.media {
        BannerMedia::Video => view! {
            <video class="banner__media" src=banner.url.clone() autoplay=true loop=true muted=true playsinline=true></video>
        }
        .into_any(),
        BannerMedia::Image => view! { <img class="banner__media" src=banner.url.clone() alt="" /> }.into_any(),
    };
    let secondary = banner.has_secondary_button().then(|| {
        view! {
            <BannerButton
                link=banner.secondary_btn_link.clone()
                label=banner.secondary_btn_text.clone()
                language=language
                class="banner__button banner__button--ghost"
            />
        }
    });
    let title = banner.title.clone();
    let description = banner.description.clone();
    let content_class = format!("banner__content {}", banner.content_position.css_class());

    view! {
        <div class=move || if is_active.get() { "banner banner--active" } else { "banner" }>
            {media}
            <div class=content_class>
                <h2 class="banner__title">{move || title.get(language.get()).to_string()}</h2>
                <p class="banner__desc">{move || description.get(language.get()).to_string()}</p>
                <div class="banner__actions">
                    <BannerButton
                        link=banner.primary_btn_link.clone()
                        label=banner.primary_btn_text.clone()
                        language=language
                        class="banner__button"
                    />
                    {secondary}
                </div>
            </div>
        </div>
    }
}

/// Ссылка кнопки: раздел или путь внутри сайта, либо внешний адрес
#[component]
fn BannerButton(
    link: String,
    label: Localized,
    language: Signal<Language>,
    class: &'static str,
) -> impl IntoView {
    let text = move || label.get(language.get()).to_string();
    if link.starts_with("http://") || link.starts_with("https://") {
        view! { <a href=link class=class>{text}</a> }.into_any()
    } else {
        view! { <NavLink href=category_path(&link) class=class>{text}</NavLink> }.into_any()
    }
}
