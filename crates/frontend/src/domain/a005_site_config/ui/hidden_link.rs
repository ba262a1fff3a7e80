use contracts::domain::a005_site_config::aggregate::HiddenLink;
use leptos::prelude::*;

const IFRAME_ALLOW: &str = "autoplay; clipboard-write; encrypted-media; picture-in-picture; web-share";

/// Скрытая ссылка: внешняя страница во весь экран внутри сайта
#[component]
pub fn HiddenLinkFrame(link: HiddenLink) -> impl IntoView {
    view! {
        <div class="hidden-link">
            <iframe src=link.url title=link.title allow=IFRAME_ALLOW class="hidden-link__frame"></iframe>
        </div>
    }
}
