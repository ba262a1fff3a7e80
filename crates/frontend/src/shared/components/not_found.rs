use leptos::prelude::*;

use super::NavLink;
use crate::layout::global_context::use_app;
use crate::shared::i18n::tr;

/// Товар или статья с таким id не найдены
#[component]
pub fn NotFound(#[prop(into)] message: Signal<&'static str>) -> impl IntoView {
    let app = use_app();
    view! {
        <section class="not-found">
            <h1>{move || message.get()}</h1>
            <NavLink href="/" class="not-found__back">
                {move || tr(app.language.get(), "Back to home", "Về trang chủ")}
            </NavLink>
        </section>
    }
}
