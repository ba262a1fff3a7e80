use leptos::prelude::*;

use crate::system::navigation::use_navigator;

/// `<a>` that navigates inside the app. Modified clicks keep the browser's
/// default so links still open in a new tab.
#[component]
pub fn NavLink(
    #[prop(into)] href: String,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let navigator = use_navigator();
    let target = href.clone();

    let on_click = move |ev: leptos::ev::MouseEvent| {
        if ev.button() != 0 || ev.ctrl_key() || ev.meta_key() || ev.shift_key() || ev.alt_key() {
            return;
        }
        ev.prevent_default();
        navigator.navigate(&target);
    };

    view! {
        <a href=href class=class on:click=on_click>
            {children()}
        </a>
    }
}
