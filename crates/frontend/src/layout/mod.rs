pub mod drawers;
pub mod footer;
pub mod global_context;
pub mod header;
pub mod home;
pub mod page_renderer;

use leptos::prelude::*;
use thaw::*;

use crate::system::site_data::use_site_data;

/// Каркас витрины.
///
/// ```text
/// +------------------------------------------+
/// |        Navbar (menu, search, icons)      |
/// +------------------------------------------+
/// |      PageRenderer (по ActiveCategory)     |
/// +------------------------------------------+
/// |                 Footer                   |
/// +------------------------------------------+
///   CartDrawer / WishlistDrawer поверх всего
/// ```
///
/// Until the site config arrives only a spinner is shown.
#[component]
pub fn Shell() -> impl IntoView {
    let site = use_site_data();
    let is_loaded = site.is_config_loaded();

    view! {
        <div class="app-layout">
            <header::Navbar />
            <main class="app-main">
                <Show
                    when=move || is_loaded.get()
                    fallback=|| view! {
                        <div class="page-loading">
                            <Spinner />
                        </div>
                    }
                >
                    <page_renderer::PageRenderer />
                </Show>
            </main>
            <drawers::CartDrawer />
            <drawers::WishlistDrawer />
            <footer::Footer />
        </div>
    }
}
