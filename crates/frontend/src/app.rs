use contracts::shared::seo::page_seo;
use leptos::prelude::*;

use crate::layout::global_context::AppGlobalContext;
use crate::layout::Shell;
use crate::shared::document_meta::apply_seo;
use crate::system::auth::context::AdminSession;
use crate::system::auth::storage::shopper_id;
use crate::system::navigation::Navigator;
use crate::system::shopping::{CartContext, WishlistContext};
use crate::system::site_data::SiteData;

#[component]
pub fn App() -> impl IntoView {
    let app = AppGlobalContext::new();
    provide_context(app);

    let admin = AdminSession::new();
    provide_context(admin);

    // Администратор видит все заявки, покупатель только свои
    let site = SiteData::new();
    let owner = admin.token.with_untracked(Option::is_none).then(shopper_id);
    site.attach(owner);
    provide_context(site);

    let navigator = Navigator::new();
    navigator.attach();
    provide_context(navigator);
    let route = navigator.snapshot(site);
    provide_context(route);

    provide_context(CartContext::new());
    provide_context(WishlistContext::new());

    Effect::new(move |_| {
        let lang = app.language.get();
        let meta = route.with(|snapshot| {
            site.snapshot
                .with(|s| page_seo(snapshot, &s.products, &s.blogs, lang))
        });
        apply_seo(&meta);
    });

    view! { <Shell /> }
}
