use contracts::routing::{ActiveCategory, MatchedEntity, RouteInfo, RouteSnapshot};
use contracts::shopping::CheckoutMode;
use leptos::prelude::*;

use super::home::{CatalogPage, HomePage};
use crate::domain::a001_product::ui::details::ProductDetailsPage;
use crate::domain::a002_blog::ui::details::BlogDetailsPage;
use crate::domain::a002_blog::ui::list::BlogListPage;
use crate::domain::a003_quotation::ui::form::QuotationForm;
use crate::domain::a003_quotation::ui::history::HistoryPage;
use crate::domain::a004_landing_page::ui::renderer::LandingPageView;
use crate::domain::a005_site_config::ui::hidden_link::HiddenLinkFrame;
use crate::domain::a005_site_config::ui::stores::StoresPage;
use crate::system::navigation::use_route;
use crate::system::pages::admin::AdminPage;

/// Что показывать. Страница перерисовывается только при смене этого значения
#[derive(Clone, PartialEq)]
enum PageKey {
    Page(ActiveCategory),
    /// Product or blog id from the path; an empty id renders "not found".
    Entity(ActiveCategory, String),
    Matched(MatchedEntity),
}

impl PageKey {
    fn of(snapshot: &RouteSnapshot) -> Self {
        if let Some(matched) = &snapshot.matched {
            return PageKey::Matched(matched.clone());
        }
        match (snapshot.category, &snapshot.route) {
            (ActiveCategory::Product, RouteInfo::Product { id }) => {
                PageKey::Entity(ActiveCategory::Product, id.clone())
            }
            (ActiveCategory::Blog, RouteInfo::Blog { id }) => {
                PageKey::Entity(ActiveCategory::Blog, id.clone())
            }
            (category, _) => PageKey::Page(category),
        }
    }
}

fn render_page(category: ActiveCategory, entity_id: Signal<String>) -> AnyView {
    match category {
        // Без найденной сущности сюда не попасть; показываем главную
        ActiveCategory::HiddenLink | ActiveCategory::Landing => view! { <HomePage /> }.into_any(),
        ActiveCategory::Admin => view! { <AdminPage /> }.into_any(),
        ActiveCategory::Product => view! { <ProductDetailsPage product_id=entity_id /> }.into_any(),
        ActiveCategory::Blog => view! { <BlogDetailsPage blog_id=entity_id /> }.into_any(),
        ActiveCategory::Stores => view! { <StoresPage /> }.into_any(),
        ActiveCategory::Quotation => view! { <QuotationForm mode=CheckoutMode::Quotation /> }.into_any(),
        ActiveCategory::Checkout => view! { <QuotationForm mode=CheckoutMode::Checkout /> }.into_any(),
        ActiveCategory::History => view! { <HistoryPage /> }.into_any(),
        ActiveCategory::Men | ActiveCategory::Women => {
            view! { <CatalogPage category=category /> }.into_any()
        }
        ActiveCategory::All => view! { <HomePage /> }.into_any(),
    }
}

/// Выбор страницы по `ActiveCategory` текущего маршрута
#[component]
pub fn PageRenderer() -> impl IntoView {
    let route = use_route();
    let key = Memo::new(move |_| route.with(PageKey::of));

    move || match key.get() {
        PageKey::Matched(MatchedEntity::HiddenLink(link)) => {
            view! { <HiddenLinkFrame link=link /> }.into_any()
        }
        PageKey::Matched(MatchedEntity::LandingPage(page)) => {
            view! { <LandingPageView page=page /> }.into_any()
        }
        PageKey::Entity(category, id) => render_page(category, Signal::stored(id)),
        // `/journal` и `/blog` без id: список статей
        PageKey::Page(ActiveCategory::Blog) => view! { <BlogListPage /> }.into_any(),
        PageKey::Page(category) => render_page(category, Signal::stored(String::new())),
    }
}
