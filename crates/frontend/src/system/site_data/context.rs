use contracts::domain::a001_product::aggregate::Product;
use contracts::domain::a002_blog::aggregate::Blog;
use contracts::domain::a003_quotation::aggregate::QuotationRequest;
use contracts::domain::a004_landing_page::aggregate::LandingPage;
use contracts::domain::a005_site_config::aggregate::SiteConfig;
use contracts::shared::site_snapshot::{SiteSnapshot, SiteUpdate};
use contracts::shared::store::{decode_documents, Collection, StoreError, SITE_CONFIG_ID};
use leptos::prelude::*;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::shared::store::{subscribe, subscribe_one, HttpDocumentStore, Subscription};

/// Read-model всех коллекций сайта. Каждая подписка заменяет свой срез целиком
#[derive(Clone, Copy)]
pub struct SiteData {
    pub snapshot: RwSignal<SiteSnapshot>,
    /// Set when the backend refused a subscription for lack of rights.
    pub permission_error: RwSignal<Option<Collection>>,
}

impl SiteData {
    pub fn new() -> Self {
        Self {
            snapshot: RwSignal::new(SiteSnapshot::default()),
            permission_error: RwSignal::new(None),
        }
    }

    pub fn is_config_loaded(&self) -> Signal<bool> {
        let snapshot = self.snapshot;
        Signal::derive(move || snapshot.with(|s| s.is_config_loaded))
    }

    fn apply(&self, update: SiteUpdate) {
        self.snapshot.update(|s| s.apply(update));
    }

    fn report(&self, collection: Collection, error: StoreError) {
        if error.is_permission_denied() {
            log::warn!("{}: permission denied", collection.name());
            self.permission_error.set(Some(collection));
        } else {
            log::warn!("{}: subscription error: {}", collection.name(), error);
        }
    }

    /// Открывает пять подписок; они закрываются вместе с владельцем.
    /// `owner` ограничивает заявки покупателем (для не-администратора).
    pub fn attach(&self, owner: Option<String>) {
        let this = *self;
        let store = HttpDocumentStore::new();
        let quotation_store = match owner {
            Some(owner) => HttpDocumentStore::with_owner(owner),
            None => HttpDocumentStore::new(),
        };

        let subscriptions: Vec<Subscription> = vec![
            subscribe_one(
                store.clone(),
                Collection::Config,
                SITE_CONFIG_ID,
                move |doc| this.apply(SiteUpdate::Config(doc.map(decode_config))),
                move |e| this.report(Collection::Config, e),
            ),
            subscribe(
                store.clone(),
                Collection::Products,
                move |docs| this.apply(SiteUpdate::Products(decode_slice::<Product>(Collection::Products, &docs))),
                move |e| this.report(Collection::Products, e),
            ),
            subscribe(
                store.clone(),
                Collection::Blogs,
                move |docs| this.apply(SiteUpdate::Blogs(decode_slice::<Blog>(Collection::Blogs, &docs))),
                move |e| this.report(Collection::Blogs, e),
            ),
            subscribe(
                quotation_store,
                Collection::Quotations,
                move |docs| {
                    this.apply(SiteUpdate::Quotations(decode_slice::<QuotationRequest>(
                        Collection::Quotations,
                        &docs,
                    )))
                },
                move |e| this.report(Collection::Quotations, e),
            ),
            subscribe(
                store,
                Collection::LandingPages,
                move |docs| {
                    this.apply(SiteUpdate::LandingPages(decode_slice::<LandingPage>(
                        Collection::LandingPages,
                        &docs,
                    )))
                },
                move |e| this.report(Collection::LandingPages, e),
            ),
        ];

        on_cleanup(move || drop(subscriptions));
    }
}

impl Default for SiteData {
    fn default() -> Self {
        Self::new()
    }
}

fn decode_slice<T: DeserializeOwned>(collection: Collection, docs: &[Value]) -> Vec<T> {
    let decoded = decode_documents::<T>(docs);
    for (id, err) in &decoded.rejected {
        log::warn!("{}/{}: skipped malformed document: {}", collection.name(), id, err);
    }
    decoded.items
}

/// Битый документ конфигурации заменяется настройками по умолчанию
fn decode_config(doc: Value) -> SiteConfig {
    serde_json::from_value::<SiteConfig>(doc).unwrap_or_else(|e| {
        log::warn!("config/{}: malformed document: {}", SITE_CONFIG_ID, e);
        SiteConfig::default()
    })
}

pub fn use_site_data() -> SiteData {
    use_context::<SiteData>().expect("SiteData not found in component tree")
}
