use contracts::domain::a003_quotation::aggregate::{QuotationKind, QuotationRequest};
use contracts::shared::format::format_price;
use leptos::prelude::*;
use thaw::*;

use crate::layout::global_context::use_app;
use crate::shared::i18n::tr;
use crate::system::auth::storage::shopper_id;
use crate::system::site_data::use_site_data;

#[derive(Clone, Copy, PartialEq, Eq)]
enum HistoryTab {
    Orders,
    Quotations,
}

/// История заказов и заявок текущего покупателя
#[component]
pub fn HistoryPage() -> impl IntoView {
    let app = use_app();
    let site = use_site_data();
    let lang = app.lang();
    let tab = RwSignal::new(HistoryTab::Orders);
    let owner = shopper_id();

    let entries = Memo::new(move |_| {
        let kind = match tab.get() {
            HistoryTab::Orders => QuotationKind::Order,
            HistoryTab::Quotations => QuotationKind::Inquiry,
        };
        site.snapshot.with(|s| {
            QuotationRequest::history_for(&s.quotations, &owner)
                .into_iter()
                .filter(|q| q.kind == kind)
                .cloned()
                .collect::<Vec<_>>()
        })
    });

    let tab_button = move |value: HistoryTab, en: &'static str, vi: &'static str| {
        view! {
            <Button
                appearance=Signal::derive(move || {
                    if tab.get() == value {
                        ButtonAppearance::Primary
                    } else {
                        ButtonAppearance::Subtle
                    }
                })
                on_click=move |_| tab.set(value)
            >
                {move || tr(lang.get(), en, vi)}
            </Button>
        }
    };

    view! {
        <section class="history">
            <h1>{move || tr(lang.get(), "My history", "Lịch sử của tôi")}</h1>
            <div class="history__tabs">
                {tab_button(HistoryTab::Orders, "Orders", "Đơn hàng")}
                {tab_button(HistoryTab::Quotations, "Quotations", "Báo giá")}
            </div>
            <Show
                when=move || entries.with(|e| !e.is_empty())
                fallback=move || view! {
                    <p class="empty-state">{move || tr(lang.get(), "Nothing here yet", "Chưa có dữ liệu")}</p>
                }
            >
                <ul class="history__list">
                    <For
                        each=move || entries.get()
                        key=|q| q.id.clone()
                        children=move |q: QuotationRequest| view! { <HistoryEntry request=q /> }
                    />
                </ul>
            </Show>
        </section>
    }
}

#[component]
fn HistoryEntry(request: QuotationRequest) -> impl IntoView {
    let created = request.created_at.format("%d/%m/%Y %H:%M").to_string();
    let total = request
        .total_amount
        .filter(|t| *t > 0.0)
        .map(format_price);
    let products = request.product_names.join(", ");

    view! {
        <li class="history-entry">
            <div class="history-entry__head">
                <strong>{request.id.clone()}</strong>
                <Badge>{request.status.display_name()}</Badge>
            </div>
            <span class="history-entry__date">{created}</span>
            <p class="history-entry__products">{products}</p>
            {total.map(|t| view! { <span class="history-entry__total">{t}</span> })}
        </li>
    }
}
