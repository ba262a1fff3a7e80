use chrono::Utc;
use contracts::domain::common::Language;
use contracts::shared::format::format_price;
use contracts::shared::store::Collection;
use contracts::shopping::quotation_draft::{build_quotation, display_items, priced_total, NO_SIZE};
use contracts::shopping::{CheckoutMode, CustomerDetails, QuotationDraftError};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::layout::global_context::use_app;
use crate::shared::components::NavLink;
use crate::shared::i18n::tr;
use crate::shared::store::{DocumentStore, HttpDocumentStore};
use crate::system::auth::storage::shopper_id;
use crate::system::shopping::use_cart;
use crate::system::site_data::use_site_data;

fn draft_error_text(lang: Language, error: &QuotationDraftError) -> &'static str {
    match error {
        QuotationDraftError::MissingName => tr(lang, "Please enter your name.", "Vui lòng nhập họ tên."),
        QuotationDraftError::MissingPhone => {
            tr(lang, "Please enter your phone number.", "Vui lòng nhập số điện thoại.")
        }
        QuotationDraftError::InvalidEmail => tr(lang, "Email address is invalid.", "Email không hợp lệ."),
        QuotationDraftError::NoProducts => tr(
            lang,
            "Please select at least one product.",
            "Vui lòng chọn ít nhất một sản phẩm.",
        ),
    }
}

/// Строка корзины, как она показана в форме
#[derive(Clone, PartialEq)]
struct DraftLine {
    key: String,
    name: String,
    image_url: String,
    size: String,
    quantity: u32,
    /// None для товаров "по запросу"
    amount: Option<f64>,
}

/// Форма заявки (`/quotation`) и оформления заказа (`/checkout`)
#[component]
pub fn QuotationForm(mode: CheckoutMode) -> impl IntoView {
    let app = use_app();
    let cart = use_cart();
    let site = use_site_data();
    let lang = app.lang();

    let name = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let company_name = RwSignal::new(String::new());
    let notes = RwSignal::new(String::new());
    // Товар, выбранный вручную, когда в корзине нечего отправлять
    let picked_product = RwSignal::new(None::<String>);

    let submitting = RwSignal::new(false);
    let submitted = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let lines = Memo::new(move |_| {
        cart.cart.with(|cart| {
            display_items(cart, mode)
                .into_iter()
                .map(|item| DraftLine {
                    key: format!(
                        "{}-{}",
                        item.product.id,
                        item.selected_size.as_deref().unwrap_or_default()
                    ),
                    name: item.product.name.clone(),
                    image_url: item.product.image_url.clone(),
                    size: item.selected_size.clone().unwrap_or_else(|| NO_SIZE.to_string()),
                    quantity: item.quantity,
                    amount: (!item.product.requires_quotation()).then(|| item.line_total()),
                })
                .collect::<Vec<_>>()
        })
    });
    let total = Memo::new(move |_| cart.cart.with(|cart| priced_total(&display_items(cart, mode))));
    let has_priced = move || lines.with(|l| l.iter().any(|line| line.amount.is_some()));

    let quotation_only = Memo::new(move |_| {
        site.snapshot.with(|s| {
            s.visible_products()
                .into_iter()
                .filter(|p| p.requires_quotation())
                .map(|p| (p.id.clone(), p.name.clone(), p.image_url.clone()))
                .collect::<Vec<_>>()
        })
    });

    let on_submit = move |_| {
        if submitting.get_untracked() {
            return;
        }
        let customer = CustomerDetails {
            name: name.get_untracked(),
            phone: phone.get_untracked(),
            email: email.get_untracked(),
            company_name: company_name.get_untracked(),
            notes: notes.get_untracked(),
        };
        let fallback = picked_product.get_untracked().and_then(|id| {
            site.snapshot
                .with_untracked(|s| s.products.iter().find(|p| p.id == id).cloned())
        });
        let owner = shopper_id();
        let built = cart.cart.with_untracked(|cart| {
            build_quotation(cart, mode, &customer, fallback.as_ref(), Some(&owner), Utc::now())
        });
        let request = match built {
            Ok(request) => request,
            Err(e) => {
                error.set(Some(draft_error_text(lang.get_untracked(), &e).to_string()));
                return;
            }
        };
        let document = match serde_json::to_value(&request) {
            Ok(document) => document,
            Err(e) => {
                log::error!("Failed to serialize quotation {}: {}", request.id, e);
                return;
            }
        };

        error.set(None);
        submitting.set(true);
        spawn_local(async move {
            let store = HttpDocumentStore::new();
            match store.upsert(Collection::Quotations, &request.id, &document).await {
                Ok(_) => {
                    log::info!("Quotation {} submitted", request.id);
                    cart.clear();
                    submitted.set(true);
                }
                Err(e) => {
                    log::error!("Failed to submit quotation {}: {}", request.id, e);
                    error.set(Some(
                        tr(
                            lang.get_untracked(),
                            "An error occurred, please try again.",
                            "Có lỗi xảy ra, vui lòng thử lại.",
                        )
                        .to_string(),
                    ));
                }
            }
            submitting.set(false);
        });
    };

    let title = move || match mode {
        CheckoutMode::Checkout => tr(lang.get(), "Checkout", "Xác nhận thanh toán"),
        CheckoutMode::Quotation if lines.with(|l| l.is_empty()) => {
            tr(lang.get(), "Get a quotation", "Yêu cầu báo giá")
        }
        CheckoutMode::Quotation => tr(lang.get(), "Inquiry request", "Yêu cầu báo giá"),
    };

    view! {
        <Show
            when=move || !submitted.get()
            fallback=move || view! {
                <section class="quotation-sent">
                    <h2>{move || tr(lang.get(), "Successfully sent", "Gửi thành công")}</h2>
                    <p>
                        {move || tr(
                            lang.get(),
                            "We have received your request and will respond shortly.",
                            "Chúng tôi đã nhận được thông tin và sẽ phản hồi sớm nhất.",
                        )}
                    </p>
                    <NavLink href="/" class="button">
                        {move || tr(lang.get(), "Back to home", "Quay lại trang chủ")}
                    </NavLink>
                </section>
            }
        >
            <section class="quotation-form">
                <h1 class="quotation-form__title">{title}</h1>
                <div class="quotation-form__grid">
                    <div class="quotation-form__products">
                        <h3>{move || tr(lang.get(), "1. Products", "1. Sản phẩm")}</h3>
                        <Show
                            when=move || lines.with(|l| !l.is_empty())
                            fallback=move || view! {
                                <div class="product-picker">
                                    <For
                                        each=move || quotation_only.get()
                                        key=|(id, _, _)| id.clone()
                                        children=move |(id, name, image_url)| {
                                            let selected_id = id.clone();
                                            let is_selected = move || {
                                                picked_product.get().as_deref() == Some(selected_id.as_str())
                                            };
                                            view! {
                                                <div
                                                    class="product-picker__item"
                                                    class:active=is_selected
                                                    on:click=move |_| {
                                                        let id = id.clone();
                                                        picked_product.update(|p| {
                                                            *p = if p.as_deref() == Some(id.as_str()) { None } else { Some(id) };
                                                        });
                                                    }
                                                >
                                                    <img src=image_url alt="" />
                                                    <span>{name}</span>
                                                </div>
                                            }
                                        }
                                    />
                                </div>
                            }
                        >
                            <ul class="draft-lines">
                                <For
                                    each=move || lines.get()
                                    key=|line| line.key.clone()
                                    children=move |line: DraftLine| {
                                        let amount = line.amount;
                                        view! {
                                            <li class="draft-line">
                                                <img src=line.image_url alt="" />
                                                <div>
                                                    <h4>{line.name}</h4>
                                                    <p>{format!("Size: {} | SL: {}", line.size, line.quantity)}</p>
                                                    <p class="draft-line__amount">
                                                        {move || match amount {
                                                            Some(amount) => format_price(amount),
                                                            None => tr(lang.get(), "Quote", "Báo giá").to_string(),
                                                        }}
                                                    </p>
                                                </div>
                                            </li>
                                        }
                                    }
                                />
                            </ul>
                        </Show>
                        <Show when=has_priced>
                            <div class="quotation-form__total">
                                <span>{move || tr(lang.get(), "Total", "Tổng cộng")}</span>
                                <strong>{move || format_price(total.get())}</strong>
                            </div>
                        </Show>
                    </div>

                    <div class="quotation-form__customer">
                        <h3>{move || tr(lang.get(), "2. Your details", "2. Thông tin liên hệ")}</h3>
                        <Input value=name placeholder=tr(lang.get_untracked(), "Full name *", "Họ và tên *") />
                        <Input value=phone placeholder=tr(lang.get_untracked(), "Phone *", "Số điện thoại *") />
                        <Input value=email placeholder="Email" />
                        <Input value=company_name placeholder=tr(lang.get_untracked(), "Company", "Công ty") />
                        <Textarea value=notes placeholder=tr(lang.get_untracked(), "Notes", "Ghi chú") attr:rows=4 />
                        {move || error.get().map(|e| view! { <p class="form-error">{e}</p> })}
                        <Button
                            appearance=ButtonAppearance::Primary
                            loading=submitting
                            on_click=on_submit
                        >
                            {move || match mode {
                                CheckoutMode::Checkout => tr(lang.get(), "Place order", "Đặt hàng"),
                                CheckoutMode::Quotation => tr(lang.get(), "Send request", "Gửi yêu cầu"),
                            }}
                        </Button>
                    </div>
                </div>
            </section>
        </Show>
    }
}
