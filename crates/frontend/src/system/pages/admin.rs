use contracts::domain::a003_quotation::aggregate::QuotationRequest;
use contracts::shared::store::{Collection, StoreError};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::layout::global_context::use_app;
use crate::shared::i18n::tr;
use crate::shared::store::{DocumentStore, HttpDocumentStore};
use crate::system::auth::context::use_admin;
use crate::system::site_data::use_site_data;

/// Подписки открываются с правами на момент запуска, поэтому после входа
/// и выхода страница перезагружается
fn reload_page() {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.location().reload() {
            log::error!("Failed to reload page: {:?}", e);
        }
    }
}

#[component]
pub fn AdminPage() -> impl IntoView {
    let admin = use_admin();

    move || {
        if admin.is_admin() {
            view! { <AdminOverview /> }.into_any()
        } else {
            view! { <AdminSignIn /> }.into_any()
        }
    }
}

#[component]
fn AdminSignIn() -> impl IntoView {
    let app = use_app();
    let admin = use_admin();
    let lang = app.lang();

    let token = RwSignal::new(String::new());
    let error_message = RwSignal::new(None::<String>);
    let is_loading = RwSignal::new(false);

    let on_submit = move |_| {
        let value = token.get_untracked();
        if value.trim().is_empty() {
            return;
        }
        is_loading.set(true);
        error_message.set(None);
        admin.sign_in(&value);

        // Проверка токена: полный список заявок доступен только администратору
        spawn_local(async move {
            let result = HttpDocumentStore::new()
                .get_collection_once(Collection::Quotations)
                .await;
            match result {
                Ok(_) => {
                    log::info!("Admin signed in");
                    reload_page();
                }
                Err(e) => {
                    admin.sign_out();
                    let message = match e {
                        StoreError::PermissionDenied => {
                            tr(lang.get_untracked(), "Access denied", "Truy cập bị từ chối").to_string()
                        }
                        other => other.to_string(),
                    };
                    error_message.set(Some(message));
                }
            }
            is_loading.set(false);
        });
    };

    view! {
        <section class="admin-sign-in">
            <h2>{move || tr(lang.get(), "Administration", "Quản trị")}</h2>
            <Show when=move || error_message.get().is_some()>
                <div class="error-message">{move || error_message.get().unwrap_or_default()}</div>
            </Show>
            <Input value=token input_type=InputType::Password placeholder="Admin token" />
            <Button appearance=ButtonAppearance::Primary loading=is_loading on_click=on_submit>
                {move || tr(lang.get(), "Sign in", "Đăng nhập")}
            </Button>
        </section>
    }
}

#[component]
fn AdminOverview() -> impl IntoView {
    let app = use_app();
    let admin = use_admin();
    let site = use_site_data();
    let lang = app.lang();

    let counts = Memo::new(move |_| {
        site.snapshot.with(|s| {
            vec![
                ("Products", "Sản phẩm", s.products.len()),
                ("Blogs", "Bài viết", s.blogs.len()),
                ("Quotations", "Báo giá", s.quotations.len()),
                ("Landing pages", "Trang đích", s.landing_pages.len()),
            ]
        })
    });

    let action_error = RwSignal::new(None::<String>);
    let delete_quotation = move |id: String| {
        spawn_local(async move {
            match HttpDocumentStore::new().remove(Collection::Quotations, &id).await {
                Ok(()) => {
                    log::info!("Quotation {} deleted", id);
                    // подписка подтвердит удаление при следующем опросе
                    site.snapshot.update(|s| s.quotations.retain(|q| q.id != id));
                    action_error.set(None);
                }
                Err(e) => {
                    log::error!("Failed to delete quotation {}: {}", id, e);
                    action_error.set(Some(e.to_string()));
                }
            }
        });
    };

    let quotations = Memo::new(move |_| {
        site.snapshot.with(|s| {
            let mut items = s.quotations.clone();
            items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
            items
        })
    });

    view! {
        <section class="admin">
            <div class="admin__header">
                <h2>{move || tr(lang.get(), "Administration", "Quản trị")}</h2>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| {
                        admin.sign_out();
                        reload_page();
                    }
                >
                    {move || tr(lang.get(), "Sign out", "Đăng xuất")}
                </Button>
            </div>

            {move || {
                site.permission_error.get().map(|collection| view! {
                    <div class="error-message">
                        {tr(lang.get(), "No permission to read: ", "Không có quyền đọc: ")}
                        {collection.name()}
                    </div>
                })
            }}

            <div class="admin__stats">
                <For
                    each=move || counts.get()
                    key=|(en, _, count)| (*en, *count)
                    children=move |(en, vi, count)| view! {
                        <div class="stat-card">
                            <span class="stat-card__label">{move || tr(lang.get(), en, vi)}</span>
                            <span class="stat-card__value">{count}</span>
                        </div>
                    }
                />
            </div>

            <h3>{move || tr(lang.get(), "Quotations", "Báo giá")}</h3>
            <Show when=move || action_error.get().is_some()>
                <div class="error-message">{move || action_error.get().unwrap_or_default()}</div>
            </Show>
            <table class="admin__table">
                <thead>
                    <tr>
                        <th>"ID"</th>
                        <th>{move || tr(lang.get(), "Customer", "Khách hàng")}</th>
                        <th>{move || tr(lang.get(), "Phone", "Điện thoại")}</th>
                        <th>{move || tr(lang.get(), "Products", "Sản phẩm")}</th>
                        <th>{move || tr(lang.get(), "Status", "Trạng thái")}</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || quotations.get()
                        key=|q| q.id.clone()
                        children=move |q: QuotationRequest| {
                            let id = q.id.clone();
                            view! {
                                <tr>
                                    <td>{q.id.clone()}</td>
                                    <td>{q.customer_name.clone()}</td>
                                    <td>{q.phone.clone()}</td>
                                    <td>{q.product_names.join(", ")}</td>
                                    <td>{q.status.display_name()}</td>
                                    <td>
                                        <Button
                                            appearance=ButtonAppearance::Subtle
                                            on_click=move |_| delete_quotation(id.clone())
                                        >
                                            {move || tr(lang.get(), "Delete", "Xóa")}
                                        </Button>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </section>
    }
}
