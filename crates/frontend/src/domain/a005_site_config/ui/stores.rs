use leptos::prelude::*;

use crate::layout::global_context::use_app;
use crate::shared::i18n::tr;
use crate::system::site_data::use_site_data;

/// Страница магазинов: адрес, часы работы и карта
#[component]
pub fn StoresPage() -> impl IntoView {
    let app = use_app();
    let site = use_site_data();
    let lang = app.lang();
    let stores = Memo::new(move |_| site.snapshot.with(|s| s.config.stores_page.clone()));

    view! {
        <section class="stores">
            <div class="stores__info">
                <h2>{move || stores.with(|c| c.title.get(lang.get()).to_string())}</h2>
                <p>{move || stores.with(|c| c.description.get(lang.get()).to_string())}</p>

                <div class="stores__hq">
                    <h3>{move || tr(lang.get(), "Headquarters", "Trụ sở chính")}</h3>
                    <p class="stores__hq-name">{move || stores.with(|c| c.hq_name.clone())}</p>
                    <p>{move || stores.with(|c| c.hq_address.clone())}</p>
                    <p>
                        {move || tr(lang.get(), "Phone", "Điện thoại")} ": "
                        <a href=move || stores.with(|c| format!("tel:{}", c.hq_phone))>
                            {move || stores.with(|c| c.hq_phone.clone())}
                        </a>
                    </p>
                    <p>
                        "Email: "
                        <a href=move || stores.with(|c| format!("mailto:{}", c.hq_email))>
                            {move || stores.with(|c| c.hq_email.clone())}
                        </a>
                    </p>
                </div>

                <div class="stores__hours">
                    <h4>{move || tr(lang.get(), "Opening hours", "Giờ mở cửa")}</h4>
                    <div>
                        <span>{move || tr(lang.get(), "Mon - Sat", "Thứ 2 - Thứ 7")}</span>
                        <span>{move || stores.with(|c| c.opening_hours_weekdays.clone())}</span>
                    </div>
                    <div>
                        <span>{move || tr(lang.get(), "Sunday", "Chủ nhật")}</span>
                        <span>{move || stores.with(|c| c.opening_hours_sunday.clone())}</span>
                    </div>
                </div>

                <a
                    class="button stores__directions"
                    href=move || stores.with(|c| c.map_direction_url.clone())
                    target="_blank"
                    rel="noreferrer"
                >
                    {move || tr(lang.get(), "Get directions on maps", "Chỉ đường trên Google Maps")}
                </a>
            </div>

            <div class="stores__map">
                <iframe
                    {leptos::tachys::html::attribute::custom::custom_attribute("loading", "lazy")}
                    src=move || stores.with(|c| c.map_embed_url.clone())
                    referrerpolicy="no-referrer-when-downgrade"
                    allowfullscreen=true
                ></iframe>
            </div>
        </section>
    }
}
