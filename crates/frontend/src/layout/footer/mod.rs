use leptos::prelude::*;

use crate::layout::global_context::use_app;
use crate::shared::components::NavLink;
use crate::shared::i18n::tr;
use crate::system::site_data::use_site_data;

#[component]
pub fn Footer() -> impl IntoView {
    let app = use_app();
    let site = use_site_data();
    let lang = app.lang();
    let config = Memo::new(move |_| site.snapshot.with(|s| s.config.clone()));

    let zalo = move || {
        config.with(|c| {
            c.contact_zalo
                .clone()
                .filter(|url| c.show_zalo && !url.is_empty())
        })
    };
    let facebook = move || {
        config.with(|c| {
            c.contact_facebook
                .clone()
                .filter(|url| c.show_facebook && !url.is_empty())
        })
    };

    view! {
        <footer class="footer">
            <div class="footer__grid">
                <div class="footer__contact">
                    <NavLink href="/" class="footer__logo">
                        <img src=move || config.with(|c| c.logo_image_url.clone()) alt="Logo" />
                    </NavLink>
                    <p>
                        <span>{move || tr(lang.get(), "Phone", "Điện thoại")} ": "</span>
                        {move || config.with(|c| c.contact_phone.clone())}
                    </p>
                    <p>
                        <span>"Email: "</span>
                        {move || config.with(|c| c.contact_email.clone())}
                    </p>
                    <p>
                        <span>{move || tr(lang.get(), "Headquarters", "Trụ sở chính")} ": "</span>
                        {move || config.with(|c| c.contact_hq.clone())}
                    </p>
                </div>
                <div class="footer__links">
                    <h4>{move || tr(lang.get(), "About us", "Về chúng tôi")}</h4>
                    <ul>
                        <li><NavLink href="/">{move || tr(lang.get(), "Introduction", "Giới thiệu")}</NavLink></li>
                        <li><NavLink href="/stores">{move || tr(lang.get(), "Stores", "Cửa hàng")}</NavLink></li>
                        <li><NavLink href="/men">{move || tr(lang.get(), "Men's collection", "Bộ sưu tập nam")}</NavLink></li>
                        <li><NavLink href="/women">{move || tr(lang.get(), "Women's collection", "Bộ sưu tập nữ")}</NavLink></li>
                        <li><NavLink href="/journal">{move || tr(lang.get(), "Journal", "Tạp chí")}</NavLink></li>
                    </ul>
                </div>
                <div class="footer__social">
                    <h4>{move || tr(lang.get(), "Connect", "Kết nối")}</h4>
                    {move || facebook().map(|url| view! {
                        <a href=url target="_blank" rel="noreferrer">"Facebook"</a>
                    })}
                    {move || zalo().map(|url| view! {
                        <a href=url target="_blank" rel="noreferrer">"Zalo"</a>
                    })}
                </div>
            </div>
            <p class="footer__copyright">"© T-kap Fashion"</p>
        </footer>
    }
}
