//! Application top bar: sidebar toggle, title, current user and logout.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::system::auth::context::{do_logout, use_auth};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let auth_state = use_auth();

    let logout = move |_| {
        ctx.close_all();
        spawn_local(do_logout(auth_state));
    };

    let user_label = move || {
        auth_state.with(|s| {
            s.user_info
                .as_ref()
                .map(|u| format!("{} ({})", u.display_name(), u.role.label()))
                .unwrap_or_default()
        })
    };

    view! {
        <header class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if ctx.left_open.get() { "Sembunyikan navigasi" } else { "Tampilkan navigasi" }
                >
                    {move || if ctx.left_open.get() { icon("chevron-left") } else { icon("chevron-right") }}
                </button>
                <span class="top-header__title">"KSM"</span>
                <span class="top-header__subtitle">"Pengadaan & Inventaris"</span>
            </div>

            <div class="top-header__actions">
                <button
                    class="top-header__icon-btn"
                    title="Notifikasi"
                    on:click=move |_| ctx.open_tab("notifikasi", "Notifikasi")
                >
                    {icon("notifikasi")}
                </button>
                <div class="top-header__user">
                    {icon("users")}
                    <span>{user_label}</span>
                </div>
                <button class="top-header__icon-btn" on:click=logout title="Keluar">
                    {icon("logout")}
                </button>
            </div>
        </header>
    }
}
