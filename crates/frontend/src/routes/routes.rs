use crate::layout::feedback_host::{ProcessingOverlay, ToastHost};
use crate::layout::global_context::AppGlobalContext;
use crate::layout::Shell;
use crate::shared::query_cache::use_query_client;
use crate::system::auth::context::use_auth;
use crate::system::pages::login::LoginPage;
use leptos::prelude::*;

#[component]
fn MainLayout() -> impl IntoView {
    let tabs_store = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    tabs_store.init_router_integration();

    view! { <Shell /> }
}

/// Login screen until a token is present, then the shell. Losing the session
/// (logout or a 401) switches back and drops cached lists from the previous user.
#[component]
pub fn AppRoutes() -> impl IntoView {
    let auth_state = use_auth();
    let tabs_store = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let client = use_query_client();
    let is_authenticated = Memo::new(move |_| auth_state.with(|s| s.is_authenticated()));

    Effect::new(move |was_authenticated: Option<bool>| {
        let now = is_authenticated.get();
        if was_authenticated == Some(true) && !now {
            tabs_store.close_all();
            client.clear();
        }
        now
    });

    view! {
        <Show when=move || is_authenticated.get() fallback=|| view! { <LoginPage /> }>
            <MainLayout />
        </Show>
        <ToastHost />
        <ProcessingOverlay />
    }
}
