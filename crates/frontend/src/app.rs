use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::shared::feedback::Notifications;
use crate::shared::query_cache::QueryClient;
use crate::system::auth::context::AuthProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    provide_context(AppGlobalContext::new());
    provide_context(QueryClient::new());
    provide_context(Notifications::new());

    view! {
        <AuthProvider>
            <AppRoutes />
        </AuthProvider>
    }
}
