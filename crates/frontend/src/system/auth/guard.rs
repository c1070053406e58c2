use contracts::shared::api::ACCESS_DENIED;
use contracts::system::users::Role;
use leptos::prelude::*;

use super::context::use_auth;

#[component]
fn AccessDenied() -> impl IntoView {
    view! {
        <div class="alert alert--error access-denied">
            {ACCESS_DENIED}
        </div>
    }
}

/// Renders children only when the current user has one of `roles`.
#[component]
pub fn RequireRole(roles: Vec<Role>, children: ChildrenFn) -> impl IntoView {
    let auth_state = use_auth();

    view! {
        <Show
            when=move || {
                auth_state
                    .get()
                    .user_info
                    .as_ref()
                    .map(|u| roles.contains(&u.role))
                    .unwrap_or(false)
            }
            fallback=|| view! { <AccessDenied /> }
        >
            {children()}
        </Show>
    }
}

#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    RequireRole(RequireRoleProps {
        roles: vec![Role::Admin],
        children,
    })
}
