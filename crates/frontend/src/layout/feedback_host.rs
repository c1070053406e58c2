use crate::shared::feedback::use_notifications;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Stack of transient notifications, newest at the bottom.
#[component]
pub fn ToastHost() -> impl IntoView {
    let notifications = use_notifications();

    view! {
        <div class="toast-host" role="status" aria-live="polite">
            <For
                each=move || notifications.toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast.kind.class()>
                            <span class="toast__message">{toast.message}</span>
                            <button class="toast__close" title="Tutup" on:click=move |_| notifications.dismiss(id)>
                                {icon("x")}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}

/// Blocks the UI while a mutation is in flight.
#[component]
pub fn ProcessingOverlay() -> impl IntoView {
    let notifications = use_notifications();

    move || {
        notifications.processing.get().map(|label| view! {
            <div class="processing-overlay">
                <div class="processing-overlay__box">
                    <div class="processing-overlay__spinner"></div>
                    <span>{label}</span>
                </div>
            </div>
        })
    }
}
