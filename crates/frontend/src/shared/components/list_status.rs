use leptos::prelude::*;

use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::list_controller::{ListController, ListItem};

/// Pagination bar bound to a list controller.
#[component]
pub fn ListPager<T: ListItem>(list: ListController<T>) -> impl IntoView {
    let state = list.state;
    view! {
        <PaginationControls
            current_page=Signal::derive(move || state.with(|s| s.pagination.page))
            total_pages=Signal::derive(move || state.with(|s| s.response.pages))
            total_count=Signal::derive(move || state.with(|s| s.response.total))
            page_size=Signal::derive(move || state.with(|s| s.pagination.per_page))
            on_page_change=Callback::new(move |page| list.go_to_page(page))
            on_page_size_change=Callback::new(move |size| list.set_per_page(size))
        />
    }
}

/// Error banner, loading line and empty-state message for a list.
#[component]
pub fn ListStatus<T: ListItem>(
    list: ListController<T>,
    #[prop(optional, into)] empty_message: Option<String>,
) -> impl IntoView {
    let state = list.state;
    let empty_message = empty_message.unwrap_or_else(|| "Tidak ada data".to_string());

    view! {
        {move || state.with(|s| s.error.clone()).map(|e| view! {
            <div class="alert alert--error">
                <span>{e}</span>
                <button class="btn btn--link" on:click=move |_| list.reload()>"Coba lagi"</button>
            </div>
        })}
        <Show when=move || state.with(|s| s.is_loading)>
            <div class="list-status list-status--loading">"Memuat data..."</div>
        </Show>
        <Show when=move || state.with(|s| s.is_loaded && !s.is_loading && s.items().is_empty())>
            <div class="list-status list-status--empty">{empty_message.clone()}</div>
        </Show>
    }
}
