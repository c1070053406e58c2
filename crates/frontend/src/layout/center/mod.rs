use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use crate::layout::tabs::TabPage;
use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;

#[component]
fn TabButton(tab: TabData, tabs_store: AppGlobalContext) -> impl IntoView {
    let key = StoredValue::new(tab.key.clone());
    let is_active = Memo::new(move |_| {
        key.with_value(|k| tabs_store.active.with(|a| a.as_deref() == Some(k.as_str())))
    });

    let on_close = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
        key.with_value(|k| tabs_store.close_tab(k));
    };

    view! {
        <div
            class="app-tabs__tab"
            class:app-tabs__tab--active=is_active
            on:click=move |_| key.with_value(|k| tabs_store.activate_tab(k))
        >
            <span>{move || tab_title(tabs_store, &key.get_value())}</span>
            <button class="app-tabs__close" title="Tutup" on:click=on_close>
                {icon("x")}
            </button>
        </div>
    }
}

/// Title from the store so `update_tab_title` is picked up.
fn tab_title(tabs_store: AppGlobalContext, key: &str) -> String {
    tabs_store.opened.with(|tabs| {
        tabs.iter()
            .find(|t| t.key == key)
            .map(|t| t.title.clone())
            .unwrap_or_default()
    })
}

/// Tab bar plus the content of every open tab.
#[component]
pub fn Center() -> impl IntoView {
    let tabs_store = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <div data-zone="center" class="app-tabs">
            <div class="app-tabs__bar">
                <For
                    each=move || tabs_store.opened.get()
                    key=|tab| tab.key.clone()
                    children=move |tab| view! { <TabButton tab=tab tabs_store=tabs_store /> }
                />
            </div>
            <div class="app-tabs__content">
                <Show
                    when=move || tabs_store.opened.with(|t| !t.is_empty())
                    fallback=|| view! {
                        <div class="app-tabs__empty">"Pilih menu di sebelah kiri untuk memulai"</div>
                    }
                >
                    <For
                        each=move || tabs_store.opened.get()
                        key=|tab| tab.key.clone()
                        children=move |tab: TabData| view! { <TabPage tab=tab tabs_store=tabs_store /> }
                    />
                </Show>
            </div>
        </div>
    }
}
