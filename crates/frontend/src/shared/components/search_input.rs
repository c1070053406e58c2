use crate::shared::icons::icon;
use leptos::prelude::*;

/// Text box whose echo is immediate; `on_search` receives every edit and is
/// expected to debounce (see `ListController::search`).
#[component]
pub fn SearchInput(
    /// Value the filter currently holds, used to seed and to reset the box.
    #[prop(into)]
    applied: Signal<String>,
    on_search: Callback<String>,
    #[prop(optional, into)] placeholder: Option<String>,
) -> impl IntoView {
    let placeholder = placeholder.unwrap_or_else(|| "Cari...".to_string());
    let input_value = RwSignal::new(applied.get_untracked());

    // Follow external resets (e.g. "Reset filter") without fighting the user.
    Effect::new(move |_| {
        let applied = applied.get();
        if applied.is_empty() {
            input_value.set(String::new());
        }
    });

    let is_active = move || !applied.get().trim().is_empty();

    view! {
        <div class="search-input">
            <span class="search-input__icon">{icon("search")}</span>
            <input
                type="text"
                class=move || if is_active() { "search-input__field search-input__field--active" } else { "search-input__field" }
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    input_value.set(value.clone());
                    on_search.run(value);
                }
            />
            <Show when=move || !input_value.get().is_empty()>
                <button
                    class="search-input__clear"
                    title="Bersihkan"
                    on:click=move |_| {
                        input_value.set(String::new());
                        on_search.run(String::new());
                    }
                >
                    {icon("x")}
                </button>
            </Show>
        </div>
    }
}
