use crate::shared::icons::icon;
use leptos::prelude::*;

/// Collapsible filter area with the pagination bar in its header.
#[component]
pub fn FilterPanel(
    #[prop(into)] is_expanded: RwSignal<bool>,
    /// Drives the badge next to the title.
    #[prop(into)]
    active_filters_count: Signal<usize>,
    /// Resets every filter; the button is hidden while nothing is active.
    on_reset: Callback<()>,
    #[prop(into)] pagination_controls: ViewFn,
    #[prop(into)] filter_content: ViewFn,
    #[prop(optional, into)] filter_tags: Option<ViewFn>,
) -> impl IntoView {
    let chevron_class = move || {
        if is_expanded.get() {
            "filter-panel__chevron filter-panel__chevron--expanded"
        } else {
            "filter-panel__chevron"
        }
    };

    view! {
        <div class="filter-panel">
            <div class="filter-panel-header">
                <div
                    class="filter-panel-header__left"
                    on:click=move |_| is_expanded.update(|e| *e = !*e)
                >
                    <span class=chevron_class>{icon("chevron-right")}</span>
                    {icon("filter")}
                    <span class="filter-panel__title">"Filter"</span>
                    <Show when=move || { active_filters_count.get() > 0 }>
                        <span class="badge badge--primary">{move || active_filters_count.get()}</span>
                    </Show>
                </div>
                <div class="filter-panel-header__center">
                    {pagination_controls.run()}
                </div>
                <div class="filter-panel-header__right">
                    <Show when=move || { active_filters_count.get() > 0 }>
                        <button class="btn btn--link" on:click=move |_| on_reset.run(())>
                            "Reset filter"
                        </button>
                    </Show>
                </div>
            </div>

            <div class=move || {
                if is_expanded.get() {
                    "filter-panel__collapsible filter-panel__collapsible--expanded"
                } else {
                    "filter-panel__collapsible filter-panel__collapsible--collapsed"
                }
            }>
                <div class="filter-panel-content">
                    {filter_content.run()}
                </div>
            </div>
            {filter_tags.as_ref().map(|tags| view! {
                <div class="filter-panel-tags">{tags.run()}</div>
            })}
        </div>
    }
}

/// Chip for one active filter.
#[component]
pub fn FilterTag(#[prop(into)] label: String, on_remove: Callback<()>) -> impl IntoView {
    view! {
        <div class="filter-tag">
            <span>{label}</span>
            <span
                class="filter-tag__remove"
                title="Hapus filter"
                on:click=move |e| {
                    e.stop_propagation();
                    on_remove.run(());
                }
            >
                {icon("x")}
            </span>
        </div>
    }
}
