use leptos::prelude::*;

/// Title row of a list or detail page; children render as the action bar.
#[component]
pub fn PageHeader(
    #[prop(into)] title: String,
    /// Secondary line, typically the record count.
    #[prop(optional, into)]
    subtitle: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="page__header">
            <div class="page-header__text">
                <h1 class="page-header__title">{title}</h1>
                {move || subtitle.get().map(|s| view! {
                    <div class="page-header__subtitle">{s}</div>
                })}
            </div>
            <div class="page-header__actions">
                {children()}
            </div>
        </div>
    }
}
