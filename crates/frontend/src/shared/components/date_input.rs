use leptos::prelude::*;

/// Native date picker. Values travel as `yyyy-mm-dd`; clearing reports `""`.
#[component]
pub fn DateInput(
    #[prop(optional, into)] label: MaybeProp<String>,
    #[prop(into)] value: Signal<String>,
    on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! { <label class="form__label">{l}</label> })}
            <input
                type="date"
                class="form__input form__input--date"
                prop:value=move || value.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
            />
        </div>
    }
}
