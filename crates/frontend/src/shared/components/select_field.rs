use leptos::prelude::*;

/// Native select over `(value, label)` pairs. With `placeholder` set, an
/// empty option comes first and selecting it reports `""`.
#[component]
pub fn SelectField(
    #[prop(optional, into)] label: MaybeProp<String>,
    #[prop(into)] value: Signal<String>,
    on_change: Callback<String>,
    #[prop(into)] options: Signal<Vec<(String, String)>>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] disabled: MaybeProp<bool>,
) -> impl IntoView {
    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! { <label class="form__label">{l}</label> })}
            <select
                class="form__select"
                disabled=move || disabled.get().unwrap_or(false)
                prop:value=move || value.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                {placeholder.map(|p| view! { <option value="">{p}</option> })}
                <For
                    each=move || options.get()
                    key=|(val, _)| val.clone()
                    children=move |(val, label)| {
                        let val_for_selected = val.clone();
                        view! {
                            <option value=val selected=move || value.get() == val_for_selected>
                                {label}
                            </option>
                        }
                    }
                />
            </select>
        </div>
    }
}
