use contracts::shared::list_query::{FilterParams, FilterValue};
use leptos::prelude::*;

use crate::shared::feedback::{reject_invalid, use_notifications};
use crate::shared::form_utils::parse_amount;

pub const MIN_PRICE: &str = "min_price";
pub const MAX_PRICE: &str = "max_price";

fn amount_of(filters: &FilterParams, key: &str) -> Option<f64> {
    match filters.get(key)? {
        FilterValue::Float(f) => Some(*f),
        FilterValue::Int(i) => Some(*i as f64),
        _ => None,
    }
}

/// True when applying `value` to `key` would leave `min_price` above `max_price`.
pub fn range_conflict(filters: &FilterParams, key: &str, value: Option<f64>) -> bool {
    let (min, max) = if key == MIN_PRICE {
        (value, amount_of(filters, MAX_PRICE))
    } else {
        (amount_of(filters, MIN_PRICE), value)
    };
    matches!((min, max), (Some(min), Some(max)) if min > max)
}

/// Numeric filter applied on commit (blur or Enter).
/// Unparseable input is rejected with a warning and the filter is left alone.
#[component]
pub fn AmountFilter(
    #[prop(into)] label: String,
    #[prop(into)] applied: Signal<String>,
    on_apply: Callback<Option<f64>>,
) -> impl IntoView {
    let notifications = use_notifications();
    let text = RwSignal::new(applied.get_untracked());

    Effect::new(move |_| {
        let applied = applied.get();
        text.set(applied);
    });

    let field = label.clone();
    let apply = move || match parse_amount(&text.get_untracked(), &field) {
        Ok(value) => on_apply.run(value),
        Err(msg) => reject_invalid(&notifications, msg),
    };

    view! {
        <div class="form__group">
            <label class="form__label">{label}</label>
            <input
                type="text"
                inputmode="decimal"
                class="form__input form__input--amount"
                placeholder="Rp"
                prop:value=move || text.get()
                on:input=move |ev| text.set(event_target_value(&ev))
                on:change=move |_| apply()
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_conflict_checks_the_other_bound() {
        let filters = FilterParams::new().with(MAX_PRICE, 100_i64);
        assert!(range_conflict(&filters, MIN_PRICE, Some(500.0)));
        assert!(!range_conflict(&filters, MIN_PRICE, Some(100.0)));
        assert!(!range_conflict(&filters, MIN_PRICE, None));

        let filters = FilterParams::new().with(MIN_PRICE, 1500.5);
        assert!(range_conflict(&filters, MAX_PRICE, Some(1000.0)));
        assert!(!range_conflict(&filters, MAX_PRICE, Some(2000.0)));
    }

    #[test]
    fn test_text_filters_are_not_amounts() {
        let filters = FilterParams::new().with(MIN_PRICE, "murah");
        assert_eq!(amount_of(&filters, MIN_PRICE), None);
    }
}
