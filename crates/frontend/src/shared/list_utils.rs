//! Small helpers for server-sorted tables.

use leptos::prelude::*;
use thaw::*;

/// Sort arrow for a column header.
pub fn get_sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field == field {
        if ascending {
            " ▲"
        } else {
            " ▼"
        }
    } else {
        " ⇅"
    }
}

pub fn get_sort_class(current_field: &str, field: &str) -> &'static str {
    if current_field == field {
        "table__sort-indicator table__sort-indicator--active"
    } else {
        "table__sort-indicator"
    }
}

/// Header cell that toggles server-side sorting on `field`.
#[component]
pub fn SortableHeader(
    #[prop(into)] label: String,
    field: &'static str,
    /// `(field, ascending)` currently applied.
    #[prop(into)]
    sort: Signal<(String, bool)>,
    on_sort: Callback<&'static str>,
    #[prop(optional)] min_width: Option<f64>,
) -> impl IntoView {
    view! {
        <TableHeaderCell resizable=false min_width=min_width.unwrap_or(100.0)>
            <div class="table__sortable-header" on:click=move |_| on_sort.run(field)>
                {label}
                <span class=move || sort.with(|(current, _)| get_sort_class(current, field))>
                    {move || sort.with(|(current, asc)| get_sort_indicator(current, field, *asc))}
                </span>
            </div>
        </TableHeaderCell>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_indicator() {
        assert_eq!(get_sort_indicator("harga", "harga", true), " ▲");
        assert_eq!(get_sort_indicator("harga", "harga", false), " ▼");
        assert_eq!(get_sort_indicator("harga", "nama_barang", true), " ⇅");
    }
}
