//! PageFrame: root wrapper for every page rendered inside a tab.
//!
//! Sets `id` (`"{entity}--{category}"`, e.g. `"barang--list"`) and
//! `data-page-category` on the root element.

use leptos::prelude::*;

/// List of records with filters and pagination.
pub const PAGE_CAT_LIST: &str = "list";
/// Detail view or edit form for a single record.
pub const PAGE_CAT_DETAIL: &str = "detail";
/// Administration page.
pub const PAGE_CAT_SYSTEM: &str = "system";

#[component]
pub fn PageFrame(
    page_id: &'static str,
    category: &'static str,
    children: Children,
) -> impl IntoView {
    let class = match category {
        PAGE_CAT_DETAIL => "page page--detail",
        PAGE_CAT_SYSTEM => "page page--system",
        _ => "page",
    };

    view! {
        <div id=page_id class=class data-page-category=category>
            {children()}
        </div>
    }
}
