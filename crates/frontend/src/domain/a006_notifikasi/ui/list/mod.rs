use contracts::domain::a006_notifikasi::Notifikasi;
use contracts::shared::list_query::FilterParams;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a006_notifikasi::api;
use crate::layout::global_context::use_app_context;
use crate::layout::tabs::tab_labels::{
    detail_tab_label, permintaan_detail_key, tab_label_for_key, KEY_BARANG, KEY_KATALOG_VENDOR,
    KEY_PERMINTAAN,
};
use crate::shared::components::{FilterPanel, ListPager, ListStatus, PageHeader, SelectField};
use crate::shared::date_utils::format_datetime;
use crate::shared::feedback::{run_mutation, use_notifications};
use crate::shared::icons::icon;
use crate::shared::list_controller::use_list;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};

const DIBACA: &str = "dibaca";

/// Tab to open for a notification link such as `/permintaan/12`.
fn tab_for_link(link: &str) -> Option<(String, String)> {
    let mut parts = link.trim_matches('/').split('/');
    match (parts.next()?, parts.next()) {
        ("permintaan", Some(id)) => {
            let id: i64 = id.parse().ok()?;
            Some((permintaan_detail_key(id), detail_tab_label("Permintaan", &id.to_string())))
        }
        ("permintaan", None) => Some((KEY_PERMINTAAN.to_string(), tab_label_for_key(KEY_PERMINTAAN).to_string())),
        ("stok-barang", _) => Some((KEY_BARANG.to_string(), tab_label_for_key(KEY_BARANG).to_string())),
        ("katalog-vendor", _) => Some((KEY_KATALOG_VENDOR.to_string(), tab_label_for_key(KEY_KATALOG_VENDOR).to_string())),
        _ => None,
    }
}

fn parse_dibaca(value: &str) -> Option<bool> {
    match value {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

#[component]
pub fn NotifikasiList() -> impl IntoView {
    let list = use_list::<Notifikasi>(api::NOTIFIKASI, FilterParams::new());
    let notifications = use_notifications();
    let ctx = use_app_context();
    let filters_expanded = RwSignal::new(true);
    let dibaca_options = Signal::stored(vec![
        ("false".to_string(), "Belum dibaca".to_string()),
        ("true".to_string(), "Sudah dibaca".to_string()),
    ]);
    let unread_on_page = Signal::derive(move || list.items().with(|items| items.iter().filter(|n| !n.dibaca).count()));

    let mark_read = move |id: i64| {
        spawn_local(async move {
            match api::mark_read(id).await {
                Ok(_) => list.refresh(),
                Err(e) => log::warn!("mark_read {} failed: {}", id, e),
            }
        });
    };

    let mark_all = move |_| {
        spawn_local(async move {
            if run_mutation(notifications, "Menandai notifikasi...", "Semua notifikasi ditandai sudah dibaca", api::mark_all_read())
                .await
                .is_ok()
            {
                list.refresh();
            }
        });
    };

    let open = move |notifikasi: &Notifikasi| {
        if !notifikasi.dibaca {
            mark_read(notifikasi.id);
        }
        if let Some((key, title)) = notifikasi.tautan.as_deref().and_then(tab_for_link) {
            ctx.open_tab(&key, &title);
        }
    };

    view! {
        <PageFrame page_id="notifikasi--list" category=PAGE_CAT_LIST>
            <PageHeader title="Notifikasi" subtitle=Signal::derive(move || format!("{} notifikasi", list.state.with(|s| s.response.total)))>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=mark_all
                    disabled=Signal::derive(move || unread_on_page.get() == 0)
                >
                    {icon("check")}
                    " Tandai semua dibaca"
                </Button>
            </PageHeader>

            <div class="page__content">
                <FilterPanel
                    is_expanded=filters_expanded
                    active_filters_count=list.active_filter_count()
                    on_reset=Callback::new(move |_| list.clear_filters())
                    pagination_controls=move || view! { <ListPager list=list /> }
                    filter_content=move || view! {
                        <SelectField
                            label="Status"
                            placeholder="Semua"
                            options=dibaca_options
                            value=list.filter_text(DIBACA)
                            on_change=Callback::new(move |v: String| list.set_optional_filter(DIBACA, parse_dibaca(&v)))
                        />
                    }
                />

                <ListStatus list=list empty_message="Tidak ada notifikasi" />

                <div class="notification-list">
                    <For
                        each=move || list.items().get()
                        key=|n| (n.id, n.dibaca)
                        children=move |notifikasi: Notifikasi| {
                            let id = notifikasi.id;
                            let dibaca = notifikasi.dibaca;
                            let class = if dibaca { "notification" } else { "notification notification--unread" };
                            let for_open = notifikasi.clone();
                            view! {
                                <div class=class on:click=move |_| open(&for_open)>
                                    <div class="notification__header">
                                        <span class="notification__title">{notifikasi.judul.clone()}</span>
                                        <span class="notification__time">{format_datetime(&notifikasi.created_at)}</span>
                                    </div>
                                    <div class="notification__body">{notifikasi.pesan.clone()}</div>
                                    {(!dibaca).then(|| view! {
                                        <button
                                            class="btn btn--link"
                                            on:click=move |ev| {
                                                ev.stop_propagation();
                                                mark_read(id);
                                            }
                                        >
                                            "Tandai dibaca"
                                        </button>
                                    })}
                                </div>
                            }
                        }
                    />
                </div>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_links_resolve_to_tabs() {
        assert_eq!(
            tab_for_link("/permintaan/12"),
            Some(("permintaan_detail_12".to_string(), "Permintaan · 12".to_string()))
        );
        assert_eq!(tab_for_link("/permintaan").map(|t| t.0), Some(KEY_PERMINTAAN.to_string()));
        assert_eq!(tab_for_link("/stok-barang/barang").map(|t| t.0), Some(KEY_BARANG.to_string()));
        assert_eq!(tab_for_link("/permintaan/abc"), None);
        assert_eq!(tab_for_link("https://example.com"), None);
    }

    #[test]
    fn test_dibaca_filter_values() {
        assert_eq!(parse_dibaca("false"), Some(false));
        assert_eq!(parse_dibaca(""), None);
    }
}
