use chrono::NaiveDate;
use contracts::domain::a005_permintaan::{Permintaan, StatusPermintaan};
use contracts::shared::list_query::FilterParams;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a005_permintaan::api;
use crate::domain::a005_permintaan::ui::create::PermintaanCreateDialog;
use crate::layout::global_context::use_app_context;
use crate::layout::tabs::tab_labels::{detail_tab_label, permintaan_detail_key};
use crate::shared::components::{
    ConfirmDialog, DateInput, FilterPanel, ListPager, ListStatus, PageHeader, SearchInput,
    SelectField,
};
use crate::shared::date_utils::{format_date, format_rupiah};
use crate::shared::feedback::{reject_invalid, run_mutation, use_notifications};
use crate::shared::form_utils::non_empty;
use crate::shared::icons::icon;
use crate::shared::list_controller::{use_list, SEARCH_KEY};
use crate::shared::list_utils::SortableHeader;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};

const STATUS: &str = "status";
const DATE_FROM: &str = "date_from";
const DATE_TO: &str = "date_to";

fn status_options() -> Vec<(String, String)> {
    StatusPermintaan::FILTERABLE
        .iter()
        .map(|s| (s.code().to_string(), s.label().to_string()))
        .collect()
}

/// True when both dates parse and `from` is after `to`.
fn date_range_inverted(from: &str, to: &str) -> bool {
    let parse = |s: &str| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok();
    matches!((parse(from), parse(to)), (Some(from), Some(to)) if from > to)
}

#[component]
pub fn PermintaanList() -> impl IntoView {
    let list = use_list::<Permintaan>(api::PERMINTAAN, FilterParams::new());
    let notifications = use_notifications();
    let ctx = use_app_context();
    let filters_expanded = RwSignal::new(true);
    let creating = RwSignal::new(false);
    let deleting = RwSignal::new(None::<Permintaan>);

    let open_detail = move |id: i64, nomor: &str| {
        ctx.open_tab(&permintaan_detail_key(id), &detail_tab_label("Permintaan", nomor));
    };

    let confirm_delete = Callback::new(move |_| {
        let Some(permintaan) = deleting.get_untracked() else {
            return;
        };
        deleting.set(None);
        spawn_local(async move {
            if run_mutation(notifications, "Menghapus permintaan...", "Permintaan berhasil dihapus", api::remove(permintaan.id))
                .await
                .is_ok()
            {
                list.refresh();
            }
        });
    });

    let apply_date = move |key: &'static str, value: String| {
        let (from, to) = if key == DATE_FROM {
            (value.clone(), list.filters().get_text(DATE_TO))
        } else {
            (list.filters().get_text(DATE_FROM), value.clone())
        };
        if date_range_inverted(&from, &to) {
            reject_invalid(&notifications, "Tanggal awal tidak boleh setelah tanggal akhir");
            return;
        }
        list.set_optional_filter(key, non_empty(&value));
    };

    let on_sort = Callback::new(move |field| list.toggle_sort(field));

    view! {
        <PageFrame page_id="permintaan--list" category=PAGE_CAT_LIST>
            <PageHeader title="Permintaan Pembelian" subtitle=Signal::derive(move || format!("{} permintaan", list.state.with(|s| s.response.total)))>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| creating.set(true)>
                    {icon("plus")}
                    " Buat Permintaan"
                </Button>
            </PageHeader>

            <div class="page__content">
                <FilterPanel
                    is_expanded=filters_expanded
                    active_filters_count=list.active_filter_count()
                    on_reset=Callback::new(move |_| list.clear_filters())
                    pagination_controls=move || view! { <ListPager list=list /> }
                    filter_content=move || view! {
                        <Flex gap=FlexGap::Small align=FlexAlign::End>
                            <SearchInput
                                applied=list.filter_text(SEARCH_KEY)
                                on_search=Callback::new(move |text| list.search(text))
                                placeholder="Nomor, judul atau pemohon..."
                            />
                            <SelectField
                                label="Status"
                                placeholder="Semua status"
                                options=Signal::stored(status_options())
                                value=list.filter_text(STATUS)
                                on_change=Callback::new(move |v: String| list.set_optional_filter(STATUS, non_empty(&v)))
                            />
                            <DateInput
                                label="Dari tanggal"
                                value=list.filter_text(DATE_FROM)
                                on_change=Callback::new(move |v| apply_date(DATE_FROM, v))
                            />
                            <DateInput
                                label="Sampai tanggal"
                                value=list.filter_text(DATE_TO)
                                on_change=Callback::new(move |v| apply_date(DATE_TO, v))
                            />
                        </Flex>
                    }
                />

                <ListStatus list=list empty_message="Belum ada permintaan" />

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <SortableHeader label="Nomor" field="nomor" sort=list.sort_signal() on_sort=on_sort min_width=130.0 />
                                <TableHeaderCell resizable=false min_width=200.0>"Judul"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=140.0>"Pemohon"</TableHeaderCell>
                                <SortableHeader label="Tanggal" field="tanggal_permintaan" sort=list.sort_signal() on_sort=on_sort min_width=110.0 />
                                <TableHeaderCell resizable=false min_width=130.0>"Estimasi"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=150.0>"Status"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=60.0>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || list.items().get()
                                key=|p| (p.id, p.status, p.judul.clone())
                                children=move |permintaan: Permintaan| {
                                    let id = permintaan.id;
                                    let nomor = permintaan.nomor.clone();
                                    let status = permintaan.status;
                                    let for_delete = permintaan.clone();
                                    let nomor_label = permintaan.nomor.clone();
                                    let judul = permintaan.judul.clone();
                                    let pemohon = permintaan.pemohon.clone().unwrap_or_else(|| "-".to_string());
                                    let tanggal = format_date(&permintaan.tanggal_permintaan);
                                    let estimasi = format_rupiah(permintaan.estimasi());
                                    view! {
                                        <TableRow class="table__row--clickable" on:click=move |_| open_detail(id, &nomor)>
                                            <TableCell><TableCellLayout>{nomor_label}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout truncate=true>{judul}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout truncate=true>{pemohon}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{tanggal}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout><span class="table__number">{estimasi}</span></TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout><span class=status.badge_class()>{status.label()}</span></TableCellLayout></TableCell>
                                            <TableCell>
                                                <Show when=move || status.can_delete()>
                                                    {
                                                        let for_delete = for_delete.clone();
                                                        view! {
                                                            <button
                                                                class="btn btn--icon btn--danger"
                                                                title="Hapus"
                                                                on:click=move |ev| {
                                                                    ev.stop_propagation();
                                                                    deleting.set(Some(for_delete.clone()));
                                                                }
                                                            >
                                                                {icon("trash")}
                                                            </button>
                                                        }
                                                    }
                                                </Show>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                </div>
            </div>

            <Show when=move || creating.get()>
                <PermintaanCreateDialog
                    on_created=Callback::new(move |id: Option<i64>| {
                        creating.set(false);
                        list.refresh();
                        if let Some(id) = id {
                            open_detail(id, &id.to_string());
                        }
                    })
                    on_close=Callback::new(move |_| creating.set(false))
                />
            </Show>
            {move || deleting.get().map(|permintaan| view! {
                <ConfirmDialog
                    title="Hapus Permintaan"
                    message=format!("Hapus draft permintaan {}?", permintaan.nomor)
                    on_confirm=confirm_delete
                    on_cancel=Callback::new(move |_| deleting.set(None))
                />
            })}
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_options_cover_filterable_states() {
        let options = status_options();
        assert_eq!(options.len(), StatusPermintaan::FILTERABLE.len());
        assert_eq!(options[1], ("diajukan".to_string(), "Menunggu Persetujuan".to_string()));
    }

    #[test]
    fn test_date_range() {
        assert!(date_range_inverted("2024-05-02", "2024-05-01"));
        assert!(!date_range_inverted("2024-05-01", "2024-05-01"));
        assert!(!date_range_inverted("", "2024-05-01"));
    }
}
