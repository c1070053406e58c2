use contracts::domain::a001_kategori::Kategori;
use contracts::domain::a002_supplier::Supplier;
use contracts::domain::a004_katalog_vendor::KatalogItem;
use contracts::shared::list_query::FilterParams;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a001_kategori::api::{option as kategori_option, KATEGORI};
use crate::domain::a002_supplier::api::{option as supplier_option, SUPPLIER};
use crate::domain::a004_katalog_vendor::api;
use crate::domain::a004_katalog_vendor::ui::details::KatalogDialog;
use crate::shared::components::{
    range_conflict, AmountFilter, ConfirmDialog, ExportButton, FilterPanel, ImportDialog,
    ListPager, ListStatus, PageHeader, SearchInput, SelectField, MAX_PRICE, MIN_PRICE,
};
use crate::shared::date_utils::format_rupiah;
use crate::shared::feedback::{reject_invalid, run_mutation, use_notifications};
use crate::shared::form_utils::parse_id;
use crate::shared::icons::icon;
use crate::shared::list_controller::{use_list, use_options, SEARCH_KEY};
use crate::shared::list_utils::SortableHeader;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};

const SUPPLIER_ID: &str = "supplier_id";
const KATEGORI_ID: &str = "kategori_id";
const IS_ACTIVE: &str = "is_active";

/// `"true"` / `"false"` from the status select; anything else clears the filter.
fn parse_active(value: &str) -> Option<bool> {
    match value {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

fn lead_time_label(item: &KatalogItem) -> String {
    item.lead_time_hari
        .map(|d| format!("{} hari", d))
        .unwrap_or_else(|| "-".to_string())
}

#[component]
pub fn KatalogVendorList() -> impl IntoView {
    let list = use_list::<KatalogItem>(api::KATALOG, FilterParams::new());
    let notifications = use_notifications();
    let supplier_options = use_options::<Supplier>(SUPPLIER, supplier_option);
    let kategori_options = use_options::<Kategori>(KATEGORI, kategori_option);
    let status_options = Signal::stored(vec![
        ("true".to_string(), "Aktif".to_string()),
        ("false".to_string(), "Nonaktif".to_string()),
    ]);
    let filters_expanded = RwSignal::new(true);
    let editing = RwSignal::new(None::<Option<KatalogItem>>);
    let deleting = RwSignal::new(None::<KatalogItem>);
    let importing = RwSignal::new(false);

    let confirm_delete = Callback::new(move |_| {
        let Some(item) = deleting.get_untracked() else {
            return;
        };
        deleting.set(None);
        spawn_local(async move {
            if run_mutation(notifications, "Menghapus item katalog...", "Item katalog berhasil dihapus", api::remove(item.id))
                .await
                .is_ok()
            {
                list.refresh();
            }
        });
    });

    let apply_price = move |key: &'static str, value: Option<f64>| {
        if range_conflict(&list.filters(), key, value) {
            reject_invalid(&notifications, "Harga minimum tidak boleh melebihi harga maksimum");
            return;
        }
        list.set_optional_filter(key, value);
    };

    let on_sort = Callback::new(move |field| list.toggle_sort(field));
    let filters = Signal::derive(move || list.state.with(|s| s.filters.clone()));

    view! {
        <PageFrame page_id="katalog_vendor--list" category=PAGE_CAT_LIST>
            <PageHeader title="Katalog Vendor" subtitle=Signal::derive(move || format!("{} item", list.state.with(|s| s.response.total)))>
                <ExportButton path=api::EXPORT_PATH file_stem="katalog-vendor" filters=filters />
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| importing.set(true)>
                    {icon("upload")}
                    " Impor"
                </Button>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| editing.set(Some(None))>
                    {icon("plus")}
                    " Tambah Item"
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
                                placeholder="Kode atau nama item..."
                            />
                            <SelectField
                                label="Supplier"
                                placeholder="Semua supplier"
                                options=supplier_options
                                value=list.filter_text(SUPPLIER_ID)
                                on_change=Callback::new(move |v: String| list.set_optional_filter(SUPPLIER_ID, parse_id(&v)))
                            />
                            <SelectField
                                label="Kategori"
                                placeholder="Semua kategori"
                                options=kategori_options
                                value=list.filter_text(KATEGORI_ID)
                                on_change=Callback::new(move |v: String| list.set_optional_filter(KATEGORI_ID, parse_id(&v)))
                            />
                            <AmountFilter
                                label="Harga min"
                                applied=list.filter_text(MIN_PRICE)
                                on_apply=Callback::new(move |v| apply_price(MIN_PRICE, v))
                            />
                            <AmountFilter
                                label="Harga maks"
                                applied=list.filter_text(MAX_PRICE)
                                on_apply=Callback::new(move |v| apply_price(MAX_PRICE, v))
                            />
                            <SelectField
                                label="Status"
                                placeholder="Semua status"
                                options=status_options
                                value=list.filter_text(IS_ACTIVE)
                                on_change=Callback::new(move |v: String| list.set_optional_filter(IS_ACTIVE, parse_active(&v)))
                            />
                        </Flex>
                    }
                />

                <ListStatus list=list empty_message="Belum ada item katalog" />

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell resizable=false min_width=100.0>"Kode"</TableHeaderCell>
                                <SortableHeader label="Nama Item" field="nama_item" sort=list.sort_signal() on_sort=on_sort min_width=200.0 />
                                <TableHeaderCell resizable=false min_width=160.0>"Supplier"</TableHeaderCell>
                                <SortableHeader label="Harga" field="harga" sort=list.sort_signal() on_sort=on_sort min_width=120.0 />
                                <TableHeaderCell resizable=false min_width=80.0>"Satuan"</TableHeaderCell>
                                <SortableHeader label="Lead Time" field="lead_time_hari" sort=list.sort_signal() on_sort=on_sort min_width=100.0 />
                                <TableHeaderCell resizable=false min_width=90.0>"Status"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=90.0>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || list.items().get()
                                key=|i| (i.id, i.nama_item.clone(), i.harga.to_bits(), i.is_active, i.lead_time_hari, i.supplier_id)
                                children=move |item: KatalogItem| {
                                    let supplier = item.nama_supplier.clone().unwrap_or_else(|| "-".to_string());
                                    let status = if item.is_active {
                                        view! { <span class="badge badge--success">"Aktif"</span> }.into_any()
                                    } else {
                                        view! { <span class="badge badge--neutral">"Nonaktif"</span> }.into_any()
                                    };
                                    let lead_time = lead_time_label(&item);
                                    let for_edit = item.clone();
                                    let for_delete = item.clone();
                                    view! {
                                        <TableRow>
                                            <TableCell><TableCellLayout>{item.kode_item.clone().unwrap_or_else(|| "-".to_string())}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout truncate=true>{item.nama_item.clone()}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout truncate=true>{supplier}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout><span class="table__number">{format_rupiah(item.harga)}</span></TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{item.satuan.clone()}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{lead_time}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{status}</TableCellLayout></TableCell>
                                            <TableCell>
                                                <div class="table__actions">
                                                    <button class="btn btn--icon" title="Edit" on:click=move |_| editing.set(Some(Some(for_edit.clone())))>
                                                        {icon("edit")}
                                                    </button>
                                                    <button class="btn btn--icon btn--danger" title="Hapus" on:click=move |_| deleting.set(Some(for_delete.clone()))>
                                                        {icon("trash")}
                                                    </button>
                                                </div>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                </div>
            </div>

            {move || editing.get().map(|item| view! {
                <KatalogDialog
                    item=item
                    on_saved=Callback::new(move |_| {
                        editing.set(None);
                        list.refresh();
                    })
                    on_close=Callback::new(move |_| editing.set(None))
                />
            })}
            {move || deleting.get().map(|item| view! {
                <ConfirmDialog
                    title="Hapus Item Katalog"
                    message=format!("Hapus \"{}\" dari katalog?", item.nama_item)
                    on_confirm=confirm_delete
                    on_cancel=Callback::new(move |_| deleting.set(None))
                />
            })}
            <Show when=move || importing.get()>
                <ImportDialog
                    title="Impor Katalog Vendor"
                    endpoint=api::IMPORT_PATH
                    on_imported=Callback::new(move |_| list.refresh())
                    on_close=Callback::new(move |_| importing.set(false))
                />
            </Show>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_select_maps_to_bool_filter() {
        assert_eq!(parse_active("true"), Some(true));
        assert_eq!(parse_active("false"), Some(false));
        assert_eq!(parse_active(""), None);
    }
}
