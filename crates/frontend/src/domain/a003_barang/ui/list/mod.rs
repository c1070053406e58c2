use contracts::domain::a001_kategori::Kategori;
use contracts::domain::a003_barang::Barang;
use contracts::shared::list_query::FilterParams;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a001_kategori::api::{option as kategori_option, KATEGORI};
use crate::domain::a003_barang::api;
use crate::domain::a003_barang::ui::details::model::delete_warning;
use crate::domain::a003_barang::ui::details::BarangDialog;
use crate::domain::a003_barang::ui::mutasi::MutasiDialog;
use crate::shared::components::{
    range_conflict, AmountFilter, ConfirmDialog, ExportButton, FilterPanel, FilterTag, ImportDialog, ListPager,
    ListStatus, PageHeader, SearchInput, SelectField, MAX_PRICE, MIN_PRICE,
};
use crate::shared::date_utils::format_rupiah;
use crate::shared::feedback::{reject_invalid, run_mutation, use_notifications};
use crate::shared::form_utils::parse_id;
use crate::shared::icons::icon;
use crate::shared::list_controller::{use_list, use_options, SEARCH_KEY};
use crate::shared::list_utils::SortableHeader;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};

const KATEGORI_ID: &str = "kategori_id";

#[component]
pub fn BarangList() -> impl IntoView {
    let list = use_list::<Barang>(api::BARANG, FilterParams::new());
    let notifications = use_notifications();
    let kategori_options = use_options::<Kategori>(KATEGORI, kategori_option);
    let filters_expanded = RwSignal::new(true);
    let editing = RwSignal::new(None::<Option<Barang>>);
    let moving = RwSignal::new(None::<Barang>);
    let deleting = RwSignal::new(None::<Barang>);
    let importing = RwSignal::new(false);

    let confirm_delete = Callback::new(move |_| {
        let Some(barang) = deleting.get_untracked() else {
            return;
        };
        deleting.set(None);
        spawn_local(async move {
            if run_mutation(notifications, "Menghapus barang...", "Barang berhasil dihapus", api::remove(barang.id))
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
    let kategori_label = Signal::derive(move || {
        let selected = list.state.with(|s| s.filters.get_text(KATEGORI_ID));
        kategori_options.with(|opts| {
            opts.iter()
                .find(|(value, _)| *value == selected)
                .map(|(_, label)| label.clone())
        })
    });

    view! {
        <PageFrame page_id="barang--list" category=PAGE_CAT_LIST>
            <PageHeader title="Stok Barang" subtitle=Signal::derive(move || format!("{} barang", list.state.with(|s| s.response.total)))>
                <ExportButton path=api::EXPORT_PATH file_stem="stok-barang" filters=filters />
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| importing.set(true)>
                    {icon("upload")}
                    " Impor"
                </Button>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| editing.set(Some(None))>
                    {icon("plus")}
                    " Tambah Barang"
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
                                placeholder="Kode atau nama barang..."
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
                        </Flex>
                    }
                    filter_tags=move || view! {
                        {move || kategori_label.get().map(|label| view! {
                            <FilterTag
                                label=format!("Kategori: {}", label)
                                on_remove=Callback::new(move |_| list.remove_filter(KATEGORI_ID))
                            />
                        })}
                    }
                />

                <ListStatus list=list empty_message="Belum ada barang" />

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <SortableHeader label="Kode" field="kode_barang" sort=list.sort_signal() on_sort=on_sort min_width=110.0 />
                                <SortableHeader label="Nama Barang" field="nama_barang" sort=list.sort_signal() on_sort=on_sort min_width=200.0 />
                                <TableHeaderCell resizable=false min_width=140.0>"Kategori"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=80.0>"Satuan"</TableHeaderCell>
                                <SortableHeader label="Harga" field="harga" sort=list.sort_signal() on_sort=on_sort min_width=120.0 />
                                <SortableHeader label="Stok" field="jumlah_stok" sort=list.sort_signal() on_sort=on_sort min_width=110.0 />
                                <TableHeaderCell resizable=false min_width=120.0>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || list.items().get()
                                key=|b| (b.id, b.updated_at.clone(), b.jumlah_stok(), b.nama_barang.clone())
                                children=move |barang: Barang| {
                                    let harga = barang.harga.map(format_rupiah).unwrap_or_else(|| "-".to_string());
                                    let stok = barang.jumlah_stok();
                                    let below_minimum = barang.is_below_minimum();
                                    let for_edit = barang.clone();
                                    let for_move = barang.clone();
                                    let for_delete = barang.clone();
                                    let kode_barang = barang.kode_barang.clone();
                                    let nama_barang = barang.nama_barang.clone();
                                    let nama_kategori = barang.nama_kategori().to_string();
                                    let satuan = barang.satuan.clone();
                                    view! {
                                        <TableRow>
                                            <TableCell><TableCellLayout>{kode_barang}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout truncate=true>{nama_barang}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout truncate=true>{nama_kategori}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{satuan}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout><span class="table__number">{harga}</span></TableCellLayout></TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <span class="table__number">{stok}</span>
                                                    {below_minimum.then(|| view! { <span class="badge badge--warning">"Di bawah minimum"</span> })}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <div class="table__actions">
                                                    <button class="btn btn--icon" title="Mutasi stok" on:click=move |_| moving.set(Some(for_move.clone()))>
                                                        {icon("arrows")}
                                                    </button>
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

            {move || editing.get().map(|barang| view! {
                <BarangDialog
                    barang=barang
                    on_saved=Callback::new(move |_| list.refresh())
                    on_close=Callback::new(move |_| editing.set(None))
                />
            })}
            {move || moving.get().map(|barang| view! {
                <MutasiDialog
                    barang=barang
                    on_saved=Callback::new(move |_| list.refresh())
                    on_close=Callback::new(move |_| moving.set(None))
                />
            })}
            {move || deleting.get().map(|barang| view! {
                <ConfirmDialog
                    title="Hapus Barang"
                    message=format!("Hapus barang \"{}\" ({})?", barang.nama_barang, barang.kode_barang)
                    warning=delete_warning(&barang)
                    on_confirm=confirm_delete
                    on_cancel=Callback::new(move |_| deleting.set(None))
                />
            })}
            <Show when=move || importing.get()>
                <ImportDialog
                    title="Impor Barang"
                    endpoint=api::IMPORT_PATH
                    on_imported=Callback::new(move |_| list.refresh())
                    on_close=Callback::new(move |_| importing.set(false))
                />
            </Show>
        </PageFrame>
    }
}
