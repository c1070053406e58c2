use contracts::domain::a001_kategori::Kategori;
use contracts::shared::list_query::FilterParams;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a001_kategori::api;
use crate::domain::a001_kategori::ui::details::KategoriDialog;
use crate::shared::components::{ConfirmDialog, FilterPanel, ListPager, ListStatus, PageHeader, SearchInput};
use crate::shared::feedback::{run_mutation, use_notifications};
use crate::shared::icons::icon;
use crate::shared::list_controller::{use_list, SEARCH_KEY};
use crate::shared::list_utils::SortableHeader;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};

/// Warning for deleting a category that still has items.
fn delete_warning(kategori: &Kategori) -> Option<String> {
    kategori
        .jumlah_barang
        .filter(|n| *n > 0)
        .map(|n| format!("Kategori ini masih digunakan oleh {} barang.", n))
}

#[component]
pub fn KategoriList() -> impl IntoView {
    let list = use_list::<Kategori>(api::KATEGORI, FilterParams::new());
    let notifications = use_notifications();
    let filters_expanded = RwSignal::new(true);
    let editing = RwSignal::new(None::<Option<Kategori>>);
    let deleting = RwSignal::new(None::<Kategori>);

    let confirm_delete = Callback::new(move |_| {
        let Some(kategori) = deleting.get_untracked() else {
            return;
        };
        deleting.set(None);
        spawn_local(async move {
            if run_mutation(notifications, "Menghapus kategori...", "Kategori berhasil dihapus", api::remove(kategori.id))
                .await
                .is_ok()
            {
                list.refresh();
            }
        });
    });

    let on_sort = Callback::new(move |field| list.toggle_sort(field));

    view! {
        <PageFrame page_id="kategori--list" category=PAGE_CAT_LIST>
            <PageHeader title="Kategori Barang" subtitle=Signal::derive(move || format!("{} kategori", list.state.with(|s| s.response.total)))>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| editing.set(Some(None))>
                    {icon("plus")}
                    " Tambah Kategori"
                </Button>
            </PageHeader>

            <div class="page__content">
                <FilterPanel
                    is_expanded=filters_expanded
                    active_filters_count=list.active_filter_count()
                    on_reset=Callback::new(move |_| list.clear_filters())
                    pagination_controls=move || view! { <ListPager list=list /> }
                    filter_content=move || view! {
                        <SearchInput
                            applied=list.filter_text(SEARCH_KEY)
                            on_search=Callback::new(move |text| list.search(text))
                            placeholder="Cari kategori..."
                        />
                    }
                />

                <ListStatus list=list empty_message="Belum ada kategori" />

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <SortableHeader label="Nama Kategori" field="nama_kategori" sort=list.sort_signal() on_sort=on_sort min_width=180.0 />
                                <TableHeaderCell resizable=false min_width=240.0>"Deskripsi"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=100.0>"Jumlah Barang"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=90.0>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || list.items().get()
                                key=|k| (k.id, k.nama_kategori.clone(), k.deskripsi.clone(), k.jumlah_barang)
                                children=move |kategori: Kategori| {
                                    let for_edit = kategori.clone();
                                    let for_delete = kategori.clone();
                                    view! {
                                        <TableRow>
                                            <TableCell><TableCellLayout truncate=true>{kategori.nama_kategori.clone()}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout truncate=true>{kategori.deskripsi.clone().unwrap_or_else(|| "-".to_string())}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{kategori.jumlah_barang.unwrap_or(0)}</TableCellLayout></TableCell>
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

            {move || editing.get().map(|kategori| view! {
                <KategoriDialog
                    kategori=kategori
                    on_saved=Callback::new(move |_| {
                        editing.set(None);
                        list.refresh();
                    })
                    on_close=Callback::new(move |_| editing.set(None))
                />
            })}
            {move || deleting.get().map(|kategori| view! {
                <ConfirmDialog
                    title="Hapus Kategori"
                    message=format!("Hapus kategori \"{}\"?", kategori.nama_kategori)
                    warning=delete_warning(&kategori)
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
    fn test_delete_warning_only_when_items_remain() {
        let mut kategori = Kategori {
            id: 1,
            nama_kategori: "ATK".into(),
            deskripsi: None,
            jumlah_barang: Some(0),
        };
        assert_eq!(delete_warning(&kategori), None);
        kategori.jumlah_barang = Some(3);
        assert!(delete_warning(&kategori).is_some());
    }
}
