use contracts::domain::a002_supplier::Supplier;
use contracts::shared::list_query::FilterParams;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a002_supplier::api;
use crate::domain::a002_supplier::ui::details::SupplierDialog;
use crate::shared::components::{ConfirmDialog, FilterPanel, ListPager, ListStatus, PageHeader, SearchInput};
use crate::shared::feedback::{run_mutation, use_notifications};
use crate::shared::icons::icon;
use crate::shared::list_controller::{use_list, SEARCH_KEY};
use crate::shared::list_utils::SortableHeader;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};

#[component]
pub fn SupplierList() -> impl IntoView {
    let list = use_list::<Supplier>(api::SUPPLIER, FilterParams::new());
    let notifications = use_notifications();
    let filters_expanded = RwSignal::new(true);
    let editing = RwSignal::new(None::<Option<Supplier>>);
    let deleting = RwSignal::new(None::<Supplier>);

    let confirm_delete = Callback::new(move |_| {
        let Some(supplier) = deleting.get_untracked() else {
            return;
        };
        deleting.set(None);
        spawn_local(async move {
            if run_mutation(notifications, "Menghapus supplier...", "Supplier berhasil dihapus", api::remove(supplier.id))
                .await
                .is_ok()
            {
                list.refresh();
            }
        });
    });

    let on_sort = Callback::new(move |field| list.toggle_sort(field));

    view! {
        <PageFrame page_id="supplier--list" category=PAGE_CAT_LIST>
            <PageHeader title="Supplier" subtitle=Signal::derive(move || format!("{} supplier", list.state.with(|s| s.response.total)))>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| editing.set(Some(None))>
                    {icon("plus")}
                    " Tambah Supplier"
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
                            placeholder="Nama, kontak atau email..."
                        />
                    }
                />

                <ListStatus list=list empty_message="Belum ada supplier" />

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <SortableHeader label="Nama Supplier" field="nama_supplier" sort=list.sort_signal() on_sort=on_sort min_width=180.0 />
                                <TableHeaderCell resizable=false min_width=140.0>"Kontak"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=160.0>"Email"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=120.0>"Telepon"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=90.0>"Status"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=90.0>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || list.items().get()
                                key=|s| (s.id, s.nama_supplier.clone(), s.kontak.clone(), s.email.clone(), s.telepon.clone(), s.is_active)
                                children=move |supplier: Supplier| {
                                    let dash = |v: &Option<String>| v.clone().unwrap_or_else(|| "-".to_string());
                                    let status = if supplier.is_active {
                                        view! { <span class="badge badge--success">"Aktif"</span> }.into_any()
                                    } else {
                                        view! { <span class="badge badge--neutral">"Nonaktif"</span> }.into_any()
                                    };
                                    let for_edit = supplier.clone();
                                    let for_delete = supplier.clone();
                                    view! {
                                        <TableRow>
                                            <TableCell><TableCellLayout truncate=true>{supplier.nama_supplier.clone()}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout truncate=true>{dash(&supplier.kontak)}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout truncate=true>{dash(&supplier.email)}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{dash(&supplier.telepon)}</TableCellLayout></TableCell>
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

            {move || editing.get().map(|supplier| view! {
                <SupplierDialog
                    supplier=supplier
                    on_saved=Callback::new(move |_| {
                        editing.set(None);
                        list.refresh();
                    })
                    on_close=Callback::new(move |_| editing.set(None))
                />
            })}
            {move || deleting.get().map(|supplier| view! {
                <ConfirmDialog
                    title="Hapus Supplier"
                    message=format!("Hapus supplier \"{}\"?", supplier.nama_supplier)
                    on_confirm=confirm_delete
                    on_cancel=Callback::new(move |_| deleting.set(None))
                />
            })}
        </PageFrame>
    }
}
