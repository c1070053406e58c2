use contracts::domain::a005_permintaan::{cheapest, ApprovalDto, Penawaran, Permintaan};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a005_permintaan::api;
use crate::layout::global_context::use_app_context;
use crate::layout::tabs::tab_labels::{detail_tab_label, permintaan_detail_key};
use crate::shared::components::{ConfirmDialog, PageHeader, TextAreaField};
use crate::shared::date_utils::{format_date, format_rupiah};
use crate::shared::feedback::{reject_invalid, run_mutation, use_notifications};
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_DETAIL};
use crate::shared::query_cache::use_query_client;
use crate::system::auth::context::use_auth;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Decision {
    Approve,
    Reject,
}

/// Approval body; a rejection without a reason never reaches the server.
fn approval_body(decision: Decision, note: &str) -> Result<ApprovalDto, String> {
    let dto = ApprovalDto::new(note);
    if decision == Decision::Reject {
        dto.validate_rejection()?;
    }
    Ok(dto)
}

fn dash(value: &Option<String>) -> String {
    value.clone().unwrap_or_else(|| "-".to_string())
}

#[component]
pub fn PermintaanDetails(id: i64, on_close: Callback<()>) -> impl IntoView {
    let notifications = use_notifications();
    let client = use_query_client();
    let ctx = use_app_context();
    let auth = use_auth();
    let can_approve = Memo::new(move |_| {
        auth.with(|a| a.user_info.as_ref().is_some_and(|u| u.can_approve()))
    });

    let permintaan = RwSignal::new(None::<Permintaan>);
    let penawaran = RwSignal::new(Vec::<Penawaran>::new());
    let error = RwSignal::new(None::<String>);
    let loading = RwSignal::new(false);
    let note = RwSignal::new(String::new());
    let confirming_delete = RwSignal::new(false);

    let load = move || {
        loading.set(true);
        spawn_local(async move {
            match api::get(id).await {
                Ok(p) => {
                    ctx.update_tab_title(&permintaan_detail_key(id), &detail_tab_label("Permintaan", &p.nomor));
                    permintaan.try_set(Some(p));
                    error.try_set(None);
                }
                Err(e) => {
                    log::warn!("permintaan {} failed: {}", id, e);
                    error.try_set(Some(e.user_message()));
                }
            }
            match api::list_penawaran(id).await {
                Ok(list) => {
                    penawaran.try_set(list);
                }
                Err(e) => log::warn!("penawaran for {} failed: {}", id, e),
            }
            loading.try_set(false);
        });
    };
    load();

    let after_change = move || {
        client.invalidate(api::PERMINTAAN.resource);
        load();
    };

    let decide = move |decision: Decision| {
        let dto = match approval_body(decision, &note.get_untracked()) {
            Ok(dto) => dto,
            Err(msg) => return reject_invalid(&notifications, msg),
        };
        spawn_local(async move {
            let result = match decision {
                Decision::Approve => run_mutation(notifications, "Menyetujui permintaan...", "Permintaan disetujui", api::approve(id, &dto)).await,
                Decision::Reject => run_mutation(notifications, "Menolak permintaan...", "Permintaan ditolak", api::reject(id, &dto)).await,
            };
            if result.is_ok() {
                note.try_set(String::new());
                after_change();
            }
        });
    };

    let select = move |penawaran_id: i64| {
        spawn_local(async move {
            if run_mutation(notifications, "Memilih penawaran...", "Penawaran dipilih", api::select_penawaran(id, penawaran_id))
                .await
                .is_ok()
            {
                after_change();
            }
        });
    };

    let confirm_delete = Callback::new(move |_| {
        confirming_delete.set(false);
        spawn_local(async move {
            if run_mutation(notifications, "Menghapus permintaan...", "Permintaan berhasil dihapus", api::remove(id))
                .await
                .is_ok()
            {
                client.invalidate(api::PERMINTAAN.resource);
                on_close.run(());
            }
        });
    });

    let header_title = Signal::derive(move || {
        permintaan.with(|p| p.as_ref().map(|p| p.nomor.clone()).unwrap_or_else(|| "Permintaan".to_string()))
    });

    view! {
        <PageFrame page_id="permintaan--detail" category=PAGE_CAT_DETAIL>
            {move || view! {
                <PageHeader title=header_title.get() subtitle=Signal::derive(move || permintaan.with(|p| p.as_ref().map(|p| p.judul.clone())))>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| load() disabled=Signal::derive(move || loading.get())>
                        {icon("refresh")}
                        " Muat ulang"
                    </Button>
                    <Show when=move || permintaan.with(|p| p.as_ref().is_some_and(|p| p.status.can_delete()))>
                        <Button appearance=ButtonAppearance::Secondary on_click=move |_| confirming_delete.set(true)>
                            {icon("trash")}
                            " Hapus"
                        </Button>
                    </Show>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                        {icon("x")}
                        " Tutup"
                    </Button>
                </PageHeader>
            }}

            {move || error.get().map(|e| view! {
                <div class="alert alert--error">
                    {e}
                    <button class="btn btn--link" on:click=move |_| load()>"Coba lagi"</button>
                </div>
            })}

            {move || permintaan.get().map(|p| {
                let status = p.status;
                let total = format_rupiah(p.estimasi());
                let catatan = p.catatan_approval.clone();
                view! {
                    <div class="page__content">
                        <div class="detail-grid">
                            <div class="detail-grid__label">"Status"</div>
                            <div><span class=status.badge_class()>{status.label()}</span></div>
                            <div class="detail-grid__label">"Pemohon"</div>
                            <div>{dash(&p.pemohon)}</div>
                            <div class="detail-grid__label">"Departemen"</div>
                            <div>{dash(&p.departemen)}</div>
                            <div class="detail-grid__label">"Tanggal permintaan"</div>
                            <div>{format_date(&p.tanggal_permintaan)}</div>
                            <div class="detail-grid__label">"Dibutuhkan"</div>
                            <div>{p.tanggal_dibutuhkan.as_deref().map(format_date).unwrap_or_else(|| "-".to_string())}</div>
                            <div class="detail-grid__label">"Keperluan"</div>
                            <div>{dash(&p.keperluan)}</div>
                        </div>
                        {catatan.map(|c| view! { <div class="alert alert--info">"Catatan persetujuan: "{c}</div> })}

                        <h4 class="section-title">"Barang"</h4>
                        <Table attr:style="width: 100%;">
                            <TableHeader>
                                <TableRow>
                                    <TableHeaderCell resizable=false min_width=200.0>"Nama Barang"</TableHeaderCell>
                                    <TableHeaderCell resizable=false min_width=80.0>"Jumlah"</TableHeaderCell>
                                    <TableHeaderCell resizable=false min_width=80.0>"Satuan"</TableHeaderCell>
                                    <TableHeaderCell resizable=false min_width=120.0>"Harga Estimasi"</TableHeaderCell>
                                    <TableHeaderCell resizable=false min_width=120.0>"Subtotal"</TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                {p.items.iter().map(|item| {
                                    let nama_barang = item.nama_barang.clone();
                                    let jumlah = item.jumlah;
                                    let satuan = item.satuan.clone();
                                    let harga = item.harga_estimasi.map(format_rupiah).unwrap_or_else(|| "-".to_string());
                                    let subtotal = format_rupiah(item.subtotal());
                                    view! {
                                    <TableRow>
                                        <TableCell><TableCellLayout truncate=true>{nama_barang}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout><span class="table__number">{jumlah}</span></TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{satuan}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout><span class="table__number">{harga}</span></TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout><span class="table__number">{subtotal}</span></TableCellLayout></TableCell>
                                    </TableRow>
                                    }
                                }).collect_view()}
                            </TableBody>
                        </Table>
                        <div class="detail-total">"Estimasi total: "{total}</div>

                        <Show when=move || status.awaiting_approval() && can_approve.get()>
                            <div class="approval-panel">
                                <TextAreaField
                                    label="Catatan"
                                    placeholder="Wajib diisi jika menolak"
                                    value=note
                                    on_input=Callback::new(move |v| note.set(v))
                                />
                                <Flex gap=FlexGap::Small>
                                    <Button appearance=ButtonAppearance::Primary on_click=move |_| decide(Decision::Approve)>
                                        {icon("check")}
                                        " Setujui"
                                    </Button>
                                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| decide(Decision::Reject)>
                                        {icon("x")}
                                        " Tolak"
                                    </Button>
                                </Flex>
                            </div>
                        </Show>

                        <h4 class="section-title">"Penawaran Vendor"</h4>
                        <PenawaranTable
                            penawaran=penawaran
                            can_select=status.can_select_penawaran()
                            on_select=Callback::new(select)
                        />
                    </div>
                }
            })}

            <Show when=move || confirming_delete.get()>
                <ConfirmDialog
                    title="Hapus Permintaan"
                    message="Hapus draft permintaan ini?"
                    on_confirm=confirm_delete
                    on_cancel=Callback::new(move |_| confirming_delete.set(false))
                />
            </Show>
        </PageFrame>
    }
}

/// Quotations with the cheapest one marked.
#[component]
fn PenawaranTable(
    penawaran: RwSignal<Vec<Penawaran>>,
    can_select: bool,
    on_select: Callback<i64>,
) -> impl IntoView {
    let cheapest_id = Memo::new(move |_| penawaran.with(|p| cheapest(p)));
    let any_selected = Memo::new(move |_| penawaran.with(|p| p.iter().any(|x| x.dipilih)));

    view! {
        <Show
            when=move || penawaran.with(|p| !p.is_empty())
            fallback=|| view! { <div class="empty-state">"Belum ada penawaran"</div> }
        >
            <Table attr:style="width: 100%;">
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell resizable=false min_width=180.0>"Supplier"</TableHeaderCell>
                        <TableHeaderCell resizable=false min_width=130.0>"Total Harga"</TableHeaderCell>
                        <TableHeaderCell resizable=false min_width=90.0>"Lead Time"</TableHeaderCell>
                        <TableHeaderCell resizable=false min_width=110.0>"Berlaku s/d"</TableHeaderCell>
                        <TableHeaderCell resizable=false min_width=160.0>"Catatan"</TableHeaderCell>
                        <TableHeaderCell resizable=false min_width=100.0>""</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    <For
                        each=move || penawaran.get()
                        key=|p| (p.id, p.dipilih)
                        children=move |offer: Penawaran| {
                            let offer_id = offer.id;
                            let is_cheapest = move || cheapest_id.get() == Some(offer_id);
                            let dipilih = offer.dipilih;
                            view! {
                                <TableRow class=Signal::derive(move || if is_cheapest() { "table__row--highlight".to_string() } else { String::new() })>
                                    <TableCell>
                                        <TableCellLayout truncate=true>
                                            {dash(&offer.nama_supplier)}
                                            <Show when=is_cheapest>
                                                <span class="badge badge--success">"Termurah"</span>
                                            </Show>
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCell><TableCellLayout><span class="table__number">{format_rupiah(offer.total_harga)}</span></TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout>{offer.lead_time_hari.map(|d| format!("{} hari", d)).unwrap_or_else(|| "-".to_string())}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout>{offer.masa_berlaku.as_deref().map(format_date).unwrap_or_else(|| "-".to_string())}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout truncate=true>{dash(&offer.catatan)}</TableCellLayout></TableCell>
                                    <TableCell>
                                        {if dipilih {
                                            view! { <span class="badge badge--primary">"Dipilih"</span> }.into_any()
                                        } else if can_select {
                                            view! {
                                                <Button
                                                    appearance=ButtonAppearance::Secondary
                                                    disabled=Signal::derive(move || any_selected.get())
                                                    on_click=move |_| on_select.run(offer_id)
                                                >
                                                    "Pilih"
                                                </Button>
                                            }.into_any()
                                        } else {
                                            ().into_any()
                                        }}
                                    </TableCell>
                                </TableRow>
                            }
                        }
                    />
                </TableBody>
            </Table>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_requires_a_reason() {
        assert!(approval_body(Decision::Reject, "  ").is_err());
        assert_eq!(
            approval_body(Decision::Reject, "Anggaran habis").map(|d| d.catatan),
            Ok(Some("Anggaran habis".to_string()))
        );
    }

    #[test]
    fn test_approval_note_is_optional() {
        assert_eq!(approval_body(Decision::Approve, ""), Ok(ApprovalDto { catatan: None }));
    }
}
