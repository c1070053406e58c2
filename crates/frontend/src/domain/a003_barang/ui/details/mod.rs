pub mod model;

use contracts::domain::a001_kategori::Kategori;
use contracts::domain::a003_barang::{Barang, SATUAN_OPTIONS};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use self::model::BarangForm;
use crate::domain::a001_kategori::api::{option as kategori_option, KATEGORI};
use crate::domain::a003_barang::api;
use crate::shared::components::{SelectField, TextAreaField, TextField};
use crate::shared::feedback::{reject_invalid, run_mutation, use_notifications};
use crate::shared::list_controller::use_options;
use crate::shared::modal_frame::ModalFrame;

/// Create or edit dialog. In create mode the form is cleared after each
/// successful save and stays open for the next item; edit mode closes.
#[component]
pub fn BarangDialog(
    barang: Option<Barang>,
    on_saved: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let notifications = use_notifications();
    let id = barang.as_ref().map(|b| b.id);
    let form = RwSignal::new(barang.as_ref().map(BarangForm::from_barang).unwrap_or_default());
    let saving = RwSignal::new(false);
    let kategori_options = use_options::<Kategori>(KATEGORI, kategori_option);
    let satuan_options: Vec<(String, String)> = SATUAN_OPTIONS
        .iter()
        .map(|s| (s.to_string(), s.to_string()))
        .collect();

    let on_save = move |_| {
        if let Some(id) = id {
            let dto = match form.with_untracked(BarangForm::to_update_dto) {
                Ok(dto) => dto,
                Err(msg) => return reject_invalid(&notifications, msg),
            };
            saving.set(true);
            spawn_local(async move {
                let result = run_mutation(notifications, "Menyimpan barang...", "Barang berhasil diperbarui", api::update(id, &dto)).await;
                saving.try_set(false);
                if result.is_ok() {
                    on_saved.run(());
                    on_close.run(());
                }
            });
        } else {
            let dto = match form.with_untracked(BarangForm::to_create_dto) {
                Ok(dto) => dto,
                Err(msg) => return reject_invalid(&notifications, msg),
            };
            saving.set(true);
            spawn_local(async move {
                let result = run_mutation(notifications, "Menyimpan barang...", "Barang berhasil ditambahkan", api::create(&dto)).await;
                saving.try_set(false);
                if result.is_ok() {
                    form.try_update(BarangForm::reset);
                    on_saved.run(());
                }
            });
        }
    };

    let is_edit = id.is_some();

    view! {
        <ModalFrame title=if is_edit { "Edit Barang" } else { "Tambah Barang" } on_close=on_close>
            <TextField
                label="Kode Barang"
                required=true
                value=Signal::derive(move || form.with(|f| f.kode_barang.clone()))
                on_input=Callback::new(move |v| form.update(|f| f.kode_barang = v))
            />
            <TextField
                label="Nama Barang"
                required=true
                value=Signal::derive(move || form.with(|f| f.nama_barang.clone()))
                on_input=Callback::new(move |v| form.update(|f| f.nama_barang = v))
            />
            <SelectField
                label="Kategori"
                placeholder="Pilih kategori"
                options=kategori_options
                value=Signal::derive(move || form.with(|f| f.kategori_id.clone()))
                on_change=Callback::new(move |v| form.update(|f| f.kategori_id = v))
            />
            <SelectField
                label="Satuan"
                options=Signal::stored(satuan_options)
                value=Signal::derive(move || form.with(|f| f.satuan.clone()))
                on_change=Callback::new(move |v| form.update(|f| f.satuan = v))
            />
            <Show when=move || is_edit>
                <TextField
                    label="Harga"
                    placeholder="Rp"
                    value=Signal::derive(move || form.with(|f| f.harga.clone()))
                    on_input=Callback::new(move |v| form.update(|f| f.harga = v))
                />
                <TextAreaField
                    label="Deskripsi"
                    value=Signal::derive(move || form.with(|f| f.deskripsi.clone()))
                    on_input=Callback::new(move |v| form.update(|f| f.deskripsi = v))
                />
            </Show>
            <div class="modal-footer">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>"Tutup"</Button>
                <Button appearance=ButtonAppearance::Primary on_click=on_save disabled=Signal::derive(move || saving.get())>
                    "Simpan"
                </Button>
            </div>
        </ModalFrame>
    }
}
