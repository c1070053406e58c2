use contracts::domain::a001_kategori::{Kategori, KategoriDto};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a001_kategori::api;
use crate::shared::components::{TextAreaField, TextField};
use crate::shared::feedback::{reject_invalid, run_mutation, use_notifications};
use crate::shared::form_utils::non_empty;
use crate::shared::modal_frame::ModalFrame;

#[component]
pub fn KategoriDialog(
    kategori: Option<Kategori>,
    on_saved: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let notifications = use_notifications();
    let id = kategori.as_ref().map(|k| k.id);
    let dto = kategori.as_ref().map(KategoriDto::from_kategori).unwrap_or_default();
    let nama = RwSignal::new(dto.nama_kategori);
    let deskripsi = RwSignal::new(dto.deskripsi.unwrap_or_default());
    let saving = RwSignal::new(false);

    let on_save = move |_| {
        let dto = KategoriDto {
            nama_kategori: nama.get_untracked().trim().to_string(),
            deskripsi: non_empty(&deskripsi.get_untracked()),
        };
        if let Err(msg) = dto.validate() {
            reject_invalid(&notifications, msg);
            return;
        }
        saving.set(true);
        spawn_local(async move {
            let result = match id {
                Some(id) => run_mutation(notifications, "Menyimpan kategori...", "Kategori berhasil diperbarui", api::update(id, &dto)).await,
                None => run_mutation(notifications, "Menyimpan kategori...", "Kategori berhasil ditambahkan", api::create(&dto)).await,
            };
            saving.try_set(false);
            if result.is_ok() {
                on_saved.run(());
            }
        });
    };

    let title = if id.is_some() { "Edit Kategori" } else { "Tambah Kategori" };

    view! {
        <ModalFrame title=title on_close=on_close>
            <TextField label="Nama Kategori" required=true value=nama on_input=Callback::new(move |v| nama.set(v)) />
            <TextAreaField label="Deskripsi" value=deskripsi on_input=Callback::new(move |v| deskripsi.set(v)) />
            <div class="modal-footer">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>"Batal"</Button>
                <Button appearance=ButtonAppearance::Primary on_click=on_save disabled=Signal::derive(move || saving.get())>
                    "Simpan"
                </Button>
            </div>
        </ModalFrame>
    }
}
