use contracts::domain::a003_barang::{Barang, JenisMutasi, MutasiStokDto};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a003_barang::api;
use crate::shared::components::{SelectField, TextAreaField, TextField};
use crate::shared::feedback::{reject_invalid, run_mutation, use_notifications};
use crate::shared::form_utils::{non_empty, parse_count};
use crate::shared::modal_frame::ModalFrame;

fn jenis_from_code(code: &str) -> JenisMutasi {
    match code {
        "keluar" => JenisMutasi::Keluar,
        _ => JenisMutasi::Masuk,
    }
}

/// Builds and checks a stock movement against what is on hand.
fn build_mutasi(jenis: &str, jumlah: &str, keterangan: &str, stok: i64) -> Result<MutasiStokDto, String> {
    let dto = MutasiStokDto {
        jenis: jenis_from_code(jenis),
        jumlah: parse_count(jumlah, "Jumlah")?.unwrap_or(0),
        keterangan: non_empty(keterangan),
    };
    dto.validate(stok)?;
    Ok(dto)
}

#[component]
pub fn MutasiDialog(barang: Barang, on_saved: Callback<()>, on_close: Callback<()>) -> impl IntoView {
    let notifications = use_notifications();
    let jenis = RwSignal::new("masuk".to_string());
    let jumlah = RwSignal::new(String::new());
    let keterangan = RwSignal::new(String::new());
    let saving = RwSignal::new(false);
    let id = barang.id;
    let stok = barang.jumlah_stok();
    let jenis_options = vec![
        ("masuk".to_string(), JenisMutasi::Masuk.label().to_string()),
        ("keluar".to_string(), JenisMutasi::Keluar.label().to_string()),
    ];

    let on_save = move |_| {
        let dto = match build_mutasi(
            &jenis.get_untracked(),
            &jumlah.get_untracked(),
            &keterangan.get_untracked(),
            stok,
        ) {
            Ok(dto) => dto,
            Err(msg) => return reject_invalid(&notifications, msg),
        };
        saving.set(true);
        spawn_local(async move {
            let result = run_mutation(notifications, "Mencatat mutasi stok...", "Mutasi stok berhasil dicatat", api::mutasi(id, &dto)).await;
            saving.try_set(false);
            if result.is_ok() {
                on_saved.run(());
                on_close.run(());
            }
        });
    };

    let summary = format!("{} ({}), stok saat ini: {} {}", barang.nama_barang, barang.kode_barang, stok, barang.satuan);

    view! {
        <ModalFrame title="Mutasi Stok" on_close=on_close>
            <p class="form-hint">{summary}</p>
            <SelectField
                label="Jenis"
                options=Signal::stored(jenis_options)
                value=jenis
                on_change=Callback::new(move |v| jenis.set(v))
            />
            <TextField
                label="Jumlah"
                required=true
                input_type="number"
                value=jumlah
                on_input=Callback::new(move |v| jumlah.set(v))
            />
            <TextAreaField
                label="Keterangan"
                value=keterangan
                on_input=Callback::new(move |v| keterangan.set(v))
            />
            <div class="modal-footer">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>"Batal"</Button>
                <Button appearance=ButtonAppearance::Primary on_click=on_save disabled=Signal::derive(move || saving.get())>
                    "Simpan"
                </Button>
            </div>
        </ModalFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outgoing_cannot_exceed_stock() {
        assert!(build_mutasi("keluar", "8", "", 5).is_err());
        let dto = build_mutasi("keluar", "5", " rusak ", 5).unwrap();
        assert_eq!(dto.jenis, JenisMutasi::Keluar);
        assert_eq!(dto.keterangan.as_deref(), Some("rusak"));
    }

    #[test]
    fn test_blank_quantity_is_rejected() {
        assert!(build_mutasi("masuk", "", "", 0).is_err());
        assert_eq!(build_mutasi("masuk", "12", "", 0).map(|d| d.jumlah), Ok(12));
    }
}
