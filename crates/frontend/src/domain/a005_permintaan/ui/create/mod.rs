pub mod model;

use contracts::domain::a003_barang::SATUAN_OPTIONS;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use self::model::{estimated_total, ItemLine, PermintaanForm};
use crate::domain::a005_permintaan::api;
use crate::shared::components::{DateInput, SelectField, TextAreaField, TextField};
use crate::shared::date_utils::format_rupiah;
use crate::shared::feedback::{reject_invalid, run_mutation, use_notifications};
use crate::shared::icons::icon;
use crate::shared::modal_frame::ModalFrame;

/// New purchase request with its item rows. `on_created` receives the new id
/// when the server returns one.
#[component]
pub fn PermintaanCreateDialog(
    on_created: Callback<Option<i64>>,
    on_close: Callback<()>,
) -> impl IntoView {
    let notifications = use_notifications();
    let form = RwSignal::new(PermintaanForm::default());
    let lines = RwSignal::new(vec![ItemLine::blank(1)]);
    let next_key = StoredValue::new(2u32);
    let saving = RwSignal::new(false);
    let satuan_options: Signal<Vec<(String, String)>> = Signal::stored(
        SATUAN_OPTIONS
            .iter()
            .map(|s| (s.to_string(), s.to_string()))
            .collect(),
    );

    let add_line = move |_| {
        let key = next_key.get_value();
        next_key.set_value(key + 1);
        lines.update(|l| l.push(ItemLine::blank(key)));
    };

    let edit_line = move |key: u32, f: fn(&mut ItemLine, String), value: String| {
        lines.update(|l| {
            if let Some(line) = l.iter_mut().find(|line| line.key == key) {
                f(line, value);
            }
        });
    };

    let on_save = move |_| {
        let dto = match form.with_untracked(|f| lines.with_untracked(|l| f.to_dto(l))) {
            Ok(dto) => dto,
            Err(msg) => return reject_invalid(&notifications, msg),
        };
        saving.set(true);
        spawn_local(async move {
            let result = run_mutation(notifications, "Menyimpan permintaan...", "Permintaan berhasil dibuat", api::create(&dto)).await;
            saving.try_set(false);
            if let Ok(response) = result {
                on_created.run(api::created_id(&response));
            }
        });
    };

    view! {
        <ModalFrame title="Buat Permintaan" on_close=on_close modal_class="modal--wide">
            <TextField
                label="Judul"
                required=true
                value=Signal::derive(move || form.with(|f| f.judul.clone()))
                on_input=Callback::new(move |v| form.update(|f| f.judul = v))
            />
            <TextAreaField
                label="Keperluan"
                value=Signal::derive(move || form.with(|f| f.keperluan.clone()))
                on_input=Callback::new(move |v| form.update(|f| f.keperluan = v))
            />
            <DateInput
                label="Tanggal Dibutuhkan"
                value=Signal::derive(move || form.with(|f| f.tanggal_dibutuhkan.clone()))
                on_change=Callback::new(move |v| form.update(|f| f.tanggal_dibutuhkan = v))
            />

            <div class="item-lines">
                <div class="item-lines__header">
                    <span>"Nama Barang"</span>
                    <span>"Jumlah"</span>
                    <span>"Satuan"</span>
                    <span>"Harga Estimasi"</span>
                    <span></span>
                </div>
                <For
                    each=move || lines.get()
                    key=|line| line.key
                    children=move |line: ItemLine| {
                        let key = line.key;
                        let field = move |get: fn(&ItemLine) -> String| {
                            Signal::derive(move || {
                                lines.with(|l| l.iter().find(|x| x.key == key).map(get).unwrap_or_default())
                            })
                        };
                        view! {
                            <div class="item-lines__row">
                                <TextField
                                    label=""
                                    placeholder="Nama barang"
                                    value=field(|l| l.nama_barang.clone())
                                    on_input=Callback::new(move |v| edit_line(key, |l, v| l.nama_barang = v, v))
                                />
                                <TextField
                                    label=""
                                    input_type="number"
                                    value=field(|l| l.jumlah.clone())
                                    on_input=Callback::new(move |v| edit_line(key, |l, v| l.jumlah = v, v))
                                />
                                <SelectField
                                    options=satuan_options
                                    value=field(|l| l.satuan.clone())
                                    on_change=Callback::new(move |v| edit_line(key, |l, v| l.satuan = v, v))
                                />
                                <TextField
                                    label=""
                                    placeholder="Rp"
                                    value=field(|l| l.harga_estimasi.clone())
                                    on_input=Callback::new(move |v| edit_line(key, |l, v| l.harga_estimasi = v, v))
                                />
                                <button
                                    class="btn btn--icon btn--danger"
                                    title="Hapus baris"
                                    disabled=move || lines.with(|l| l.len() <= 1)
                                    on:click=move |_| lines.update(|l| l.retain(|x| x.key != key))
                                >
                                    {icon("trash")}
                                </button>
                            </div>
                        }
                    }
                />
                <div class="item-lines__footer">
                    <button class="btn btn--link" on:click=add_line>
                        {icon("plus")}
                        " Tambah baris"
                    </button>
                    <span class="item-lines__total">
                        "Estimasi total: "
                        {move || lines.with(|l| format_rupiah(estimated_total(l)))}
                    </span>
                </div>
            </div>

            <div class="modal-footer">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>"Batal"</Button>
                <Button appearance=ButtonAppearance::Primary on_click=on_save disabled=Signal::derive(move || saving.get())>
                    "Simpan"
                </Button>
            </div>
        </ModalFrame>
    }
}
