use contracts::domain::a001_kategori::Kategori;
use contracts::domain::a002_supplier::Supplier;
use contracts::domain::a003_barang::SATUAN_OPTIONS;
use contracts::domain::a004_katalog_vendor::{KatalogItem, KatalogItemDto};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a001_kategori::api::{option as kategori_option, KATEGORI};
use crate::domain::a002_supplier::api::{option as supplier_option, SUPPLIER};
use crate::domain::a004_katalog_vendor::api;
use crate::shared::components::{SelectField, TextField};
use crate::shared::feedback::{reject_invalid, run_mutation, use_notifications};
use crate::shared::form_utils::{non_empty, parse_amount, parse_count, parse_id};
use crate::shared::list_controller::use_options;
use crate::shared::modal_frame::ModalFrame;

#[derive(Debug, Clone, PartialEq)]
struct KatalogForm {
    supplier_id: String,
    kategori_id: String,
    kode_item: String,
    nama_item: String,
    harga: String,
    satuan: String,
    minimum_order: String,
    lead_time_hari: String,
    is_active: bool,
}

impl Default for KatalogForm {
    fn default() -> Self {
        Self {
            supplier_id: String::new(),
            kategori_id: String::new(),
            kode_item: String::new(),
            nama_item: String::new(),
            harga: String::new(),
            satuan: SATUAN_OPTIONS[0].to_string(),
            minimum_order: String::new(),
            lead_time_hari: String::new(),
            is_active: true,
        }
    }
}

impl KatalogForm {
    fn from_item(item: &KatalogItem) -> Self {
        let dto = KatalogItemDto::from_item(item);
        Self {
            supplier_id: dto.supplier_id.to_string(),
            kategori_id: dto.kategori_id.map(|id| id.to_string()).unwrap_or_default(),
            kode_item: dto.kode_item.unwrap_or_default(),
            nama_item: dto.nama_item,
            harga: dto.harga.to_string(),
            satuan: dto.satuan,
            minimum_order: dto.minimum_order.map(|n| n.to_string()).unwrap_or_default(),
            lead_time_hari: dto.lead_time_hari.map(|n| n.to_string()).unwrap_or_default(),
            is_active: dto.is_active,
        }
    }

    fn to_dto(&self) -> Result<KatalogItemDto, String> {
        let dto = KatalogItemDto {
            supplier_id: parse_id(&self.supplier_id).unwrap_or(0),
            kategori_id: parse_id(&self.kategori_id),
            kode_item: non_empty(&self.kode_item),
            nama_item: self.nama_item.trim().to_string(),
            harga: parse_amount(&self.harga, "Harga")?.ok_or("Harga wajib diisi")?,
            satuan: self.satuan.trim().to_string(),
            minimum_order: parse_count(&self.minimum_order, "Minimum order")?,
            lead_time_hari: parse_count(&self.lead_time_hari, "Lead time")?,
            is_active: self.is_active,
        };
        dto.validate()?;
        Ok(dto)
    }
}

#[component]
pub fn KatalogDialog(
    item: Option<KatalogItem>,
    on_saved: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let notifications = use_notifications();
    let id = item.as_ref().map(|i| i.id);
    let form = RwSignal::new(item.as_ref().map(KatalogForm::from_item).unwrap_or_default());
    let saving = RwSignal::new(false);
    let supplier_options = use_options::<Supplier>(SUPPLIER, supplier_option);
    let kategori_options = use_options::<Kategori>(KATEGORI, kategori_option);
    let satuan_options: Vec<(String, String)> = SATUAN_OPTIONS
        .iter()
        .map(|s| (s.to_string(), s.to_string()))
        .collect();

    let on_save = move |_| {
        let dto = match form.with_untracked(KatalogForm::to_dto) {
            Ok(dto) => dto,
            Err(msg) => return reject_invalid(&notifications, msg),
        };
        saving.set(true);
        spawn_local(async move {
            let result = match id {
                Some(id) => run_mutation(notifications, "Menyimpan item katalog...", "Item katalog berhasil diperbarui", api::update(id, &dto)).await,
                None => run_mutation(notifications, "Menyimpan item katalog...", "Item katalog berhasil ditambahkan", api::create(&dto)).await,
            };
            saving.try_set(false);
            if result.is_ok() {
                on_saved.run(());
            }
        });
    };

    view! {
        <ModalFrame title=if id.is_some() { "Edit Item Katalog" } else { "Tambah Item Katalog" } on_close=on_close modal_class="modal--wide">
            <SelectField
                label="Supplier"
                placeholder="Pilih supplier"
                options=supplier_options
                value=Signal::derive(move || form.with(|f| f.supplier_id.clone()))
                on_change=Callback::new(move |v| form.update(|f| f.supplier_id = v))
            />
            <SelectField
                label="Kategori"
                placeholder="Tanpa kategori"
                options=kategori_options
                value=Signal::derive(move || form.with(|f| f.kategori_id.clone()))
                on_change=Callback::new(move |v| form.update(|f| f.kategori_id = v))
            />
            <TextField
                label="Kode Item"
                value=Signal::derive(move || form.with(|f| f.kode_item.clone()))
                on_input=Callback::new(move |v| form.update(|f| f.kode_item = v))
            />
            <TextField
                label="Nama Item"
                required=true
                value=Signal::derive(move || form.with(|f| f.nama_item.clone()))
                on_input=Callback::new(move |v| form.update(|f| f.nama_item = v))
            />
            <TextField
                label="Harga"
                required=true
                placeholder="Rp"
                value=Signal::derive(move || form.with(|f| f.harga.clone()))
                on_input=Callback::new(move |v| form.update(|f| f.harga = v))
            />
            <SelectField
                label="Satuan"
                options=Signal::stored(satuan_options)
                value=Signal::derive(move || form.with(|f| f.satuan.clone()))
                on_change=Callback::new(move |v| form.update(|f| f.satuan = v))
            />
            <TextField
                label="Minimum Order"
                input_type="number"
                value=Signal::derive(move || form.with(|f| f.minimum_order.clone()))
                on_input=Callback::new(move |v| form.update(|f| f.minimum_order = v))
            />
            <TextField
                label="Lead Time (hari)"
                input_type="number"
                value=Signal::derive(move || form.with(|f| f.lead_time_hari.clone()))
                on_input=Callback::new(move |v| form.update(|f| f.lead_time_hari = v))
            />
            <label class="form__checkbox">
                <input
                    type="checkbox"
                    prop:checked=move || form.with(|f| f.is_active)
                    on:change=move |ev| form.update(|f| f.is_active = event_target_checked(&ev))
                />
                " Aktif"
            </label>
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
    fn test_form_requires_supplier_and_price() {
        let mut form = KatalogForm {
            nama_item: "Toner HP 85A".into(),
            harga: "450.000,00".into(),
            ..Default::default()
        };
        assert_eq!(form.to_dto(), Err("Supplier wajib dipilih".to_string()));
        form.supplier_id = "4".into();
        let dto = form.to_dto().unwrap();
        assert_eq!(dto.harga, 450_000.0);
        assert_eq!(dto.kategori_id, None);
        form.harga = String::new();
        assert_eq!(form.to_dto(), Err("Harga wajib diisi".to_string()));
    }

    #[test]
    fn test_lead_time_must_be_whole_days() {
        let form = KatalogForm {
            supplier_id: "1".into(),
            nama_item: "Map".into(),
            harga: "2500".into(),
            lead_time_hari: "2.5".into(),
            ..Default::default()
        };
        assert!(form.to_dto().is_err());
    }
}
