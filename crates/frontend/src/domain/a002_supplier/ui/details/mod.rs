use contracts::domain::a002_supplier::{Supplier, SupplierDto};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a002_supplier::api;
use crate::shared::components::{TextAreaField, TextField};
use crate::shared::feedback::{reject_invalid, run_mutation, use_notifications};
use crate::shared::form_utils::non_empty;
use crate::shared::modal_frame::ModalFrame;

/// Raw text of the supplier form; blanks become `None` on submit.
#[derive(Debug, Clone, Default, PartialEq)]
struct SupplierForm {
    nama_supplier: String,
    kontak: String,
    email: String,
    telepon: String,
    alamat: String,
}

impl SupplierForm {
    fn from_dto(dto: SupplierDto) -> Self {
        Self {
            nama_supplier: dto.nama_supplier,
            kontak: dto.kontak.unwrap_or_default(),
            email: dto.email.unwrap_or_default(),
            telepon: dto.telepon.unwrap_or_default(),
            alamat: dto.alamat.unwrap_or_default(),
        }
    }

    fn to_dto(&self) -> SupplierDto {
        SupplierDto {
            nama_supplier: self.nama_supplier.trim().to_string(),
            kontak: non_empty(&self.kontak),
            email: non_empty(&self.email),
            telepon: non_empty(&self.telepon),
            alamat: non_empty(&self.alamat),
        }
    }
}

#[component]
pub fn SupplierDialog(
    supplier: Option<Supplier>,
    on_saved: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let notifications = use_notifications();
    let id = supplier.as_ref().map(|s| s.id);
    let form = RwSignal::new(
        supplier
            .as_ref()
            .map(|s| SupplierForm::from_dto(SupplierDto::from_supplier(s)))
            .unwrap_or_default(),
    );
    let saving = RwSignal::new(false);

    let on_save = move |_| {
        let dto = form.with_untracked(SupplierForm::to_dto);
        if let Err(msg) = dto.validate() {
            reject_invalid(&notifications, msg);
            return;
        }
        saving.set(true);
        spawn_local(async move {
            let result = match id {
                Some(id) => run_mutation(notifications, "Menyimpan supplier...", "Supplier berhasil diperbarui", api::update(id, &dto)).await,
                None => run_mutation(notifications, "Menyimpan supplier...", "Supplier berhasil ditambahkan", api::create(&dto)).await,
            };
            saving.try_set(false);
            if result.is_ok() {
                on_saved.run(());
            }
        });
    };

    view! {
        <ModalFrame title=if id.is_some() { "Edit Supplier" } else { "Tambah Supplier" } on_close=on_close>
            <TextField
                label="Nama Supplier"
                required=true
                value=Signal::derive(move || form.with(|f| f.nama_supplier.clone()))
                on_input=Callback::new(move |v| form.update(|f| f.nama_supplier = v))
            />
            <TextField
                label="Kontak"
                value=Signal::derive(move || form.with(|f| f.kontak.clone()))
                on_input=Callback::new(move |v| form.update(|f| f.kontak = v))
            />
            <TextField
                label="Email"
                input_type="email"
                value=Signal::derive(move || form.with(|f| f.email.clone()))
                on_input=Callback::new(move |v| form.update(|f| f.email = v))
            />
            <TextField
                label="Telepon"
                value=Signal::derive(move || form.with(|f| f.telepon.clone()))
                on_input=Callback::new(move |v| form.update(|f| f.telepon = v))
            />
            <TextAreaField
                label="Alamat"
                value=Signal::derive(move || form.with(|f| f.alamat.clone()))
                on_input=Callback::new(move |v| form.update(|f| f.alamat = v))
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
    fn test_blank_optional_fields_are_omitted() {
        let form = SupplierForm {
            nama_supplier: " CV Sumber Jaya ".into(),
            telepon: "0812".into(),
            email: "  ".into(),
            ..Default::default()
        };
        let dto = form.to_dto();
        assert_eq!(dto.nama_supplier, "CV Sumber Jaya");
        assert_eq!(dto.telepon.as_deref(), Some("0812"));
        assert_eq!(dto.email, None);
        assert!(dto.validate().is_ok());
    }
}
