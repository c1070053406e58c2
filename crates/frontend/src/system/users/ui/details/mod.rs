//! Create/edit dialog and password reset for a user account.

mod model;

pub use model::{password_reset, toggle_active, UserForm};

use contracts::system::users::{Role, User};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::components::{SelectField, TextField};
use crate::shared::feedback::{reject_invalid, run_mutation, use_notifications};
use crate::shared::modal_frame::ModalFrame;
use crate::system::users::api;

fn role_options() -> Vec<(String, String)> {
    Role::SELECTABLE
        .iter()
        .map(|r| (r.code().to_string(), r.label().to_string()))
        .collect()
}

#[component]
pub fn UserFormDialog(
    /// `None` opens an empty create form.
    user: Option<User>,
    on_saved: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let notifications = use_notifications();
    let form = RwSignal::new(user.as_ref().map(UserForm::from_user).unwrap_or_default());
    let saving = RwSignal::new(false);
    let is_edit = form.with_untracked(|f| f.is_edit());

    let title = match &user {
        Some(u) => format!("Edit Pengguna: {}", u.username),
        None => "Tambah Pengguna".to_string(),
    };

    let on_save = move |_| {
        let current = form.get_untracked();
        if let Err(msg) = current.validate() {
            reject_invalid(&notifications, msg);
            return;
        }
        saving.set(true);
        spawn_local(async move {
            let result = match current.id {
                Some(id) => {
                    let dto = current.to_update_dto(id);
                    run_mutation(notifications, "Menyimpan pengguna...", "Pengguna berhasil diperbarui", api::update_user(&dto)).await
                }
                None => {
                    let dto = current.to_create_dto();
                    run_mutation(notifications, "Menyimpan pengguna...", "Pengguna berhasil ditambahkan", api::create_user(&dto)).await
                }
            };
            saving.try_set(false);
            if result.is_ok() {
                on_saved.run(());
            }
        });
    };

    view! {
        <ModalFrame title=title on_close=on_close>
            <TextField
                label="Username"
                required=!is_edit
                disabled=is_edit
                value=Signal::derive(move || form.with(|f| f.username.clone()))
                on_input=Callback::new(move |v| form.update(|f| f.username = v))
            />
            {(!is_edit).then(|| view! {
                <TextField
                    label="Password"
                    required=true
                    input_type="password"
                    value=Signal::derive(move || form.with(|f| f.password.clone()))
                    on_input=Callback::new(move |v| form.update(|f| f.password = v))
                />
            })}
            <TextField
                label="Nama Lengkap"
                value=Signal::derive(move || form.with(|f| f.full_name.clone()))
                on_input=Callback::new(move |v| form.update(|f| f.full_name = v))
            />
            <TextField
                label="Email"
                input_type="email"
                value=Signal::derive(move || form.with(|f| f.email.clone()))
                on_input=Callback::new(move |v| form.update(|f| f.email = v))
            />
            <SelectField
                label="Role"
                value=Signal::derive(move || form.with(|f| f.role.code().to_string()))
                on_change=Callback::new(move |code: String| form.update(|f| f.role = Role::from_code(&code)))
                options=Signal::derive(role_options)
            />
            {is_edit.then(|| view! {
                <label class="form__checkbox">
                    <input
                        type="checkbox"
                        prop:checked=move || form.with(|f| f.is_active)
                        on:change=move |ev| form.update(|f| f.is_active = event_target_checked(&ev))
                    />
                    " Aktif"
                </label>
            })}

            <div class="modal-footer">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                    "Batal"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=on_save
                    disabled=Signal::derive(move || saving.get())
                >
                    "Simpan"
                </Button>
            </div>
        </ModalFrame>
    }
}

#[component]
pub fn ChangePasswordDialog(user: User, on_close: Callback<()>) -> impl IntoView {
    let notifications = use_notifications();
    let new_password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let saving = RwSignal::new(false);
    let user_id = user.id;

    let on_save = move |_| {
        let dto = match password_reset(user_id, &new_password.get_untracked(), &confirm.get_untracked()) {
            Ok(dto) => dto,
            Err(msg) => {
                reject_invalid(&notifications, msg);
                return;
            }
        };
        saving.set(true);
        spawn_local(async move {
            let result = run_mutation(
                notifications,
                "Mengubah password...",
                "Password berhasil diubah",
                api::change_password(&dto),
            )
            .await;
            saving.try_set(false);
            if result.is_ok() {
                on_close.run(());
            }
        });
    };

    view! {
        <ModalFrame title=format!("Ubah Password: {}", user.username) on_close=on_close>
            <TextField
                label="Password Baru"
                required=true
                input_type="password"
                value=new_password
                on_input=Callback::new(move |v| new_password.set(v))
            />
            <TextField
                label="Konfirmasi Password"
                required=true
                input_type="password"
                value=confirm
                on_input=Callback::new(move |v| confirm.set(v))
            />
            <div class="modal-footer">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                    "Batal"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=on_save
                    disabled=Signal::derive(move || saving.get())
                >
                    "Simpan"
                </Button>
            </div>
        </ModalFrame>
    }
}
