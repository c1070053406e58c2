use contracts::shared::import::ImportResult;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;
use wasm_bindgen::JsCast;
use web_sys::{File, HtmlInputElement};

use crate::shared::config::config;
use crate::shared::feedback::{reject_invalid, run_mutation_with, use_notifications};
use crate::shared::import::{summary, upload, validate_file};
use crate::shared::modal_frame::ModalFrame;

/// File picker + upload for a `bulk-import` endpoint. After an upload the
/// dialog stays open to show the per-row errors.
#[component]
pub fn ImportDialog(
    #[prop(into)] title: String,
    endpoint: &'static str,
    /// Runs after any upload the server accepted.
    on_imported: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let notifications = use_notifications();
    let file = StoredValue::new_local(None::<File>);
    let file_name = RwSignal::new(String::new());
    let validation_error = RwSignal::new(None::<String>);
    let result = RwSignal::new(None::<ImportResult>);
    let uploading = RwSignal::new(false);

    let accept = config()
        .import
        .allowed_extensions
        .iter()
        .map(|e| format!(".{}", e))
        .collect::<Vec<_>>()
        .join(",");

    let on_file_change = move |ev: leptos::ev::Event| {
        let picked = ev
            .target()
            .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));
        file_name.set(picked.as_ref().map(|f| f.name()).unwrap_or_default());
        validation_error.set(validate_file(picked.as_ref()).err().map(|e| e.to_string()));
        result.set(None);
        file.set_value(picked);
    };

    let on_upload = move |_| {
        let Some(picked) = file.get_value() else {
            reject_invalid(&notifications, "Pilih file terlebih dahulu");
            return;
        };
        if let Err(e) = validate_file(Some(&picked)) {
            reject_invalid(&notifications, e.to_string());
            return;
        }
        uploading.set(true);
        spawn_local(async move {
            let outcome = run_mutation_with(notifications, "Mengimpor data...", summary, async {
                upload(endpoint, &picked).await
            })
            .await;
            uploading.try_set(false);
            if let Ok(imported) = outcome {
                result.try_set(Some(imported));
                on_imported.run(());
            }
        });
    };

    let hint = format!(
        "Format: {}. Maksimal {} MB.",
        config().import.allowed_extensions.join(", "),
        config().import.max_file_size_bytes / (1024 * 1024)
    );

    view! {
        <ModalFrame title=title on_close=on_close>
            <div class="form-group">
                <input type="file" accept=accept on:change=on_file_change />
                <div class="form-hint">{hint}</div>
                {move || validation_error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
            </div>

            {move || result.get().map(|r| {
                let counts = format!("Berhasil: {}, gagal: {}", r.imported_count, r.failed_count);
                let errors = (!r.errors.is_empty()).then(|| view! {
                    <ul class="import-result__errors">
                        {r.errors.into_iter().map(|e| view! { <li>{e}</li> }).collect_view()}
                    </ul>
                });
                view! {
                    <div class="import-result">
                        <div>{counts}</div>
                        {errors}
                    </div>
                }
            })}

            <div class="modal-footer">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                    "Tutup"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=on_upload
                    disabled=Signal::derive(move || {
                        uploading.get() || file_name.get().is_empty() || validation_error.get().is_some()
                    })
                >
                    "Unggah"
                </Button>
            </div>
        </ModalFrame>
    }
}
