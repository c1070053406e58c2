use leptos::prelude::*;
use thaw::*;

use crate::shared::modal_frame::ModalFrame;

/// Yes/no dialog for destructive actions. An optional `warning` renders as an
/// alert above the message.
#[component]
pub fn ConfirmDialog(
    #[prop(into)] title: String,
    #[prop(into)] message: String,
    #[prop(optional, into)] warning: MaybeProp<String>,
    #[prop(optional, into)] confirm_label: Option<String>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let confirm_label = confirm_label.unwrap_or_else(|| "Hapus".to_string());

    view! {
        <ModalFrame title=title on_close=on_cancel>
            {move || warning.get().map(|w| view! { <div class="alert alert--warning">{w}</div> })}
            <p class="confirm-dialog__message">{message}</p>
            <div class="modal-footer">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_cancel.run(())>
                    "Batal"
                </Button>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| on_confirm.run(())>
                    {confirm_label}
                </Button>
            </div>
        </ModalFrame>
    }
}
