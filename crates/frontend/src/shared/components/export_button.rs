use contracts::shared::list_query::FilterParams;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::export::export_list;
use crate::shared::feedback::{run_mutation_with, use_notifications};
use crate::shared::icons::icon;

/// Downloads the list as a spreadsheet using the filters currently applied.
#[component]
pub fn ExportButton(
    path: &'static str,
    file_stem: &'static str,
    /// Read once per click.
    #[prop(into)]
    filters: Signal<FilterParams>,
) -> impl IntoView {
    let notifications = use_notifications();
    let busy = RwSignal::new(false);

    let on_click = move |_| {
        let filters = filters.get_untracked();
        busy.set(true);
        spawn_local(async move {
            let _ = run_mutation_with(
                notifications,
                "Menyiapkan file ekspor...",
                |name: &String| format!("File {} berhasil diunduh", name),
                export_list(path, &filters, file_stem),
            )
            .await;
            busy.try_set(false);
        });
    };

    view! {
        <Button
            appearance=ButtonAppearance::Secondary
            on_click=on_click
            disabled=Signal::derive(move || busy.get())
        >
            {icon("download")}
            " Export Excel"
        </Button>
    }
}
