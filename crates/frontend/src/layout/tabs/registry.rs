//! Tab key → screen. All keys the shell can open are resolved here.

use super::tab_labels::{
    permintaan_detail_id, KEY_BARANG, KEY_KATALOG_VENDOR, KEY_KATEGORI, KEY_NOTIFIKASI,
    KEY_PERMINTAAN, KEY_SUPPLIER, KEY_USERS,
};
use crate::domain::a001_kategori::ui::list::KategoriList;
use crate::domain::a002_supplier::ui::list::SupplierList;
use crate::domain::a003_barang::ui::list::BarangList;
use crate::domain::a004_katalog_vendor::ui::list::KatalogVendorList;
use crate::domain::a005_permintaan::ui::details::PermintaanDetails;
use crate::domain::a005_permintaan::ui::list::PermintaanList;
use crate::domain::a006_notifikasi::ui::list::NotifikasiList;
use crate::layout::global_context::AppGlobalContext;
use crate::system::auth::guard::RequireAdmin;
use crate::system::users::ui::list::UsersListPage;
use leptos::prelude::*;

pub fn render_tab_content(key: &str, tabs_store: AppGlobalContext) -> AnyView {
    let key_for_close = key.to_string();

    match key {
        KEY_BARANG => view! { <BarangList /> }.into_any(),
        KEY_KATEGORI => view! { <KategoriList /> }.into_any(),
        KEY_SUPPLIER => view! { <SupplierList /> }.into_any(),
        KEY_KATALOG_VENDOR => view! { <KatalogVendorList /> }.into_any(),
        KEY_PERMINTAAN => view! { <PermintaanList /> }.into_any(),
        KEY_NOTIFIKASI => view! { <NotifikasiList /> }.into_any(),
        KEY_USERS => view! {
            <RequireAdmin>
                <UsersListPage />
            </RequireAdmin>
        }
        .into_any(),
        k => match permintaan_detail_id(k) {
            Some(id) => view! {
                <PermintaanDetails
                    id=id
                    on_close=Callback::new(move |_| tabs_store.close_tab(&key_for_close))
                />
            }
            .into_any(),
            None => {
                log::warn!("unknown tab key: {}", k);
                view! { <div class="placeholder">"Halaman tidak ditemukan"</div> }.into_any()
            }
        },
    }
}
