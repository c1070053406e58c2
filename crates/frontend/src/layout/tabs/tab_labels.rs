//! Tab titles. Every key opened from the sidebar has an entry here; detail
//! tabs get their title from [`detail_tab_label`].

pub const KEY_BARANG: &str = "barang";
pub const KEY_KATEGORI: &str = "kategori";
pub const KEY_SUPPLIER: &str = "supplier";
pub const KEY_KATALOG_VENDOR: &str = "katalog_vendor";
pub const KEY_PERMINTAAN: &str = "permintaan";
pub const KEY_NOTIFIKASI: &str = "notifikasi";
pub const KEY_USERS: &str = "sys_users";

const PERMINTAAN_DETAIL_PREFIX: &str = "permintaan_detail_";

/// Readable title for a tab key. Unknown keys fall back to a generic label.
pub fn tab_label_for_key(key: &str) -> &'static str {
    match key {
        KEY_BARANG => "Stok Barang",
        KEY_KATEGORI => "Kategori",
        KEY_SUPPLIER => "Supplier",
        KEY_KATALOG_VENDOR => "Katalog Vendor",
        KEY_PERMINTAAN => "Permintaan Pembelian",
        KEY_NOTIFIKASI => "Notifikasi",
        KEY_USERS => "Pengguna",
        k if k.starts_with(PERMINTAAN_DETAIL_PREFIX) => "Detail Permintaan",
        _ => "Halaman",
    }
}

/// `«<entity> · <identifier>»`, e.g. `Permintaan · PR-2024-001`.
pub fn detail_tab_label(entity_label: &str, identifier: &str) -> String {
    format!("{} · {}", entity_label, identifier)
}

pub fn permintaan_detail_key(id: i64) -> String {
    format!("{}{}", PERMINTAAN_DETAIL_PREFIX, id)
}

pub fn permintaan_detail_id(key: &str) -> Option<i64> {
    key.strip_prefix(PERMINTAAN_DETAIL_PREFIX)?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_key_round_trip() {
        let key = permintaan_detail_key(17);
        assert_eq!(key, "permintaan_detail_17");
        assert_eq!(permintaan_detail_id(&key), Some(17));
        assert_eq!(permintaan_detail_id("permintaan_detail_x"), None);
        assert_eq!(permintaan_detail_id(KEY_PERMINTAAN), None);
    }

    #[test]
    fn test_labels() {
        assert_eq!(tab_label_for_key(KEY_BARANG), "Stok Barang");
        assert_eq!(tab_label_for_key("permintaan_detail_3"), "Detail Permintaan");
        assert_eq!(detail_tab_label("Permintaan", "PR-1"), "Permintaan · PR-1");
    }
}
