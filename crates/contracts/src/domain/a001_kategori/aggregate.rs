use serde::{Deserialize, Serialize};

/// Item category. Used as a near-static reference list in dropdowns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Kategori {
    pub id: i64,
    pub nama_kategori: String,
    #[serde(default)]
    pub deskripsi: Option<String>,
    #[serde(default)]
    pub jumlah_barang: Option<u64>,
}

/// Create/update payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KategoriDto {
    pub nama_kategori: String,
    pub deskripsi: Option<String>,
}

impl KategoriDto {
    pub fn from_kategori(kategori: &Kategori) -> Self {
        Self {
            nama_kategori: kategori.nama_kategori.clone(),
            deskripsi: kategori.deskripsi.clone(),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.nama_kategori.trim().is_empty() {
            return Err("Nama kategori wajib diisi".to_string());
        }
        Ok(())
    }
}
