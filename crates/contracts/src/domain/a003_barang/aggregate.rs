use serde::{Deserialize, Serialize};

/// Units offered by the item form.
pub const SATUAN_OPTIONS: [&str; 8] = ["PCS", "BOX", "RIM", "UNIT", "PACK", "LUSIN", "KG", "LITER"];

/// Stock-keeping unit as returned by `GET /stok-barang/barang`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Barang {
    pub id: i64,
    pub kode_barang: String,
    pub nama_barang: String,
    #[serde(default)]
    pub kategori_id: Option<i64>,
    #[serde(default)]
    pub kategori: Option<KategoriRef>,
    pub satuan: String,
    #[serde(default)]
    pub harga: Option<f64>,
    #[serde(default)]
    pub deskripsi: Option<String>,
    #[serde(default)]
    pub stok: Option<Stok>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KategoriRef {
    pub id: i64,
    pub nama_kategori: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Stok {
    #[serde(default)]
    pub jumlah_stok: i64,
    #[serde(default)]
    pub stok_minimum: i64,
    #[serde(default)]
    pub lokasi: Option<String>,
}

impl Barang {
    pub fn jumlah_stok(&self) -> i64 {
        self.stok.as_ref().map(|s| s.jumlah_stok).unwrap_or(0)
    }

    /// Deleting an item that still holds stock needs an explicit warning.
    pub fn has_stock(&self) -> bool {
        self.jumlah_stok() > 0
    }

    pub fn is_below_minimum(&self) -> bool {
        self.stok
            .as_ref()
            .map(|s| s.stok_minimum > 0 && s.jumlah_stok < s.stok_minimum)
            .unwrap_or(false)
    }

    pub fn nama_kategori(&self) -> &str {
        self.kategori
            .as_ref()
            .map(|k| k.nama_kategori.as_str())
            .unwrap_or("-")
    }
}

/// Body of `POST /stok-barang/barang`. Exactly these four fields are sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateBarangDto {
    pub kode_barang: String,
    pub nama_barang: String,
    pub kategori_id: i64,
    pub satuan: String,
}

/// Body of `PUT /stok-barang/barang/:id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateBarangDto {
    pub kode_barang: String,
    pub nama_barang: String,
    pub kategori_id: i64,
    pub satuan: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub harga: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deskripsi: Option<String>,
}

impl UpdateBarangDto {
    pub fn from_barang(barang: &Barang) -> Self {
        Self {
            kode_barang: barang.kode_barang.clone(),
            nama_barang: barang.nama_barang.clone(),
            kategori_id: barang
                .kategori_id
                .or_else(|| barang.kategori.as_ref().map(|k| k.id))
                .unwrap_or_default(),
            satuan: barang.satuan.clone(),
            harga: barang.harga,
            deskripsi: barang.deskripsi.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JenisMutasi {
    Masuk,
    Keluar,
}

impl JenisMutasi {
    pub fn label(&self) -> &'static str {
        match self {
            JenisMutasi::Masuk => "Barang Masuk",
            JenisMutasi::Keluar => "Barang Keluar",
        }
    }
}

/// Body of `POST /stok-barang/barang/:id/mutasi`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MutasiStokDto {
    pub jenis: JenisMutasi,
    pub jumlah: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keterangan: Option<String>,
}

impl MutasiStokDto {
    /// Outgoing movements may not exceed what is on hand.
    pub fn validate(&self, stok_tersedia: i64) -> Result<(), String> {
        if self.jumlah == 0 {
            return Err("Jumlah harus lebih dari 0".to_string());
        }
        if self.jenis == JenisMutasi::Keluar && i64::from(self.jumlah) > stok_tersedia {
            return Err(format!(
                "Jumlah keluar ({}) melebihi stok tersedia ({})",
                self.jumlah, stok_tersedia
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn barang(jumlah_stok: Option<i64>) -> Barang {
        Barang {
            id: 1,
            kode_barang: "A1".into(),
            nama_barang: "Widget".into(),
            kategori_id: Some(2),
            kategori: None,
            satuan: "PCS".into(),
            harga: None,
            deskripsi: None,
            stok: jumlah_stok.map(|jumlah_stok| Stok {
                jumlah_stok,
                stok_minimum: 5,
                lokasi: None,
            }),
            updated_at: None,
        }
    }

    #[test]
    fn test_has_stock() {
        assert!(barang(Some(3)).has_stock());
        assert!(!barang(Some(0)).has_stock());
        assert!(!barang(None).has_stock());
        assert!(barang(Some(3)).is_below_minimum());
    }

    #[test]
    fn test_create_body_has_exactly_four_fields() {
        let dto = CreateBarangDto {
            kode_barang: "A1".into(),
            nama_barang: "Widget".into(),
            kategori_id: 2,
            satuan: "PCS".into(),
        };
        assert_eq!(
            serde_json::to_value(&dto).unwrap(),
            json!({"kode_barang": "A1", "nama_barang": "Widget", "kategori_id": 2, "satuan": "PCS"})
        );
    }

    #[test]
    fn test_mutasi_validation() {
        let keluar = MutasiStokDto {
            jenis: JenisMutasi::Keluar,
            jumlah: 10,
            keterangan: None,
        };
        assert!(keluar.validate(5).is_err());
        assert!(keluar.validate(10).is_ok());
        let nol = MutasiStokDto {
            jenis: JenisMutasi::Masuk,
            jumlah: 0,
            keterangan: None,
        };
        assert!(nol.validate(0).is_err());
    }

    #[test]
    fn test_decodes_minimal_row() {
        let row: Barang = serde_json::from_value(json!({
            "id": 9, "kode_barang": "K-9", "nama_barang": "Kertas", "satuan": "RIM",
            "stok": {"jumlah_stok": 12}
        }))
        .unwrap();
        assert_eq!(row.jumlah_stok(), 12);
        assert_eq!(row.nama_kategori(), "-");
    }
}
