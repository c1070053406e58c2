use contracts::domain::a003_barang::{Barang, CreateBarangDto, UpdateBarangDto, SATUAN_OPTIONS};

use crate::shared::form_utils::{non_empty, parse_amount, parse_id};

/// Raw text of the item form.
#[derive(Debug, Clone, PartialEq)]
pub struct BarangForm {
    pub kode_barang: String,
    pub nama_barang: String,
    /// Select value; `""` until a kategori is picked.
    pub kategori_id: String,
    pub satuan: String,
    pub harga: String,
    pub deskripsi: String,
}

impl Default for BarangForm {
    fn default() -> Self {
        Self {
            kode_barang: String::new(),
            nama_barang: String::new(),
            kategori_id: String::new(),
            satuan: SATUAN_OPTIONS[0].to_string(),
            harga: String::new(),
            deskripsi: String::new(),
        }
    }
}

impl BarangForm {
    pub fn from_barang(barang: &Barang) -> Self {
        let dto = UpdateBarangDto::from_barang(barang);
        Self {
            kode_barang: dto.kode_barang,
            nama_barang: dto.nama_barang,
            kategori_id: if dto.kategori_id > 0 {
                dto.kategori_id.to_string()
            } else {
                String::new()
            },
            satuan: dto.satuan,
            harga: dto.harga.map(|h| h.to_string()).unwrap_or_default(),
            deskripsi: dto.deskripsi.unwrap_or_default(),
        }
    }

    /// Back to the empty defaults after a successful create.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Body of the create call: code, name, kategori and unit only.
    pub fn to_create_dto(&self) -> Result<CreateBarangDto, String> {
        let kode_barang = self.kode_barang.trim();
        let nama_barang = self.nama_barang.trim();
        if kode_barang.is_empty() {
            return Err("Kode barang wajib diisi".to_string());
        }
        if nama_barang.is_empty() {
            return Err("Nama barang wajib diisi".to_string());
        }
        let kategori_id = parse_id(&self.kategori_id).ok_or("Kategori wajib dipilih")?;
        if self.satuan.trim().is_empty() {
            return Err("Satuan wajib dipilih".to_string());
        }
        Ok(CreateBarangDto {
            kode_barang: kode_barang.to_string(),
            nama_barang: nama_barang.to_string(),
            kategori_id,
            satuan: self.satuan.trim().to_string(),
        })
    }

    pub fn to_update_dto(&self) -> Result<UpdateBarangDto, String> {
        let base = self.to_create_dto()?;
        Ok(UpdateBarangDto {
            kode_barang: base.kode_barang,
            nama_barang: base.nama_barang,
            kategori_id: base.kategori_id,
            satuan: base.satuan,
            harga: parse_amount(&self.harga, "Harga")?,
            deskripsi: non_empty(&self.deskripsi),
        })
    }
}

/// Shown in the delete confirmation only while the item still holds stock.
pub fn delete_warning(barang: &Barang) -> Option<String> {
    barang.has_stock().then(|| {
        format!(
            "Barang ini masih memiliki stok {} {}. Stok akan ikut terhapus.",
            barang.jumlah_stok(),
            barang.satuan
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn filled() -> BarangForm {
        BarangForm {
            kode_barang: " BRG-001 ".into(),
            nama_barang: "Kertas A4".into(),
            kategori_id: "3".into(),
            satuan: "RIM".into(),
            harga: "1.250.000".into(),
            deskripsi: "80 gsm".into(),
        }
    }

    #[test]
    fn test_create_body_has_exactly_four_fields() {
        let dto = filled().to_create_dto().unwrap();
        assert_eq!(
            serde_json::to_value(&dto).unwrap(),
            json!({"kode_barang": "BRG-001", "nama_barang": "Kertas A4", "kategori_id": 3, "satuan": "RIM"})
        );
    }

    #[test]
    fn test_reset_returns_to_defaults() {
        let mut form = filled();
        form.reset();
        assert_eq!(form, BarangForm::default());
        assert_eq!(form.satuan, "PCS");
        assert!(form.kode_barang.is_empty());
    }

    #[test]
    fn test_create_requires_kategori() {
        let mut form = filled();
        form.kategori_id = String::new();
        assert_eq!(form.to_create_dto(), Err("Kategori wajib dipilih".to_string()));
    }

    #[test]
    fn test_update_carries_price_and_description() {
        let dto = filled().to_update_dto().unwrap();
        assert_eq!(dto.harga, Some(1_250_000.0));
        assert_eq!(dto.deskripsi.as_deref(), Some("80 gsm"));
    }

    fn barang(jumlah_stok: i64) -> Barang {
        serde_json::from_value(json!({
            "id": 1, "kode_barang": "A", "nama_barang": "Map", "satuan": "PCS",
            "stok": {"jumlah_stok": jumlah_stok}
        }))
        .unwrap()
    }

    #[test]
    fn test_delete_warning_iff_stock_remains() {
        assert!(delete_warning(&barang(0)).is_none());
        assert!(delete_warning(&barang(4)).is_some_and(|w| w.contains("4 PCS")));
    }
}
