use serde::{Deserialize, Serialize};

/// Item offered by a vendor, with the vendor's price and terms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KatalogItem {
    pub id: i64,
    pub supplier_id: i64,
    #[serde(default)]
    pub nama_supplier: Option<String>,
    #[serde(default)]
    pub kategori_id: Option<i64>,
    #[serde(default)]
    pub kode_item: Option<String>,
    pub nama_item: String,
    pub harga: f64,
    pub satuan: String,
    #[serde(default)]
    pub minimum_order: Option<u32>,
    #[serde(default)]
    pub lead_time_hari: Option<u32>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KatalogItemDto {
    pub supplier_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kategori_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kode_item: Option<String>,
    pub nama_item: String,
    pub harga: f64,
    pub satuan: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_order: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lead_time_hari: Option<u32>,
    pub is_active: bool,
}

impl KatalogItemDto {
    pub fn from_item(item: &KatalogItem) -> Self {
        Self {
            supplier_id: item.supplier_id,
            kategori_id: item.kategori_id,
            kode_item: item.kode_item.clone(),
            nama_item: item.nama_item.clone(),
            harga: item.harga,
            satuan: item.satuan.clone(),
            minimum_order: item.minimum_order,
            lead_time_hari: item.lead_time_hari,
            is_active: item.is_active,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.supplier_id <= 0 {
            return Err("Supplier wajib dipilih".to_string());
        }
        if self.nama_item.trim().is_empty() {
            return Err("Nama item wajib diisi".to_string());
        }
        if !(self.harga.is_finite() && self.harga >= 0.0) {
            return Err("Harga tidak valid".to_string());
        }
        if self.satuan.trim().is_empty() {
            return Err("Satuan wajib diisi".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate() {
        let mut dto = KatalogItemDto {
            supplier_id: 4,
            nama_item: "Toner HP 85A".into(),
            harga: 450000.0,
            satuan: "PCS".into(),
            is_active: true,
            ..Default::default()
        };
        assert!(dto.validate().is_ok());
        dto.harga = -1.0;
        assert!(dto.validate().is_err());
        dto.harga = 1.0;
        dto.supplier_id = 0;
        assert!(dto.validate().is_err());
    }
}
