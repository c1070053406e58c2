use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusPermintaan {
    Draft,
    Diajukan,
    Disetujui,
    Ditolak,
    Diproses,
    Selesai,
    #[serde(other)]
    Unknown,
}

impl StatusPermintaan {
    pub const FILTERABLE: [StatusPermintaan; 6] = [
        StatusPermintaan::Draft,
        StatusPermintaan::Diajukan,
        StatusPermintaan::Disetujui,
        StatusPermintaan::Ditolak,
        StatusPermintaan::Diproses,
        StatusPermintaan::Selesai,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            StatusPermintaan::Draft => "draft",
            StatusPermintaan::Diajukan => "diajukan",
            StatusPermintaan::Disetujui => "disetujui",
            StatusPermintaan::Ditolak => "ditolak",
            StatusPermintaan::Diproses => "diproses",
            StatusPermintaan::Selesai => "selesai",
            StatusPermintaan::Unknown => "unknown",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StatusPermintaan::Draft => "Draft",
            StatusPermintaan::Diajukan => "Menunggu Persetujuan",
            StatusPermintaan::Disetujui => "Disetujui",
            StatusPermintaan::Ditolak => "Ditolak",
            StatusPermintaan::Diproses => "Diproses",
            StatusPermintaan::Selesai => "Selesai",
            StatusPermintaan::Unknown => "-",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            StatusPermintaan::Draft => "badge badge--neutral",
            StatusPermintaan::Diajukan => "badge badge--warning",
            StatusPermintaan::Disetujui | StatusPermintaan::Selesai => "badge badge--success",
            StatusPermintaan::Ditolak => "badge badge--error",
            StatusPermintaan::Diproses => "badge badge--primary",
            StatusPermintaan::Unknown => "badge",
        }
    }

    pub fn awaiting_approval(&self) -> bool {
        *self == StatusPermintaan::Diajukan
    }

    /// Only drafts may be deleted from the client.
    pub fn can_delete(&self) -> bool {
        *self == StatusPermintaan::Draft
    }

    /// Quotations can be chosen once the request is approved.
    pub fn can_select_penawaran(&self) -> bool {
        matches!(self, StatusPermintaan::Disetujui | StatusPermintaan::Diproses)
    }
}

/// Purchase request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Permintaan {
    pub id: i64,
    pub nomor: String,
    pub judul: String,
    #[serde(default)]
    pub keperluan: Option<String>,
    #[serde(default)]
    pub pemohon: Option<String>,
    #[serde(default)]
    pub departemen: Option<String>,
    pub status: StatusPermintaan,
    pub tanggal_permintaan: String,
    #[serde(default)]
    pub tanggal_dibutuhkan: Option<String>,
    #[serde(default)]
    pub total_estimasi: Option<f64>,
    #[serde(default)]
    pub catatan_approval: Option<String>,
    #[serde(default)]
    pub items: Vec<PermintaanItem>,
}

impl Permintaan {
    /// Server total when present, otherwise the sum of line estimates.
    pub fn estimasi(&self) -> f64 {
        self.total_estimasi
            .unwrap_or_else(|| self.items.iter().map(PermintaanItem::subtotal).sum())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PermintaanItem {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub barang_id: Option<i64>,
    pub nama_barang: String,
    pub jumlah: u32,
    pub satuan: String,
    #[serde(default)]
    pub harga_estimasi: Option<f64>,
    #[serde(default)]
    pub keterangan: Option<String>,
}

impl PermintaanItem {
    pub fn subtotal(&self) -> f64 {
        self.harga_estimasi.unwrap_or(0.0) * f64::from(self.jumlah)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PermintaanItemDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barang_id: Option<i64>,
    pub nama_barang: String,
    pub jumlah: u32,
    pub satuan: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub harga_estimasi: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreatePermintaanDto {
    pub judul: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keperluan: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tanggal_dibutuhkan: Option<String>,
    pub items: Vec<PermintaanItemDto>,
}

impl CreatePermintaanDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.judul.trim().is_empty() {
            return Err("Judul permintaan wajib diisi".to_string());
        }
        if self.items.is_empty() {
            return Err("Tambahkan minimal satu barang".to_string());
        }
        if let Some((idx, _)) = self
            .items
            .iter()
            .enumerate()
            .find(|(_, item)| item.nama_barang.trim().is_empty() || item.jumlah == 0)
        {
            return Err(format!("Baris {}: nama barang dan jumlah wajib diisi", idx + 1));
        }
        Ok(())
    }
}

/// Body of approve/reject calls. A rejection must carry a reason.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApprovalDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catatan: Option<String>,
}

impl ApprovalDto {
    pub fn new(catatan: &str) -> Self {
        let catatan = catatan.trim();
        Self {
            catatan: (!catatan.is_empty()).then(|| catatan.to_string()),
        }
    }

    pub fn validate_rejection(&self) -> Result<(), String> {
        match self.catatan {
            Some(_) => Ok(()),
            None => Err("Alasan penolakan wajib diisi".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_decoding_is_lenient() {
        let p: Permintaan = serde_json::from_value(json!({
            "id": 1, "nomor": "PR-2024-001", "judul": "ATK Q1",
            "status": "dibatalkan", "tanggal_permintaan": "2024-03-01"
        }))
        .unwrap();
        assert_eq!(p.status, StatusPermintaan::Unknown);
        assert!(p.items.is_empty());
    }

    #[test]
    fn test_estimasi_falls_back_to_lines() {
        let p: Permintaan = serde_json::from_value(json!({
            "id": 1, "nomor": "PR-1", "judul": "ATK", "status": "diajukan",
            "tanggal_permintaan": "2024-03-01",
            "items": [
                {"nama_barang": "Pulpen", "jumlah": 10, "satuan": "PCS", "harga_estimasi": 2500.0},
                {"nama_barang": "Map", "jumlah": 4, "satuan": "PCS"}
            ]
        }))
        .unwrap();
        assert_eq!(p.estimasi(), 25000.0);
        assert!(p.status.awaiting_approval());
    }

    #[test]
    fn test_create_validation() {
        let mut dto = CreatePermintaanDto {
            judul: "Kebutuhan gudang".into(),
            ..Default::default()
        };
        assert!(dto.validate().is_err());
        dto.items.push(PermintaanItemDto {
            nama_barang: "Lakban".into(),
            jumlah: 0,
            satuan: "PCS".into(),
            ..Default::default()
        });
        assert_eq!(
            dto.validate(),
            Err("Baris 1: nama barang dan jumlah wajib diisi".to_string())
        );
        dto.items[0].jumlah = 5;
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_rejection_needs_reason() {
        assert!(ApprovalDto::new("   ").validate_rejection().is_err());
        assert!(ApprovalDto::new("Anggaran habis").validate_rejection().is_ok());
    }
}
