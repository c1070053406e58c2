use serde::{Deserialize, Serialize};

/// Vendor quotation submitted against a purchase request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Penawaran {
    pub id: i64,
    pub permintaan_id: i64,
    pub supplier_id: i64,
    #[serde(default)]
    pub nama_supplier: Option<String>,
    pub total_harga: f64,
    #[serde(default)]
    pub lead_time_hari: Option<u32>,
    #[serde(default)]
    pub masa_berlaku: Option<String>,
    #[serde(default)]
    pub catatan: Option<String>,
    #[serde(default)]
    pub dipilih: bool,
}

/// Cheapest quotation, used to highlight the row in the comparison table.
pub fn cheapest(penawaran: &[Penawaran]) -> Option<i64> {
    penawaran
        .iter()
        .filter(|p| p.total_harga.is_finite())
        .min_by(|a, b| a.total_harga.total_cmp(&b.total_harga))
        .map(|p| p.id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offer(id: i64, total_harga: f64) -> Penawaran {
        Penawaran {
            id,
            permintaan_id: 1,
            supplier_id: id,
            nama_supplier: None,
            total_harga,
            lead_time_hari: None,
            masa_berlaku: None,
            catatan: None,
            dipilih: false,
        }
    }

    #[test]
    fn test_cheapest() {
        assert_eq!(cheapest(&[]), None);
        assert_eq!(cheapest(&[offer(1, 900.0), offer(2, 750.0), offer(3, 800.0)]), Some(2));
    }
}
