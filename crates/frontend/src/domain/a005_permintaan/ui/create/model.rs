use contracts::domain::a005_permintaan::{CreatePermintaanDto, PermintaanItemDto};

use crate::shared::form_utils::{non_empty, parse_amount, parse_count};

/// One editable item row. `key` only identifies the row in the view.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemLine {
    pub key: u32,
    pub nama_barang: String,
    pub jumlah: String,
    pub satuan: String,
    pub harga_estimasi: String,
}

impl ItemLine {
    pub fn blank(key: u32) -> Self {
        Self {
            key,
            nama_barang: String::new(),
            jumlah: "1".to_string(),
            satuan: "PCS".to_string(),
            harga_estimasi: String::new(),
        }
    }

    fn to_dto(&self, row: usize) -> Result<PermintaanItemDto, String> {
        let prefix = |e: String| format!("Baris {}: {}", row, e);
        Ok(PermintaanItemDto {
            barang_id: None,
            nama_barang: self.nama_barang.trim().to_string(),
            jumlah: parse_count(&self.jumlah, "jumlah").map_err(prefix)?.unwrap_or(0),
            satuan: self.satuan.trim().to_string(),
            harga_estimasi: parse_amount(&self.harga_estimasi, "harga estimasi").map_err(prefix)?,
        })
    }

    /// Quantity times estimated price; unparseable input counts as zero.
    pub fn subtotal(&self) -> f64 {
        let jumlah = parse_count(&self.jumlah, "").ok().flatten().unwrap_or(0);
        let harga = parse_amount(&self.harga_estimasi, "").ok().flatten().unwrap_or(0.0);
        harga * f64::from(jumlah)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PermintaanForm {
    pub judul: String,
    pub keperluan: String,
    pub tanggal_dibutuhkan: String,
}

impl PermintaanForm {
    pub fn to_dto(&self, lines: &[ItemLine]) -> Result<CreatePermintaanDto, String> {
        let items = lines
            .iter()
            .enumerate()
            .map(|(i, line)| line.to_dto(i + 1))
            .collect::<Result<Vec<_>, _>>()?;
        let dto = CreatePermintaanDto {
            judul: self.judul.trim().to_string(),
            keperluan: non_empty(&self.keperluan),
            tanggal_dibutuhkan: non_empty(&self.tanggal_dibutuhkan),
            items,
        };
        dto.validate()?;
        Ok(dto)
    }
}

pub fn estimated_total(lines: &[ItemLine]) -> f64 {
    lines.iter().map(ItemLine::subtotal).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(key: u32, nama: &str, jumlah: &str, harga: &str) -> ItemLine {
        ItemLine {
            nama_barang: nama.into(),
            jumlah: jumlah.into(),
            harga_estimasi: harga.into(),
            ..ItemLine::blank(key)
        }
    }

    #[test]
    fn test_dto_from_lines() {
        let form = PermintaanForm {
            judul: " ATK Q2 ".into(),
            tanggal_dibutuhkan: "2024-06-01".into(),
            ..Default::default()
        };
        let dto = form
            .to_dto(&[line(1, "Pulpen", "10", "2500"), line(2, "Map", "4", "")])
            .unwrap();
        assert_eq!(dto.judul, "ATK Q2");
        assert_eq!(dto.keperluan, None);
        assert_eq!(dto.items.len(), 2);
        assert_eq!(dto.items[0].harga_estimasi, Some(2500.0));
        assert_eq!(dto.items[1].harga_estimasi, None);
    }

    #[test]
    fn test_bad_quantity_names_the_row() {
        let form = PermintaanForm {
            judul: "Gudang".into(),
            ..Default::default()
        };
        let err = form.to_dto(&[line(1, "Lakban", "5", ""), line(2, "Tali", "x", "")]);
        assert_eq!(err, Err("Baris 2: jumlah harus berupa bilangan bulat".to_string()));
        let err = form.to_dto(&[]);
        assert_eq!(err, Err("Tambahkan minimal satu barang".to_string()));
    }

    #[test]
    fn test_estimated_total_ignores_bad_input() {
        let lines = [line(1, "Pulpen", "10", "2500"), line(2, "Map", "abc", "1000")];
        assert_eq!(estimated_total(&lines), 25000.0);
    }
}
