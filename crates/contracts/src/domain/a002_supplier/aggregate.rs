use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Supplier {
    pub id: i64,
    pub nama_supplier: String,
    #[serde(default)]
    pub kontak: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub telepon: Option<String>,
    #[serde(default)]
    pub alamat: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SupplierDto {
    pub nama_supplier: String,
    pub kontak: Option<String>,
    pub email: Option<String>,
    pub telepon: Option<String>,
    pub alamat: Option<String>,
}

impl SupplierDto {
    pub fn from_supplier(supplier: &Supplier) -> Self {
        Self {
            nama_supplier: supplier.nama_supplier.clone(),
            kontak: supplier.kontak.clone(),
            email: supplier.email.clone(),
            telepon: supplier.telepon.clone(),
            alamat: supplier.alamat.clone(),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.nama_supplier.trim().is_empty() {
            return Err("Nama supplier wajib diisi".to_string());
        }
        if let Some(email) = self.email.as_deref() {
            if !email.is_empty() && !email.contains('@') {
                return Err("Format email tidak valid".to_string());
            }
        }
        Ok(())
    }
}
