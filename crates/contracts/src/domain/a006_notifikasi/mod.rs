use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notifikasi {
    pub id: i64,
    pub judul: String,
    pub pesan: String,
    #[serde(default)]
    pub dibaca: bool,
    #[serde(default)]
    pub tautan: Option<String>,
    pub created_at: String,
}
