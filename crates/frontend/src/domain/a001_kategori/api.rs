use contracts::domain::a001_kategori::{Kategori, KategoriDto};
use contracts::shared::api::ApiError;
use serde_json::Value;

use crate::shared::api_utils::{delete, send_json, Verb};
use crate::shared::list_controller::ListEndpoint;
use crate::shared::query_cache::CachePolicy;

pub const KATEGORI: ListEndpoint = ListEndpoint {
    resource: "kategori",
    path: "/stok-barang/kategori",
    policy: CachePolicy::Reference,
};

/// Select option for kategori dropdowns.
pub fn option(kategori: &Kategori) -> (String, String) {
    (kategori.id.to_string(), kategori.nama_kategori.clone())
}

pub async fn create(dto: &KategoriDto) -> Result<Value, ApiError> {
    send_json(Verb::Post, KATEGORI.path, Some(dto)).await
}

pub async fn update(id: i64, dto: &KategoriDto) -> Result<Value, ApiError> {
    send_json(Verb::Put, &format!("{}/{}", KATEGORI.path, id), Some(dto)).await
}

pub async fn remove(id: i64) -> Result<Value, ApiError> {
    delete(&format!("{}/{}", KATEGORI.path, id)).await
}
