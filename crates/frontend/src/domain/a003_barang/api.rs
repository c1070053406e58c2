use contracts::domain::a003_barang::{CreateBarangDto, MutasiStokDto, UpdateBarangDto};
use contracts::shared::api::ApiError;
use serde_json::Value;

use crate::shared::api_utils::{delete, send_json, Verb};
use crate::shared::list_controller::ListEndpoint;
use crate::shared::query_cache::CachePolicy;

pub const BARANG: ListEndpoint = ListEndpoint {
    resource: "barang",
    path: "/stok-barang/barang",
    policy: CachePolicy::Volatile,
};

pub const EXPORT_PATH: &str = "/stok-barang/barang/export";
pub const IMPORT_PATH: &str = "/stok-barang/barang/bulk-import";

pub async fn create(dto: &CreateBarangDto) -> Result<Value, ApiError> {
    send_json(Verb::Post, BARANG.path, Some(dto)).await
}

pub async fn update(id: i64, dto: &UpdateBarangDto) -> Result<Value, ApiError> {
    send_json(Verb::Put, &format!("{}/{}", BARANG.path, id), Some(dto)).await
}

pub async fn remove(id: i64) -> Result<Value, ApiError> {
    delete(&format!("{}/{}", BARANG.path, id)).await
}

pub async fn mutasi(id: i64, dto: &MutasiStokDto) -> Result<Value, ApiError> {
    send_json(Verb::Post, &format!("{}/{}/mutasi", BARANG.path, id), Some(dto)).await
}
