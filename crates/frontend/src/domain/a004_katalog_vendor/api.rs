use contracts::domain::a004_katalog_vendor::KatalogItemDto;
use contracts::shared::api::ApiError;
use serde_json::Value;

use crate::shared::api_utils::{delete, send_json, Verb};
use crate::shared::list_controller::ListEndpoint;
use crate::shared::query_cache::CachePolicy;

pub const KATALOG: ListEndpoint = ListEndpoint {
    resource: "katalog_vendor",
    path: "/katalog-vendor",
    policy: CachePolicy::Volatile,
};

pub const EXPORT_PATH: &str = "/katalog-vendor/export";
pub const IMPORT_PATH: &str = "/katalog-vendor/bulk-import";

pub async fn create(dto: &KatalogItemDto) -> Result<Value, ApiError> {
    send_json(Verb::Post, KATALOG.path, Some(dto)).await
}

pub async fn update(id: i64, dto: &KatalogItemDto) -> Result<Value, ApiError> {
    send_json(Verb::Put, &format!("{}/{}", KATALOG.path, id), Some(dto)).await
}

pub async fn remove(id: i64) -> Result<Value, ApiError> {
    delete(&format!("{}/{}", KATALOG.path, id)).await
}
