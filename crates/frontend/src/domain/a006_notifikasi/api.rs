use contracts::shared::api::ApiError;
use serde_json::Value;

use crate::shared::api_utils::{send_json, Verb};
use crate::shared::list_controller::ListEndpoint;
use crate::shared::query_cache::CachePolicy;

pub const NOTIFIKASI: ListEndpoint = ListEndpoint {
    resource: "notifikasi",
    path: "/notifikasi",
    policy: CachePolicy::Volatile,
};

pub async fn mark_read(id: i64) -> Result<Value, ApiError> {
    send_json::<()>(Verb::Put, &format!("{}/{}/read", NOTIFIKASI.path, id), None).await
}

pub async fn mark_all_read() -> Result<Value, ApiError> {
    send_json::<()>(Verb::Put, &format!("{}/read-all", NOTIFIKASI.path), None).await
}
