use contracts::domain::a005_permintaan::{ApprovalDto, CreatePermintaanDto, Penawaran, Permintaan};
use contracts::shared::api::ApiError;
use contracts::shared::list_query::{normalize_list, PaginationParams};
use serde_json::Value;

use crate::shared::api_utils::{delete, get_json, get_value, send_json, Verb};
use crate::shared::list_controller::ListEndpoint;
use crate::shared::query_cache::CachePolicy;

pub const PERMINTAAN: ListEndpoint = ListEndpoint {
    resource: "permintaan",
    path: "/permintaan",
    policy: CachePolicy::Volatile,
};

/// Quotations per request are few; one generous page holds them all.
const PENAWARAN_PAGE: u32 = 100;

pub async fn get(id: i64) -> Result<Permintaan, ApiError> {
    get_json(&format!("{}/{}", PERMINTAAN.path, id)).await
}

pub async fn create(dto: &CreatePermintaanDto) -> Result<Value, ApiError> {
    send_json(Verb::Post, PERMINTAAN.path, Some(dto)).await
}

pub async fn remove(id: i64) -> Result<Value, ApiError> {
    delete(&format!("{}/{}", PERMINTAAN.path, id)).await
}

pub async fn approve(id: i64, dto: &ApprovalDto) -> Result<Value, ApiError> {
    send_json(Verb::Post, &format!("{}/{}/approve", PERMINTAAN.path, id), Some(dto)).await
}

pub async fn reject(id: i64, dto: &ApprovalDto) -> Result<Value, ApiError> {
    send_json(Verb::Post, &format!("{}/{}/reject", PERMINTAAN.path, id), Some(dto)).await
}

pub async fn list_penawaran(id: i64) -> Result<Vec<Penawaran>, ApiError> {
    let value = get_value(&format!("{}/{}/penawaran", PERMINTAAN.path, id)).await?;
    Ok(normalize_list(Some(&value), &PaginationParams::new(1, PENAWARAN_PAGE)).items)
}

pub async fn select_penawaran(id: i64, penawaran_id: i64) -> Result<Value, ApiError> {
    send_json::<()>(
        Verb::Post,
        &format!("{}/{}/penawaran/{}/select", PERMINTAAN.path, id, penawaran_id),
        None,
    )
    .await
}

/// Id of a freshly created record, from `{data: {id}}` or `{id}`.
pub fn created_id(response: &Value) -> Option<i64> {
    response
        .get("data")
        .and_then(|d| d.get("id"))
        .or_else(|| response.get("id"))
        .and_then(Value::as_i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_created_id_shapes() {
        assert_eq!(created_id(&json!({"success": true, "data": {"id": 41}})), Some(41));
        assert_eq!(created_id(&json!({"id": 7})), Some(7));
        assert_eq!(created_id(&json!({"success": true, "message": "ok"})), None);
    }
}
