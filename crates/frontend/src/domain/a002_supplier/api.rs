use contracts::domain::a002_supplier::{Supplier, SupplierDto};
use contracts::shared::api::ApiError;
use serde_json::Value;

use crate::shared::api_utils::{delete, send_json, Verb};
use crate::shared::list_controller::ListEndpoint;
use crate::shared::query_cache::CachePolicy;

pub const SUPPLIER: ListEndpoint = ListEndpoint {
    resource: "supplier",
    path: "/supplier",
    policy: CachePolicy::Reference,
};

pub fn option(supplier: &Supplier) -> (String, String) {
    (supplier.id.to_string(), supplier.nama_supplier.clone())
}

pub async fn create(dto: &SupplierDto) -> Result<Value, ApiError> {
    send_json(Verb::Post, SUPPLIER.path, Some(dto)).await
}

pub async fn update(id: i64, dto: &SupplierDto) -> Result<Value, ApiError> {
    send_json(Verb::Put, &format!("{}/{}", SUPPLIER.path, id), Some(dto)).await
}

pub async fn remove(id: i64) -> Result<Value, ApiError> {
    delete(&format!("{}/{}", SUPPLIER.path, id)).await
}
