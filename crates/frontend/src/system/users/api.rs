use contracts::shared::api::ApiError;
use contracts::system::users::{ChangePasswordDto, CreateUserDto, UpdateUserDto};
use serde_json::Value;

use crate::shared::api_utils::{delete, send_json, Verb};
use crate::shared::list_controller::ListEndpoint;
use crate::shared::query_cache::CachePolicy;

pub const USERS: ListEndpoint = ListEndpoint {
    resource: "users",
    path: "/users",
    policy: CachePolicy::Volatile,
};

pub async fn create_user(dto: &CreateUserDto) -> Result<Value, ApiError> {
    send_json(Verb::Post, USERS.path, Some(dto)).await
}

pub async fn update_user(dto: &UpdateUserDto) -> Result<Value, ApiError> {
    send_json(Verb::Put, &format!("{}/{}", USERS.path, dto.id), Some(dto)).await
}

pub async fn delete_user(id: i64) -> Result<Value, ApiError> {
    delete(&format!("{}/{}", USERS.path, id)).await
}

pub async fn change_password(dto: &ChangePasswordDto) -> Result<Value, ApiError> {
    send_json(
        Verb::Post,
        &format!("{}/{}/change-password", USERS.path, dto.user_id),
        Some(dto),
    )
    .await
}
