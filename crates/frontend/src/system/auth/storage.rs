use contracts::system::auth::{LoginResponse, UserInfo};
use web_sys::window;

const ACCESS_TOKEN_KEY: &str = "KSM_access_token";
const REFRESH_TOKEN_KEY: &str = "KSM_refresh_token";
const USER_KEY: &str = "KSM_user";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Persist everything a successful login returns.
pub fn save_session(response: &LoginResponse) {
    save_access_token(&response.access_token);
    if let Some(storage) = get_local_storage() {
        let _ = storage.set_item(REFRESH_TOKEN_KEY, &response.refresh_token);
    }
    save_user(&response.user);
}

pub fn save_access_token(token: &str) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.set_item(ACCESS_TOKEN_KEY, token);
    }
}

pub fn get_access_token() -> Option<String> {
    get_local_storage()?
        .get_item(ACCESS_TOKEN_KEY)
        .ok()?
        .filter(|t| !t.is_empty())
}

pub fn get_refresh_token() -> Option<String> {
    get_local_storage()?
        .get_item(REFRESH_TOKEN_KEY)
        .ok()?
        .filter(|t| !t.is_empty())
}

pub fn save_user(user: &UserInfo) {
    let Ok(json) = serde_json::to_string(user) else {
        return;
    };
    if let Some(storage) = get_local_storage() {
        let _ = storage.set_item(USER_KEY, &json);
    }
}

/// Cached profile from the last login; `None` when missing or unreadable.
pub fn get_user() -> Option<UserInfo> {
    let raw = get_local_storage()?.get_item(USER_KEY).ok()??;
    serde_json::from_str(&raw).ok()
}

/// Removes all three session keys.
pub fn clear_session() {
    if let Some(storage) = get_local_storage() {
        for key in [ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY, USER_KEY] {
            let _ = storage.remove_item(key);
        }
    }
}
