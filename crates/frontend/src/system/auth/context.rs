use contracts::shared::api::ApiError;
use contracts::system::auth::UserInfo;
use leptos::prelude::*;
use leptos::task::spawn_local;
use once_cell::sync::OnceCell;

use super::{api, storage};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub access_token: Option<String>,
    pub user_info: Option<UserInfo>,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.user_info.as_ref().map(|u| u.is_admin()).unwrap_or(false)
    }
}

/// The root auth signal, reachable from the HTTP layer so a 401 anywhere can
/// end the session without a component handle.
static SESSION: OnceCell<RwSignal<AuthState>> = OnceCell::new();

/// Clears stored credentials and drops the in-memory session.
pub fn end_session() {
    storage::clear_session();
    if let Some(state) = SESSION.get() {
        state.try_set(AuthState::default());
    }
    log::info!("session ended");
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let auth_state = RwSignal::new(AuthState {
        access_token: storage::get_access_token(),
        user_info: storage::get_user(),
    });
    if SESSION.set(auth_state).is_err() {
        log::warn!("AuthProvider mounted twice; 401 handling stays bound to the first instance");
    }

    // Validate the stored token once; refresh it if the server rejects it.
    if let Some(access_token) = storage::get_access_token() {
        spawn_local(async move {
            match restore_session(access_token).await {
                Ok(state) => {
                    auth_state.try_set(state);
                }
                Err(e) => {
                    log::warn!("session restore failed: {}", e);
                    storage::clear_session();
                    auth_state.try_set(AuthState::default());
                }
            }
        });
    }

    provide_context(auth_state);

    children()
}

async fn restore_session(access_token: String) -> Result<AuthState, ApiError> {
    match api::get_current_user(&access_token).await {
        Ok(user_info) => {
            storage::save_user(&user_info);
            Ok(AuthState {
                access_token: Some(access_token),
                user_info: Some(user_info),
            })
        }
        Err(_) => {
            let refresh_token = storage::get_refresh_token().ok_or(ApiError::Unauthorized)?;
            let refreshed = api::refresh_token(refresh_token).await?;
            storage::save_access_token(&refreshed.access_token);
            let user_info = api::get_current_user(&refreshed.access_token).await?;
            storage::save_user(&user_info);
            Ok(AuthState {
                access_token: Some(refreshed.access_token),
                user_info: Some(user_info),
            })
        }
    }
}

/// Hook to access auth state
pub fn use_auth() -> RwSignal<AuthState> {
    use_context::<RwSignal<AuthState>>().expect("AuthProvider not found in component tree")
}

/// Performs login and publishes the new session into `auth_state`.
pub async fn do_login(
    auth_state: RwSignal<AuthState>,
    username: String,
    password: String,
) -> Result<(), ApiError> {
    let response = api::login(username, password).await?;
    storage::save_session(&response);
    log::info!("logged in as {}", response.user.username);
    auth_state.set(AuthState {
        access_token: Some(response.access_token),
        user_info: Some(response.user),
    });
    Ok(())
}

pub async fn do_logout(auth_state: RwSignal<AuthState>) {
    if let Some(refresh_token) = storage::get_refresh_token() {
        if let Err(e) = api::logout(refresh_token).await {
            log::warn!("logout request failed: {}", e);
        }
    }
    storage::clear_session();
    auth_state.set(AuthState::default());
}
