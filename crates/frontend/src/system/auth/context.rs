use contracts::system::auth::UserInfo;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{api, storage};

/// Session as seen by the UI
#[derive(Clone, Debug, Default, PartialEq)]
pub enum AuthState {
    /// Stored tokens are being checked against the backend
    #[default]
    Restoring,
    Anonymous,
    Authenticated {
        access_token: String,
        user: UserInfo,
    },
}

impl AuthState {
    pub fn user(&self) -> Option<&UserInfo> {
        match self {
            AuthState::Authenticated { user, .. } => Some(user),
            _ => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthState::Authenticated { .. })
    }
}

/// Validate the stored access token, falling back to a refresh
async fn restore_session() -> AuthState {
    let Some(access_token) = storage::get_access_token() else {
        return AuthState::Anonymous;
    };

    match api::get_current_user(&access_token).await {
        Ok(user) => return AuthState::Authenticated { access_token, user },
        Err(e) => log::info!("stored access token rejected: {}", e),
    }

    let Some(refresh_token) = storage::get_refresh_token() else {
        storage::clear_tokens();
        return AuthState::Anonymous;
    };

    let refreshed = match api::refresh_token(refresh_token).await {
        Ok(response) => response,
        Err(e) => {
            log::warn!("session refresh failed: {}", e);
            storage::clear_tokens();
            return AuthState::Anonymous;
        }
    };
    storage::save_access_token(&refreshed.access_token);

    match api::get_current_user(&refreshed.access_token).await {
        Ok(user) => AuthState::Authenticated {
            access_token: refreshed.access_token,
            user,
        },
        Err(e) => {
            log::warn!("could not load current user: {}", e);
            storage::clear_tokens();
            AuthState::Anonymous
        }
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let (auth_state, set_auth_state) = signal(AuthState::default());

    spawn_local(async move {
        set_auth_state.set(restore_session().await);
    });

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Log in and publish the new session
pub async fn do_login(
    set_auth_state: WriteSignal<AuthState>,
    username: String,
    password: String,
) -> Result<(), String> {
    let response = api::login(username, password).await?;

    storage::save_session(&response.access_token, &response.refresh_token);
    log::info!("logged in as {}", response.user.username);

    set_auth_state.set(AuthState::Authenticated {
        access_token: response.access_token,
        user: response.user,
    });

    Ok(())
}

/// Revoke the refresh token (best effort) and drop the session
pub async fn do_logout(set_auth_state: WriteSignal<AuthState>) {
    if let Some(refresh_token) = storage::get_refresh_token() {
        if let Err(e) = api::logout(refresh_token).await {
            log::warn!("logout request failed: {}", e);
        }
    }

    storage::clear_tokens();
    set_auth_state.set(AuthState::Anonymous);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_authenticated_state_has_a_user() {
        let user = UserInfo {
            id: "7".into(),
            username: "bodega".into(),
            full_name: None,
            email: None,
            is_admin: false,
            permisos: vec![],
        };
        let state = AuthState::Authenticated {
            access_token: "t".into(),
            user: user.clone(),
        };
        assert_eq!(state.user(), Some(&user));
        assert!(state.is_authenticated());
        assert!(AuthState::Restoring.user().is_none());
        assert!(!AuthState::Anonymous.is_authenticated());
    }
}
