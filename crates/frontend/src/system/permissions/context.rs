use contracts::system::permissions::{Action, Permission, PermissionSet};
use leptos::prelude::*;

use crate::layout::navbar::render::{PermissionCheckError, PermissionChecker};
use crate::system::auth::AuthState;

/// Permission set of the current session
#[derive(Debug, Clone, PartialEq)]
pub enum SessionPermissions {
    /// The session is still being restored; every check errors
    Loading,
    Loaded(PermissionSet),
}

impl SessionPermissions {
    pub fn from_auth(state: &AuthState) -> Self {
        match state {
            AuthState::Restoring => SessionPermissions::Loading,
            AuthState::Anonymous => SessionPermissions::Loaded(PermissionSet::default()),
            AuthState::Authenticated { user, .. } => {
                SessionPermissions::Loaded(user.permission_set())
            }
        }
    }

    /// Fail-closed check of a whole requirement list
    pub fn allows(&self, required: &[Permission]) -> bool {
        match self {
            SessionPermissions::Loading => false,
            SessionPermissions::Loaded(set) => set.has_all(required),
        }
    }

    pub fn can(&self, resource: &str, action: Action) -> bool {
        self.has_permission(resource, action).unwrap_or(false)
    }
}

impl PermissionChecker for SessionPermissions {
    fn has_permission(&self, resource: &str, action: Action) -> Result<bool, PermissionCheckError> {
        match self {
            SessionPermissions::Loading => Err(PermissionCheckError::NotLoaded),
            SessionPermissions::Loaded(set) => Ok(set.has(resource, action)),
        }
    }
}

/// Derive the permission memo from the auth signal and provide it
pub fn provide_session_permissions(auth_state: ReadSignal<AuthState>) -> Memo<SessionPermissions> {
    let permissions = Memo::new(move |_| auth_state.with(SessionPermissions::from_auth));
    provide_context(permissions);
    permissions
}

pub fn use_permissions() -> Memo<SessionPermissions> {
    use_context::<Memo<SessionPermissions>>().expect("SessionPermissions not found")
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::system::auth::UserInfo;

    fn operator(permisos: Vec<Permission>) -> AuthState {
        AuthState::Authenticated {
            access_token: "token".into(),
            user: UserInfo {
                id: "1".into(),
                username: "operador".into(),
                full_name: None,
                email: None,
                is_admin: false,
                permisos,
            },
        }
    }

    #[test]
    fn test_restoring_session_fails_closed() {
        let perms = SessionPermissions::from_auth(&AuthState::Restoring);
        assert_eq!(
            perms.has_permission("materiales", Action::Leer),
            Err(PermissionCheckError::NotLoaded)
        );
        assert!(!perms.can("materiales", Action::Leer));
        assert!(!perms.allows(&[]));
    }

    #[test]
    fn test_loaded_session_checks_grants() {
        let perms = SessionPermissions::from_auth(&operator(vec![
            Permission::read("materiales"),
            Permission::new("materiales", Action::Editar),
        ]));
        assert!(perms.can("materiales", Action::Editar));
        assert!(!perms.can("materiales", Action::Eliminar));
        assert!(perms.allows(&[]));
        assert!(!perms.allows(&[Permission::read("marcas")]));
    }

    #[test]
    fn test_anonymous_session_denies_everything() {
        let perms = SessionPermissions::from_auth(&AuthState::Anonymous);
        assert_eq!(perms.has_permission("marcas", Action::Leer), Ok(false));
    }
}
