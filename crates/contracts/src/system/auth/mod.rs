use serde::{Deserialize, Serialize};

use crate::system::permissions::{Permission, PermissionSet};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub user: UserInfo,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshResponse {
    pub access_token: String,
}

/// Current user as returned by `/api/auth/me` and the login endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: String,
    pub username: String,
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub is_admin: bool,
    /// Explicit grants; ignored for admins, who hold every permission
    #[serde(default)]
    pub permisos: Vec<Permission>,
}

impl UserInfo {
    pub fn display_name(&self) -> &str {
        self.full_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(&self.username)
    }

    pub fn permission_set(&self) -> PermissionSet {
        if self.is_admin {
            PermissionSet::all()
        } else {
            PermissionSet::new(self.permisos.iter().cloned())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::permissions::Action;

    fn user(is_admin: bool) -> UserInfo {
        UserInfo {
            id: "1".into(),
            username: "operador".into(),
            full_name: Some("  ".into()),
            email: None,
            is_admin,
            permisos: vec![Permission::new("materiales", Action::Leer)],
        }
    }

    #[test]
    fn test_display_name_falls_back_to_username() {
        assert_eq!(user(false).display_name(), "operador");
    }

    #[test]
    fn test_admin_holds_every_permission() {
        let set = user(true).permission_set();
        assert!(set.has("onus", Action::Eliminar));
    }

    #[test]
    fn test_user_permissions_come_from_grants() {
        let set = user(false).permission_set();
        assert!(set.has("materiales", Action::Leer));
        assert!(!set.has("materiales", Action::Editar));
    }

    #[test]
    fn test_permisos_default_when_missing() {
        let json = r#"{"id":"7","username":"ana","full_name":null,"email":null,"is_admin":false}"#;
        let info: UserInfo = serde_json::from_str(json).unwrap();
        assert!(info.permisos.is_empty());
    }
}
