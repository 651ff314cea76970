//! Resource/action grants that gate menu entries, pages and buttons.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Operation a user may perform on a resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Leer,
    Crear,
    Editar,
    Eliminar,
}

impl Action {
    pub const ALL: [Action; 4] = [Action::Leer, Action::Crear, Action::Editar, Action::Eliminar];

    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Leer => "leer",
            Action::Crear => "crear",
            Action::Editar => "editar",
            Action::Eliminar => "eliminar",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|a| a.as_str().eq_ignore_ascii_case(value.trim()))
    }
}

/// A single `{resource, action}` grant, e.g. `materiales:leer`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Permission {
    pub resource: String,
    pub action: Action,
}

impl Permission {
    pub fn new(resource: impl Into<String>, action: Action) -> Self {
        Self {
            resource: resource.into(),
            action,
        }
    }

    pub fn read(resource: impl Into<String>) -> Self {
        Self::new(resource, Action::Leer)
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.resource, self.action.as_str())
    }
}

/// Session-scoped set of grants
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PermissionSet {
    grants: HashSet<Permission>,
    unrestricted: bool,
}

impl PermissionSet {
    pub fn new(grants: impl IntoIterator<Item = Permission>) -> Self {
        Self {
            grants: grants.into_iter().collect(),
            unrestricted: false,
        }
    }

    /// Every check succeeds (administrators)
    pub fn all() -> Self {
        Self {
            grants: HashSet::new(),
            unrestricted: true,
        }
    }

    pub fn has(&self, resource: &str, action: Action) -> bool {
        self.unrestricted
            || self
                .grants
                .iter()
                .any(|p| p.action == action && p.resource == resource)
    }

    /// An empty requirement list is always satisfied
    pub fn has_all(&self, required: &[Permission]) -> bool {
        required.iter().all(|p| self.has(&p.resource, p.action))
    }

    pub fn len(&self) -> usize {
        self.grants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.grants.is_empty() && !self.unrestricted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_roundtrip_names() {
        assert_eq!(Action::parse("LEER"), Some(Action::Leer));
        assert_eq!(Action::parse(" eliminar "), Some(Action::Eliminar));
        assert_eq!(Action::parse("borrar"), None);
        assert_eq!(
            serde_json::to_string(&Permission::read("lotes")).unwrap(),
            r#"{"resource":"lotes","action":"leer"}"#
        );
    }

    #[test]
    fn test_has_all() {
        let set = PermissionSet::new([
            Permission::read("materiales"),
            Permission::new("materiales", Action::Crear),
        ]);
        assert!(set.has_all(&[]));
        assert!(set.has_all(&[Permission::read("materiales")]));
        assert!(!set.has_all(&[
            Permission::read("materiales"),
            Permission::new("materiales", Action::Eliminar),
        ]));
        assert!(!set.has("marcas", Action::Leer));
    }

    #[test]
    fn test_empty_and_unrestricted() {
        assert!(PermissionSet::default().is_empty());
        assert!(!PermissionSet::all().is_empty());
        assert!(PermissionSet::all().has_all(&[Permission::new("x", Action::Editar)]));
    }

    #[test]
    fn test_display() {
        assert_eq!(Permission::read("x").to_string(), "x:leer");
    }
}
