//! Static navigation tree: links, top-level dropdowns and nested submenus.
//!
//! The tree is built once from code and validated before the navbar renders
//! it, so a malformed entry fails loudly instead of silently misrendering.

use contracts::system::permissions::Permission;
use std::collections::HashSet;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MenuTreeError {
    #[error("menu node '{id}' has an empty label")]
    EmptyLabel { id: String },
    #[error("link '{label}' has invalid path '{path}' (must start with '/')")]
    InvalidPath { label: String, path: String },
    #[error("'{id}' has no children")]
    EmptyContainer { id: String },
    #[error("submenu '{id}' must be nested inside a dropdown")]
    SubmenuAtTopLevel { id: String },
    #[error("dropdown '{id}' can only appear at the top level")]
    NestedDropdown { id: String },
    #[error("duplicate menu id '{id}'")]
    DuplicateId { id: String },
}

#[derive(Debug, Clone, PartialEq)]
pub enum MenuKind {
    Link { path: String },
    Dropdown { children: Vec<MenuNode> },
    Submenu { children: Vec<MenuNode> },
}

#[derive(Debug, Clone, PartialEq)]
pub struct MenuNode {
    /// Identity of containers; links use their path
    pub id: String,
    pub label: String,
    /// Icon name handed to `shared::icons::icon`, never interpreted here
    pub icon: &'static str,
    /// Every permission must be held; empty means always visible
    pub required: Vec<Permission>,
    pub kind: MenuKind,
}

impl MenuNode {
    pub fn link(label: impl Into<String>, icon: &'static str, path: impl Into<String>) -> Self {
        let path = path.into();
        Self {
            id: path.clone(),
            label: label.into(),
            icon,
            required: Vec::new(),
            kind: MenuKind::Link { path },
        }
    }

    pub fn dropdown(
        id: impl Into<String>,
        label: impl Into<String>,
        icon: &'static str,
        children: Vec<MenuNode>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            icon,
            required: Vec::new(),
            kind: MenuKind::Dropdown { children },
        }
    }

    pub fn submenu(
        id: impl Into<String>,
        label: impl Into<String>,
        icon: &'static str,
        children: Vec<MenuNode>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            icon,
            required: Vec::new(),
            kind: MenuKind::Submenu { children },
        }
    }

    pub fn requires(mut self, permission: Permission) -> Self {
        self.required.push(permission);
        self
    }

    pub fn children(&self) -> &[MenuNode] {
        match &self.kind {
            MenuKind::Link { .. } => &[],
            MenuKind::Dropdown { children } | MenuKind::Submenu { children } => children,
        }
    }

    /// True when this node is, or contains, a link to `route`
    pub fn leads_to(&self, route: &str) -> bool {
        match &self.kind {
            MenuKind::Link { path } => path == route,
            MenuKind::Dropdown { children } | MenuKind::Submenu { children } => {
                children.iter().any(|child| child.leads_to(route))
            }
        }
    }
}

/// Validated, immutable navigation tree
#[derive(Debug, Clone, PartialEq)]
pub struct MenuTree {
    nodes: Vec<MenuNode>,
}

impl MenuTree {
    pub fn new(nodes: Vec<MenuNode>) -> Result<Self, MenuTreeError> {
        let mut seen = HashSet::new();
        for node in &nodes {
            if let MenuKind::Submenu { .. } = node.kind {
                return Err(MenuTreeError::SubmenuAtTopLevel {
                    id: node.id.clone(),
                });
            }
            validate_node(node, true, &mut seen)?;
        }
        Ok(Self { nodes })
    }

    pub fn nodes(&self) -> &[MenuNode] {
        &self.nodes
    }

    pub fn dropdown_ids(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().filter_map(|n| match n.kind {
            MenuKind::Dropdown { .. } => Some(n.id.as_str()),
            _ => None,
        })
    }
}

fn validate_node(
    node: &MenuNode,
    top_level: bool,
    seen: &mut HashSet<String>,
) -> Result<(), MenuTreeError> {
    if node.label.trim().is_empty() {
        return Err(MenuTreeError::EmptyLabel {
            id: node.id.clone(),
        });
    }
    match &node.kind {
        MenuKind::Link { path } => {
            if !path.starts_with('/') {
                return Err(MenuTreeError::InvalidPath {
                    label: node.label.clone(),
                    path: path.clone(),
                });
            }
            Ok(())
        }
        MenuKind::Dropdown { children } | MenuKind::Submenu { children } => {
            if matches!(node.kind, MenuKind::Dropdown { .. }) && !top_level {
                return Err(MenuTreeError::NestedDropdown {
                    id: node.id.clone(),
                });
            }
            if !seen.insert(node.id.clone()) {
                return Err(MenuTreeError::DuplicateId {
                    id: node.id.clone(),
                });
            }
            if children.is_empty() {
                return Err(MenuTreeError::EmptyContainer {
                    id: node.id.clone(),
                });
            }
            children
                .iter()
                .try_for_each(|child| validate_node(child, false, seen))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inventario() -> MenuNode {
        MenuNode::dropdown(
            "inventario",
            "Inventario",
            "package",
            vec![
                MenuNode::link("Materiales", "box", "/materiales"),
                MenuNode::submenu(
                    "equipos",
                    "Equipos",
                    "router",
                    vec![MenuNode::link("ONU", "router", "/a")],
                ),
            ],
        )
    }

    #[test]
    fn test_valid_tree() {
        let tree = MenuTree::new(vec![MenuNode::link("Inicio", "home", "/"), inventario()]).unwrap();
        assert_eq!(tree.nodes().len(), 2);
        assert_eq!(tree.dropdown_ids().collect::<Vec<_>>(), vec!["inventario"]);
    }

    #[test]
    fn test_leads_to_is_recursive() {
        let node = inventario();
        assert!(node.leads_to("/a"));
        assert!(node.leads_to("/materiales"));
        assert!(!node.leads_to("/marcas"));
        assert!(node.children()[1].leads_to("/a"));
        assert!(node.children()[0].children().is_empty());
    }

    #[test]
    fn test_submenu_at_top_level_rejected() {
        let err = MenuTree::new(vec![MenuNode::submenu(
            "s",
            "S",
            "x",
            vec![MenuNode::link("L", "x", "/l")],
        )])
        .unwrap_err();
        assert_eq!(err, MenuTreeError::SubmenuAtTopLevel { id: "s".into() });
    }

    #[test]
    fn test_nested_dropdown_rejected() {
        let err = MenuTree::new(vec![MenuNode::dropdown(
            "outer",
            "Outer",
            "x",
            vec![MenuNode::dropdown(
                "inner",
                "Inner",
                "x",
                vec![MenuNode::link("L", "x", "/l")],
            )],
        )])
        .unwrap_err();
        assert_eq!(err, MenuTreeError::NestedDropdown { id: "inner".into() });
    }

    #[test]
    fn test_structural_errors() {
        let empty = MenuTree::new(vec![MenuNode::dropdown("d", "D", "x", vec![])]).unwrap_err();
        assert_eq!(empty, MenuTreeError::EmptyContainer { id: "d".into() });

        let bad_path = MenuTree::new(vec![MenuNode::link("Lotes", "x", "lotes")]).unwrap_err();
        assert_eq!(
            bad_path.to_string(),
            "link 'Lotes' has invalid path 'lotes' (must start with '/')"
        );

        let no_label = MenuTree::new(vec![MenuNode::link("  ", "x", "/x")]).unwrap_err();
        assert_eq!(no_label, MenuTreeError::EmptyLabel { id: "/x".into() });

        let dup = MenuTree::new(vec![inventario(), inventario()]).unwrap_err();
        assert_eq!(dup, MenuTreeError::DuplicateId { id: "inventario".into() });
    }

    #[test]
    fn test_submenu_inside_submenu_accepted() {
        let tree = MenuTree::new(vec![MenuNode::dropdown(
            "catalogos",
            "Catálogos",
            "layers",
            vec![MenuNode::submenu(
                "externos",
                "Externos",
                "truck",
                vec![MenuNode::submenu(
                    "proveedores",
                    "Proveedores",
                    "truck",
                    vec![MenuNode::link("Nacionales", "truck", "/proveedores")],
                )],
            )],
        )])
        .unwrap();
        let inner = &tree.nodes()[0].children()[0].children()[0];
        assert_eq!(inner.id, "proveedores");
        assert!(tree.nodes()[0].leads_to("/proveedores"));
    }
}
