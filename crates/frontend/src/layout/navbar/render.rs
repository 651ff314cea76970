//! Turns the static menu tree into what the current user may see.

use super::menu_tree::{MenuKind, MenuNode, MenuTree};
use contracts::system::permissions::{Action, Permission};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PermissionCheckError {
    #[error("session permissions are not loaded yet")]
    NotLoaded,
}

/// Answers `{resource, action}` queries against the session permissions
pub trait PermissionChecker {
    fn has_permission(&self, resource: &str, action: Action) -> Result<bool, PermissionCheckError>;
}

/// Fail closed: a check that errors hides the node
pub fn is_permitted(checker: &impl PermissionChecker, required: &[Permission]) -> bool {
    required
        .iter()
        .all(|p| match checker.has_permission(&p.resource, p.action) {
            Ok(granted) => granted,
            Err(err) => {
                log::warn!("hiding menu entry requiring {}: {}", p, err);
                false
            }
        })
}

#[derive(Debug, Clone, PartialEq)]
pub enum RenderedKind {
    Link { path: String },
    Dropdown { children: Vec<RenderedNode> },
    Submenu { children: Vec<RenderedNode> },
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderedNode {
    pub id: String,
    pub label: String,
    pub icon: &'static str,
    /// The node is, or contains, the link to the current route
    pub active: bool,
    pub kind: RenderedKind,
}

impl RenderedNode {
    pub fn children(&self) -> &[RenderedNode] {
        match &self.kind {
            RenderedKind::Link { .. } => &[],
            RenderedKind::Dropdown { children } | RenderedKind::Submenu { children } => children,
        }
    }
}

/// Visible part of `tree` for `checker`, with active flags for `active_route`.
///
/// Nodes without permission disappear with their whole subtree, and a
/// dropdown or submenu with no visible children disappears too.
pub fn render(
    tree: &MenuTree,
    active_route: &str,
    checker: &impl PermissionChecker,
) -> Vec<RenderedNode> {
    render_nodes(tree.nodes(), active_route, checker)
}

fn render_nodes(
    nodes: &[MenuNode],
    active_route: &str,
    checker: &impl PermissionChecker,
) -> Vec<RenderedNode> {
    nodes
        .iter()
        .filter_map(|node| render_node(node, active_route, checker))
        .collect()
}

fn render_node(
    node: &MenuNode,
    active_route: &str,
    checker: &impl PermissionChecker,
) -> Option<RenderedNode> {
    if !is_permitted(checker, &node.required) {
        return None;
    }
    let (kind, active) = match &node.kind {
        MenuKind::Link { path } => (
            RenderedKind::Link { path: path.clone() },
            path == active_route,
        ),
        MenuKind::Dropdown { children } | MenuKind::Submenu { children } => {
            let children = render_nodes(children, active_route, checker);
            if children.is_empty() {
                return None;
            }
            let active = children.iter().any(|c| c.active);
            let kind = if matches!(node.kind, MenuKind::Dropdown { .. }) {
                RenderedKind::Dropdown { children }
            } else {
                RenderedKind::Submenu { children }
            };
            (kind, active)
        }
    };
    Some(RenderedNode {
        id: node.id.clone(),
        label: node.label.clone(),
        icon: node.icon,
        active,
        kind,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::system::permissions::PermissionSet;

    struct Grants(PermissionSet);

    impl PermissionChecker for Grants {
        fn has_permission(&self, resource: &str, action: Action) -> Result<bool, PermissionCheckError> {
            Ok(self.0.has(resource, action))
        }
    }

    struct Broken;

    impl PermissionChecker for Broken {
        fn has_permission(&self, _: &str, _: Action) -> Result<bool, PermissionCheckError> {
            Err(PermissionCheckError::NotLoaded)
        }
    }

    fn grants(list: &[&str]) -> Grants {
        Grants(PermissionSet::new(list.iter().map(|r| Permission::read(*r))))
    }

    fn tree() -> MenuTree {
        MenuTree::new(vec![
            MenuNode::link("Inicio", "home", "/"),
            MenuNode::dropdown(
                "inventario",
                "Inventario",
                "package",
                vec![
                    MenuNode::link("Materiales", "box", "/materiales")
                        .requires(Permission::read("materiales")),
                    MenuNode::submenu(
                        "equipos",
                        "Equipos",
                        "router",
                        vec![MenuNode::link("A", "router", "/a").requires(Permission::read("x"))],
                    ),
                ],
            ),
        ])
        .unwrap()
    }

    fn find<'a>(nodes: &'a [RenderedNode], id: &str) -> Option<&'a RenderedNode> {
        nodes.iter().find_map(|n| {
            if n.id == id {
                Some(n)
            } else {
                find(n.children(), id)
            }
        })
    }

    #[test]
    fn test_active_propagates_to_ancestors() {
        let out = render(&tree(), "/a", &grants(&["x", "materiales"]));
        assert!(find(&out, "/a").unwrap().active);
        assert!(find(&out, "equipos").unwrap().active);
        assert!(find(&out, "inventario").unwrap().active);
        assert!(!find(&out, "/materiales").unwrap().active);
        assert!(!find(&out, "/").unwrap().active);
    }

    #[test]
    fn test_link_active_on_exact_match_only() {
        let out = render(&tree(), "/materiales/nuevo", &grants(&["x", "materiales"]));
        assert!(out.iter().all(|n| !n.active));
    }

    #[test]
    fn test_node_without_permission_is_omitted() {
        let hidden = render(&tree(), "/", &grants(&["materiales"]));
        assert!(find(&hidden, "/a").is_none());

        let shown = render(&tree(), "/", &grants(&["materiales", "x"]));
        assert!(find(&shown, "/a").is_some());
    }

    #[test]
    fn test_container_emptied_by_filtering_is_hidden() {
        let out = render(&tree(), "/", &grants(&["materiales"]));
        assert!(find(&out, "equipos").is_none());
        assert_eq!(find(&out, "inventario").unwrap().children().len(), 1);

        let none = render(&tree(), "/", &grants(&[]));
        assert!(find(&none, "inventario").is_none());
        assert_eq!(none.len(), 1);
    }

    #[test]
    fn test_checker_errors_fail_closed() {
        let out = render(&tree(), "/", &Broken);
        // only the ungated link survives
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, "/");
    }

    #[test]
    fn test_parent_requirement_hides_subtree() {
        let tree = MenuTree::new(vec![MenuNode::dropdown(
            "admin",
            "Admin",
            "settings",
            vec![MenuNode::link("Libre", "x", "/libre")],
        )
        .requires(Permission::read("admin"))])
        .unwrap();
        assert!(render(&tree, "/libre", &grants(&[])).is_empty());
        assert_eq!(render(&tree, "/libre", &grants(&["admin"])).len(), 1);
    }
}
