//! The application's navigation tree.

use super::menu_tree::{MenuNode, MenuTree, MenuTreeError};
use contracts::domain::a002_catalog::CatalogKind;
use contracts::system::permissions::Permission;
use once_cell::sync::Lazy;

pub const HOME_PATH: &str = "/";
pub const MATERIALS_PATH: &str = "/materiales";

pub fn catalog_path(kind: CatalogKind) -> String {
    format!("/catalogos/{}", kind.resource())
}

fn catalog_link(kind: CatalogKind, icon: &'static str) -> MenuNode {
    MenuNode::link(kind.title(), icon, catalog_path(kind))
        .requires(Permission::read(kind.resource()))
}

fn build() -> Result<MenuTree, MenuTreeError> {
    MenuTree::new(vec![
        MenuNode::link("Inicio", "home", HOME_PATH),
        MenuNode::dropdown(
            "inventario",
            "Inventario",
            "package",
            vec![
                MenuNode::link("Materiales", "box", MATERIALS_PATH)
                    .requires(Permission::read("materiales")),
                catalog_link(CatalogKind::Lotes, "layers"),
                catalog_link(CatalogKind::Onus, "router"),
            ],
        ),
        MenuNode::dropdown(
            "catalogos",
            "Catálogos",
            "database",
            vec![
                catalog_link(CatalogKind::Marcas, "tag"),
                catalog_link(CatalogKind::Modelos, "cpu"),
                MenuNode::submenu(
                    "proveedores-almacenes",
                    "Proveedores y almacenes",
                    "truck",
                    vec![
                        catalog_link(CatalogKind::Proveedores, "truck"),
                        catalog_link(CatalogKind::Almacenes, "warehouse"),
                    ],
                ),
            ],
        ),
    ])
}

static APP_MENU: Lazy<Result<MenuTree, MenuTreeError>> = Lazy::new(build);

/// Built and validated on first use
pub fn app_menu() -> Result<&'static MenuTree, &'static MenuTreeError> {
    APP_MENU.as_ref()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::navbar::menu_tree::MenuKind;

    fn links(nodes: &[MenuNode], out: &mut Vec<String>) {
        for node in nodes {
            match &node.kind {
                MenuKind::Link { path } => out.push(path.clone()),
                _ => links(node.children(), out),
            }
        }
    }

    #[test]
    fn test_app_menu_is_valid() {
        let tree = app_menu().unwrap();
        assert_eq!(
            tree.dropdown_ids().collect::<Vec<_>>(),
            vec!["inventario", "catalogos"]
        );
    }

    #[test]
    fn test_every_catalog_is_reachable() {
        let mut paths = Vec::new();
        links(app_menu().unwrap().nodes(), &mut paths);
        for kind in CatalogKind::ALL {
            assert!(paths.contains(&catalog_path(kind)), "{:?} missing", kind);
        }
        assert!(paths.contains(&MATERIALS_PATH.to_string()));
    }
}
