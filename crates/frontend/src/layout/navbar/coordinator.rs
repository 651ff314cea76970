//! Open/close state of the navbar menus.
//!
//! Top-level dropdowns, the profile menu and the mobile drawer share a single
//! slot, so at most one of them is open at any time. The hovered nested
//! submenus form a path from the open dropdown inward and only exist while
//! that dropdown is open.

use super::position::SubmenuSide;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MenuKey {
    Dropdown(String),
    Profile,
    Mobile,
}

impl MenuKey {
    pub fn dropdown(id: impl Into<String>) -> Self {
        MenuKey::Dropdown(id.into())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HoveredSubmenu {
    pub id: String,
    pub side: SubmenuSide,
}

/// Snapshot of what is open; only `DropdownCoordinator` can change it
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuOpenState {
    open: Option<MenuKey>,
    /// Hovered submenus, outermost first; index is the nesting depth
    submenus: Vec<HoveredSubmenu>,
}

impl MenuOpenState {
    pub fn is_open(&self, key: &MenuKey) -> bool {
        self.open.as_ref() == Some(key)
    }

    pub fn open_key(&self) -> Option<&MenuKey> {
        self.open.as_ref()
    }

    pub fn is_all_closed(&self) -> bool {
        self.open.is_none() && self.submenus.is_empty()
    }

    pub fn submenus(&self) -> &[HoveredSubmenu] {
        &self.submenus
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DropdownCoordinator {
    state: MenuOpenState,
}

impl DropdownCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &MenuOpenState {
        &self.state
    }

    pub fn is_open(&self, key: &MenuKey) -> bool {
        self.state.is_open(key)
    }

    /// Close `key` if it is open, otherwise open it and close everything else
    pub fn toggle(&mut self, key: MenuKey) {
        self.state.submenus.clear();
        if self.state.is_open(&key) {
            self.state.open = None;
        } else {
            self.state.open = Some(key);
        }
    }

    /// Returns whether anything was open
    pub fn close_all(&mut self) -> bool {
        let changed = !self.state.is_all_closed();
        self.state = MenuOpenState::default();
        changed
    }

    /// A leaf link was chosen: every menu closes, whichever one was open
    pub fn select_leaf(&mut self) -> bool {
        self.close_all()
    }

    /// Track the submenu hovered at `depth` (0 = directly inside the open
    /// dropdown). Deeper submenus of a previous path are closed; ignored while
    /// no dropdown is open or the parent submenu is not open.
    pub fn enter_submenu(&mut self, depth: usize, id: &str, side: SubmenuSide) -> bool {
        if !matches!(self.state.open, Some(MenuKey::Dropdown(_))) {
            return false;
        }
        if depth > self.state.submenus.len() {
            return false;
        }
        let next = HoveredSubmenu {
            id: id.to_string(),
            side,
        };
        if self.state.submenus.len() == depth + 1 && self.state.submenus[depth] == next {
            return false;
        }
        self.state.submenus.truncate(depth);
        self.state.submenus.push(next);
        true
    }

    /// Close `id` together with the submenus nested inside it
    pub fn leave_submenu(&mut self, id: &str) -> bool {
        match self.state.submenus.iter().position(|s| s.id == id) {
            Some(depth) => {
                self.state.submenus.truncate(depth);
                true
            }
            None => false,
        }
    }

    /// Side of `id` while it is on the hovered path
    pub fn submenu_side(&self, id: &str) -> Option<SubmenuSide> {
        self.state
            .submenus
            .iter()
            .find(|s| s.id == id)
            .map(|s| s.side)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys() -> Vec<MenuKey> {
        vec![
            MenuKey::dropdown("inventario"),
            MenuKey::dropdown("catalogos"),
            MenuKey::dropdown("reportes"),
            MenuKey::Profile,
            MenuKey::Mobile,
        ]
    }

    fn open_count(c: &DropdownCoordinator) -> usize {
        keys().iter().filter(|k| c.is_open(k)).count()
    }

    #[test]
    fn test_initially_all_closed() {
        let c = DropdownCoordinator::new();
        assert_eq!(open_count(&c), 0);
        assert!(c.state().is_all_closed());
    }

    #[test]
    fn test_mutual_exclusivity_over_toggle_sequences() {
        let keys = keys();
        // deterministic pseudo-random walk over the keys
        let mut seed: u64 = 0x5eed;
        let mut c = DropdownCoordinator::new();
        for _ in 0..500 {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            let key = keys[(seed >> 33) as usize % keys.len()].clone();
            if (seed >> 20) % 7 == 0 {
                c.close_all();
            } else {
                c.toggle(key);
            }
            assert!(open_count(&c) <= 1);
        }
    }

    #[test]
    fn test_toggle_opens_and_closes_siblings() {
        let mut c = DropdownCoordinator::new();
        c.toggle(MenuKey::Profile);
        c.toggle(MenuKey::dropdown("inventario"));
        assert!(c.is_open(&MenuKey::dropdown("inventario")));
        assert!(!c.is_open(&MenuKey::Profile));

        c.toggle(MenuKey::Mobile);
        assert!(c.is_open(&MenuKey::Mobile));
        assert!(!c.is_open(&MenuKey::dropdown("inventario")));
    }

    #[test]
    fn test_toggle_twice_is_involution() {
        for key in keys() {
            let mut c = DropdownCoordinator::new();
            let before = c.clone();
            c.toggle(key.clone());
            c.toggle(key.clone());
            assert_eq!(c, before);

            let mut opened = DropdownCoordinator::new();
            opened.toggle(key.clone());
            let before = opened.clone();
            opened.toggle(key.clone());
            opened.toggle(key);
            assert_eq!(opened, before);
        }
    }

    #[test]
    fn test_close_all_is_idempotent() {
        let mut c = DropdownCoordinator::new();
        c.toggle(MenuKey::dropdown("catalogos"));
        assert!(c.close_all());
        assert!(!c.close_all());
        assert_eq!(open_count(&c), 0);
    }

    #[test]
    fn test_submenu_requires_open_dropdown() {
        let mut c = DropdownCoordinator::new();
        assert!(!c.enter_submenu(0, "proveedores", SubmenuSide::Right));

        c.toggle(MenuKey::Profile);
        assert!(!c.enter_submenu(0, "proveedores", SubmenuSide::Right));

        c.toggle(MenuKey::dropdown("catalogos"));
        assert!(c.enter_submenu(0, "proveedores", SubmenuSide::Left));
        assert!(!c.enter_submenu(0, "proveedores", SubmenuSide::Left));
        assert_eq!(c.submenu_side("proveedores"), Some(SubmenuSide::Left));
        assert_eq!(c.submenu_side("otro"), None);
    }

    #[test]
    fn test_submenu_cleared_by_transitions() {
        let mut c = DropdownCoordinator::new();
        c.toggle(MenuKey::dropdown("catalogos"));
        c.enter_submenu(0, "proveedores", SubmenuSide::Right);
        assert!(!c.leave_submenu("otro"));
        assert!(c.leave_submenu("proveedores"));
        assert!(c.state().submenus().is_empty());

        c.enter_submenu(0, "proveedores", SubmenuSide::Right);
        c.toggle(MenuKey::dropdown("inventario"));
        assert!(c.state().submenus().is_empty());

        c.enter_submenu(0, "equipos", SubmenuSide::Right);
        assert!(c.close_all());
        assert!(c.state().is_all_closed());
    }

    #[test]
    fn test_nested_submenus_stay_open_along_path() {
        let mut c = DropdownCoordinator::new();
        c.toggle(MenuKey::dropdown("catalogos"));
        assert!(c.enter_submenu(0, "externos", SubmenuSide::Right));
        assert!(c.enter_submenu(1, "proveedores", SubmenuSide::Left));
        assert_eq!(c.submenu_side("externos"), Some(SubmenuSide::Right));
        assert_eq!(c.submenu_side("proveedores"), Some(SubmenuSide::Left));

        // sibling at the outer depth replaces the whole path
        assert!(c.enter_submenu(0, "internos", SubmenuSide::Right));
        assert_eq!(c.submenu_side("externos"), None);
        assert_eq!(c.submenu_side("proveedores"), None);
        assert_eq!(c.state().submenus().len(), 1);
    }

    #[test]
    fn test_nested_submenu_needs_open_parent() {
        let mut c = DropdownCoordinator::new();
        c.toggle(MenuKey::dropdown("catalogos"));
        assert!(!c.enter_submenu(1, "proveedores", SubmenuSide::Right));

        c.enter_submenu(0, "externos", SubmenuSide::Right);
        c.enter_submenu(1, "proveedores", SubmenuSide::Right);
        assert!(c.leave_submenu("proveedores"));
        assert_eq!(c.submenu_side("externos"), Some(SubmenuSide::Right));

        c.enter_submenu(1, "proveedores", SubmenuSide::Right);
        assert!(c.leave_submenu("externos"));
        assert!(c.state().submenus().is_empty());
    }

    #[test]
    fn test_select_leaf_closes_everything() {
        for key in keys() {
            for with_submenu in [false, true] {
                let mut c = DropdownCoordinator::new();
                c.toggle(key.clone());
                if with_submenu {
                    c.enter_submenu(0, "externos", SubmenuSide::Right);
                    c.enter_submenu(1, "proveedores", SubmenuSide::Left);
                }
                assert!(c.select_leaf());
                assert!(c.state().is_all_closed(), "{:?} left open", key);
            }
        }

        let mut closed = DropdownCoordinator::new();
        assert!(!closed.select_leaf());
        assert!(closed.state().is_all_closed());
    }
}
