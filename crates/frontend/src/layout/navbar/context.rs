use super::coordinator::{DropdownCoordinator, MenuKey};
use super::outside_click::{Boundary, OutsideClickDismisser, PointerDown};
use super::position::SubmenuSide;
use leptos::prelude::*;

/// Reactive handle on the navbar's `DropdownCoordinator`.
///
/// Copyable and provided through context; components read open flags from
/// it and change them only through the operations below.
#[derive(Clone, Copy)]
pub struct NavMenuContext {
    state: RwSignal<DropdownCoordinator>,
}

impl NavMenuContext {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(DropdownCoordinator::new()),
        }
    }

    pub fn is_open(&self, key: &MenuKey) -> bool {
        self.state.with(|c| c.is_open(key))
    }

    pub fn submenu_side(&self, id: &str) -> Option<SubmenuSide> {
        self.state.with(|c| c.submenu_side(id))
    }

    pub fn toggle(&self, key: MenuKey) {
        log::debug!("menu toggle: {:?}", key);
        self.state.update(|c| c.toggle(key));
    }

    pub fn close_all(&self) {
        self.state.maybe_update(|c| {
            let changed = c.close_all();
            if changed {
                log::debug!("menu close_all");
            }
            changed
        });
    }

    pub fn select_leaf(&self) {
        self.state.maybe_update(|c| {
            let changed = c.select_leaf();
            if changed {
                log::debug!("menu closed by leaf selection");
            }
            changed
        });
    }

    pub fn enter_submenu(&self, depth: usize, id: &str, side: SubmenuSide) {
        self.state.maybe_update(|c| c.enter_submenu(depth, id, side));
    }

    pub fn leave_submenu(&self, id: &str) {
        self.state.maybe_update(|c| c.leave_submenu(id));
    }

    pub(super) fn dismiss_with<B, T>(&self, dismisser: &OutsideClickDismisser<B>, event: &PointerDown<T>)
    where
        B: Boundary<T>,
    {
        self.state.maybe_update(|c| {
            let closed = dismisser.handle(event, c);
            if closed {
                log::debug!("menu closed by outside pointer down");
            }
            closed
        });
    }
}

impl Default for NavMenuContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_nav_menu() -> NavMenuContext {
    use_context::<NavMenuContext>().expect("NavMenuContext not found")
}
