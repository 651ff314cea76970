//! Closes the open menu when a pointer goes down outside of it.
//!
//! Each menu registers the region that belongs to it. A single window-level
//! `pointerdown` listener checks the open menu's region. Menu triggers stop
//! propagation of their own `pointerdown`, so the event that toggles a menu
//! never reaches the listener as well.

use super::context::NavMenuContext;
use super::coordinator::{DropdownCoordinator, MenuKey};
use leptos::ev;
use leptos::prelude::*;
use leptos::prelude::window_event_listener;
use wasm_bindgen::JsCast;

/// Region a menu owns on screen
pub trait Boundary<T> {
    fn contains(&self, target: &T) -> bool;
}

#[derive(Debug, Clone)]
pub struct PointerDown<T> {
    pub target: T,
    /// A handler closer to the target already consumed the event
    pub propagation_stopped: bool,
}

pub struct OutsideClickDismisser<B> {
    regions: Vec<(MenuKey, B)>,
}

impl<B> Default for OutsideClickDismisser<B> {
    fn default() -> Self {
        Self {
            regions: Vec::new(),
        }
    }
}

impl<B> OutsideClickDismisser<B> {
    pub fn register(&mut self, key: MenuKey, boundary: B) {
        self.unregister(&key);
        self.regions.push((key, boundary));
    }

    pub fn unregister(&mut self, key: &MenuKey) {
        self.regions.retain(|(k, _)| k != key);
    }

    pub fn is_registered(&self, key: &MenuKey) -> bool {
        self.regions.iter().any(|(k, _)| k == key)
    }

    /// Returns whether the event closed a menu. A menu open without a
    /// registered region is treated as not containing the target.
    pub fn handle<T>(&self, event: &PointerDown<T>, coordinator: &mut DropdownCoordinator) -> bool
    where
        B: Boundary<T>,
    {
        if event.propagation_stopped {
            return false;
        }
        let Some(open) = coordinator.state().open_key() else {
            return false;
        };
        let inside = self
            .regions
            .iter()
            .find(|(k, _)| k == open)
            .is_some_and(|(_, region)| region.contains(&event.target));
        if inside {
            return false;
        }
        coordinator.close_all()
    }
}

/// DOM element acting as a menu region
pub struct ElementBoundary(pub web_sys::Element);

impl Boundary<web_sys::Node> for ElementBoundary {
    fn contains(&self, target: &web_sys::Node) -> bool {
        self.0.contains(Some(target))
    }
}

pub type DomDismisser = OutsideClickDismisser<ElementBoundary>;

/// Registry shared by the navbar's menus, provided through context
#[derive(Clone, Copy)]
pub struct OutsideClickRegistry {
    inner: StoredValue<DomDismisser, LocalStorage>,
}

impl OutsideClickRegistry {
    pub fn new() -> Self {
        Self {
            inner: StoredValue::new_local(DomDismisser::default()),
        }
    }

    /// Register the element behind `node_ref` as the region of `key` once it
    /// is mounted, and drop it again when the owner is cleaned up
    pub fn track(&self, key: MenuKey, node_ref: NodeRef<leptos::html::Div>) {
        let inner = self.inner;
        let register_key = key.clone();
        Effect::new(move |_| {
            if let Some(el) = node_ref.get() {
                let element: web_sys::Element = el.into();
                inner.update_value(|r| r.register(register_key.clone(), ElementBoundary(element)));
            }
        });
        on_cleanup(move || {
            inner.update_value(|r| r.unregister(&key));
        });
    }

    fn dispatch(&self, event: &PointerDown<web_sys::Node>, menu: NavMenuContext) {
        self.inner.with_value(|registry| menu.dismiss_with(registry, event));
    }
}

impl Default for OutsideClickRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Install the window listener for the lifetime of the calling component
pub fn use_outside_click(menu: NavMenuContext, registry: OutsideClickRegistry) {
    let handle = window_event_listener(ev::pointerdown, move |ev: web_sys::PointerEvent| {
        let Some(target) = ev.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok()) else {
            return;
        };
        let event = PointerDown {
            target,
            propagation_stopped: ev.cancel_bubble(),
        };
        registry.dispatch(&event, menu);
    });
    on_cleanup(move || handle.remove());
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Horizontal span covered by a menu, targets are x coordinates
    struct Span(f64, f64);

    impl Boundary<f64> for Span {
        fn contains(&self, x: &f64) -> bool {
            *x >= self.0 && *x <= self.1
        }
    }

    fn down(x: f64) -> PointerDown<f64> {
        PointerDown {
            target: x,
            propagation_stopped: false,
        }
    }

    fn dismisser() -> OutsideClickDismisser<Span> {
        let mut d = OutsideClickDismisser::default();
        d.register(MenuKey::dropdown("a"), Span(0.0, 100.0));
        d.register(MenuKey::dropdown("b"), Span(200.0, 300.0));
        d.register(MenuKey::Profile, Span(900.0, 1000.0));
        d
    }

    #[test]
    fn test_outside_pointer_down_closes_open_menu() {
        let d = dismisser();
        let mut c = DropdownCoordinator::new();
        c.toggle(MenuKey::dropdown("a"));
        assert!(d.handle(&down(500.0), &mut c));
        assert!(c.state().is_all_closed());
    }

    #[test]
    fn test_no_op_when_nothing_open() {
        let d = dismisser();
        let mut c = DropdownCoordinator::new();
        assert!(!d.handle(&down(500.0), &mut c));
        assert_eq!(c, DropdownCoordinator::new());
    }

    #[test]
    fn test_inside_pointer_down_keeps_menu_open() {
        let d = dismisser();
        let mut c = DropdownCoordinator::new();
        c.toggle(MenuKey::Profile);
        assert!(!d.handle(&down(950.0), &mut c));
        assert!(c.is_open(&MenuKey::Profile));
    }

    #[test]
    fn test_other_menu_region_counts_as_outside() {
        let d = dismisser();
        let mut c = DropdownCoordinator::new();
        c.toggle(MenuKey::dropdown("a"));
        assert!(d.handle(&down(250.0), &mut c));
        assert!(!c.is_open(&MenuKey::dropdown("a")));
    }

    #[test]
    fn test_toggle_and_dismiss_never_both_fire() {
        let d = dismisser();
        let mut c = DropdownCoordinator::new();
        c.toggle(MenuKey::dropdown("a"));

        // pointer down on b's trigger: the trigger toggles and stops propagation
        let mut event = down(250.0);
        c.toggle(MenuKey::dropdown("b"));
        event.propagation_stopped = true;
        assert!(!d.handle(&event, &mut c));
        assert!(c.is_open(&MenuKey::dropdown("b")));
    }

    #[test]
    fn test_unregistered_open_menu_is_closed() {
        let mut d = dismisser();
        d.unregister(&MenuKey::Profile);
        assert!(!d.is_registered(&MenuKey::Profile));
        let mut c = DropdownCoordinator::new();
        c.toggle(MenuKey::Profile);
        assert!(d.handle(&down(950.0), &mut c));
    }

    #[test]
    fn test_register_replaces_region() {
        let mut d = dismisser();
        d.register(MenuKey::dropdown("a"), Span(400.0, 500.0));
        let mut c = DropdownCoordinator::new();
        c.toggle(MenuKey::dropdown("a"));
        assert!(!d.handle(&down(450.0), &mut c));
        assert!(d.handle(&down(50.0), &mut c));
    }
}
