//! Decides which side a nested submenu flies out to.

use wasm_bindgen::JsCast;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmenuSide {
    Left,
    Right,
}

impl SubmenuSide {
    pub fn css_class(&self) -> &'static str {
        match self {
            SubmenuSide::Left => "navbar-submenu--left",
            SubmenuSide::Right => "navbar-submenu--right",
        }
    }
}

/// Viewport-relative box of the submenu trigger, in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementBounds {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl From<&web_sys::DomRect> for ElementBounds {
    fn from(rect: &web_sys::DomRect) -> Self {
        Self {
            left: rect.left(),
            right: rect.right(),
            top: rect.top(),
            bottom: rect.bottom(),
        }
    }
}

/// `Right` when the space right of the trigger fits the submenu; ties go right
pub fn resolve(bounds: &ElementBounds, viewport_width: f64, submenu_width: f64) -> SubmenuSide {
    if viewport_width - bounds.right >= submenu_width {
        SubmenuSide::Right
    } else {
        SubmenuSide::Left
    }
}

/// Measure `target` and the window right now; never cache the result, the
/// viewport may have been resized or scrolled since the last hover.
pub fn resolve_for_target(target: &web_sys::EventTarget, submenu_width: f64) -> SubmenuSide {
    let Some(element) = target.dyn_ref::<web_sys::Element>() else {
        return SubmenuSide::Right;
    };
    let viewport_width = web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64());
    match viewport_width {
        Some(width) => {
            let bounds = ElementBounds::from(&element.get_bounding_client_rect());
            resolve(&bounds, width, submenu_width)
        }
        None => SubmenuSide::Right,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds(right: f64) -> ElementBounds {
        ElementBounds {
            left: right - 200.0,
            right,
            top: 40.0,
            bottom: 72.0,
        }
    }

    #[test]
    fn test_resolves_right_when_space_fits() {
        assert_eq!(resolve(&bounds(600.0), 1280.0, 224.0), SubmenuSide::Right);
    }

    #[test]
    fn test_resolves_left_when_space_is_short() {
        assert_eq!(resolve(&bounds(1100.0), 1280.0, 224.0), SubmenuSide::Left);
    }

    #[test]
    fn test_exact_fit_resolves_right() {
        assert_eq!(resolve(&bounds(1056.0), 1280.0, 224.0), SubmenuSide::Right);
        assert_eq!(resolve(&bounds(1056.5), 1280.0, 224.0), SubmenuSide::Left);
    }

    #[test]
    fn test_trigger_past_viewport_edge() {
        assert_eq!(resolve(&bounds(1400.0), 1280.0, 0.0), SubmenuSide::Left);
    }
}
