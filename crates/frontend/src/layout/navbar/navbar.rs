use super::context::{use_nav_menu, NavMenuContext};
use super::coordinator::MenuKey;
use super::desktop::DesktopMenu;
use super::menu_config::{app_menu, HOME_PATH};
use super::mobile::MobileMenu;
use super::outside_click::{use_outside_click, OutsideClickRegistry};
use super::profile_menu::ProfileMenu;
use super::render::{render, RenderedKind, RenderedNode};
use crate::shared::icons::icon;
use crate::system::permissions::use_permissions;
use leptos::ev;
use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

/// Owns the menu state for its lifetime: the coordinator, the outside-click
/// registry and the window listeners are created here and dropped on unmount.
#[component]
pub fn Navbar() -> impl IntoView {
    let menu = NavMenuContext::new();
    provide_context(menu);
    let registry = OutsideClickRegistry::new();
    provide_context(registry);
    use_outside_click(menu, registry);

    let escape = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" {
            menu.close_all();
        }
    });
    on_cleanup(move || escape.remove());

    let permissions = use_permissions();
    let location = use_location();
    let nodes = Memo::new(move |_| {
        let route = location.pathname.get();
        match app_menu() {
            Ok(tree) => permissions.with(|p| render(tree, &route, p)),
            Err(err) => {
                log::error!("navigation menu is invalid: {}", err);
                Vec::new()
            }
        }
    });

    view! {
        <header class="navbar">
            <a href=HOME_PATH class="navbar-brand">
                {icon("warehouse")}
                <span>"Almacén"</span>
            </a>
            <DesktopMenu nodes=nodes />
            <div class="navbar-end">
                <ProfileMenu />
                <MobileMenu nodes=nodes />
            </div>
        </header>
    }
}

/// Toggle on pointer-down and keep the event away from the outside-click
/// listener, so one press never both opens and dismisses.
pub(super) fn trigger_pointerdown(
    menu: NavMenuContext,
    key: MenuKey,
) -> impl Fn(ev::PointerEvent) + Clone + 'static {
    move |ev| {
        if ev.button() != 0 {
            return;
        }
        ev.stop_propagation();
        menu.toggle(key.clone());
    }
}

/// Keyboard activation fires `click` with `detail == 0` and no pointer-down
pub(super) fn is_keyboard_activation(detail: i32) -> bool {
    detail == 0
}

pub(super) fn trigger_click(
    menu: NavMenuContext,
    key: MenuKey,
) -> impl Fn(ev::MouseEvent) + Clone + 'static {
    move |ev| {
        if is_keyboard_activation(ev.detail()) {
            menu.toggle(key.clone());
        }
    }
}

pub(super) fn item_class(base: &str, active: bool) -> String {
    if active {
        format!("{base} {base}--active")
    } else {
        base.to_string()
    }
}

/// Whether a click on a menu link is routed in-app; modified clicks keep the
/// browser behaviour (new tab, new window)
pub(super) fn routes_in_app(button: i16, ctrl: bool, meta: bool, shift: bool) -> bool {
    button == 0 && !ctrl && !meta && !shift
}

/// Leaf entry: navigate, then close every menu. Modified clicks also close the
/// menus, the browser opens the link elsewhere.
#[component]
pub(super) fn MenuLink(node: RenderedNode, class: &'static str) -> impl IntoView {
    let menu = use_nav_menu();
    let navigate = use_navigate();
    let path = match &node.kind {
        RenderedKind::Link { path } => path.clone(),
        _ => {
            log::error!("menu entry {} is not a link", node.id);
            return ().into_any();
        }
    };
    let href = path.clone();

    let on_click = move |ev: ev::MouseEvent| {
        if routes_in_app(ev.button(), ev.ctrl_key(), ev.meta_key(), ev.shift_key()) {
            ev.prevent_default();
            navigate(&path, Default::default());
        }
        menu.select_leaf();
    };

    view! {
        <a
            href=href
            class=item_class(class, node.active)
            aria-current=node.active.then_some("page")
            on:click=on_click
        >
            {icon(node.icon)}
            <span>{node.label}</span>
        </a>
    }
    .into_any()
}
