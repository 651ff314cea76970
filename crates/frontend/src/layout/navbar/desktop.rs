use super::context::use_nav_menu;
use super::coordinator::MenuKey;
use super::navbar::{is_keyboard_activation, item_class, trigger_click, trigger_pointerdown, MenuLink};
use super::outside_click::OutsideClickRegistry;
use super::position::{resolve_for_target, SubmenuSide};
use super::render::{RenderedKind, RenderedNode};
use crate::shared::config::config;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub(super) fn DesktopMenu(#[prop(into)] nodes: Signal<Vec<RenderedNode>>) -> impl IntoView {
    view! {
        <ul class="navbar-menu">
            {move || {
                nodes
                    .get()
                    .into_iter()
                    .map(|node| match node.kind {
                        RenderedKind::Link { .. } => {
                            view! {
                                <li class="navbar-item">
                                    <MenuLink node=node class="navbar-link" />
                                </li>
                            }
                                .into_any()
                        }
                        RenderedKind::Dropdown { .. } | RenderedKind::Submenu { .. } => {
                            view! { <DropdownMenu node=node /> }.into_any()
                        }
                    })
                    .collect_view()
            }}
        </ul>
    }
}

#[component]
fn DropdownMenu(node: RenderedNode) -> impl IntoView {
    let menu = use_nav_menu();
    let registry = use_context::<OutsideClickRegistry>().expect("OutsideClickRegistry not found");
    let key = MenuKey::dropdown(node.id.clone());

    let root = NodeRef::<leptos::html::Div>::new();
    registry.track(key.clone(), root);

    let open = {
        let key = key.clone();
        Memo::new(move |_| menu.is_open(&key))
    };
    let active = node.active;
    let children = node.children().to_vec();

    view! {
        <li class=move || {
            let class = item_class("navbar-dropdown", active);
            if open.get() { format!("{class} navbar-dropdown--open") } else { class }
        }>
            <div class="navbar-dropdown__root" node_ref=root>
                <button
                    type="button"
                    class="navbar-link navbar-dropdown__trigger"
                    aria-haspopup="menu"
                    aria-expanded=move || open.get().to_string()
                    on:pointerdown=trigger_pointerdown(menu, key.clone())
                    on:click=trigger_click(menu, key)
                >
                    {icon(node.icon)}
                    <span>{node.label}</span>
                    {icon("chevron-down")}
                </button>
                <Show when=move || open.get()>
                    <ul class="navbar-dropdown__panel" role="menu">
                        {children.clone().into_iter().map(|n| panel_entry(n, 0)).collect_view()}
                    </ul>
                </Show>
            </div>
        </li>
    }
}

/// `depth` is the nesting level of submenus found among these entries
fn panel_entry(node: RenderedNode, depth: usize) -> AnyView {
    match node.kind {
        RenderedKind::Link { .. } => view! {
            <li role="none">
                <MenuLink node=node class="navbar-dropdown__item" />
            </li>
        }
        .into_any(),
        RenderedKind::Dropdown { .. } | RenderedKind::Submenu { .. } => {
            view! { <SubmenuEntry node=node depth=depth /> }.into_any()
        }
    }
}

/// Nested flyout; its side is measured on every hover-enter
#[component]
fn SubmenuEntry(node: RenderedNode, depth: usize) -> impl IntoView {
    let menu = use_nav_menu();
    let entry = NodeRef::<leptos::html::Li>::new();
    let id = node.id.clone();

    let side = {
        let id = id.clone();
        Memo::new(move |_| menu.submenu_side(&id))
    };

    let measure = move || -> SubmenuSide {
        match entry.get_untracked() {
            Some(li) => {
                let element: web_sys::Element = li.into();
                resolve_for_target(element.as_ref(), config().submenu_width)
            }
            None => SubmenuSide::Right,
        }
    };

    let enter_id = id.clone();
    let on_enter = move |_| menu.enter_submenu(depth, &enter_id, measure());
    let leave_id = id.clone();
    let on_leave = move |_| menu.leave_submenu(&leave_id);
    // Pointers already opened it on enter; only keyboard activation toggles
    let on_click = move |ev: leptos::ev::MouseEvent| {
        if !is_keyboard_activation(ev.detail()) {
            return;
        }
        if side.get_untracked().is_some() {
            menu.leave_submenu(&id);
        } else {
            menu.enter_submenu(depth, &id, measure());
        }
    };

    let active = node.active;
    let children = node.children().to_vec();

    view! {
        <li
            class=item_class("navbar-submenu__entry", active)
            role="none"
            node_ref=entry
            on:pointerenter=on_enter
            on:pointerleave=on_leave
        >
            <button
                type="button"
                class="navbar-dropdown__item navbar-submenu__trigger"
                aria-haspopup="menu"
                aria-expanded=move || side.get().is_some().to_string()
                on:click=on_click
            >
                {icon(node.icon)}
                <span>{node.label}</span>
                {icon("chevron-right")}
            </button>
            {move || {
                side.get()
                    .map(|side| {
                        view! {
                            <ul class=format!("navbar-submenu {}", side.css_class()) role="menu">
                                {children.clone().into_iter().map(|n| panel_entry(n, depth + 1)).collect_view()}
                            </ul>
                        }
                    })
            }}
        </li>
    }
}
