use super::context::use_nav_menu;
use super::coordinator::MenuKey;
use super::navbar::{item_class, trigger_click, trigger_pointerdown, MenuLink};
use super::outside_click::OutsideClickRegistry;
use super::render::{RenderedKind, RenderedNode};
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Expand or collapse one accordion group
fn toggle_group(expanded: &mut Vec<String>, id: &str) {
    if let Some(pos) = expanded.iter().position(|e| e == id) {
        expanded.remove(pos);
    } else {
        expanded.push(id.to_string());
    }
}

/// Containers on the path to the current route start expanded
fn active_groups(nodes: &[RenderedNode]) -> Vec<String> {
    let mut out = Vec::new();
    for node in nodes {
        if node.active && !matches!(node.kind, RenderedKind::Link { .. }) {
            out.push(node.id.clone());
            out.extend(active_groups(node.children()));
        }
    }
    out
}

/// Drawer with the same tree as the desktop bar, nested levels as accordions
#[component]
pub(super) fn MobileMenu(#[prop(into)] nodes: Signal<Vec<RenderedNode>>) -> impl IntoView {
    let menu = use_nav_menu();
    let registry = use_context::<OutsideClickRegistry>().expect("OutsideClickRegistry not found");
    let root = NodeRef::<leptos::html::Div>::new();
    registry.track(MenuKey::Mobile, root);

    let open = Memo::new(move |_| menu.is_open(&MenuKey::Mobile));
    let expanded = RwSignal::new(Vec::<String>::new());

    // Re-seed the accordion every time the drawer opens
    Effect::new(move |_| {
        if open.get() {
            expanded.set(nodes.with_untracked(|n| active_groups(n)));
        }
    });

    view! {
        <div class="navbar-mobile" node_ref=root>
            <button
                type="button"
                class="navbar-mobile__toggle"
                title="Menú"
                aria-expanded=move || open.get().to_string()
                on:pointerdown=trigger_pointerdown(menu, MenuKey::Mobile)
                on:click=trigger_click(menu, MenuKey::Mobile)
            >
                {move || if open.get() { icon("x") } else { icon("menu") }}
            </button>
            <Show when=move || open.get()>
                <nav class="navbar-mobile__drawer">
                    <ul class="navbar-mobile__list">
                        {move || {
                            nodes
                                .get()
                                .into_iter()
                                .map(|node| mobile_entry(node, expanded))
                                .collect_view()
                        }}
                    </ul>
                </nav>
            </Show>
        </div>
    }
}

fn mobile_entry(node: RenderedNode, expanded: RwSignal<Vec<String>>) -> AnyView {
    if let RenderedKind::Link { .. } = node.kind {
        return view! {
            <li>
                <MenuLink node=node class="navbar-mobile__link" />
            </li>
        }
        .into_any();
    }

    let id = node.id.clone();
    let is_expanded = {
        let id = id.clone();
        Memo::new(move |_| expanded.with(|e| e.contains(&id)))
    };
    let children = node.children().to_vec();

    view! {
        <li class=item_class("navbar-mobile__group", node.active)>
            <button
                type="button"
                class="navbar-mobile__group-toggle"
                aria-expanded=move || is_expanded.get().to_string()
                on:click=move |_| expanded.update(|e| toggle_group(e, &id))
            >
                {icon(node.icon)}
                <span>{node.label}</span>
                {move || if is_expanded.get() { icon("chevron-down") } else { icon("chevron-right") }}
            </button>
            <Show when=move || is_expanded.get()>
                <ul class="navbar-mobile__list navbar-mobile__list--nested">
                    {children
                        .clone()
                        .into_iter()
                        .map(|child| mobile_entry(child, expanded))
                        .collect_view()}
                </ul>
            </Show>
        </li>
    }
    .into_any()
}
