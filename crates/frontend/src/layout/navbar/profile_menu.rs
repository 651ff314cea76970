use super::context::use_nav_menu;
use super::coordinator::MenuKey;
use super::navbar::{trigger_click, trigger_pointerdown};
use super::outside_click::OutsideClickRegistry;
use crate::shared::icons::icon;
use crate::system::auth::context::{do_logout, use_auth};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// User menu; shares the coordinator slot with the dropdowns
#[component]
pub(super) fn ProfileMenu() -> impl IntoView {
    let menu = use_nav_menu();
    let registry = use_context::<OutsideClickRegistry>().expect("OutsideClickRegistry not found");
    let root = NodeRef::<leptos::html::Div>::new();
    registry.track(MenuKey::Profile, root);

    let (auth_state, set_auth_state) = use_auth();
    let open = Memo::new(move |_| menu.is_open(&MenuKey::Profile));

    let display_name = move || {
        auth_state.with(|s| {
            s.user()
                .map(|u| u.display_name().to_string())
                .unwrap_or_default()
        })
    };
    let secondary = move || {
        auth_state.with(|s| {
            s.user()
                .map(|u| u.email.clone().unwrap_or_else(|| u.username.clone()))
                .unwrap_or_default()
        })
    };

    let logout = move |_| {
        menu.close_all();
        spawn_local(async move {
            do_logout(set_auth_state).await;
        });
    };

    view! {
        <div class="navbar-profile" node_ref=root>
            <button
                type="button"
                class="navbar-link navbar-profile__trigger"
                aria-haspopup="menu"
                aria-expanded=move || open.get().to_string()
                on:pointerdown=trigger_pointerdown(menu, MenuKey::Profile)
                on:click=trigger_click(menu, MenuKey::Profile)
            >
                {icon("user")}
                <span class="navbar-profile__name">{display_name}</span>
                {icon("chevron-down")}
            </button>
            <Show when=move || open.get()>
                <div class="navbar-profile__panel" role="menu">
                    <div class="navbar-profile__header">
                        <strong>{display_name}</strong>
                        <span>{secondary}</span>
                    </div>
                    <button type="button" class="navbar-dropdown__item" role="menuitem" on:click=logout>
                        {icon("logout")}
                        <span>"Cerrar sesión"</span>
                    </button>
                </div>
            </Show>
        </div>
    }
}
