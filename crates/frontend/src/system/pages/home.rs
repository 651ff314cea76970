use contracts::system::permissions::Permission;
use leptos::prelude::*;

use crate::domain::a001_material::ui::summary::MaterialSummary;
use crate::layout::navbar::menu_config::MATERIALS_PATH;
use crate::system::auth::use_auth;
use crate::system::permissions::PermissionGate;

#[component]
pub fn HomePage() -> impl IntoView {
    let (auth_state, _) = use_auth();
    let greeting = move || {
        auth_state.with(|s| {
            s.user()
                .map(|u| format!("Hola, {}", u.display_name()))
                .unwrap_or_default()
        })
    };

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Inicio"</h1>
                    <p class="header__subtitle">{greeting}</p>
                </div>
            </div>
            <PermissionGate required=vec![Permission::read("materiales")]>
                <MaterialSummary />
                <a class="button button--secondary" href=MATERIALS_PATH>"Ver materiales"</a>
            </PermissionGate>
        </div>
    }
}
