use contracts::system::permissions::{Action, Permission};
use leptos::prelude::*;

use super::context::use_permissions;

/// Renders `children` only when the session holds every permission in
/// `required`; an empty list always renders.
#[component]
pub fn PermissionGate(
    #[prop(into)] required: Vec<Permission>,
    #[prop(optional, into)] fallback: ViewFn,
    children: ChildrenFn,
) -> impl IntoView {
    let permissions = use_permissions();
    let allowed = Memo::new(move |_| permissions.with(|p| p.allows(&required)));

    view! {
        <Show when=move || allowed.get() fallback=fallback.clone()>
            {children()}
        </Show>
    }
}

/// Single-permission shorthand for action buttons
#[component]
pub fn RequirePermission(
    #[prop(into)] resource: String,
    action: Action,
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        <PermissionGate required=vec![Permission::new(resource, action)]>
            {children()}
        </PermissionGate>
    }
}

/// Page-level gate with an access-denied message
#[component]
pub fn RequireRead(#[prop(into)] resource: String, children: ChildrenFn) -> impl IntoView {
    view! {
        <PermissionGate
            required=vec![Permission::read(resource)]
            fallback=|| view! {
                <div class="page">
                    <div class="alert alert--warning">"No tiene permiso para ver esta sección."</div>
                </div>
            }
        >
            {children()}
        </PermissionGate>
    }
}
