use crate::routes::routes::AppRoutes;
use crate::system::auth::{use_auth, AuthProvider};
use crate::system::permissions::provide_session_permissions;
use leptos::prelude::*;

#[component]
fn SessionScope(children: ChildrenFn) -> impl IntoView {
    let (auth_state, _) = use_auth();
    provide_session_permissions(auth_state);
    children()
}

#[component]
pub fn App() -> impl IntoView {
    view! {
        <AuthProvider>
            <SessionScope>
                <AppRoutes />
            </SessionScope>
        </AuthProvider>
    }
}
