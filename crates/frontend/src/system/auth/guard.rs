use leptos::prelude::*;
use thaw::Spinner;

use super::context::{use_auth, AuthState};
use crate::system::pages::login::LoginPage;

/// Renders `children` for an authenticated session, the login page otherwise.
/// While the stored session is being restored only a spinner is shown.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let (auth_state, _) = use_auth();
    let restoring = Memo::new(move |_| auth_state.with(|s| *s == AuthState::Restoring));
    let authenticated = Memo::new(move |_| auth_state.with(|s| s.is_authenticated()));

    view! {
        <Show
            when=move || !restoring.get()
            fallback=|| view! { <div class="page page--centered"><Spinner />"Cargando sesión..."</div> }
        >
            {
                let children = children.clone();
                view! {
                    <Show
                        when=move || authenticated.get()
                        fallback=|| view! { <LoginPage /> }
                    >
                        {children()}
                    </Show>
                }
            }
        </Show>
    }
}
