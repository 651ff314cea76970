use crate::domain::a001_material::ui::list::MaterialList;
use crate::domain::a002_catalog::ui::list::CatalogPage;
use crate::layout::Shell;
use crate::system::auth::guard::RequireAuth;
use crate::system::pages::home::HomePage;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page">
            <h1 class="page__title">"Página no encontrada"</h1>
            <a href="/">"Volver al inicio"</a>
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <RequireAuth>
                <Shell>
                    <Routes fallback=|| view! { <NotFound /> }>
                        <Route path=path!("/") view=HomePage />
                        <Route path=path!("/materiales") view=MaterialList />
                        <Route path=path!("/catalogos/:recurso") view=CatalogPage />
                    </Routes>
                </Shell>
            </RequireAuth>
        </Router>
    }
}
