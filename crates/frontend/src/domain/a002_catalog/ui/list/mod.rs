//! Read-only, paginated list shared by every reference catalog.

use contracts::domain::a002_catalog::{CatalogEntry, CatalogKind};
use contracts::shared::pagination::{ListQuery, Page};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_params_map;
use thaw::*;

use crate::domain::a002_catalog::api;
use crate::shared::components::PaginationControls;
use crate::shared::config::config;
use crate::shared::icons::icon;
use crate::system::permissions::RequireRead;

/// Route entry for `/catalogos/:recurso`
#[component]
pub fn CatalogPage() -> impl IntoView {
    let params = use_params_map();
    let kind = Memo::new(move |_| {
        params
            .read()
            .get("recurso")
            .and_then(|r| CatalogKind::from_resource(&r))
    });

    move || match kind.get() {
        Some(kind) => view! {
            <RequireRead resource=kind.resource()>
                <CatalogList kind=kind />
            </RequireRead>
        }
        .into_any(),
        None => view! {
            <div class="page">
                <div class="alert alert--warning">"Catálogo desconocido."</div>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn CatalogList(kind: CatalogKind) -> impl IntoView {
    let query = RwSignal::new(ListQuery::new(config().default_page_size));
    let page = RwSignal::new(Page::<CatalogEntry>::empty(config().default_page_size));
    let error = RwSignal::new(Option::<String>::None);
    let loading = RwSignal::new(false);
    let search = RwSignal::new(String::new());

    // Reruns whenever the query changes
    Effect::new(move |_| {
        let current = query.get();
        loading.set(true);
        spawn_local(async move {
            let result = api::fetch_page(kind, &current).await;
            // A newer query superseded this one
            if query.with_untracked(|q| *q != current) {
                return;
            }
            match result {
                Ok(p) => {
                    page.set(p);
                    error.set(None);
                }
                Err(e) => {
                    log::warn!("loading {} failed: {}", kind.resource(), e);
                    error.set(Some(e));
                }
            }
            loading.set(false);
        });
    });

    Effect::new(move |_| {
        let term = search.get();
        query.maybe_update(|q| {
            let next = q.clone().with_search(&term);
            let changed = next != *q;
            *q = next;
            changed
        });
    });

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{kind.title()}</h1>
                </div>
                <div class="header__actions">
                    <div class="header__search">
                        <Input value=search placeholder="Buscar..." />
                    </div>
                </div>
            </div>

            {move || error.get().map(|e| view! {
                <div class="warning-box warning-box--error">
                    {icon("alert")}
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>{kind.code_label()}</TableHeaderCell>
                        <TableHeaderCell>"Nombre"</TableHeaderCell>
                        <TableHeaderCell>"Descripción"</TableHeaderCell>
                        <TableHeaderCell>"Estado"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || {
                        page.with(|p| p.items.clone())
                            .into_iter()
                            .map(|entry| view! {
                                <TableRow>
                                    <TableCell>{entry.codigo.unwrap_or_default()}</TableCell>
                                    <TableCell>{entry.nombre}</TableCell>
                                    <TableCell>{entry.descripcion.unwrap_or_default()}</TableCell>
                                    <TableCell>
                                        {if entry.activo {
                                            view! {
                                                <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Success>"Activo"</Badge>
                                            }
                                                .into_any()
                                        } else {
                                            view! {
                                                <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Subtle>"Inactivo"</Badge>
                                            }
                                                .into_any()
                                        }}
                                    </TableCell>
                                </TableRow>
                            })
                            .collect_view()
                    }}
                </TableBody>
            </Table>
            <Show when=move || loading.get()>
                <div class="table__loading"><Spinner /></div>
            </Show>
            <Show when=move || !loading.get() && page.with(|p| p.items.is_empty())>
                <div class="table__empty">"Sin registros"</div>
            </Show>

            <PaginationControls
                current_page=Signal::derive(move || query.with(|q| q.page))
                total_pages=Signal::derive(move || page.with(|p| p.total_pages()))
                total_count=Signal::derive(move || page.with(|p| p.total))
                page_size=Signal::derive(move || query.with(|q| q.page_size))
                on_page_change=Callback::new(move |p: usize| query.update(|q| *q = q.clone().with_page(p)))
                on_page_size_change=Callback::new(move |size: usize| query.update(|q| *q = q.clone().with_page_size(size)))
            />
        </div>
    }
}
