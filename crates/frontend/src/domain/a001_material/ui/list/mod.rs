pub mod state;

use contracts::domain::a001_material::{Material, MaterialForm};
use contracts::system::permissions::Action;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use self::state::create_state;
use crate::domain::a001_material::api;
use crate::domain::a001_material::ui::details::MaterialDetails;
use crate::domain::a001_material::ui::form::MaterialFormDialog;
use crate::domain::a001_material::ui::summary::MaterialSummary;
use crate::shared::components::PaginationControls;
use crate::shared::icons::icon;
use crate::system::permissions::{RequirePermission, RequireRead};

fn confirm_delete(material: &Material) -> bool {
    web_sys::window()
        .and_then(|win| {
            win.confirm_with_message(&format!(
                "¿Eliminar el material {} ({})?",
                material.nombre, material.codigo
            ))
            .ok()
        })
        .unwrap_or(false)
}

#[component]
pub fn MaterialList() -> impl IntoView {
    view! {
        <RequireRead resource="materiales">
            <MaterialListPage />
        </RequireRead>
    }
}

#[component]
fn MaterialListPage() -> impl IntoView {
    let state = create_state();
    let error = RwSignal::new(Option::<String>::None);
    let loading = RwSignal::new(false);
    let search = RwSignal::new(String::new());
    let stats_reload = RwSignal::new(0u32);
    let selected = RwSignal::new(Option::<Material>::None);
    let editor = RwSignal::new(Option::<MaterialForm>::None);

    let load = move || {
        let mut seq = 0;
        state.update(|s| seq = s.begin_request());
        let query = state.with_untracked(|s| s.query.clone());
        loading.set(true);
        spawn_local(async move {
            match api::fetch_page(&query).await {
                Ok(page) => {
                    let mut applied = false;
                    state.update(|s| applied = s.apply(seq, page));
                    if applied {
                        error.set(None);
                        loading.set(false);
                    }
                }
                Err(e) => {
                    if !state.with_untracked(|s| s.is_current(seq)) {
                        log::debug!("ignoring failure of superseded request {}", seq);
                        return;
                    }
                    log::warn!("loading materials failed: {}", e);
                    error.set(Some(e));
                    loading.set(false);
                }
            }
        });
    };

    // Every search edit reloads from page 0; stale responses are discarded
    Effect::new(move |_| {
        let term = search.get();
        let mut changed = false;
        state.maybe_update(|s| {
            changed = s.set_search(&term);
            changed
        });
        if changed {
            load();
        }
    });

    let go_to_page = move |page: usize| {
        state.update(|s| s.query = s.query.clone().with_page(page));
        load();
    };

    let change_page_size = move |size: usize| {
        state.update(|s| s.query = s.query.clone().with_page_size(size));
        load();
    };

    let after_change = move || {
        load();
        stats_reload.update(|n| *n += 1);
    };

    let on_saved = Callback::new(move |material: Material| {
        editor.set(None);
        selected.set(Some(material));
        after_change();
    });

    let on_delete = Callback::new(move |material: Material| {
        if !confirm_delete(&material) {
            return;
        }
        spawn_local(async move {
            match api::remove(material.id).await {
                Ok(()) => {
                    log::info!("material {} deleted", material.codigo);
                    selected.set(None);
                    after_change();
                }
                Err(e) => error.set(Some(e)),
            }
        });
    });

    let on_edit = Callback::new(move |material: Material| {
        selected.set(None);
        editor.set(Some(MaterialForm::from(&material)));
    });

    load();

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Materiales"</h1>
                </div>
                <div class="header__actions">
                    <div class="header__search">
                        <Input value=search placeholder="Buscar por código, nombre o marca..." />
                    </div>
                    <RequirePermission resource="materiales" action=Action::Crear>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| editor.set(Some(MaterialForm::new()))
                        >
                            {icon("plus")}
                            "Nuevo material"
                        </Button>
                    </RequirePermission>
                </div>
            </div>

            <MaterialSummary reload=stats_reload />

            {move || error.get().map(|e| view! {
                <div class="warning-box warning-box--error">
                    {icon("alert")}
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Código"</th>
                            <th class="table__header-cell">"Nombre"</th>
                            <th class="table__header-cell">"Marca"</th>
                            <th class="table__header-cell">"Modelo"</th>
                            <th class="table__header-cell table__header-cell--number">"Stock"</th>
                            <th class="table__header-cell">"Actualizado"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let items = state.with(|s| s.page.items.clone());
                            if items.is_empty() && state.with(|s| s.is_loaded) {
                                return view! {
                                    <tr>
                                        <td class="table__cell table__cell--empty" colspan="6">
                                            "No se encontraron materiales"
                                        </td>
                                    </tr>
                                }
                                    .into_any();
                            }
                            items
                                .into_iter()
                                .map(|material| {
                                    let row = material.clone();
                                    view! {
                                        <tr
                                            class=if material.is_low_stock() {
                                                "table__row table__row--warning"
                                            } else {
                                                "table__row"
                                            }
                                            on:click=move |_| selected.set(Some(row.clone()))
                                        >
                                            <td class="table__cell">{material.codigo.clone()}</td>
                                            <td class="table__cell">{material.nombre.clone()}</td>
                                            <td class="table__cell">{material.marca.clone().unwrap_or_default()}</td>
                                            <td class="table__cell">{material.modelo.clone().unwrap_or_default()}</td>
                                            <td class="table__cell table__cell--number">{material.stock_label()}</td>
                                            <td class="table__cell">{material.metadata.updated_label()}</td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                                .into_any()
                        }}
                    </tbody>
                </table>
                <Show when=move || loading.get()>
                    <div class="table__loading"><Spinner /></div>
                </Show>
            </div>

            <PaginationControls
                current_page=Signal::derive(move || state.with(|s| s.query.page))
                total_pages=Signal::derive(move || state.with(|s| s.total_pages()))
                total_count=Signal::derive(move || state.with(|s| s.page.total))
                page_size=Signal::derive(move || state.with(|s| s.query.page_size))
                on_page_change=Callback::new(go_to_page)
                on_page_size_change=Callback::new(change_page_size)
            />

            {move || selected.get().map(|material| view! {
                <MaterialDetails
                    material=material
                    on_close=Callback::new(move |_| selected.set(None))
                    on_edit=on_edit
                    on_delete=on_delete
                />
            })}

            {move || editor.get().map(|form| view! {
                <MaterialFormDialog
                    initial=form
                    on_saved=on_saved
                    on_close=Callback::new(move |_| editor.set(None))
                />
            })}
        </div>
    }
}
