use contracts::domain::a001_material::Material;
use contracts::system::permissions::Action;
use leptos::prelude::*;
use thaw::*;

use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use crate::system::permissions::RequirePermission;

/// Read-only detail view with edit and delete actions for permitted users
#[component]
pub fn MaterialDetails(
    material: Material,
    on_close: Callback<()>,
    on_edit: Callback<Material>,
    on_delete: Callback<Material>,
) -> impl IntoView {
    let title = format!("{} · {}", material.codigo, material.nombre);
    let low_stock = material.is_low_stock();
    let for_edit = material.clone();
    let for_delete = material.clone();

    let optional = |value: &Option<String>| value.clone().unwrap_or_else(|| "\u{2014}".to_string());

    view! {
        <Modal title=title on_close=on_close>
            <dl class="details-list">
                <dt>"Código"</dt>
                <dd>{material.codigo.clone()}</dd>
                <dt>"Nombre"</dt>
                <dd>{material.nombre.clone()}</dd>
                <dt>"Unidad"</dt>
                <dd>{material.unidad.label()}</dd>
                <dt>"Stock"</dt>
                <dd>
                    {material.stock_label()}
                    {low_stock.then(|| view! {
                        <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Warning>
                            "Stock bajo"
                        </Badge>
                    })}
                </dd>
                <dt>"Stock mínimo"</dt>
                <dd>{contracts::domain::a001_material::aggregate::format_quantity(material.stock_minimo, material.unidad)}</dd>
                <dt>"Marca"</dt>
                <dd>{optional(&material.marca)}</dd>
                <dt>"Modelo"</dt>
                <dd>{optional(&material.modelo)}</dd>
                <dt>"Descripción"</dt>
                <dd>{optional(&material.descripcion)}</dd>
                <dt>"Actualizado"</dt>
                <dd>{material.metadata.updated_label()}</dd>
            </dl>
            <div class="details-actions">
                <RequirePermission resource="materiales" action=Action::Editar>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click={
                            let material = for_edit.clone();
                            move |_| on_edit.run(material.clone())
                        }
                    >
                        {icon("edit")}
                        "Editar"
                    </Button>
                </RequirePermission>
                <RequirePermission resource="materiales" action=Action::Eliminar>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click={
                            let material = for_delete.clone();
                            move |_| on_delete.run(material.clone())
                        }
                    >
                        {icon("trash")}
                        "Eliminar"
                    </Button>
                </RequirePermission>
            </div>
        </Modal>
    }
}
