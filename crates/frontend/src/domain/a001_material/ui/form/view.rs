use contracts::domain::a001_material::{
    form::{CODIGO_MAX, DESCRIPCION_MAX, NOMBRE_MAX},
    Material, MaterialForm, Unit,
};
use leptos::prelude::*;
use thaw::*;

use super::view_model::MaterialFormViewModel;

type Getter = fn(&MaterialForm) -> String;
type Setter = fn(&mut MaterialForm, String);

fn group_class(invalid: bool) -> &'static str {
    if invalid {
        "form-group form-group--invalid"
    } else {
        "form-group"
    }
}

#[component]
fn TextField(
    vm: MaterialFormViewModel,
    field: &'static str,
    label: &'static str,
    get: Getter,
    set: Setter,
    #[prop(optional)] placeholder: &'static str,
    #[prop(optional)] maxlength: Option<usize>,
    #[prop(optional)] inputmode: &'static str,
) -> impl IntoView {
    view! {
        <div class=move || group_class(vm.field_error(field).is_some())>
            <label for=field>{label}</label>
            <input
                type="text"
                id=field
                placeholder=placeholder
                inputmode=inputmode
                maxlength=maxlength.map(|m| m.to_string())
                prop:value=move || vm.form.with(get)
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    vm.set_field(field, |f| set(f, value));
                }
            />
            {move || vm.field_error(field).map(|e| view! { <div class="form-group__error">{e}</div> })}
        </div>
    }
}

/// Dialog for a new material (`initial.id == None`) or an existing one.
/// `on_close` runs when the dialog is dismissed without saving.
#[component]
pub fn MaterialFormDialog(
    initial: MaterialForm,
    on_saved: Callback<Material>,
    on_close: Callback<()>,
) -> impl IntoView {
    let vm = MaterialFormViewModel::new(initial);
    let open = RwSignal::new(true);

    // Mask click and Escape close the dialog from inside thaw
    Effect::new(move |_| {
        if !open.get() {
            on_close.run(());
        }
    });

    let title = move || {
        if vm.is_edit_mode() {
            "Editar material"
        } else {
            "Nuevo material"
        }
    };

    view! {
        <Dialog open=open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>{title}</DialogTitle>
                    <DialogContent>
                        {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}
                        <div class="details-form material-form">
                            <TextField
                                vm=vm
                                field="codigo"
                                label="Código"
                                placeholder="CAB-UTP-6"
                                maxlength=CODIGO_MAX
                                get=|f| f.codigo.clone()
                                set=|f, v| f.codigo = v
                            />
                            <TextField
                                vm=vm
                                field="nombre"
                                label="Nombre"
                                maxlength=NOMBRE_MAX
                                get=|f| f.nombre.clone()
                                set=|f, v| f.nombre = v
                            />
                            <div class=move || group_class(vm.field_error("unidad").is_some())>
                                <label for="unidad">"Unidad"</label>
                                <select
                                    id="unidad"
                                    prop:value=move || vm.form.with(|f| f.unidad.clone())
                                    on:change=move |ev| {
                                        let value = event_target_value(&ev);
                                        vm.set_field("unidad", |f| f.unidad = value);
                                    }
                                >
                                    {Unit::ALL
                                        .into_iter()
                                        .map(|unit| view! { <option value=unit.code()>{unit.label()}</option> })
                                        .collect_view()}
                                </select>
                                {move || vm.field_error("unidad").map(|e| view! { <div class="form-group__error">{e}</div> })}
                            </div>
                            <TextField
                                vm=vm
                                field="stock"
                                label="Stock"
                                inputmode="decimal"
                                get=|f| f.stock.clone()
                                set=|f, v| f.stock = v
                            />
                            <TextField
                                vm=vm
                                field="stock_minimo"
                                label="Stock mínimo"
                                inputmode="decimal"
                                get=|f| f.stock_minimo.clone()
                                set=|f, v| f.stock_minimo = v
                            />
                            <TextField
                                vm=vm
                                field="marca"
                                label="Marca"
                                get=|f| f.marca.clone()
                                set=|f, v| f.marca = v
                            />
                            <TextField
                                vm=vm
                                field="modelo"
                                label="Modelo"
                                get=|f| f.modelo.clone()
                                set=|f, v| f.modelo = v
                            />
                            <div class=move || group_class(vm.field_error("descripcion").is_some())>
                                <label for="descripcion">"Descripción"</label>
                                <textarea
                                    id="descripcion"
                                    rows="3"
                                    maxlength=DESCRIPCION_MAX.to_string()
                                    prop:value=move || vm.form.with(|f| f.descripcion.clone())
                                    on:input=move |ev| {
                                        let value = event_target_value(&ev);
                                        vm.set_field("descripcion", |f| f.descripcion = value);
                                    }
                                />
                                {move || vm.field_error("descripcion").map(|e| view! { <div class="form-group__error">{e}</div> })}
                            </div>
                        </div>
                    </DialogContent>
                    <DialogActions>
                        <Button appearance=ButtonAppearance::Secondary on_click=move |_| open.set(false)>
                            "Cancelar"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Primary
                            disabled=vm.saving
                            on_click=move |_| vm.save_command(on_saved)
                        >
                            {move || match (vm.saving.get(), vm.is_edit_mode()) {
                                (true, _) => "Guardando...",
                                (false, true) => "Guardar",
                                (false, false) => "Crear",
                            }}
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}
