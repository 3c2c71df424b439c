use super::model::EmployeeForm;
use crate::app::use_services;
use crate::routes::AppRoute;
use crate::shared::form::{FormActions, FormViewModel, ModeOf, TextField};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use thaw::*;

#[component]
pub fn EmployeeDetails(mode: ModeOf<EmployeeForm>) -> impl IntoView {
    let services = use_services();
    let vm = FormViewModel::<EmployeeForm, _>::new(
        mode,
        services.transport,
        services.notifier,
        services.cache,
    );
    let navigate = use_navigate();

    {
        let vm = vm.clone();
        wasm_bindgen_futures::spawn_local(async move {
            vm.load().await;
        });
    }

    let on_submit = {
        let vm = vm.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let vm = vm.clone();
            let navigate = navigate.clone();
            wasm_bindgen_futures::spawn_local(async move {
                if vm.submit().await {
                    navigate(&AppRoute::EmployeeList.href(), Default::default());
                }
            });
        }
    };

    let title = match mode.key() {
        Some(id) => format!("Editar Empleado #{}", id),
        None => "Nuevo Empleado".to_string(),
    };
    let submit_label = if vm.is_edit() { "Actualizar Empleado" } else { "Crear Empleado" };

    let text_field = {
        let vm = vm.clone();
        move |id: &'static str,
              label: &'static str,
              get: fn(&EmployeeForm) -> String,
              set: fn(&mut EmployeeForm, String)| {
            let (read, write, check) = (vm.clone(), vm.clone(), vm.clone());
            view! {
                <TextField
                    id=id
                    label=label
                    value=Signal::derive(move || read.form.with(get))
                    on_input=Callback::new(move |v: String| write.edit(id, |f| set(f, v)))
                    error=Signal::derive(move || check.field_error(id))
                />
            }
        }
    };

    let vm_actions = vm.clone();
    let saving = vm.saving;

    view! {
        <PageFrame page_id="a002_employee--detail" category=PAGE_CAT_DETAIL>
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{title}</h1>
                </div>
            </div>
            <div class="page__content">
                {
                    let vm = vm.clone();
                    move || vm.loading.get().then(|| view! { <div class="page__loading"><Spinner /></div> })
                }
                <form
                    class="form"
                    class:form--hidden={
                        let vm = vm.clone();
                        move || vm.loading.get()
                    }
                    on:submit=on_submit
                >
                    {text_field("nombre", "Nombre", |f| f.first_name.clone(), |f, v| f.first_name = v)}
                    {text_field("apellido", "Apellido", |f| f.last_name.clone(), |f, v| f.last_name = v)}
                    {text_field("puesto", "Puesto", |f| f.role.clone(), |f, v| f.role = v)}
                    <FormActions
                        list_path=AppRoute::EmployeeList.href()
                        submit_label=submit_label.to_string()
                        can_submit=Signal::derive(move || vm_actions.can_submit())
                        saving=saving
                    />
                </form>
            </div>
        </PageFrame>
    }
}
