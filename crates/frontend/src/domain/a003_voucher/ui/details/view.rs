use super::model::VoucherForm;
use crate::app::use_services;
use crate::routes::AppRoute;
use crate::shared::form::{FormActions, FormViewModel, ModeOf, SelectField, TextField};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use contracts::domain::a001_inventory::aggregate::Sku;
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use thaw::*;

#[component]
pub fn VoucherDetails(mode: ModeOf<VoucherForm>) -> impl IntoView {
    let services = use_services();
    let vm = FormViewModel::<VoucherForm, _>::new(
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
                    navigate(&AppRoute::VoucherList.href(), Default::default());
                }
            });
        }
    };

    let title = match mode.key() {
        Some(id) => format!("Editar Póliza #{}", id),
        None => "Nueva Póliza".to_string(),
    };
    let submit_label = if vm.is_edit() { "Actualizar Póliza" } else { "Crear Póliza" };
    // references are fixed once the póliza exists
    let locked = vm.is_edit();
    let form = vm.form;
    let context = vm.context;
    let saving = vm.saving;

    let errors_for = {
        let vm = vm.clone();
        move |field: &'static str| {
            let vm = vm.clone();
            Signal::derive(move || vm.field_error(field))
        }
    };
    let edit = {
        let vm = vm.clone();
        move |field: &'static str, set: fn(&mut VoucherForm, String)| {
            let vm = vm.clone();
            Callback::new(move |v: String| vm.edit(field, |f| set(f, v)))
        }
    };

    let stock_hint = move || {
        let sku = form.with(|f| Sku::from_string(&f.sku).ok())?;
        let item = context.with(|ctx| ctx.item(sku).cloned())?;
        Some(format!("Stock disponible: {}", item.quantity))
    };

    let vm_actions = vm.clone();

    view! {
        <PageFrame page_id="a003_voucher--detail" category=PAGE_CAT_DETAIL>
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
                    <SelectField
                        id="empleado"
                        label="Empleado"
                        value=Signal::derive(move || form.with(|f| f.employee_id.clone()))
                        options=Signal::derive(move || context.with(|ctx| ctx.employee_options()))
                        on_change=edit("empleado", |f, v| f.employee_id = v)
                        error=errors_for("empleado")
                        placeholder="Seleccione un empleado"
                        disabled=locked
                    />
                    <SelectField
                        id="sku"
                        label="Artículo"
                        value=Signal::derive(move || form.with(|f| f.sku.clone()))
                        options=Signal::derive(move || context.with(|ctx| ctx.item_options()))
                        on_change=edit("sku", |f, v| f.sku = v)
                        error=errors_for("sku")
                        placeholder="Seleccione un artículo"
                        disabled=locked
                    />
                    <TextField
                        id="cantidad"
                        label="Cantidad"
                        input_type="number"
                        value=Signal::derive(move || form.with(|f| f.quantity.clone()))
                        on_input=edit("cantidad", |f, v| f.quantity = v)
                        error=errors_for("cantidad")
                    />
                    {move || (if locked { None } else { stock_hint() }).map(|hint| view! {
                        <p class="form__hint">{hint}</p>
                    })}
                    <FormActions
                        list_path=AppRoute::VoucherList.href()
                        submit_label=submit_label.to_string()
                        can_submit=Signal::derive(move || vm_actions.can_submit())
                        saving=saving
                    />
                </form>
            </div>
        </PageFrame>
    }
}
