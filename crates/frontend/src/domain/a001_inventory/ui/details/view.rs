use super::model::InventoryForm;
use crate::app::use_services;
use crate::routes::AppRoute;
use crate::shared::form::{FormActions, FormViewModel, ModeOf, TextField};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use thaw::*;

#[component]
pub fn InventoryDetails(mode: ModeOf<InventoryForm>) -> impl IntoView {
    let services = use_services();
    let vm = FormViewModel::<InventoryForm, _>::new(
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
                    navigate(&AppRoute::InventoryList.href(), Default::default());
                }
            });
        }
    };

    let title = if vm.is_edit() { "Editar Artículo" } else { "Nuevo Artículo" };
    let submit_label = if vm.is_edit() { "Actualizar Artículo" } else { "Crear Artículo" };

    let vm_sku = vm.clone();
    let vm_name = vm.clone();
    let vm_qty = vm.clone();
    let vm_actions = vm.clone();

    view! {
        <PageFrame page_id="a001_inventory--detail" category=PAGE_CAT_DETAIL>
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
                    <TextField
                        id="sku"
                        label="SKU"
                        input_type="number"
                        placeholder="Ej. 501"
                        value=Signal::derive({
                            let vm = vm_sku.clone();
                            move || vm.form.get().sku
                        })
                        on_input=Callback::new({
                            let vm = vm_sku.clone();
                            move |v: String| vm.edit("sku", |f| f.sku = v)
                        })
                        error=Signal::derive({
                            let vm = vm_sku.clone();
                            move || vm.field_error("sku")
                        })
                        disabled=vm_sku.is_edit()
                    />
                    <TextField
                        id="nombre"
                        label="Nombre"
                        value=Signal::derive({
                            let vm = vm_name.clone();
                            move || vm.form.get().name
                        })
                        on_input=Callback::new({
                            let vm = vm_name.clone();
                            move |v: String| vm.edit("nombre", |f| f.name = v)
                        })
                        error=Signal::derive({
                            let vm = vm_name.clone();
                            move || vm.field_error("nombre")
                        })
                    />
                    <TextField
                        id="cantidad"
                        label="Cantidad"
                        input_type="number"
                        value=Signal::derive({
                            let vm = vm_qty.clone();
                            move || vm.form.get().quantity
                        })
                        on_input=Callback::new({
                            let vm = vm_qty.clone();
                            move |v: String| vm.edit("cantidad", |f| f.quantity = v)
                        })
                        error=Signal::derive({
                            let vm = vm_qty.clone();
                            move || vm.field_error("cantidad")
                        })
                    />
                    <FormActions
                        list_path=AppRoute::InventoryList.href()
                        submit_label=submit_label.to_string()
                        can_submit=Signal::derive({
                            let vm = vm_actions.clone();
                            move || vm.can_submit()
                        })
                        saving=vm_actions.saving
                    />
                </form>
            </div>
        </PageFrame>
    }
}
