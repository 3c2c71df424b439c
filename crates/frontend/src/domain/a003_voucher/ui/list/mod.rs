use crate::app::use_services;
use crate::domain::a002_employee::api::fetch_employees;
use crate::domain::a003_voucher::api::{VoucherResource, EMPLOYEE_FILTER, SKU_FILTER};
use crate::routes::AppRoute;
use crate::shared::api::Resource;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::icons::icon;
use crate::shared::list_utils::{SearchInput, SortHeader};
use crate::shared::list_view::{RouterAddressBar, ListDefaults, ListViewModel, PageSize};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a002_employee::aggregate::Employee;
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;
use leptos_router::components::A;
use std::sync::Arc;
use thaw::*;

#[component]
#[allow(non_snake_case)]
pub fn VoucherList() -> impl IntoView {
    let services = use_services();
    let employees = RwSignal::new(Vec::<Employee>::new());
    let vm: ListViewModel<VoucherResource, _> = ListViewModel::new(
        services.transport.clone(),
        Arc::new(RouterAddressBar::new()),
        services.notifier.clone(),
        services.cache,
        &ListDefaults::sorted_by(VoucherResource::DEFAULT_SORT),
    );
    let state = vm.state;

    vm.dispatch(vm.reload());
    vm.track_location();

    // employee filter options
    {
        let transport = services.transport;
        let notifier = services.notifier;
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_employees(&transport).await {
                Ok(list) => employees.set(list),
                Err(e) => {
                    notifier.error(format!("Error al cargar empleados: {}", e));
                }
            }
        });
    }

    let on_sort = Callback::new({
        let vm = vm.clone();
        move |field: &'static str| vm.dispatch(vm.set_sort(field))
    });
    let on_employee = {
        let vm = vm.clone();
        move |ev: leptos::ev::Event| {
            vm.dispatch(vm.set_filter(EMPLOYEE_FILTER, &event_target_value(&ev)))
        }
    };
    let on_sku = Callback::new({
        let vm = vm.clone();
        move |value: String| vm.dispatch(vm.set_filter(SKU_FILTER, &value))
    });
    let on_clear = {
        let vm = vm.clone();
        move |_| vm.dispatch(vm.clear_filters())
    };
    let on_page_change = Callback::new({
        let vm = vm.clone();
        move |page: usize| vm.dispatch(vm.set_page(page))
    });
    let on_page_size_change = Callback::new({
        let vm = vm.clone();
        move |size: PageSize| vm.dispatch(vm.set_page_size(size))
    });
    let refresh = {
        let vm = vm.clone();
        move |_| vm.dispatch(vm.reload())
    };

    let sort_field = Signal::derive(move || state.with(|s| s.query.sort_field.clone()));
    let ascending = Signal::derive(move || state.with(|s| s.query.sort_direction.is_ascending()));
    let employee_filter =
        move || state.with(|s| s.query.filter(EMPLOYEE_FILTER).unwrap_or_default().to_string());

    view! {
        <PageFrame page_id="a003_voucher--list" category=PAGE_CAT_LIST>
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"Pólizas"}</h1>
                </div>
                <div class="header__actions">
                    <A href=AppRoute::VoucherNew.href() attr:class="button button--primary">
                        {icon("plus")}
                        {"Nueva Póliza"}
                    </A>
                    <button class="button button--secondary" on:click=refresh>
                        {icon("refresh")}
                        {"Actualizar"}
                    </button>
                </div>
            </div>

            <div class="filter-panel">
                <select
                    class="filter-panel__select"
                    prop:value=employee_filter
                    on:change=on_employee
                >
                    <option value="">{"Todos los empleados"}</option>
                    {move || {
                        let current = employee_filter();
                        employees
                            .get()
                            .into_iter()
                            .map(|e| {
                                let value = e.id.to_string();
                                let selected = value == current;
                                view! { <option value=value selected=selected>{e.full_name()}</option> }
                            })
                            .collect_view()
                    }}
                </select>
                <SearchInput
                    value=Signal::derive(move || {
                        state.with(|s| s.query.filter(SKU_FILTER).unwrap_or_default().to_string())
                    })
                    on_change=on_sku
                    placeholder="Filtrar por SKU..."
                />
                <button
                    class="button button--ghost"
                    disabled=move || !state.with(|s| s.query.has_filters())
                    on:click=on_clear
                >
                    {icon("x")}
                    {"Limpiar filtros"}
                </button>
            </div>

            {move || state.with(|s| s.error.clone()).map(|e| view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <SortHeader label="ID" field="idPoliza" sort_field=sort_field ascending=ascending on_sort=on_sort />
                            <SortHeader label="Empleado" field="empleadoGenero" sort_field=sort_field ascending=ascending on_sort=on_sort />
                            <SortHeader label="Artículo" field="sku" sort_field=sort_field ascending=ascending on_sort=on_sort />
                            <SortHeader label="Cantidad" field="cantidad" sort_field=sort_field ascending=ascending on_sort=on_sort />
                            <th class="table__header-cell">{"Acciones"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {
                            let vm = vm.clone();
                            move || {
                                let (items, loading) = state.with(|s| (s.items.clone(), s.loading));
                                if items.is_empty() {
                                    let text = if loading { "Cargando..." } else { "No hay pólizas registradas" };
                                    return view! {
                                        <tr class="table__row">
                                            <td class="table__cell table__cell--empty" colspan="5">{text}</td>
                                        </tr>
                                    }
                                    .into_any();
                                }
                                items
                                    .into_iter()
                                    .map(|voucher| {
                                        let id = voucher.id();
                                        let caption = format!("la {}", voucher.description().to_lowercase());
                                        let busy = vm.is_deleting(&id);
                                        let vm = vm.clone();
                                        view! {
                                            <tr class="table__row" class:table__row--busy=busy>
                                                <td class="table__cell">{id.to_string()}</td>
                                                <td class="table__cell">{voucher.employee_name.clone()}</td>
                                                <td class="table__cell">{voucher.item_label()}</td>
                                                <td class="table__cell">{voucher.quantity}</td>
                                                <td class="table__cell table__cell--actions">
                                                    <A href=AppRoute::VoucherEdit(id).href() attr:class="button button--small">
                                                        {icon("edit")}
                                                        {"Editar"}
                                                    </A>
                                                    <Button
                                                        appearance=ButtonAppearance::Subtle
                                                        disabled=busy
                                                        loading=busy
                                                        on_click=move |_| vm.confirm_delete(id, caption.clone())
                                                    >
                                                        {icon("delete")}
                                                        {"Eliminar"}
                                                    </Button>
                                                </td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()
                                    .into_any()
                            }
                        }
                    </tbody>
                </table>
            </div>

            <PaginationControls
                current_page=Signal::derive(move || state.with(|s| s.query.page))
                total_pages=Signal::derive(move || state.with(|s| s.total_pages as usize))
                total_count=Signal::derive(move || state.with(|s| s.total_items))
                page_size=Signal::derive(move || state.with(|s| s.query.page_size))
                on_page_change=on_page_change
                on_page_size_change=on_page_size_change
            />
        </PageFrame>
    }
}
