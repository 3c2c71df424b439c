use crate::app::use_services;
use crate::domain::a001_inventory::api::{InventoryResource, SEARCH_FILTER};
use crate::routes::AppRoute;
use crate::shared::api::Resource;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::stock_badge::StockBadge;
use crate::shared::icons::icon;
use crate::shared::list_utils::{SearchInput, SortHeader};
use crate::shared::list_view::{RouterAddressBar, ListDefaults, ListViewModel, PageSize};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;
use leptos_router::components::A;
use std::sync::Arc;
use thaw::*;

#[component]
#[allow(non_snake_case)]
pub fn InventoryList() -> impl IntoView {
    let services = use_services();
    let vm: ListViewModel<InventoryResource, _> = ListViewModel::new(
        services.transport,
        Arc::new(RouterAddressBar::new()),
        services.notifier,
        services.cache,
        &ListDefaults::sorted_by(InventoryResource::DEFAULT_SORT),
    );
    let state = vm.state;

    vm.dispatch(vm.reload());
    vm.track_location();

    let on_sort = Callback::new({
        let vm = vm.clone();
        move |field: &'static str| vm.dispatch(vm.set_sort(field))
    });
    let on_search = Callback::new({
        let vm = vm.clone();
        move |value: String| vm.dispatch(vm.set_filter(SEARCH_FILTER, &value))
    });
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

    view! {
        <PageFrame page_id="a001_inventory--list" category=PAGE_CAT_LIST>
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"Inventario"}</h1>
                </div>
                <div class="header__actions">
                    <A href=AppRoute::InventoryNew.href() attr:class="button button--primary">
                        {icon("plus")}
                        {"Nuevo Artículo"}
                    </A>
                    <button class="button button--secondary" on:click=refresh>
                        {icon("refresh")}
                        {"Actualizar"}
                    </button>
                </div>
            </div>

            <div class="filter-panel">
                <SearchInput
                    value=Signal::derive(move || {
                        state.with(|s| s.query.filter(SEARCH_FILTER).unwrap_or_default().to_string())
                    })
                    on_change=on_search
                    placeholder="Buscar por nombre o SKU..."
                />
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
                            <SortHeader label="SKU" field="sku" sort_field=sort_field ascending=ascending on_sort=on_sort />
                            <SortHeader label="Nombre" field="nombre" sort_field=sort_field ascending=ascending on_sort=on_sort />
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
                                    let text = if loading { "Cargando..." } else { "No hay artículos registrados" };
                                    return view! {
                                        <tr class="table__row">
                                            <td class="table__cell table__cell--empty" colspan="4">{text}</td>
                                        </tr>
                                    }
                                    .into_any();
                                }
                                items
                                    .into_iter()
                                    .map(|item| {
                                        let sku = item.id();
                                        let caption = format!("el artículo {}", item.description());
                                        let busy = vm.is_deleting(&sku);
                                        let vm = vm.clone();
                                        view! {
                                            <tr class="table__row" class:table__row--busy=busy>
                                                <td class="table__cell">{sku.to_string()}</td>
                                                <td class="table__cell">{item.name.clone()}</td>
                                                <td class="table__cell">
                                                    <StockBadge quantity=item.quantity level=item.stock_level() />
                                                </td>
                                                <td class="table__cell table__cell--actions">
                                                    <A href=AppRoute::InventoryEdit(sku).href() attr:class="button button--small">
                                                        {icon("edit")}
                                                        {"Editar"}
                                                    </A>
                                                    <Button
                                                        appearance=ButtonAppearance::Subtle
                                                        disabled=busy
                                                        loading=busy
                                                        on_click=move |_| vm.confirm_delete(sku, caption.clone())
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
