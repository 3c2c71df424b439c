mod common;

use common::{messages, seeded, services, FakeBackend};
use contracts::domain::a001_inventory::aggregate::InventoryItem;
use contracts::domain::a003_voucher::aggregate::VoucherId;
use contracts::domain::common::EntityKind;
use frontend::domain::a001_inventory::api::InventoryResource;
use frontend::domain::a002_employee::api::EmployeeResource;
use frontend::domain::a003_voucher::api::{VoucherResource, EMPLOYEE_FILTER};
use frontend::shared::api::{Operations, Resource};
use frontend::shared::list_view::{
    encode_query, AddressBar, ListDefaults, ListViewModel, MemoryAddressBar, PageSize,
};
use frontend::shared::notifications::Severity;
use futures::executor::block_on;
use leptos::prelude::*;
use std::sync::Arc;

fn voucher_list(
    backend: &FakeBackend,
    url: &str,
) -> (
    ListViewModel<VoucherResource, FakeBackend>,
    MemoryAddressBar,
    frontend::shared::notifications::NotificationChannel,
) {
    let (channel, _clock, cache) = services();
    let bar = MemoryAddressBar::new(url);
    let vm = ListViewModel::new(
        backend.clone(),
        Arc::new(bar.clone()),
        channel.clone(),
        cache,
        &ListDefaults::new(VoucherResource::DEFAULT_SORT, PageSize::DEFAULT),
    );
    (vm, bar, channel)
}

fn load<R: Operations>(vm: &ListViewModel<R, FakeBackend>) {
    let ticket = vm.reload().expect("a fresh view model always issues a ticket");
    block_on(vm.fetch(ticket));
}

#[test]
fn mount_normalizes_the_address_bar() {
    let owner = Owner::new();
    owner.set();
    let backend = seeded().with_vouchers(3, 1, 100);

    let (vm, bar, _) = voucher_list(&backend, "?sortDir=desc&page=abc&empleadoId=1");
    assert_eq!(
        bar.search(),
        "page=0&size=10&sortBy=idPoliza&sortDir=desc&empleadoId=1"
    );

    load(&vm);
    assert_eq!(
        backend.requests().last().map(String::as_str),
        Some("GET /polizas/paginated?page=0&size=10&sortBy=idPoliza&sortDir=desc&empleadoId=1")
    );
    let ids: Vec<VoucherId> = vm.state.with_untracked(|s| s.items.iter().map(|v| v.id).collect());
    assert_eq!(ids, vec![VoucherId(3), VoucherId(2), VoucherId(1)]);
}

#[test]
fn transitions_rewrite_the_address_bar_and_fetch_once() {
    let owner = Owner::new();
    owner.set();
    let backend = seeded().with_vouchers(25, 2, 100);
    let (vm, bar, _) = voucher_list(&backend, "");
    load(&vm);

    let ticket = vm.set_page(2).expect("page change fetches");
    assert_eq!(bar.search(), "page=2&size=10&sortBy=idPoliza&sortDir=asc");
    block_on(vm.fetch(ticket));
    assert_eq!(vm.state.with_untracked(|s| s.items.len()), 5);

    let before = backend.request_count();
    let ticket = vm.set_filter(EMPLOYEE_FILTER, "2").expect("filter change fetches");
    assert_eq!(ticket.query.page, 0);
    assert_eq!(bar.search(), "page=0&size=10&sortBy=idPoliza&sortDir=asc&empleadoId=2");
    block_on(vm.fetch(ticket));
    assert_eq!(backend.request_count(), before + 1);

    // setting the same value again is not a change
    assert!(vm.set_filter(EMPLOYEE_FILTER, " 2 ").is_none());

    let ticket = vm.clear_filters().expect("clearing fetches");
    assert!(ticket.query.filters.is_empty());
    assert_eq!(bar.search(), "page=0&size=10&sortBy=idPoliza&sortDir=asc");
}

#[test]
fn stale_result_is_not_applied() {
    let owner = Owner::new();
    owner.set();
    let backend = seeded().with_vouchers(15, 1, 100);
    let (vm, _, _) = voucher_list(&backend, "");

    let first = vm.set_page(1).expect("ticket");
    let second = vm.set_page_size(PageSize::new(5).unwrap()).expect("ticket");

    // the newer request answers first
    block_on(vm.fetch(second.clone()));
    block_on(vm.fetch(first));

    vm.state.with_untracked(|s| {
        assert_eq!(s.query, second.query);
        assert_eq!(s.items.len(), 5);
        assert_eq!(s.total_pages, 3);
        assert!(!s.loading);
    });
}

#[test]
fn delete_with_full_page_refetches_the_same_page() {
    let owner = Owner::new();
    owner.set();
    let backend = seeded().with_vouchers(10, 1, 100);
    let (vm, bar, channel) = voucher_list(&backend, "");
    load(&vm);
    assert_eq!(vm.state.with_untracked(|s| s.items.len()), 10);

    let target = backend.first_voucher_id().unwrap();
    assert!(block_on(vm.delete(target)));

    vm.state.with_untracked(|s| {
        assert_eq!(s.query.page, 0);
        assert_eq!(s.items.len(), 9);
        assert_eq!(s.total_items, 9);
        assert!(s.deleting.is_empty());
    });
    assert_eq!(bar.search(), "page=0&size=10&sortBy=idPoliza&sortDir=asc");
    assert_eq!(messages(&channel, Severity::Success), vec!["Póliza eliminada exitosamente"]);
    // deleting a póliza gives its stock back
    assert_eq!(backend.stock(100), Some(51));
}

#[test]
fn deleting_the_last_row_of_a_page_steps_back() {
    let owner = Owner::new();
    owner.set();
    let backend = seeded().with_vouchers(21, 1, 100);
    let (vm, bar, _) = voucher_list(&backend, "page=2&size=10");
    load(&vm);
    assert_eq!(vm.state.with_untracked(|s| s.items.len()), 1);

    assert!(block_on(vm.delete(VoucherId(21))));

    vm.state.with_untracked(|s| {
        assert_eq!(s.query.page, 1);
        assert_eq!(s.items.len(), 10);
    });
    assert_eq!(bar.search(), "page=1&size=10&sortBy=idPoliza&sortDir=asc");
    assert_eq!(
        backend.requests().last().map(String::as_str),
        Some("GET /polizas/paginated?page=1&size=10&sortBy=idPoliza&sortDir=asc")
    );
}

#[test]
fn failed_delete_keeps_the_query_and_notifies() {
    let owner = Owner::new();
    owner.set();
    let backend = seeded().with_vouchers(3, 1, 100);
    let (vm, bar, channel) = voucher_list(&backend, "page=0&size=5");
    load(&vm);
    let query_before = vm.query();
    let requests_before = backend.request_count();

    assert!(!block_on(vm.delete(VoucherId(99))));

    assert_eq!(vm.query(), query_before);
    assert_eq!(bar.search(), encode_query(&query_before));
    // only the DELETE itself went out
    assert_eq!(backend.request_count(), requests_before + 1);
    assert_eq!(
        messages(&channel, Severity::Error),
        vec!["Error al eliminar la póliza: Error HTTP 404: Póliza no encontrada"]
    );
}

#[test]
fn load_failure_sets_error_and_notifies() {
    let owner = Owner::new();
    owner.set();
    let backend = seeded();
    backend.set_offline(true);
    let (vm, _, channel) = voucher_list(&backend, "");
    load(&vm);

    vm.state.with_untracked(|s| {
        assert_eq!(s.error.as_deref(), Some("Error de red: sin conexión"));
        assert!(!s.loading);
    });
    assert_eq!(
        messages(&channel, Severity::Error),
        vec!["Error al cargar pólizas: Error de red: sin conexión"]
    );

    backend.set_offline(false);
    load(&vm);
    assert!(vm.state.with_untracked(|s| s.error.is_none()));
}

#[test]
fn employees_are_paged_client_side() {
    let owner = Owner::new();
    owner.set();
    let backend = seeded();
    let (channel, _clock, cache) = services();
    let bar = MemoryAddressBar::new("sortBy=apellido&size=5");
    let vm: ListViewModel<EmployeeResource, _> = ListViewModel::new(
        backend.clone(),
        Arc::new(bar),
        channel,
        cache,
        &ListDefaults::new(EmployeeResource::DEFAULT_SORT, PageSize::DEFAULT),
    );
    load(&vm);

    let surnames: Vec<String> =
        vm.state.with_untracked(|s| s.items.iter().map(|e| e.last_name.clone()).collect());
    assert_eq!(surnames, vec!["Alonso", "Pérez", "Ruiz"]);
    assert_eq!(backend.requests(), vec!["GET /empleados"]);

    let ticket = vm.set_filter("search", "compras").unwrap();
    block_on(vm.fetch(ticket));
    assert_eq!(vm.state.with_untracked(|s| s.total_items), 1);
}

#[test]
fn cached_page_is_shown_and_voucher_delete_drops_inventory_pages() {
    let owner = Owner::new();
    owner.set();
    let backend = seeded().with_vouchers(2, 1, 100);
    let (channel, _clock, cache) = services();

    let inventory: ListViewModel<InventoryResource, _> = ListViewModel::new(
        backend.clone(),
        Arc::new(MemoryAddressBar::new("")),
        channel.clone(),
        cache,
        &ListDefaults::new(InventoryResource::DEFAULT_SORT, PageSize::DEFAULT),
    );
    load(&inventory);
    let key = encode_query(&inventory.query());
    assert!(cache
        .get_page::<InventoryItem>(EntityKind::Inventory, &key)
        .is_some());

    // while offline the cached page stays on screen
    backend.set_offline(true);
    load(&inventory);
    inventory.state.with_untracked(|s| {
        assert_eq!(s.items.len(), 3);
        assert!(s.error.is_some());
    });
    backend.set_offline(false);

    let vouchers: ListViewModel<VoucherResource, _> = ListViewModel::new(
        backend.clone(),
        Arc::new(MemoryAddressBar::new("")),
        channel,
        cache,
        &ListDefaults::new(VoucherResource::DEFAULT_SORT, PageSize::DEFAULT),
    );
    load(&vouchers);
    assert!(block_on(vouchers.delete(VoucherId(1))));

    assert!(cache
        .get_page::<InventoryItem>(EntityKind::Inventory, &key)
        .is_none());
}

#[test]
fn location_changes_from_outside_are_followed() {
    let owner = Owner::new();
    owner.set();
    let backend = seeded().with_vouchers(25, 1, 100);
    let (vm, bar, _) = voucher_list(&backend, "");
    load(&vm);
    block_on(vm.fetch(vm.set_page(2).expect("page change fetches")));

    // back to the entry before the page change
    let ticket = vm
        .follow_address("page=0&size=10&sortBy=idPoliza&sortDir=asc")
        .expect("older query differs");
    assert_eq!(ticket.query.page, 0);
    block_on(vm.fetch(ticket));
    assert_eq!(vm.state.with_untracked(|s| s.items.len()), 10);

    // header link to the bare list path
    let _ = vm.set_filter(EMPLOYEE_FILTER, "1");
    let ticket = vm.follow_address("").expect("filter dropped");
    assert!(ticket.query.filters.is_empty());
    assert_eq!(bar.search(), "page=0&size=10&sortBy=idPoliza&sortDir=asc");

    // the router echoing the list's own write is not a change
    let before = vm.state.with_untracked(|s| s.latest_version());
    assert!(vm.follow_address(&bar.search()).is_none());
    assert_eq!(vm.state.with_untracked(|s| s.latest_version()), before);
}

#[test]
fn voucher_operations_use_the_polizas_endpoints() {
    let backend = seeded().with_vouchers(2, 1, 100);
    let query = frontend::shared::list_view::parse_query(
        "size=5",
        &ListDefaults::new(VoucherResource::DEFAULT_SORT, PageSize::DEFAULT),
    );

    let page = block_on(VoucherResource::fetch_page(&backend, &query)).unwrap();
    assert_eq!(page.content.len(), 2);
    block_on(VoucherResource::remove(&backend, VoucherId(1))).unwrap();
    let kept = block_on(VoucherResource::fetch_one(&backend, VoucherId(2))).unwrap();
    assert_eq!(kept.id, VoucherId(2));

    assert_eq!(
        backend.requests(),
        vec![
            "GET /polizas/paginated?page=0&size=5&sortBy=idPoliza&sortDir=asc",
            "DELETE /polizas/1",
            "GET /polizas/2",
        ]
    );
}
