//! Static route table.
//!
//! `AppRoute` is the pure side (paths and parsing, usable in tests);
//! `routes::AppRoutes` mounts the pages on the router.

pub mod routes;

use contracts::domain::a001_inventory::aggregate::Sku;
use contracts::domain::a002_employee::aggregate::EmployeeId;
use contracts::domain::a003_voucher::aggregate::VoucherId;
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

pub use routes::AppRoutes;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppRoute {
    Home,
    VoucherList,
    VoucherNew,
    VoucherEdit(VoucherId),
    EmployeeList,
    EmployeeNew,
    EmployeeEdit(EmployeeId),
    InventoryList,
    InventoryNew,
    InventoryEdit(Sku),
}

impl AppRoute {
    pub fn href(&self) -> String {
        match self {
            AppRoute::Home => "/".to_string(),
            AppRoute::VoucherList => "/polizas".to_string(),
            AppRoute::VoucherNew => "/polizas/nueva".to_string(),
            AppRoute::VoucherEdit(id) => format!("/polizas/editar/{}", id.as_string()),
            AppRoute::EmployeeList => "/empleados".to_string(),
            AppRoute::EmployeeNew => "/empleados/nuevo".to_string(),
            AppRoute::EmployeeEdit(id) => format!("/empleados/editar/{}", id.as_string()),
            AppRoute::InventoryList => "/inventario".to_string(),
            AppRoute::InventoryNew => "/inventario/nuevo".to_string(),
            AppRoute::InventoryEdit(sku) => format!("/inventario/editar/{}", sku.as_string()),
        }
    }

    /// Resolve a location path; `None` for anything the router redirects home
    pub fn parse(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        let route = match segments.as_slice() {
            [] => AppRoute::Home,
            ["polizas"] => AppRoute::VoucherList,
            ["polizas", "nueva"] => AppRoute::VoucherNew,
            ["polizas", "editar", id] => AppRoute::VoucherEdit(VoucherId::from_string(id).ok()?),
            ["empleados"] => AppRoute::EmployeeList,
            ["empleados", "nuevo"] => AppRoute::EmployeeNew,
            ["empleados", "editar", id] => AppRoute::EmployeeEdit(EmployeeId::from_string(id).ok()?),
            ["inventario"] => AppRoute::InventoryList,
            ["inventario", "nuevo"] => AppRoute::InventoryNew,
            ["inventario", "editar", sku] => AppRoute::InventoryEdit(Sku::from_string(sku).ok()?),
            _ => return None,
        };
        Some(route)
    }

    /// Navigation section the route belongs to, for the active header link
    pub fn section(&self) -> Option<AppRoute> {
        match self {
            AppRoute::Home => None,
            AppRoute::VoucherList | AppRoute::VoucherNew | AppRoute::VoucherEdit(_) => Some(AppRoute::VoucherList),
            AppRoute::EmployeeList | AppRoute::EmployeeNew | AppRoute::EmployeeEdit(_) => Some(AppRoute::EmployeeList),
            AppRoute::InventoryList | AppRoute::InventoryNew | AppRoute::InventoryEdit(_) => Some(AppRoute::InventoryList),
        }
    }
}

/// Key from the current route's `param`, `None` when absent or malformed
pub fn route_key<K: AggregateId>(param: &str) -> Option<K> {
    let params = use_params_map();
    let raw = params.with_untracked(|p| p.get(param))?;
    match K::from_string(&raw) {
        Ok(key) => Some(key),
        Err(e) => {
            log::warn!("route parameter {}={:?} rejected: {}", param, raw, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_href_and_parse_agree() {
        let routes = [
            AppRoute::Home,
            AppRoute::VoucherList,
            AppRoute::VoucherNew,
            AppRoute::VoucherEdit(VoucherId(12)),
            AppRoute::EmployeeList,
            AppRoute::EmployeeNew,
            AppRoute::EmployeeEdit(EmployeeId(3)),
            AppRoute::InventoryList,
            AppRoute::InventoryNew,
            AppRoute::InventoryEdit(Sku(501)),
        ];
        for route in routes {
            assert_eq!(AppRoute::parse(&route.href()), Some(route));
        }
    }

    #[test]
    fn test_unknown_paths_fall_through() {
        assert_eq!(AppRoute::parse("/clientes"), None);
        assert_eq!(AppRoute::parse("/inventario/editar/abc"), None);
        assert_eq!(AppRoute::parse("/polizas/nuevo"), None);
        assert_eq!(
            AppRoute::parse("/inventario?page=2&size=10"),
            Some(AppRoute::InventoryList)
        );
    }

    #[test]
    fn test_sections() {
        assert_eq!(AppRoute::VoucherEdit(VoucherId(1)).section(), Some(AppRoute::VoucherList));
        assert_eq!(AppRoute::InventoryNew.section(), Some(AppRoute::InventoryList));
        assert_eq!(AppRoute::Home.section(), None);
    }
}
