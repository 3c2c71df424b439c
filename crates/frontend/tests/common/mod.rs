//! In-memory backend and helpers shared by the integration tests.

#![allow(dead_code)]

use contracts::domain::a001_inventory::aggregate::{InventoryItem, Sku};
use contracts::domain::a002_employee::aggregate::{Employee, EmployeeDto, EmployeeId};
use contracts::domain::a003_voucher::aggregate::{
    VoucherDetails, VoucherDto, VoucherEmployee, VoucherHeader, VoucherId, VoucherItem,
};
use contracts::shared::envelope::{ApiResponse, MessageId, MessageResponse, Page};
use frontend::shared::api::{ApiError, ApiResult, HttpRequest, HttpResponse, Method, Transport};
use frontend::shared::cache::QueryCache;
use frontend::shared::list_utils::{filter_list, sort_list};
use frontend::shared::list_view::{parse_query, ListDefaults, ListQuery, PageSize};
use frontend::shared::notifications::{ManualScheduler, NotificationChannel, Severity};
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct Db {
    inventory: BTreeMap<i64, InventoryItem>,
    employees: BTreeMap<i64, Employee>,
    vouchers: BTreeMap<i64, VoucherDto>,
    next_employee: i64,
    next_voucher: i64,
    log: Vec<String>,
    offline: bool,
}

/// Backend double answering with the same envelopes as the REST service
#[derive(Clone, Default)]
pub struct FakeBackend {
    db: Arc<Mutex<Db>>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_item(self, sku: i64, name: &str, quantity: i32) -> Self {
        self.db
            .lock()
            .unwrap()
            .inventory
            .insert(sku, InventoryItem::new(sku, name, quantity));
        self
    }

    pub fn with_employee(self, first: &str, last: &str, role: &str) -> Self {
        {
            let mut db = self.db.lock().unwrap();
            db.next_employee += 1;
            let id = db.next_employee;
            db.employees.insert(
                id,
                Employee {
                    id: EmployeeId(id),
                    first_name: first.into(),
                    last_name: last.into(),
                    role: role.into(),
                },
            );
        }
        self
    }

    /// `count` pólizas of one unit each, without touching stock
    pub fn with_vouchers(self, count: usize, employee: i64, sku: i64) -> Self {
        {
            let mut db = self.db.lock().unwrap();
            for _ in 0..count {
                db.next_voucher += 1;
                let id = db.next_voucher;
                db.vouchers.insert(
                    id,
                    VoucherDto {
                        id: Some(VoucherId(id)),
                        employee_id: EmployeeId(employee),
                        sku: Sku(sku),
                        quantity: 1,
                    },
                );
            }
        }
        self
    }

    pub fn set_offline(&self, offline: bool) {
        self.db.lock().unwrap().offline = offline;
    }

    /// Every request seen so far as "METHOD path?query"
    pub fn requests(&self) -> Vec<String> {
        self.db.lock().unwrap().log.clone()
    }

    pub fn request_count(&self) -> usize {
        self.db.lock().unwrap().log.len()
    }

    pub fn stock(&self, sku: i64) -> Option<i32> {
        self.db.lock().unwrap().inventory.get(&sku).map(|i| i.quantity)
    }

    pub fn voucher_count(&self) -> usize {
        self.db.lock().unwrap().vouchers.len()
    }

    pub fn first_voucher_id(&self) -> Option<VoucherId> {
        self.db.lock().unwrap().vouchers.keys().next().map(|id| VoucherId(*id))
    }
}

impl Transport for FakeBackend {
    async fn send(&self, request: &HttpRequest) -> ApiResult<HttpResponse> {
        let mut db = self.db.lock().unwrap();
        let line = match &request.query {
            Some(q) => format!("{} {}?{}", request.method, request.path, q),
            None => format!("{} {}", request.method, request.path),
        };
        db.log.push(line);
        if db.offline {
            return Err(ApiError::Network("sin conexión".into()));
        }
        Ok(db.route(request))
    }
}

fn ok<T: Serialize>(data: T) -> HttpResponse {
    HttpResponse {
        status: 200,
        body: serde_json::to_string(&ApiResponse::success(data)).unwrap(),
    }
}

fn fail(status: u16, message: &str) -> HttpResponse {
    HttpResponse {
        status,
        body: serde_json::to_string(&ApiResponse::failure(message)).unwrap(),
    }
}

fn message(id: &str) -> HttpResponse {
    ok(MessageResponse {
        mensaje: MessageId { id: id.into() },
    })
}

fn parse_body<T: serde::de::DeserializeOwned>(request: &HttpRequest) -> Option<T> {
    serde_json::from_str(request.body.as_deref()?).ok()
}

fn paged_query(request: &HttpRequest, default_sort: &str) -> ListQuery {
    parse_query(
        request.query.as_deref().unwrap_or_default(),
        &ListDefaults::new(default_sort, PageSize::DEFAULT),
    )
}

impl Db {
    fn route(&mut self, request: &HttpRequest) -> HttpResponse {
        let segments: Vec<&str> = request.path.split('/').filter(|s| !s.is_empty()).collect();
        match (request.method, segments.as_slice()) {
            (Method::Get, ["inventario"]) => ok(self.inventory.values().cloned().collect::<Vec<_>>()),
            (Method::Get, ["inventario", "paginated"]) => {
                let query = paged_query(request, "sku");
                let all: Vec<InventoryItem> = self.inventory.values().cloned().collect();
                let mut rows = filter_list(all, query.filter("search").unwrap_or_default());
                sort_list(&mut rows, &query.sort_field, query.sort_direction.is_ascending());
                ok(Page::slice(rows, query.page, query.page_size.get()))
            }
            (Method::Get, ["inventario", sku]) => match self.item(sku) {
                Some(item) => ok(item.clone()),
                None => fail(404, "Artículo no encontrado"),
            },
            (Method::Post, ["inventario"]) => {
                let Some(item) = parse_body::<InventoryItem>(request) else {
                    return fail(400, "Cuerpo inválido");
                };
                if self.inventory.contains_key(&item.sku.0) {
                    return ok_failure("El SKU ya existe");
                }
                self.inventory.insert(item.sku.0, item.clone());
                ok(item)
            }
            (Method::Put, ["inventario", sku]) => {
                let Some(item) = parse_body::<InventoryItem>(request) else {
                    return fail(400, "Cuerpo inválido");
                };
                let Some(key) = sku.parse::<i64>().ok().filter(|k| self.inventory.contains_key(k)) else {
                    return fail(404, "Artículo no encontrado");
                };
                self.inventory.insert(key, item.clone());
                ok(item)
            }
            (Method::Delete, ["inventario", sku]) => {
                match sku.parse::<i64>().ok().and_then(|k| self.inventory.remove(&k)) {
                    Some(_) => message("ARTICULO_ELIMINADO"),
                    None => fail(404, "Artículo no encontrado"),
                }
            }

            (Method::Get, ["empleados"]) => ok(self.employees.values().cloned().collect::<Vec<_>>()),
            (Method::Get, ["empleados", id]) => {
                match id.parse::<i64>().ok().and_then(|k| self.employees.get(&k)) {
                    Some(e) => ok(e.clone()),
                    None => fail(404, "Empleado no encontrado"),
                }
            }
            (Method::Post, ["empleados"]) => {
                let Some(dto) = parse_body::<EmployeeDto>(request) else {
                    return fail(400, "Cuerpo inválido");
                };
                self.next_employee += 1;
                let employee = Employee {
                    id: EmployeeId(self.next_employee),
                    first_name: dto.first_name,
                    last_name: dto.last_name,
                    role: dto.role,
                };
                self.employees.insert(self.next_employee, employee.clone());
                ok(employee)
            }
            (Method::Put, ["empleados", id]) => {
                let (Some(dto), Ok(key)) = (parse_body::<EmployeeDto>(request), id.parse::<i64>()) else {
                    return fail(400, "Cuerpo inválido");
                };
                let employee = Employee {
                    id: EmployeeId(key),
                    first_name: dto.first_name,
                    last_name: dto.last_name,
                    role: dto.role,
                };
                self.employees.insert(key, employee.clone());
                ok(employee)
            }
            (Method::Delete, ["empleados", id]) => {
                match id.parse::<i64>().ok().and_then(|k| self.employees.remove(&k)) {
                    Some(_) => message("EMPLEADO_ELIMINADO"),
                    None => fail(404, "Empleado no encontrado"),
                }
            }

            (Method::Get, ["polizas"]) => {
                let all: Vec<VoucherDetails> = self.vouchers.values().filter_map(|v| self.details(v)).collect();
                ok(all)
            }
            (Method::Get, ["polizas", "paginated"]) => {
                let query = paged_query(request, "idPoliza");
                let mut rows: Vec<VoucherDto> = self
                    .vouchers
                    .values()
                    .filter(|v| match query.filter("empleadoId") {
                        Some(id) => v.employee_id.0.to_string() == id,
                        None => true,
                    })
                    .filter(|v| match query.filter("sku") {
                        Some(sku) => v.sku.0.to_string() == sku,
                        None => true,
                    })
                    .cloned()
                    .collect();
                rows.sort_by_key(|v| match query.sort_field.as_str() {
                    "cantidad" => i64::from(v.quantity),
                    "sku" => v.sku.0,
                    "empleadoGenero" => v.employee_id.0,
                    _ => v.id.map(|id| id.0).unwrap_or_default(),
                });
                if !query.sort_direction.is_ascending() {
                    rows.reverse();
                }
                let details: Vec<VoucherDetails> = rows.iter().filter_map(|v| self.details(v)).collect();
                ok(Page::slice(details, query.page, query.page_size.get()))
            }
            (Method::Get, ["polizas", id]) => {
                match id
                    .parse::<i64>()
                    .ok()
                    .and_then(|k| self.vouchers.get(&k))
                    .and_then(|v| self.details(v))
                {
                    Some(d) => ok(d),
                    None => fail(404, "Póliza no encontrada"),
                }
            }
            (Method::Post, ["polizas"]) => {
                let Some(dto) = parse_body::<VoucherDto>(request) else {
                    return fail(400, "Cuerpo inválido");
                };
                if !self.employees.contains_key(&dto.employee_id.0) {
                    return ok_failure("Empleado no encontrado");
                }
                let Some(item) = self.inventory.get_mut(&dto.sku.0) else {
                    return ok_failure("Artículo no encontrado");
                };
                if dto.quantity > item.quantity {
                    return ok_failure("Stock insuficiente");
                }
                item.quantity -= dto.quantity;
                self.next_voucher += 1;
                let stored = VoucherDto {
                    id: Some(VoucherId(self.next_voucher)),
                    ..dto
                };
                self.vouchers.insert(self.next_voucher, stored.clone());
                match self.details(&stored) {
                    Some(d) => ok(d),
                    None => fail(500, "Error al generar la póliza"),
                }
            }
            (Method::Put, ["polizas", id]) => {
                let (Some(dto), Ok(key)) = (parse_body::<VoucherDto>(request), id.parse::<i64>()) else {
                    return fail(400, "Cuerpo inválido");
                };
                match self.vouchers.get_mut(&key) {
                    Some(existing) => {
                        existing.quantity = dto.quantity;
                        message("POLIZA_ACTUALIZADA")
                    }
                    None => fail(404, "Póliza no encontrada"),
                }
            }
            (Method::Delete, ["polizas", id]) => {
                match id.parse::<i64>().ok().and_then(|k| self.vouchers.remove(&k)) {
                    Some(v) => {
                        if let Some(item) = self.inventory.get_mut(&v.sku.0) {
                            item.quantity += v.quantity;
                        }
                        message("POLIZA_ELIMINADA")
                    }
                    None => fail(404, "Póliza no encontrada"),
                }
            }

            _ => fail(404, "Ruta no encontrada"),
        }
    }

    fn item(&self, sku: &str) -> Option<&InventoryItem> {
        self.inventory.get(&sku.parse::<i64>().ok()?)
    }

    fn details(&self, v: &VoucherDto) -> Option<VoucherDetails> {
        let employee = self.employees.get(&v.employee_id.0)?;
        let item = self.inventory.get(&v.sku.0)?;
        Some(VoucherDetails {
            poliza: VoucherHeader {
                id: v.id?,
                quantity: v.quantity,
            },
            empleado: VoucherEmployee {
                id: Some(employee.id),
                first_name: employee.first_name.clone(),
                last_name: employee.last_name.clone(),
            },
            detalle_articulo: VoucherItem {
                sku: item.sku,
                name: item.name.clone(),
            },
        })
    }
}

/// Business rejection: HTTP 200 with a FAILURE envelope
fn ok_failure(message: &str) -> HttpResponse {
    fail(200, message)
}

/// Notification channel on a manual clock, plus a fresh cache
pub fn services() -> (NotificationChannel, ManualScheduler, QueryCache) {
    let clock = ManualScheduler::new();
    let channel = NotificationChannel::new(Arc::new(clock.clone()), 3000);
    (channel, clock, QueryCache::new())
}

/// Messages currently shown with the given severity
pub fn messages(channel: &NotificationChannel, severity: Severity) -> Vec<String> {
    channel
        .active()
        .into_iter()
        .filter(|n| n.severity == severity)
        .map(|n| n.message)
        .collect()
}

/// Three employees, three items, no pólizas
pub fn seeded() -> FakeBackend {
    FakeBackend::new()
        .with_employee("Ana", "Ruiz", "Almacén")
        .with_employee("Luis", "Pérez", "Compras")
        .with_employee("Berta", "Alonso", "Mantenimiento")
        .with_item(100, "Tornillo", 50)
        .with_item(200, "Tuerca", 5)
        .with_item(300, "Arandela", 0)
}
