//! Employee operations over `/empleados`.
//!
//! The backend has no paginated endpoint for employees, so `list_paged`
//! pages the full collection locally.

use crate::shared::api::{ApiResult, Gateway, Operations, Resource, Transport};
use crate::shared::list_utils::{cmp_text, filter_list, sort_list, Searchable, Sortable};
use crate::shared::list_view::ListQuery;
use contracts::domain::a002_employee::aggregate::{Employee, EmployeeDto, EmployeeId};
use contracts::domain::common::EntityKind;
use contracts::shared::envelope::Page;
use std::cmp::Ordering;

/// Free-text filter on name, surname and role
pub const SEARCH_FILTER: &str = "search";

pub struct EmployeeResource;

impl Resource for EmployeeResource {
    type Entity = Employee;
    type Wire = Employee;
    type Draft = EmployeeDto;

    const KIND: EntityKind = EntityKind::Employee;
    const DEFAULT_SORT: &'static str = "idEmpleado";

    const CREATED: &'static str = "Empleado creado exitosamente";
    const UPDATED: &'static str = "Empleado actualizado exitosamente";
    const DELETED: &'static str = "Empleado eliminado exitosamente";
    const THE_ELEMENT: &'static str = "el empleado";

    fn from_wire(wire: Employee) -> Employee {
        wire
    }

    async fn list_paged<T: Transport>(
        gateway: &Gateway<Self, T>,
        query: &ListQuery,
    ) -> ApiResult<Page<Employee>> {
        let all = gateway.list().await?;
        Ok(page_locally(all, query))
    }
}

pub type EmployeeGateway<T> = Gateway<EmployeeResource, T>;

/// filter → sort → slice, the same steps the server does for paged endpoints
pub fn page_locally(all: Vec<Employee>, query: &ListQuery) -> Page<Employee> {
    let mut rows = filter_list(all, query.filter(SEARCH_FILTER).unwrap_or_default());
    sort_list(
        &mut rows,
        &query.sort_field,
        query.sort_direction.is_ascending(),
    );
    Page::slice(rows, query.page, query.page_size.get())
}

impl Sortable for Employee {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "idEmpleado" => self.id.cmp(&other.id),
            "nombre" => cmp_text(&self.first_name, &other.first_name),
            "apellido" => cmp_text(&self.last_name, &other.last_name),
            "puesto" => cmp_text(&self.role, &other.role),
            _ => Ordering::Equal,
        }
    }
}

impl Searchable for Employee {
    fn matches_filter(&self, filter: &str) -> bool {
        self.first_name.to_lowercase().contains(filter)
            || self.last_name.to_lowercase().contains(filter)
            || self.role.to_lowercase().contains(filter)
            || self.full_name().to_lowercase().contains(filter)
    }
}

pub async fn fetch_employees<T: Transport>(transport: &T) -> ApiResult<Vec<Employee>> {
    EmployeeGateway::new(transport.clone()).list().await
}

pub async fn fetch_employees_page<T: Transport>(
    transport: &T,
    query: &ListQuery,
) -> ApiResult<Page<Employee>> {
    EmployeeGateway::new(transport.clone()).list_paged(query).await
}

pub async fn fetch_employee<T: Transport>(transport: &T, id: EmployeeId) -> ApiResult<Employee> {
    EmployeeGateway::new(transport.clone()).get(id).await
}

pub async fn create_employee<T: Transport>(transport: &T, dto: &EmployeeDto) -> ApiResult<Employee> {
    EmployeeGateway::new(transport.clone()).create(dto).await
}

pub async fn update_employee<T: Transport>(
    transport: &T,
    id: EmployeeId,
    dto: &EmployeeDto,
) -> ApiResult<Employee> {
    EmployeeGateway::new(transport.clone()).update(id, dto).await
}

pub async fn delete_employee<T: Transport>(transport: &T, id: EmployeeId) -> ApiResult<()> {
    EmployeeGateway::new(transport.clone()).delete(id).await
}


impl Operations for EmployeeResource {
    async fn fetch_page<T: Transport>(transport: &T, query: &ListQuery) -> ApiResult<Page<Employee>> {
        fetch_employees_page(transport, query).await
    }

    async fn fetch_one<T: Transport>(transport: &T, key: EmployeeId) -> ApiResult<Employee> {
        fetch_employee(transport, key).await
    }

    async fn create<T: Transport>(transport: &T, draft: &EmployeeDto) -> ApiResult<Employee> {
        create_employee(transport, draft).await
    }

    async fn update<T: Transport>(transport: &T, key: EmployeeId, draft: &EmployeeDto) -> ApiResult<Employee> {
        update_employee(transport, key, draft).await
    }

    async fn remove<T: Transport>(transport: &T, key: EmployeeId) -> ApiResult<()> {
        delete_employee(transport, key).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_view::{ListDefaults, PageSize};

    fn employee(id: i64, first: &str, last: &str, role: &str) -> Employee {
        Employee {
            id: EmployeeId(id),
            first_name: first.into(),
            last_name: last.into(),
            role: role.into(),
        }
    }

    fn staff() -> Vec<Employee> {
        vec![
            employee(1, "Ana", "Ruiz", "Almacén"),
            employee(2, "Luis", "Pérez", "Compras"),
            employee(3, "Berta", "Alonso", "Almacén"),
        ]
    }

    fn query(sort: &str) -> ListQuery {
        ListQuery::new(&ListDefaults::new(sort, PageSize::DEFAULT))
    }

    #[test]
    fn test_local_paging_filters_then_sorts() {
        let mut q = query("nombre");
        q.filters.insert(SEARCH_FILTER.into(), "almacén".into());
        let page = page_locally(staff(), &q);
        assert_eq!(page.total_items, 2);
        assert_eq!(page.total_pages, 1);
        let names: Vec<_> = page.content.iter().map(|e| e.first_name.as_str()).collect();
        assert_eq!(names, vec!["Ana", "Berta"]);
    }

    #[test]
    fn test_local_paging_slices() {
        let mut q = query("idEmpleado");
        q.page_size = PageSize::new(5).unwrap();
        let all: Vec<Employee> = (1..=7).map(|i| employee(i, "N", "A", "R")).collect();
        q.page = 1;
        let page = page_locally(all, &q);
        assert_eq!(page.content.len(), 2);
        assert_eq!(page.content[0].id, EmployeeId(6));
        assert_eq!(page.total_pages, 2);
    }

    #[test]
    fn test_local_paging_with_huge_page_from_the_address_bar() {
        use crate::shared::list_view::{parse_query, ListDefaults};
        let q = parse_query(
            "page=18446744073709551615&size=50",
            &ListDefaults::new("idEmpleado", PageSize::DEFAULT),
        );
        let page = page_locally(vec![employee(1, "Ana", "Ruiz", "Almacén")], &q);
        assert!(page.content.is_empty());
        assert_eq!(page.total_items, 1);
    }

    #[test]
    fn test_search_matches_full_name() {
        let e = employee(1, "Ana", "Ruiz", "Almacén");
        assert!(e.matches_filter("ana ruiz"));
        assert!(!e.matches_filter("compras"));
    }
}
