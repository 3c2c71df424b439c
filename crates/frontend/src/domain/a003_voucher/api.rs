//! Póliza operations over `/polizas`.
//!
//! Reads answer with the joined `VoucherDetails` shape, flattened into
//! `Voucher`. Update answers with a message only, so the gateway re-reads
//! the record afterwards.

use crate::shared::api::{ApiResult, Gateway, Operations, Resource, Transport};
use crate::shared::list_view::ListQuery;
use contracts::domain::a003_voucher::aggregate::{Voucher, VoucherDetails, VoucherDto, VoucherId};
use contracts::domain::common::EntityKind;
use contracts::shared::envelope::Page;

/// Exact match on the employee who generated the póliza
pub const EMPLOYEE_FILTER: &str = "empleadoId";
/// Exact match on the item SKU
pub const SKU_FILTER: &str = "sku";

pub struct VoucherResource;

impl Resource for VoucherResource {
    type Entity = Voucher;
    type Wire = VoucherDetails;
    type Draft = VoucherDto;

    const KIND: EntityKind = EntityKind::Voucher;
    const DEFAULT_SORT: &'static str = "idPoliza";
    const UPDATE_RETURNS_ENTITY: bool = false;

    const CREATED: &'static str = "Póliza creada exitosamente";
    const UPDATED: &'static str = "Póliza actualizada exitosamente";
    const DELETED: &'static str = "Póliza eliminada exitosamente";
    const THE_ELEMENT: &'static str = "la póliza";

    fn from_wire(wire: VoucherDetails) -> Voucher {
        Voucher::from(wire)
    }
}

pub type VoucherGateway<T> = Gateway<VoucherResource, T>;

pub async fn fetch_vouchers_page<T: Transport>(
    transport: &T,
    query: &ListQuery,
) -> ApiResult<Page<Voucher>> {
    VoucherGateway::new(transport.clone()).list_paged(query).await
}

pub async fn fetch_voucher<T: Transport>(transport: &T, id: VoucherId) -> ApiResult<Voucher> {
    VoucherGateway::new(transport.clone()).get(id).await
}

pub async fn create_voucher<T: Transport>(transport: &T, dto: &VoucherDto) -> ApiResult<Voucher> {
    VoucherGateway::new(transport.clone()).create(dto).await
}

pub async fn update_voucher<T: Transport>(
    transport: &T,
    id: VoucherId,
    dto: &VoucherDto,
) -> ApiResult<Voucher> {
    VoucherGateway::new(transport.clone()).update(id, dto).await
}

pub async fn delete_voucher<T: Transport>(transport: &T, id: VoucherId) -> ApiResult<()> {
    VoucherGateway::new(transport.clone()).delete(id).await
}

impl Operations for VoucherResource {
    async fn fetch_page<T: Transport>(transport: &T, query: &ListQuery) -> ApiResult<Page<Voucher>> {
        fetch_vouchers_page(transport, query).await
    }

    async fn fetch_one<T: Transport>(transport: &T, key: VoucherId) -> ApiResult<Voucher> {
        fetch_voucher(transport, key).await
    }

    async fn create<T: Transport>(transport: &T, draft: &VoucherDto) -> ApiResult<Voucher> {
        create_voucher(transport, draft).await
    }

    async fn update<T: Transport>(transport: &T, key: VoucherId, draft: &VoucherDto) -> ApiResult<Voucher> {
        update_voucher(transport, key, draft).await
    }

    async fn remove<T: Transport>(transport: &T, key: VoucherId) -> ApiResult<()> {
        delete_voucher(transport, key).await
    }
}
