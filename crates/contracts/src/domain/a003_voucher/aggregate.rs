use serde::{Deserialize, Serialize};

use crate::domain::a001_inventory::aggregate::Sku;
use crate::domain::a002_employee::aggregate::EmployeeId;
use crate::domain::common::AggregateRoot;

crate::integer_id!(
    /// Server-assigned póliza identifier
    VoucherId
);

// ============================================================================
// Wire shapes
// ============================================================================

/// Request body for creating/updating a póliza
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoucherDto {
    #[serde(rename = "idPoliza", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<VoucherId>,

    #[serde(rename = "empleadoGenero")]
    pub employee_id: EmployeeId,

    pub sku: Sku,

    #[serde(rename = "cantidad")]
    pub quantity: i32,
}

/// Response body: the póliza joined with its employee and item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoucherDetails {
    pub poliza: VoucherHeader,
    pub empleado: VoucherEmployee,
    #[serde(rename = "detalleArticulo")]
    pub detalle_articulo: VoucherItem,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoucherHeader {
    #[serde(rename = "idPoliza")]
    pub id: VoucherId,
    #[serde(rename = "cantidad")]
    pub quantity: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoucherEmployee {
    /// Not every backend build sends the id; the form falls back to matching by name
    #[serde(rename = "idEmpleado", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EmployeeId>,
    #[serde(rename = "nombre")]
    pub first_name: String,
    #[serde(rename = "apellido")]
    pub last_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoucherItem {
    pub sku: Sku,
    #[serde(rename = "nombre")]
    pub name: String,
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Flattened póliza used by the pages
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Voucher {
    pub id: VoucherId,
    pub quantity: i32,
    pub employee_id: Option<EmployeeId>,
    pub employee_name: String,
    pub sku: Sku,
    pub item_name: String,
}

impl From<VoucherDetails> for Voucher {
    fn from(d: VoucherDetails) -> Self {
        Self {
            id: d.poliza.id,
            quantity: d.poliza.quantity,
            employee_id: d.empleado.id,
            employee_name: format!("{} {}", d.empleado.first_name, d.empleado.last_name),
            sku: d.detalle_articulo.sku,
            item_name: d.detalle_articulo.name,
        }
    }
}

impl Voucher {
    pub fn item_label(&self) -> String {
        format!("{} (SKU: {})", self.item_name, self.sku)
    }
}

impl AggregateRoot for Voucher {
    type Id = VoucherId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn description(&self) -> String {
        format!("Póliza {}", self.id)
    }
}
