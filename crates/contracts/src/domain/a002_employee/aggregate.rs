use serde::{Deserialize, Serialize};

use crate::domain::common::AggregateRoot;

crate::integer_id!(
    /// Server-assigned employee identifier
    EmployeeId
);

/// Employee as returned by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    #[serde(rename = "idEmpleado")]
    pub id: EmployeeId,

    #[serde(rename = "nombre")]
    pub first_name: String,

    #[serde(rename = "apellido")]
    pub last_name: String,

    #[serde(rename = "puesto")]
    pub role: String,
}

impl Employee {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Label used in the voucher employee select
    pub fn option_label(&self) -> String {
        format!("{} - {}", self.full_name(), self.role)
    }
}

impl AggregateRoot for Employee {
    type Id = EmployeeId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn description(&self) -> String {
        self.full_name()
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO for creating/updating an employee. The id is left out on create.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeDto {
    #[serde(rename = "idEmpleado", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EmployeeId>,

    #[serde(rename = "nombre")]
    pub first_name: String,

    #[serde(rename = "apellido")]
    pub last_name: String,

    #[serde(rename = "puesto")]
    pub role: String,
}

impl From<Employee> for EmployeeDto {
    fn from(e: Employee) -> Self {
        Self {
            id: Some(e.id),
            first_name: e.first_name,
            last_name: e.last_name,
            role: e.role,
        }
    }
}
