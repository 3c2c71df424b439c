use serde::{Deserialize, Serialize};

/// The three record types managed by the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Inventory,
    Employee,
    Voucher,
}

/// Server-confirmed mutation kinds; used to look up cache invalidation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MutationKind {
    Create,
    Update,
    Delete,
}

impl EntityKind {
    pub const ALL: [EntityKind; 3] = [EntityKind::Inventory, EntityKind::Employee, EntityKind::Voucher];

    pub fn collection_name(&self) -> &'static str {
        match self {
            EntityKind::Inventory => "inventario",
            EntityKind::Employee => "empleados",
            EntityKind::Voucher => "polizas",
        }
    }

    pub fn list_name(&self) -> &'static str {
        match self {
            EntityKind::Inventory => "Inventario",
            EntityKind::Employee => "Empleados",
            EntityKind::Voucher => "Pólizas",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.collection_name())
    }
}
