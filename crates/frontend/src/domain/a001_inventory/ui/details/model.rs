use crate::domain::a001_inventory::api::InventoryResource;
use crate::shared::form::{FormModel, ModeOf};
use contracts::domain::a001_inventory::aggregate::{InventoryItem, Sku};
use contracts::shared::validation::{ValidationErrors, ValidationRules};

pub const SKU_RULES: ValidationRules = ValidationRules::required().integer().positive();
pub const NAME_RULES: ValidationRules = ValidationRules::required().length(2, 100);
pub const QUANTITY_RULES: ValidationRules = ValidationRules::required().integer().non_negative();

/// Inventory form fields as typed by the user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InventoryForm {
    pub sku: String,
    pub name: String,
    pub quantity: String,
}

impl FormModel for InventoryForm {
    type Resource = InventoryResource;
    type Context = ();

    fn validate(&self, _mode: &ModeOf<Self>, _context: &()) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        errors.check("sku", &self.sku, "El SKU", SKU_RULES);
        errors.check("nombre", &self.name, "El nombre", NAME_RULES);
        errors.check("cantidad", &self.quantity, "La cantidad", QUANTITY_RULES);
        errors
    }

    fn to_draft(&self, mode: &ModeOf<Self>) -> Result<InventoryItem, String> {
        // the SKU is immutable once created
        let sku = match mode.key() {
            Some(sku) => sku,
            None => Sku(parse_int(&self.sku, "SKU")?),
        };
        let quantity = parse_int(&self.quantity, "cantidad")?;
        let quantity = i32::try_from(quantity).map_err(|_| "La cantidad es demasiado grande".to_string())?;
        Ok(InventoryItem {
            sku,
            name: self.name.trim().to_string(),
            quantity,
        })
    }

    fn from_entity(item: &InventoryItem, _context: &()) -> Self {
        Self {
            sku: item.sku.to_string(),
            name: item.name.clone(),
            quantity: item.quantity.to_string(),
        }
    }
}

/// Integer field already checked by its rules
pub fn parse_int(raw: &str, label: &str) -> Result<i64, String> {
    let value = raw.trim();
    value
        .parse::<i64>()
        .or_else(|_| {
            value
                .parse::<f64>()
                .ok()
                .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
                .map(|f| f as i64)
                .ok_or(())
        })
        .map_err(|_| format!("Valor inválido para {}: {}", label, raw))
}
