use crate::domain::a001_inventory::api::fetch_items;
use crate::domain::a001_inventory::ui::details::model::parse_int;
use crate::domain::a002_employee::api::fetch_employees;
use crate::domain::a003_voucher::api::VoucherResource;
use crate::shared::api::{ApiResult, Transport};
use crate::shared::form::{FormMode, FormModel, ModeOf};
use crate::shared::list_utils::sort_list;
use contracts::domain::a001_inventory::aggregate::{InventoryItem, Sku};
use contracts::domain::a002_employee::aggregate::{Employee, EmployeeId};
use contracts::domain::a003_voucher::aggregate::{Voucher, VoucherDto};
use contracts::shared::validation::{ValidationErrors, ValidationRules};

pub const EMPLOYEE_RULES: ValidationRules = ValidationRules::required().integer().positive();
pub const ITEM_RULES: ValidationRules = ValidationRules::required().integer().positive();
pub const QUANTITY_RULES: ValidationRules = ValidationRules::required().integer().positive();

/// Employees and items offered by the selects
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VoucherContext {
    pub employees: Vec<Employee>,
    pub items: Vec<InventoryItem>,
}

impl VoucherContext {
    pub fn item(&self, sku: Sku) -> Option<&InventoryItem> {
        self.items.iter().find(|item| item.sku == sku)
    }

    pub fn employee_options(&self) -> Vec<(String, String)> {
        self.employees
            .iter()
            .map(|e| (e.id.to_string(), e.option_label()))
            .collect()
    }

    pub fn item_options(&self) -> Vec<(String, String)> {
        self.items
            .iter()
            .map(|item| (item.sku.to_string(), item.option_label()))
            .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VoucherForm {
    pub employee_id: String,
    pub sku: String,
    pub quantity: String,
}

impl FormModel for VoucherForm {
    type Resource = VoucherResource;
    type Context = VoucherContext;

    fn validate(&self, mode: &ModeOf<Self>, context: &VoucherContext) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        errors.check("empleado", &self.employee_id, "El empleado", EMPLOYEE_RULES);
        errors.check("sku", &self.sku, "El artículo", ITEM_RULES);
        errors.check("cantidad", &self.quantity, "La cantidad", QUANTITY_RULES);

        // stock is only consumed at creation
        if let FormMode::Create = mode {
            if let Some(message) = self.stock_error(context) {
                errors.insert("cantidad", message);
            }
        }
        errors
    }

    fn to_draft(&self, mode: &ModeOf<Self>) -> Result<VoucherDto, String> {
        let quantity = parse_int(&self.quantity, "cantidad")?;
        Ok(VoucherDto {
            id: mode.key(),
            employee_id: EmployeeId(parse_int(&self.employee_id, "empleado")?),
            sku: Sku(parse_int(&self.sku, "SKU")?),
            quantity: i32::try_from(quantity)
                .map_err(|_| "La cantidad es demasiado grande".to_string())?,
        })
    }

    fn from_entity(voucher: &Voucher, context: &VoucherContext) -> Self {
        let employee_id = voucher.employee_id.or_else(|| {
            context
                .employees
                .iter()
                .find(|e| e.full_name() == voucher.employee_name)
                .map(|e| e.id)
        });
        Self {
            employee_id: employee_id.map(|id| id.to_string()).unwrap_or_default(),
            sku: voucher.sku.to_string(),
            quantity: voucher.quantity.to_string(),
        }
    }

    async fn load_context<T: Transport>(transport: &T) -> ApiResult<VoucherContext> {
        let employees = fetch_employees(transport).await?;
        let mut items = fetch_items(transport).await?;
        sort_list(&mut items, "nombre", true);
        Ok(VoucherContext { employees, items })
    }
}

impl VoucherForm {
    /// Quantity above the selected item's known stock
    fn stock_error(&self, context: &VoucherContext) -> Option<String> {
        let sku = parse_int(&self.sku, "SKU").ok()?;
        let quantity = parse_int(&self.quantity, "cantidad").ok()?;
        let item = context.item(Sku(sku))?;
        (quantity > i64::from(item.quantity)).then(|| {
            format!(
                "La cantidad excede el inventario disponible (Stock: {})",
                item.quantity
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a003_voucher::aggregate::VoucherId;

    fn context() -> VoucherContext {
        VoucherContext {
            employees: vec![Employee {
                id: EmployeeId(3),
                first_name: "Ana".into(),
                last_name: "Ruiz".into(),
                role: "Almacén".into(),
            }],
            items: vec![InventoryItem::new(501, "Widget", 20)],
        }
    }

    fn form(employee: &str, sku: &str, quantity: &str) -> VoucherForm {
        VoucherForm {
            employee_id: employee.into(),
            sku: sku.into(),
            quantity: quantity.into(),
        }
    }

    #[test]
    fn test_stock_rule_on_create() {
        let ctx = context();
        assert!(form("3", "501", "5").validate(&FormMode::Create, &ctx).is_empty());
        assert!(form("3", "501", "20").validate(&FormMode::Create, &ctx).is_empty());

        let errors = form("3", "501", "25").validate(&FormMode::Create, &ctx);
        assert_eq!(
            errors.get("cantidad"),
            Some("La cantidad excede el inventario disponible (Stock: 20)")
        );
    }

    #[test]
    fn test_stock_rule_skipped_in_edit() {
        let errors = form("3", "501", "25").validate(&FormMode::Edit(VoucherId(1)), &context());
        assert!(errors.is_empty());
    }

    #[test]
    fn test_required_references() {
        let errors = form("", "", "0").validate(&FormMode::Create, &context());
        assert_eq!(errors.get("empleado"), Some("El empleado es requerido"));
        assert_eq!(errors.get("sku"), Some("El artículo es requerido"));
        assert_eq!(errors.get("cantidad"), Some("La cantidad debe ser un número positivo"));
    }

    #[test]
    fn test_from_entity_resolves_employee_by_name() {
        let voucher = Voucher {
            id: VoucherId(9),
            quantity: 5,
            employee_id: None,
            employee_name: "Ana Ruiz".into(),
            sku: Sku(501),
            item_name: "Widget".into(),
        };
        assert_eq!(
            VoucherForm::from_entity(&voucher, &context()),
            form("3", "501", "5")
        );
    }

    #[test]
    fn test_draft_payload() {
        let dto = form("3", "501", "5").to_draft(&FormMode::Create).unwrap();
        assert_eq!(dto.id, None);
        assert_eq!(dto.employee_id, EmployeeId(3));
        assert_eq!(dto.sku, Sku(501));
        assert_eq!(dto.quantity, 5);
    }

    #[test]
    fn test_select_labels() {
        let ctx = context();
        assert_eq!(ctx.employee_options()[0].1, "Ana Ruiz - Almacén");
        assert_eq!(ctx.item_options()[0].1, "Widget - Stock: 20");
    }
}
