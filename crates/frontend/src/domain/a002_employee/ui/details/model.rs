use crate::domain::a002_employee::api::EmployeeResource;
use crate::shared::form::{FormModel, ModeOf};
use contracts::domain::a002_employee::aggregate::{Employee, EmployeeDto};
use contracts::shared::validation::{ValidationErrors, ValidationRules};

pub const PERSON_NAME_RULES: ValidationRules = ValidationRules::required().length(2, 50);
pub const ROLE_RULES: ValidationRules = ValidationRules::required().length(2, 100);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeForm {
    pub first_name: String,
    pub last_name: String,
    pub role: String,
}

impl FormModel for EmployeeForm {
    type Resource = EmployeeResource;
    type Context = ();

    fn validate(&self, _mode: &ModeOf<Self>, _context: &()) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        errors.check("nombre", &self.first_name, "El nombre", PERSON_NAME_RULES);
        errors.check("apellido", &self.last_name, "El apellido", PERSON_NAME_RULES);
        errors.check("puesto", &self.role, "El puesto", ROLE_RULES);
        errors
    }

    fn to_draft(&self, mode: &ModeOf<Self>) -> Result<EmployeeDto, String> {
        Ok(EmployeeDto {
            id: mode.key(),
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            role: self.role.trim().to_string(),
        })
    }

    fn from_entity(employee: &Employee, _context: &()) -> Self {
        Self {
            first_name: employee.first_name.clone(),
            last_name: employee.last_name.clone(),
            role: employee.role.clone(),
        }
    }
}
