//! Declarative validation rules for form fields.
//!
//! Form fields are kept as display strings; a rule checks the raw string and
//! converts it only as far as needed to test numeric constraints.

use std::collections::BTreeMap;

/// Validation rules for a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ValidationRules {
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub numeric: bool,
    pub integer: bool,
    pub positive: bool,
    pub non_negative: bool,
}

impl ValidationRules {
    /// Create empty validation rules (all optional, no constraints)
    pub const fn none() -> Self {
        Self {
            required: false,
            min_length: None,
            max_length: None,
            numeric: false,
            integer: false,
            positive: false,
            non_negative: false,
        }
    }

    /// Create validation rules for required field
    pub const fn required() -> Self {
        let mut rules = Self::none();
        rules.required = true;
        rules
    }

    pub const fn length(mut self, min: usize, max: usize) -> Self {
        self.min_length = Some(min);
        self.max_length = Some(max);
        self
    }

    pub const fn integer(mut self) -> Self {
        self.numeric = true;
        self.integer = true;
        self
    }

    pub const fn positive(mut self) -> Self {
        self.numeric = true;
        self.positive = true;
        self
    }

    pub const fn non_negative(mut self) -> Self {
        self.numeric = true;
        self.non_negative = true;
        self
    }

    /// Validate a raw field value. An empty optional field passes.
    pub fn validate(&self, raw: &str, field_label: &str) -> Result<(), String> {
        let value = raw.trim();

        if value.is_empty() {
            return if self.required {
                Err(format!("{} es requerido", field_label))
            } else {
                Ok(())
            };
        }

        let chars = value.chars().count();
        if let Some(min) = self.min_length {
            if chars < min {
                return Err(format!(
                    "{} debe tener al menos {} caracteres",
                    field_label, min
                ));
            }
        }
        if let Some(max) = self.max_length {
            if chars > max {
                return Err(format!(
                    "{} no debe exceder los {} caracteres",
                    field_label, max
                ));
            }
        }

        if self.numeric {
            let number: f64 = value
                .parse()
                .map_err(|_| format!("{} debe ser un número", field_label))?;
            if !number.is_finite() {
                return Err(format!("{} debe ser un número", field_label));
            }
            if self.integer && number.fract() != 0.0 {
                return Err(format!("{} debe ser un número entero", field_label));
            }
            if self.positive && number <= 0.0 {
                return Err(format!("{} debe ser un número positivo", field_label));
            }
            if self.non_negative && number < 0.0 {
                return Err(format!("{} no puede ser negativo", field_label));
            }
        }

        Ok(())
    }
}

/// Field name → first failing message
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<&'static str, String>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `rules` against `raw` and record the failure under `field`
    pub fn check(&mut self, field: &'static str, raw: &str, label: &str, rules: ValidationRules) {
        if let Err(message) = rules.validate(raw, label) {
            self.insert(field, message);
        }
    }

    /// Record a failure unless the field already has one
    pub fn insert(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.entry(field).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn has(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(k, v)| (*k, v.as_str()))
    }

    /// Every message joined for a single notification
    pub fn summary(&self) -> String {
        self.0.values().cloned().collect::<Vec<_>>().join("; ")
    }
}
