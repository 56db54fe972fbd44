//! Form Validation
//!
//! Modal forms hold raw input strings. `validate()` turns them into a record
//! or a field → message map; any error blocks submission.

mod records;

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use validator::ValidationErrors;

use crate::domain::dates::parse_date;

pub use records::{
    BikeForm, ClientForm, EmployeeForm, InventoryItemForm, LoginForm, ServiceForm, SimulatorForm,
    TrainingAssignmentForm, TrainingPlanForm,
};

pub const REQUIRED: &str = "Campo requerido";

/// Field name → first error message for that field
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormErrors(BTreeMap<String, String>);

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error; the first message for a field wins
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0.entry(field.to_string()).or_insert_with(|| message.into());
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

    pub fn first(&self) -> Option<(&str, &str)> {
        self.0.iter().next().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// `Ok(value)` when no errors were recorded
    pub fn into_result<T>(self, value: T) -> Result<T, FormErrors> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }

    /// Merge the field errors reported by a `validator` derive
    pub fn extend_from(&mut self, errors: ValidationErrors) {
        for (field, field_errors) in errors.field_errors() {
            if let Some(error) = field_errors.first() {
                let message = error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| error.code.to_string());
                self.add(&field, message);
            }
        }
    }
}

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in &self.0 {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for FormErrors {}

/// A modal form bound to one record type
pub trait RecordForm: Default + Clone + PartialEq + Send + Sync + 'static {
    type Record;

    /// Prefill the form for editing
    fn from_record(record: &Self::Record) -> Self;

    /// Parse and check every field
    fn validate(&self) -> Result<Self::Record, FormErrors>;
}

// ========================
// Field helpers
// ========================

/// Trimmed value, or a "required" error when blank
pub(crate) fn required(errors: &mut FormErrors, field: &str, raw: &str) -> String {
    let value = raw.trim();
    if value.is_empty() {
        errors.add(field, REQUIRED);
    }
    value.to_string()
}

/// Parse a required number and check inclusive bounds
pub(crate) fn number_in_range<T>(errors: &mut FormErrors, field: &str, raw: &str, min: T, max: Option<T>) -> Option<T>
where
    T: FromStr + PartialOrd + fmt::Display + Copy,
{
    let raw = raw.trim();
    if raw.is_empty() {
        errors.add(field, REQUIRED);
        return None;
    }
    let Ok(value) = raw.parse::<T>() else {
        errors.add(field, "Número inválido");
        return None;
    };
    if value < min {
        errors.add(field, format!("Debe ser al menos {min}"));
        return None;
    }
    if let Some(max) = max {
        if value > max {
            errors.add(field, format!("Debe ser como máximo {max}"));
            return None;
        }
    }
    Some(value)
}

/// Parse a required, finite, non-negative amount
pub(crate) fn amount(errors: &mut FormErrors, field: &str, raw: &str) -> Option<f64> {
    let value = number_in_range(errors, field, raw, 0.0_f64, None)?;
    if !value.is_finite() {
        errors.add(field, "Número inválido");
        return None;
    }
    Some(value)
}

/// Parse an optional date; blank reads as `None`
pub(crate) fn optional_date(errors: &mut FormErrors, field: &str, raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    let parsed = parse_date(raw);
    if parsed.is_none() {
        errors.add(field, "Fecha inválida (AAAA-MM-DD)");
    }
    parsed
}

/// Parse a required date
pub(crate) fn required_date(errors: &mut FormErrors, field: &str, raw: &str) -> Option<NaiveDate> {
    if raw.trim().is_empty() {
        errors.add(field, REQUIRED);
        return None;
    }
    optional_date(errors, field, raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_bounds() {
        let mut errors = FormErrors::new();
        assert_eq!(number_in_range(&mut errors, "sessions", "3", 1u8, Some(7)), Some(3));
        assert_eq!(number_in_range(&mut errors, "low", "0", 1u8, Some(7)), None);
        assert_eq!(number_in_range(&mut errors, "high", "8", 1u8, Some(7)), None);
        assert_eq!(number_in_range(&mut errors, "text", "abc", 0u32, None), None);
        assert_eq!(number_in_range(&mut errors, "blank", "  ", 0u32, None), None);
        assert_eq!(errors.len(), 4);
        assert_eq!(errors.get("blank"), Some(REQUIRED));
        assert!(!errors.has("sessions"));
    }

    #[test]
    fn test_amount_rejects_non_finite() {
        let mut errors = FormErrors::new();
        assert_eq!(amount(&mut errors, "price", "inf"), None);
        assert_eq!(amount(&mut errors, "ok", "59.99"), Some(59.99));
        assert!(errors.has("price"));
    }

    #[test]
    fn test_first_message_wins() {
        let mut errors = FormErrors::new();
        errors.add("email", "one");
        errors.add("email", "two");
        assert_eq!(errors.get("email"), Some("one"));
        assert_eq!(errors.to_string(), "email: one");
    }
}
