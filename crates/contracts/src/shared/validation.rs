//! Form normalization and field-level validation helpers.
//!
//! Forms are normalized first (whitespace, casing, empty optionals) and then
//! validated, so error messages refer to what will actually be submitted.

use serde::{Deserialize, Serialize};

/// A validation failure attached to one form field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// First message reported for `field`, if any
pub fn message_for<'a>(errors: &'a [FieldError], field: &str) -> Option<&'a str> {
    errors
        .iter()
        .find(|e| e.field == field)
        .map(|e| e.message.as_str())
}

/// Trim and collapse inner runs of whitespace to a single space
pub fn normalize_text(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Normalized text, or `None` when nothing is left
pub fn normalize_optional(value: &str) -> Option<String> {
    let text = normalize_text(value);
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

/// Parse a decimal typed by the user; accepts `,` as the decimal separator
pub fn parse_decimal(value: &str) -> Option<f64> {
    let cleaned: String = value.trim().replace(',', ".");
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Required text field bounded by `max_chars` characters
pub fn check_required(
    errors: &mut Vec<FieldError>,
    field: &str,
    label: &str,
    value: &str,
    max_chars: usize,
) {
    if value.is_empty() {
        errors.push(FieldError::new(field, format!("{} es obligatorio", label)));
    } else if value.chars().count() > max_chars {
        errors.push(FieldError::new(
            field,
            format!("{} no puede superar {} caracteres", label, max_chars),
        ));
    }
}

/// Non-negative decimal field; returns the parsed value when valid
pub fn check_non_negative(
    errors: &mut Vec<FieldError>,
    field: &str,
    label: &str,
    value: &str,
) -> Option<f64> {
    match parse_decimal(value) {
        Some(v) if v >= 0.0 => Some(v),
        Some(_) => {
            errors.push(FieldError::new(
                field,
                format!("{} no puede ser negativo", label),
            ));
            None
        }
        None => {
            errors.push(FieldError::new(
                field,
                format!("{} debe ser un número", label),
            ));
            None
        }
    }
}
