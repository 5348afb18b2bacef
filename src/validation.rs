//! Input validation for document submissions.
//!
//! Provides clear, descriptive validation errors that are easy to understand
//! for both the web client and human users.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

lazy_static! {
    static ref RE_RFC: Regex = Regex::new(r"^[A-ZÑ&]{3,4}[0-9]{6}[A-Z0-9]{2,3}$").unwrap();
    static ref RE_CURP: Regex = Regex::new(r"^[A-Z]{4}[0-9]{6}[A-Z]{6}[A-Z0-9]{2}$").unwrap();
    static ref RE_EMAIL: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
}

/// Validation error with detailed, user-friendly messages.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ValidationError {
    /// The field that failed validation
    pub field: String,
    /// Human-readable error message in Spanish
    pub message: String,
    /// Suggestion for how to fix the error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            suggestion: None,
        }
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Create error for empty required field
    pub fn empty_field(field: &str, label: &str) -> Self {
        Self::new(field, format!("{} no puede estar vacío", label))
            .with_suggestion(format!("Captura {} con un valor válido", label.to_lowercase()))
    }

    /// Create error for invalid RFC format
    pub fn invalid_rfc(field: &str) -> Self {
        Self::new(field, "El RFC no tiene un formato válido")
            .with_suggestion("Verifica el RFC tal como aparece en la constancia del SAT, ejemplo: GODE561231GR8")
    }

    /// Create error for invalid CURP format
    pub fn invalid_curp(field: &str) -> Self {
        Self::new(field, "La CURP debe tener 18 caracteres")
            .with_suggestion("Verifica la CURP tal como aparece en el documento oficial")
    }

    /// Create error for invalid email
    pub fn invalid_email(field: &str) -> Self {
        Self::new(field, "El correo electrónico no es válido")
            .with_suggestion("Usa un correo con formato usuario@dominio.com")
    }

    /// Create error for a score outside the 1-5 scale
    pub fn invalid_score(field: &str, label: &str) -> Self {
        Self::new(field, format!("{} debe ser una calificación entre 1 y 5", label))
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.field, self.message)?;
        if let Some(ref suggestion) = self.suggestion {
            write!(f, ". {}", suggestion)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// Collection of validation errors accumulated across a whole submission.
#[derive(Debug, Default, Serialize, ToSchema)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<ValidationError> {
        self.errors
    }

    /// Formatted single-string summary, used in logs and flash-style messages.
    pub fn to_message(&self) -> String {
        if self.errors.is_empty() {
            return String::new();
        }

        let mut parts = vec![format!(
            "Validación fallida: {} errores encontrados",
            self.errors.len()
        )];

        for (i, error) in self.errors.iter().enumerate() {
            parts.push(format!("{}. {}", i + 1, error));
        }

        parts.join("\n")
    }

    /// Convert to Result - Ok if no errors, Err with the collected list otherwise
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

// ============================================================================
// Validation functions
// ============================================================================

/// Validate that a string is not empty after trimming
pub fn validate_required(value: &str, field: &str, label: &str, errors: &mut ValidationErrors) {
    if value.trim().is_empty() {
        errors.add(ValidationError::empty_field(field, label));
    }
}

/// Validate RFC format (12-13 characters, SAT layout)
pub fn validate_rfc(value: &str, field: &str, errors: &mut ValidationErrors) {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        errors.add(ValidationError::empty_field(field, "RFC"));
        return;
    }

    if !RE_RFC.is_match(&trimmed.to_uppercase()) {
        errors.add(ValidationError::invalid_rfc(field));
    }
}

/// Validate RFC format - optional, only validate if provided
pub fn validate_rfc_optional(value: &str, field: &str, errors: &mut ValidationErrors) {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return;
    }

    if !RE_RFC.is_match(&trimmed.to_uppercase()) {
        errors.add(ValidationError::invalid_rfc(field));
    }
}

/// Validate CURP format (18 characters)
pub fn validate_curp(value: &str, field: &str, errors: &mut ValidationErrors) {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        errors.add(ValidationError::empty_field(field, "CURP"));
        return;
    }

    if !RE_CURP.is_match(&trimmed.to_uppercase()) {
        errors.add(ValidationError::invalid_curp(field));
    }
}

/// Validate email format
pub fn validate_email(value: &str, field: &str, errors: &mut ValidationErrors) {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        errors.add(ValidationError::empty_field(field, "Correo electrónico"));
        return;
    }

    if !RE_EMAIL.is_match(trimmed) {
        errors.add(ValidationError::invalid_email(field));
    }
}

/// Validate that a date was captured
pub fn validate_fecha(value: Option<chrono::NaiveDate>, field: &str, label: &str, errors: &mut ValidationErrors) {
    if value.is_none() {
        errors.add(ValidationError::new(field, format!("{} es obligatoria", label)));
    }
}

/// Validate a 1-5 score
pub fn validate_calificacion(value: i32, field: &str, label: &str, errors: &mut ValidationErrors) {
    if !(1..=5).contains(&value) {
        errors.add(ValidationError::invalid_score(field, label));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_rejects_whitespace_only() {
        let mut errors = ValidationErrors::new();
        validate_required("   ", "nombre", "Nombre", &mut errors);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.errors()[0].field, "nombre");
    }

    #[test]
    fn rfc_accepts_persona_fisica_and_moral() {
        let mut errors = ValidationErrors::new();
        validate_rfc("GODE561231GR8", "rfc", &mut errors);
        validate_rfc("ABC991231XY1", "rfc", &mut errors);
        assert!(errors.is_empty());
    }

    #[test]
    fn rfc_rejects_short_values() {
        let mut errors = ValidationErrors::new();
        validate_rfc("GODE56", "rfc", &mut errors);
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn rfc_optional_allows_empty() {
        let mut errors = ValidationErrors::new();
        validate_rfc_optional("", "rfc", &mut errors);
        assert!(errors.is_empty());
    }

    #[test]
    fn curp_requires_18_chars() {
        let mut errors = ValidationErrors::new();
        validate_curp("GODE561231HDFRRN09", "curp", &mut errors);
        assert!(errors.is_empty(), "{}", errors.to_message());

        let mut errors = ValidationErrors::new();
        validate_curp("GODE561231", "curp", &mut errors);
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn email_basic_shapes() {
        let mut errors = ValidationErrors::new();
        validate_email("docente@tecnm.mx", "email", &mut errors);
        assert!(errors.is_empty());

        let mut errors = ValidationErrors::new();
        validate_email("sin-arroba", "email", &mut errors);
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn calificacion_bounds() {
        let mut errors = ValidationErrors::new();
        for v in 1..=5 {
            validate_calificacion(v, "q1", "Pregunta 1", &mut errors);
        }
        assert!(errors.is_empty());

        validate_calificacion(0, "q1", "Pregunta 1", &mut errors);
        validate_calificacion(6, "q2", "Pregunta 2", &mut errors);
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn into_result_collects_all() {
        let mut errors = ValidationErrors::new();
        validate_required("", "a", "A", &mut errors);
        validate_required("", "b", "B", &mut errors);
        let err = errors.into_result().unwrap_err();
        assert_eq!(err.len(), 2);
        assert!(err.to_message().contains("2 errores"));
    }
}
