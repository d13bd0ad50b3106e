//! Validator combining the individual rules in their fixed order.

use super::{TaskPayload, TitleRequirement, ValidationError, ValidationLimits, rules};
use serde_json::Value;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Pure, storage-free validator for task payloads.
///
/// Rules run in a fixed order and the first violation is reported: title,
/// description, tags, column, position, then links.
///
/// # Examples
///
/// ```
/// use kanban_board::board::validation::{TaskValidator, TitleRequirement, ValidationError};
/// use serde_json::json;
///
/// let validator = TaskValidator::new();
/// let payload = validator
///     .validate(&json!({"title": "Write docs", "column": "ready"}), TitleRequirement::Required)
///     .expect("valid payload");
/// assert_eq!(payload.title.as_deref(), Some("Write docs"));
///
/// let missing = validator.validate(&json!({}), TitleRequirement::Required);
/// assert_eq!(missing, Err(ValidationError::MissingTitle));
/// ```
#[derive(Debug, Clone, Default)]
pub struct TaskValidator {
    limits: ValidationLimits,
}

impl TaskValidator {
    /// Creates a validator with the default limits.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a validator with custom limits.
    #[must_use]
    pub const fn with_limits(limits: ValidationLimits) -> Self {
        Self { limits }
    }

    /// Returns the active limits.
    #[must_use]
    pub const fn limits(&self) -> &ValidationLimits {
        &self.limits
    }

    /// Validates a candidate task payload.
    ///
    /// # Errors
    ///
    /// Returns the [`ValidationError`] for the first violated constraint.
    pub fn validate(
        &self,
        payload: &Value,
        requirement: TitleRequirement,
    ) -> ValidationResult<TaskPayload> {
        let object = payload
            .as_object()
            .ok_or(ValidationError::PayloadNotObject)?;

        Ok(TaskPayload {
            title: rules::validate_title(object, requirement, &self.limits)?,
            description: rules::validate_description(object, &self.limits)?,
            tags: rules::validate_tags(object, &self.limits)?,
            column: rules::validate_column(object)?,
            position: rules::validate_position(object)?,
            links: rules::validate_links(object, &self.limits)?,
        })
    }

    /// Checks the outer shape of an import request.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::ImportNotAList`] when the payload is not an
    /// array, or [`ValidationError::ImportTooLarge`] above the batch cap.
    pub fn validate_import_envelope<'a>(&self, payload: &'a Value) -> ValidationResult<&'a [Value]> {
        let items = payload.as_array().ok_or(ValidationError::ImportNotAList)?;
        if items.len() > self.limits.max_import_batch {
            return Err(ValidationError::ImportTooLarge {
                max: self.limits.max_import_batch,
                actual: items.len(),
            });
        }
        Ok(items)
    }
}
