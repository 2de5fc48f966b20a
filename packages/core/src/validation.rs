// ABOUTME: Form-level validation for task input
// ABOUTME: Enforces the required title and the title/description length limits

use std::fmt;

/// Maximum title length, in characters
pub const TITLE_MAX_LEN: usize = 100;

/// Maximum description length, in characters
pub const DESCRIPTION_MAX_LEN: usize = 500;

/// Validation error for a single form field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Validates a task form before it reaches the store.
///
/// Lengths are counted in characters, not bytes. Returns every violation
/// found; an empty vector means the input is acceptable.
pub fn validate_task_input(title: &str, description: Option<&str>) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if title.trim().is_empty() {
        errors.push(ValidationError::new("title", "Title is required"));
    } else if title.chars().count() > TITLE_MAX_LEN {
        errors.push(ValidationError::new(
            "title",
            format!("Title must be at most {} characters", TITLE_MAX_LEN),
        ));
    }

    if let Some(description) = description {
        if description.chars().count() > DESCRIPTION_MAX_LEN {
            errors.push(ValidationError::new(
                "description",
                format!(
                    "Description must be at most {} characters",
                    DESCRIPTION_MAX_LEN
                ),
            ));
        }
    }

    errors
}
