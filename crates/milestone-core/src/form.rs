//! Milestone Form
//!
//! Required-field checks for the create/edit modal, backed by `validator`.

use std::borrow::Cow;
use std::fmt;

use validator::{Validate, ValidationError, ValidationErrors};

use crate::status::parse_due_date;

/// Fields of the milestone form, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Title,
    DueDate,
}

impl FormField {
    pub const ALL: [FormField; 2] = [FormField::Title, FormField::DueDate];

    /// Name of the struct field as reported by `validator`
    fn key(&self) -> &'static str {
        match self {
            FormField::Title => "title",
            FormField::DueDate => "due_date",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Title => "Title",
            FormField::DueDate => "Due Date",
        }
    }
}

/// One inline error under a form field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: FormField,
    pub message: String,
}

impl FieldError {
    pub fn new(field: FormField, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// First error per field, in field order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: FormField) -> Option<&str> {
        self.0
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }
}

impl From<Vec<FieldError>> for FieldErrors {
    fn from(errors: Vec<FieldError>) -> Self {
        Self(errors)
    }
}

impl From<&ValidationErrors> for FieldErrors {
    fn from(errors: &ValidationErrors) -> Self {
        let by_field = errors.field_errors();
        let collected = FormField::ALL
            .iter()
            .filter_map(|field| {
                let first = by_field.get(field.key())?.first()?;
                let message = first
                    .message
                    .clone()
                    .unwrap_or_else(|| first.code.clone());
                Some(FieldError::new(*field, message))
            })
            .collect();
        Self(collected)
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            f.write_str(&error.message)?;
        }
        Ok(())
    }
}

/// Values typed into the modal
#[derive(Debug, Clone, Default, PartialEq, Eq, Validate)]
pub struct MilestoneForm {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[validate(
        length(min = 1, message = "Due date is required"),
        custom(function = "validate_due_date")
    )]
    pub due_date: String,
}

impl MilestoneForm {
    pub fn new(title: impl Into<String>, due_date: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            due_date: due_date.into(),
        }
    }

    /// Run the checks, flattening errors to one message per field
    pub fn check(&self) -> Result<(), FieldErrors> {
        self.validate().map_err(|errors| FieldErrors::from(&errors))
    }
}

fn validate_due_date(value: &str) -> Result<(), ValidationError> {
    // Emptiness is reported by the length rule
    if value.is_empty() || parse_due_date(value).is_some() {
        return Ok(());
    }
    let mut error = ValidationError::new("date");
    error.message = Some(Cow::Borrowed("Due date must be a valid date"));
    Err(error)
}
