//! Domain Layer - Core Entity Trait
//!
//! Basic contract for identified records plus the error type shared by
//! every milestone operation.

use std::fmt;

use crate::form::FieldErrors;

/// Core trait for records that can be matched by identifier
pub trait Entity: Sized + Clone {
    /// The type of the entity's unique identifier
    type Id: Clone + Eq;

    /// Returns the entity's unique identifier
    fn id(&self) -> Self::Id;
}

/// Which kind of save was attempted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SaveOp {
    Create,
    Update,
}

impl SaveOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            SaveOp::Create => "create",
            SaveOp::Update => "update",
        }
    }

    /// HTTP verb used for this operation
    pub fn http_method(&self) -> &'static str {
        match self {
            SaveOp::Create => "POST",
            SaveOp::Update => "PUT",
        }
    }

    pub fn is_update(&self) -> bool {
        matches!(self, SaveOp::Update)
    }
}

impl fmt::Display for SaveOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Common result type for milestone operations
pub type MilestoneResult<T> = Result<T, MilestoneError>;

/// Errors surfaced by fetching, saving and validating milestones
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MilestoneError {
    /// Non-2xx response or network failure while listing
    #[error("Failed to fetch milestones: {reason}")]
    FetchFailed { reason: String },

    /// Non-2xx response or network failure while creating or updating
    #[error("Failed to {op} milestone: {reason}")]
    SaveFailed { op: SaveOp, reason: String },

    /// Required fields missing; never sent to the network
    #[error("Validation failed: {0}")]
    ValidationFailed(FieldErrors),
}

impl MilestoneError {
    pub fn fetch(reason: impl Into<String>) -> Self {
        MilestoneError::FetchFailed { reason: reason.into() }
    }

    pub fn save(op: SaveOp, reason: impl Into<String>) -> Self {
        MilestoneError::SaveFailed {
            op,
            reason: reason.into(),
        }
    }

    /// Text shown to the user in a toast
    pub fn user_message(&self) -> String {
        match self {
            MilestoneError::FetchFailed { reason } => format!("Failed to fetch milestones: {}", reason),
            MilestoneError::SaveFailed { op, .. } => format!("Failed to {} milestone", op),
            MilestoneError::ValidationFailed(errors) => errors.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::{FieldError, FormField};

    #[test]
    fn test_save_op_http_method() {
        assert_eq!(SaveOp::Create.http_method(), "POST");
        assert_eq!(SaveOp::Update.http_method(), "PUT");
        assert!(SaveOp::Update.is_update());
        assert!(!SaveOp::Create.is_update());
    }

    #[test]
    fn test_user_messages() {
        assert_eq!(
            MilestoneError::fetch("500").user_message(),
            "Failed to fetch milestones: 500"
        );
        assert_eq!(
            MilestoneError::save(SaveOp::Create, "500").user_message(),
            "Failed to create milestone"
        );
        assert_eq!(
            MilestoneError::save(SaveOp::Update, "404").user_message(),
            "Failed to update milestone"
        );
    }

    #[test]
    fn test_validation_message_lists_fields() {
        let errors = FieldErrors::from(vec![
            FieldError::new(FormField::Title, "Title is required"),
            FieldError::new(FormField::DueDate, "Due date is required"),
        ]);
        let err = MilestoneError::ValidationFailed(errors);
        assert_eq!(err.user_message(), "Title is required; Due date is required");
    }

    #[test]
    fn test_display_includes_reason() {
        let err = MilestoneError::save(SaveOp::Update, "503 Service Unavailable");
        assert_eq!(err.to_string(), "Failed to update milestone: 503 Service Unavailable");
    }
}
