//! Error Types

use thiserror::Error;

use crate::contact::Field;

/// Result type alias for site operations
pub type Result<T> = std::result::Result<T, SiteError>;

/// Site error types
#[derive(Error, Debug)]
pub enum SiteError {
    /// A required form field was left empty
    #[error("Missing required field: {0}")]
    MissingField(Field),

    /// Email address does not have a `local@domain` shape
    #[error("Invalid email address: {0:?}")]
    InvalidEmail(String),

    /// Form input name does not map to a known field
    #[error("Unknown form field: {0}")]
    UnknownField(String),

    /// Select value is not one of the fixed interest options
    #[error("Unknown interest: {0}")]
    UnknownInterest(String),

    /// Submit attempted while the confirmation panel is showing
    #[error("Form is not accepting input")]
    NotEditing,

    /// The submission sink refused the payload
    #[error("Delivery failed: {0}")]
    Delivery(String),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SiteError {
    /// Whether the error was caused by visitor input rather than delivery
    pub const fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::MissingField(_)
                | Self::InvalidEmail(_)
                | Self::UnknownField(_)
                | Self::UnknownInterest(_)
        )
    }

    /// Convert to a visitor-facing message
    pub fn user_message(&self) -> String {
        match self {
            Self::MissingField(field) => format!("Please fill in {}.", field.label()),
            Self::InvalidEmail(_) => "Please enter a valid email address.".into(),
            Self::UnknownInterest(_) => "Please choose what you're interested in.".into(),
            Self::NotEditing => "Your message is already on its way.".into(),
            Self::Delivery(_) => "We couldn't send your message. Please try again.".into(),
            _ => "An unexpected error occurred.".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_classification() {
        assert!(SiteError::MissingField(Field::Name).is_validation());
        assert!(SiteError::InvalidEmail("x".into()).is_validation());
        assert!(!SiteError::Delivery("offline".into()).is_validation());
        assert!(!SiteError::NotEditing.is_validation());
    }

    #[test]
    fn test_user_message_names_field() {
        let msg = SiteError::MissingField(Field::Email).user_message();
        assert_eq!(msg, "Please fill in your email.");
    }
}
