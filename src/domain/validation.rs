//! Presence checks gating the simulated actions
//!
//! Nothing here inspects the *shape* of a value: an input passes as soon as
//! it is non-empty after trimming.

use crate::errors::HostboardError;

pub const MSG_EMAIL_REQUIRED: &str = "Please enter your email address";
pub const MSG_SIGNUP_FIELDS_REQUIRED: &str = "Please fill in all required fields";
pub const MSG_TERMS_REQUIRED: &str = "Please accept the Terms & Conditions";
pub const MSG_PROPERTY_NAME_REQUIRED: &str = "Please enter the property name";

/// Result of a validation check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    /// Whether the validation passed
    pub valid: bool,

    /// User-facing reason for failure (if valid is false)
    pub reason: Option<String>,
}

impl ValidationResult {
    /// Create a successful validation result
    pub fn success() -> Self {
        ValidationResult {
            valid: true,
            reason: None,
        }
    }

    /// Create a failed validation result
    pub fn failure(reason: impl Into<String>) -> Self {
        ValidationResult {
            valid: false,
            reason: Some(reason.into()),
        }
    }

    /// Convert into a `Result`, carrying the reason as a `Validation` error
    pub fn into_result(self) -> crate::errors::Result<()> {
        if self.valid {
            Ok(())
        } else {
            Err(HostboardError::Validation(
                self.reason.unwrap_or_else(|| "validation failed".to_string()),
            ))
        }
    }
}

fn is_present(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Validate the "send OTP" trigger
pub fn validate_login(email: &str) -> ValidationResult {
    if !is_present(email) {
        return ValidationResult::failure(MSG_EMAIL_REQUIRED);
    }
    ValidationResult::success()
}

/// Validate the signup trigger: all contact fields first, then terms
pub fn validate_signup(name: &str, email: &str, phone: &str, terms_accepted: bool) -> ValidationResult {
    if !is_present(name) || !is_present(email) || !is_present(phone) {
        return ValidationResult::failure(MSG_SIGNUP_FIELDS_REQUIRED);
    }
    if !terms_accepted {
        return ValidationResult::failure(MSG_TERMS_REQUIRED);
    }
    ValidationResult::success()
}

/// Message shown when fewer than `length` OTP cells are filled
pub fn otp_incomplete_message(length: usize) -> String {
    format!("Please enter the complete {}-digit code", length)
}

/// Validate an OTP code against the expected number of cells
pub fn validate_otp_code(code: &str, length: usize) -> ValidationResult {
    if code.chars().count() != length {
        return ValidationResult::failure(otp_incomplete_message(length));
    }
    ValidationResult::success()
}

/// Validate the "find property" trigger
pub fn validate_property_search(property_name: &str) -> ValidationResult {
    if !is_present(property_name) {
        return ValidationResult::failure(MSG_PROPERTY_NAME_REQUIRED);
    }
    ValidationResult::success()
}

/// Validate the final submission
pub fn validate_submission(terms_accepted: bool) -> ValidationResult {
    if !terms_accepted {
        return ValidationResult::failure(MSG_TERMS_REQUIRED);
    }
    ValidationResult::success()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_login() {
        assert!(validate_login("a@b.com").valid);
        let result = validate_login("   ");
        assert!(!result.valid);
        assert_eq!(result.reason.as_deref(), Some(MSG_EMAIL_REQUIRED));
    }

    #[test]
    fn test_validate_signup_missing_field() {
        let result = validate_signup("Asha", "", "98765", true);
        assert_eq!(result.reason.as_deref(), Some(MSG_SIGNUP_FIELDS_REQUIRED));
    }

    #[test]
    fn test_validate_signup_fields_checked_before_terms() {
        let result = validate_signup("", "", "", false);
        assert_eq!(result.reason.as_deref(), Some(MSG_SIGNUP_FIELDS_REQUIRED));
    }

    #[test]
    fn test_validate_signup_requires_terms() {
        let result = validate_signup("Asha", "asha@example.com", "98765", false);
        assert_eq!(result.reason.as_deref(), Some(MSG_TERMS_REQUIRED));
        assert!(validate_signup("Asha", "asha@example.com", "98765", true).valid);
    }

    #[test]
    fn test_validate_otp_code() {
        assert!(validate_otp_code("123456", 6).valid);
        let result = validate_otp_code("12345", 6);
        assert_eq!(
            result.reason.as_deref(),
            Some("Please enter the complete 6-digit code")
        );
        assert!(!validate_otp_code("", 6).valid);
    }

    #[test]
    fn test_validate_property_search() {
        let result = validate_property_search("");
        assert_eq!(result.reason.as_deref(), Some("Please enter the property name"));
        assert!(validate_property_search("Sea View Inn").valid);
    }

    #[test]
    fn test_into_result() {
        assert!(validate_submission(true).into_result().is_ok());
        let err = validate_submission(false).into_result().unwrap_err();
        assert_eq!(err.code(), "VALIDATION");
        assert!(err.to_string().contains("Terms & Conditions"));
    }
}
