//! # Validation Module
//!
//! Field validation for the registration form.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Frontend form                                                │
//! │  ├── `required` attributes, input types                                │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Controller (Rust)                                            │
//! │  └── THIS MODULE: field rules, run before any Registrar is consulted   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Registrar (external)                                         │
//! │  └── Uniqueness of the email address                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use farmconnect_core::validation::{validate_email, validate_password};
//!
//! assert!(validate_email("grower@example.com").is_ok());
//! assert!(validate_password("abc").is_err());
//! ```

use crate::error::ValidationError;
use crate::role::Role;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

pub const MAX_NAME_LEN: usize = 100;
pub const MAX_EMAIL_LEN: usize = 254;
pub const MIN_PASSWORD_LEN: usize = 6;
pub const MIN_PHONE_LEN: usize = 7;
pub const MAX_PHONE_LEN: usize = 20;

fn required(field: &str, value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }
    Ok(())
}

// =============================================================================
// String Validators
// =============================================================================

/// Validates a person's full name.
///
/// ## Rules
/// - Must not be empty
/// - At most 100 characters
pub fn validate_name(name: &str) -> ValidationResult<()> {
    required("name", name)?;

    if name.trim().chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates an email address.
///
/// ## Rules
/// - Must not be empty
/// - Exactly one `@` with a non-empty local part
/// - Domain contains a dot that is neither first nor last
///
/// ## Example
/// ```rust
/// use farmconnect_core::validation::validate_email;
///
/// assert!(validate_email("buyer@demo.com").is_ok());
/// assert!(validate_email("buyer.demo.com").is_err());
/// assert!(validate_email("buyer@demo").is_err());
/// ```
pub fn validate_email(email: &str) -> ValidationResult<()> {
    required("email", email)?;
    let email = email.trim();

    if email.len() > MAX_EMAIL_LEN {
        return Err(ValidationError::TooLong {
            field: "email".to_string(),
            max: MAX_EMAIL_LEN,
        });
    }

    let invalid = |reason: &str| ValidationError::InvalidFormat {
        field: "email".to_string(),
        reason: reason.to_string(),
    };

    let (local, domain) = email
        .split_once('@')
        .ok_or_else(|| invalid("must contain '@'"))?;

    if local.is_empty() || domain.contains('@') {
        return Err(invalid("must have exactly one '@' after a non-empty name"));
    }

    if email.chars().any(char::is_whitespace) {
        return Err(invalid("must not contain spaces"));
    }

    match domain.find('.') {
        Some(idx) if idx > 0 && !domain.ends_with('.') => Ok(()),
        _ => Err(invalid("domain must look like example.com")),
    }
}

/// Validates a phone number.
///
/// ## Rules
/// - Must not be empty
/// - Digits, spaces, and `+ - ( )` only
/// - 7 to 20 characters
pub fn validate_phone(phone: &str) -> ValidationResult<()> {
    required("phone", phone)?;
    let phone = phone.trim();

    if !phone
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '+' | '-' | '(' | ')'))
    {
        return Err(ValidationError::InvalidFormat {
            field: "phone".to_string(),
            reason: "must contain only digits, spaces, and + - ( )".to_string(),
        });
    }

    if phone.len() < MIN_PHONE_LEN {
        return Err(ValidationError::TooShort {
            field: "phone".to_string(),
            min: MIN_PHONE_LEN,
        });
    }

    if phone.len() > MAX_PHONE_LEN {
        return Err(ValidationError::TooLong {
            field: "phone".to_string(),
            max: MAX_PHONE_LEN,
        });
    }

    Ok(())
}

/// Validates a password.
///
/// ## Rules
/// - Must not be empty
/// - At least 6 characters (the demo password `demo123` is 7)
pub fn validate_password(password: &str) -> ValidationResult<()> {
    if password.is_empty() {
        return Err(ValidationError::Required {
            field: "password".to_string(),
        });
    }

    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::TooShort {
            field: "password".to_string(),
            min: MIN_PASSWORD_LEN,
        });
    }

    Ok(())
}

/// Validates the organization field.
///
/// Only the service provider portal asks for it; other roles accept
/// anything, including nothing.
pub fn validate_organization(role: Role, organization: Option<&str>) -> ValidationResult<()> {
    if !role.requires_organization() {
        return Ok(());
    }

    required("organization", organization.unwrap_or(""))?;

    if organization.map_or(0, |o| o.trim().chars().count()) > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "organization".to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
