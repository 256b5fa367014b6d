//! # Error Types
//!
//! Domain-specific error types for farmconnect-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  farmconnect-core errors (this file)                                   │
//! │  ├── AuthError          - Sign-in rejected                             │
//! │  ├── ViewError          - Dashboard section change rejected            │
//! │  ├── ValidationError    - Registration form field failures             │
//! │  ├── RegistrationError  - Registrar refused the account                │
//! │  └── CoreError          - Umbrella over all of the above               │
//! │                                                                         │
//! │  Portal errors (in app)                                                │
//! │  └── ApiError           - What the client sees (serialized)            │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Client                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every error here is recoverable: a failed operation leaves the
//! controller exactly as it was before the call.

use thiserror::Error;

use crate::role::Role;
use crate::section::DashboardSection;

// =============================================================================
// Auth Error
// =============================================================================

/// Sign-in failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// The email/password pair does not match the selected portal's account.
    ///
    /// ## User Workflow
    /// ```text
    /// Sign In (Farmer tab, farmer@demo.com / wrong)
    ///      │
    ///      ▼
    /// Credential table lookup: no match
    ///      │
    ///      ▼
    /// InvalidCredentials
    ///      │
    ///      ▼
    /// UI shows inline: "Invalid email or password"
    /// ```
    #[error("Invalid email or password")]
    InvalidCredentials,
}

// =============================================================================
// View Error
// =============================================================================

/// Dashboard navigation failures.
///
/// `NoActiveSession` and `SectionNotAvailableForRole` are programmer errors
/// that a correct UI never triggers; they are logged rather than surfaced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewError {
    /// A section change was attempted without a signed-in session.
    #[error("No active session")]
    NoActiveSession,

    /// The target section is not part of the active role's dashboard.
    #[error("Section '{section}' is not available for the {role} portal")]
    SectionNotAvailableForRole {
        role: Role,
        section: DashboardSection,
    },

    /// A section id did not name any dashboard section.
    #[error("Unknown dashboard section: '{0}'")]
    UnknownSection(String),

    /// A role id did not name any portal.
    #[error("Unknown portal role: '{0}'")]
    UnknownRole(String),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors for the registration form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too short.
    #[error("{field} must be at least {min} characters")]
    TooShort { field: String, min: usize },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Invalid format (e.g., malformed email or phone number).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Duplicate value (e.g., email already registered).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Registration Error
// =============================================================================

/// Failures reported by a [`Registrar`](crate::auth::Registrar).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    /// The registrar rejected a field (usually a duplicate email).
    #[error(transparent)]
    Rejected(#[from] ValidationError),

    /// The registrar could not process the request at all.
    #[error("Registration unavailable: {0}")]
    Unavailable(String),
}

// =============================================================================
// Core Error
// =============================================================================

/// Umbrella error for callers that drive several controller operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    View(#[from] ViewError),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Registration(#[from] RegistrationError),
}

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
