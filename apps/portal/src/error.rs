//! # API Error Type
//!
//! Unified error type for portal commands, plus the startup error.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Portal                             │
//! │                                                                         │
//! │  Client                      Rust Backend                               │
//! │  ──────                      ────────────                               │
//! │                                                                         │
//! │  {"command":"select_section","section":"bids"}                          │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<T, ApiError>                                             │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Wrong password? ─── AuthError::InvalidCredentials ──┐          │  │
//! │  │         │                                            │          │  │
//! │  │         ▼                                            ▼          │  │
//! │  │  Wrong section? ─── ViewError::SectionNot... ───── ApiError ───►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  {"ok":false,"error":{"code":"SECTION_NOT_AVAILABLE","message":"..."}} │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `PortalError` is different: it only occurs before the loop starts
//! (bad config file, unreadable dataset) and ends the process.

use farmconnect_catalog::CatalogError;
use farmconnect_core::{AuthError, CoreError, RegistrationError, ViewError};
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};

// =============================================================================
// API Error
// =============================================================================

/// Error returned from portal commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "INVALID_CREDENTIALS",
///   "message": "Invalid email or password"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for command responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Sign-in rejected; shown inline on the login form
    InvalidCredentials,

    /// Dashboard command sent while signed out
    NoActiveSession,

    /// Section outside the active role's dashboard
    SectionNotAvailable,

    /// Registration form rejected
    ValidationError,

    /// Line was not a valid command
    BadRequest,

    /// Anything else
    Internal,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a bad request error.
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::BadRequest, message)
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidCredentials => {
                ApiError::new(ErrorCode::InvalidCredentials, err.to_string())
            }
        }
    }
}

/// A correct UI never triggers the first two; they are logged.
impl From<ViewError> for ApiError {
    fn from(err: ViewError) -> Self {
        match err {
            ViewError::NoActiveSession => {
                warn!("Dashboard command without a session");
                ApiError::new(ErrorCode::NoActiveSession, err.to_string())
            }
            ViewError::SectionNotAvailableForRole { role, section } => {
                warn!(role = %role, section = %section, "Rejected section change");
                ApiError::new(ErrorCode::SectionNotAvailable, err.to_string())
            }
            ViewError::UnknownSection(_) | ViewError::UnknownRole(_) => {
                ApiError::bad_request(err.to_string())
            }
        }
    }
}

impl From<RegistrationError> for ApiError {
    fn from(err: RegistrationError) -> Self {
        match err {
            RegistrationError::Rejected(e) => ApiError::validation(e.to_string()),
            RegistrationError::Unavailable(reason) => {
                error!("Registrar unavailable: {}", reason);
                ApiError::internal("Registration is currently unavailable")
            }
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Auth(e) => e.into(),
            CoreError::View(e) => e.into(),
            CoreError::Validation(e) => ApiError::validation(e.to_string()),
            CoreError::Registration(e) => e.into(),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

// =============================================================================
// Startup Error
// =============================================================================

/// Failures while starting the portal.
#[derive(Debug, Error)]
pub enum PortalError {
    /// Invalid configuration value.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Config file is not valid TOML.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Dashboard dataset could not be loaded.
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Result type for startup operations.
pub type PortalResult<T> = Result<T, PortalError>;

#[cfg(test)]
mod tests {
    use super::*;
    use farmconnect_core::{DashboardSection, Role, ValidationError};

    #[test]
    fn test_error_codes_serialize_screaming_snake_case() {
        let err = ApiError::from(AuthError::InvalidCredentials);
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "INVALID_CREDENTIALS");
        assert_eq!(json["message"], "Invalid email or password");
    }

    #[test]
    fn test_view_error_mapping() {
        assert_eq!(
            ApiError::from(ViewError::NoActiveSession).code,
            ErrorCode::NoActiveSession
        );
        assert_eq!(
            ApiError::from(ViewError::SectionNotAvailableForRole {
                role: Role::Buyer,
                section: DashboardSection::Services,
            })
            .code,
            ErrorCode::SectionNotAvailable
        );
        assert_eq!(
            ApiError::from(ViewError::UnknownSection("x".into())).code,
            ErrorCode::BadRequest
        );
    }

    #[test]
    fn test_core_error_mapping() {
        let err = ApiError::from(CoreError::Validation(ValidationError::Required {
            field: "phone".into(),
        }));
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert!(err.message.contains("phone"));

        let err = ApiError::from(CoreError::Registration(RegistrationError::Rejected(
            ValidationError::Duplicate {
                field: "email".into(),
                value: "buyer@demo.com".into(),
            },
        )));
        assert_eq!(err.code, ErrorCode::ValidationError);

        let err = ApiError::from(CoreError::Registration(RegistrationError::Unavailable(
            "offline".into(),
        )));
        assert_eq!(err.code, ErrorCode::Internal);
        assert!(!err.message.contains("offline"));
    }
}
