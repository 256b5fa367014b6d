//! # Authentication
//!
//! Demo credential checking and the registration collaborator.
//!
//! ## Sign-In Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Login screen (portal tab = Farmer)                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Credentials { email, password }   ◄── moved in, dropped after check  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  authenticate(role, &credentials)  ◄── THIS MODULE                     │
//! │       │                                                                 │
//! │       ├── table entry for role matches exactly → DemoAccount           │
//! │       └── anything else → AuthError::InvalidCredentials                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The table is compiled in: one account per role, compared exactly and
//! case-sensitively on both fields. A production deployment replaces this
//! module with an identity provider that hands back a verified account
//! handle; the controller only ever stores that handle.

use std::fmt;

use serde::Deserialize;

use crate::error::{AuthError, RegistrationError, ValidationError};
use crate::role::Role;
use crate::validation::{
    validate_email, validate_name, validate_organization, validate_password, validate_phone,
    ValidationResult,
};

// =============================================================================
// Credentials
// =============================================================================

/// A sign-in attempt's email/password pair.
///
/// Transient: the controller takes it by value and it is dropped as soon
/// as the attempt completes.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Credentials {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

// =============================================================================
// Demo Account Table
// =============================================================================

/// One entry of the compiled-in credential table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoAccount {
    pub role: Role,
    pub email: &'static str,
    pub password: &'static str,
}

/// The demo accounts, one per role.
pub const DEMO_ACCOUNTS: [DemoAccount; 3] = [
    DemoAccount {
        role: Role::Farmer,
        email: "farmer@demo.com",
        password: "demo123",
    },
    DemoAccount {
        role: Role::ServiceProvider,
        email: "service@demo.com",
        password: "demo123",
    },
    DemoAccount {
        role: Role::Buyer,
        email: "buyer@demo.com",
        password: "demo123",
    },
];

/// Returns the demo account for a role.
pub fn demo_account(role: Role) -> &'static DemoAccount {
    // Table holds exactly one entry per role, in Role::ALL order.
    match role {
        Role::Farmer => &DEMO_ACCOUNTS[0],
        Role::ServiceProvider => &DEMO_ACCOUNTS[1],
        Role::Buyer => &DEMO_ACCOUNTS[2],
    }
}

/// Checks credentials against the role's table entry.
///
/// No trimming and no case folding: `Farmer@demo.com` is rejected.
pub fn authenticate(role: Role, credentials: &Credentials) -> Result<&'static DemoAccount, AuthError> {
    let account = demo_account(role);

    if credentials.email == account.email && credentials.password == account.password {
        Ok(account)
    } else {
        Err(AuthError::InvalidCredentials)
    }
}

// =============================================================================
// Registration
// =============================================================================

/// The sign-up form as submitted from the login screen.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct RegistrationForm {
    pub name: String,
    pub phone: String,
    /// Only asked of service providers.
    #[serde(default)]
    pub organization: Option<String>,
    pub email: String,
    pub password: String,
}

impl fmt::Debug for RegistrationForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrationForm")
            .field("name", &self.name)
            .field("phone", &self.phone)
            .field("organization", &self.organization)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl RegistrationForm {
    /// Runs every field rule for the given portal, failing on the first.
    pub fn validate(&self, role: Role) -> ValidationResult<()> {
        validate_name(&self.name)?;
        validate_organization(role, self.organization.as_deref())?;
        validate_phone(&self.phone)?;
        validate_email(&self.email)?;
        validate_password(&self.password)?;
        Ok(())
    }

    /// Normalised email used as the account handle.
    pub fn account_email(&self) -> String {
        self.email.trim().to_string()
    }
}

/// External collaborator that creates accounts.
///
/// Called only with forms that already passed [`RegistrationForm::validate`].
pub trait Registrar {
    fn register(&self, role: Role, form: &RegistrationForm) -> Result<(), RegistrationError>;
}

/// Registrar used by the prototype: accepts every valid form except one
/// that reuses a demo account's email.
#[derive(Debug, Clone, Copy, Default)]
pub struct DemoRegistrar;

impl Registrar for DemoRegistrar {
    fn register(&self, _role: Role, form: &RegistrationForm) -> Result<(), RegistrationError> {
        let email = form.account_email();

        if DEMO_ACCOUNTS
            .iter()
            .any(|account| account.email.eq_ignore_ascii_case(&email))
        {
            return Err(ValidationError::Duplicate {
                field: "email".to_string(),
                value: email,
            }
            .into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(role: Role) -> RegistrationForm {
        RegistrationForm {
            name: "Sarah Smith".to_string(),
            phone: "+1 555 010 2020".to_string(),
            organization: role
                .requires_organization()
                .then(|| "Valley Haulage".to_string()),
            email: "sarah@valley.farm".to_string(),
            password: "harvest42".to_string(),
        }
    }

    #[test]
    fn test_demo_accounts_match_their_role() {
        for role in Role::ALL {
            let account = demo_account(role);
            assert_eq!(account.role, role);
            let creds = Credentials::new(account.email, account.password);
            assert_eq!(authenticate(role, &creds), Ok(account));
        }
    }

    #[test]
    fn test_authenticate_is_role_scoped() {
        let creds = Credentials::new("buyer@demo.com", "demo123");
        assert_eq!(
            authenticate(Role::Farmer, &creds),
            Err(AuthError::InvalidCredentials)
        );
    }

    #[test]
    fn test_authenticate_is_exact() {
        let cases = [
            ("Farmer@demo.com", "demo123"),
            ("farmer@demo.com ", "demo123"),
            ("farmer@demo.com", "DEMO123"),
            ("farmer@demo.com", ""),
            ("", "demo123"),
        ];
        for (email, password) in cases {
            let creds = Credentials::new(email, password);
            assert_eq!(
                authenticate(Role::Farmer, &creds),
                Err(AuthError::InvalidCredentials),
                "{email:?}/{password:?} must be rejected"
            );
        }
    }

    #[test]
    fn test_credentials_debug_redacts_password() {
        let creds = Credentials::new("farmer@demo.com", "demo123");
        let printed = format!("{:?}", creds);
        assert!(printed.contains("farmer@demo.com"));
        assert!(!printed.contains("demo123"));
    }

    #[test]
    fn test_form_validation_order() {
        let mut f = form(Role::ServiceProvider);
        assert!(f.validate(Role::ServiceProvider).is_ok());

        f.organization = None;
        assert_eq!(
            f.validate(Role::ServiceProvider),
            Err(ValidationError::Required {
                field: "organization".to_string()
            })
        );
        // Farmers are never asked for an organization.
        assert!(f.validate(Role::Farmer).is_ok());

        f.name.clear();
        assert_eq!(
            f.validate(Role::Farmer),
            Err(ValidationError::Required {
                field: "name".to_string()
            })
        );
    }

    #[test]
    fn test_demo_registrar_rejects_demo_emails() {
        let mut f = form(Role::Buyer);
        assert!(DemoRegistrar.register(Role::Buyer, &f).is_ok());

        f.email = " Buyer@Demo.com ".to_string();
        let err = DemoRegistrar.register(Role::Buyer, &f).unwrap_err();
        assert_eq!(
            err,
            RegistrationError::Rejected(ValidationError::Duplicate {
                field: "email".to_string(),
                value: "Buyer@Demo.com".to_string(),
            })
        );
    }
}
