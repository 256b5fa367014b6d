//! # Session & UI State Types
//!
//! The values the controller owns: the live [`Session`], the overlay
//! flags layered on top of a dashboard, and the login screen's own toggles.
//!
//! ## Lifecycles
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Session        created by sign-in/registration, never mutated,        │
//! │                 destroyed by confirm_sign_out                          │
//! │                                                                         │
//! │  OverlayState   created with the controller, toggled by the UI,        │
//! │                 reset (never freed) whenever the role changes          │
//! │                                                                         │
//! │  LoginScreen    created with the controller, reset on sign-in          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::role::Role;

// =============================================================================
// Session
// =============================================================================

/// The live record of an authenticated role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Portal the user signed into.
    pub role: Role,

    /// Account handle vouched for by whoever authenticated the user.
    pub account: String,

    #[ts(as = "String")]
    pub signed_in_at: DateTime<Utc>,
}

impl Session {
    /// Starts a session for `account` in `role`'s portal.
    pub fn new(role: Role, account: impl Into<String>) -> Self {
        Session {
            id: Uuid::new_v4().to_string(),
            role,
            account: account.into(),
            signed_in_at: Utc::now(),
        }
    }
}

// =============================================================================
// Overlay State
// =============================================================================

/// Transient presentation flags drawn over a dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct OverlayState {
    /// Mobile sidebar drawer.
    pub sidebar_open: bool,

    /// "Are you sure you want to sign out?" modal.
    pub sign_out_confirm_open: bool,
}

impl OverlayState {
    /// Closes everything.
    pub fn reset(&mut self) {
        *self = OverlayState::default();
    }
}

// =============================================================================
// Login Screen
// =============================================================================

/// Whether the login form signs in or creates an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum AuthMode {
    #[default]
    SignIn,
    SignUp,
}

/// Toggles local to the login screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LoginScreen {
    /// Selected portal tab; sign-in defaults to this role.
    pub portal: Role,
    pub mode: AuthMode,
    pub password_visible: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session() {
        let before = Utc::now();
        let session = Session::new(Role::Buyer, "buyer@demo.com");
        assert_eq!(session.role, Role::Buyer);
        assert_eq!(session.account, "buyer@demo.com");
        assert!(session.signed_in_at >= before);
        assert!(Uuid::parse_str(&session.id).is_ok());
    }

    #[test]
    fn test_sessions_get_distinct_ids() {
        let a = Session::new(Role::Farmer, "farmer@demo.com");
        let b = Session::new(Role::Farmer, "farmer@demo.com");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_overlay_reset() {
        let mut overlay = OverlayState {
            sidebar_open: true,
            sign_out_confirm_open: true,
        };
        overlay.reset();
        assert_eq!(overlay, OverlayState::default());
    }

    #[test]
    fn test_login_screen_defaults() {
        let login = LoginScreen::default();
        assert_eq!(login.portal, Role::Farmer);
        assert_eq!(login.mode, AuthMode::SignIn);
        assert!(!login.password_visible);
    }

    #[test]
    fn test_overlay_serializes_camel_case() {
        let json = serde_json::to_string(&OverlayState::default()).unwrap();
        assert_eq!(json, r#"{"sidebarOpen":false,"signOutConfirmOpen":false}"#);
    }
}
