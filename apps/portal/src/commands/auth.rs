//! # Auth Commands
//!
//! Login screen toggles, demo sign-in, and registration.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Home ── open_login ──► Login                                          │
//! │                          │  select_portal / set_auth_mode              │
//! │                          │  toggle_password                            │
//! │                          │                                              │
//! │              sign_in ────┼──── register                                │
//! │                          ▼                                              │
//! │                   Role Dashboard (section = overview)                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use farmconnect_core::{
    AuthMode, Credentials, DemoRegistrar, LoginScreen, RegistrationForm, Role, Route, Session,
};
use serde::Serialize;
use tracing::debug;

use super::parse_role;
use crate::error::ApiError;
use crate::state::SessionState;

/// Returned by a successful sign-in or registration.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInResponse {
    pub session: Session,
    /// Path the router was sent to.
    pub route: String,
}

impl From<Session> for SignInResponse {
    fn from(session: Session) -> Self {
        SignInResponse {
            route: Route::for_role(session.role).path().to_string(),
            session,
        }
    }
}

/// Landing page "Get Started": goes to `/login`; a signed-in client stays
/// on its dashboard.
pub fn open_login(session: &SessionState) -> Route {
    debug!("open_login command");
    session.with_controller_mut(|c| {
        c.open_login();
        c.route()
    })
}

/// Selects a portal tab on the login screen.
pub fn select_portal(session: &SessionState, role: &str) -> Result<LoginScreen, ApiError> {
    debug!(role, "select_portal command");
    let role = parse_role(role)?;
    Ok(session.with_controller_mut(|c| {
        c.select_portal(role);
        c.login_screen()
    }))
}

/// Switches the login form between sign-in and sign-up.
pub fn set_auth_mode(session: &SessionState, mode: AuthMode) -> LoginScreen {
    debug!(?mode, "set_auth_mode command");
    session.with_controller_mut(|c| {
        c.set_auth_mode(mode);
        c.login_screen()
    })
}

/// Eye icon on the password field. Returns the new visibility.
pub fn toggle_password(session: &SessionState) -> bool {
    session.with_controller_mut(|c| c.toggle_password_visibility())
}

/// Resolves the request's role, falling back to the selected portal tab.
fn role_or_selected(session: &SessionState, role: Option<&str>) -> Result<Role, ApiError> {
    match role {
        Some(role) => parse_role(role),
        None => Ok(session.with_controller(|c| c.login_screen().portal)),
    }
}

/// Signs in with the demo account table.
///
/// ## Returns
/// - The new session and the dashboard path
/// - `INVALID_CREDENTIALS` on any mismatch
pub fn sign_in(
    session: &SessionState,
    role: Option<&str>,
    email: String,
    password: String,
) -> Result<SignInResponse, ApiError> {
    debug!(role = ?role, "sign_in command");
    let role = role_or_selected(session, role)?;
    let credentials = Credentials::new(email, password);

    let new_session = session.with_controller_mut(|c| c.attempt_sign_in(role, credentials))?;
    Ok(new_session.into())
}

/// Creates an account and signs it in.
pub fn register(
    session: &SessionState,
    role: Option<&str>,
    form: RegistrationForm,
) -> Result<SignInResponse, ApiError> {
    debug!(role = ?role, "register command");
    let role = role_or_selected(session, role)?;

    let new_session =
        session.with_controller_mut(|c| c.attempt_register(role, form, &DemoRegistrar))?;
    Ok(new_session.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_sign_in_defaults_to_selected_portal() {
        let session = SessionState::default();
        select_portal(&session, "service").unwrap();

        let response = sign_in(&session, None, "service@demo.com".into(), "demo123".into())
            .unwrap();
        assert_eq!(response.session.role, Role::ServiceProvider);
        assert_eq!(response.route, "/service-provider-dashboard");
    }

    #[test]
    fn test_sign_in_wrong_password() {
        let session = SessionState::default();
        let err = sign_in(
            &session,
            Some("farmer"),
            "farmer@demo.com".into(),
            "nope".into(),
        )
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidCredentials);
        assert!(!session.with_controller(|c| c.is_authenticated()));
    }

    #[test]
    fn test_unknown_role_is_bad_request() {
        let session = SessionState::default();
        let err = select_portal(&session, "admin").unwrap_err();
        assert_eq!(err.code, ErrorCode::BadRequest);
    }

    #[test]
    fn test_login_screen_commands() {
        let session = SessionState::default();
        assert_eq!(open_login(&session), Route::Login);
        assert!(toggle_password(&session));
        let login = set_auth_mode(&session, AuthMode::SignUp);
        assert_eq!(login.mode, AuthMode::SignUp);
        assert!(login.password_visible);
    }

    #[test]
    fn test_open_login_keeps_signed_in_client_on_dashboard() {
        let session = SessionState::default();
        sign_in(&session, Some("buyer"), "buyer@demo.com".into(), "demo123".into()).unwrap();

        assert_eq!(open_login(&session), Route::BuyerDashboard);
        assert_eq!(
            session.with_controller(|c| c.router().history().to_vec()),
            ["/buyer-dashboard"]
        );
    }

    #[test]
    fn test_register_validation_error() {
        let session = SessionState::default();
        let form = RegistrationForm {
            name: "Sarah Smith".into(),
            phone: "12".into(),
            organization: None,
            email: "sarah@valley.farm".into(),
            password: "harvest42".into(),
        };
        let err = register(&session, Some("buyer"), form).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert!(err.message.contains("phone"));
    }
}
