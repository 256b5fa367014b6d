//! # Session/View Controller
//!
//! Owns the authenticated role, the selected dashboard section, the overlay
//! flags, and the login screen toggles. Every operation is synchronous and
//! either mutates state and succeeds, or leaves state untouched and returns
//! a typed error.
//!
//! ## State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   ┌─────────────────┐  attempt_sign_in / attempt_register (ok)         │
//! │   │ Unauthenticated │ ───────────────────────────────────────┐         │
//! │   └─────────────────┘                                        │         │
//! │            ▲                                                 ▼         │
//! │            │                      ┌────────────────────────────────┐   │
//! │            │                      │ Authenticated(role, section)   │   │
//! │            │                      │   select_section ⟲             │   │
//! │            │                      │   toggle/close_sidebar ⟲       │   │
//! │            │                      └──────┬──────────────▲──────────┘   │
//! │            │                 request_sign_out        cancel_sign_out   │
//! │            │                             ▼              │              │
//! │            │                      ┌────────────────────────────────┐   │
//! │            └───────────────────── │ ConfirmingSignOut              │   │
//! │               confirm_sign_out    └────────────────────────────────┘   │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A successful sign-in while already authenticated replaces the old
//! session outright; there is no "already signed in" guard.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use ts_rs::TS;

use crate::auth::{authenticate, Credentials, RegistrationForm, Registrar};
use crate::error::{AuthError, CoreResult, ViewError};
use crate::role::Role;
use crate::router::{Route, Router};
use crate::section::DashboardSection;
use crate::session::{AuthMode, LoginScreen, OverlayState, Session};

// =============================================================================
// Section Policy
// =============================================================================

/// What `select_section` does with a section outside the active role's set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionPolicy {
    /// Reject with `ViewError::SectionNotAvailableForRole`; state unchanged.
    #[default]
    Strict,

    /// Show `Overview` instead and report success.
    Fallback,
}

impl fmt::Display for SectionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SectionPolicy::Strict => write!(f, "strict"),
            SectionPolicy::Fallback => write!(f, "fallback"),
        }
    }
}

impl FromStr for SectionPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "strict" => Ok(SectionPolicy::Strict),
            "fallback" => Ok(SectionPolicy::Fallback),
            other => Err(format!(
                "Unknown section policy: '{}'. Valid options: strict, fallback",
                other
            )),
        }
    }
}

// =============================================================================
// Controller State
// =============================================================================

/// Coarse state of the controller, as drawn in the module diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ControllerState {
    Unauthenticated,
    Authenticated {
        role: Role,
        section: DashboardSection,
    },
    ConfirmingSignOut {
        role: Role,
        section: DashboardSection,
    },
}

// =============================================================================
// Controller
// =============================================================================

/// The single owner of portal session/view state.
///
/// One instance lives for the whole process and is handed to the view layer
/// by reference. The router is owned so that navigation happens in the same
/// step as the state change that caused it.
#[derive(Debug)]
pub struct SessionController<R: Router> {
    session: Option<Session>,
    section: DashboardSection,
    overlay: OverlayState,
    login: LoginScreen,
    route: Route,
    policy: SectionPolicy,
    router: R,
}

impl<R: Router> SessionController<R> {
    /// Creates an unauthenticated controller with the strict section policy.
    pub fn new(router: R) -> Self {
        Self::with_policy(router, SectionPolicy::default())
    }

    pub fn with_policy(router: R, policy: SectionPolicy) -> Self {
        SessionController {
            session: None,
            section: DashboardSection::default(),
            overlay: OverlayState::default(),
            login: LoginScreen::default(),
            route: Route::Home,
            policy,
            router,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn role(&self) -> Option<Role> {
        self.session.as_ref().map(|s| s.role)
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    /// Active section; `Overview` while unauthenticated.
    pub fn section(&self) -> DashboardSection {
        self.section
    }

    pub fn overlay(&self) -> OverlayState {
        self.overlay
    }

    pub fn login_screen(&self) -> LoginScreen {
        self.login
    }

    /// The last route this controller navigated to.
    pub fn route(&self) -> Route {
        self.route
    }

    pub fn policy(&self) -> SectionPolicy {
        self.policy
    }

    pub fn router(&self) -> &R {
        &self.router
    }

    pub fn state(&self) -> ControllerState {
        match &self.session {
            None => ControllerState::Unauthenticated,
            Some(session) if self.overlay.sign_out_confirm_open => {
                ControllerState::ConfirmingSignOut {
                    role: session.role,
                    section: self.section,
                }
            }
            Some(session) => ControllerState::Authenticated {
                role: session.role,
                section: self.section,
            },
        }
    }

    // =========================================================================
    // Authentication
    // =========================================================================

    /// Signs into `role`'s portal with the demo credential table.
    ///
    /// ## Behavior
    /// - Match: new session, section `Overview`, overlay closed, login
    ///   screen reset, router sent to the role's dashboard
    /// - Mismatch: `AuthError::InvalidCredentials`, nothing changes
    ///
    /// `credentials` is consumed and dropped before this returns.
    pub fn attempt_sign_in(
        &mut self,
        role: Role,
        credentials: Credentials,
    ) -> Result<Session, AuthError> {
        let account = match authenticate(role, &credentials) {
            Ok(account) => account,
            Err(err) => {
                info!(role = %role, "sign-in rejected");
                return Err(err);
            }
        };
        drop(credentials);

        Ok(self.establish(role, account.email))
    }

    /// Registers a new account through `registrar`, then signs it in.
    ///
    /// The form is validated first; the registrar only sees valid forms.
    /// On success the session is created exactly as for a sign-in.
    pub fn attempt_register(
        &mut self,
        role: Role,
        form: RegistrationForm,
        registrar: &dyn Registrar,
    ) -> CoreResult<Session> {
        form.validate(role)?;
        registrar.register(role, &form)?;

        Ok(self.establish(role, form.account_email()))
    }

    fn establish(&mut self, role: Role, account: impl Into<String>) -> Session {
        let session = Session::new(role, account);

        if let Some(previous) = self.session.replace(session.clone()) {
            info!(
                previous_role = %previous.role,
                previous_session = %previous.id,
                "replacing existing session"
            );
        }

        self.section = DashboardSection::Overview;
        self.overlay.reset();
        self.login = LoginScreen::default();

        info!(role = %role, session_id = %session.id, "signed in");
        self.navigate(Route::for_role(role));

        session
    }

    // =========================================================================
    // Login Screen
    // =========================================================================

    /// Navigates to the login page. Session state is untouched.
    ///
    /// Ignored while signed in: the dashboard stays put and the router is
    /// not called.
    pub fn open_login(&mut self) {
        if let Some(session) = &self.session {
            debug!(role = %session.role, "open_login ignored while signed in");
            return;
        }
        self.navigate(Route::Login);
    }

    /// Selects a portal tab on the login screen.
    pub fn select_portal(&mut self, role: Role) {
        debug!(role = %role, "select portal");
        self.login.portal = role;
    }

    /// Switches between the sign-in and sign-up forms.
    pub fn set_auth_mode(&mut self, mode: AuthMode) {
        self.login.mode = mode;
    }

    /// Flips the password field between masked and plain. Returns the new value.
    pub fn toggle_password_visibility(&mut self) -> bool {
        self.login.password_visible = !self.login.password_visible;
        self.login.password_visible
    }

    // =========================================================================
    // Dashboard Navigation
    // =========================================================================

    /// Shows `target` in the active dashboard.
    ///
    /// ## Behavior
    /// - No session: `ViewError::NoActiveSession`
    /// - Target in the role's set: selected (idempotent)
    /// - Target outside the set: depends on [`SectionPolicy`]
    pub fn select_section(&mut self, target: DashboardSection) -> Result<(), ViewError> {
        let role = self.role().ok_or(ViewError::NoActiveSession)?;

        if target.is_available_for(role) {
            debug!(role = %role, section = %target, "select section");
            self.section = target;
            return Ok(());
        }

        match self.policy {
            SectionPolicy::Strict => {
                warn!(role = %role, section = %target, "section not available for role");
                Err(ViewError::SectionNotAvailableForRole {
                    role,
                    section: target,
                })
            }
            SectionPolicy::Fallback => {
                debug!(role = %role, section = %target, "section not available, showing overview");
                self.section = DashboardSection::Overview;
                Ok(())
            }
        }
    }

    /// Sidebar menu click: selects the section, then closes the drawer.
    pub fn select_section_from_menu(&mut self, target: DashboardSection) -> Result<(), ViewError> {
        self.select_section(target)?;
        self.close_sidebar();
        Ok(())
    }

    // =========================================================================
    // Overlays
    // =========================================================================

    /// Flips the mobile sidebar. Returns the new value.
    pub fn toggle_sidebar(&mut self) -> bool {
        self.overlay.sidebar_open = !self.overlay.sidebar_open;
        self.overlay.sidebar_open
    }

    pub fn close_sidebar(&mut self) {
        self.overlay.sidebar_open = false;
    }

    /// Opens the sign-out confirmation. The session survives until confirmed.
    pub fn request_sign_out(&mut self) {
        self.overlay.sign_out_confirm_open = true;
    }

    pub fn cancel_sign_out(&mut self) {
        self.overlay.sign_out_confirm_open = false;
    }

    /// Tears the session down and returns to the landing page.
    pub fn confirm_sign_out(&mut self) {
        if let Some(session) = self.session.take() {
            info!(role = %session.role, session_id = %session.id, "signed out");
        }

        self.section = DashboardSection::default();
        self.overlay.reset();
        self.navigate(Route::Home);
    }

    fn navigate(&mut self, route: Route) {
        self.route = route;
        self.router.navigate(route.path());
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
