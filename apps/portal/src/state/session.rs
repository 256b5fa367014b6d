//! # Session State
//!
//! The one [`SessionController`] of the process.
//!
//! ## Thread Safety
//! The controller is wrapped in `Arc<Mutex<T>>`: transitions are
//! synchronous and short, and each must observe the result of the previous
//! one, so every command takes the lock exclusively.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Client Action            Command                 Controller Change     │
//! │  ─────────────            ───────                 ─────────────────     │
//! │                                                                         │
//! │  Sign In ────────────────► sign_in() ───────────► session = Some(..)   │
//! │                                                                         │
//! │  Click "My Crops" ───────► select_section() ────► section = Crops      │
//! │                                                                         │
//! │  Hamburger ──────────────► toggle_sidebar() ────► sidebar_open = !..   │
//! │                                                                         │
//! │  Sign Out → Yes ─────────► confirm_sign_out() ──► session = None       │
//! │                                                                         │
//! │  Render ─────────────────► get_screen() ────────► (read only)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, PoisonError};

use farmconnect_core::{HistoryRouter, SectionPolicy, SessionController};

/// The portal's controller behind a mutex.
#[derive(Debug, Clone)]
pub struct SessionState {
    controller: Arc<Mutex<SessionController<HistoryRouter>>>,
}

impl SessionState {
    pub fn new(policy: SectionPolicy) -> Self {
        SessionState {
            controller: Arc::new(Mutex::new(SessionController::with_policy(
                HistoryRouter::new(),
                policy,
            ))),
        }
    }

    /// Executes a function with read access to the controller.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let role = session.with_controller(|c| c.role());
    /// ```
    pub fn with_controller<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&SessionController<HistoryRouter>) -> R,
    {
        // Every transition either completes or leaves state untouched, so a
        // poisoned lock still guards a consistent controller.
        let controller = self.controller.lock().unwrap_or_else(PoisonError::into_inner);
        f(&controller)
    }

    /// Executes a function with write access to the controller.
    pub fn with_controller_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut SessionController<HistoryRouter>) -> R,
    {
        let mut controller = self.controller.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut controller)
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(SectionPolicy::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use farmconnect_core::{Credentials, Role};

    #[test]
    fn test_clones_share_one_controller() {
        let state = SessionState::default();
        let other = state.clone();

        other
            .with_controller_mut(|c| {
                c.attempt_sign_in(Role::Buyer, Credentials::new("buyer@demo.com", "demo123"))
            })
            .unwrap();

        assert_eq!(state.with_controller(|c| c.role()), Some(Role::Buyer));
    }

    #[test]
    fn test_policy_is_passed_through() {
        let state = SessionState::new(SectionPolicy::Fallback);
        assert_eq!(
            state.with_controller(|c| c.policy()),
            SectionPolicy::Fallback
        );
    }
}
