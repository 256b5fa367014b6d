//! # Sign-Out Commands
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  [Sign Out] ── request_sign_out ──► ┌──────────────────────────────┐   │
//! │                                     │ Are you sure you want to     │   │
//! │                                     │ sign out? You'll be          │   │
//! │                                     │ redirected to the home page. │   │
//! │                                     │                              │   │
//! │        cancel_sign_out ◄─ [Cancel]  │              [Yes, Sign Out] │   │
//! │                                     └───────────────┬──────────────┘   │
//! │                                                     ▼                   │
//! │                                             confirm_sign_out → "/"     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use farmconnect_core::{OverlayState, Route};
use tracing::debug;

use crate::state::SessionState;

/// Opens the confirmation modal. The session stays active.
pub fn request_sign_out(session: &SessionState) -> OverlayState {
    debug!("request_sign_out command");
    session.with_controller_mut(|c| {
        c.request_sign_out();
        c.overlay()
    })
}

pub fn cancel_sign_out(session: &SessionState) -> OverlayState {
    debug!("cancel_sign_out command");
    session.with_controller_mut(|c| {
        c.cancel_sign_out();
        c.overlay()
    })
}

/// Ends the session. Returns the route the portal went to.
pub fn confirm_sign_out(session: &SessionState) -> Route {
    debug!("confirm_sign_out command");
    session.with_controller_mut(|c| {
        c.confirm_sign_out();
        c.route()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::auth::sign_in;

    #[test]
    fn test_sign_out_flow() {
        let session = SessionState::default();
        sign_in(
            &session,
            Some("farmer"),
            "farmer@demo.com".into(),
            "demo123".into(),
        )
        .unwrap();

        assert!(request_sign_out(&session).sign_out_confirm_open);
        assert!(!cancel_sign_out(&session).sign_out_confirm_open);
        assert!(session.with_controller(|c| c.is_authenticated()));

        request_sign_out(&session);
        assert_eq!(confirm_sign_out(&session), Route::Home);
        assert!(!session.with_controller(|c| c.is_authenticated()));
    }
}
