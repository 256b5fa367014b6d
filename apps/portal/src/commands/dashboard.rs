//! # Dashboard Commands
//!
//! Section selection and the mobile sidebar.

use farmconnect_core::{DashboardSection, OverlayState};
use tracing::debug;

use super::parse_section;
use crate::error::ApiError;
use crate::state::SessionState;

/// Shows a section of the active dashboard.
///
/// ## Returns
/// - The section now shown (`overview` under the fallback policy when the
///   target is not part of the role's dashboard)
/// - `NO_ACTIVE_SESSION` / `SECTION_NOT_AVAILABLE` otherwise
pub fn select_section(session: &SessionState, section: &str) -> Result<DashboardSection, ApiError> {
    debug!(section, "select_section command");
    let target = parse_section(section)?;

    session.with_controller_mut(|c| -> Result<_, ApiError> {
        c.select_section(target)?;
        Ok(c.section())
    })
}

/// Sidebar menu click: selects the section and closes the drawer.
pub fn select_menu_item(
    session: &SessionState,
    section: &str,
) -> Result<DashboardSection, ApiError> {
    debug!(section, "select_menu_item command");
    let target = parse_section(section)?;

    session.with_controller_mut(|c| -> Result<_, ApiError> {
        c.select_section_from_menu(target)?;
        Ok(c.section())
    })
}

pub fn toggle_sidebar(session: &SessionState) -> OverlayState {
    session.with_controller_mut(|c| {
        c.toggle_sidebar();
        c.overlay()
    })
}

pub fn close_sidebar(session: &SessionState) -> OverlayState {
    session.with_controller_mut(|c| {
        c.close_sidebar();
        c.overlay()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::auth::sign_in;
    use crate::error::ErrorCode;
    use farmconnect_core::SectionPolicy;

    fn buyer(policy: SectionPolicy) -> SessionState {
        let session = SessionState::new(policy);
        sign_in(
            &session,
            Some("buyer"),
            "buyer@demo.com".into(),
            "demo123".into(),
        )
        .unwrap();
        session
    }

    #[test]
    fn test_select_section_without_session() {
        let session = SessionState::default();
        let err = select_section(&session, "crops").unwrap_err();
        assert_eq!(err.code, ErrorCode::NoActiveSession);
    }

    #[test]
    fn test_select_section_codes() {
        let session = buyer(SectionPolicy::Strict);
        assert_eq!(
            select_section(&session, "saved").unwrap(),
            DashboardSection::Saved
        );
        assert_eq!(
            select_section(&session, "services").unwrap_err().code,
            ErrorCode::SectionNotAvailable
        );
        assert_eq!(
            select_section(&session, "weather").unwrap_err().code,
            ErrorCode::BadRequest
        );
        assert_eq!(
            session.with_controller(|c| c.section()),
            DashboardSection::Saved
        );
    }

    #[test]
    fn test_fallback_reports_overview() {
        let session = buyer(SectionPolicy::Fallback);
        assert_eq!(
            select_section(&session, "jobs").unwrap(),
            DashboardSection::Overview
        );
    }

    #[test]
    fn test_menu_item_closes_sidebar() {
        let session = buyer(SectionPolicy::Strict);
        assert!(toggle_sidebar(&session).sidebar_open);

        select_menu_item(&session, "orders").unwrap();
        assert!(!session.with_controller(|c| c.overlay().sidebar_open));

        toggle_sidebar(&session);
        assert!(!close_sidebar(&session).sidebar_open);
    }
}
