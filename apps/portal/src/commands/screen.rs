//! # Screen Command
//!
//! What the frontend should render right now.

use farmconnect_core::Screen;
use tracing::debug;

use crate::state::{CatalogState, SessionState};

/// Derives the current screen from the controller and the catalog.
pub fn get_screen(session: &SessionState, catalog: &CatalogState) -> Screen {
    debug!("get_screen command");
    session.with_controller(|c| c.screen(catalog.catalog()))
}
