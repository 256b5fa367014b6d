//! # Portal Commands Module
//!
//! All commands exposed to the web frontend.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs        ◄─── You are here (exports)
//! ├── auth.rs       ◄─── Login screen, sign-in, registration
//! ├── dashboard.rs  ◄─── Section selection, sidebar
//! ├── sign_out.rs   ◄─── Sign-out confirmation flow
//! └── screen.rs     ◄─── Current screen for rendering
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  {"command":"sign_in","email":"farmer@demo.com","password":"demo123"}  │
//! │         │                                                               │
//! │         │ (one JSON line on stdin, see ipc.rs)                          │
//! │         ▼                                                               │
//! │  fn sign_in(                                                            │
//! │      session: &SessionState,  ◄── Only the state it needs              │
//! │      role: Option<String>,    ◄── From the request                     │
//! │      email: String,                                                     │
//! │      password: String,                                                  │
//! │  ) -> Result<SignInResponse, ApiError>                                  │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  {"ok":true,"data":{"session":{...},"route":"/farmer-dashboard"}}       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod auth;
pub mod dashboard;
pub mod screen;
pub mod sign_out;

use farmconnect_core::{DashboardSection, Role};

use crate::error::ApiError;

/// Parses a role id from a request (`"farmer"`, `"service_provider"`, ...).
pub(crate) fn parse_role(role: &str) -> Result<Role, ApiError> {
    Ok(role.parse::<Role>()?)
}

/// Parses a section id from a request (`"overview"`, `"crops"`, ...).
pub(crate) fn parse_section(section: &str) -> Result<DashboardSection, ApiError> {
    Ok(section.parse::<DashboardSection>()?)
}
