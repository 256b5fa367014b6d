//! # farmconnect-core: Session & View Logic for the FarmConnect Portal
//!
//! This crate decides who is signed in, which dashboard they see, which
//! section of it is active, and which overlays are open. It performs no
//! I/O: navigation and dashboard data reach it through the [`Router`] and
//! [`DataProvider`] traits.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     FarmConnect Portal Architecture                     │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Web Frontend                                 │   │
//! │  │    Home ──► Login (3 portals) ──► Role Dashboard               │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ JSON commands                          │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    apps/portal                                  │   │
//! │  │    sign_in, select_section, confirm_sign_out, get_screen ...   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │            ★ farmconnect-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌────────────┐ ┌────────────┐ ┌────────────┐ ┌────────────┐  │   │
//! │  │   │ controller │ │    auth    │ │  section   │ │   screen   │  │   │
//! │  │   │  Session   │ │ Credentials│ │ per-role   │ │ derivation │  │   │
//! │  │   │  Overlay   │ │ Registrar  │ │ nav menus  │ │            │  │   │
//! │  │   └────────────┘ └────────────┘ └────────────┘ └────────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • SYNCHRONOUS TRANSITIONS                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │            farmconnect-catalog (Data Provider)                  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`controller`] - The session/view state machine
//! - [`auth`] - Demo credential table, registration form and registrar
//! - [`role`] / [`section`] - Personas and their dashboard sections
//! - [`router`] - Route table and the navigation collaborator
//! - [`records`] - Dashboard records and the data collaborator
//! - [`screen`] - Controller state → displayed screen
//! - [`validation`] - Registration field rules
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use farmconnect_core::{Credentials, DashboardSection, HistoryRouter, Role, SessionController};
//!
//! let mut portal = SessionController::new(HistoryRouter::new());
//!
//! portal
//!     .attempt_sign_in(Role::Farmer, Credentials::new("farmer@demo.com", "demo123"))
//!     .unwrap();
//! portal.select_section(DashboardSection::Crops).unwrap();
//!
//! portal.request_sign_out();
//! portal.confirm_sign_out();
//!
//! assert!(!portal.is_authenticated());
//! assert_eq!(portal.router().history(), ["/farmer-dashboard", "/"]);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod auth;
pub mod controller;
pub mod error;
pub mod records;
pub mod role;
pub mod router;
pub mod screen;
pub mod section;
pub mod session;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use auth::{Credentials, DemoRegistrar, RegistrationForm, Registrar};
pub use controller::{ControllerState, SectionPolicy, SessionController};
pub use error::{AuthError, CoreError, CoreResult, RegistrationError, ValidationError, ViewError};
pub use records::DataProvider;
pub use role::{PortalInfo, Role};
pub use router::{HistoryRouter, Route, Router};
pub use screen::{DashboardView, LoginView, Screen, SectionContent};
pub use section::{sections_for, DashboardSection, NavItem};
pub use session::{AuthMode, LoginScreen, OverlayState, Session};
