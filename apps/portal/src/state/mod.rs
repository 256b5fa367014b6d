//! # State Module
//!
//! Process-wide state handed to command functions.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │          ┌──────────────────┬──────────────────┐                       │
//! │          ▼                                     ▼                        │
//! │  ┌──────────────────────────┐        ┌──────────────────────┐          │
//! │  │      SessionState        │        │    CatalogState      │          │
//! │  │                          │        │                      │          │
//! │  │  Arc<Mutex<              │        │  Arc<Catalog>        │          │
//! │  │    SessionController     │        │  (read-only)         │          │
//! │  │  >>                      │        │                      │          │
//! │  └──────────────────────────┘        └──────────────────────┘          │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • SessionState: every transition takes the lock exclusively           │
//! │  • CatalogState: immutable after startup                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod catalog;
mod session;

pub use catalog::CatalogState;
pub use session::SessionState;
