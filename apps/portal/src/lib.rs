//! # FarmConnect Portal Library
//!
//! The thin application layer around `farmconnect-core`: configuration,
//! logging, managed state, and the command loop the web frontend talks to.
//!
//! ## Module Organization
//! ```text
//! farmconnect_portal/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── config.rs       ◄─── PortalConfig (TOML + FARMCONNECT_* env)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── session.rs  ◄─── SessionController behind a mutex
//! │   └── catalog.rs  ◄─── Dashboard dataset
//! ├── commands/
//! │   ├── auth.rs     ◄─── Login screen, sign-in, registration
//! │   ├── dashboard.rs◄─── Sections and sidebar
//! │   ├── sign_out.rs ◄─── Sign-out confirmation
//! │   └── screen.rs   ◄─── Current screen
//! ├── ipc.rs          ◄─── JSON-lines request/response loop
//! └── error.rs        ◄─── ApiError for commands, PortalError for startup
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod ipc;
pub mod state;

use std::path::PathBuf;

use farmconnect_catalog::Catalog;
use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::PortalConfig;
use error::PortalResult;
use ipc::Dispatcher;
use state::{CatalogState, SessionState};

/// Runs the portal until stdin closes.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Portal Startup                                    │
/// │                                                                         │
/// │  1. Load Configuration ───────────────────────────────────────────────► │
/// │     • defaults → portal.toml → FARMCONNECT_* → validate                 │
/// │                                                                         │
/// │  2. Initialize Logging ───────────────────────────────────────────────► │
/// │     • RUST_LOG if set, else logging.filter                              │
/// │     • stderr only; stdout carries responses                             │
/// │                                                                         │
/// │  3. Load Catalog ─────────────────────────────────────────────────────► │
/// │     • catalog.path, or the bundled demo dataset                         │
/// │                                                                         │
/// │  4. Initialize State ─────────────────────────────────────────────────► │
/// │     • SessionState with the configured section policy                   │
/// │     • CatalogState                                                      │
/// │                                                                         │
/// │  5. Serve stdin → stdout until EOF                                      │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub async fn run(config_path: Option<PathBuf>) -> PortalResult<()> {
    let config = PortalConfig::load(config_path)?;
    init_tracing(&config.logging.filter);

    info!(
        app = %config.app.name,
        section_policy = %config.session.section_policy,
        "Starting portal"
    );

    let catalog = Catalog::load(config.catalog.path.as_deref())?;
    info!(
        source = if config.catalog.path.is_some() { "file" } else { "demo" },
        "Catalog ready"
    );

    let dispatcher = Dispatcher::new(
        SessionState::new(config.session.section_policy),
        CatalogState::new(catalog),
    );

    ipc::serve(
        &dispatcher,
        BufReader::new(tokio::io::stdin()),
        tokio::io::stdout(),
        config.app.pretty_json,
    )
    .await?;

    info!("Portal stopped");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=farmconnect_core=trace` - Trace the controller only
/// - Default: the configured `logging.filter`
fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    // A second call (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
