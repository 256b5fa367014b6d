//! # FarmConnect Portal Entry Point
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        FarmConnect Portal                               │
//! │                                                                         │
//! │  Web frontend ── JSON line ──► stdin                                   │
//! │                                  │                                      │
//! │                                  ▼                                      │
//! │                     farmconnect_portal::run()                          │
//! │                      config → tracing → catalog → state → loop         │
//! │                                  │                                      │
//! │  Web frontend ◄── JSON line ─── stdout        (logs go to stderr)      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The only argument is an optional path to `portal.toml`.

use std::path::PathBuf;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let config_path = std::env::args_os().nth(1).map(PathBuf::from);

    match farmconnect_portal::run(config_path).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("farmconnect-portal: {}", e);
            ExitCode::FAILURE
        }
    }
}
