//! # JSON-Lines Command Loop
//!
//! Bridges the web frontend to the command functions: one request object per
//! input line, one response object per output line.
//!
//! ## Protocol
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  stdin                                                                  │
//! │  {"command":"sign_in","role":"farmer","email":"…","password":"…"}       │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Request (serde, tagged by "command") ── malformed? ──► BAD_REQUEST    │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Dispatcher::dispatch ──► commands::* ──► Result<Value, ApiError>      │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  stdout                                                                 │
//! │  {"ok":true,"data":{…}}                                                 │
//! │  {"ok":false,"error":{"code":"INVALID_CREDENTIALS","message":"…"}}      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Blank lines are skipped. End of input ends the loop cleanly. Requests
//! are handled strictly in arrival order.

use farmconnect_core::{AuthMode, RegistrationForm};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info, warn};

use crate::commands::{auth, dashboard, screen, sign_out};
use crate::error::ApiError;
use crate::state::{CatalogState, SessionState};

// =============================================================================
// Wire Types
// =============================================================================

/// A command sent by the frontend.
///
/// No `Debug`: sign-in and registration variants carry passwords.
#[derive(Clone, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Request {
    GetScreen,
    OpenLogin,
    SelectPortal {
        role: String,
    },
    SetAuthMode {
        mode: AuthMode,
    },
    TogglePassword,
    SignIn {
        #[serde(default)]
        role: Option<String>,
        email: String,
        password: String,
    },
    Register {
        #[serde(default)]
        role: Option<String>,
        name: String,
        phone: String,
        #[serde(default)]
        organization: Option<String>,
        email: String,
        password: String,
    },
    SelectSection {
        section: String,
    },
    SelectMenuItem {
        section: String,
    },
    ToggleSidebar,
    CloseSidebar,
    RequestSignOut,
    CancelSignOut,
    ConfirmSignOut,
}

impl Request {
    /// Command name for logs. Never includes credentials.
    pub fn name(&self) -> &'static str {
        match self {
            Request::GetScreen => "get_screen",
            Request::OpenLogin => "open_login",
            Request::SelectPortal { .. } => "select_portal",
            Request::SetAuthMode { .. } => "set_auth_mode",
            Request::TogglePassword => "toggle_password",
            Request::SignIn { .. } => "sign_in",
            Request::Register { .. } => "register",
            Request::SelectSection { .. } => "select_section",
            Request::SelectMenuItem { .. } => "select_menu_item",
            Request::ToggleSidebar => "toggle_sidebar",
            Request::CloseSidebar => "close_sidebar",
            Request::RequestSignOut => "request_sign_out",
            Request::CancelSignOut => "cancel_sign_out",
            Request::ConfirmSignOut => "confirm_sign_out",
        }
    }
}

/// One response line.
#[derive(Debug, Clone, Serialize)]
pub struct Response {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
}

impl Response {
    pub fn success(data: Value) -> Self {
        Response {
            ok: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn failure(error: ApiError) -> Self {
        Response {
            ok: false,
            data: None,
            error: Some(error),
        }
    }
}

impl From<Result<Value, ApiError>> for Response {
    fn from(result: Result<Value, ApiError>) -> Self {
        match result {
            Ok(data) => Response::success(data),
            Err(error) => Response::failure(error),
        }
    }
}

fn to_data<T: Serialize>(value: T) -> Result<Value, ApiError> {
    serde_json::to_value(value).map_err(|e| ApiError::internal(e.to_string()))
}

// =============================================================================
// Dispatcher
// =============================================================================

/// Routes requests to command functions, handing each only the state it needs.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    session: SessionState,
    catalog: CatalogState,
}

impl Dispatcher {
    pub fn new(session: SessionState, catalog: CatalogState) -> Self {
        Dispatcher { session, catalog }
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    /// Runs one command.
    pub fn dispatch(&self, request: Request) -> Result<Value, ApiError> {
        let session = &self.session;

        match request {
            Request::GetScreen => to_data(screen::get_screen(session, &self.catalog)),
            Request::OpenLogin => to_data(auth::open_login(session).path()),
            Request::SelectPortal { role } => to_data(auth::select_portal(session, &role)?),
            Request::SetAuthMode { mode } => to_data(auth::set_auth_mode(session, mode)),
            Request::TogglePassword => to_data(auth::toggle_password(session)),
            Request::SignIn {
                role,
                email,
                password,
            } => to_data(auth::sign_in(session, role.as_deref(), email, password)?),
            Request::Register {
                role,
                name,
                phone,
                organization,
                email,
                password,
            } => {
                let form = RegistrationForm {
                    name,
                    phone,
                    organization,
                    email,
                    password,
                };
                to_data(auth::register(session, role.as_deref(), form)?)
            }
            Request::SelectSection { section } => {
                to_data(dashboard::select_section(session, &section)?)
            }
            Request::SelectMenuItem { section } => {
                to_data(dashboard::select_menu_item(session, &section)?)
            }
            Request::ToggleSidebar => to_data(dashboard::toggle_sidebar(session)),
            Request::CloseSidebar => to_data(dashboard::close_sidebar(session)),
            Request::RequestSignOut => to_data(sign_out::request_sign_out(session)),
            Request::CancelSignOut => to_data(sign_out::cancel_sign_out(session)),
            Request::ConfirmSignOut => to_data(sign_out::confirm_sign_out(session).path()),
        }
    }

    /// Parses and runs one input line.
    pub fn handle_line(&self, line: &str) -> Response {
        let request: Request = match serde_json::from_str(line) {
            Ok(request) => request,
            Err(e) => {
                warn!(error = %e, "Malformed request");
                return Response::failure(ApiError::bad_request(format!(
                    "Malformed request: {}",
                    e
                )));
            }
        };

        let name = request.name();
        let response = Response::from(self.dispatch(request));
        debug!(command = name, ok = response.ok, "Handled command");
        response
    }
}

// =============================================================================
// Loop
// =============================================================================

/// Serves requests from `reader` until end of input.
///
/// ## Errors
/// Only I/O failures on either stream end the loop early.
pub async fn serve<R, W>(
    dispatcher: &Dispatcher,
    reader: R,
    mut writer: W,
    pretty: bool,
) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = reader.lines();
    let mut handled: u64 = 0;

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        let response = dispatcher.handle_line(&line);
        let encoded = if pretty {
            serde_json::to_string_pretty(&response)
        } else {
            serde_json::to_string(&response)
        }
        .map_err(std::io::Error::other)?;

        writer.write_all(encoded.as_bytes()).await?;
        writer.write_all(b"\n").await?;
        writer.flush().await?;
        handled += 1;
    }

    info!(handled, "Input closed, command loop finished");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use farmconnect_catalog::Catalog;
    use farmconnect_core::SectionPolicy;

    fn dispatcher(policy: SectionPolicy) -> Dispatcher {
        Dispatcher::new(
            SessionState::new(policy),
            CatalogState::new(Catalog::demo().unwrap()),
        )
    }

    async fn run(dispatcher: &Dispatcher, input: &str) -> Vec<Value> {
        let mut output = Vec::new();
        serve(dispatcher, input.as_bytes(), &mut output, false)
            .await
            .unwrap();

        String::from_utf8(output)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[tokio::test]
    async fn test_farmer_session_over_the_wire() {
        let d = dispatcher(SectionPolicy::Strict);
        let input = [
            r#"{"command":"get_screen"}"#,
            r#"{"command":"open_login"}"#,
            r#"{"command":"sign_in","role":"farmer","email":"farmer@demo.com","password":"demo123"}"#,
            r#"{"command":"select_section","section":"crops"}"#,
            r#"{"command":"toggle_sidebar"}"#,
            r#"{"command":"get_screen"}"#,
            r#"{"command":"request_sign_out"}"#,
            r#"{"command":"confirm_sign_out"}"#,
            r#"{"command":"get_screen"}"#,
        ]
        .join("\n");

        let out = run(&d, &input).await;
        assert_eq!(out.len(), 9);
        assert!(out.iter().all(|r| r["ok"] == true));

        assert_eq!(out[0]["data"]["screen"], "home");
        assert_eq!(out[1]["data"], "/login");
        assert_eq!(out[2]["data"]["session"]["role"], "farmer");
        assert_eq!(out[2]["data"]["route"], "/farmer-dashboard");
        assert_eq!(out[3]["data"], "crops");
        assert_eq!(out[4]["data"]["sidebarOpen"], true);

        let view = &out[5]["data"]["view"];
        assert_eq!(view["section"], "crops");
        assert_eq!(view["content"]["kind"], "crop_listings");
        assert_eq!(view["content"]["items"][0]["name"], "Wheat");

        assert_eq!(out[7]["data"], "/");
        assert_eq!(out[8]["data"]["screen"], "home");

        let history = d.session().with_controller(|c| c.router().history().to_vec());
        assert_eq!(history, ["/login", "/farmer-dashboard", "/"]);
    }

    #[tokio::test]
    async fn test_errors_do_not_stop_the_loop() {
        let d = dispatcher(SectionPolicy::Strict);
        let input = [
            "this is not json",
            r#"{"command":"launch_rockets"}"#,
            r#"{"command":"select_section","section":"crops"}"#,
            r#"{"command":"sign_in","role":"buyer","email":"buyer@demo.com","password":"nope"}"#,
            "",
            r#"{"command":"sign_in","role":"buyer","email":"buyer@demo.com","password":"demo123"}"#,
            r#"{"command":"select_section","section":"services"}"#,
            r#"{"command":"get_screen"}"#,
        ]
        .join("\n");

        let out = run(&d, &input).await;
        assert_eq!(out.len(), 7);

        let codes: Vec<&Value> = out.iter().map(|r| &r["error"]["code"]).collect();
        assert_eq!(codes[0], "BAD_REQUEST");
        assert_eq!(codes[1], "BAD_REQUEST");
        assert_eq!(codes[2], "NO_ACTIVE_SESSION");
        assert_eq!(codes[3], "INVALID_CREDENTIALS");
        assert_eq!(out[4]["ok"], true);
        assert_eq!(codes[5], "SECTION_NOT_AVAILABLE");

        assert_eq!(out[6]["data"]["view"]["section"], "overview");
        assert!(out[6].get("error").is_none());
    }

    #[tokio::test]
    async fn test_register_and_login_screen_commands() {
        let d = dispatcher(SectionPolicy::Strict);
        let input = [
            r#"{"command":"open_login"}"#,
            r#"{"command":"select_portal","role":"service_provider"}"#,
            r#"{"command":"set_auth_mode","mode":"sign_up"}"#,
            r#"{"command":"toggle_password"}"#,
            r#"{"command":"get_screen"}"#,
            r#"{"command":"register","name":"Sam","phone":"555 010 2020","email":"sam@haul.co","password":"truck99"}"#,
            r#"{"command":"register","name":"Sam","phone":"555 010 2020","organization":"Haul Co","email":"sam@haul.co","password":"truck99"}"#,
        ]
        .join("\n");

        let out = run(&d, &input).await;

        assert_eq!(out[1]["data"]["portal"], "service_provider");
        assert_eq!(out[2]["data"]["mode"], "sign_up");
        assert_eq!(out[3]["data"], true);

        let login = &out[4]["data"]["view"];
        assert_eq!(out[4]["data"]["screen"], "login");
        assert_eq!(login["portal"]["title"], "Service Provider Portal");
        assert!(login["demoHint"].is_null());

        assert_eq!(out[5]["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(out[6]["data"]["session"]["account"], "sam@haul.co");
        assert_eq!(out[6]["data"]["route"], "/service-provider-dashboard");
    }

    #[tokio::test]
    async fn test_fallback_policy_over_the_wire() {
        let d = dispatcher(SectionPolicy::Fallback);
        let input = [
            r#"{"command":"sign_in","role":"buyer","email":"buyer@demo.com","password":"demo123"}"#,
            r#"{"command":"select_menu_item","section":"saved"}"#,
            r#"{"command":"select_section","section":"bids"}"#,
        ]
        .join("\n");

        let out = run(&d, &input).await;
        assert_eq!(out[1]["data"], "saved");
        assert_eq!(out[2]["ok"], true);
        assert_eq!(out[2]["data"], "overview");
    }

    #[tokio::test]
    async fn test_pretty_output_is_still_one_response_per_request() {
        let d = dispatcher(SectionPolicy::Strict);
        let mut output = Vec::new();
        serve(&d, &b"{\"command\":\"get_screen\"}\n"[..], &mut output, true)
            .await
            .unwrap();

        let text = String::from_utf8(output).unwrap();
        let value: Value = serde_json::from_str(text.trim()).unwrap();
        assert_eq!(value["data"]["screen"], "home");
    }

    #[test]
    fn test_request_names_hide_credentials() {
        let request: Request = serde_json::from_str(
            r#"{"command":"sign_in","email":"farmer@demo.com","password":"demo123"}"#,
        )
        .unwrap();
        assert_eq!(request.name(), "sign_in");
    }
}
