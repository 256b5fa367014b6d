//! # Routing
//!
//! The portal's URL table and the [`Router`] collaborator contract.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Path                          Route                                    │
//! │  ────────────────────────────  ───────────────────────────────────────  │
//! │  /                             Home                                     │
//! │  /login                        Login                                    │
//! │  /farmer-dashboard             FarmerDashboard                          │
//! │  /service-provider-dashboard   ServiceProviderDashboard                 │
//! │  /buyer-dashboard              BuyerDashboard                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Per session the controller navigates exactly twice: to the role's
//! dashboard on sign-in and back to `/` on confirmed sign-out.

use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

use crate::role::Role;

/// A page of the portal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    #[default]
    Home,
    Login,
    FarmerDashboard,
    ServiceProviderDashboard,
    BuyerDashboard,
}

impl Route {
    pub const fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Login => "/login",
            Route::FarmerDashboard => "/farmer-dashboard",
            Route::ServiceProviderDashboard => "/service-provider-dashboard",
            Route::BuyerDashboard => "/buyer-dashboard",
        }
    }

    /// Dashboard route for a role.
    pub const fn for_role(role: Role) -> Route {
        match role {
            Role::Farmer => Route::FarmerDashboard,
            Role::ServiceProvider => Route::ServiceProviderDashboard,
            Role::Buyer => Route::BuyerDashboard,
        }
    }

    /// Maps a URL path to a route. A single trailing slash is ignored.
    pub fn resolve(path: &str) -> Option<Route> {
        let trimmed = match path.strip_suffix('/') {
            Some("") | None => path,
            Some(rest) => rest,
        };

        match trimmed {
            "/" => Some(Route::Home),
            "/login" => Some(Route::Login),
            "/farmer-dashboard" => Some(Route::FarmerDashboard),
            "/service-provider-dashboard" => Some(Route::ServiceProviderDashboard),
            "/buyer-dashboard" => Some(Route::BuyerDashboard),
            _ => None,
        }
    }

    /// The role whose dashboard this is, if any.
    pub const fn dashboard_role(&self) -> Option<Role> {
        match self {
            Route::FarmerDashboard => Some(Role::Farmer),
            Route::ServiceProviderDashboard => Some(Role::ServiceProvider),
            Route::BuyerDashboard => Some(Role::Buyer),
            Route::Home | Route::Login => None,
        }
    }
}

/// Navigation collaborator.
///
/// The controller only ever tells the router where to go; it never reads
/// routing state back.
pub trait Router {
    fn navigate(&mut self, path: &str);
}

/// Paths a [`HistoryRouter`] keeps by default.
pub const DEFAULT_HISTORY_LIMIT: usize = 64;

/// Router that remembers the most recent paths it was sent to.
///
/// Stands in for browser history in the command-loop app and in tests. The
/// history is capped so a long-running process does not grow it forever;
/// the oldest entries are dropped first.
#[derive(Debug, Clone)]
pub struct HistoryRouter {
    history: Vec<String>,
    limit: usize,
}

impl Default for HistoryRouter {
    fn default() -> Self {
        HistoryRouter::with_limit(DEFAULT_HISTORY_LIMIT)
    }
}

impl HistoryRouter {
    pub fn new() -> Self {
        HistoryRouter::default()
    }

    /// Keeps at most `limit` paths (at least one).
    pub fn with_limit(limit: usize) -> Self {
        HistoryRouter {
            history: Vec::new(),
            limit: limit.max(1),
        }
    }

    /// Retained paths, oldest first.
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Route of the most recent navigation; `Home` before any navigation,
    /// `None` if the last path was not a known route.
    pub fn current(&self) -> Option<Route> {
        match self.history.last() {
            Some(path) => Route::resolve(path),
            None => Some(Route::Home),
        }
    }
}

impl Router for HistoryRouter {
    fn navigate(&mut self, path: &str) {
        debug!(path, "navigate");
        self.history.push(path.to_string());
        if self.history.len() > self.limit {
            let excess = self.history.len() - self.limit;
            self.history.drain(..excess);
        }
    }
}
