//! # Roles
//!
//! The three portal personas and the presentation each portal carries on
//! the login screen.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Role              Portal                     Dashboard route           │
//! │  ────────────────  ─────────────────────────  ─────────────────────────  │
//! │  Farmer            Farmer Portal              /farmer-dashboard          │
//! │  ServiceProvider   Service Provider Portal    /service-provider-dashboard│
//! │  Buyer             Buyer Portal               /buyer-dashboard           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ViewError;

/// The portal persona a signed-in user operates as.
///
/// Fixed set; immutable for the life of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    #[default]
    Farmer,
    ServiceProvider,
    Buyer,
}

impl Role {
    /// All roles, in login-tab order.
    pub const ALL: [Role; 3] = [Role::Farmer, Role::ServiceProvider, Role::Buyer];

    /// Stable identifier used in logs and the command protocol.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Role::Farmer => "farmer",
            Role::ServiceProvider => "service_provider",
            Role::Buyer => "buyer",
        }
    }

    /// Login-screen presentation for this role's portal.
    pub fn portal(&self) -> PortalInfo {
        let (title, subtitle, features): (&str, &str, [&str; 4]) = match self {
            Role::Farmer => (
                "Farmer Portal",
                "Manage your harvest, connect with service providers, and sell your crops",
                [
                    "Post harvest requirements",
                    "Manage crop listings",
                    "View service offers",
                    "Connect with buyers",
                ],
            ),
            Role::ServiceProvider => (
                "Service Provider Portal",
                "Offer vehicles, manpower, and agricultural services to farmers",
                [
                    "Post service details",
                    "Bid on requirements",
                    "Manage bookings",
                    "Track earnings",
                ],
            ),
            Role::Buyer => (
                "Buyer Portal",
                "Browse fresh harvest, negotiate prices, and secure quality produce",
                [
                    "Browse crop listings",
                    "Make offers",
                    "Negotiate deals",
                    "Track purchases",
                ],
            ),
        };

        PortalInfo {
            role: *self,
            title: title.to_string(),
            subtitle: subtitle.to_string(),
            features: features.iter().map(|f| f.to_string()).collect(),
        }
    }

    /// Registration asks service providers for their organization.
    pub const fn requires_organization(&self) -> bool {
        matches!(self, Role::ServiceProvider)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ViewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "farmer" => Ok(Role::Farmer),
            "service_provider" | "service-provider" | "service" => Ok(Role::ServiceProvider),
            "buyer" => Ok(Role::Buyer),
            other => Err(ViewError::UnknownRole(other.to_string())),
        }
    }
}

/// Portal card shown for a role on the login screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PortalInfo {
    pub role: Role,
    pub title: String,
    pub subtitle: String,
    /// "Key Features" bullet list.
    pub features: Vec<String>,
}
