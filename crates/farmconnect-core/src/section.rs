//! # Dashboard Sections
//!
//! The sub-views of a role's dashboard, and which of them each role may
//! open.
//!
//! ## Section Sets
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Section     Farmer              ServiceProvider     Buyer              │
//! │  ─────────   ─────────────────   ─────────────────   ────────────────   │
//! │  overview    Overview            Overview            Overview           │
//! │  crops       My Crops            -                   Browse Crops       │
//! │  services    Service Requests    My Services         -                  │
//! │  offers      Received Offers     -                   -                  │
//! │  jobs        -                   Job Requests        -                  │
//! │  bids        -                   My Bids             -                  │
//! │  orders      -                   -                   My Orders          │
//! │  saved       -                   -                   Saved Items        │
//! │  reports     Reports             Reports             Reports            │
//! │  profile     Profile             Profile             Profile            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The table rows are in menu order; `sections_for` returns them in the same
//! order the sidebar shows them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ViewError;
use crate::role::Role;

/// A displayable sub-view within a role's dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum DashboardSection {
    #[default]
    Overview,
    Crops,
    Services,
    Offers,
    Jobs,
    Bids,
    Orders,
    Saved,
    Reports,
    Profile,
}

const FARMER_SECTIONS: [DashboardSection; 6] = [
    DashboardSection::Overview,
    DashboardSection::Crops,
    DashboardSection::Services,
    DashboardSection::Offers,
    DashboardSection::Reports,
    DashboardSection::Profile,
];

const SERVICE_PROVIDER_SECTIONS: [DashboardSection; 6] = [
    DashboardSection::Overview,
    DashboardSection::Services,
    DashboardSection::Jobs,
    DashboardSection::Bids,
    DashboardSection::Reports,
    DashboardSection::Profile,
];

const BUYER_SECTIONS: [DashboardSection; 6] = [
    DashboardSection::Overview,
    DashboardSection::Crops,
    DashboardSection::Orders,
    DashboardSection::Saved,
    DashboardSection::Reports,
    DashboardSection::Profile,
];

/// Returns the valid sections for a role, in sidebar order.
pub fn sections_for(role: Role) -> &'static [DashboardSection] {
    match role {
        Role::Farmer => &FARMER_SECTIONS,
        Role::ServiceProvider => &SERVICE_PROVIDER_SECTIONS,
        Role::Buyer => &BUYER_SECTIONS,
    }
}

impl DashboardSection {
    /// Tab id as used by the frontend (`"overview"`, `"crops"`, ...).
    pub const fn id(&self) -> &'static str {
        match self {
            DashboardSection::Overview => "overview",
            DashboardSection::Crops => "crops",
            DashboardSection::Services => "services",
            DashboardSection::Offers => "offers",
            DashboardSection::Jobs => "jobs",
            DashboardSection::Bids => "bids",
            DashboardSection::Orders => "orders",
            DashboardSection::Saved => "saved",
            DashboardSection::Reports => "reports",
            DashboardSection::Profile => "profile",
        }
    }

    /// Whether this section belongs to `role`'s dashboard.
    pub fn is_available_for(&self, role: Role) -> bool {
        sections_for(role).contains(self)
    }

    /// Sidebar label. The same section is labelled differently per portal;
    /// `None` when the section is not part of that portal.
    pub fn label_for(&self, role: Role) -> Option<&'static str> {
        use DashboardSection::*;

        let label = match (role, self) {
            (_, Overview) => "Overview",
            (_, Reports) => "Reports",
            (_, Profile) => "Profile",
            (Role::Farmer, Crops) => "My Crops",
            (Role::Farmer, Services) => "Service Requests",
            (Role::Farmer, Offers) => "Received Offers",
            (Role::ServiceProvider, Services) => "My Services",
            (Role::ServiceProvider, Jobs) => "Job Requests",
            (Role::ServiceProvider, Bids) => "My Bids",
            (Role::Buyer, Crops) => "Browse Crops",
            (Role::Buyer, Orders) => "My Orders",
            (Role::Buyer, Saved) => "Saved Items",
            _ => return None,
        };
        Some(label)
    }
}

impl fmt::Display for DashboardSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for DashboardSection {
    type Err = ViewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "overview" => Ok(DashboardSection::Overview),
            "crops" => Ok(DashboardSection::Crops),
            "services" => Ok(DashboardSection::Services),
            "offers" => Ok(DashboardSection::Offers),
            "jobs" => Ok(DashboardSection::Jobs),
            "bids" => Ok(DashboardSection::Bids),
            "orders" => Ok(DashboardSection::Orders),
            "saved" => Ok(DashboardSection::Saved),
            "reports" => Ok(DashboardSection::Reports),
            "profile" => Ok(DashboardSection::Profile),
            _ => Err(ViewError::UnknownSection(s.to_string())),
        }
    }
}

/// One entry of a dashboard sidebar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct NavItem {
    pub section: DashboardSection,
    pub label: String,
    pub active: bool,
}

/// Builds the sidebar for `role` with `active` highlighted.
pub fn nav_items(role: Role, active: DashboardSection) -> Vec<NavItem> {
    sections_for(role)
        .iter()
        .filter_map(|section| {
            section.label_for(role).map(|label| NavItem {
                section: *section,
                label: label.to_string(),
                active: *section == active,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_role_has_six_sections_starting_with_overview() {
        for role in Role::ALL {
            let sections = sections_for(role);
            assert_eq!(sections.len(), 6);
            assert_eq!(sections[0], DashboardSection::Overview);
        }
    }

    #[test]
    fn test_availability() {
        assert!(DashboardSection::Offers.is_available_for(Role::Farmer));
        assert!(!DashboardSection::Offers.is_available_for(Role::Buyer));
        assert!(DashboardSection::Services.is_available_for(Role::ServiceProvider));
        assert!(!DashboardSection::Services.is_available_for(Role::Buyer));
        assert!(DashboardSection::Saved.is_available_for(Role::Buyer));
        assert!(!DashboardSection::Jobs.is_available_for(Role::Farmer));
    }

    #[test]
    fn test_labels_only_exist_for_available_sections() {
        for role in Role::ALL {
            for section in [
                DashboardSection::Overview,
                DashboardSection::Crops,
                DashboardSection::Services,
                DashboardSection::Offers,
                DashboardSection::Jobs,
                DashboardSection::Bids,
                DashboardSection::Orders,
                DashboardSection::Saved,
                DashboardSection::Reports,
                DashboardSection::Profile,
            ] {
                assert_eq!(
                    section.label_for(role).is_some(),
                    section.is_available_for(role),
                    "{role} / {section}"
                );
            }
        }
    }

    #[test]
    fn test_parse_ids() {
        assert_eq!(
            "crops".parse::<DashboardSection>().unwrap(),
            DashboardSection::Crops
        );
        assert_eq!(
            " Saved ".parse::<DashboardSection>().unwrap(),
            DashboardSection::Saved
        );
        assert_eq!(
            "analytics".parse::<DashboardSection>(),
            Err(ViewError::UnknownSection("analytics".to_string()))
        );
    }

    #[test]
    fn test_nav_items_mark_active() {
        let items = nav_items(Role::Buyer, DashboardSection::Orders);
        let labels: Vec<&str> = items.iter().map(|i| i.label.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "Overview",
                "Browse Crops",
                "My Orders",
                "Saved Items",
                "Reports",
                "Profile"
            ]
        );
        let active: Vec<_> = items.iter().filter(|i| i.active).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].section, DashboardSection::Orders);
    }
}
