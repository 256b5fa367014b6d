//! # Screen Derivation
//!
//! Maps controller state plus provider data to the one screen the portal
//! shows. The mapping is total: every controller state yields exactly one
//! [`Screen`].
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  no session, route = Login  ──►  Screen::Login(LoginView)              │
//! │  no session, otherwise      ──►  Screen::Home                          │
//! │  session(role), section     ──►  Screen::Dashboard(DashboardView)      │
//! │                                    └── content: SectionContent         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::auth::demo_account;
use crate::controller::SessionController;
use crate::records::{
    Activity, Bid, CropListing, DataProvider, JobRequest, MarketListing, Offer, Order, SavedCrop,
    ServiceListing, ServiceRequest, StatCard,
};
use crate::role::{PortalInfo, Role};
use crate::router::{Route, Router};
use crate::section::{nav_items, DashboardSection, NavItem};
use crate::session::{AuthMode, LoginScreen};

// =============================================================================
// Screen Types
// =============================================================================

/// The page the portal currently shows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "screen", content = "view", rename_all = "snake_case")]
pub enum Screen {
    Home,
    Login(LoginView),
    Dashboard(DashboardView),
}

/// Credentials printed under the sign-in form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct DemoHint {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LoginView {
    /// Every portal tab, in display order.
    pub portals: Vec<PortalInfo>,
    /// The selected tab's card.
    pub portal: PortalInfo,
    pub login: LoginScreen,
    /// Only present in sign-in mode.
    pub demo_hint: Option<DemoHint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub role: Role,
    pub section: DashboardSection,
    pub nav: Vec<NavItem>,
    pub sidebar_open: bool,
    pub sign_out_confirm_open: bool,
    pub content: SectionContent,
}

/// Body of the active dashboard section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "kind", content = "items", rename_all = "snake_case")]
pub enum SectionContent {
    Overview {
        stats: Vec<StatCard>,
        activities: Vec<Activity>,
    },
    CropListings(Vec<CropListing>),
    ServiceRequests(Vec<ServiceRequest>),
    Offers(Vec<Offer>),
    ServiceListings(Vec<ServiceListing>),
    JobRequests(Vec<JobRequest>),
    Bids(Vec<Bid>),
    MarketListings(Vec<MarketListing>),
    Orders(Vec<Order>),
    SavedCrops(Vec<SavedCrop>),
    Placeholder {
        title: String,
    },
}

impl SectionContent {
    /// Content for `section` of `role`'s dashboard.
    ///
    /// Pairs outside the role's section set cannot be reached through the
    /// controller; they render the overview.
    pub fn derive(role: Role, section: DashboardSection, provider: &dyn DataProvider) -> Self {
        use DashboardSection as S;

        match (role, section) {
            (Role::Farmer, S::Crops) => SectionContent::CropListings(provider.crop_listings()),
            (Role::Farmer, S::Services) => {
                SectionContent::ServiceRequests(provider.service_requests())
            }
            (Role::Farmer, S::Offers) => SectionContent::Offers(provider.offers()),

            (Role::ServiceProvider, S::Services) => {
                SectionContent::ServiceListings(provider.service_listings())
            }
            (Role::ServiceProvider, S::Jobs) => {
                SectionContent::JobRequests(provider.job_requests())
            }
            (Role::ServiceProvider, S::Bids) => SectionContent::Bids(provider.bids()),

            (Role::Buyer, S::Crops) => SectionContent::MarketListings(provider.market_listings()),
            (Role::Buyer, S::Orders) => SectionContent::Orders(provider.orders()),
            (Role::Buyer, S::Saved) => SectionContent::SavedCrops(provider.saved_crops()),

            (_, S::Reports) | (_, S::Profile) => SectionContent::Placeholder {
                title: section.label_for(role).unwrap_or_default().to_string(),
            },

            _ => SectionContent::Overview {
                stats: provider.stats(role),
                activities: provider.activities(role),
            },
        }
    }
}

// =============================================================================
// Derivation
// =============================================================================

impl LoginView {
    pub fn new(login: LoginScreen) -> Self {
        let demo_hint = match login.mode {
            AuthMode::SignIn => {
                let account = demo_account(login.portal);
                Some(DemoHint {
                    email: account.email.to_string(),
                    password: account.password.to_string(),
                })
            }
            AuthMode::SignUp => None,
        };

        LoginView {
            portals: Role::ALL.iter().map(Role::portal).collect(),
            portal: login.portal.portal(),
            login,
            demo_hint,
        }
    }
}

impl<R: Router> SessionController<R> {
    /// Derives the current screen.
    pub fn screen(&self, provider: &dyn DataProvider) -> Screen {
        let Some(role) = self.role() else {
            return match self.route() {
                Route::Login => Screen::Login(LoginView::new(self.login_screen())),
                _ => Screen::Home,
            };
        };

        let section = self.section();
        let overlay = self.overlay();

        Screen::Dashboard(DashboardView {
            role,
            section,
            nav: nav_items(role, section),
            sidebar_open: overlay.sidebar_open,
            sign_out_confirm_open: overlay.sign_out_confirm_open,
            content: SectionContent::derive(role, section, provider),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::Credentials;
    use crate::records::{ActivityStatus, ListingStatus};
    use crate::router::HistoryRouter;
    use crate::section::sections_for;

    /// Provider with one overview entry per role and one farmer listing.
    struct Fixture;

    impl DataProvider for Fixture {
        fn stats(&self, role: Role) -> Vec<StatCard> {
            vec![StatCard {
                title: format!("{role} stat"),
                value: "1".to_string(),
                change: "+1".to_string(),
            }]
        }
        fn activities(&self, _role: Role) -> Vec<Activity> {
            vec![Activity {
                kind: "crop".to_string(),
                message: "Wheat harvest completed".to_string(),
                time: "2 hours ago".to_string(),
                status: ActivityStatus::Success,
            }]
        }
        fn crop_listings(&self) -> Vec<CropListing> {
            vec![CropListing {
                id: 1,
                name: "Wheat".to_string(),
                quantity: "500 kg".to_string(),
                price: "$1.20/kg".to_string(),
                status: ListingStatus::Active,
                image: "🌾".to_string(),
            }]
        }
        fn service_requests(&self) -> Vec<ServiceRequest> {
            Vec::new()
        }
        fn offers(&self) -> Vec<Offer> {
            Vec::new()
        }
        fn service_listings(&self) -> Vec<ServiceListing> {
            Vec::new()
        }
        fn job_requests(&self) -> Vec<JobRequest> {
            Vec::new()
        }
        fn bids(&self) -> Vec<Bid> {
            Vec::new()
        }
        fn market_listings(&self) -> Vec<MarketListing> {
            Vec::new()
        }
        fn orders(&self) -> Vec<Order> {
            Vec::new()
        }
        fn saved_crops(&self) -> Vec<SavedCrop> {
            Vec::new()
        }
    }

    fn signed_in(role: Role) -> SessionController<HistoryRouter> {
        let mut c = SessionController::new(HistoryRouter::new());
        let account = demo_account(role);
        c.attempt_sign_in(role, Credentials::new(account.email, account.password))
            .unwrap();
        c
    }

    #[test]
    fn test_home_then_login() {
        let mut c = SessionController::new(HistoryRouter::new());
        assert_eq!(c.screen(&Fixture), Screen::Home);

        c.open_login();
        c.select_portal(Role::Buyer);
        let Screen::Login(view) = c.screen(&Fixture) else {
            panic!("expected login screen");
        };
        assert_eq!(view.portals.len(), 3);
        assert_eq!(view.portal.title, "Buyer Portal");
        assert_eq!(
            view.demo_hint.map(|h| h.email),
            Some("buyer@demo.com".to_string())
        );

        c.set_auth_mode(AuthMode::SignUp);
        let Screen::Login(view) = c.screen(&Fixture) else {
            panic!("expected login screen");
        };
        assert!(view.demo_hint.is_none());
    }

    #[test]
    fn test_every_reachable_section_has_a_screen() {
        for role in Role::ALL {
            let mut c = signed_in(role);
            for section in sections_for(role) {
                c.select_section(*section).unwrap();
                let Screen::Dashboard(view) = c.screen(&Fixture) else {
                    panic!("expected dashboard");
                };
                assert_eq!(view.role, role);
                assert_eq!(view.section, *section);
                assert_eq!(view.nav.iter().filter(|n| n.active).count(), 1);
            }
        }
    }

    #[test]
    fn test_content_per_section() {
        let mut c = signed_in(Role::Farmer);
        let Screen::Dashboard(view) = c.screen(&Fixture) else {
            panic!("expected dashboard");
        };
        assert!(matches!(
            view.content,
            SectionContent::Overview { ref stats, .. } if stats[0].title == "farmer stat"
        ));

        c.select_section(DashboardSection::Crops).unwrap();
        let Screen::Dashboard(view) = c.screen(&Fixture) else {
            panic!("expected dashboard");
        };
        assert!(matches!(view.content, SectionContent::CropListings(ref l) if l.len() == 1));

        c.select_section(DashboardSection::Reports).unwrap();
        let Screen::Dashboard(view) = c.screen(&Fixture) else {
            panic!("expected dashboard");
        };
        assert_eq!(
            view.content,
            SectionContent::Placeholder {
                title: "Reports".to_string()
            }
        );
    }

    #[test]
    fn test_unreachable_pair_renders_overview() {
        let content = SectionContent::derive(Role::Buyer, DashboardSection::Bids, &Fixture);
        assert!(matches!(content, SectionContent::Overview { .. }));
    }

    #[test]
    fn test_dashboard_reflects_overlays() {
        let mut c = signed_in(Role::ServiceProvider);
        c.toggle_sidebar();
        c.request_sign_out();
        let Screen::Dashboard(view) = c.screen(&Fixture) else {
            panic!("expected dashboard");
        };
        assert!(view.sidebar_open);
        assert!(view.sign_out_confirm_open);

        c.confirm_sign_out();
        assert_eq!(c.screen(&Fixture), Screen::Home);
    }

    #[test]
    fn test_screen_json_shape() {
        let json = serde_json::to_value(Screen::Home).unwrap();
        assert_eq!(json, serde_json::json!({ "screen": "home" }));

        let c = signed_in(Role::Buyer);
        let json = serde_json::to_value(c.screen(&Fixture)).unwrap();
        assert_eq!(json["screen"], "dashboard");
        assert_eq!(json["view"]["role"], "buyer");
        assert_eq!(json["view"]["content"]["kind"], "overview");
    }
}
