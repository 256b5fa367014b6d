//! # farmconnect-catalog: Dashboard Data Provider
//!
//! Serves the records shown on each role's dashboard from a JSON dataset.
//!
//! ## Where Data Comes From
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   data/demo.json ──include_str!──► Catalog::demo()                     │
//! │                                                                         │
//! │   [catalog] path = "…" ──read──►  Catalog::from_path()                 │
//! │                                        │                                │
//! │                                        ▼                                │
//! │                              impl DataProvider for Catalog             │
//! │                                        │                                │
//! │                                        ▼                                │
//! │                          SessionController::screen(&catalog)           │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A loaded catalog is immutable. Every accessor hands back a fresh copy so
//! screens never alias catalog storage.
//!
//! ## Dataset Format
//! ```json
//! {
//!   "farmer":          { "stats": [...], "activities": [...] },
//!   "serviceProvider": { "stats": [...], "activities": [...] },
//!   "buyer":           { "stats": [...], "activities": [...] },
//!   "cropListings": [...], "serviceRequests": [...], "offers": [...],
//!   "serviceListings": [...], "jobRequests": [...], "bids": [...],
//!   "marketListings": [...], "orders": [...], "savedCrops": [...]
//! }
//! ```
//! Every list may be omitted (treated as empty) except the per-role stats.

pub mod error;

use std::path::Path;

use farmconnect_core::records::{
    Activity, Bid, CropListing, DataProvider, JobRequest, MarketListing, Offer, Order, SavedCrop,
    ServiceListing, ServiceRequest, StatCard,
};
use farmconnect_core::Role;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

pub use error::{CatalogError, CatalogResult};

/// The dataset compiled into the binary.
const DEMO_DATASET: &str = include_str!("../data/demo.json");

// =============================================================================
// Dataset
// =============================================================================

/// Overview data for one role.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleOverview {
    #[serde(default)]
    pub stats: Vec<StatCard>,
    #[serde(default)]
    pub activities: Vec<Activity>,
}

/// On-disk shape of a catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Dataset {
    pub farmer: RoleOverview,
    pub service_provider: RoleOverview,
    pub buyer: RoleOverview,

    pub crop_listings: Vec<CropListing>,
    pub service_requests: Vec<ServiceRequest>,
    pub offers: Vec<Offer>,

    pub service_listings: Vec<ServiceListing>,
    pub job_requests: Vec<JobRequest>,
    pub bids: Vec<Bid>,

    pub market_listings: Vec<MarketListing>,
    pub orders: Vec<Order>,
    pub saved_crops: Vec<SavedCrop>,
}

impl Dataset {
    pub fn overview(&self, role: Role) -> &RoleOverview {
        match role {
            Role::Farmer => &self.farmer,
            Role::ServiceProvider => &self.service_provider,
            Role::Buyer => &self.buyer,
        }
    }

    /// Every role must at least have overview stats.
    fn validate(&self) -> CatalogResult<()> {
        for role in Role::ALL {
            if self.overview(role).stats.is_empty() {
                return Err(CatalogError::MissingRole(role));
            }
        }
        Ok(())
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// Immutable [`DataProvider`] backed by a [`Dataset`].
#[derive(Debug, Clone)]
pub struct Catalog {
    dataset: Dataset,
}

impl Catalog {
    /// The bundled demo dashboards.
    pub fn demo() -> CatalogResult<Self> {
        Self::from_json(DEMO_DATASET)
    }

    /// Parses and validates a dataset from JSON text.
    pub fn from_json(json: &str) -> CatalogResult<Self> {
        let dataset: Dataset = serde_json::from_str(json)?;
        Self::from_dataset(dataset)
    }

    /// Reads a dataset file.
    pub fn from_path(path: impl AsRef<Path>) -> CatalogResult<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "Loading catalog");

        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let catalog = Self::from_json(&json)?;
        info!(path = %path.display(), "Catalog loaded");
        Ok(catalog)
    }

    pub fn from_dataset(dataset: Dataset) -> CatalogResult<Self> {
        dataset.validate()?;
        Ok(Catalog { dataset })
    }

    /// File if one is given, otherwise the bundled demo.
    pub fn load(path: Option<&Path>) -> CatalogResult<Self> {
        match path {
            Some(path) => Self::from_path(path),
            None => Self::demo(),
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }
}

impl DataProvider for Catalog {
    fn stats(&self, role: Role) -> Vec<StatCard> {
        self.dataset.overview(role).stats.clone()
    }

    fn activities(&self, role: Role) -> Vec<Activity> {
        self.dataset.overview(role).activities.clone()
    }

    fn crop_listings(&self) -> Vec<CropListing> {
        self.dataset.crop_listings.clone()
    }

    fn service_requests(&self) -> Vec<ServiceRequest> {
        self.dataset.service_requests.clone()
    }

    fn offers(&self) -> Vec<Offer> {
        self.dataset.offers.clone()
    }

    fn service_listings(&self) -> Vec<ServiceListing> {
        self.dataset.service_listings.clone()
    }

    fn job_requests(&self) -> Vec<JobRequest> {
        self.dataset.job_requests.clone()
    }

    fn bids(&self) -> Vec<Bid> {
        self.dataset.bids.clone()
    }

    fn market_listings(&self) -> Vec<MarketListing> {
        self.dataset.market_listings.clone()
    }

    fn orders(&self) -> Vec<Order> {
        self.dataset.orders.clone()
    }

    fn saved_crops(&self) -> Vec<SavedCrop> {
        self.dataset.saved_crops.clone()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
