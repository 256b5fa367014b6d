//! # Dashboard Records
//!
//! Read-only display records supplied by the [`DataProvider`] collaborator.
//!
//! Values such as prices and quantities arrive already formatted for
//! display (`"$1.20/kg"`, `"500 kg"`). The controller never validates,
//! transforms, paginates, or caches them.
//!
//! ## Which Dashboard Shows What
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Farmer            ServiceProvider       Buyer                          │
//! │  ───────────────   ───────────────────   ──────────────────             │
//! │  StatCard          StatCard              StatCard                       │
//! │  Activity          Activity              Activity                       │
//! │  CropListing       ServiceListing        MarketListing                  │
//! │  ServiceRequest    JobRequest            Order                          │
//! │  Offer             Bid                   SavedCrop                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::role::Role;

// =============================================================================
// Overview Records
// =============================================================================

/// A headline metric on the overview page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct StatCard {
    pub title: String,
    pub value: String,
    /// Change since last period, e.g. `"+2"` or `"+15%"`.
    pub change: String,
}

/// Outcome marker on an activity feed entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ActivityStatus {
    Success,
    Pending,
}

/// An entry of the recent-activity feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    /// Free-form category (`"crop"`, `"bid"`, `"payment"`, ...).
    pub kind: String,
    pub message: String,
    /// Relative time as displayed, e.g. `"2 hours ago"`.
    pub time: String,
    pub status: ActivityStatus,
}

// =============================================================================
// Farmer Records
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ListingStatus {
    Active,
    Pending,
    Sold,
}

/// A crop the farmer has listed for sale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CropListing {
    pub id: u32,
    pub name: String,
    pub quantity: String,
    pub price: String,
    pub status: ListingStatus,
    pub image: String,
}

/// Lifecycle of a vehicle/manpower/equipment request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    Pending,
    Active,
    Completed,
}

/// What kind of help a request or service is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum ServiceKind {
    Vehicle,
    Manpower,
    Equipment,
}

/// A farmer's request for a service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ServiceRequest {
    pub id: u32,
    pub kind: ServiceKind,
    pub description: String,
    pub location: String,
    pub duration: String,
    pub status: RequestStatus,
}

/// Outcome of an offer or a bid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum DecisionStatus {
    Pending,
    Accepted,
    Rejected,
}

/// A buyer's offer on one of the farmer's crops.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    pub id: u32,
    pub crop: String,
    pub buyer: String,
    pub price: String,
    pub quantity: String,
    pub status: DecisionStatus,
}

// =============================================================================
// Service Provider Records
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ServiceStatus {
    Active,
    Inactive,
}

/// A service the provider offers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ServiceListing {
    pub id: u32,
    pub kind: ServiceKind,
    pub name: String,
    pub description: String,
    pub rate: String,
    pub status: ServiceStatus,
    pub image: String,
}

/// A farmer's request as seen by providers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct JobRequest {
    pub id: u32,
    pub farmer: String,
    pub kind: ServiceKind,
    pub description: String,
    pub location: String,
    pub duration: String,
    pub budget: String,
    pub status: RequestStatus,
}

/// A provider's bid on a job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Bid {
    pub id: u32,
    pub job: String,
    pub farmer: String,
    pub bid_amount: String,
    pub original_budget: String,
    pub status: DecisionStatus,
}

// =============================================================================
// Buyer Records
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Availability {
    Available,
    Limited,
}

/// A crop on the marketplace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct MarketListing {
    pub id: u32,
    pub name: String,
    pub farmer: String,
    pub quantity: String,
    pub price: String,
    pub status: Availability,
    pub image: String,
    /// Farmer rating out of 5.
    pub rating: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Processing,
    Confirmed,
    Shipped,
}

/// A buyer's order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: u32,
    pub crop: String,
    pub farmer: String,
    pub quantity: String,
    pub total_price: String,
    pub status: OrderStatus,
    pub delivery_date: String,
}

/// A wishlist entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SavedCrop {
    pub id: u32,
    pub crop: String,
    pub farmer: String,
    pub price: String,
    pub saved_date: String,
    pub image: String,
}

// =============================================================================
// Data Provider
// =============================================================================

/// Supplier of dashboard collections.
///
/// Implementations hand back already-materialized, already-valid lists;
/// role-specific lists are only requested for their own role's dashboard.
pub trait DataProvider {
    fn stats(&self, role: Role) -> Vec<StatCard>;
    fn activities(&self, role: Role) -> Vec<Activity>;

    fn crop_listings(&self) -> Vec<CropListing>;
    fn service_requests(&self) -> Vec<ServiceRequest>;
    fn offers(&self) -> Vec<Offer>;

    fn service_listings(&self) -> Vec<ServiceListing>;
    fn job_requests(&self) -> Vec<JobRequest>;
    fn bids(&self) -> Vec<Bid>;

    fn market_listings(&self) -> Vec<MarketListing>;
    fn orders(&self) -> Vec<Order>;
    fn saved_crops(&self) -> Vec<SavedCrop>;
}
