//! # Catalog State
//!
//! Shared handle to the dashboard dataset loaded at startup.

use std::sync::Arc;

use farmconnect_catalog::Catalog;

/// Read-only dashboard data.
#[derive(Debug, Clone)]
pub struct CatalogState {
    catalog: Arc<Catalog>,
}

impl CatalogState {
    pub fn new(catalog: Catalog) -> Self {
        CatalogState {
            catalog: Arc::new(catalog),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}
