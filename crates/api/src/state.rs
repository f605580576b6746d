use std::sync::Arc;

use ideaplanner_core::catalog::Catalog;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; the catalog is read-only after startup.
#[derive(Clone)]
pub struct AppState {
    /// Option catalog ideas are composed from.
    pub catalog: Arc<Catalog>,
}

impl AppState {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }
}
