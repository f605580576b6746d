//! Handler for the option listing used to populate the planner UI.

use axum::extract::State;
use axum::Json;
use ideaplanner_core::catalog::{display_label, Catalog};
use indexmap::IndexMap;
use serde::Serialize;

use crate::state::AppState;

/// Display labels keyed by identifier, in catalog declaration order.
#[derive(Debug, Serialize)]
pub struct OptionsResponse {
    pub themes: IndexMap<&'static str, String>,
    pub platforms: IndexMap<&'static str, String>,
    pub tones: IndexMap<&'static str, String>,
    pub pacings: IndexMap<&'static str, String>,
}

impl OptionsResponse {
    pub fn from_catalog(catalog: &Catalog) -> Self {
        Self {
            themes: catalog
                .themes()
                .iter()
                .map(|t| (t.id, display_label(t.id)))
                .collect(),
            platforms: catalog
                .platforms()
                .iter()
                .map(|p| (p.id, p.name.to_string()))
                .collect(),
            tones: catalog
                .tones()
                .iter()
                .map(|t| (t.id, display_label(t.id)))
                .collect(),
            pacings: catalog
                .pacings()
                .iter()
                .map(|p| (p.id, p.label.to_string()))
                .collect(),
        }
    }
}

/// GET /api/options
pub async fn list_options(State(state): State<AppState>) -> Json<OptionsResponse> {
    Json(OptionsResponse::from_catalog(&state.catalog))
}
