//! Handlers for idea generation.
//!
//! Request bodies are read leniently: anything that is not a JSON object
//! counts as an empty selection, and missing fields take their defaults.
//! Only a value that does not name a catalog entry is rejected.

use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use ideaplanner_core::composer::{generate_idea, random_selection, Idea, RngChoice, Selection};
use ideaplanner_core::error::CoreError;
use serde::Serialize;
use serde_json::Value;

use crate::error::AppResult;
use crate::state::AppState;

/// Response for a randomly chosen selection.
#[derive(Debug, Serialize)]
pub struct SurpriseResponse {
    pub selection: Selection,
    pub idea: Idea,
}

/// Merge a raw request body over the default selection.
///
/// A field holding anything other than a JSON string is reported as an
/// unknown option, with the value rendered as JSON.
pub fn selection_from_body(body: &[u8]) -> Result<Selection, CoreError> {
    let mut selection = Selection::default();

    let Ok(Value::Object(payload)) = serde_json::from_slice::<Value>(body) else {
        return Ok(selection);
    };

    let fields = [
        ("theme", &mut selection.theme),
        ("platform", &mut selection.platform),
        ("tone", &mut selection.tone),
        ("pacing", &mut selection.pacing),
    ];

    for (field, slot) in fields {
        match payload.get(field) {
            None => {}
            Some(Value::String(value)) => *slot = value.clone(),
            Some(other) => {
                return Err(CoreError::UnknownOption {
                    field,
                    value: other.to_string(),
                })
            }
        }
    }

    Ok(selection)
}

/// POST /api/ideas
///
/// Generate an idea from a (possibly partial) selection.
pub async fn create_idea(State(state): State<AppState>, body: Bytes) -> AppResult<Json<Idea>> {
    let selection = selection_from_body(&body)?;
    let idea = generate_idea(&state.catalog, &selection, &mut RngChoice(rand::rng()))?;

    tracing::info!(
        theme = %selection.theme,
        platform = %selection.platform,
        tone = %selection.tone,
        pacing = %selection.pacing,
        title = %idea.title,
        "Idea generated",
    );

    Ok(Json(idea))
}

/// POST /api/ideas/surprise
///
/// Pick every selection field at random and generate an idea from it.
pub async fn surprise_idea(State(state): State<AppState>) -> AppResult<Json<SurpriseResponse>> {
    let mut source = RngChoice(rand::rng());
    let selection = random_selection(&state.catalog, &mut source);
    let idea = generate_idea(&state.catalog, &selection, &mut source)?;

    tracing::info!(
        theme = %selection.theme,
        platform = %selection.platform,
        tone = %selection.tone,
        pacing = %selection.pacing,
        "Surprise idea generated",
    );

    Ok(Json(SurpriseResponse { selection, idea }))
}
