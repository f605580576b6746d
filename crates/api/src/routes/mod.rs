pub mod health;

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{ideas, options};
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// GET  /options          option labels for the planner UI
/// POST /ideas            generate an idea from a partial selection
/// POST /ideas/surprise   generate an idea from a random selection
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/options", get(options::list_options))
        .route("/ideas", post(ideas::create_idea))
        .route("/ideas/surprise", post(ideas::surprise_idea))
}
