pub mod health;
pub mod nurse;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /nurses        list (GET), create (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/nurses", nurse::router())
}
