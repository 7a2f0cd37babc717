//! Route definitions for the `/nurses` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::nurse;
use crate::state::AppState;

/// Routes mounted at `/nurses`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(nurse::list).post(nurse::create))
}
