//! API route definitions

mod health;
mod news;

use axum::Router;
use crate::AppState;

/// Create all routes
pub fn routes() -> Router<AppState> {
    Router::new().merge(news::routes()).merge(health::routes())
}
