// Route path constants - single source of truth for all site paths

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::assets;
use crate::pages;
use crate::state::AppState;

pub const HOME: &str = "/";
pub const TAKE_TEST: &str = "/take_test";
pub const RESULTS: &str = "/results";
pub const YOUR_RESULTS: &str = "/your_results";

pub const IMAGES: &str = "/images";
pub const CSS: &str = "/css";
pub const JS: &str = "/js";

/// Build the application router: the four page routes, the static asset
/// mounts, and request tracing on top.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(HOME, get(pages::home::get_handler))
        .route(TAKE_TEST, get(pages::take_test::get_handler))
        .route(RESULTS, get(pages::results::get_handler))
        .route(YOUR_RESULTS, get(pages::your_results::get_handler))
        .merge(assets::routes(&state.config))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
