use axum::Router;
use tower_http::services::ServeDir;

use crate::config::Config;
use crate::routes;
use crate::state::AppState;

/// Static asset mounts: one `ServeDir` per asset class, rooted under
/// `Config::static_dir`.
///
/// `ServeDir` owns the filesystem contract for these routes: it infers the
/// content type from the file extension, answers 404 for anything that does
/// not resolve to a file inside its root, and rejects `..` path segments so
/// a request can never escape the configured directory.
pub fn routes(config: &Config) -> Router<AppState> {
    Router::new()
        .nest_service(
            routes::IMAGES,
            ServeDir::new(config.static_dir.join("images")),
        )
        .nest_service(routes::CSS, ServeDir::new(config.static_dir.join("css")))
        .nest_service(routes::JS, ServeDir::new(config.static_dir.join("js")))
}
