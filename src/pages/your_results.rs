use askama_axum::{IntoResponse, Template};
use axum::extract::State;

use crate::pages::PageContext;
use crate::state::AppState;

/// Template
/// HTML page definition with dynamic data
#[derive(Template)]
#[template(path = "your_results.html")]
pub struct YourResultsPage {
    ctx: PageContext,
}

/// GET /your_results handler - renders the personal results page
pub async fn get_handler(State(state): State<AppState>) -> impl IntoResponse {
    YourResultsPage {
        ctx: PageContext::from_config(&state.config),
    }
}
