use askama_axum::{IntoResponse, Template};
use axum::extract::State;

use crate::pages::PageContext;
use crate::state::AppState;

/// Template
/// HTML page definition with dynamic data
#[derive(Template)]
#[template(path = "results.html")]
pub struct ResultsPage {
    ctx: PageContext,
}

/// GET /results handler - renders the collective results page
pub async fn get_handler(State(state): State<AppState>) -> impl IntoResponse {
    ResultsPage {
        ctx: PageContext::from_config(&state.config),
    }
}
