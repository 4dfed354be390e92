use askama_axum::{IntoResponse, Template};
use axum::extract::State;

use crate::pages::PageContext;
use crate::state::AppState;

/// Template
/// HTML page definition with dynamic data
#[derive(Template)]
#[template(path = "index.html")]
pub struct HomePage {
    ctx: PageContext,
}

/// GET / handler - renders the home page
pub async fn get_handler(State(state): State<AppState>) -> impl IntoResponse {
    HomePage {
        ctx: PageContext::from_config(&state.config),
    }
}
