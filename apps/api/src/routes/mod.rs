pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analysis::handlers::handle_analyze_resume;
use crate::interview::handlers::handle_interview;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::ping_handler))
        .route("/ping", get(health::ping_handler))
        .route("/analyze_resume", post(handle_analyze_resume))
        .route("/interview", post(handle_interview))
        .with_state(state)
}
