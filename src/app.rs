use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{delete, get, post},
    Router,
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route(
            "/api/day/:date",
            get(handlers::get_day)
                .put(handlers::save_day)
                .delete(handlers::reset_day),
        )
        .route("/api/days", get(handlers::get_days))
        .route("/api/stats", get(handlers::get_stats))
        .route(
            "/api/settings",
            get(handlers::get_settings).put(handlers::update_settings),
        )
        .route("/api/goals", get(handlers::get_goals).post(handlers::create_goal))
        .route("/api/goals/:id/progress", post(handlers::record_goal_progress))
        .route("/api/goals/:id", delete(handlers::delete_goal))
        .with_state(state)
}
