use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health))
        .route("/planning", get(handlers::planning_page))
        .route("/users", get(handlers::users_page))
        .route(
            "/api/users",
            get(handlers::list_users).post(handlers::create_user),
        )
        .route(
            "/api/schedule",
            get(handlers::get_schedule).put(handlers::put_schedule),
        )
        .route("/api/planning", get(handlers::get_planning))
        .with_state(state)
}
