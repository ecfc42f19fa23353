use crate::board;
use crate::errors::AppError;
use crate::models::{PlanningView, ScheduleOverride, ScheduleUpdate, TeamMember, UserCreate};
use crate::state::AppState;
use crate::storage::persist_data;
use crate::ui;
use crate::window::WindowBounds;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, Redirect},
    Json,
};
use chrono::{Local, NaiveDate};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;

pub async fn index() -> Redirect {
    Redirect::to("/planning")
}

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub async fn planning_page() -> Html<String> {
    Html(ui::render_planning_page(today()))
}

pub async fn users_page() -> Html<String> {
    Html(ui::render_users_page())
}

pub async fn list_users(State(state): State<AppState>) -> Json<Vec<TeamMember>> {
    let data = state.data.lock().await;
    Json(data.users_by_name())
}

pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<UserCreate>,
) -> Result<(StatusCode, Json<TeamMember>), AppError> {
    let name = payload.name.trim();
    let email = payload.email.trim();
    if name.is_empty() || email.is_empty() {
        return Err(AppError::bad_request("name and email are required"));
    }

    let mut data = state.data.lock().await;
    let user = data.add_user(name.to_string(), email.to_string());
    persist_data(&state.data_path, &data).await?;

    info!("created user {}", user.email);
    Ok((StatusCode::CREATED, Json(user)))
}

#[derive(Debug, Deserialize)]
pub struct ScheduleRangeQuery {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

pub async fn get_schedule(
    State(state): State<AppState>,
    Query(range): Query<ScheduleRangeQuery>,
) -> Result<Json<Vec<ScheduleOverride>>, AppError> {
    if range.start > range.end {
        return Err(AppError::bad_request("start date must precede end"));
    }

    let data = state.data.lock().await;
    Ok(Json(data.overrides_in_range(range.start, range.end)))
}

/// Upserts one override. Office clears the stored entry, so the response
/// list is empty exactly when the day fell back to the default.
pub async fn put_schedule(
    State(state): State<AppState>,
    Json(update): Json<ScheduleUpdate>,
) -> Result<Json<Vec<ScheduleOverride>>, AppError> {
    let mut data = state.data.lock().await;
    let stored = data.apply_override(update);
    persist_data(&state.data_path, &data).await?;

    match &stored {
        Some(entry) => info!(
            "set {} for user {} on {}",
            entry.status.as_str(),
            entry.user_id,
            entry.day
        ),
        None => info!("cleared schedule for user {} on {}", update.user_id, update.day),
    }

    Ok(Json(stored.into_iter().collect()))
}

#[derive(Debug, Deserialize)]
pub struct PlanningQuery {
    pub anchor: Option<NaiveDate>,
}

pub async fn get_planning(
    State(state): State<AppState>,
    Query(query): Query<PlanningQuery>,
) -> Json<PlanningView> {
    let today = today();
    let bounds = WindowBounds::for_today(today);
    let anchor = query.anchor.unwrap_or(today);

    let data = state.data.lock().await;
    Json(board::build_view(&data.users, anchor, &data.overrides, &bounds))
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}
