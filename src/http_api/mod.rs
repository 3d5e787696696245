use std::{net::SocketAddr, sync::Arc};

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::{Activity, LongDisplayRow, Scheduler, SchedulerError, ShortDisplayRow};

/// Shared handle to a single scheduler. Mutating handlers hold the write guard for the whole
/// duplicate/conflict scan and append.
#[derive(Clone)]
pub struct AppState {
    scheduler: Arc<RwLock<Scheduler>>,
}

impl AppState {
    pub fn new(scheduler: Scheduler) -> Self {
        Self {
            scheduler: Arc::new(RwLock::new(scheduler)),
        }
    }

    pub fn with_shared(scheduler: Arc<RwLock<Scheduler>>) -> Self {
        Self { scheduler }
    }

    fn scheduler(&self) -> Arc<RwLock<Scheduler>> {
        self.scheduler.clone()
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
    message: String,
}

#[derive(Debug)]
enum ApiError {
    NotFound(String),
    Conflict(String),
    Invalid(String),
    Internal(String),
}

impl ApiError {
    fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound(message.into())
    }

    fn internal(message: impl Into<String>) -> Self {
        ApiError::Internal(message.into())
    }
}

impl From<SchedulerError> for ApiError {
    fn from(value: SchedulerError) -> Self {
        match value {
            SchedulerError::AlreadyEnrolled(_)
            | SchedulerError::DuplicateEvent(_)
            | SchedulerError::Conflict { .. } => ApiError::Conflict(value.to_string()),
            SchedulerError::InvalidTitle | SchedulerError::Activity(_) => {
                ApiError::Invalid(value.to_string())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error, message) = match self {
            ApiError::NotFound(message) => (StatusCode::NOT_FOUND, "not_found", message),
            ApiError::Conflict(message) => (StatusCode::CONFLICT, "conflict", message),
            ApiError::Invalid(message) => (StatusCode::BAD_REQUEST, "invalid_request", message),
            ApiError::Internal(message) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", message)
            }
        };
        (status, Json(ErrorBody { error, message })).into_response()
    }
}

#[derive(Debug, Deserialize)]
struct AddCoursePayload {
    name: String,
    section: String,
}

#[derive(Debug, Deserialize)]
struct AddEventPayload {
    title: String,
    meeting_days: String,
    start_time: i32,
    end_time: i32,
    weekly_repeat: i32,
    #[serde(default)]
    event_details: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct TitlePayload {
    title: Option<String>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/catalog", get(course_catalog))
        .route("/schedule", get(schedule))
        .route("/schedule/full", get(full_schedule))
        .route("/schedule/courses", post(add_course))
        .route("/schedule/events", post(add_event))
        .route("/schedule/reset", post(reset_schedule))
        .route("/schedule/:index", delete(remove_activity))
        .route("/title", get(get_title).put(update_title))
        .with_state(state)
}

pub async fn serve(addr: SocketAddr, scheduler: Scheduler) -> std::io::Result<()> {
    let state = AppState::new(scheduler);
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await
}

async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

async fn course_catalog(State(state): State<AppState>) -> Json<Vec<ShortDisplayRow>> {
    let scheduler = state.scheduler();
    let rows = scheduler.read().course_catalog_view();
    Json(rows)
}

async fn schedule(State(state): State<AppState>) -> Json<Vec<ShortDisplayRow>> {
    let scheduler = state.scheduler();
    let rows = scheduler.read().schedule_view();
    Json(rows)
}

async fn full_schedule(State(state): State<AppState>) -> Json<Vec<LongDisplayRow>> {
    let scheduler = state.scheduler();
    let rows = scheduler.read().full_schedule_view();
    Json(rows)
}

fn last_added(scheduler: &Scheduler) -> Option<Activity> {
    scheduler.schedule().last().cloned()
}

async fn add_course(
    State(state): State<AppState>,
    Json(payload): Json<AddCoursePayload>,
) -> Result<(StatusCode, Json<Activity>), ApiError> {
    let scheduler = state.scheduler();
    let added = {
        let mut guard = scheduler.write();
        if !guard.add_course(&payload.name, &payload.section)? {
            return Err(ApiError::not_found(format!(
                "course {} section {} not found in catalog",
                payload.name, payload.section
            )));
        }
        last_added(&guard)
    };
    added
        .map(|activity| (StatusCode::CREATED, Json(activity)))
        .ok_or_else(|| ApiError::internal("course missing after insertion"))
}

async fn add_event(
    State(state): State<AppState>,
    Json(payload): Json<AddEventPayload>,
) -> Result<(StatusCode, Json<Activity>), ApiError> {
    let scheduler = state.scheduler();
    let added = {
        let mut guard = scheduler.write();
        guard.add_event(
            &payload.title,
            &payload.meeting_days,
            payload.start_time,
            payload.end_time,
            payload.weekly_repeat,
            &payload.event_details,
        )?;
        last_added(&guard)
    };
    added
        .map(|activity| (StatusCode::CREATED, Json(activity)))
        .ok_or_else(|| ApiError::internal("event missing after insertion"))
}

async fn remove_activity(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> Result<StatusCode, ApiError> {
    let scheduler = state.scheduler();
    let removed = scheduler.write().remove_activity(index);
    if !removed {
        return Err(ApiError::not_found(format!(
            "no scheduled activity at position {index}"
        )));
    }
    Ok(StatusCode::NO_CONTENT)
}

async fn reset_schedule(State(state): State<AppState>) -> StatusCode {
    let scheduler = state.scheduler();
    scheduler.write().reset_schedule();
    StatusCode::NO_CONTENT
}

async fn get_title(State(state): State<AppState>) -> Json<TitlePayload> {
    let scheduler = state.scheduler();
    let title = scheduler.read().title().to_string();
    Json(TitlePayload { title: Some(title) })
}

async fn update_title(
    State(state): State<AppState>,
    Json(payload): Json<TitlePayload>,
) -> Result<Json<TitlePayload>, ApiError> {
    let scheduler = state.scheduler();
    let title = {
        let mut guard = scheduler.write();
        guard.set_title(payload.title.as_deref())?;
        guard.title().to_string()
    };
    Ok(Json(TitlePayload { title: Some(title) }))
}
