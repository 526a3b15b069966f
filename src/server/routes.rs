//! REST endpoints for the dashboard — thin translations onto the workspace
//! store and the context router.
//!
//! Error mapping: top-level not-found and unknown parents become 404 JSON
//! payloads; the project-note delete reports `{success: bool}` with 200
//! because the dashboard's delete button treats it as best-effort cleanup.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;
use tracing::info;

use crate::assistant::planner;
use crate::assistant::{ChatContext, ContextRouter};
use crate::error::StoreError;
use crate::workspace::WorkspaceStore;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<WorkspaceStore>,
    pub router: Arc<ContextRouter>,
}

/// Build the Axum router with all dashboard REST routes.
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/dashboard", get(dashboard))
        .route("/api/courses", get(list_courses))
        .route("/api/courses/{id}", get(course_detail))
        .route("/api/courses/{id}/workflow", get(course_workflow))
        .route("/api/courses/{id}/sections", post(add_section))
        .route("/api/courses/{id}/notes", post(add_note))
        .route("/api/courses/{id}/lectures", post(save_lecture))
        .route("/api/assignments", get(list_assignments))
        .route("/api/assignments/{id}", get(assignment_detail))
        .route("/api/tasks/{id}/breakdown", post(task_breakdown))
        .route("/api/tasks/{id}/research", post(task_research))
        .route("/api/projects", get(list_projects).post(create_project))
        .route("/api/projects/{id}", get(project_detail))
        .route("/api/projects/{id}/notes", post(add_project_note))
        .route("/api/projects/{id}/notes/{note_id}", delete(delete_project_note))
        .route("/api/projects/{id}/workflow", post(add_project_step))
        .route("/api/integrations", get(list_integrations))
        .route("/api/integrations/connect", post(connect_integration))
        .route("/api/integrations/disconnect", post(disconnect_integration))
        .route("/api/files", get(list_files).post(upload_file))
        .route("/api/assistant/chat", post(chat))
        .with_state(state)
}

/// 404 body for an unresolved store reference.
fn not_found(err: &StoreError) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({"error": err.to_string()})),
    )
        .into_response()
}

// ── Health / dashboard ──────────────────────────────────────────────────

async fn health() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "study-assist"
    }))
}

async fn dashboard(State(state): State<AppState>) -> impl IntoResponse {
    let stats = state.store.dashboard_stats().await;
    let courses = state.store.list_courses().await;
    let assignments = state.store.list_assignments().await;
    Json(json!({
        "stats": stats,
        "courses": courses,
        "assignments": assignments,
    }))
}

// ── Courses ─────────────────────────────────────────────────────────────

async fn list_courses(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.store.list_courses().await)
}

async fn course_detail(State(state): State<AppState>, Path(id): Path<u64>) -> Response {
    let course = match state.store.get_course(id).await {
        Ok(course) => course,
        Err(err) => return not_found(&err),
    };
    let assignments = state.store.list_assignments_for_course(id).await;
    let custom_sections = state.store.list_sections(id).await;
    let lecture_summaries = state.store.list_lecture_summaries(id).await;
    let quizzes = state.store.list_quizzes(id).await;
    let workflow = state.store.course_workflow(id).await;
    Json(json!({
        "course": course,
        "assignments": assignments,
        "custom_sections": custom_sections,
        "lecture_summaries": lecture_summaries,
        "quizzes": quizzes,
        "workflow": workflow,
    }))
    .into_response()
}

async fn course_workflow(State(state): State<AppState>, Path(id): Path<u64>) -> Response {
    match state.store.get_course(id).await {
        Ok(course) => {
            let workflow = state.store.course_workflow(id).await;
            Json(json!({"course": course, "workflow": workflow})).into_response()
        }
        Err(err) => not_found(&err),
    }
}

#[derive(Deserialize)]
struct AddSectionRequest {
    title: String,
}

async fn add_section(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(body): Json<AddSectionRequest>,
) -> Response {
    match state.store.add_custom_section(id, body.title).await {
        Ok(section) => Json(section).into_response(),
        Err(err) => not_found(&err),
    }
}

#[derive(Deserialize)]
struct AddNoteRequest {
    section_id: u64,
    content: String,
}

async fn add_note(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(body): Json<AddNoteRequest>,
) -> Response {
    match state
        .store
        .add_note_to_section(id, body.section_id, body.content)
        .await
    {
        Ok(section) => Json(section).into_response(),
        Err(err) => not_found(&err),
    }
}

#[derive(Deserialize)]
struct SaveLectureRequest {
    transcript: String,
}

async fn save_lecture(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(body): Json<SaveLectureRequest>,
) -> Response {
    match state.store.add_lecture_summary(id, &body.transcript).await {
        Ok(summary) => Json(summary).into_response(),
        Err(err) => not_found(&err),
    }
}

// ── Assignments ─────────────────────────────────────────────────────────

async fn list_assignments(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.store.list_assignments().await)
}

async fn assignment_detail(State(state): State<AppState>, Path(id): Path<u64>) -> Response {
    match state.store.get_assignment(id).await {
        Ok(assignment) => Json(assignment).into_response(),
        Err(err) => not_found(&err),
    }
}

async fn task_breakdown(State(state): State<AppState>, Path(id): Path<u64>) -> Response {
    match state.store.get_assignment(id).await {
        Ok(assignment) => {
            let steps = planner::breakdown(&assignment);
            Json(json!({"steps": steps})).into_response()
        }
        Err(err) => not_found(&err),
    }
}

async fn task_research(State(state): State<AppState>, Path(id): Path<u64>) -> Response {
    match state.store.get_assignment(id).await {
        Ok(assignment) => {
            let resources = planner::resources(&assignment);
            Json(json!({"resources": resources})).into_response()
        }
        Err(err) => not_found(&err),
    }
}

// ── Projects ────────────────────────────────────────────────────────────

async fn list_projects(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.store.list_projects().await)
}

async fn project_detail(State(state): State<AppState>, Path(id): Path<u64>) -> Response {
    match state.store.get_project(id).await {
        Ok(project) => Json(project).into_response(),
        Err(err) => not_found(&err),
    }
}

#[derive(Deserialize)]
struct CreateProjectRequest {
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    category: String,
}

async fn create_project(
    State(state): State<AppState>,
    Json(body): Json<CreateProjectRequest>,
) -> impl IntoResponse {
    let project = state
        .store
        .create_project(body.title, body.description, body.category)
        .await;
    (StatusCode::CREATED, Json(project))
}

#[derive(Deserialize)]
struct AddProjectNoteRequest {
    content: String,
}

async fn add_project_note(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(body): Json<AddProjectNoteRequest>,
) -> Response {
    match state.store.add_project_note(id, body.content).await {
        Ok(note) => Json(note).into_response(),
        Err(err) => not_found(&err),
    }
}

async fn delete_project_note(
    State(state): State<AppState>,
    Path((id, note_id)): Path<(u64, u64)>,
) -> impl IntoResponse {
    let success = state.store.delete_project_note(id, note_id).await;
    Json(json!({"success": success}))
}

#[derive(Deserialize)]
struct AddStepRequest {
    step: String,
}

async fn add_project_step(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(body): Json<AddStepRequest>,
) -> Response {
    match state.store.add_project_step(id, body.step).await {
        Ok(step) => Json(step).into_response(),
        Err(err) => not_found(&err),
    }
}

// ── Integrations ────────────────────────────────────────────────────────

async fn list_integrations(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.store.list_services().await)
}

#[derive(Deserialize)]
struct ServiceRequest {
    service: String,
}

async fn connect_integration(
    State(state): State<AppState>,
    Json(body): Json<ServiceRequest>,
) -> impl IntoResponse {
    let success = state.store.connect_service(body.service).await;
    Json(json!({"success": success, "status": "connected"}))
}

async fn disconnect_integration(
    State(state): State<AppState>,
    Json(body): Json<ServiceRequest>,
) -> impl IntoResponse {
    let success = state.store.disconnect_service(body.service).await;
    Json(json!({"success": success, "status": "disconnected"}))
}

// ── Files ───────────────────────────────────────────────────────────────

async fn list_files(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.store.list_files().await)
}

#[derive(Deserialize)]
struct UploadRequest {
    filename: String,
}

async fn upload_file(
    State(state): State<AppState>,
    Json(body): Json<UploadRequest>,
) -> Response {
    if body.filename.trim().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "No selected file"})),
        )
            .into_response();
    }
    let record = state.store.add_file(body.filename).await;
    info!(file_id = record.id, filename = %record.filename, "File upload accepted");
    (StatusCode::CREATED, Json(record)).into_response()
}

// ── Assistant ───────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct ChatRequest {
    #[serde(default)]
    message: String,
    #[serde(default)]
    context: Option<ChatContext>,
}

async fn chat(State(state): State<AppState>, Json(body): Json<ChatRequest>) -> impl IntoResponse {
    let reply = state
        .router
        .route(&body.message, body.context.as_ref())
        .await;
    Json(reply)
}
