//! Project API Handlers

use axum::{Json, extract::State, http::StatusCode};
use shared::error::AppResult;
use shared::models::{CreateProjectRequest, ProjectResponse, UpdateProjectRequest};

use crate::api::extract::{ApiPath, ValidJson};
use crate::state::AppState;

/// List all projects with their employees
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<ProjectResponse>>> {
    let projects = state.projects.list().await?;
    Ok(Json(projects.into_iter().map(Into::into).collect()))
}

/// Get project by id
pub async fn get_by_id(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> AppResult<Json<ProjectResponse>> {
    let project = state.projects.get(id).await?;
    Ok(Json(project.into()))
}

/// Create a new project
pub async fn create(
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<CreateProjectRequest>,
) -> AppResult<(StatusCode, Json<ProjectResponse>)> {
    let project = state.projects.create(payload).await?;
    Ok((StatusCode::CREATED, Json(project.into())))
}

/// Update a project's name and description
pub async fn update(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ValidJson(payload): ValidJson<UpdateProjectRequest>,
) -> AppResult<Json<ProjectResponse>> {
    let project = state.projects.update(id, payload).await?;
    Ok(Json(project.into()))
}
