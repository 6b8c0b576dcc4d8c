//! Employee API Handlers

use axum::{Json, extract::State, http::StatusCode};
use shared::error::AppResult;
use shared::models::{CreateEmployeeRequest, EmployeeResponse, UpdateEmployeeRequest};

use crate::api::extract::{ApiPath, ValidJson};
use crate::state::AppState;

/// List all employees
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<EmployeeResponse>>> {
    let employees = state.employees.list().await?;
    Ok(Json(employees.into_iter().map(Into::into).collect()))
}

/// Get employee by id
pub async fn get_by_id(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> AppResult<Json<EmployeeResponse>> {
    let employee = state.employees.get(id).await?;
    Ok(Json(employee.into()))
}

/// Create a new employee
pub async fn create(
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<CreateEmployeeRequest>,
) -> AppResult<(StatusCode, Json<EmployeeResponse>)> {
    let employee = state.employees.create(payload).await?;
    Ok((StatusCode::CREATED, Json(employee.into())))
}

/// Update an employee
pub async fn update(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ValidJson(payload): ValidJson<UpdateEmployeeRequest>,
) -> AppResult<Json<EmployeeResponse>> {
    let employee = state.employees.update(id, payload).await?;
    Ok(Json(employee.into()))
}
