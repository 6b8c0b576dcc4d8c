//! Employee service
//!
//! Every operation runs in one unit of work. Updates load the employee as a
//! snapshot, reconcile it against the request into an [`EmployeeDraft`], and
//! persist only the draft.

use std::sync::Arc;

use shared::error::AppError;
use shared::models::{CreateEmployeeRequest, UpdateEmployeeRequest};

use super::relationship::{ProjectAction, resolve};
use crate::db::{Employee, EmployeeDraft, RecordStore, UnitOfWork};
use crate::error::ServiceResult;

/// Build the draft that replaces `current`.
///
/// Scalar fields are overwritten from the request; the username is kept.
/// The project reference changes only when resolution says so, and an
/// attach target must exist in the store.
pub async fn reconcile(
    uow: &mut dyn UnitOfWork,
    current: &Employee,
    request: &UpdateEmployeeRequest,
) -> ServiceResult<EmployeeDraft> {
    let mut draft = EmployeeDraft::from_snapshot(current);
    draft.first_name = request.first_name.clone();
    draft.last_name = request.last_name.clone();
    draft.middle_name = request.middle_name.clone();
    draft.email = request.email.clone();

    match resolve(current.project_id(), request.project_id) {
        ProjectAction::NoOp => {}
        ProjectAction::Attach(project_id) => {
            let project = require_project(uow, project_id).await?;
            draft.project_id = Some(project.id);
        }
        ProjectAction::Detach => draft.project_id = None,
    }

    Ok(draft)
}

async fn require_project(uow: &mut dyn UnitOfWork, id: i64) -> ServiceResult<crate::db::Project> {
    match uow.find_project(id).await? {
        Some(project) => Ok(project),
        None => {
            tracing::debug!(project_id = id, "Project not found");
            Err(AppError::project_not_found(id).into())
        }
    }
}

#[derive(Clone)]
pub struct EmployeeService {
    store: Arc<dyn RecordStore>,
}

impl EmployeeService {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    pub async fn get(&self, id: i64) -> ServiceResult<Employee> {
        let mut uow = self.store.begin().await?;
        match uow.find_employee(id).await? {
            Some(employee) => Ok(employee),
            None => {
                tracing::debug!(employee_id = id, "Employee not found");
                Err(AppError::employee_not_found(id).into())
            }
        }
    }

    pub async fn list(&self) -> ServiceResult<Vec<Employee>> {
        let mut uow = self.store.begin().await?;
        Ok(uow.find_employees().await?)
    }

    pub async fn create(&self, request: CreateEmployeeRequest) -> ServiceResult<Employee> {
        let mut uow = self.store.begin().await?;

        let project_id = match request.project_id {
            Some(id) => Some(require_project(uow.as_mut(), id).await?.id),
            None => None,
        };
        let draft = EmployeeDraft {
            id: None,
            first_name: request.first_name,
            last_name: request.last_name,
            middle_name: request.middle_name,
            username: request.username,
            email: request.email,
            project_id,
        };

        let employee = uow.save_employee(draft).await?;
        uow.commit().await?;

        tracing::info!(
            employee_id = employee.id,
            project_id = ?employee.project_id(),
            "Employee created"
        );
        Ok(employee)
    }

    pub async fn update(&self, id: i64, request: UpdateEmployeeRequest) -> ServiceResult<Employee> {
        let mut uow = self.store.begin().await?;

        let current = match uow.find_employee_for_update(id).await? {
            Some(employee) => employee,
            None => {
                tracing::debug!(employee_id = id, "Employee not found");
                return Err(AppError::employee_not_found(id).into());
            }
        };

        let action = resolve(current.project_id(), request.project_id);
        let draft = reconcile(uow.as_mut(), &current, &request).await?;
        let employee = uow.save_employee(draft).await?;
        uow.commit().await?;

        tracing::info!(
            employee_id = employee.id,
            project_id = ?employee.project_id(),
            action = ?action,
            "Employee updated"
        );
        Ok(employee)
    }
}
