//! Project service

use std::sync::Arc;

use shared::error::AppError;
use shared::models::{CreateProjectRequest, UpdateProjectRequest};

use crate::db::{Project, ProjectDraft, ProjectWithEmployees, RecordStore, UnitOfWork};
use crate::error::ServiceResult;

#[derive(Clone)]
pub struct ProjectService {
    store: Arc<dyn RecordStore>,
}

impl ProjectService {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    pub async fn get(&self, id: i64) -> ServiceResult<ProjectWithEmployees> {
        let mut uow = self.store.begin().await?;
        let project = find_or_not_found(uow.as_mut(), id).await?;
        with_employees(uow.as_mut(), project).await
    }

    pub async fn list(&self) -> ServiceResult<Vec<ProjectWithEmployees>> {
        let mut uow = self.store.begin().await?;
        let projects = uow.find_projects().await?;
        let mut views = Vec::with_capacity(projects.len());
        for project in projects {
            views.push(with_employees(uow.as_mut(), project).await?);
        }
        Ok(views)
    }

    pub async fn create(&self, request: CreateProjectRequest) -> ServiceResult<ProjectWithEmployees> {
        let mut uow = self.store.begin().await?;
        let project = uow
            .save_project(ProjectDraft {
                id: None,
                name: request.name,
                description: request.description,
            })
            .await?;
        uow.commit().await?;

        tracing::info!(project_id = project.id, name = %project.name, "Project created");
        Ok(ProjectWithEmployees {
            project,
            employees: Vec::new(),
        })
    }

    pub async fn update(
        &self,
        id: i64,
        request: UpdateProjectRequest,
    ) -> ServiceResult<ProjectWithEmployees> {
        let mut uow = self.store.begin().await?;
        let current = find_or_not_found(uow.as_mut(), id).await?;

        let project = uow
            .save_project(ProjectDraft {
                id: Some(current.id),
                name: request.name,
                description: request.description,
            })
            .await?;
        let view = with_employees(uow.as_mut(), project).await?;
        uow.commit().await?;

        tracing::info!(project_id = id, name = %view.project.name, "Project updated");
        Ok(view)
    }
}

async fn find_or_not_found(uow: &mut dyn UnitOfWork, id: i64) -> ServiceResult<Project> {
    match uow.find_project(id).await? {
        Some(project) => Ok(project),
        None => {
            tracing::debug!(project_id = id, "Project not found");
            Err(AppError::project_not_found(id).into())
        }
    }
}

async fn with_employees(
    uow: &mut dyn UnitOfWork,
    project: Project,
) -> ServiceResult<ProjectWithEmployees> {
    let employees = uow.find_employees_by_project(project.id).await?;
    Ok(ProjectWithEmployees { project, employees })
}
