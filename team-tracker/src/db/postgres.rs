//! PostgreSQL backend

use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Postgres, Transaction};

use super::models::{Employee, EmployeeDraft, Project, ProjectDraft, ProjectRef};
use super::{RecordStore, StoreError, StoreResult, UnitOfWork};

const EMPLOYEE_SELECT: &str = r#"
    SELECT e.id, e.first_name, e.last_name, e.middle_name, e.username, e.email,
           e.project_id, p.name AS project_name
    FROM employees e
    LEFT JOIN projects p ON p.id = e.project_id
"#;

#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    /// Connect and apply pending migrations
    pub async fn connect(database_url: &str, max_connections: u32) -> StoreResult<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;
        sqlx::migrate!("./migrations").run(&pool).await?;
        tracing::info!("Database migrations applied");
        Ok(Self { pool })
    }
}

#[async_trait]
impl RecordStore for PgStore {
    async fn begin(&self) -> StoreResult<Box<dyn UnitOfWork>> {
        let tx = self.pool.begin().await?;
        Ok(Box::new(PgUnitOfWork { tx }))
    }
}

pub struct PgUnitOfWork {
    tx: Transaction<'static, Postgres>,
}

#[derive(sqlx::FromRow)]
struct EmployeeRow {
    id: i64,
    first_name: String,
    last_name: String,
    middle_name: Option<String>,
    username: String,
    email: Option<String>,
    project_id: Option<i64>,
    project_name: Option<String>,
}

impl From<EmployeeRow> for Employee {
    fn from(row: EmployeeRow) -> Self {
        let project = match (row.project_id, row.project_name) {
            (Some(id), Some(name)) => Some(ProjectRef { id, name }),
            _ => None,
        };
        Self {
            id: row.id,
            first_name: row.first_name,
            last_name: row.last_name,
            middle_name: row.middle_name,
            username: row.username,
            email: row.email,
            project,
        }
    }
}

#[derive(sqlx::FromRow)]
struct ProjectRow {
    id: i64,
    name: String,
    description: Option<String>,
}

impl From<ProjectRow> for Project {
    fn from(row: ProjectRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            description: row.description,
        }
    }
}

/// Unique and foreign-key rejections become [`StoreError::Constraint`]
fn map_write_error(err: sqlx::Error) -> StoreError {
    match err {
        sqlx::Error::Database(ref db) if db.is_unique_violation() || db.is_foreign_key_violation() => {
            StoreError::Constraint(db.message().to_string())
        }
        other => StoreError::Database(other),
    }
}

impl PgUnitOfWork {
    async fn fetch_employee(&mut self, id: i64, lock: bool) -> StoreResult<Option<Employee>> {
        let sql = if lock {
            format!("{EMPLOYEE_SELECT} WHERE e.id = $1 FOR UPDATE OF e")
        } else {
            format!("{EMPLOYEE_SELECT} WHERE e.id = $1")
        };
        let row: Option<EmployeeRow> = sqlx::query_as(&sql)
            .bind(id)
            .fetch_optional(&mut *self.tx)
            .await?;
        Ok(row.map(Employee::from))
    }
}

#[async_trait]
impl UnitOfWork for PgUnitOfWork {
    async fn find_employee(&mut self, id: i64) -> StoreResult<Option<Employee>> {
        self.fetch_employee(id, false).await
    }

    async fn find_employee_for_update(&mut self, id: i64) -> StoreResult<Option<Employee>> {
        self.fetch_employee(id, true).await
    }

    async fn find_employees(&mut self) -> StoreResult<Vec<Employee>> {
        let sql = format!("{EMPLOYEE_SELECT} ORDER BY e.id");
        let rows: Vec<EmployeeRow> = sqlx::query_as(&sql).fetch_all(&mut *self.tx).await?;
        Ok(rows.into_iter().map(Employee::from).collect())
    }

    async fn find_employees_by_project(&mut self, project_id: i64) -> StoreResult<Vec<Employee>> {
        let sql = format!("{EMPLOYEE_SELECT} WHERE e.project_id = $1 ORDER BY e.id");
        let rows: Vec<EmployeeRow> = sqlx::query_as(&sql)
            .bind(project_id)
            .fetch_all(&mut *self.tx)
            .await?;
        Ok(rows.into_iter().map(Employee::from).collect())
    }

    async fn find_project(&mut self, id: i64) -> StoreResult<Option<Project>> {
        let row: Option<ProjectRow> =
            sqlx::query_as("SELECT id, name, description FROM projects WHERE id = $1")
                .bind(id)
                .fetch_optional(&mut *self.tx)
                .await?;
        Ok(row.map(Project::from))
    }

    async fn find_projects(&mut self) -> StoreResult<Vec<Project>> {
        let rows: Vec<ProjectRow> =
            sqlx::query_as("SELECT id, name, description FROM projects ORDER BY id")
                .fetch_all(&mut *self.tx)
                .await?;
        Ok(rows.into_iter().map(Project::from).collect())
    }

    async fn save_employee(&mut self, draft: EmployeeDraft) -> StoreResult<Employee> {
        let id = match draft.id {
            Some(id) => {
                let result = sqlx::query(
                    r#"
                    UPDATE employees SET
                        first_name = $1, last_name = $2, middle_name = $3,
                        username = $4, email = $5, project_id = $6
                    WHERE id = $7
                    "#,
                )
                .bind(&draft.first_name)
                .bind(&draft.last_name)
                .bind(&draft.middle_name)
                .bind(&draft.username)
                .bind(&draft.email)
                .bind(draft.project_id)
                .bind(id)
                .execute(&mut *self.tx)
                .await
                .map_err(map_write_error)?;
                if result.rows_affected() == 0 {
                    return Err(StoreError::Missing(format!("employee {id}")));
                }
                id
            }
            None => {
                let (id,): (i64,) = sqlx::query_as(
                    r#"
                    INSERT INTO employees
                        (first_name, last_name, middle_name, username, email, project_id)
                    VALUES ($1, $2, $3, $4, $5, $6)
                    RETURNING id
                    "#,
                )
                .bind(&draft.first_name)
                .bind(&draft.last_name)
                .bind(&draft.middle_name)
                .bind(&draft.username)
                .bind(&draft.email)
                .bind(draft.project_id)
                .fetch_one(&mut *self.tx)
                .await
                .map_err(map_write_error)?;
                id
            }
        };

        // Read back with the joined project name
        self.fetch_employee(id, false)
            .await?
            .ok_or_else(|| StoreError::Missing(format!("employee {id}")))
    }

    async fn save_project(&mut self, draft: ProjectDraft) -> StoreResult<Project> {
        let row: Option<ProjectRow> = match draft.id {
            Some(id) => sqlx::query_as(
                r#"
                UPDATE projects SET name = $1, description = $2
                WHERE id = $3
                RETURNING id, name, description
                "#,
            )
            .bind(&draft.name)
            .bind(&draft.description)
            .bind(id)
            .fetch_optional(&mut *self.tx)
            .await
            .map_err(map_write_error)?,
            None => sqlx::query_as(
                r#"
                INSERT INTO projects (name, description)
                VALUES ($1, $2)
                RETURNING id, name, description
                "#,
            )
            .bind(&draft.name)
            .bind(&draft.description)
            .fetch_optional(&mut *self.tx)
            .await
            .map_err(map_write_error)?,
        };

        row.map(Project::from)
            .ok_or_else(|| StoreError::Missing(format!("project {:?}", draft.id)))
    }

    async fn commit(self: Box<Self>) -> StoreResult<()> {
        self.tx.commit().await?;
        Ok(())
    }
}
