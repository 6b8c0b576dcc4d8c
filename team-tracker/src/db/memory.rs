//! In-memory backend
//!
//! A unit of work holds the table lock for its whole lifetime. Its first
//! write takes a private copy of the tables; `commit` publishes the copy,
//! drop discards it.
//! Constraints mirror the SQL schema: unique username, email and project
//! name, plus the employee → project foreign key.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::{Mutex, OwnedMutexGuard};

use super::models::{Employee, EmployeeDraft, Project, ProjectDraft, ProjectRef};
use super::{RecordStore, StoreError, StoreResult, UnitOfWork};

#[derive(Debug, Clone)]
struct EmployeeRecord {
    first_name: String,
    last_name: String,
    middle_name: Option<String>,
    username: String,
    email: Option<String>,
    project_id: Option<i64>,
}

#[derive(Debug, Clone, Default)]
struct Tables {
    employees: BTreeMap<i64, EmployeeRecord>,
    projects: BTreeMap<i64, Project>,
    next_employee_id: i64,
    next_project_id: i64,
}

impl Tables {
    fn hydrate(&self, id: i64, record: &EmployeeRecord) -> Employee {
        let project = record.project_id.and_then(|pid| {
            self.projects.get(&pid).map(|p| ProjectRef {
                id: p.id,
                name: p.name.clone(),
            })
        });
        Employee {
            id,
            first_name: record.first_name.clone(),
            last_name: record.last_name.clone(),
            middle_name: record.middle_name.clone(),
            username: record.username.clone(),
            email: record.email.clone(),
            project,
        }
    }

    fn check_employee(&self, id: Option<i64>, draft: &EmployeeDraft) -> StoreResult<()> {
        let others = self
            .employees
            .iter()
            .filter(|(eid, _)| Some(**eid) != id)
            .map(|(_, e)| e);
        for other in others {
            if other.username == draft.username {
                return Err(StoreError::Constraint(format!(
                    "duplicate username: {}",
                    draft.username
                )));
            }
            if draft.email.is_some() && other.email == draft.email {
                return Err(StoreError::Constraint(format!(
                    "duplicate email: {}",
                    draft.email.as_deref().unwrap_or_default()
                )));
            }
        }
        match draft.project_id {
            Some(pid) if !self.projects.contains_key(&pid) => Err(StoreError::Constraint(
                format!("employee references missing project {pid}"),
            )),
            _ => Ok(()),
        }
    }
}

/// Operation counters, read by tests to observe store traffic
#[derive(Debug, Default)]
pub struct StoreStats {
    employee_lookups: AtomicUsize,
    project_lookups: AtomicUsize,
    employee_saves: AtomicUsize,
    project_saves: AtomicUsize,
    commits: AtomicUsize,
    working_copies: AtomicUsize,
}

impl StoreStats {
    pub fn employee_lookups(&self) -> usize {
        self.employee_lookups.load(Ordering::SeqCst)
    }

    pub fn project_lookups(&self) -> usize {
        self.project_lookups.load(Ordering::SeqCst)
    }

    pub fn employee_saves(&self) -> usize {
        self.employee_saves.load(Ordering::SeqCst)
    }

    pub fn project_saves(&self) -> usize {
        self.project_saves.load(Ordering::SeqCst)
    }

    pub fn commits(&self) -> usize {
        self.commits.load(Ordering::SeqCst)
    }

    /// Units of work that copied the tables for writing
    pub fn working_copies(&self) -> usize {
        self.working_copies.load(Ordering::SeqCst)
    }

    fn bump(counter: &AtomicUsize) {
        counter.fetch_add(1, Ordering::SeqCst);
    }
}

#[derive(Clone, Default)]
pub struct MemoryStore {
    tables: Arc<Mutex<Tables>>,
    stats: Arc<StoreStats>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stats(&self) -> &StoreStats {
        &self.stats
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn begin(&self) -> StoreResult<Box<dyn UnitOfWork>> {
        let guard = self.tables.clone().lock_owned().await;
        Ok(Box::new(MemoryUnitOfWork {
            guard,
            working: None,
            stats: self.stats.clone(),
        }))
    }
}

/// Reads go to the locked tables until the first write, which takes a
/// private copy; read-only units of work never copy.
pub struct MemoryUnitOfWork {
    guard: OwnedMutexGuard<Tables>,
    working: Option<Tables>,
    stats: Arc<StoreStats>,
}

impl MemoryUnitOfWork {
    fn tables(&self) -> &Tables {
        self.working.as_ref().unwrap_or(&*self.guard)
    }

    fn tables_mut(&mut self) -> &mut Tables {
        if self.working.is_none() {
            StoreStats::bump(&self.stats.working_copies);
        }
        let guard = &self.guard;
        self.working.get_or_insert_with(|| (**guard).clone())
    }
}

#[async_trait]
impl UnitOfWork for MemoryUnitOfWork {
    async fn find_employee(&mut self, id: i64) -> StoreResult<Option<Employee>> {
        StoreStats::bump(&self.stats.employee_lookups);
        let tables = self.tables();
        Ok(tables
            .employees
            .get(&id)
            .map(|record| tables.hydrate(id, record)))
    }

    async fn find_employees(&mut self) -> StoreResult<Vec<Employee>> {
        let tables = self.tables();
        Ok(tables
            .employees
            .iter()
            .map(|(id, record)| tables.hydrate(*id, record))
            .collect())
    }

    async fn find_employees_by_project(&mut self, project_id: i64) -> StoreResult<Vec<Employee>> {
        let tables = self.tables();
        Ok(tables
            .employees
            .iter()
            .filter(|(_, record)| record.project_id == Some(project_id))
            .map(|(id, record)| tables.hydrate(*id, record))
            .collect())
    }

    async fn find_project(&mut self, id: i64) -> StoreResult<Option<Project>> {
        StoreStats::bump(&self.stats.project_lookups);
        Ok(self.tables().projects.get(&id).cloned())
    }

    async fn find_projects(&mut self) -> StoreResult<Vec<Project>> {
        Ok(self.tables().projects.values().cloned().collect())
    }

    async fn save_employee(&mut self, draft: EmployeeDraft) -> StoreResult<Employee> {
        StoreStats::bump(&self.stats.employee_saves);
        self.tables().check_employee(draft.id, &draft)?;

        let tables = self.tables_mut();
        let id = match draft.id {
            Some(id) if tables.employees.contains_key(&id) => id,
            Some(id) => return Err(StoreError::Missing(format!("employee {id}"))),
            None => {
                tables.next_employee_id += 1;
                tables.next_employee_id
            }
        };
        let record = EmployeeRecord {
            first_name: draft.first_name,
            last_name: draft.last_name,
            middle_name: draft.middle_name,
            username: draft.username,
            email: draft.email,
            project_id: draft.project_id,
        };
        let employee = tables.hydrate(id, &record);
        tables.employees.insert(id, record);
        Ok(employee)
    }

    async fn save_project(&mut self, draft: ProjectDraft) -> StoreResult<Project> {
        StoreStats::bump(&self.stats.project_saves);
        let duplicate = self
            .tables()
            .projects
            .values()
            .any(|p| Some(p.id) != draft.id && p.name == draft.name);
        if duplicate {
            return Err(StoreError::Constraint(format!(
                "duplicate project name: {}",
                draft.name
            )));
        }

        let tables = self.tables_mut();
        let id = match draft.id {
            Some(id) if tables.projects.contains_key(&id) => id,
            Some(id) => return Err(StoreError::Missing(format!("project {id}"))),
            None => {
                tables.next_project_id += 1;
                tables.next_project_id
            }
        };
        let project = Project {
            id,
            name: draft.name,
            description: draft.description,
        };
        tables.projects.insert(id, project.clone());
        Ok(project)
    }

    async fn commit(self: Box<Self>) -> StoreResult<()> {
        let MemoryUnitOfWork {
            mut guard,
            working,
            stats,
        } = *self;
        if let Some(working) = working {
            *guard = working;
        }
        StoreStats::bump(&stats.commits);
        Ok(())
    }
}
