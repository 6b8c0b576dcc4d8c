//! Employee → Project relationship resolution

/// What to do with an employee's project reference
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectAction {
    /// Reference unchanged; no project lookup needed
    NoOp,
    /// Point at this project (must exist)
    Attach(i64),
    /// Clear the reference
    Detach,
}

/// Compare the current project id against the requested one.
///
/// Equality is null-safe: two absent ids are equal.
pub fn resolve(current: Option<i64>, requested: Option<i64>) -> ProjectAction {
    if current == requested {
        return ProjectAction::NoOp;
    }
    match requested {
        Some(id) => ProjectAction::Attach(id),
        None => ProjectAction::Detach,
    }
}
