//! Which projects a user sees, and which of their tasks.
//!
//! A project belongs to a user's row when the user is its primary assignee
//! or owns at least one of its tasks. The primary assignee sees every task;
//! anyone else (secondary assignee or task owner) only sees their own.

use std::collections::HashMap;

use crate::model::{FlowProject, ProjectRecord, TaskRecord, UserRecord};

/// How a user relates to a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relationship {
    Primary,
    Secondary,
    TaskOwner,
    Unrelated,
}

pub fn relationship(user_id: &str, project: &ProjectRecord, tasks: &[&TaskRecord]) -> Relationship {
    if project.is_primary_assignee(user_id) {
        return Relationship::Primary;
    }
    let owns_task = tasks.iter().any(|task| task.is_assigned_to(user_id));
    if !owns_task {
        return Relationship::Unrelated;
    }
    if project.is_secondary_assignee(user_id) {
        Relationship::Secondary
    } else {
        Relationship::TaskOwner
    }
}

/// Group tasks by project id, keeping input order inside each group.
pub fn tasks_by_project(tasks: &[TaskRecord]) -> HashMap<&str, Vec<&TaskRecord>> {
    let mut grouped: HashMap<&str, Vec<&TaskRecord>> = HashMap::new();
    for task in tasks {
        grouped.entry(task.project_id.as_str()).or_default().push(task);
    }
    grouped
}

pub fn projects_for_user(
    user: &UserRecord,
    projects: &[ProjectRecord],
    tasks: &[TaskRecord],
) -> Vec<FlowProject> {
    let grouped = tasks_by_project(tasks);
    projects_for_user_grouped(user, projects, &grouped)
}

/// Same as [`projects_for_user`] with tasks already grouped, so a board can
/// group once for all users.
pub fn projects_for_user_grouped(
    user: &UserRecord,
    projects: &[ProjectRecord],
    grouped: &HashMap<&str, Vec<&TaskRecord>>,
) -> Vec<FlowProject> {
    let user_id = user.id.as_str();
    projects
        .iter()
        .filter_map(|project| {
            let project_tasks = grouped
                .get(project.id.as_str())
                .map(Vec::as_slice)
                .unwrap_or(&[]);
            let tasks: Vec<TaskRecord> = match relationship(user_id, project, project_tasks) {
                Relationship::Unrelated => return None,
                Relationship::Primary => project_tasks.iter().map(|task| (*task).clone()).collect(),
                Relationship::Secondary | Relationship::TaskOwner => project_tasks
                    .iter()
                    .filter(|task| task.is_assigned_to(user_id))
                    .map(|task| (*task).clone())
                    .collect(),
            };
            Some(FlowProject {
                project: project.clone(),
                tasks,
            })
        })
        .collect()
}
