//! Visibility rules for projects and tasks inside a week window.
//!
//! Two granularities with different fallbacks:
//! - projects: an absent end date means open-ended (visible once started);
//! - tasks: absent dates fall back to the project's bounds, done tasks are
//!   hidden, and overdue tasks stay on the week that contains today.

use chrono::NaiveDate;

use crate::model::{ProjectRecord, TaskRecord};
use crate::window::WeekWindow;

/// How a project's end resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectEnd {
    /// No end date. `fallback` is the start date, used for task bounds.
    OpenEnded { fallback: NaiveDate },
    Bounded(NaiveDate),
}

impl ProjectEnd {
    pub fn resolve(project: &ProjectRecord) -> Self {
        match project.end_date {
            Some(end) => ProjectEnd::Bounded(end),
            None => ProjectEnd::OpenEnded {
                fallback: project.start_date,
            },
        }
    }

    /// End date used for interval math.
    pub fn visibility_end(self) -> NaiveDate {
        match self {
            ProjectEnd::OpenEnded { fallback } => fallback,
            ProjectEnd::Bounded(end) => end,
        }
    }

    pub fn has_no_end(self) -> bool {
        matches!(self, ProjectEnd::OpenEnded { .. })
    }
}

/// How a task's dates resolve against its project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskBounds {
    /// Neither start nor end set; shown whenever the project is.
    Dateless,
    Dated {
        start: NaiveDate,
        end: NaiveDate,
        /// The task's own end date, if it had one.
        own_end: Option<NaiveDate>,
    },
}

impl TaskBounds {
    pub fn resolve(task: &TaskRecord, project_start: NaiveDate, project_end: NaiveDate) -> Self {
        if task.is_dateless() {
            return TaskBounds::Dateless;
        }
        TaskBounds::Dated {
            start: task.start_date.unwrap_or(project_start),
            end: task.end_date.unwrap_or(project_end),
            own_end: task.end_date,
        }
    }
}

pub fn project_visible(
    start: NaiveDate,
    end: NaiveDate,
    window: &WeekWindow,
    has_no_end: bool,
) -> bool {
    if has_no_end {
        return start <= window.end;
    }
    window.overlaps(start, end)
}

/// Project-level check straight from a record.
pub fn project_record_visible(project: &ProjectRecord, window: &WeekWindow) -> bool {
    let end = ProjectEnd::resolve(project);
    project_visible(project.start_date, end.visibility_end(), window, end.has_no_end())
}

/// Overdue: has an end date strictly before today.
pub fn is_overdue(task: &TaskRecord, today: NaiveDate) -> bool {
    task.end_date.map(|end| end < today).unwrap_or(false)
}

pub fn task_visible(
    task: &TaskRecord,
    window: &WeekWindow,
    project_start: NaiveDate,
    project_end: NaiveDate,
    today: NaiveDate,
) -> bool {
    if task.status.is_done() {
        return false;
    }

    match TaskBounds::resolve(task, project_start, project_end) {
        TaskBounds::Dateless => true,
        TaskBounds::Dated {
            start,
            own_end: Some(own_end),
            ..
        } if is_overdue(task, today) => window.contains(today) || window.overlaps(start, own_end),
        TaskBounds::Dated { start, end, .. } => window.overlaps(start, end),
    }
}

/// Tasks of a project visible in the window, in input order.
pub fn visible_tasks(
    project: &ProjectRecord,
    tasks: &[TaskRecord],
    window: &WeekWindow,
    today: NaiveDate,
) -> Vec<TaskRecord> {
    let project_end = ProjectEnd::resolve(project).visibility_end();
    tasks
        .iter()
        .filter(|task| task_visible(task, window, project.start_date, project_end, today))
        .cloned()
        .collect()
}
