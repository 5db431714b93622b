//! Per-user rows for a whole board.
//!
//! Runs ownership filtering and stacking for every user in a snapshot. Rows
//! are independent; each one starts at offset zero.

use std::collections::HashSet;

use chrono::NaiveDate;
use serde::Serialize;

use crate::layout::{stack_projects, LayoutMetrics};
use crate::model::{FlowSnapshot, RowLayout, UserRecord};
use crate::ownership::{projects_for_user_grouped, tasks_by_project};
use crate::window::WeekWindow;

/// Restricts which users get a row.
#[derive(Debug, Clone, Default)]
pub struct UserFilter {
    pub user_id: Option<String>,
    pub department: Option<String>,
}

impl UserFilter {
    pub fn matches(&self, user: &UserRecord) -> bool {
        if let Some(id) = self.user_id.as_deref() {
            if user.id != id {
                return false;
            }
        }
        if let Some(department) = self.department.as_deref() {
            if !user.in_department(department) {
                return false;
            }
        }
        true
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserRow {
    pub user: UserRecord,
    pub layout: RowLayout,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BoardSummary {
    pub users: usize,
    pub rows_with_projects: usize,
    pub visible_projects: usize,
    pub visible_tasks: usize,
    pub total_height: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlowBoard {
    pub window: WeekWindow,
    #[serde(with = "crate::model::day")]
    pub today: NaiveDate,
    pub rows: Vec<UserRow>,
}

impl FlowBoard {
    pub fn summary(&self) -> BoardSummary {
        self.rows.iter().fold(
            BoardSummary {
                users: self.rows.len(),
                ..BoardSummary::default()
            },
            |mut summary, row| {
                if !row.layout.is_empty() {
                    summary.rows_with_projects += 1;
                }
                summary.visible_projects += row.layout.projects.len();
                summary.visible_tasks += row.layout.task_count();
                summary.total_height = summary.total_height.saturating_add(row.layout.height);
                summary
            },
        )
    }
}

pub fn build_board(
    snapshot: &FlowSnapshot,
    window: &WeekWindow,
    today: NaiveDate,
    metrics: &LayoutMetrics,
    filter: &UserFilter,
) -> FlowBoard {
    let known: HashSet<&str> = snapshot.projects.iter().map(|p| p.id.as_str()).collect();
    let orphans = snapshot
        .tasks
        .iter()
        .filter(|task| !known.contains(task.project_id.as_str()))
        .count();
    if orphans > 0 {
        tracing::warn!(orphans, "tasks reference unknown projects and are ignored");
    }

    let grouped = tasks_by_project(&snapshot.tasks);
    let rows: Vec<UserRow> = snapshot
        .users
        .iter()
        .filter(|user| filter.matches(user))
        .map(|user| {
            let projects = projects_for_user_grouped(user, &snapshot.projects, &grouped);
            let layout = stack_projects(&projects, window, today, 0, metrics);
            tracing::debug!(user = %user.id, owned = projects.len(), shown = layout.projects.len(), "built row");
            UserRow {
                user: user.clone(),
                layout,
            }
        })
        .collect();

    FlowBoard {
        window: *window,
        today,
        rows,
    }
}
