//! Stacking engine.
//!
//! Places a user's projects in a row for one window: projects that are not
//! visible, or that have no visible task, take no slot. Everything else is
//! stacked top to bottom in input order with a fixed gap.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::{FlowProject, RowLayout, VisibleProject};
use crate::visibility::{project_record_visible, visible_tasks};
use crate::window::WeekWindow;

pub const TASK_BAR_HEIGHT: u32 = 32;
pub const TASK_SPACING: u32 = 2;
pub const HEADER_HEIGHT: u32 = 36;
pub const PROJECT_PADDING: u32 = 2;
pub const PROJECT_BORDER: u32 = 2;
pub const PROJECT_GAP: u32 = 1;
pub const TASK_CONTAINER_PADDING: u32 = 2;
pub const EMPTY_ROW_HEIGHT: u32 = 4;
pub const MAX_PROJECTS_PER_ROW: usize = 10;

/// Trailing margin added below the last project.
const ROW_MARGIN: u32 = 1;

/// Pixel metrics of a row. Defaults are the production values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutMetrics {
    pub task_bar_height: u32,
    pub task_spacing: u32,
    pub header_height: u32,
    pub project_padding: u32,
    pub project_border: u32,
    pub project_gap: u32,
    pub task_container_padding: u32,
    pub empty_row_height: u32,
    pub max_projects_per_row: usize,
}

impl Default for LayoutMetrics {
    fn default() -> Self {
        Self {
            task_bar_height: TASK_BAR_HEIGHT,
            task_spacing: TASK_SPACING,
            header_height: HEADER_HEIGHT,
            project_padding: PROJECT_PADDING,
            project_border: PROJECT_BORDER,
            project_gap: PROJECT_GAP,
            task_container_padding: TASK_CONTAINER_PADDING,
            empty_row_height: EMPTY_ROW_HEIGHT,
            max_projects_per_row: MAX_PROJECTS_PER_ROW,
        }
    }
}

impl LayoutMetrics {
    /// Height of the packed task bars; zero when there are none.
    pub fn task_container_height(&self, task_count: usize) -> u32 {
        if task_count == 0 {
            return 0;
        }
        let count = u32::try_from(task_count).unwrap_or(u32::MAX);
        count
            .saturating_mul(self.task_bar_height.saturating_add(self.task_spacing))
            .saturating_add(self.task_container_padding)
    }

    /// Full project height. No minimum: it tracks content exactly.
    pub fn project_height(&self, task_count: usize) -> u32 {
        self.header_height
            .saturating_add(self.task_container_height(task_count))
            .saturating_add(self.project_padding.saturating_mul(2))
            .saturating_add(self.project_border.saturating_mul(2))
    }
}

/// Running state of the fold.
struct Stack {
    cursor: u32,
    level: usize,
    placed: Vec<VisibleProject>,
}

pub fn stack_projects(
    projects: &[FlowProject],
    window: &WeekWindow,
    today: NaiveDate,
    start_offset: u32,
    metrics: &LayoutMetrics,
) -> RowLayout {
    let considered = projects.len().min(metrics.max_projects_per_row);
    let initial = Stack {
        cursor: start_offset,
        level: 0,
        placed: Vec::new(),
    };

    let stack = projects
        .iter()
        .take(metrics.max_projects_per_row)
        .filter(|flow| project_record_visible(&flow.project, window))
        .filter_map(|flow| {
            let tasks = visible_tasks(&flow.project, &flow.tasks, window, today);
            (!tasks.is_empty()).then_some((flow, tasks))
        })
        .fold(initial, |mut stack, (flow, tasks)| {
            let height = metrics.project_height(tasks.len());
            stack.placed.push(VisibleProject {
                project: flow.project.clone(),
                tasks,
                stack_level: stack.level,
                height,
                top_offset: stack.cursor,
            });
            stack.level += 1;
            stack.cursor = stack
                .cursor
                .saturating_add(height)
                .saturating_add(metrics.project_gap);
            stack
        });

    let height = if stack.placed.is_empty() {
        metrics.empty_row_height
    } else {
        stack
            .cursor
            .saturating_sub(metrics.project_gap)
            .saturating_add(ROW_MARGIN)
    };

    tracing::debug!(
        window = %window,
        input = projects.len(),
        considered,
        included = stack.placed.len(),
        excluded = considered - stack.placed.len(),
        dropped_over_cap = projects.len() - considered,
        height,
        "stacked projects"
    );

    RowLayout {
        projects: stack.placed,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ProjectRecord, TaskRecord, TaskStatus};

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    fn week() -> WeekWindow {
        WeekWindow::new(day(2026, 10, 12), day(2026, 10, 18)).expect("window")
    }

    fn flow(id: &str, task_days: &[u32]) -> FlowProject {
        FlowProject {
            project: ProjectRecord {
                id: id.to_string(),
                name: id.to_string(),
                start_date: day(2026, 10, 12),
                end_date: Some(day(2026, 10, 14)),
                deadline: None,
                progress: 0.0,
                assignee_id: Some("u1".to_string()),
                secondary_assignee_ids: Vec::new(),
            },
            tasks: task_days
                .iter()
                .enumerate()
                .map(|(index, d)| TaskRecord {
                    id: format!("{id}-t{index}"),
                    project_id: id.to_string(),
                    title: None,
                    assignee_id: Some("u1".to_string()),
                    status: TaskStatus::Todo,
                    start_date: Some(day(2026, 10, *d)),
                    end_date: Some(day(2026, 10, *d)),
                })
                .collect(),
        }
    }

    #[test]
    fn heights_follow_task_count() {
        let metrics = LayoutMetrics::default();
        assert_eq!(metrics.task_container_height(0), 0);
        assert_eq!(metrics.task_container_height(1), 36);
        assert_eq!(metrics.project_height(0), 44);
        assert_eq!(metrics.project_height(1), 80);
        assert_eq!(metrics.project_height(3), 148);
    }

    #[test]
    fn single_project_scenario() {
        let layout = stack_projects(&[flow("p1", &[13])], &week(), day(2026, 10, 13), 0, &LayoutMetrics::default());
        assert_eq!(layout.projects.len(), 1);
        let placed = &layout.projects[0];
        assert_eq!(placed.stack_level, 0);
        assert_eq!(placed.height, 80);
        assert_eq!(placed.top_offset, 0);
        assert_eq!(layout.height, 81);
    }

    #[test]
    fn start_offset_shifts_every_project() {
        let projects = vec![flow("p1", &[13]), flow("p2", &[14, 14])];
        let layout = stack_projects(&projects, &week(), day(2026, 10, 13), 10, &LayoutMetrics::default());
        assert_eq!(layout.projects[0].top_offset, 10);
        assert_eq!(layout.projects[1].top_offset, 10 + 80 + 1);
        assert_eq!(layout.projects[1].height, 114);
        assert_eq!(layout.height, 10 + 80 + 1 + 114 + 1);
    }

    #[test]
    fn oversized_metrics_saturate() {
        let padded = LayoutMetrics {
            project_padding: 3_000_000_000,
            ..LayoutMetrics::default()
        };
        assert_eq!(padded.project_height(1), u32::MAX);

        let tall = LayoutMetrics {
            task_bar_height: u32::MAX,
            project_border: u32::MAX,
            ..LayoutMetrics::default()
        };
        assert_eq!(tall.task_container_height(2), u32::MAX);
        assert_eq!(tall.project_height(0), u32::MAX);

        let projects = vec![flow("p1", &[13]), flow("p2", &[14])];
        let layout = stack_projects(&projects, &week(), day(2026, 10, 13), u32::MAX, &padded);
        assert_eq!(layout.projects.len(), 2);
        assert_eq!(layout.projects[1].top_offset, u32::MAX);
        assert_eq!(layout.height, u32::MAX);
    }

    #[test]
    fn empty_input_gives_minimal_row() {
        let layout = stack_projects(&[], &week(), day(2026, 10, 13), 0, &LayoutMetrics::default());
        assert!(layout.is_empty());
        assert_eq!(layout.height, EMPTY_ROW_HEIGHT);
    }
}
