#![allow(dead_code)]

use chrono::NaiveDate;
use weekflow::model::{FlowProject, ProjectRecord, TaskRecord, TaskStatus, UserRecord};
use weekflow::window::WeekWindow;

pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

/// Mon 2026-10-12 .. Sun 2026-10-18
pub fn week() -> WeekWindow {
    WeekWindow::new(day(2026, 10, 12), day(2026, 10, 18)).expect("window")
}

pub fn user(id: &str) -> UserRecord {
    UserRecord {
        id: id.to_string(),
        first_name: id.to_string(),
        last_name: "Tester".to_string(),
        email: format!("{id}@example.com"),
        department: Some("Engineering".to_string()),
    }
}

pub struct ProjectBuilder {
    project: ProjectRecord,
    tasks: Vec<TaskRecord>,
}

impl ProjectBuilder {
    pub fn new(id: &str, start: NaiveDate) -> Self {
        Self {
            project: ProjectRecord {
                id: id.to_string(),
                name: format!("Project {id}"),
                start_date: start,
                end_date: None,
                deadline: None,
                progress: 0.0,
                assignee_id: None,
                secondary_assignee_ids: Vec::new(),
            },
            tasks: Vec::new(),
        }
    }

    pub fn ends(mut self, end: NaiveDate) -> Self {
        self.project.end_date = Some(end);
        self
    }

    pub fn assignee(mut self, user_id: &str) -> Self {
        self.project.assignee_id = Some(user_id.to_string());
        self
    }

    pub fn secondary(mut self, user_id: &str) -> Self {
        self.project.secondary_assignee_ids.push(user_id.to_string());
        self
    }

    pub fn task(self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        self.task_with(None, TaskStatus::Todo, start, end)
    }

    pub fn task_with(
        mut self,
        assignee: Option<&str>,
        status: TaskStatus,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Self {
        let index = self.tasks.len();
        self.tasks.push(TaskRecord {
            id: format!("{}-t{index}", self.project.id),
            project_id: self.project.id.clone(),
            title: None,
            assignee_id: assignee.map(str::to_string),
            status,
            start_date: start,
            end_date: end,
        });
        self
    }

    pub fn record(&self) -> ProjectRecord {
        self.project.clone()
    }

    pub fn tasks(&self) -> Vec<TaskRecord> {
        self.tasks.clone()
    }

    pub fn flow(self) -> FlowProject {
        FlowProject {
            project: self.project,
            tasks: self.tasks,
        }
    }
}
