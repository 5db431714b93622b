//! weekflow layout command implementation
//!
//! Loads a snapshot, builds every user's row for the chosen week and prints
//! the stacked projects.

use std::path::PathBuf;

use crate::board::{build_board, BoardSummary, FlowBoard, UserFilter, UserRow};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::output::{emit_success, HumanOutput, OutputOptions};
use crate::snapshot::load_snapshot;

/// Options for `weekflow layout`
pub struct LayoutOptions {
    pub data: PathBuf,
    pub week: Option<String>,
    pub offset: i64,
    pub today: Option<String>,
    pub user: Option<String>,
    pub department: Option<String>,
    pub config: Config,
    pub json: bool,
    pub quiet: bool,
}

#[derive(serde::Serialize)]
struct LayoutReport<'a> {
    #[serde(flatten)]
    board: &'a FlowBoard,
    summary: BoardSummary,
}

pub fn run(options: LayoutOptions) -> Result<()> {
    let window = super::resolve_window(options.week.as_deref(), options.offset, &options.config)?;
    let today = super::resolve_today(options.today.as_deref())?;
    let snapshot = load_snapshot(&options.data)?;

    if let Some(user_id) = options.user.as_deref() {
        if !snapshot.users.iter().any(|user| user.id == user_id) {
            return Err(Error::UserNotFound(user_id.to_string()));
        }
    }

    let filter = UserFilter {
        user_id: options.user.clone(),
        department: options.department.clone(),
    };
    let metrics = options.config.layout.metrics();
    let board = build_board(&snapshot, &window, today, &metrics, &filter);
    let summary = board.summary();

    let mut human = HumanOutput::new(format!("weekflow layout: {window}"));
    human.push_summary("today", today.format("%Y-%m-%d").to_string());
    human.push_summary("users", summary.users.to_string());
    human.push_summary("visible projects", summary.visible_projects.to_string());
    human.push_summary("visible tasks", summary.visible_tasks.to_string());
    human.push_summary("board height", format!("{}px", summary.total_height));
    for row in &board.rows {
        push_row(&mut human, row);
    }
    if board.rows.is_empty() {
        human.push_warning("no users matched; nothing to lay out");
    }
    human.push_next_step(format!(
        "weekflow layout --data {} --offset {}",
        options.data.display(),
        options.offset - 1
    ));
    human.push_next_step(format!(
        "weekflow layout --data {} --offset {}",
        options.data.display(),
        options.offset + 1
    ));

    let report = LayoutReport {
        board: &board,
        summary,
    };

    emit_success(
        OutputOptions {
            json: options.json,
            quiet: options.quiet,
        },
        "layout",
        &report,
        Some(&human),
    )
}

fn push_row(human: &mut HumanOutput, row: &UserRow) {
    human.push_detail(format!(
        "{} ({}): {} project(s), row {}px",
        row.user.display_name(),
        row.user.id,
        row.layout.projects.len(),
        row.layout.height
    ));
    for project in &row.layout.projects {
        let tasks: Vec<&str> = project.tasks.iter().map(|task| task.id.as_str()).collect();
        human.push_detail(format!(
            "  [{}] {} top={} height={} tasks={}",
            project.stack_level,
            project.project.name,
            project.top_offset,
            project.height,
            tasks.join(",")
        ));
    }
}
