mod support;

use support::{day, user, week, ProjectBuilder};
use weekflow::board::{build_board, UserFilter};
use weekflow::layout::LayoutMetrics;
use weekflow::model::{FlowSnapshot, TaskStatus};
use weekflow::ownership::projects_for_user;

fn snapshot() -> FlowSnapshot {
    let lead = ProjectBuilder::new("lead", day(2026, 10, 1))
        .ends(day(2026, 10, 31))
        .assignee("alice")
        .secondary("bob")
        .task_with(Some("alice"), TaskStatus::Todo, Some(day(2026, 10, 13)), None)
        .task_with(Some("bob"), TaskStatus::InProgress, None, Some(day(2026, 10, 16)))
        .task_with(Some("carol"), TaskStatus::Review, None, None);
    let side = ProjectBuilder::new("side", day(2026, 10, 5))
        .assignee("dave")
        .task_with(Some("carol"), TaskStatus::Todo, Some(day(2026, 10, 12)), Some(day(2026, 10, 12)))
        .task_with(Some("carol"), TaskStatus::Done, Some(day(2026, 10, 12)), Some(day(2026, 10, 12)));

    let mut tasks = lead.tasks();
    tasks.extend(side.tasks());
    FlowSnapshot {
        users: vec![user("alice"), user("bob"), user("carol"), user("erin")],
        projects: vec![lead.record(), side.record()],
        tasks,
    }
}

#[test]
fn ownership_slices_tasks_per_relationship() {
    let data = snapshot();

    let alice = projects_for_user(&user("alice"), &data.projects, &data.tasks);
    assert_eq!(alice.len(), 1);
    assert_eq!(alice[0].tasks.len(), 3);

    let bob = projects_for_user(&user("bob"), &data.projects, &data.tasks);
    assert_eq!(bob.len(), 1);
    assert_eq!(bob[0].tasks.len(), 1);
    assert_eq!(bob[0].tasks[0].assignee_id.as_deref(), Some("bob"));

    let carol = projects_for_user(&user("carol"), &data.projects, &data.tasks);
    let ids: Vec<&str> = carol.iter().map(|p| p.project.id.as_str()).collect();
    assert_eq!(ids, vec!["lead", "side"]);
    assert_eq!(carol[1].tasks.len(), 2);

    assert!(projects_for_user(&user("erin"), &data.projects, &data.tasks).is_empty());
}

#[test]
fn board_builds_one_row_per_user() {
    let data = snapshot();
    let board = build_board(
        &data,
        &week(),
        day(2026, 10, 14),
        &LayoutMetrics::default(),
        &UserFilter::default(),
    );

    assert_eq!(board.rows.len(), 4);
    let heights: Vec<u32> = board.rows.iter().map(|row| row.layout.height).collect();
    // alice: 3 tasks; bob: 1; carol: 1 + 1 (done task dropped); erin: empty
    assert_eq!(heights, vec![149, 81, 81 + 81, 4]);

    let carol = &board.rows[2].layout;
    assert_eq!(carol.projects[1].top_offset, 81);
    assert_eq!(carol.projects[1].tasks.len(), 1);

    let summary = board.summary();
    assert_eq!(summary.users, 4);
    assert_eq!(summary.rows_with_projects, 3);
    assert_eq!(summary.visible_projects, 4);
    assert_eq!(summary.visible_tasks, 6);
    assert_eq!(summary.total_height, 149 + 81 + 162 + 4);
}

#[test]
fn board_respects_user_filter() {
    let data = snapshot();
    let filter = UserFilter {
        user_id: Some("bob".to_string()),
        department: None,
    };
    let board = build_board(&data, &week(), day(2026, 10, 14), &LayoutMetrics::default(), &filter);
    assert_eq!(board.rows.len(), 1);
    assert_eq!(board.rows[0].user.id, "bob");

    let filter = UserFilter {
        user_id: None,
        department: Some("Sales".to_string()),
    };
    let board = build_board(&data, &week(), day(2026, 10, 14), &LayoutMetrics::default(), &filter);
    assert!(board.rows.is_empty());
}

#[test]
fn empty_snapshot_gives_empty_board() {
    let board = build_board(
        &FlowSnapshot::default(),
        &week(),
        day(2026, 10, 14),
        &LayoutMetrics::default(),
        &UserFilter::default(),
    );
    assert!(board.rows.is_empty());
    assert_eq!(board.summary().total_height, 0);
}

#[test]
fn board_json_uses_calendar_days() {
    let data = snapshot();
    let board = build_board(
        &data,
        &week(),
        day(2026, 10, 14),
        &LayoutMetrics::default(),
        &UserFilter::default(),
    );
    let value = serde_json::to_value(&board).expect("serialize");
    assert_eq!(value["window"]["start"], "2026-10-12");
    assert_eq!(value["today"], "2026-10-14");
    assert_eq!(value["rows"][0]["layout"]["projects"][0]["name"], "Project lead");
    assert_eq!(value["rows"][0]["layout"]["projects"][0]["height"], 148);
}
