//! weekflow window command implementation

use crate::config::Config;
use crate::error::Result;
use crate::output::{emit_success, HumanOutput, OutputOptions};
use crate::window::WeekStart;

/// Options for `weekflow window`
pub struct WindowOptions {
    pub week: Option<String>,
    pub offset: i64,
    pub config: Config,
    pub json: bool,
    pub quiet: bool,
}

#[derive(serde::Serialize)]
struct WindowReport {
    #[serde(with = "crate::model::day")]
    start: chrono::NaiveDate,
    #[serde(with = "crate::model::day")]
    end: chrono::NaiveDate,
    days: i64,
    week_starts_on: WeekStart,
}

pub fn run(options: WindowOptions) -> Result<()> {
    let window = super::resolve_window(options.week.as_deref(), options.offset, &options.config)?;

    let report = WindowReport {
        start: window.start,
        end: window.end,
        days: window.days(),
        week_starts_on: options.config.window.week_starts_on,
    };

    let mut human = HumanOutput::new(format!("weekflow window: {window}"));
    human.push_summary("start", window.start.format("%a %Y-%m-%d").to_string());
    human.push_summary("end", window.end.format("%a %Y-%m-%d").to_string());
    human.push_next_step(format!(
        "weekflow layout --data <snapshot.json> --week {}",
        window.start.format("%Y-%m-%d")
    ));

    emit_success(
        OutputOptions {
            json: options.json,
            quiet: options.quiet,
        },
        "window",
        &report,
        Some(&human),
    )
}
