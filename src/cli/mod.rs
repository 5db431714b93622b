//! Command-line interface for weekflow
//!
//! This module defines the CLI structure using clap derive macros.
//! Each subcommand is defined in its own submodule.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::model::parse_day;
use crate::window::WeekWindow;

mod init;
mod layout;
mod window;

/// weekflow - week-windowed flow chart layout
///
/// Computes, per user, which projects and tasks show up in a week and how
/// they stack vertically in that user's row.
#[derive(Parser, Debug)]
#[command(name = "weekflow")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Config file (defaults to ./.weekflow.toml, then the user config)
    #[arg(long, global = true, env = "WEEKFLOW_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute row layouts for every user in a snapshot
    Layout {
        /// Snapshot file with users, projects and tasks (JSON)
        #[arg(short, long, env = "WEEKFLOW_DATA")]
        data: PathBuf,

        /// Any day inside the week to show (default: today)
        #[arg(short, long)]
        week: Option<String>,

        /// Move the window by this many weeks (negative = earlier)
        #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
        offset: i64,

        /// Day treated as today for overdue handling (default: local date)
        #[arg(long)]
        today: Option<String>,

        /// Only compute the row of this user id
        #[arg(short, long)]
        user: Option<String>,

        /// Only users of this department
        #[arg(long)]
        department: Option<String>,
    },

    /// Show the week window that would be displayed
    Window {
        /// Any day inside the week (default: today)
        #[arg(short, long)]
        week: Option<String>,

        /// Move the window by this many weeks (negative = earlier)
        #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
        offset: i64,
    },

    /// Write a default .weekflow.toml
    Init {
        /// Directory to write into (defaults to current directory)
        #[arg(long)]
        dir: Option<PathBuf>,

        /// Overwrite an existing config
        #[arg(long)]
        force: bool,
    },
}

impl Cli {
    /// Execute the CLI command
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Init { dir, force } => init::run(init::InitOptions {
                dir,
                force,
                json: self.json,
                quiet: self.quiet,
            }),
            Commands::Window { week, offset } => {
                let config = resolve_config(self.config.as_deref())?;
                window::run(window::WindowOptions {
                    week,
                    offset,
                    config,
                    json: self.json,
                    quiet: self.quiet,
                })
            }
            Commands::Layout {
                data,
                week,
                offset,
                today,
                user,
                department,
            } => {
                let config = resolve_config(self.config.as_deref())?;
                layout::run(layout::LayoutOptions {
                    data,
                    week,
                    offset,
                    today,
                    user,
                    department,
                    config,
                    json: self.json,
                    quiet: self.quiet,
                })
            }
        }
    }
}

/// An explicit `--config` must load; otherwise discover quietly.
fn resolve_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load(path),
        None => {
            let cwd = std::env::current_dir()?;
            Ok(Config::discover(&cwd))
        }
    }
}

fn local_today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub(crate) fn parse_date_arg(raw: &str) -> Result<NaiveDate> {
    parse_day(raw).ok_or_else(|| Error::InvalidDate {
        value: raw.to_string(),
    })
}

/// Resolve `--week`/`--offset` into a window.
pub(crate) fn resolve_window(week: Option<&str>, offset: i64, config: &Config) -> Result<WeekWindow> {
    let anchor = match week {
        Some(raw) => parse_date_arg(raw)?,
        None => local_today(),
    };
    WeekWindow::containing(anchor, config.window.week_starts_on)?.shifted(offset)
}

pub(crate) fn resolve_today(today: Option<&str>) -> Result<NaiveDate> {
    match today {
        Some(raw) => parse_date_arg(raw),
        None => Ok(local_today()),
    }
}
