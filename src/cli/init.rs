//! weekflow init command implementation
//!
//! Writes a `.weekflow.toml` holding the default layout metrics.

use std::path::PathBuf;

use crate::config::{Config, CONFIG_FILE};
use crate::error::Result;
use crate::output::{emit_success, HumanOutput, OutputOptions};

/// Options for `weekflow init`
pub struct InitOptions {
    pub dir: Option<PathBuf>,
    pub force: bool,
    pub json: bool,
    pub quiet: bool,
}

#[derive(serde::Serialize)]
struct InitReport {
    config: PathBuf,
    created: bool,
    overwritten: bool,
}

pub fn run(options: InitOptions) -> Result<()> {
    let dir = match options.dir {
        Some(path) => path,
        None => std::env::current_dir()?,
    };
    std::fs::create_dir_all(&dir)?;

    let path = dir.join(CONFIG_FILE);
    let existed = path.exists();
    let write = !existed || options.force;
    if write {
        Config::default().save(&path)?;
    }

    let report = InitReport {
        config: path.clone(),
        created: !existed,
        overwritten: existed && options.force,
    };

    let header = if write {
        "weekflow init: wrote default config"
    } else {
        "weekflow init: already initialized"
    };
    let mut human = HumanOutput::new(header);
    human.push_summary("config", path.display().to_string());
    if !write {
        human.push_warning(format!("{CONFIG_FILE} exists; pass --force to overwrite"));
    }
    human.push_next_step("weekflow window");

    emit_success(
        OutputOptions {
            json: options.json,
            quiet: options.quiet,
        },
        "init",
        &report,
        Some(&human),
    )
}
