//! What the CLI prints: a versioned JSON envelope for `--json`, otherwise a
//! plain-text report built up by each command.

use std::fmt;

use serde::Serialize;

use crate::error::{exit_codes, Error, Result};

pub const SCHEMA_VERSION: &str = "weekflow.v1";

#[derive(Debug, Clone, Copy)]
pub struct OutputOptions {
    pub json: bool,
    pub quiet: bool,
}

/// Plain-text report. Empty sections are left out when rendered.
#[derive(Debug, Clone)]
pub struct HumanOutput {
    header: String,
    summary: Vec<(String, String)>,
    details: Vec<String>,
    warnings: Vec<String>,
    next_steps: Vec<String>,
}

impl HumanOutput {
    pub fn new(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            summary: Vec::new(),
            details: Vec::new(),
            warnings: Vec::new(),
            next_steps: Vec::new(),
        }
    }

    /// A `key: value` line; an empty value prints the key alone.
    pub fn push_summary(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.summary.push((key.into(), value.into()));
    }

    pub fn push_detail(&mut self, value: impl Into<String>) {
        self.details.push(value.into());
    }

    pub fn push_warning(&mut self, value: impl Into<String>) {
        self.warnings.push(value.into());
    }

    pub fn push_next_step(&mut self, value: impl Into<String>) {
        self.next_steps.push(value.into());
    }
}

impl fmt::Display for HumanOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.header)?;
        let summary = self.summary.iter().map(|(key, value)| {
            if value.is_empty() {
                key.clone()
            } else {
                format!("{key}: {value}")
            }
        });
        write_section(f, "Summary", summary)?;
        write_section(f, "Details", self.details.iter().cloned())?;
        write_section(f, "Warnings", self.warnings.iter().cloned())?;
        write_section(f, "Next steps", self.next_steps.iter().cloned())
    }
}

fn write_section(
    f: &mut fmt::Formatter<'_>,
    title: &str,
    items: impl Iterator<Item = String>,
) -> fmt::Result {
    let mut items = items.peekable();
    if items.peek().is_none() {
        return Ok(());
    }
    write!(f, "\n\n{title}:")?;
    for item in items {
        write!(f, "\n- {item}")?;
    }
    Ok(())
}

pub fn format_human(output: &HumanOutput) -> String {
    output.to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    UserError,
    OperationFailed,
}

impl ErrorKind {
    pub fn of(err: &Error) -> Self {
        if err.exit_code() == exit_codes::USER_ERROR {
            ErrorKind::UserError
        } else {
            ErrorKind::OperationFailed
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
enum Status {
    Success,
    Error,
}

#[derive(Serialize)]
struct Envelope<'a, B: Serialize> {
    schema_version: &'static str,
    command: &'a str,
    status: Status,
    #[serde(flatten)]
    body: B,
    #[serde(skip_serializing_if = "no_items")]
    warnings: &'a [String],
    #[serde(skip_serializing_if = "no_items")]
    next_steps: &'a [String],
}

fn no_items(items: &&[String]) -> bool {
    items.is_empty()
}

#[derive(Serialize)]
struct Data<'a, T: Serialize> {
    data: &'a T,
}

#[derive(Serialize)]
struct Failure {
    error: FailureBody,
}

#[derive(Serialize)]
struct FailureBody {
    message: String,
    code: i32,
    kind: ErrorKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<serde_json::Value>,
}

/// JSON envelope for a successful command. Warnings and next steps come
/// from the human report when one is given.
pub fn render_success<T: Serialize>(
    command: &str,
    data: &T,
    human: Option<&HumanOutput>,
) -> Result<String> {
    let envelope = Envelope {
        schema_version: SCHEMA_VERSION,
        command,
        status: Status::Success,
        body: Data { data },
        warnings: human.map(|h| h.warnings.as_slice()).unwrap_or_default(),
        next_steps: human.map(|h| h.next_steps.as_slice()).unwrap_or_default(),
    };
    Ok(serde_json::to_string_pretty(&envelope)?)
}

pub fn render_error(command: &str, err: &Error) -> Result<String> {
    let next_steps: Vec<String> = recovery_step(err).map(str::to_string).into_iter().collect();
    let envelope = Envelope {
        schema_version: SCHEMA_VERSION,
        command,
        status: Status::Error,
        body: Failure {
            error: FailureBody {
                message: err.to_string(),
                code: err.exit_code(),
                kind: ErrorKind::of(err),
                details: err.details(),
            },
        },
        warnings: &[],
        next_steps: &next_steps,
    };
    Ok(serde_json::to_string_pretty(&envelope)?)
}

pub fn emit_success<T: Serialize>(
    options: OutputOptions,
    command: &str,
    data: &T,
    human: Option<&HumanOutput>,
) -> Result<()> {
    if options.json {
        println!("{}", render_success(command, data, human)?);
        return Ok(());
    }
    if let Some(human) = human.filter(|_| !options.quiet) {
        println!("{human}");
    }
    Ok(())
}

pub fn emit_error(command: &str, err: &Error, json: bool) -> Result<()> {
    if json {
        println!("{}", render_error(command, err)?);
        return Ok(());
    }
    eprintln!("error: {err}");
    if let Some(step) = recovery_step(err) {
        eprintln!("hint: {step}");
    }
    Ok(())
}

fn recovery_step(err: &Error) -> Option<&'static str> {
    match err {
        Error::SnapshotNotFound(_) => Some("pass an exported snapshot with --data <file>"),
        Error::InvalidDate { .. } => Some("use dates like 2026-10-12"),
        Error::InvalidConfig(_) => Some("fix .weekflow.toml then retry"),
        Error::UserNotFound(_) => Some("check the user id in the snapshot"),
        _ => None,
    }
}

/// Subcommand name for labelling error envelopes when clap never got to
/// parse it: the first positional argument, skipping `--config <path>`.
pub fn infer_command_name_from_args() -> String {
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--config" {
            args.next();
        } else if !arg.starts_with('-') {
            return arg;
        }
    }
    "weekflow".to_string()
}
