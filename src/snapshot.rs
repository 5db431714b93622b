//! Reading exported snapshots.
//!
//! A snapshot is one JSON document `{ "users": [...], "projects": [...],
//! "tasks": [...] }`. Any list may be missing.

use std::io;
use std::path::Path;

use crate::error::{Error, Result};
use crate::model::FlowSnapshot;

pub fn load_snapshot(path: &Path) -> Result<FlowSnapshot> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return Err(Error::SnapshotNotFound(path.to_path_buf()));
        }
        Err(err) => return Err(err.into()),
    };
    parse_snapshot(&content)
}

pub fn parse_snapshot(content: &str) -> Result<FlowSnapshot> {
    let snapshot: FlowSnapshot = serde_json::from_str(content)?;
    tracing::debug!(
        users = snapshot.users.len(),
        projects = snapshot.projects.len(),
        tasks = snapshot.tasks.len(),
        "loaded snapshot"
    );
    Ok(snapshot)
}
