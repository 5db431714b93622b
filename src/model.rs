//! Flow chart data model.
//!
//! Users, projects and tasks arrive pre-loaded from an exported snapshot.
//! All dates are calendar days (`NaiveDate`); timestamps in the input are
//! cut down to their day when deserialized so visibility math never sees a
//! time of day.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Task status. `Done` is terminal; unknown values are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(from = "String", into = "String")]
pub enum TaskStatus {
    #[default]
    Todo,
    InProgress,
    Review,
    Blocked,
    Done,
    Other(String),
}

impl TaskStatus {
    pub fn is_done(&self) -> bool {
        matches!(self, TaskStatus::Done)
    }

    pub fn as_str(&self) -> &str {
        match self {
            TaskStatus::Todo => "todo",
            TaskStatus::InProgress => "in_progress",
            TaskStatus::Review => "review",
            TaskStatus::Blocked => "blocked",
            TaskStatus::Done => "done",
            TaskStatus::Other(raw) => raw.as_str(),
        }
    }
}

impl From<String> for TaskStatus {
    fn from(value: String) -> Self {
        let normalized = value.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        match normalized.as_str() {
            "todo" | "open" | "new" => TaskStatus::Todo,
            "in_progress" | "inprogress" | "started" => TaskStatus::InProgress,
            "review" | "in_review" => TaskStatus::Review,
            "blocked" => TaskStatus::Blocked,
            "done" | "completed" | "closed" => TaskStatus::Done,
            _ => TaskStatus::Other(value),
        }
    }
}

impl From<&str> for TaskStatus {
    fn from(value: &str) -> Self {
        TaskStatus::from(value.to_string())
    }
}

impl From<TaskStatus> for String {
    fn from(status: TaskStatus) -> Self {
        status.as_str().to_string()
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskRecord {
    pub id: String,
    pub project_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee_id: Option<String>,
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(
        default,
        with = "day::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub start_date: Option<NaiveDate>,
    #[serde(
        default,
        with = "day::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub end_date: Option<NaiveDate>,
}

impl TaskRecord {
    pub fn is_assigned_to(&self, user_id: &str) -> bool {
        self.assignee_id.as_deref() == Some(user_id)
    }

    pub fn is_dateless(&self) -> bool {
        self.start_date.is_none() && self.end_date.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub id: String,
    pub name: String,
    #[serde(with = "day")]
    pub start_date: NaiveDate,
    #[serde(
        default,
        with = "day::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub end_date: Option<NaiveDate>,
    #[serde(
        default,
        with = "day::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub deadline: Option<NaiveDate>,
    #[serde(default)]
    pub progress: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee_id: Option<String>,
    #[serde(default, deserialize_with = "id_list::deserialize")]
    pub secondary_assignee_ids: Vec<String>,
}

impl ProjectRecord {
    pub fn is_primary_assignee(&self, user_id: &str) -> bool {
        self.assignee_id.as_deref() == Some(user_id)
    }

    pub fn is_secondary_assignee(&self, user_id: &str) -> bool {
        self.secondary_assignee_ids.iter().any(|id| id == user_id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
}

impl UserRecord {
    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.first_name.trim(), self.last_name.trim());
        let full = full.trim();
        if full.is_empty() {
            self.email.clone()
        } else {
            full.to_string()
        }
    }

    pub fn in_department(&self, department: &str) -> bool {
        self.department
            .as_deref()
            .map(|value| value.trim().eq_ignore_ascii_case(department.trim()))
            .unwrap_or(false)
    }
}

/// A project as seen by one user: the project plus the tasks that user may see.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowProject {
    #[serde(flatten)]
    pub project: ProjectRecord,
    pub tasks: Vec<TaskRecord>,
}

/// A project placed in a row: only its visible tasks, plus its slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisibleProject {
    #[serde(flatten)]
    pub project: ProjectRecord,
    pub tasks: Vec<TaskRecord>,
    pub stack_level: usize,
    pub height: u32,
    pub top_offset: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RowLayout {
    pub projects: Vec<VisibleProject>,
    pub height: u32,
}

impl RowLayout {
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn task_count(&self) -> usize {
        self.projects.iter().map(|project| project.tasks.len()).sum()
    }
}

/// Everything the input side hands over in one go.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FlowSnapshot {
    #[serde(default)]
    pub users: Vec<UserRecord>,
    #[serde(default)]
    pub projects: Vec<ProjectRecord>,
    #[serde(default)]
    pub tasks: Vec<TaskRecord>,
}

/// Parse a calendar day from `YYYY-MM-DD` or a timestamp, dropping the time.
pub fn parse_day(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(day) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Some(day);
    }
    if let Ok(stamp) = chrono::DateTime::parse_from_rfc3339(trimmed) {
        return Some(stamp.date_naive());
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"]
        .iter()
        .find_map(|format| chrono::NaiveDateTime::parse_from_str(trimmed, format).ok())
        .map(|stamp| stamp.date())
}

/// Serde adapters for calendar days.
pub mod day {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(day: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&day.format("%Y-%m-%d"))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_day(&raw)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid date '{raw}'")))
    }

    /// Optional days: null, empty and unparseable values all become `None`.
    pub mod option {
        use chrono::NaiveDate;
        use serde::{Deserialize, Deserializer, Serializer};

        pub fn serialize<S: Serializer>(
            day: &Option<NaiveDate>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match day {
                Some(day) => super::serialize(day, serializer),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Option<NaiveDate>, D::Error> {
            let raw = Option::<String>::deserialize(deserializer)?;
            let parsed = raw.as_deref().and_then(super::super::parse_day);
            if parsed.is_none() {
                if let Some(raw) = raw.as_deref().filter(|value| !value.trim().is_empty()) {
                    tracing::warn!(value = raw, "ignoring unparseable optional date");
                }
            }
            Ok(parsed)
        }
    }
}

/// Assignee id lists tolerate null, a single id, or garbage (read as empty).
mod id_list {
    use serde::de::IgnoredAny;
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum IdList {
        Many(Vec<Option<String>>),
        One(String),
        Other(#[allow(dead_code)] IgnoredAny),
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
        let ids = match Option::<IdList>::deserialize(deserializer)? {
            Some(IdList::Many(ids)) => ids.into_iter().flatten().collect(),
            Some(IdList::One(id)) => vec![id],
            Some(IdList::Other(_)) | None => Vec::new(),
        };
        Ok(ids
            .into_iter()
            .map(|id| id.trim().to_string())
            .filter(|id| !id.is_empty())
            .collect())
    }
}
