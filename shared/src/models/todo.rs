//! Todo Model

use serde::{Deserialize, Serialize};

/// Todo priority
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(
    feature = "db",
    derive(sqlx::Type),
    sqlx(rename_all = "SCREAMING_SNAKE_CASE")
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TodoPriority {
    Low,
    Medium,
    High,
}

impl Default for TodoPriority {
    fn default() -> Self {
        Self::Medium
    }
}

/// Todo entity — a job-scoped task item
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Todo {
    pub id: i64,
    pub job_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,

    #[serde(default)]
    pub priority: TodoPriority,

    pub created_at: i64,

    /// Stamped when `completed` flips to true
    pub completed_at: Option<i64>,
}

/// Create todo payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TodoCreate {
    pub job_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub priority: Option<TodoPriority>,
}

/// Update todo payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TodoUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub completed: Option<bool>,
    pub priority: Option<TodoPriority>,
}
