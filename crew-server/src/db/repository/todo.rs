//! Todo Repository

use super::{RepoError, RepoResult};
use shared::models::{Todo, TodoCreate, TodoPriority, TodoUpdate};
use sqlx::SqlitePool;

pub async fn find_by_job(pool: &SqlitePool, job_id: i64) -> RepoResult<Vec<Todo>> {
    let rows = sqlx::query_as::<_, Todo>(
        "SELECT id, job_id, title, description, completed, priority, created_at, completed_at FROM todo WHERE job_id = ? ORDER BY created_at",
    )
    .bind(job_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Todo>> {
    let row = sqlx::query_as::<_, Todo>(
        "SELECT id, job_id, title, description, completed, priority, created_at, completed_at FROM todo WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

pub async fn create(pool: &SqlitePool, data: TodoCreate) -> RepoResult<Todo> {
    let now = shared::util::now_millis();
    let priority = data.priority.unwrap_or_default();
    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO todo (job_id, title, description, completed, priority, created_at) VALUES (?1, ?2, ?3, 0, ?4, ?5) RETURNING id",
    )
    .bind(data.job_id)
    .bind(data.title)
    .bind(data.description)
    .bind(priority)
    .bind(now)
    .fetch_one(pool)
    .await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create todo".into()))
}

/// Patch a todo; flipping `completed` to true stamps `completed_at`,
/// flipping it back clears the stamp
pub async fn update(pool: &SqlitePool, id: i64, data: TodoUpdate) -> RepoResult<Todo> {
    let now = shared::util::now_millis();
    let completed_at: Option<i64> = match data.completed {
        Some(true) => Some(now),
        _ => None,
    };
    let priority: Option<TodoPriority> = data.priority;

    let rows = sqlx::query(
        "UPDATE todo SET title = COALESCE(?1, title), description = COALESCE(?2, description), priority = COALESCE(?3, priority), completed = COALESCE(?4, completed), completed_at = CASE WHEN ?4 IS NULL THEN completed_at WHEN ?4 THEN ?5 ELSE NULL END WHERE id = ?6",
    )
    .bind(data.title)
    .bind(data.description)
    .bind(priority)
    .bind(data.completed)
    .bind(completed_at)
    .bind(id)
    .execute(pool)
    .await?;

    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Todo {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Todo {id} not found")))
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let rows = sqlx::query("DELETE FROM todo WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected() > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::testing::seeded_pool;

    #[tokio::test]
    async fn completing_a_todo_stamps_completed_at() {
        let pool = seeded_pool().await;
        let todo = create(
            &pool,
            TodoCreate {
                job_id: 1,
                title: "Order decking boards".into(),
                description: None,
                priority: Some(TodoPriority::High),
            },
        )
        .await
        .unwrap();
        assert!(!todo.completed);
        assert!(todo.completed_at.is_none());

        let done = update(
            &pool,
            todo.id,
            TodoUpdate {
                title: None,
                description: None,
                completed: Some(true),
                priority: None,
            },
        )
        .await
        .unwrap();
        assert!(done.completed);
        assert!(done.completed_at.is_some());

        // Reopening clears the stamp
        let reopened = update(
            &pool,
            todo.id,
            TodoUpdate {
                title: None,
                description: None,
                completed: Some(false),
                priority: None,
            },
        )
        .await
        .unwrap();
        assert!(!reopened.completed);
        assert!(reopened.completed_at.is_none());
    }
}
