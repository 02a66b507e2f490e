use crate::rows::FeedbackRow;
use crate::{DbError, Result as DbErrorResult};

use portal_core::{Feedback, FeedbackFilter, FeedbackStats, FeedbackStatus};

use uuid::Uuid;

const SELECT_FEEDBACK: &str = r#"
    SELECT id, app_id, app_name, feedback_type, title, description, priority, status,
           complexity, estimated_hours, business_value, target_date, completed_date,
           screenshots, submitted_by, created_at, updated_at
    FROM feedback
"#;

pub struct FeedbackRepository;

impl FeedbackRepository {
    pub async fn create<'e, E>(executor: E, feedback: &Feedback) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let screenshots = serde_json::to_string(&feedback.screenshots)
            .map_err(|e| DbError::decode("screenshots", e))?;

        sqlx::query(
            r#"
              INSERT INTO feedback (
                  id, app_id, app_name, feedback_type, title, description, priority, status,
                  complexity, estimated_hours, business_value, target_date, completed_date,
                  screenshots, submitted_by, created_at, updated_at
              ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
              "#,
        )
        .bind(feedback.id.to_string())
        .bind(&feedback.app_id)
        .bind(&feedback.app_name)
        .bind(feedback.feedback_type.as_str())
        .bind(&feedback.title)
        .bind(&feedback.description)
        .bind(feedback.priority.as_str())
        .bind(feedback.status.as_str())
        .bind(feedback.complexity)
        .bind(feedback.estimated_hours)
        .bind(feedback.business_value)
        .bind(feedback.target_date.map(|d| d.timestamp()))
        .bind(feedback.completed_date.map(|d| d.timestamp()))
        .bind(screenshots)
        .bind(&feedback.submitted_by)
        .bind(feedback.created_at.timestamp())
        .bind(feedback.updated_at.timestamp())
        .execute(executor)
        .await?;

        Ok(())
    }

    pub async fn find_by_id<'e, E>(executor: E, id: Uuid) -> DbErrorResult<Option<Feedback>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let sql = format!("{SELECT_FEEDBACK} WHERE id = ?");

        let row = sqlx::query_as::<_, FeedbackRow>(&sql)
            .bind(id.to_string())
            .fetch_optional(executor)
            .await?;

        row.map(Feedback::try_from).transpose()
    }

    /// Items matching every present filter field, newest first
    pub async fn find_filtered<'e, E>(
        executor: E,
        filter: &FeedbackFilter,
    ) -> DbErrorResult<Vec<Feedback>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let sql = format!(
            r#"{SELECT_FEEDBACK}
              WHERE (?1 IS NULL OR app_id = ?1)
                AND (?2 IS NULL OR status = ?2)
                AND (?3 IS NULL OR feedback_type = ?3)
              ORDER BY created_at DESC, rowid DESC
            "#
        );

        let rows = sqlx::query_as::<_, FeedbackRow>(&sql)
            .bind(filter.app_id.as_deref())
            .bind(filter.status.map(|s| s.as_str()))
            .bind(filter.feedback_type.map(|t| t.as_str()))
            .fetch_all(executor)
            .await?;

        rows.into_iter().map(Feedback::try_from).collect()
    }

    /// Persist the mutable workflow and grading fields
    pub async fn update<'e, E>(executor: E, feedback: &Feedback) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query(
            r#"
              UPDATE feedback
              SET status = ?, priority = ?, complexity = ?, estimated_hours = ?,
                  business_value = ?, target_date = ?, completed_date = ?, updated_at = ?
              WHERE id = ?
              "#,
        )
        .bind(feedback.status.as_str())
        .bind(feedback.priority.as_str())
        .bind(feedback.complexity)
        .bind(feedback.estimated_hours)
        .bind(feedback.business_value)
        .bind(feedback.target_date.map(|d| d.timestamp()))
        .bind(feedback.completed_date.map(|d| d.timestamp()))
        .bind(feedback.updated_at.timestamp())
        .bind(feedback.id.to_string())
        .execute(executor)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Feedback", feedback.id));
        }

        Ok(())
    }

    /// Hard delete; responses go with it through the foreign key cascade
    pub async fn delete<'e, E>(executor: E, id: Uuid) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query("DELETE FROM feedback WHERE id = ?")
            .bind(id.to_string())
            .execute(executor)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Feedback", id));
        }

        Ok(())
    }

    pub async fn exists<'e, E>(executor: E, id: Uuid) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let found: Option<i64> = sqlx::query_scalar("SELECT 1 FROM feedback WHERE id = ?")
            .bind(id.to_string())
            .fetch_optional(executor)
            .await?;

        Ok(found.is_some())
    }

    pub async fn count_all<'e, E>(executor: E) -> DbErrorResult<i64>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM feedback")
            .fetch_one(executor)
            .await?;

        Ok(count)
    }

    pub async fn count_by_status<'e, E>(executor: E, status: FeedbackStatus) -> DbErrorResult<i64>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM feedback WHERE status = ?")
            .bind(status.as_str())
            .fetch_one(executor)
            .await?;

        Ok(count)
    }

    /// Four independent counts; closed items only show up in the total
    pub async fn stats(pool: &sqlx::SqlitePool) -> DbErrorResult<FeedbackStats> {
        Ok(FeedbackStats {
            total: Self::count_all(pool).await?,
            open: Self::count_by_status(pool, FeedbackStatus::Open).await?,
            in_progress: Self::count_by_status(pool, FeedbackStatus::InProgress).await?,
            resolved: Self::count_by_status(pool, FeedbackStatus::Resolved).await?,
        })
    }
}
